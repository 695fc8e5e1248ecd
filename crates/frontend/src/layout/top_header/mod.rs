//! Верхняя панель: переключатель меню и название приложения

use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader(sidebar_open: RwSignal<bool>) -> impl IntoView {
    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| sidebar_open.update(|open| *open = !*open)
                    title=move || if sidebar_open.get() { "Ẩn menu" } else { "Hiện menu" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Quản trị doanh nghiệp"</span>
            </div>
        </div>
    }
}
