use leptos::prelude::*;

/// Заголовок экрана списка с кнопками действий справа
#[component]
pub fn PageHeader(
    /// Название экрана
    #[prop(into)]
    title: String,

    /// Подзаголовок, например количество записей
    #[prop(into)]
    subtitle: Signal<String>,

    /// Кнопки действий
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__text">
                <h1 class="page-header__title">{title}</h1>
                <div class="page-header__subtitle">{move || subtitle.get()}</div>
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}
