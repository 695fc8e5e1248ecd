use crate::routes::routes::AppRoutes;
use crate::shared::notify::NotificationHost;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <AppRoutes />
            <NotificationHost />
        </ConfigProvider>
    }
}
