pub mod center;
pub mod left;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Каркас приложения:
/// ```text
/// +------------------------------+
/// |          TopHeader           |
/// +------------------------------+
/// |  Sidebar  |     Content      |
/// +------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let sidebar_open = RwSignal::new(true);

    view! {
        <div class="app-layout">
            <TopHeader sidebar_open=sidebar_open />

            <div class="app-body">
                <left::Left is_open=sidebar_open>
                    <left::Sidebar />
                </left::Left>

                <div class="app-main">
                    <center::Center>{children()}</center::Center>
                </div>
            </div>
        </div>
    }
}
