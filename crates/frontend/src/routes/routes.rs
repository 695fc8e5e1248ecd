use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::domain::a001_customer::ui::list::CustomersListPage;
use crate::domain::a002_addon::ui::list::AddonsListPage;
use crate::domain::a003_service::ui::list::ServicesListPage;
use crate::domain::a004_salary_contract::ui::list::SalaryContractsListPage;
use crate::domain::a005_deal::ui::list::DealsListPage;
use crate::domain::a006_ticket::ui::list::TicketsListPage;
use crate::layout::Shell;
use crate::system::users::ui::list::UsersListPage;

/// Пути экранов; "/" перенаправляет на первый
pub const SCREEN_PATHS: &[&str] = &[
    "/customers",
    "/users",
    "/addons",
    "/services",
    "/salary-contracts",
    "/deals",
    "/tickets",
];

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <div class="alert alert--error">"Không tìm thấy trang"</div>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=|| view! { <Redirect path=SCREEN_PATHS[0] /> } />
                    <Route path=path!("/customers") view=CustomersListPage />
                    <Route path=path!("/users") view=UsersListPage />
                    <Route path=path!("/addons") view=AddonsListPage />
                    <Route path=path!("/services") view=ServicesListPage />
                    <Route path=path!("/salary-contracts") view=SalaryContractsListPage />
                    <Route path=path!("/deals") view=DealsListPage />
                    <Route path=path!("/tickets") view=TicketsListPage />
                </Routes>
            </Shell>
        </Router>
    }
}
