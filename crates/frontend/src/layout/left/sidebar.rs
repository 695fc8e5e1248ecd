//! Боковое меню с раскрывающимися группами

use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (path, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "sales",
            label: "Kinh doanh",
            icon: "deals",
            items: vec![
                ("/customers", "Khách hàng", "customers"),
                ("/deals", "Giao dịch", "deals"),
                ("/tickets", "Phiếu hỗ trợ", "tickets"),
            ],
        },
        MenuGroup {
            id: "catalog",
            label: "Sản phẩm",
            icon: "services",
            items: vec![
                ("/services", "Dịch vụ", "services"),
                ("/addons", "Tiện ích", "addons"),
            ],
        },
        MenuGroup {
            id: "hr",
            label: "Nhân sự",
            icon: "salary-contracts",
            items: vec![("/salary-contracts", "Hợp đồng lương", "salary-contracts")],
        },
        MenuGroup {
            id: "system",
            label: "Hệ thống",
            icon: "users",
            items: vec![("/users", "Người dùng", "users")],
        },
    ]
}

/// Пункт меню активен для своего пути и вложенных путей
fn is_active_path(pathname: &str, item_path: &str) -> bool {
    pathname == item_path
        || pathname
            .strip_prefix(item_path)
            .map(|rest| rest.starts_with('/'))
            .unwrap_or(false)
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();
    let groups = get_menu_groups();
    let expanded_groups = RwSignal::new(groups.iter().map(|g| g.id).collect::<Vec<_>>());

    view! {
        <nav class="app-sidebar__content">
            {groups.into_iter().map(|group| {
                let group_id = group.id;
                let items_stored = StoredValue::new(group.items.clone());
                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                expanded_groups.update(|items| {
                                    if let Some(pos) = items.iter().position(|x| *x == group_id) {
                                        items.remove(pos);
                                    } else {
                                        items.push(group_id);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.with(|g| g.contains(&group_id))
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.with(|g| g.contains(&group_id))>
                            <div class="app-sidebar__children">
                                {items_stored.get_value().into_iter().map(|(path, label, icon_name)| {
                                    let pathname = location.pathname;
                                    view! {
                                        <A href=path attr:class=move || {
                                            if pathname.with(|p| is_active_path(p, path)) {
                                                "app-sidebar__item app-sidebar__item--active"
                                            } else {
                                                "app-sidebar__item"
                                            }
                                        }>
                                            <div class="app-sidebar__item-content" style:padding-left="10px">
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </div>
                                        </A>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_active_path() {
        assert!(is_active_path("/customers", "/customers"));
        assert!(is_active_path("/customers/c-1", "/customers"));
        assert!(!is_active_path("/customers-archive", "/customers"));
        assert!(!is_active_path("/", "/customers"));
    }

    #[test]
    fn test_every_menu_item_is_a_route() {
        let paths: Vec<_> = get_menu_groups()
            .into_iter()
            .flat_map(|g| g.items.into_iter().map(|(path, _, _)| path))
            .collect();
        for path in crate::routes::routes::SCREEN_PATHS {
            assert!(paths.contains(path), "{} is missing from the menu", path);
        }
    }
}
