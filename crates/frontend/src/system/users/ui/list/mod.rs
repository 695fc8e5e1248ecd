mod state;

use contracts::domain::common::STATUS_OPTIONS;
use contracts::enums::UserRole;
use contracts::system::users::User;
use leptos::prelude::*;
use thaw::*;

use super::details::UserDetails;
use crate::shared::components::filter_panel::FilterSelect;
use crate::shared::components::list_page::{
    sort_bindings, ListFilters, ListPageHeader, ListTableBody, RowActions,
};
use crate::shared::components::status_badge::{LabelBadge, StatusBadge};
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::format::{format_date, format_datetime, or_dash};
use crate::shared::http::RequestScope;
use crate::shared::list_utils::highlighted;
use crate::system::users::api;
use state::{create_screen, ENTITY};

fn role_color(role: &UserRole) -> BadgeColor {
    match role {
        UserRole::Staff => BadgeColor::Informative,
        UserRole::Manager => BadgeColor::Warning,
        UserRole::Admin => BadgeColor::Danger,
        UserRole::Unknown(_) => BadgeColor::Subtle,
    }
}

fn last_login_label(last_login_at: Option<&str>) -> String {
    match last_login_at {
        Some(at) if !at.trim().is_empty() => format_datetime(at),
        _ => "Chưa đăng nhập".to_string(),
    }
}

#[component]
pub fn UsersListPage() -> impl IntoView {
    let screen = create_screen();
    let scope = RequestScope::new();
    let snapshot = screen.snapshot();

    let load_data = move || screen.load(api::fetch_users(scope));
    load_data();

    let (sort, on_sort) = sort_bindings(screen);

    let on_saved = Callback::new(move |edit_id: Option<String>| {
        screen.close_modal();
        match edit_id {
            Some(id) => screen.refresh_one(api::fetch_user(scope, id)),
            None => load_data(),
        }
    });

    let render_row = move |user: User, term: String| {
        let edit_id = user.id.clone();
        let delete_id = user.id.clone();
        let delete_name = user.username.clone();
        let hl_0 = highlighted(user.username.clone(), term.clone());
        let hl_1 = highlighted(or_dash(user.full_name.as_deref()), term.clone());
        let hl_2 = highlighted(or_dash(user.email.as_deref()), term.clone());
        view! {
            <TableRow>
                <TableCell>
                    <TableCellLayout truncate=true>
                        <span style="font-weight: 500;">{hl_0}</span>
                    </TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout truncate=true>
                        {hl_1}
                    </TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout truncate=true>
                        {hl_2}
                    </TableCellLayout>
                </TableCell>
                <TableCell>
                    <LabelBadge label=user.role.label() color=role_color(&user.role) />
                </TableCell>
                <TableCell>
                    <StatusBadge is_active=user.is_active />
                </TableCell>
                <TableCell>
                    <TableCellLayout>{format_date(&user.created_at)}</TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout>{last_login_label(user.last_login_at.as_deref())}</TableCellLayout>
                </TableCell>
                <RowActions
                    on_edit=Callback::new(move |_| screen.open_edit(edit_id.clone()))
                    on_delete=Callback::new(move |_| {
                        screen.confirm_delete(
                            delete_id.clone(),
                            delete_name.clone(),
                            move |id| api::delete_user(scope, id),
                        )
                    })
                />
            </TableRow>
        }
    };

    view! {
        <div class="page">
            <ListPageHeader
                title="Người dùng"
                screen=screen
                snapshot=snapshot
                entity=ENTITY
                on_refresh=Callback::new(move |_| load_data())
            />

            <div class="page__content">
                <ListFilters
                    screen=screen
                    snapshot=snapshot
                    search_placeholder="Tên đăng nhập, họ tên hoặc email..."
                >
                    <FilterSelect
                        label="Vai trò"
                        value=screen.filter_value("role")
                        options=UserRole::options()
                        on_change=Callback::new(move |v: String| screen.set_filter("role", v))
                    />
                    <FilterSelect
                        label="Trạng thái"
                        value=screen.filter_value("status")
                        options=STATUS_OPTIONS.to_vec()
                        on_change=Callback::new(move |v: String| screen.set_filter("status", v))
                    />
                </ListFilters>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Tên đăng nhập" field="username" sort=sort on_sort=on_sort min_width=140.0 />
                                <SortableHeaderCell label="Họ tên" field="full_name" sort=sort on_sort=on_sort min_width=160.0 />
                                <SortableHeaderCell label="Email" field="email" sort=sort on_sort=on_sort min_width=180.0 />
                                <SortableHeaderCell label="Vai trò" field="role" sort=sort on_sort=on_sort />
                                <SortableHeaderCell label="Trạng thái" field="is_active" sort=sort on_sort=on_sort />
                                <SortableHeaderCell label="Ngày tạo" field="created_at" sort=sort on_sort=on_sort />
                                <SortableHeaderCell label="Đăng nhập gần nhất" field="last_login_at" sort=sort on_sort=on_sort min_width=150.0 />
                                <TableHeaderCell min_width=90.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <ListTableBody
                            screen=screen
                            snapshot=snapshot
                            entity=ENTITY
                            column_count=8
                            render_row=render_row
                        />
                    </Table>
                </div>
            </div>

            {move || screen.modal.get().map(|target| {
                let initial = target.edit_id().and_then(|id| screen.find(&id));
                view! {
                    <UserDetails
                        target=target
                        initial=initial
                        on_close=Callback::new(move |_| screen.close_modal())
                        on_saved=on_saved
                    />
                }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_login_label() {
        assert_eq!(last_login_label(None), "Chưa đăng nhập");
        assert_eq!(last_login_label(Some("")), "Chưa đăng nhập");
        assert_eq!(last_login_label(Some("2024-05-01T08:15:00Z")), "01/05/2024 08:15");
    }
}
