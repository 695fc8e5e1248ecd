mod state;

use contracts::domain::a001_customer::Customer;
use contracts::domain::common::STATUS_OPTIONS;
use contracts::enums::CustomerType;
use leptos::prelude::*;
use thaw::*;

use super::details::CustomerDetails;
use crate::domain::a001_customer::api;
use crate::shared::components::filter_panel::FilterSelect;
use crate::shared::components::list_page::{
    sort_bindings, ListFilters, ListPageHeader, ListTableBody, RowActions,
};
use crate::shared::components::status_badge::{LabelBadge, StatusBadge};
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::format::{format_date, or_dash};
use crate::shared::http::RequestScope;
use crate::shared::list_utils::highlighted;
use state::{create_screen, ENTITY};

fn type_color(customer_type: &CustomerType) -> BadgeColor {
    match customer_type {
        CustomerType::Individual => BadgeColor::Informative,
        CustomerType::Business => BadgeColor::Brand,
        CustomerType::Unknown(_) => BadgeColor::Subtle,
    }
}

#[component]
pub fn CustomersListPage() -> impl IntoView {
    let screen = create_screen();
    let scope = RequestScope::new();
    let snapshot = screen.snapshot();

    let load_data = move || screen.load(api::fetch_customers(scope));
    load_data();

    let (sort, on_sort) = sort_bindings(screen);

    let on_saved = Callback::new(move |edit_id: Option<String>| {
        screen.close_modal();
        match edit_id {
            Some(id) => screen.refresh_one(api::fetch_customer(scope, id)),
            None => load_data(),
        }
    });

    let render_row = move |customer: Customer, term: String| {
        let edit_id = customer.id.clone();
        let delete_id = customer.id.clone();
        let delete_name = customer.name.clone();
        let hl_0 = highlighted(customer.name.clone(), term.clone());
        let hl_1 = highlighted(or_dash(customer.email.as_deref()), term.clone());
        let hl_2 = highlighted(or_dash(customer.phone.as_deref()), term.clone());
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
                    <LabelBadge
                        label=customer.customer_type.label()
                        color=type_color(&customer.customer_type)
                    />
                </TableCell>
                <TableCell>
                    <StatusBadge is_active=customer.is_active />
                </TableCell>
                <TableCell>
                    <TableCellLayout>{format_date(&customer.created_at)}</TableCellLayout>
                </TableCell>
                <RowActions
                    on_edit=Callback::new(move |_| screen.open_edit(edit_id.clone()))
                    on_delete=Callback::new(move |_| {
                        screen.confirm_delete(
                            delete_id.clone(),
                            delete_name.clone(),
                            move |id| api::delete_customer(scope, id),
                        )
                    })
                />
            </TableRow>
        }
    };

    view! {
        <div class="page">
            <ListPageHeader
                title="Khách hàng"
                screen=screen
                snapshot=snapshot
                entity=ENTITY
                on_refresh=Callback::new(move |_| load_data())
            />

            <div class="page__content">
                <ListFilters
                    screen=screen
                    snapshot=snapshot
                    search_placeholder="Tên, email hoặc số điện thoại..."
                >
                    <FilterSelect
                        label="Loại khách hàng"
                        value=screen.filter_value("type")
                        options=CustomerType::options()
                        on_change=Callback::new(move |v: String| screen.set_filter("type", v))
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
                                <SortableHeaderCell label="Tên" field="name" sort=sort on_sort=on_sort min_width=180.0 />
                                <SortableHeaderCell label="Email" field="email" sort=sort on_sort=on_sort min_width=180.0 />
                                <SortableHeaderCell label="Điện thoại" field="phone" sort=sort on_sort=on_sort min_width=120.0 />
                                <SortableHeaderCell label="Loại" field="type" sort=sort on_sort=on_sort />
                                <SortableHeaderCell label="Trạng thái" field="status" sort=sort on_sort=on_sort />
                                <SortableHeaderCell label="Ngày tạo" field="created_at" sort=sort on_sort=on_sort />
                                <TableHeaderCell min_width=90.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <ListTableBody
                            screen=screen
                            snapshot=snapshot
                            entity=ENTITY
                            column_count=7
                            render_row=render_row
                        />
                    </Table>
                </div>
            </div>

            {move || screen.modal.get().map(|target| {
                let initial = target.edit_id().and_then(|id| screen.find(&id));
                view! {
                    <CustomerDetails
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
