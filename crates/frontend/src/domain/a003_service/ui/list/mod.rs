mod state;

use contracts::domain::a003_service::Service;
use contracts::domain::common::STATUS_OPTIONS;
use contracts::enums::{BillingCycle, ServiceCategory};
use leptos::prelude::*;
use thaw::*;

use super::details::ServiceDetails;
use crate::domain::a003_service::api;
use crate::shared::components::filter_panel::FilterSelect;
use crate::shared::components::list_page::{
    sort_bindings, ListFilters, ListPageHeader, ListTableBody, RowActions,
};
use crate::shared::components::status_badge::{LabelBadge, StatusBadge};
use crate::shared::components::table::{SortableHeaderCell, TableCellMoney};
use crate::shared::http::RequestScope;
use crate::shared::list_utils::highlighted;
use state::{create_screen, ENTITY};

#[component]
pub fn ServicesListPage() -> impl IntoView {
    let screen = create_screen();
    let scope = RequestScope::new();
    let snapshot = screen.snapshot();

    let load_data = move || screen.load(api::fetch_services(scope));
    load_data();

    let (sort, on_sort) = sort_bindings(screen);

    let on_saved = Callback::new(move |edit_id: Option<String>| {
        screen.close_modal();
        match edit_id {
            Some(id) => screen.refresh_one(api::fetch_service(scope, id)),
            None => load_data(),
        }
    });

    let render_row = move |service: Service, term: String| {
        let edit_id = service.id.clone();
        let delete_id = service.id.clone();
        let delete_name = service.name.clone();
        view! {
            <TableRow>
                <TableCell>
                    <TableCellLayout truncate=true>
                        <span style="font-weight: 500;">{highlighted(service.name.clone(), term.clone())}</span>
                        {service.description.clone().map(|d| view! {
                            <div class="table__secondary-text">{highlighted(d, term.clone())}</div>
                        })}
                    </TableCellLayout>
                </TableCell>
                <TableCell>
                    <LabelBadge label=service.category.label() color=BadgeColor::Informative />
                </TableCell>
                <TableCellMoney value=service.price bold=true />
                <TableCell>
                    <TableCellLayout>{service.billing_cycle.label().to_string()}</TableCellLayout>
                </TableCell>
                <TableCell>
                    <StatusBadge is_active=service.is_active />
                </TableCell>
                <RowActions
                    on_edit=Callback::new(move |_| screen.open_edit(edit_id.clone()))
                    on_delete=Callback::new(move |_| {
                        screen.confirm_delete(
                            delete_id.clone(),
                            delete_name.clone(),
                            move |id| api::delete_service(scope, id),
                        )
                    })
                />
            </TableRow>
        }
    };

    view! {
        <div class="page">
            <ListPageHeader
                title="Dịch vụ"
                screen=screen
                snapshot=snapshot
                entity=ENTITY
                on_refresh=Callback::new(move |_| load_data())
            />

            <div class="page__content">
                <ListFilters screen=screen snapshot=snapshot search_placeholder="Tên, mô tả hoặc danh mục...">
                    <FilterSelect
                        label="Danh mục"
                        value=screen.filter_value("category")
                        options=ServiceCategory::options()
                        on_change=Callback::new(move |v: String| screen.set_filter("category", v))
                    />
                    <FilterSelect
                        label="Chu kỳ thanh toán"
                        value=screen.filter_value("billing_cycle")
                        options=BillingCycle::options()
                        on_change=Callback::new(move |v: String| screen.set_filter("billing_cycle", v))
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
                                <SortableHeaderCell label="Dịch vụ" field="name" sort=sort on_sort=on_sort min_width=240.0 />
                                <SortableHeaderCell label="Danh mục" field="category" sort=sort on_sort=on_sort />
                                <SortableHeaderCell label="Giá" field="price" sort=sort on_sort=on_sort align="right" />
                                <SortableHeaderCell label="Chu kỳ" field="billing_cycle" sort=sort on_sort=on_sort />
                                <SortableHeaderCell label="Trạng thái" field="status" sort=sort on_sort=on_sort />
                                <TableHeaderCell min_width=90.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <ListTableBody
                            screen=screen
                            snapshot=snapshot
                            entity=ENTITY
                            column_count=6
                            render_row=render_row
                        />
                    </Table>
                </div>
            </div>

            {move || screen.modal.get().map(|target| {
                let initial = target.edit_id().and_then(|id| screen.find(&id));
                view! {
                    <ServiceDetails
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
