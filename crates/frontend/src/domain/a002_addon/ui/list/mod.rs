mod state;

use contracts::domain::a002_addon::Addon;
use contracts::domain::common::STATUS_OPTIONS;
use contracts::enums::AddonType;
use leptos::prelude::*;
use thaw::*;

use super::details::AddonDetails;
use crate::domain::a002_addon::api;
use crate::shared::components::filter_panel::FilterSelect;
use crate::shared::components::list_page::{
    sort_bindings, ListFilters, ListPageHeader, ListTableBody, RowActions,
};
use crate::shared::components::status_badge::{LabelBadge, StatusBadge};
use crate::shared::components::table::{SortableHeaderCell, TableCellMoney};
use crate::shared::format::or_dash;
use crate::shared::http::RequestScope;
use crate::shared::list_utils::highlighted;
use state::{create_screen, ENTITY};

fn type_color(addon_type: &AddonType) -> BadgeColor {
    match addon_type {
        AddonType::Feature => BadgeColor::Brand,
        AddonType::Storage => BadgeColor::Informative,
        AddonType::Support => BadgeColor::Success,
        AddonType::Integration => BadgeColor::Warning,
        AddonType::Unknown(_) => BadgeColor::Subtle,
    }
}

#[component]
pub fn AddonsListPage() -> impl IntoView {
    let screen = create_screen();
    let scope = RequestScope::new();
    let snapshot = screen.snapshot();

    let load_data = move || screen.load(api::fetch_addons(scope));
    load_data();

    let (sort, on_sort) = sort_bindings(screen);

    let on_saved = Callback::new(move |edit_id: Option<String>| {
        screen.close_modal();
        match edit_id {
            Some(id) => screen.refresh_one(api::fetch_addon(scope, id)),
            None => load_data(),
        }
    });

    let render_row = move |addon: Addon, term: String| {
        let edit_id = addon.id.clone();
        let delete_id = addon.id.clone();
        let delete_name = addon.name.clone();
        let hl_0 = highlighted(addon.name.clone(), term.clone());
        let hl_1 = highlighted(or_dash(addon.description.as_deref()), term.clone());
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
                    <LabelBadge label=addon.addon_type.label() color=type_color(&addon.addon_type) />
                </TableCell>
                <TableCellMoney value=addon.price />
                <TableCell>
                    <StatusBadge is_active=addon.is_active />
                </TableCell>
                <RowActions
                    on_edit=Callback::new(move |_| screen.open_edit(edit_id.clone()))
                    on_delete=Callback::new(move |_| {
                        screen.confirm_delete(
                            delete_id.clone(),
                            delete_name.clone(),
                            move |id| api::delete_addon(scope, id),
                        )
                    })
                />
            </TableRow>
        }
    };

    view! {
        <div class="page">
            <ListPageHeader
                title="Tiện ích"
                screen=screen
                snapshot=snapshot
                entity=ENTITY
                on_refresh=Callback::new(move |_| load_data())
            />

            <div class="page__content">
                <ListFilters screen=screen snapshot=snapshot search_placeholder="Tên hoặc mô tả tiện ích...">
                    <FilterSelect
                        label="Loại tiện ích"
                        value=screen.filter_value("type")
                        options=AddonType::options()
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
                                <TableHeaderCell min_width=220.0>"Mô tả"</TableHeaderCell>
                                <SortableHeaderCell label="Loại" field="type" sort=sort on_sort=on_sort />
                                <SortableHeaderCell label="Giá" field="price" sort=sort on_sort=on_sort align="right" />
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
                    <AddonDetails
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
