mod state;

use contracts::domain::a005_deal::Deal;
use contracts::enums::DealStage;
use leptos::prelude::*;
use thaw::*;

use super::details::DealDetails;
use crate::domain::a005_deal::api;
use crate::shared::components::filter_panel::FilterSelect;
use crate::shared::components::list_page::{
    sort_bindings, ListFilters, ListPageHeader, ListTableBody, RowActions,
};
use crate::shared::components::status_badge::LabelBadge;
use crate::shared::components::table::{SortableHeaderCell, TableCellMoney};
use crate::shared::format::{format_date, or_dash};
use crate::shared::http::RequestScope;
use crate::shared::list_utils::highlighted;
use state::{create_screen, ENTITY};

fn stage_color(stage: &DealStage) -> BadgeColor {
    match stage {
        DealStage::New => BadgeColor::Informative,
        DealStage::Negotiation => BadgeColor::Warning,
        DealStage::Won => BadgeColor::Success,
        DealStage::Lost => BadgeColor::Danger,
        DealStage::Unknown(_) => BadgeColor::Subtle,
    }
}

#[component]
pub fn DealsListPage() -> impl IntoView {
    let screen = create_screen();
    let scope = RequestScope::new();
    let snapshot = screen.snapshot();

    let load_data = move || screen.load(api::fetch_deals(scope));
    load_data();

    let (sort, on_sort) = sort_bindings(screen);

    let on_saved = Callback::new(move |edit_id: Option<String>| {
        screen.close_modal();
        match edit_id {
            Some(id) => screen.refresh_one(api::fetch_deal(scope, id)),
            None => load_data(),
        }
    });

    let render_row = move |deal: Deal, term: String| {
        let edit_id = deal.id.clone();
        let delete_id = deal.id.clone();
        let delete_name = deal.title.clone();
        let close_date = deal
            .expected_close_date
            .as_deref()
            .map(format_date)
            .unwrap_or_else(|| or_dash(None));
        let hl_0 = highlighted(deal.title.clone(), term.clone());
        let hl_1 = highlighted(deal.customer_name.clone(), term.clone());
        let hl_2 = highlighted(or_dash(deal.owner.as_deref()), term.clone());
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
                <TableCellMoney value=deal.amount bold=true />
                <TableCell>
                    <LabelBadge label=deal.stage.label() color=stage_color(&deal.stage) />
                </TableCell>
                <TableCell>
                    <TableCellLayout truncate=true>
                        {hl_2}
                    </TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout>{close_date}</TableCellLayout>
                </TableCell>
                <RowActions
                    on_edit=Callback::new(move |_| screen.open_edit(edit_id.clone()))
                    on_delete=Callback::new(move |_| {
                        screen.confirm_delete(
                            delete_id.clone(),
                            delete_name.clone(),
                            move |id| api::delete_deal(scope, id),
                        )
                    })
                />
            </TableRow>
        }
    };

    view! {
        <div class="page">
            <ListPageHeader
                title="Giao dịch"
                screen=screen
                snapshot=snapshot
                entity=ENTITY
                on_refresh=Callback::new(move |_| load_data())
            />

            <div class="page__content">
                <ListFilters
                    screen=screen
                    snapshot=snapshot
                    search_placeholder="Tên giao dịch, khách hàng hoặc người phụ trách..."
                >
                    <FilterSelect
                        label="Giai đoạn"
                        value=screen.filter_value("stage")
                        options=DealStage::options()
                        on_change=Callback::new(move |v: String| screen.set_filter("stage", v))
                    />
                </ListFilters>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Giao dịch" field="title" sort=sort on_sort=on_sort min_width=200.0 />
                                <SortableHeaderCell label="Khách hàng" field="customer_name" sort=sort on_sort=on_sort min_width=160.0 />
                                <SortableHeaderCell label="Giá trị" field="amount" sort=sort on_sort=on_sort align="right" />
                                <SortableHeaderCell label="Giai đoạn" field="stage" sort=sort on_sort=on_sort />
                                <SortableHeaderCell label="Phụ trách" field="owner" sort=sort on_sort=on_sort />
                                <SortableHeaderCell label="Dự kiến chốt" field="expected_close_date" sort=sort on_sort=on_sort />
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
                    <DealDetails
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
