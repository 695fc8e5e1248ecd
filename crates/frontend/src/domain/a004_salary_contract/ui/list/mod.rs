mod state;

use contracts::domain::a004_salary_contract::SalaryContract;
use contracts::enums::ContractStatus;
use leptos::prelude::*;
use thaw::*;

use super::details::SalaryContractDetails;
use crate::domain::a004_salary_contract::api;
use crate::shared::components::filter_panel::FilterSelect;
use crate::shared::components::list_page::{
    sort_bindings, ListFilters, ListPageHeader, ListTableBody, RowActions,
};
use crate::shared::components::status_badge::LabelBadge;
use crate::shared::components::table::{SortableHeaderCell, TableCellMoney};
use crate::shared::format::format_date;
use crate::shared::http::RequestScope;
use crate::shared::list_utils::highlighted;
use state::{create_screen, ENTITY};

fn status_color(status: &ContractStatus) -> BadgeColor {
    match status {
        ContractStatus::Active => BadgeColor::Success,
        ContractStatus::Expired => BadgeColor::Warning,
        ContractStatus::Terminated => BadgeColor::Danger,
        ContractStatus::Unknown(_) => BadgeColor::Subtle,
    }
}

#[component]
pub fn SalaryContractsListPage() -> impl IntoView {
    let screen = create_screen();
    let scope = RequestScope::new();
    let snapshot = screen.snapshot();

    let load_data = move || screen.load(api::fetch_contracts(scope));
    load_data();

    let (sort, on_sort) = sort_bindings(screen);

    let on_saved = Callback::new(move |edit_id: Option<String>| {
        screen.close_modal();
        match edit_id {
            Some(id) => screen.refresh_one(api::fetch_contract(scope, id)),
            None => load_data(),
        }
    });

    let render_row = move |contract: SalaryContract, term: String| {
        let edit_id = contract.id.clone();
        let delete_id = contract.id.clone();
        let delete_name = contract.employee_name.clone();
        let total = contract.total_salary();
        let hl_0 = highlighted(contract.employee_name.clone(), term.clone());
        let hl_1 = highlighted(contract.position.clone(), term.clone());
        view! {
            <TableRow>
                <TableCell>
                    <TableCellLayout truncate=true>
                        <span style="font-weight: 500;">
                            {hl_0}
                        </span>
                    </TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout truncate=true>{hl_1}</TableCellLayout>
                </TableCell>
                <TableCellMoney value=contract.base_salary />
                <TableCellMoney value=total bold=true />
                <TableCell>
                    <TableCellLayout>{format_date(&contract.start_date)}</TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout>
                        {contract.end_date.as_deref().map(format_date).unwrap_or_else(|| "—".to_string())}
                    </TableCellLayout>
                </TableCell>
                <TableCell>
                    <LabelBadge label=contract.status.label() color=status_color(&contract.status) />
                </TableCell>
                <RowActions
                    on_edit=Callback::new(move |_| screen.open_edit(edit_id.clone()))
                    on_delete=Callback::new(move |_| {
                        screen.confirm_delete(
                            delete_id.clone(),
                            delete_name.clone(),
                            move |id| api::delete_contract(scope, id),
                        )
                    })
                />
            </TableRow>
        }
    };

    view! {
        <div class="page">
            <ListPageHeader
                title="Hợp đồng lương"
                screen=screen
                snapshot=snapshot
                entity=ENTITY
                on_refresh=Callback::new(move |_| load_data())
            />

            <div class="page__content">
                <ListFilters screen=screen snapshot=snapshot search_placeholder="Tên nhân viên hoặc vị trí...">
                    <FilterSelect
                        label="Trạng thái"
                        value=screen.filter_value("status")
                        options=ContractStatus::options()
                        on_change=Callback::new(move |v: String| screen.set_filter("status", v))
                    />
                </ListFilters>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Nhân viên" field="employee_name" sort=sort on_sort=on_sort min_width=180.0 />
                                <SortableHeaderCell label="Vị trí" field="position" sort=sort on_sort=on_sort min_width=140.0 />
                                <SortableHeaderCell label="Lương cơ bản" field="base_salary" sort=sort on_sort=on_sort align="right" />
                                <SortableHeaderCell label="Tổng lương" field="total_salary" sort=sort on_sort=on_sort align="right" />
                                <SortableHeaderCell label="Bắt đầu" field="start_date" sort=sort on_sort=on_sort />
                                <SortableHeaderCell label="Kết thúc" field="end_date" sort=sort on_sort=on_sort />
                                <SortableHeaderCell label="Trạng thái" field="status" sort=sort on_sort=on_sort />
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
                    <SalaryContractDetails
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
