mod state;

use contracts::domain::a006_ticket::Ticket;
use contracts::enums::{TicketPriority, TicketStatus};
use leptos::prelude::*;
use thaw::*;

use super::details::TicketDetails;
use crate::domain::a006_ticket::api;
use crate::shared::components::filter_panel::FilterSelect;
use crate::shared::components::list_page::{
    sort_bindings, ListFilters, ListPageHeader, ListTableBody, RowActions,
};
use crate::shared::components::status_badge::LabelBadge;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::format::{format_datetime, or_dash};
use crate::shared::http::RequestScope;
use crate::shared::list_utils::highlighted;
use state::{create_screen, ENTITY};

fn priority_color(priority: &TicketPriority) -> BadgeColor {
    match priority {
        TicketPriority::Low => BadgeColor::Subtle,
        TicketPriority::Medium => BadgeColor::Informative,
        TicketPriority::High => BadgeColor::Warning,
        TicketPriority::Urgent => BadgeColor::Danger,
        TicketPriority::Unknown(_) => BadgeColor::Subtle,
    }
}

fn status_color(status: &TicketStatus) -> BadgeColor {
    match status {
        TicketStatus::Open => BadgeColor::Brand,
        TicketStatus::InProgress => BadgeColor::Warning,
        TicketStatus::Resolved => BadgeColor::Success,
        TicketStatus::Closed => BadgeColor::Subtle,
        TicketStatus::Unknown(_) => BadgeColor::Subtle,
    }
}

#[component]
pub fn TicketsListPage() -> impl IntoView {
    let screen = create_screen();
    let scope = RequestScope::new();
    let snapshot = screen.snapshot();

    let load_data = move || screen.load(api::fetch_tickets(scope));
    load_data();

    let (sort, on_sort) = sort_bindings(screen);

    let on_saved = Callback::new(move |edit_id: Option<String>| {
        screen.close_modal();
        match edit_id {
            Some(id) => screen.refresh_one(api::fetch_ticket(scope, id)),
            None => load_data(),
        }
    });

    let render_row = move |ticket: Ticket, term: String| {
        let edit_id = ticket.id.clone();
        let delete_id = ticket.id.clone();
        let delete_name = ticket.subject.clone();
        let hl_0 = highlighted(ticket.subject.clone(), term.clone());
        let hl_1 = highlighted(ticket.customer_name.clone(), term.clone());
        let hl_2 = highlighted(or_dash(ticket.assignee.as_deref()), term.clone());
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
                    <LabelBadge label=ticket.priority.label() color=priority_color(&ticket.priority) />
                </TableCell>
                <TableCell>
                    <LabelBadge label=ticket.status.label() color=status_color(&ticket.status) />
                </TableCell>
                <TableCell>
                    <TableCellLayout truncate=true>
                        {hl_2}
                    </TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout>{format_datetime(&ticket.created_at)}</TableCellLayout>
                </TableCell>
                <RowActions
                    on_edit=Callback::new(move |_| screen.open_edit(edit_id.clone()))
                    on_delete=Callback::new(move |_| {
                        screen.confirm_delete(
                            delete_id.clone(),
                            delete_name.clone(),
                            move |id| api::delete_ticket(scope, id),
                        )
                    })
                />
            </TableRow>
        }
    };

    view! {
        <div class="page">
            <ListPageHeader
                title="Phiếu hỗ trợ"
                screen=screen
                snapshot=snapshot
                entity=ENTITY
                on_refresh=Callback::new(move |_| load_data())
            />

            <div class="page__content">
                <ListFilters
                    screen=screen
                    snapshot=snapshot
                    search_placeholder="Tiêu đề, khách hàng hoặc người xử lý..."
                >
                    <FilterSelect
                        label="Mức ưu tiên"
                        value=screen.filter_value("priority")
                        options=TicketPriority::options()
                        on_change=Callback::new(move |v: String| screen.set_filter("priority", v))
                    />
                    <FilterSelect
                        label="Trạng thái"
                        value=screen.filter_value("status")
                        options=TicketStatus::options()
                        on_change=Callback::new(move |v: String| screen.set_filter("status", v))
                    />
                </ListFilters>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Tiêu đề" field="subject" sort=sort on_sort=on_sort min_width=220.0 />
                                <SortableHeaderCell label="Khách hàng" field="customer_name" sort=sort on_sort=on_sort min_width=160.0 />
                                <SortableHeaderCell label="Ưu tiên" field="priority" sort=sort on_sort=on_sort />
                                <SortableHeaderCell label="Trạng thái" field="status" sort=sort on_sort=on_sort />
                                <SortableHeaderCell label="Người xử lý" field="assignee" sort=sort on_sort=on_sort />
                                <SortableHeaderCell label="Ngày tạo" field="created_at" sort=sort on_sort=on_sort min_width=140.0 />
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
                    <TicketDetails
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
