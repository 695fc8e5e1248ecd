use contracts::domain::a006_ticket::{Ticket, TicketForm};
use contracts::enums::{TicketPriority, TicketStatus};
use contracts::shared::form::FormLifecycle;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a006_ticket::api;
use crate::shared::components::ui;
use crate::shared::form_modal::{field_error, modal_title, submit_form, FormFooter, ServerErrorAlert};
use crate::shared::http::RequestScope;
use crate::shared::list_screen::ModalTarget;
use crate::shared::modal::Modal;

const ENTITY: &str = "phiếu hỗ trợ";

#[component]
pub fn TicketDetails(
    target: ModalTarget,
    initial: Option<Ticket>,
    on_close: Callback<()>,
    on_saved: Callback<Option<String>>,
) -> impl IntoView {
    let scope = RequestScope::new();
    let edit_id = match (&target, &initial) {
        (ModalTarget::Edit(id), Some(_)) => Some(id.as_str()),
        _ => None,
    };
    let lifecycle = RwSignal::new(FormLifecycle::for_record(edit_id));
    let form = RwSignal::new(initial.as_ref().map(TicketForm::from).unwrap_or_default());
    let saving = Signal::derive(move || lifecycle.with(|l| l.is_saving()));

    let save = Callback::new(move |_| {
        submit_form(
            lifecycle,
            form.get_untracked().normalized(),
            ENTITY,
            move |id, form| async move {
                match id {
                    Some(id) => api::update_ticket(scope, id, form).await,
                    None => api::create_ticket(scope, form).await,
                }
            },
            on_saved,
        )
    });

    view! {
        <Modal
            title=Signal::derive(move || lifecycle.with(|l| modal_title(l, ENTITY)))
            on_close=on_close
            busy=saving
        >
            <ServerErrorAlert lifecycle=lifecycle />

            <ui::Input
                label="Tiêu đề"
                required=true
                value=Signal::derive(move || form.with(|f| f.subject.clone()))
                on_input=Callback::new(move |v: String| form.update(|f| f.subject = v))
                error=field_error(lifecycle, "subject")
                disabled=saving
            />
            <ui::Input
                label="Khách hàng"
                required=true
                value=Signal::derive(move || form.with(|f| f.customer_name.clone()))
                on_input=Callback::new(move |v: String| form.update(|f| f.customer_name = v))
                error=field_error(lifecycle, "customer_name")
                disabled=saving
            />
            <Flex gap=FlexGap::Medium>
                <ui::Select
                    label="Mức ưu tiên"
                    value=Signal::derive(move || form.with(|f| f.priority.code().to_string()))
                    options=ui::owned_options(&TicketPriority::options())
                    on_change=Callback::new(move |v: String| {
                        if let Some(p) = TicketPriority::from_code(&v) {
                            form.update(|f| f.priority = p);
                        }
                    })
                    disabled=saving
                />
                <ui::Select
                    label="Trạng thái"
                    value=Signal::derive(move || form.with(|f| f.status.code().to_string()))
                    options=ui::owned_options(&TicketStatus::options())
                    on_change=Callback::new(move |v: String| {
                        if let Some(s) = TicketStatus::from_code(&v) {
                            form.update(|f| f.status = s);
                        }
                    })
                    disabled=saving
                />
            </Flex>
            <ui::Input
                label="Người xử lý"
                value=Signal::derive(move || form.with(|f| f.assignee.clone().unwrap_or_default()))
                on_input=Callback::new(move |v: String| form.update(|f| f.assignee = Some(v)))
                disabled=saving
            />

            <FormFooter lifecycle=lifecycle on_cancel=on_close on_save=save />
        </Modal>
    }
}
