use contracts::domain::a005_deal::{Deal, DealForm};
use contracts::enums::DealStage;
use contracts::shared::form::FormLifecycle;
use leptos::prelude::*;

use crate::domain::a005_deal::api;
use crate::shared::components::ui;
use crate::shared::form_modal::{field_error, modal_title, submit_form, FormFooter, ServerErrorAlert};
use crate::shared::format::date_input_value;
use crate::shared::http::RequestScope;
use crate::shared::list_screen::ModalTarget;
use crate::shared::modal::Modal;

const ENTITY: &str = "giao dịch";

#[component]
pub fn DealDetails(
    target: ModalTarget,
    initial: Option<Deal>,
    on_close: Callback<()>,
    on_saved: Callback<Option<String>>,
) -> impl IntoView {
    let scope = RequestScope::new();
    let edit_id = match (&target, &initial) {
        (ModalTarget::Edit(id), Some(_)) => Some(id.as_str()),
        _ => None,
    };
    let lifecycle = RwSignal::new(FormLifecycle::for_record(edit_id));
    let form = RwSignal::new(initial.as_ref().map(DealForm::from).unwrap_or_default());
    let saving = Signal::derive(move || lifecycle.with(|l| l.is_saving()));

    let save = Callback::new(move |_| {
        submit_form(
            lifecycle,
            form.get_untracked().normalized(),
            ENTITY,
            move |id, form| async move {
                match id {
                    Some(id) => api::update_deal(scope, id, form).await,
                    None => api::create_deal(scope, form).await,
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
                label="Tên giao dịch"
                required=true
                value=Signal::derive(move || form.with(|f| f.title.clone()))
                on_input=Callback::new(move |v: String| form.update(|f| f.title = v))
                error=field_error(lifecycle, "title")
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
            <ui::AmountInput
                label="Giá trị"
                value=Signal::derive(move || form.with(|f| f.amount))
                on_change=Callback::new(move |v: i64| form.update(|f| f.amount = v))
                error=field_error(lifecycle, "amount")
                disabled=saving
            />
            <ui::Select
                label="Giai đoạn"
                value=Signal::derive(move || form.with(|f| f.stage.code().to_string()))
                options=ui::owned_options(&DealStage::options())
                on_change=Callback::new(move |v: String| {
                    if let Some(stage) = DealStage::from_code(&v) {
                        form.update(|f| f.stage = stage);
                    }
                })
                disabled=saving
            />
            <ui::Input
                label="Người phụ trách"
                value=Signal::derive(move || form.with(|f| f.owner.clone().unwrap_or_default()))
                on_input=Callback::new(move |v: String| form.update(|f| f.owner = Some(v)))
                disabled=saving
            />
            <ui::Input
                label="Ngày dự kiến chốt"
                input_type="date"
                value=Signal::derive(move || {
                    form.with(|f| f.expected_close_date.as_deref().map(date_input_value).unwrap_or_default())
                })
                on_input=Callback::new(move |v: String| form.update(|f| f.expected_close_date = Some(v)))
                error=field_error(lifecycle, "expected_close_date")
                disabled=saving
            />

            <FormFooter lifecycle=lifecycle on_cancel=on_close on_save=save />
        </Modal>
    }
}
