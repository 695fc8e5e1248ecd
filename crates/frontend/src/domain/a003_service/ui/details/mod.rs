use contracts::domain::a003_service::{Service, ServiceForm};
use contracts::enums::{BillingCycle, ServiceCategory};
use contracts::shared::form::FormLifecycle;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a003_service::api;
use crate::shared::components::ui;
use crate::shared::form_modal::{field_error, modal_title, submit_form, FormFooter, ServerErrorAlert};
use crate::shared::http::RequestScope;
use crate::shared::list_screen::ModalTarget;
use crate::shared::modal::Modal;

const ENTITY: &str = "dịch vụ";

#[component]
pub fn ServiceDetails(
    target: ModalTarget,
    initial: Option<Service>,
    on_close: Callback<()>,
    on_saved: Callback<Option<String>>,
) -> impl IntoView {
    let scope = RequestScope::new();
    let edit_id = match (&target, &initial) {
        (ModalTarget::Edit(id), Some(_)) => Some(id.as_str()),
        _ => None,
    };
    let lifecycle = RwSignal::new(FormLifecycle::for_record(edit_id));
    let form = RwSignal::new(initial.as_ref().map(ServiceForm::from).unwrap_or_default());
    let saving = Signal::derive(move || lifecycle.with(|l| l.is_saving()));

    let save = Callback::new(move |_| {
        submit_form(
            lifecycle,
            form.get_untracked().normalized(),
            ENTITY,
            move |id, form| async move {
                match id {
                    Some(id) => api::update_service(scope, id, form).await,
                    None => api::create_service(scope, form).await,
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
                label="Tên dịch vụ"
                required=true
                value=Signal::derive(move || form.with(|f| f.name.clone()))
                on_input=Callback::new(move |v: String| form.update(|f| f.name = v))
                error=field_error(lifecycle, "name")
                disabled=saving
            />
            <ui::Textarea
                label="Mô tả"
                rows=3
                value=Signal::derive(move || form.with(|f| f.description.clone().unwrap_or_default()))
                on_input=Callback::new(move |v: String| form.update(|f| f.description = Some(v)))
                disabled=saving
            />
            <Flex gap=FlexGap::Medium>
                <ui::Select
                    label="Danh mục"
                    value=Signal::derive(move || form.with(|f| f.category.code().to_string()))
                    options=ui::owned_options(&ServiceCategory::options())
                    on_change=Callback::new(move |v: String| {
                        if let Some(c) = ServiceCategory::from_code(&v) {
                            form.update(|f| f.category = c);
                        }
                    })
                    disabled=saving
                />
                <ui::Select
                    label="Chu kỳ thanh toán"
                    value=Signal::derive(move || form.with(|f| f.billing_cycle.code().to_string()))
                    options=ui::owned_options(&BillingCycle::options())
                    on_change=Callback::new(move |v: String| {
                        if let Some(c) = BillingCycle::from_code(&v) {
                            form.update(|f| f.billing_cycle = c);
                        }
                    })
                    disabled=saving
                />
            </Flex>
            <ui::AmountInput
                label="Giá"
                required=true
                value=Signal::derive(move || form.with(|f| f.price))
                on_change=Callback::new(move |v: i64| form.update(|f| f.price = v))
                error=field_error(lifecycle, "price")
                disabled=saving
            />
            <ui::Checkbox
                label="Đang hoạt động"
                checked=Signal::derive(move || form.with(|f| f.is_active))
                on_change=Callback::new(move |v: bool| form.update(|f| f.is_active = v))
                disabled=saving
            />

            <FormFooter lifecycle=lifecycle on_cancel=on_close on_save=save />
        </Modal>
    }
}
