use contracts::domain::a001_customer::{Customer, CustomerForm};
use contracts::enums::CustomerType;
use contracts::shared::form::FormLifecycle;
use leptos::prelude::*;

use crate::domain::a001_customer::api;
use crate::shared::components::ui;
use crate::shared::form_modal::{field_error, modal_title, submit_form, FormFooter, ServerErrorAlert};
use crate::shared::http::RequestScope;
use crate::shared::list_screen::ModalTarget;
use crate::shared::modal::Modal;

const ENTITY: &str = "khách hàng";

/// Модальная форма клиента: пустая для создания, заполненная для правки
#[component]
pub fn CustomerDetails(
    target: ModalTarget,
    initial: Option<Customer>,
    on_close: Callback<()>,
    on_saved: Callback<Option<String>>,
) -> impl IntoView {
    let scope = RequestScope::new();
    let edit_id = match (&target, &initial) {
        (ModalTarget::Edit(id), Some(_)) => Some(id.as_str()),
        _ => None,
    };
    let lifecycle = RwSignal::new(FormLifecycle::for_record(edit_id));
    let form = RwSignal::new(initial.as_ref().map(CustomerForm::from).unwrap_or_default());
    let saving = Signal::derive(move || lifecycle.with(|l| l.is_saving()));

    let save = Callback::new(move |_| {
        submit_form(
            lifecycle,
            form.get_untracked().normalized(),
            ENTITY,
            move |id, form| async move {
                match id {
                    Some(id) => api::update_customer(scope, id, form).await,
                    None => api::create_customer(scope, form).await,
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
                label="Tên khách hàng"
                required=true
                value=Signal::derive(move || form.with(|f| f.name.clone()))
                on_input=Callback::new(move |v: String| form.update(|f| f.name = v))
                error=field_error(lifecycle, "name")
                disabled=saving
            />
            <ui::Input
                label="Email"
                input_type="email"
                value=Signal::derive(move || form.with(|f| f.email.clone().unwrap_or_default()))
                on_input=Callback::new(move |v: String| form.update(|f| f.email = Some(v)))
                error=field_error(lifecycle, "email")
                disabled=saving
            />
            <ui::Input
                label="Số điện thoại"
                value=Signal::derive(move || form.with(|f| f.phone.clone().unwrap_or_default()))
                on_input=Callback::new(move |v: String| form.update(|f| f.phone = Some(v)))
                error=field_error(lifecycle, "phone")
                disabled=saving
            />
            <ui::Textarea
                label="Địa chỉ"
                value=Signal::derive(move || form.with(|f| f.address.clone().unwrap_or_default()))
                on_input=Callback::new(move |v: String| form.update(|f| f.address = Some(v)))
                disabled=saving
            />
            <ui::Select
                label="Loại khách hàng"
                value=Signal::derive(move || form.with(|f| f.customer_type.code().to_string()))
                options=ui::owned_options(&CustomerType::options())
                on_change=Callback::new(move |v: String| {
                    if let Some(t) = CustomerType::from_code(&v) {
                        form.update(|f| f.customer_type = t);
                    }
                })
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
