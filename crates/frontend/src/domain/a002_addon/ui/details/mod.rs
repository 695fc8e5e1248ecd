use contracts::domain::a002_addon::{Addon, AddonForm};
use contracts::enums::AddonType;
use contracts::shared::form::FormLifecycle;
use leptos::prelude::*;

use crate::domain::a002_addon::api;
use crate::shared::components::ui;
use crate::shared::form_modal::{field_error, modal_title, submit_form, FormFooter, ServerErrorAlert};
use crate::shared::http::RequestScope;
use crate::shared::list_screen::ModalTarget;
use crate::shared::modal::Modal;

const ENTITY: &str = "tiện ích";

#[component]
pub fn AddonDetails(
    target: ModalTarget,
    initial: Option<Addon>,
    on_close: Callback<()>,
    on_saved: Callback<Option<String>>,
) -> impl IntoView {
    let scope = RequestScope::new();
    let edit_id = match (&target, &initial) {
        (ModalTarget::Edit(id), Some(_)) => Some(id.as_str()),
        _ => None,
    };
    let lifecycle = RwSignal::new(FormLifecycle::for_record(edit_id));
    let form = RwSignal::new(initial.as_ref().map(AddonForm::from).unwrap_or_default());
    let saving = Signal::derive(move || lifecycle.with(|l| l.is_saving()));

    let save = Callback::new(move |_| {
        submit_form(
            lifecycle,
            form.get_untracked().normalized(),
            ENTITY,
            move |id, form| async move {
                match id {
                    Some(id) => api::update_addon(scope, id, form).await,
                    None => api::create_addon(scope, form).await,
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
                label="Tên tiện ích"
                required=true
                value=Signal::derive(move || form.with(|f| f.name.clone()))
                on_input=Callback::new(move |v: String| form.update(|f| f.name = v))
                error=field_error(lifecycle, "name")
                disabled=saving
            />
            <ui::Textarea
                label="Mô tả"
                value=Signal::derive(move || form.with(|f| f.description.clone().unwrap_or_default()))
                on_input=Callback::new(move |v: String| form.update(|f| f.description = Some(v)))
                disabled=saving
            />
            <ui::Select
                label="Loại tiện ích"
                value=Signal::derive(move || form.with(|f| f.addon_type.code().to_string()))
                options=ui::owned_options(&AddonType::options())
                on_change=Callback::new(move |v: String| {
                    if let Some(t) = AddonType::from_code(&v) {
                        form.update(|f| f.addon_type = t);
                    }
                })
                disabled=saving
            />
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
