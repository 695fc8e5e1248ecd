use contracts::domain::a004_salary_contract::{SalaryContract, SalaryContractForm};
use contracts::enums::ContractStatus;
use contracts::shared::form::FormLifecycle;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a004_salary_contract::api;
use crate::shared::components::ui;
use crate::shared::form_modal::{field_error, modal_title, submit_form, FormFooter, ServerErrorAlert};
use crate::shared::format::{date_input_value, format_vnd};
use crate::shared::http::RequestScope;
use crate::shared::list_screen::ModalTarget;
use crate::shared::modal::Modal;

const ENTITY: &str = "hợp đồng lương";

/// Форма договора; итоговая зарплата пересчитывается при вводе
#[component]
pub fn SalaryContractDetails(
    target: ModalTarget,
    initial: Option<SalaryContract>,
    on_close: Callback<()>,
    on_saved: Callback<Option<String>>,
) -> impl IntoView {
    let scope = RequestScope::new();
    let edit_id = match (&target, &initial) {
        (ModalTarget::Edit(id), Some(_)) => Some(id.as_str()),
        _ => None,
    };
    let lifecycle = RwSignal::new(FormLifecycle::for_record(edit_id));
    let form = RwSignal::new(
        initial
            .as_ref()
            .map(SalaryContractForm::from)
            .unwrap_or_default(),
    );
    let saving = Signal::derive(move || lifecycle.with(|l| l.is_saving()));
    let total = Signal::derive(move || {
        form.with(|f| f.base_salary.saturating_add(f.allowance))
    });

    let save = Callback::new(move |_| {
        submit_form(
            lifecycle,
            form.get_untracked().normalized(),
            ENTITY,
            move |id, form| async move {
                match id {
                    Some(id) => api::update_contract(scope, id, form).await,
                    None => api::create_contract(scope, form).await,
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
                label="Tên nhân viên"
                required=true
                value=Signal::derive(move || form.with(|f| f.employee_name.clone()))
                on_input=Callback::new(move |v: String| form.update(|f| f.employee_name = v))
                error=field_error(lifecycle, "employee_name")
                disabled=saving
            />
            <ui::Input
                label="Vị trí"
                required=true
                value=Signal::derive(move || form.with(|f| f.position.clone()))
                on_input=Callback::new(move |v: String| form.update(|f| f.position = v))
                error=field_error(lifecycle, "position")
                disabled=saving
            />
            <Flex gap=FlexGap::Medium>
                <ui::AmountInput
                    label="Lương cơ bản"
                    required=true
                    value=Signal::derive(move || form.with(|f| f.base_salary))
                    on_change=Callback::new(move |v: i64| form.update(|f| f.base_salary = v))
                    error=field_error(lifecycle, "base_salary")
                    disabled=saving
                />
                <ui::AmountInput
                    label="Phụ cấp"
                    value=Signal::derive(move || form.with(|f| f.allowance))
                    on_change=Callback::new(move |v: i64| form.update(|f| f.allowance = v))
                    error=field_error(lifecycle, "allowance")
                    disabled=saving
                />
            </Flex>
            <div class="form__summary">
                "Tổng lương: "
                <strong>{move || format_vnd(total.get())}</strong>
            </div>
            <Flex gap=FlexGap::Medium>
                <ui::Input
                    label="Ngày bắt đầu"
                    input_type="date"
                    required=true
                    value=Signal::derive(move || form.with(|f| date_input_value(&f.start_date)))
                    on_input=Callback::new(move |v: String| form.update(|f| f.start_date = v))
                    error=field_error(lifecycle, "start_date")
                    disabled=saving
                />
                <ui::Input
                    label="Ngày kết thúc"
                    input_type="date"
                    value=Signal::derive(move || form.with(|f| f.end_date.as_deref().map(date_input_value).unwrap_or_default()))
                    on_input=Callback::new(move |v: String| form.update(|f| f.end_date = Some(v)))
                    error=field_error(lifecycle, "end_date")
                    disabled=saving
                />
            </Flex>
            <ui::Select
                label="Trạng thái"
                value=Signal::derive(move || form.with(|f| f.status.code().to_string()))
                options=ui::owned_options(&ContractStatus::options())
                on_change=Callback::new(move |v: String| {
                    if let Some(s) = ContractStatus::from_code(&v) {
                        form.update(|f| f.status = s);
                    }
                })
                disabled=saving
            />

            <FormFooter lifecycle=lifecycle on_cancel=on_close on_save=save />
        </Modal>
    }
}
