use contracts::enums::UserRole;
use contracts::shared::form::FormLifecycle;
use contracts::system::users::{User, UserForm};
use leptos::prelude::*;

use crate::shared::components::ui;
use crate::shared::form_modal::{field_error, modal_title, submit_form, FormFooter, ServerErrorAlert};
use crate::shared::http::RequestScope;
use crate::shared::list_screen::ModalTarget;
use crate::shared::modal::Modal;
use crate::system::users::api;

const ENTITY: &str = "người dùng";

/// Форма пользователя. При создании пароль обязателен,
/// при правке пустой пароль оставляет текущий.
#[component]
pub fn UserDetails(
    target: ModalTarget,
    initial: Option<User>,
    on_close: Callback<()>,
    on_saved: Callback<Option<String>>,
) -> impl IntoView {
    let scope = RequestScope::new();
    let edit_id = match (&target, &initial) {
        (ModalTarget::Edit(id), Some(_)) => Some(id.as_str()),
        _ => None,
    };
    let lifecycle = RwSignal::new(FormLifecycle::for_record(edit_id));
    let form = RwSignal::new(match (edit_id, &initial) {
        (Some(_), Some(user)) => UserForm::from(user),
        _ => UserForm::for_create(),
    });
    let saving = Signal::derive(move || lifecycle.with(|l| l.is_saving()));
    let is_create = lifecycle.with_untracked(|l| l.is_create());

    let save = Callback::new(move |_| {
        submit_form(
            lifecycle,
            form.get_untracked().normalized(),
            ENTITY,
            move |id, form| async move {
                match id {
                    Some(id) => api::update_user(scope, id, form).await,
                    None => api::create_user(scope, form).await,
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
                label="Tên đăng nhập"
                required=true
                value=Signal::derive(move || form.with(|f| f.username.clone()))
                on_input=Callback::new(move |v: String| form.update(|f| f.username = v))
                error=field_error(lifecycle, "username")
                disabled=saving
            />
            <ui::Input
                label=if is_create { "Mật khẩu" } else { "Mật khẩu mới" }
                input_type="password"
                required=is_create
                placeholder=if is_create { "" } else { "Để trống nếu không đổi" }
                value=Signal::derive(move || form.with(|f| f.password.clone().unwrap_or_default()))
                on_input=Callback::new(move |v: String| form.update(|f| f.password = Some(v)))
                error=field_error(lifecycle, "password")
                disabled=saving
            />
            <ui::Input
                label="Họ tên"
                value=Signal::derive(move || form.with(|f| f.full_name.clone().unwrap_or_default()))
                on_input=Callback::new(move |v: String| form.update(|f| f.full_name = Some(v)))
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
            <ui::Select
                label="Vai trò"
                value=Signal::derive(move || form.with(|f| f.role.code().to_string()))
                options=ui::owned_options(&UserRole::options())
                on_change=Callback::new(move |v: String| {
                    if let Some(role) = UserRole::from_code(&v) {
                        form.update(|f| f.role = role);
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
