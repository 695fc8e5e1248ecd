//! Общая логика модальных форм создания/редактирования

use std::future::Future;

use contracts::shared::api::ApiError;
use contracts::shared::form::FormLifecycle;
use contracts::shared::validation::Validate;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::notify::{show_error, show_success};

/// Проверяет форму и сохраняет её через `save(edit_id, form)`.
///
/// При ошибках проверки запрос не отправляется. При ошибке API форма
/// остаётся открытой, `on_saved` вызывается только после успешной записи.
pub fn submit_form<F, Fut>(
    lifecycle: RwSignal<FormLifecycle>,
    form: F,
    entity: &'static str,
    save: impl FnOnce(Option<String>, F) -> Fut + 'static,
    on_saved: Callback<Option<String>>,
) where
    F: Validate + 'static,
    Fut: Future<Output = Result<(), ApiError>> + 'static,
{
    let Some(true) = lifecycle.try_update(|l| l.begin_submit(&form)) else {
        return;
    };
    let edit_id = lifecycle.with_untracked(|l| l.edit_id().map(str::to_string));

    spawn_local(async move {
        match save(edit_id.clone(), form).await {
            Ok(()) => {
                let _ = lifecycle.try_update(|l| l.succeed());
                let message = match edit_id {
                    Some(_) => format!("Đã cập nhật {}", entity),
                    None => format!("Đã thêm {}", entity),
                };
                show_success("Lưu thành công", &message);
                on_saved.run(edit_id);
            }
            Err(e) if e.is_cancelled() => {}
            Err(e) => {
                let message = e.user_message();
                let _ = lifecycle.try_update(|l| l.fail(message.clone()));
                show_error(&format!("Không lưu được {}", entity), &message);
            }
        }
    });
}

/// Ошибка поля формы для `error=` у полей ввода
pub fn field_error(lifecycle: RwSignal<FormLifecycle>, field: &'static str) -> Signal<Option<String>> {
    Signal::derive(move || lifecycle.with(|l| l.field_error(field)))
}

/// Заголовок окна: "Thêm khách hàng" / "Sửa khách hàng"
pub fn modal_title(lifecycle: &FormLifecycle, entity: &str) -> String {
    if lifecycle.is_create() {
        format!("Thêm {}", entity)
    } else {
        format!("Sửa {}", entity)
    }
}

/// Ошибка сервера над полями формы
#[component]
pub fn ServerErrorAlert(lifecycle: RwSignal<FormLifecycle>) -> impl IntoView {
    move || {
        lifecycle
            .with(|l| l.server_error().map(str::to_string))
            .map(|e| view! { <div class="alert alert--error">{e}</div> })
    }
}

/// Кнопки "Hủy" / "Lưu" внизу модального окна
#[component]
pub fn FormFooter(
    lifecycle: RwSignal<FormLifecycle>,
    on_cancel: Callback<()>,
    on_save: Callback<()>,
) -> impl IntoView {
    let saving = Signal::derive(move || lifecycle.with(|l| l.is_saving()));

    view! {
        <div class="modal-footer">
            <Flex justify=FlexJustify::End gap=FlexGap::Small>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_cancel.run(())
                    disabled=saving
                >
                    "Hủy"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| on_save.run(())
                    disabled=saving
                >
                    {move || if saving.get() { "Đang lưu..." } else { "Lưu" }}
                </Button>
            </Flex>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_title() {
        assert_eq!(modal_title(&FormLifecycle::create(), "khách hàng"), "Thêm khách hàng");
        assert_eq!(modal_title(&FormLifecycle::edit("c-1"), "khách hàng"), "Sửa khách hàng");
    }
}
