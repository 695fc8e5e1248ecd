use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Модальное окно формы: закрывается по Escape, клику по фону и крестику.
/// Пока `busy` (идёт сохранение), закрыть окно нельзя.
#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: Signal<String>,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Блокирует закрытие
    #[prop(optional, into)]
    busy: MaybeProp<bool>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    let request_close = move || {
        if !busy.get_untracked().unwrap_or(false) {
            on_close.run(());
        }
    };

    let keydown = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            request_close();
        }
    });
    on_cleanup(move || keydown.remove());

    // Клик внутри окна не должен закрывать его
    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=move |_| request_close()>
            <div class="modal" role="dialog" aria-modal="true" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{move || title.get()}</h2>
                    <button
                        class="button button--icon modal__close"
                        disabled=move || busy.get().unwrap_or(false)
                        on:click=move |_| request_close()
                    >
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
