use crate::shared::format::{format_vnd, parse_amount};
use leptos::prelude::*;

/// Поле ввода с подписью и текстом ошибки под ним
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "password", "email", "number", "date"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Required marker
    #[prop(optional)]
    required: bool,
    /// Ошибка проверки поля
    #[prop(optional, into)]
    error: MaybeProp<String>,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let input_class = move || {
        let invalid = if error.get().is_some() {
            " form__input--invalid"
        } else {
            ""
        };
        format!(
            "form__input{} {}",
            invalid,
            class.get().unwrap_or_default()
        )
    };

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                    {required.then(|| view! { <span class="form__required">" *"</span> })}
                </label>
            })}
            <input
                id=input_id
                class=input_class
                type=input_t
                prop:value=move || value.get()
                placeholder=input_placeholder
                disabled=move || disabled.get().unwrap_or(false)
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}

/// Поле суммы в донгах; под полем показывается отформатированное значение
#[component]
pub fn AmountInput(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<i64>,
    on_change: Callback<i64>,
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    error: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
) -> impl IntoView {
    let text = Signal::derive(move || value.get().to_string());
    let on_input = Callback::new(move |raw: String| {
        if let Some(amount) = parse_amount(&raw) {
            on_change.run(amount);
        }
    });

    view! {
        <Input
            label=label
            value=text
            on_input=on_input
            required=required
            error=error
            disabled=disabled
        />
        <div class="form__hint">{move || format_vnd(value.get())}</div>
    }
}
