use leptos::prelude::*;

/// Многострочное поле с подписью (адрес, описание)
#[component]
pub fn Textarea(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// По умолчанию 3 строки
    #[prop(optional)]
    rows: Option<u32>,
) -> impl IntoView {
    view! {
        <label class="form__group">
            {move || label.get().map(|l| view! { <span class="form__label">{l}</span> })}
            <textarea
                class="form__textarea"
                disabled=move || disabled.get().unwrap_or(false)
                rows=rows.unwrap_or(3)
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            ></textarea>
        </label>
    }
}
