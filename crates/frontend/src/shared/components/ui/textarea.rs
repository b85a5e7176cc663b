use super::field_error::{control_class, FieldErrorText};
use leptos::prelude::*;

/// Multi-line text input with its validation message.
#[component]
pub fn Textarea(
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    #[prop(optional, into)]
    error: MaybeProp<String>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let textarea_id = move || id.get().unwrap_or_default();
    let textarea_placeholder = move || placeholder.get().unwrap_or_default();
    let textarea_class =
        move || control_class("form__textarea", error.get().is_some());

    view! {
        <div class="form__group">
            <textarea
                id=textarea_id
                class=textarea_class
                placeholder=textarea_placeholder
                rows="3"
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            ></textarea>
            <FieldErrorText error=error />
        </div>
    }
}
