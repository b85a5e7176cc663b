use super::field_error::{control_class, FieldErrorText};
use leptos::prelude::*;

/// Dropdown with a leading empty "placeholder" option.
#[component]
pub fn Select(
    /// Currently selected value, empty for none
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Option values; each one doubles as its label
    #[prop(into)]
    options: Signal<Vec<String>>,
    /// Label of the empty option
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Validation message; also switches on the error styling
    #[prop(optional, into)]
    error: MaybeProp<String>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();
    let select_class = move || control_class("form__select", error.get().is_some());
    let placeholder_label = move || placeholder.get().unwrap_or_default();

    view! {
        <div class="form__group">
            <select
                id=select_id
                class=select_class
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                <option value="" prop:selected=move || value.with(String::is_empty)>
                    {placeholder_label}
                </option>
                <For
                    each=move || options.get()
                    key=|option| option.clone()
                    children=move |option| {
                        let label = option.clone();
                        let current = option.clone();
                        let is_selected = move || value.with(|v| *v == current);
                        view! {
                            <option value=option prop:selected=is_selected>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
            <FieldErrorText error=error />
        </div>
    }
}
