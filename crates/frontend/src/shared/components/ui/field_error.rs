use leptos::prelude::*;

/// CSS class added to a control whose value failed validation.
pub const ERROR_FIELD_CLASS: &str = "error-field";

/// Validation message rendered under a form control.
#[component]
pub fn FieldErrorText(#[prop(into)] error: MaybeProp<String>) -> impl IntoView {
    move || error.get().map(|message| view! { <p class="error">{message}</p> })
}

pub(crate) fn control_class(base: &str, has_error: bool) -> String {
    if has_error {
        format!("{} {}", base, ERROR_FIELD_CLASS)
    } else {
        base.to_string()
    }
}
