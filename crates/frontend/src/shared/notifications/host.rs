use super::service::use_notifications;
use leptos::prelude::*;

/// Renders the notification queue in a corner of the shell.
#[component]
pub fn NotificationHost() -> impl IntoView {
    let service = use_notifications();

    view! {
        <div class="notifications" aria-live="polite">
            <For
                each=move || service.items()
                key=|item| item.id
                children=move |item| {
                    let id = item.id;
                    let class = format!("notification {}", item.notification.kind.css_modifier());
                    view! {
                        <div class=class role="status">
                            <span class="notification__message">{item.notification.message}</span>
                            <button
                                class="notification__close"
                                aria-label="Dismiss"
                                on:click=move |_| service.dismiss(id)
                            >
                                {"×"}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
