use crate::routes::routes::AppRoutes;
use crate::shared::config::AppConfig;
use crate::shared::notifications::NotificationService;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // API base URL for every page.
    provide_context(AppConfig::load());

    // One notification queue for the whole app.
    provide_context(NotificationService::new());

    view! {
        <AppRoutes />
    }
}
