pub mod header;

use crate::shared::notifications::NotificationHost;
use header::Header;
use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |  Header (title + navigation)             |
/// +------------------------------------------+
/// |  Content (routed page)                   |
/// +------------------------------------------+
/// ```
/// Notifications float above the content.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Header />
            <main class="app-main">
                {children()}
            </main>
            <NotificationHost />
        </div>
    }
}
