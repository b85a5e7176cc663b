//! Application-wide notification queue.
//!
//! The shell owns one [`NotificationService`] and provides it via context.
//! Pages get an emit callback from it instead of reaching for a global.

mod host;
mod queue;
mod service;

pub use host::NotificationHost;
pub use queue::{
    Notification, NotificationKind, NotificationQueue, ShownNotification, TRANSIENT_ERROR_MESSAGE,
    TRANSIENT_ERROR_TAG,
};
pub use service::{use_notifications, NotificationService};
