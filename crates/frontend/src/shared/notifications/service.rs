use super::queue::{Notification, NotificationQueue, ShownNotification};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const AUTO_DISMISS_MS: u32 = 5_000;

/// Service for centralized notification management
#[derive(Clone, Copy)]
pub struct NotificationService {
    queue: RwSignal<NotificationQueue>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(NotificationQueue::new()),
        }
    }

    /// Show a notification; it goes away by itself after a few seconds.
    pub fn push(&self, notification: Notification) {
        let message = notification.message.clone();
        let shown = self
            .queue
            .try_update(|queue| queue.push(notification))
            .flatten();

        let Some(id) = shown else {
            log::debug!("Notification suppressed, same tag still visible: {}", message);
            return;
        };

        let queue = self.queue;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            queue.try_update(|queue| queue.dismiss(id));
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|queue| {
            queue.dismiss(id);
        });
    }

    pub fn items(&self) -> Vec<ShownNotification> {
        self.queue.with(|queue| queue.items().to_vec())
    }

    /// Emit function handed to pages.
    pub fn emitter(&self) -> Callback<Notification> {
        let this = *self;
        Callback::new(move |notification| this.push(notification))
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}
