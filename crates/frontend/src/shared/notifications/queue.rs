pub const TRANSIENT_ERROR_TAG: &str = "server-unreachable";
pub const TRANSIENT_ERROR_MESSAGE: &str =
    "Unexpected server error occurred. Please refresh the page or check your network.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "notification--success",
            Self::Error => "notification--error",
        }
    }
}

/// Message for the user. Notifications sharing a `tag` are not shown twice
/// at the same time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub tag: Option<&'static str>,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            tag: None,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, message)
    }

    /// Network, server or unparseable-response failure.
    pub fn transient_error() -> Self {
        Self::error(TRANSIENT_ERROR_MESSAGE).with_tag(TRANSIENT_ERROR_TAG)
    }

    pub fn with_tag(mut self, tag: &'static str) -> Self {
        self.tag = Some(tag);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShownNotification {
    pub id: u64,
    pub notification: Notification,
}

/// Notifications currently on screen, oldest first.
#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    next_id: u64,
    items: Vec<ShownNotification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `notification` and returns its id, or `None` if one with the
    /// same tag is still visible.
    pub fn push(&mut self, notification: Notification) -> Option<u64> {
        if let Some(tag) = notification.tag {
            if self.items.iter().any(|n| n.notification.tag == Some(tag)) {
                return None;
            }
        }
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(ShownNotification { id, notification });
        Some(id)
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[ShownNotification] {
        &self.items
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_tag_is_suppressed_while_visible() {
        let mut queue = NotificationQueue::new();
        let first = queue.push(Notification::success("Product was added").with_tag("add"));
        assert!(first.is_some());
        assert_eq!(queue.push(Notification::success("Product was added").with_tag("add")), None);
        assert_eq!(queue.items().len(), 1);

        assert!(queue.dismiss(first.unwrap()));
        assert!(queue.push(Notification::success("Product was added").with_tag("add")).is_some());
    }

    #[test]
    fn test_untagged_notifications_stack() {
        let mut queue = NotificationQueue::new();
        queue.push(Notification::error("one"));
        queue.push(Notification::error("one"));
        assert_eq!(queue.items().len(), 2);
    }

    #[test]
    fn test_dismiss_unknown_id() {
        let mut queue = NotificationQueue::new();
        let id = queue.push(Notification::transient_error()).unwrap();
        assert!(!queue.dismiss(id + 1));
        assert_eq!(queue.items()[0].notification.tag, Some(TRANSIENT_ERROR_TAG));
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut queue = NotificationQueue::new();
        let a = queue.push(Notification::success("a")).unwrap();
        queue.dismiss(a);
        let b = queue.push(Notification::success("b")).unwrap();
        assert_ne!(a, b);
    }
}
