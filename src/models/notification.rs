use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A transient message shown to the user
#[derive(Debug, Clone)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub raised_at: DateTime<Utc>,
}

impl Notification {
    fn new(level: NotificationLevel, message: String) -> Self {
        Self {
            level,
            message,
            raised_at: Utc::now(),
        }
    }

    pub fn missing_credential() -> Self {
        Self::new(
            NotificationLevel::Error,
            "Please set up your API key first".to_string(),
        )
    }

    pub fn search_failed() -> Self {
        Self::new(
            NotificationLevel::Error,
            "Failed to get recommendations. Please try again.".to_string(),
        )
    }

    pub fn bookmark_added(title: &str) -> Self {
        Self::new(
            NotificationLevel::Success,
            format!("Saved \"{}\" to bookmarks", title),
        )
    }

    pub fn bookmark_removed(title: &str) -> Self {
        Self::new(
            NotificationLevel::Success,
            format!("Removed \"{}\" from bookmarks", title),
        )
    }

    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }
}
