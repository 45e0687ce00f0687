use super::stats::DashboardStats;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Warning,
    Info,
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub level: NotificationLevel,
    pub timestamp: NaiveDateTime,
    pub read: bool,
}

/// Raises a billing alert whenever the number of flagged members changes.
///
/// Mirrors what a front desk wants to see: one alert per change in the
/// overdue + expiring count, nothing while the count is zero or unchanged.
#[derive(Debug, Default)]
pub struct AlertTracker {
    last_alert_count: usize,
    sequence: u64,
}

impl AlertTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, stats: &DashboardStats, now: NaiveDateTime) -> Option<Notification> {
        let total = stats.alert_count();
        if total == 0 || total == self.last_alert_count {
            return None;
        }
        self.last_alert_count = total;
        self.sequence += 1;

        let overdue = stats.pending_payment_members.len();
        let expiring = stats.expiring_soon_members.len();
        let (title, level) = if overdue > 0 {
            ("Pending payments", NotificationLevel::Error)
        } else {
            ("Upcoming renewals", NotificationLevel::Warning)
        };

        Some(Notification {
            id: format!("n-{}", self.sequence),
            title: title.to_string(),
            message: format!(
                "{} overdue payments and {} expiring soon.",
                overdue, expiring
            ),
            level,
            timestamp: now,
            read: false,
        })
    }
}

#[derive(Debug, Default)]
pub struct NotificationCenter {
    notifications: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Newest first.
    pub fn push(&mut self, notification: Notification) {
        self.notifications.insert(0, notification);
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Returns false when no notification has that id.
    pub fn mark_read(&mut self, id: &str) -> bool {
        match self.notifications.iter_mut().find(|n| n.id == id) {
            Some(n) => {
                n.read = true;
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.notifications.clear();
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }
}
