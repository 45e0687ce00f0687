use crate::error::GymError;
use chrono::{Months, NaiveDate};
use serde::Serialize;

/// Days ahead of the billing date during which a member counts as expiring.
pub const DEFAULT_EXPIRING_WINDOW_DAYS: i64 = 7;

/// Where a member stands in their billing cycle on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BillingState {
    /// Billing date is further out than the expiring window.
    ActiveOk,
    /// Billing date is today or within the expiring window.
    ExpiringSoon,
    /// Billing date has fully passed.
    Overdue,
    /// No billing cycle configured.
    Untracked,
    /// Cycle configured but the member is not ACTIVE, so it is not watched.
    NotApplicable,
}

impl std::fmt::Display for BillingState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            BillingState::ActiveOk => "ACTIVE_OK",
            BillingState::ExpiringSoon => "EXPIRING_SOON",
            BillingState::Overdue => "OVERDUE",
            BillingState::Untracked => "UNTRACKED",
            BillingState::NotApplicable => "NOT_APPLICABLE",
        };
        f.write_str(label)
    }
}

/// Whole calendar days from `today` until `date`; negative once it has passed.
pub fn days_until(date: NaiveDate, today: NaiveDate) -> i64 {
    (date - today).num_days()
}

/// Maps a day difference onto the expiring/overdue bands.
pub fn state_for_days(diff_days: i64, window_days: i64) -> BillingState {
    if diff_days < 0 {
        BillingState::Overdue
    } else if diff_days <= window_days {
        BillingState::ExpiringSoon
    } else {
        BillingState::ActiveOk
    }
}

/// The billing date one calendar month after `paid_on`.
///
/// Days past the end of the target month clamp to its last day, so
/// 2024-01-31 rolls to 2024-02-29 and 2023-01-31 to 2023-02-28.
pub fn next_billing_date(paid_on: NaiveDate) -> Result<NaiveDate, GymError> {
    paid_on.checked_add_months(Months::new(1)).ok_or_else(|| {
        GymError::ValidationError(format!("Billing date out of range after {}", paid_on))
    })
}
