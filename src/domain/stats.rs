use super::amount::Amount;
use super::member::Member;
use super::payment::Payment;
use serde::{Deserialize, Serialize};

/// How far back "monthly revenue" reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RevenueScope {
    /// Monthly payments dated within the current calendar month.
    #[default]
    CurrentMonth,
    /// Every monthly payment ever recorded.
    AllTime,
}

/// Derived dashboard figures. Never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_members: usize,
    pub active_members: usize,
    pub monthly_revenue: Amount,
    pub daily_revenue: Amount,
    /// Most recent first.
    pub recent_payments: Vec<Payment>,
    /// Overdue members.
    pub pending_payment_members: Vec<Member>,
    pub expiring_soon_members: Vec<Member>,
}

impl DashboardStats {
    pub fn alert_count(&self) -> usize {
        self.pending_payment_members.len() + self.expiring_soon_members.len()
    }
}
