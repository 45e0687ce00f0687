use crate::domain::amount::Amount;
use crate::domain::member::Member;
use crate::domain::notification::Notification;
use crate::domain::payment::{Payment, PaymentType};
use crate::domain::stats::DashboardStats;
use chrono::NaiveDate;
use serde::Serialize;

/// Printable dashboard. Members are reduced to the fields a front desk needs,
/// so credentials and images never leave the store.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    pub today: NaiveDate,
    pub total_members: usize,
    pub active_members: usize,
    pub monthly_revenue: Amount,
    pub daily_revenue: Amount,
    pub recent_payments: Vec<PaymentLine>,
    pub overdue: Vec<MemberLine>,
    pub expiring_soon: Vec<MemberLine>,
    pub alerts: Vec<Notification>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentLine {
    pub id: String,
    pub member_name: String,
    pub amount: Amount,
    pub date: NaiveDate,
    pub r#type: PaymentType,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberLine {
    pub id: String,
    pub name: String,
    pub plan: String,
    pub next_billing_date: Option<NaiveDate>,
}

impl From<&Payment> for PaymentLine {
    fn from(p: &Payment) -> Self {
        Self {
            id: p.id.clone(),
            member_name: p.member_name.clone(),
            amount: p.amount,
            date: p.date,
            r#type: p.r#type,
        }
    }
}

impl From<&Member> for MemberLine {
    fn from(m: &Member) -> Self {
        Self {
            id: m.id.clone(),
            name: m.name.clone(),
            plan: m.plan.clone(),
            next_billing_date: m.next_billing_date,
        }
    }
}

impl DashboardReport {
    pub fn new(stats: &DashboardStats, today: NaiveDate) -> Self {
        Self {
            today,
            total_members: stats.total_members,
            active_members: stats.active_members,
            monthly_revenue: stats.monthly_revenue,
            daily_revenue: stats.daily_revenue,
            recent_payments: stats.recent_payments.iter().map(PaymentLine::from).collect(),
            overdue: stats.pending_payment_members.iter().map(MemberLine::from).collect(),
            expiring_soon: stats.expiring_soon_members.iter().map(MemberLine::from).collect(),
            alerts: Vec::new(),
        }
    }

    pub fn with_alerts(mut self, alerts: &[Notification]) -> Self {
        self.alerts = alerts.to_vec();
        self
    }
}
