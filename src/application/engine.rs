use crate::config::Config;
use crate::domain::amount::Amount;
use crate::domain::billing::{self, BillingState};
use crate::domain::member::{Member, MemberStatus};
use crate::domain::payment::{NewPayment, Payment, PaymentType};
use crate::domain::stats::{DashboardStats, RevenueScope};
use crate::error::Result;
use chrono::{Datelike, NaiveDate};
use tracing::debug;
use uuid::Uuid;

/// Outcome of [`BillingEngine::record_payment`]: fresh collections plus the
/// stored payment. The inputs are never modified.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedPayment {
    pub payment: Payment,
    pub payments: Vec<Payment>,
    pub members: Vec<Member>,
    /// Id of the member whose billing cycle moved, if any.
    pub renewed_member: Option<String>,
}

/// Membership billing rules.
///
/// Holds no collections of its own: every operation reads the slices it is
/// handed and returns new values, so callers can keep serving the previous
/// state until they swap in the result.
#[derive(Debug, Clone)]
pub struct BillingEngine {
    expiring_window_days: i64,
    recent_payments_limit: usize,
    revenue_scope: RevenueScope,
}

impl Default for BillingEngine {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl BillingEngine {
    pub fn new(config: &Config) -> Self {
        Self {
            expiring_window_days: config.expiring_window_days,
            recent_payments_limit: config.recent_payments_limit,
            revenue_scope: config.revenue_scope,
        }
    }

    /// Classifies `member` against `today`.
    ///
    /// A member without a billing date is untracked whatever their status;
    /// a member with one who is not ACTIVE is left out of the overdue and
    /// expiring bands. A billing date of today is still "expiring soon".
    pub fn classify_billing_state(&self, member: &Member, today: NaiveDate) -> BillingState {
        let Some(next_billing_date) = member.next_billing_date else {
            return BillingState::Untracked;
        };
        if member.status != MemberStatus::Active {
            return BillingState::NotApplicable;
        }
        let diff_days = billing::days_until(next_billing_date, today);
        billing::state_for_days(diff_days, self.expiring_window_days)
    }

    /// Records a payment and, for a monthly payment by a known member,
    /// renews that member's billing cycle from the payment date.
    ///
    /// Payments naming an unknown member are kept as orphaned payments.
    pub fn record_payment(
        &self,
        new_payment: NewPayment,
        members: &[Member],
        payments: &[Payment],
    ) -> Result<RecordedPayment> {
        let payment = new_payment.with_id(format!("p-{}", Uuid::new_v4().simple()));

        let mut members = members.to_vec();
        let mut renewed_member = None;
        if payment.r#type == PaymentType::Monthly
            && let Some(member_id) = payment.member_id.as_deref()
        {
            match members.iter_mut().find(|m| m.id == member_id) {
                Some(member) => {
                    member.next_billing_date = Some(billing::next_billing_date(payment.date)?);
                    member.last_payment_date = Some(payment.date);
                    member.status = MemberStatus::Active;
                    if payment.is_recurring.is_some() {
                        member.is_recurring = payment.is_recurring;
                    }
                    renewed_member = Some(member.id.clone());
                }
                None => {
                    debug!(
                        payment_id = %payment.id,
                        member_id,
                        "Payment references unknown member; recorded as orphaned"
                    );
                }
            }
        }

        let mut updated_payments = Vec::with_capacity(payments.len() + 1);
        updated_payments.extend_from_slice(payments);
        updated_payments.push(payment.clone());

        Ok(RecordedPayment {
            payment,
            payments: updated_payments,
            members,
            renewed_member,
        })
    }

    /// Aggregates the dashboard figures for `today`.
    pub fn compute_stats(
        &self,
        members: &[Member],
        payments: &[Payment],
        today: NaiveDate,
    ) -> DashboardStats {
        let total_members = members.iter().filter(|m| m.is_member_role()).count();
        let active_members = members
            .iter()
            .filter(|m| m.is_member_role() && m.is_active())
            .count();

        let monthly_revenue: Amount = payments
            .iter()
            .filter(|p| p.r#type == PaymentType::Monthly)
            .filter(|p| self.in_revenue_scope(p.date, today))
            .map(|p| p.amount)
            .sum();
        let daily_revenue: Amount = payments
            .iter()
            .filter(|p| p.date == today)
            .map(|p| p.amount)
            .sum();

        let recent_payments = payments
            .iter()
            .rev()
            .take(self.recent_payments_limit)
            .cloned()
            .collect();

        let mut pending_payment_members = Vec::new();
        let mut expiring_soon_members = Vec::new();
        for member in members {
            match self.classify_billing_state(member, today) {
                BillingState::Overdue => pending_payment_members.push(member.clone()),
                BillingState::ExpiringSoon => expiring_soon_members.push(member.clone()),
                _ => {}
            }
        }

        DashboardStats {
            total_members,
            active_members,
            monthly_revenue,
            daily_revenue,
            recent_payments,
            pending_payment_members,
            expiring_soon_members,
        }
    }

    fn in_revenue_scope(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self.revenue_scope {
            RevenueScope::AllTime => true,
            RevenueScope::CurrentMonth => {
                date.year() == today.year() && date.month() == today.month()
            }
        }
    }
}
