use super::engine::{BillingEngine, RecordedPayment};
use crate::config::Config;
use crate::domain::amount::Amount;
use crate::domain::member::{Member, MemberEdit, RegistrationForm};
use crate::domain::payment::{NewPayment, Payment};
use crate::domain::ports::DocumentStoreBox;
use crate::domain::stats::DashboardStats;
use crate::error::{GymError, Result};
use crate::infrastructure::seed;
use chrono::NaiveDate;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use uuid::Uuid;

pub const MEMBERS_KEY: &str = "gym_members";
pub const PAYMENTS_KEY: &str = "gym_payments";
pub const SESSION_KEY: &str = "gym_current_user";

/// The gym's state behind a document store.
///
/// Each operation reads the collections it needs, runs the billing rules on
/// them and writes the results back as whole documents. Missing or unreadable
/// collections are replaced by the seed dataset.
pub struct GymService {
    store: DocumentStoreBox,
    engine: BillingEngine,
    config: Config,
}

impl GymService {
    pub fn new(store: DocumentStoreBox, config: Config) -> Self {
        Self {
            store,
            engine: BillingEngine::new(&config),
            config,
        }
    }

    pub fn engine(&self) -> &BillingEngine {
        &self.engine
    }

    pub async fn members(&self) -> Result<Vec<Member>> {
        self.load_collection(MEMBERS_KEY, seed::members).await
    }

    pub async fn payments(&self) -> Result<Vec<Payment>> {
        self.load_collection(PAYMENTS_KEY, seed::payments).await
    }

    pub async fn dashboard(&self, today: NaiveDate) -> Result<DashboardStats> {
        let members = self.members().await?;
        let payments = self.payments().await?;
        Ok(self.engine.compute_stats(&members, &payments, today))
    }

    pub async fn record_payment(&self, new_payment: NewPayment) -> Result<Payment> {
        let members = self.members().await?;
        let payments = self.payments().await?;

        let RecordedPayment {
            payment,
            payments,
            members,
            renewed_member,
        } = self.engine.record_payment(new_payment, &members, &payments)?;

        // Members go first. Renewal depends only on the payment date, so a
        // retry after a failed payments write lands on the same billing date.
        if let Some(member_id) = &renewed_member {
            self.save_collection(MEMBERS_KEY, &members).await?;
            debug!(payment_id = %payment.id, member_id = %member_id, "Billing cycle renewed");
        }
        self.save_collection(PAYMENTS_KEY, &payments).await?;
        Ok(payment)
    }

    /// Changes amount and/or date of a recorded payment. Members are not
    /// re-billed.
    pub async fn amend_payment(
        &self,
        payment_id: &str,
        amount: Option<Amount>,
        date: Option<NaiveDate>,
    ) -> Result<Payment> {
        let mut payments = self.payments().await?;
        let payment = payments
            .iter_mut()
            .find(|p| p.id == payment_id)
            .ok_or_else(|| GymError::PaymentNotFound(payment_id.to_string()))?;
        if let Some(amount) = amount {
            payment.amount = amount;
        }
        if let Some(date) = date {
            payment.date = date;
        }
        let amended = payment.clone();
        self.save_collection(PAYMENTS_KEY, &payments).await?;
        Ok(amended)
    }

    pub async fn delete_payment(&self, payment_id: &str) -> Result<()> {
        let mut payments = self.payments().await?;
        let before = payments.len();
        payments.retain(|p| p.id != payment_id);
        if payments.len() == before {
            return Err(GymError::PaymentNotFound(payment_id.to_string()));
        }
        self.save_collection(PAYMENTS_KEY, &payments).await
    }

    /// Signs up a new member as PENDING until their first monthly payment.
    pub async fn register(&self, form: RegistrationForm, today: NaiveDate) -> Result<Member> {
        let mut members = self.members().await?;
        ensure_email_free(&members, &form.email, None)?;
        let member = form.into_member(format!("m-{}", Uuid::new_v4().simple()), today)?;
        members.push(member.clone());
        self.save_collection(MEMBERS_KEY, &members).await?;
        info!(member_id = %member.id, "Member registered");
        Ok(member)
    }

    pub async fn edit_member(&self, member_id: &str, edit: MemberEdit) -> Result<Member> {
        let mut members = self.members().await?;
        let index = members
            .iter()
            .position(|m| m.id == member_id)
            .ok_or_else(|| GymError::MemberNotFound(member_id.to_string()))?;
        let updated = edit.apply(&members[index], self.config.max_profile_image_bytes)?;
        ensure_email_free(&members, &updated.email, Some(member_id))?;
        members[index] = updated.clone();
        self.save_collection(MEMBERS_KEY, &members).await?;

        // Keep the signed-in copy in step with the directory.
        if let Some(current) = self.current_user().await?
            && current.id == updated.id
        {
            self.write_session(&updated).await?;
        }
        Ok(updated)
    }

    /// Removes a member. Their past payments keep the name snapshot.
    pub async fn delete_member(&self, member_id: &str) -> Result<()> {
        let mut members = self.members().await?;
        let before = members.len();
        members.retain(|m| m.id != member_id);
        if members.len() == before {
            return Err(GymError::MemberNotFound(member_id.to_string()));
        }
        self.save_collection(MEMBERS_KEY, &members).await?;
        info!(member_id, "Member deleted");
        Ok(())
    }

    async fn load_collection<T, F>(&self, key: &str, fallback: F) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
        F: FnOnce() -> Vec<T>,
    {
        match self.store.read(key).await? {
            None => Ok(fallback()),
            Some(document) => match serde_json::from_str(&document) {
                Ok(items) => Ok(items),
                Err(e) => {
                    warn!(
                        collection = key,
                        error = %e,
                        "Stored collection is unreadable; using seed data"
                    );
                    Ok(fallback())
                }
            },
        }
    }

    async fn save_collection<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        let document = serde_json::to_string(items)?;
        self.store.write(key, document).await
    }

    pub(super) async fn read_session(&self) -> Result<Option<Member>> {
        let Some(document) = self.store.read(SESSION_KEY).await? else {
            return Ok(None);
        };
        match serde_json::from_str(&document) {
            Ok(member) => Ok(Some(member)),
            Err(e) => {
                warn!(error = %e, "Stored session is unreadable; treating as signed out");
                Ok(None)
            }
        }
    }

    pub(super) async fn write_session(&self, member: &Member) -> Result<()> {
        let document = serde_json::to_string(member)?;
        self.store.write(SESSION_KEY, document).await
    }

    pub(super) async fn clear_session(&self) -> Result<()> {
        self.store.remove(SESSION_KEY).await
    }
}

/// Emails identify members at sign-in, so no two records may share one.
fn ensure_email_free(members: &[Member], email: &str, owner: Option<&str>) -> Result<()> {
    let taken = members
        .iter()
        .any(|m| Some(m.id.as_str()) != owner && m.email.eq_ignore_ascii_case(email));
    if taken {
        return Err(GymError::ValidationError(format!(
            "Email already registered: {}",
            email
        )));
    }
    Ok(())
}
