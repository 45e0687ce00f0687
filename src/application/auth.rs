//! Sign-in for the dashboard.
//!
//! Credentials are compared verbatim against the member directory; this
//! gates which views a person sees, it does not protect anything.

use super::service::GymService;
use crate::domain::member::{Member, UserRole};
use crate::error::{GymError, Result};
use tracing::info;

impl GymService {
    /// Signs in the member whose email and password both match exactly.
    pub async fn login(&self, email: &str, secret: &str) -> Result<Member> {
        let members = self.members().await?;
        let member = members
            .into_iter()
            .find(|m| m.email == email && m.secret.as_deref() == Some(secret))
            .ok_or(GymError::InvalidCredentials)?;
        self.write_session(&member).await?;
        info!(member_id = %member.id, "Signed in");
        Ok(member)
    }

    pub async fn logout(&self) -> Result<()> {
        self.clear_session().await
    }

    pub async fn current_user(&self) -> Result<Option<Member>> {
        self.read_session().await
    }

    pub async fn is_admin(&self) -> Result<bool> {
        Ok(self
            .current_user()
            .await?
            .is_some_and(|m| m.role == UserRole::Admin))
    }
}
