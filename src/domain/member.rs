use crate::error::GymError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Prefix every stored profile image must carry.
pub const IMAGE_DATA_URI_PREFIX: &str = "data:image/";

/// Plan assigned to self-registered members.
pub const DEFAULT_PLAN: &str = "Basic";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MemberStatus {
    Active,
    Inactive,
    Pending,
}

impl std::fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MemberStatus::Active => "ACTIVE",
            MemberStatus::Inactive => "INACTIVE",
            MemberStatus::Pending => "PENDING",
        };
        f.write_str(label)
    }
}

impl std::str::FromStr for MemberStatus {
    type Err = GymError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ACTIVE" => Ok(MemberStatus::Active),
            "INACTIVE" => Ok(MemberStatus::Inactive),
            "PENDING" => Ok(MemberStatus::Pending),
            other => Err(GymError::ValidationError(format!(
                "Unknown member status: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    Admin,
    // Records written before roles existed are plain members.
    #[default]
    Member,
}

/// A gym member or staff account.
///
/// `next_billing_date` being `None` means no billing cycle is tracked for the
/// account (admins, one-off visitors, freshly registered members).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub registration_date: NaiveDate,
    #[serde(
        default,
        with = "optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_payment_date: Option<NaiveDate>,
    pub status: MemberStatus,
    pub plan: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_recurring: Option<bool>,
    #[serde(
        default,
        with = "optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_billing_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default, rename = "password", skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

impl Member {
    pub fn is_member_role(&self) -> bool {
        self.role == UserRole::Member
    }

    pub fn is_active(&self) -> bool {
        self.status == MemberStatus::Active
    }
}

/// Checks that `image` is an inline image data URI within `max_bytes`.
pub fn validate_profile_image(image: &str, max_bytes: usize) -> Result<(), GymError> {
    if !image.starts_with(IMAGE_DATA_URI_PREFIX) {
        return Err(GymError::ValidationError(
            "Profile image must be an image data URI".to_string(),
        ));
    }
    if image.len() > max_bytes {
        return Err(GymError::ValidationError(format!(
            "Profile image is {} bytes, limit is {}",
            image.len(),
            max_bytes
        )));
    }
    Ok(())
}

/// A partial update coming from the member editor.
///
/// Outer `None` leaves a field untouched. For the clearable fields
/// (`next_billing_date`, `profile_image`) `Some(None)` clears the value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberEdit {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub plan: Option<String>,
    pub status: Option<MemberStatus>,
    pub role: Option<UserRole>,
    pub is_recurring: Option<bool>,
    pub next_billing_date: Option<Option<NaiveDate>>,
    pub profile_image: Option<Option<String>>,
}

impl MemberEdit {
    /// Returns the edited copy of `member`. Status changes are unrestricted.
    pub fn apply(self, member: &Member, max_image_bytes: usize) -> Result<Member, GymError> {
        if let Some(Some(image)) = &self.profile_image {
            validate_profile_image(image, max_image_bytes)?;
        }
        if let Some(email) = &self.email
            && email.trim().is_empty()
        {
            return Err(GymError::ValidationError(
                "Email must not be empty".to_string(),
            ));
        }

        let mut updated = member.clone();
        if let Some(name) = self.name {
            updated.name = name;
        }
        if let Some(email) = self.email {
            updated.email = email;
        }
        if let Some(phone) = self.phone {
            updated.phone = phone;
        }
        if let Some(plan) = self.plan {
            updated.plan = plan;
        }
        if let Some(status) = self.status {
            updated.status = status;
        }
        if let Some(role) = self.role {
            updated.role = role;
        }
        if let Some(is_recurring) = self.is_recurring {
            updated.is_recurring = Some(is_recurring);
        }
        if let Some(next_billing_date) = self.next_billing_date {
            updated.next_billing_date = next_billing_date;
        }
        if let Some(profile_image) = self.profile_image {
            updated.profile_image = profile_image;
        }
        Ok(updated)
    }
}

/// Self-service sign-up form.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    /// Builds a pending member account with no billing cycle yet.
    pub fn into_member(self, id: String, today: NaiveDate) -> Result<Member, GymError> {
        if self.password != self.confirm_password {
            return Err(GymError::ValidationError(
                "Passwords do not match".to_string(),
            ));
        }
        if self.email.trim().is_empty() || self.name.trim().is_empty() {
            return Err(GymError::ValidationError(
                "Name and email are required".to_string(),
            ));
        }

        Ok(Member {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            registration_date: today,
            last_payment_date: None,
            status: MemberStatus::Pending,
            plan: DEFAULT_PLAN.to_string(),
            is_recurring: None,
            next_billing_date: None,
            profile_image: None,
            role: UserRole::Member,
            secret: Some(self.password),
        })
    }
}

/// Member directory view: member accounts only, case-insensitive name search,
/// optional status filter.
pub fn filter_members<'a>(
    members: &'a [Member],
    search: &str,
    status: Option<MemberStatus>,
) -> Vec<&'a Member> {
    let needle = search.to_lowercase();
    members
        .iter()
        .filter(|m| m.is_member_role())
        .filter(|m| m.name.to_lowercase().contains(&needle))
        .filter(|m| status.is_none_or(|s| m.status == s))
        .collect()
}

/// Serde adapter for optional calendar dates.
///
/// Stored documents use `YYYY-MM-DD`; legacy records carry `"N/A"` or an
/// empty string where no date was known, both of which read as `None`.
pub(crate) mod optional_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_str(&d.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") | Some("N/A") => Ok(None),
            Some(s) => NaiveDate::parse_from_str(s, FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}
