use super::amount::Amount;
use crate::error::GymError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentType {
    /// Advances the member's billing cycle by one calendar month.
    Monthly,
    /// Walk-in day pass; never touches a billing cycle.
    Daily,
}

impl std::str::FromStr for PaymentType {
    type Err = GymError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MONTHLY" => Ok(PaymentType::Monthly),
            "DAILY" => Ok(PaymentType::Daily),
            other => Err(GymError::ValidationError(format!(
                "Unknown payment type: {}",
                other
            ))),
        }
    }
}

/// A recorded payment. Append-only apart from explicit amendments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    /// `None` for anonymous walk-in visitors.
    pub member_id: Option<String>,
    /// Name at the time of payment; not kept in sync with later edits.
    pub member_name: String,
    pub amount: Amount,
    pub date: NaiveDate,
    pub r#type: PaymentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_recurring: Option<bool>,
}

/// A payment as entered at the desk, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPayment {
    pub member_id: Option<String>,
    pub member_name: String,
    pub amount: Amount,
    pub date: NaiveDate,
    pub r#type: PaymentType,
    #[serde(default)]
    pub is_recurring: Option<bool>,
}

impl NewPayment {
    pub fn with_id(self, id: String) -> Payment {
        Payment {
            id,
            member_id: self.member_id,
            member_name: self.member_name,
            amount: self.amount,
            date: self.date,
            r#type: self.r#type,
            is_recurring: self.is_recurring,
        }
    }
}

/// Payments view: optional type filter, insertion order kept.
pub fn filter_payments(payments: &[Payment], r#type: Option<PaymentType>) -> Vec<&Payment> {
    payments
        .iter()
        .filter(|p| r#type.is_none_or(|t| p.r#type == t))
        .collect()
}

pub fn total_revenue<'a, I>(payments: I) -> Amount
where
    I: IntoIterator<Item = &'a Payment>,
{
    payments.into_iter().map(|p| p.amount).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn payment(id: &str, r#type: PaymentType, amount: rust_decimal::Decimal) -> Payment {
        Payment {
            id: id.to_string(),
            member_id: None,
            member_name: "Visitor".to_string(),
            amount: Amount::new(amount).unwrap(),
            date: NaiveDate::from_ymd_opt(2024, 5, 14).unwrap(),
            r#type,
            is_recurring: None,
        }
    }

    #[test]
    fn test_payment_document_shape() {
        let json = r#"{"id":"p3","memberId":null,"memberName":"Visitante 1","amount":10,"date":"2024-05-14","type":"DAILY"}"#;
        let p: Payment = serde_json::from_str(json).unwrap();
        assert_eq!(p.member_id, None);
        assert_eq!(p.r#type, PaymentType::Daily);
        assert_eq!(p.amount.value(), dec!(10));
        assert_eq!(p.is_recurring, None);

        let value = serde_json::to_value(&p).unwrap();
        assert_eq!(value["memberName"], "Visitante 1");
        assert_eq!(value["type"], "DAILY");
        assert_eq!(value["date"], "2024-05-14");
    }

    #[test]
    fn test_filter_and_total() {
        let payments = vec![
            payment("p1", PaymentType::Monthly, dec!(50)),
            payment("p2", PaymentType::Daily, dec!(10)),
            payment("p3", PaymentType::Daily, dec!(10)),
        ];

        let daily = filter_payments(&payments, Some(PaymentType::Daily));
        assert_eq!(daily.len(), 2);
        assert_eq!(total_revenue(daily).value(), dec!(20));

        let all = filter_payments(&payments, None);
        assert_eq!(total_revenue(all).value(), dec!(70));
    }

    #[test]
    fn test_payment_type_parsing() {
        assert_eq!("monthly".parse::<PaymentType>().unwrap(), PaymentType::Monthly);
        assert_eq!(" DAILY ".parse::<PaymentType>().unwrap(), PaymentType::Daily);
        assert!("weekly".parse::<PaymentType>().is_err());
    }
}
