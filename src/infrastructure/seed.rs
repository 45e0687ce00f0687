//! Starter dataset used whenever a collection has never been stored or can no
//! longer be read.

use crate::domain::amount::Amount;
use crate::domain::calendar::GymEvent;
use crate::domain::member::{Member, MemberStatus, UserRole};
use crate::domain::payment::{Payment, PaymentType};
use chrono::{NaiveDate, NaiveTime};
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn amount(value: rust_decimal::Decimal) -> Amount {
    Amount::new(value).unwrap_or_default()
}

pub fn members() -> Vec<Member> {
    vec![
        Member {
            id: "admin".to_string(),
            name: "Administrador".to_string(),
            email: "admin@gymledger.local".to_string(),
            phone: String::new(),
            registration_date: date(2023, 9, 1),
            last_payment_date: None,
            status: MemberStatus::Active,
            plan: "Staff".to_string(),
            is_recurring: None,
            next_billing_date: None,
            profile_image: None,
            role: UserRole::Admin,
            secret: Some("Admin1234@".to_string()),
        },
        Member {
            id: "1".to_string(),
            name: "Juan Pérez".to_string(),
            email: "juan@example.com".to_string(),
            phone: "555-0101".to_string(),
            registration_date: date(2023, 10, 1),
            last_payment_date: Some(date(2024, 5, 1)),
            status: MemberStatus::Active,
            plan: "Premium".to_string(),
            is_recurring: Some(true),
            next_billing_date: Some(date(2024, 6, 1)),
            profile_image: None,
            role: UserRole::Member,
            secret: Some("user123".to_string()),
        },
        Member {
            id: "2".to_string(),
            name: "María García".to_string(),
            email: "maria@example.com".to_string(),
            phone: "555-0202".to_string(),
            registration_date: date(2023, 11, 15),
            last_payment_date: Some(date(2024, 4, 15)),
            status: MemberStatus::Inactive,
            plan: "Basic".to_string(),
            is_recurring: Some(false),
            next_billing_date: None,
            profile_image: None,
            role: UserRole::Member,
            secret: Some("user123".to_string()),
        },
        Member {
            id: "3".to_string(),
            name: "Carlos López".to_string(),
            email: "carlos@example.com".to_string(),
            phone: "555-0303".to_string(),
            registration_date: date(2024, 1, 20),
            last_payment_date: Some(date(2024, 5, 10)),
            status: MemberStatus::Active,
            plan: "Standard".to_string(),
            is_recurring: Some(false),
            next_billing_date: None,
            profile_image: None,
            role: UserRole::Member,
            secret: Some("user123".to_string()),
        },
    ]
}

pub fn payments() -> Vec<Payment> {
    vec![
        Payment {
            id: "p1".to_string(),
            member_id: Some("1".to_string()),
            member_name: "Juan Pérez".to_string(),
            amount: amount(dec!(50000)),
            date: date(2024, 5, 1),
            r#type: PaymentType::Monthly,
            is_recurring: Some(true),
        },
        Payment {
            id: "p2".to_string(),
            member_id: Some("3".to_string()),
            member_name: "Carlos López".to_string(),
            amount: amount(dec!(35000)),
            date: date(2024, 5, 10),
            r#type: PaymentType::Monthly,
            is_recurring: Some(false),
        },
        Payment {
            id: "p3".to_string(),
            member_id: None,
            member_name: "Visitante 1".to_string(),
            amount: amount(dec!(5000)),
            date: date(2024, 5, 14),
            r#type: PaymentType::Daily,
            is_recurring: None,
        },
        Payment {
            id: "p4".to_string(),
            member_id: None,
            member_name: "Visitante 2".to_string(),
            amount: amount(dec!(5000)),
            date: date(2024, 5, 14),
            r#type: PaymentType::Daily,
            is_recurring: None,
        },
    ]
}

pub fn events() -> Vec<GymEvent> {
    let event = |id: &str,
                 title: &str,
                 on: NaiveDate,
                 hour: u32,
                 instructor: &str,
                 category: &str| GymEvent {
        id: id.to_string(),
        title: title.to_string(),
        date: on,
        time: NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or_default(),
        instructor: instructor.to_string(),
        category: category.to_string(),
    };
    vec![
        event("e1", "Crossfit WOD", date(2024, 5, 20), 8, "Alex", "High Intensity"),
        event("e2", "Yoga Flow", date(2024, 5, 20), 10, "Sarah", "Flexibility"),
        event("e3", "Zumba Party", date(2024, 5, 21), 18, "Mike", "Cardio"),
    ]
}
