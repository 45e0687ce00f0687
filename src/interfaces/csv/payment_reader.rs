use crate::domain::amount::Amount;
use crate::domain::payment::{NewPayment, PaymentType};
use crate::error::{GymError, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::io::Read;

/// One row of a payments import file.
#[derive(Debug, Deserialize)]
struct PaymentRecord {
    r#type: PaymentType,
    member_id: Option<String>,
    member_name: String,
    amount: Amount,
    date: NaiveDate,
    recurring: Option<bool>,
}

impl From<PaymentRecord> for NewPayment {
    fn from(record: PaymentRecord) -> Self {
        NewPayment {
            member_id: record.member_id.filter(|id| !id.is_empty()),
            member_name: record.member_name,
            amount: record.amount,
            date: record.date,
            r#type: record.r#type,
            is_recurring: record.recurring,
        }
    }
}

/// Reads desk payments from a CSV source.
///
/// Expected header: `type,member_id,member_name,amount,date,recurring`.
/// An empty `member_id` marks an anonymous walk-in.
pub struct PaymentReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PaymentReader<R> {
    /// Creates a new `PaymentReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes payments.
    pub fn payments(self) -> impl Iterator<Item = Result<NewPayment>> {
        self.reader.into_deserialize().map(|result| {
            result
                .map(|record: PaymentRecord| NewPayment::from(record))
                .map_err(GymError::from)
        })
    }
}
