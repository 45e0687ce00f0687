use crate::application::engine::BillingEngine;
use crate::domain::billing::BillingState;
use crate::domain::member::{Member, MemberStatus};
use crate::error::Result;
use chrono::NaiveDate;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct MemberRow<'a> {
    id: &'a str,
    name: &'a str,
    email: &'a str,
    status: MemberStatus,
    plan: &'a str,
    next_billing_date: Option<NaiveDate>,
    billing_state: BillingState,
}

/// Writes the member directory as CSV, one row per member with their
/// billing state on `today`. Credentials and images are never written.
pub struct MemberWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> MemberWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_members<'a, I>(
        &mut self,
        members: I,
        engine: &BillingEngine,
        today: NaiveDate,
    ) -> Result<()>
    where
        I: IntoIterator<Item = &'a Member>,
    {
        for member in members {
            self.writer.serialize(MemberRow {
                id: &member.id,
                name: &member.name,
                email: &member.email,
                status: member.status,
                plan: &member.plan,
                next_billing_date: member.next_billing_date,
                billing_state: engine.classify_billing_state(member, today),
            })?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
