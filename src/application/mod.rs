//! Application layer containing the billing rules and their orchestration.
//!
//! `BillingEngine` is the pure rule set; `GymService` wires it to a document
//! store so every mutation is read, computed and written back as a whole.

pub mod auth;
pub mod engine;
pub mod insights;
pub mod service;
