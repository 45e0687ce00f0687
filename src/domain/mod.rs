//! Domain types and the pure rules around them.

pub mod amount;
pub mod billing;
pub mod calendar;
pub mod member;
pub mod notification;
pub mod payment;
pub mod ports;
pub mod stats;
