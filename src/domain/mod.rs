//! Domain aggregates exposed by the front-office service layer.

pub mod account;
pub mod appointment;
pub mod auth;
pub mod bill;
pub mod listing;
pub mod patient;
pub mod report;
pub mod types;
