//! Database models shared across the repository layer.

pub mod account;
pub mod appointment;
pub mod bill;
pub mod config;
pub mod patient;
