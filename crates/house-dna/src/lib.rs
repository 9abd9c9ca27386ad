//! HOUSE DNA: condition scoring for residential building components.

pub mod config;
pub mod error;
pub mod health;
pub mod inventory;
pub mod telemetry;
