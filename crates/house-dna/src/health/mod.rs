//! HOUSE DNA asset health scoring.
//!
//! Turns a house's structural profile and component inventory into a 0-100
//! health score, per-category averages, recommendations, per-component risk
//! levels and next-maintenance dates. Every stage is a pure function of its
//! inputs and an explicit `today`.

mod aggregate;
mod component;
pub mod config;
pub mod domain;
mod engine;
mod recommendations;
pub mod repository;
mod risk;
mod schedule;
pub mod service;
pub mod validation;
pub mod views;

#[cfg(test)]
mod tests;

pub use aggregate::OverallScore;
pub use component::ComponentCondition;
pub use config::ScoringConfig;
pub use domain::{
    Category, ComponentId, ComponentRecord, HouseId, HouseProfile, HouseSnapshot, RiskLevel,
    StructureType,
};
pub use engine::{HealthEngine, HealthReport, HealthScoreResult};
pub use repository::{HouseRepository, RepositoryError};
pub use risk::{ComponentRisk, RiskReason};
pub use schedule::MaintenanceEntry;
pub use service::{HealthServiceError, HouseHealthService};
pub use validation::HealthInputError;
pub use views::HealthReportSummary;
