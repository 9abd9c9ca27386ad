use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use super::config::ScoringConfig;
use super::domain::HouseId;
use super::engine::{HealthEngine, HealthReport};
use super::repository::{HouseRepository, RepositoryError};
use super::validation::HealthInputError;

/// Service composing the storage collaborator with the scoring engine.
pub struct HouseHealthService<R> {
    repository: Arc<R>,
    engine: Arc<HealthEngine>,
}

impl<R> HouseHealthService<R>
where
    R: HouseRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: ScoringConfig) -> Self {
        Self {
            repository,
            engine: Arc::new(HealthEngine::new(config)),
        }
    }

    pub fn engine(&self) -> &HealthEngine {
        &self.engine
    }

    /// Fetch a house, score it as of `today`, and hand the report back to storage.
    pub fn assess(
        &self,
        house_id: &HouseId,
        today: NaiveDate,
    ) -> Result<HealthReport, HealthServiceError> {
        let snapshot = self
            .repository
            .fetch(house_id)?
            .ok_or(RepositoryError::NotFound)?;

        let report = self.engine.assess(&snapshot, today)?;
        self.repository.store_assessment(report.clone())?;

        info!(
            house = %house_id,
            overall_score = report.result.overall_score,
            "stored house health assessment"
        );
        Ok(report)
    }
}

/// Error raised by the health service.
#[derive(Debug, thiserror::Error)]
pub enum HealthServiceError {
    #[error(transparent)]
    Input(#[from] HealthInputError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
