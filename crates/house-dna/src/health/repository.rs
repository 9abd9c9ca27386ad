use super::domain::{HouseId, HouseSnapshot};
use super::engine::HealthReport;

/// Storage abstraction supplying snapshots and receiving engine output.
pub trait HouseRepository: Send + Sync {
    fn fetch(&self, id: &HouseId) -> Result<Option<HouseSnapshot>, RepositoryError>;
    fn store_assessment(&self, report: HealthReport) -> Result<(), RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("house not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
