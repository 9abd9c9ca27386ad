use std::collections::HashMap;
use std::sync::Mutex;

use chrono::NaiveDate;

use crate::health::domain::{
    Category, ComponentId, ComponentRecord, HouseId, HouseProfile, HouseSnapshot, StructureType,
};
use crate::health::engine::{HealthEngine, HealthReport};
use crate::health::repository::{HouseRepository, RepositoryError};
use crate::health::ScoringConfig;

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn today() -> NaiveDate {
    date(2024, 6, 1)
}

/// Inspection date close enough to `today()` to carry no staleness deduction.
pub(super) fn recent_inspection() -> NaiveDate {
    date(2024, 1, 15)
}

pub(super) fn engine() -> HealthEngine {
    HealthEngine::new(ScoringConfig::standard())
}

/// Component with no lifecycle dates at all.
pub(super) fn bare(id: &str, category: &str, condition_score: f64) -> ComponentRecord {
    ComponentRecord {
        id: ComponentId(id.to_string()),
        name: format!("{category} component {id}"),
        category: Category::parse(category),
        condition_score,
        installed_date: None,
        expected_lifespan: None,
        warranty_expires: None,
        last_inspection: None,
    }
}

/// Component inspected recently so its score equals its condition score.
pub(super) fn inspected(id: &str, category: &str, condition_score: f64) -> ComponentRecord {
    ComponentRecord {
        last_inspection: Some(recent_inspection()),
        ..bare(id, category, condition_score)
    }
}

pub(super) fn installed(
    mut component: ComponentRecord,
    installed_date: NaiveDate,
    expected_lifespan: f64,
) -> ComponentRecord {
    component.installed_date = Some(installed_date);
    component.expected_lifespan = Some(expected_lifespan);
    component
}

pub(super) fn house(
    built_year: Option<i32>,
    structure_type: Option<StructureType>,
    components: Vec<ComponentRecord>,
) -> HouseSnapshot {
    HouseSnapshot {
        id: HouseId("house-001".to_string()),
        profile: HouseProfile {
            built_year,
            structure_type,
        },
        components,
    }
}

#[derive(Default)]
pub(super) struct MemoryRepository {
    houses: Mutex<HashMap<HouseId, HouseSnapshot>>,
    stored: Mutex<Vec<HealthReport>>,
}

impl MemoryRepository {
    pub(super) fn with_house(snapshot: HouseSnapshot) -> Self {
        let repository = Self::default();
        repository
            .houses
            .lock()
            .expect("houses mutex poisoned")
            .insert(snapshot.id.clone(), snapshot);
        repository
    }

    pub(super) fn stored(&self) -> Vec<HealthReport> {
        self.stored.lock().expect("stored mutex poisoned").clone()
    }
}

impl HouseRepository for MemoryRepository {
    fn fetch(&self, id: &HouseId) -> Result<Option<HouseSnapshot>, RepositoryError> {
        Ok(self
            .houses
            .lock()
            .expect("houses mutex poisoned")
            .get(id)
            .cloned())
    }

    fn store_assessment(&self, report: HealthReport) -> Result<(), RepositoryError> {
        self.stored
            .lock()
            .expect("stored mutex poisoned")
            .push(report);
        Ok(())
    }
}

#[derive(Default)]
pub(super) struct OfflineRepository;

impl HouseRepository for OfflineRepository {
    fn fetch(&self, _id: &HouseId) -> Result<Option<HouseSnapshot>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn store_assessment(&self, _report: HealthReport) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}
