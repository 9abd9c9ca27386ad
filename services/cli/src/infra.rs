use chrono::{Local, NaiveDate};
use house_dna::config::AppConfig;
use house_dna::health::{HealthReport, HouseId, HouseRepository, HouseSnapshot, RepositoryError};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Default, Clone)]
pub(crate) struct InMemoryHouseRepository {
    houses: Arc<Mutex<HashMap<HouseId, HouseSnapshot>>>,
    assessments: Arc<Mutex<HashMap<HouseId, Vec<HealthReport>>>>,
}

impl InMemoryHouseRepository {
    pub(crate) fn insert(&self, snapshot: HouseSnapshot) {
        let mut guard = self.houses.lock().expect("repository mutex poisoned");
        guard.insert(snapshot.id.clone(), snapshot);
    }

    pub(crate) fn assessment_count(&self, id: &HouseId) -> usize {
        let guard = self.assessments.lock().expect("assessment mutex poisoned");
        guard.get(id).map(Vec::len).unwrap_or(0)
    }
}

impl HouseRepository for InMemoryHouseRepository {
    fn fetch(&self, id: &HouseId) -> Result<Option<HouseSnapshot>, RepositoryError> {
        let guard = self.houses.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn store_assessment(&self, report: HealthReport) -> Result<(), RepositoryError> {
        let mut guard = self.assessments.lock().expect("assessment mutex poisoned");
        guard
            .entry(report.house_id.clone())
            .or_default()
            .push(report);
        Ok(())
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

/// Flag, then `APP_REFERENCE_DATE`, then the local clock, sampled once.
pub(crate) fn resolve_today(flag: Option<NaiveDate>, config: &AppConfig) -> NaiveDate {
    flag.or(config.reference_date)
        .unwrap_or_else(|| Local::now().date_naive())
}
