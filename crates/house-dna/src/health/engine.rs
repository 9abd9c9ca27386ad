use super::aggregate::{self, OverallScore};
use super::component::{self, ComponentCondition};
use super::config::ScoringConfig;
use super::domain::{Category, ComponentRecord, HouseId, HouseProfile, HouseSnapshot};
use super::recommendations;
use super::risk::{self, ComponentRisk};
use super::schedule::{self, MaintenanceEntry};
use super::validation::{validate_snapshot, HealthInputError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Aggregate health result for one house.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthScoreResult {
    pub overall_score: u8,
    pub category_scores: BTreeMap<Category, u8>,
    pub age_deduction: u8,
    pub structure_bonus: u8,
    pub recommendations: Vec<String>,
}

/// Everything the engine derives from one snapshot at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub house_id: HouseId,
    pub assessed_on: NaiveDate,
    pub result: HealthScoreResult,
    pub components: Vec<ComponentCondition>,
    pub risks: Vec<ComponentRisk>,
    pub maintenance: Vec<MaintenanceEntry>,
}

/// Stateless scorer applying a fixed set of tables.
///
/// Every operation takes `today` explicitly; the engine never reads the clock.
#[derive(Debug, Clone, Default)]
pub struct HealthEngine {
    config: ScoringConfig,
}

impl HealthEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn score_component(
        &self,
        component: &ComponentRecord,
        today: NaiveDate,
    ) -> ComponentCondition {
        component::score_component(component, &self.config, today)
    }

    /// Unrounded per-category means; the report carries them rounded.
    pub fn category_means(&self, scored: &[ComponentCondition]) -> BTreeMap<Category, f64> {
        aggregate::category_means(scored)
    }

    pub fn overall(
        &self,
        category_means: &BTreeMap<Category, f64>,
        profile: &HouseProfile,
        today: NaiveDate,
    ) -> OverallScore {
        aggregate::overall_score(category_means, profile, &self.config, today)
    }

    pub fn classify_risk(&self, component: &ComponentRecord, today: NaiveDate) -> ComponentRisk {
        risk::assess_component(component, &self.config.risk, today)
    }

    pub fn recommendations(
        &self,
        overall: &OverallScore,
        category_means: &BTreeMap<Category, f64>,
    ) -> Vec<String> {
        recommendations::generate(overall, category_means, &self.config.recommendations)
    }

    pub fn next_maintenance(
        &self,
        category: &Category,
        last_maintenance: Option<NaiveDate>,
        today: NaiveDate,
    ) -> NaiveDate {
        schedule::next_maintenance(category, last_maintenance, &self.config, today)
    }

    pub fn schedule(&self, component: &ComponentRecord, today: NaiveDate) -> MaintenanceEntry {
        schedule::schedule_component(component, &self.config, today)
    }

    /// Validate the snapshot, then run the full pipeline against a single `today`.
    pub fn assess(
        &self,
        snapshot: &HouseSnapshot,
        today: NaiveDate,
    ) -> Result<HealthReport, HealthInputError> {
        if let Err(err) = validate_snapshot(snapshot) {
            warn!(house = %snapshot.id, error = %err, "rejected house snapshot");
            return Err(err);
        }

        let components: Vec<ComponentCondition> = snapshot
            .components
            .iter()
            .map(|component| self.score_component(component, today))
            .collect();
        let category_means = self.category_means(&components);
        let overall = self.overall(&category_means, &snapshot.profile, today);
        let recommendations = self.recommendations(&overall, &category_means);

        let risks = snapshot
            .components
            .iter()
            .map(|component| self.classify_risk(component, today))
            .collect();
        let maintenance = snapshot
            .components
            .iter()
            .map(|component| self.schedule(component, today))
            .collect();

        debug!(
            house = %snapshot.id,
            components = components.len(),
            overall_score = overall.overall_score,
            "assessed house health"
        );

        Ok(HealthReport {
            house_id: snapshot.id.clone(),
            assessed_on: today,
            result: HealthScoreResult {
                overall_score: overall.overall_score,
                category_scores: aggregate::reported_scores(&category_means),
                age_deduction: overall.age_deduction,
                structure_bonus: overall.structure_bonus,
                recommendations,
            },
            components,
            risks,
            maintenance,
        })
    }
}
