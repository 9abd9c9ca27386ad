use super::domain::{Category, ComponentId, HouseId, RiskLevel};
use super::engine::HealthReport;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CategoryScoreEntry {
    pub category: Category,
    pub category_label: String,
    pub score: u8,
    pub components: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RiskCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl RiskCounts {
    fn record(&mut self, level: RiskLevel) {
        match level {
            RiskLevel::High => self.high += 1,
            RiskLevel::Medium => self.medium += 1,
            RiskLevel::Low => self.low += 1,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ComponentRiskView {
    pub component_id: ComponentId,
    pub name: String,
    pub category_label: String,
    pub level: RiskLevel,
    pub level_label: &'static str,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MaintenanceView {
    pub component_id: ComponentId,
    pub name: String,
    pub category_label: String,
    pub cycle_years: u32,
    pub last_maintenance: Option<NaiveDate>,
    pub next_recommended: NaiveDate,
    pub due: bool,
}

/// Display-ready rendering of a [`HealthReport`] for dashboards and the CLI.
#[derive(Debug, Clone, Serialize)]
pub struct HealthReportSummary {
    pub house_id: HouseId,
    pub assessed_on: NaiveDate,
    pub overall_score: u8,
    pub age_deduction: u8,
    pub structure_bonus: u8,
    pub categories: Vec<CategoryScoreEntry>,
    pub recommendations: Vec<String>,
    pub risk_counts: RiskCounts,
    /// Highest risk first; input order within a level.
    pub risks: Vec<ComponentRiskView>,
    /// Soonest date first.
    pub maintenance: Vec<MaintenanceView>,
}

impl HealthReport {
    pub fn summary(&self) -> HealthReportSummary {
        let categories = self
            .result
            .category_scores
            .iter()
            .map(|(category, score)| CategoryScoreEntry {
                category: category.clone(),
                category_label: category.label().to_string(),
                score: *score,
                components: self
                    .components
                    .iter()
                    .filter(|condition| &condition.category == category)
                    .count(),
            })
            .collect();

        let mut risk_counts = RiskCounts::default();
        let mut risks: Vec<ComponentRiskView> = self
            .risks
            .iter()
            .map(|risk| {
                risk_counts.record(risk.level);
                ComponentRiskView {
                    component_id: risk.component_id.clone(),
                    name: risk.name.clone(),
                    category_label: risk.category.label().to_string(),
                    level: risk.level,
                    level_label: risk.level.label(),
                    reason: risk.reason.summary(),
                }
            })
            .collect();
        risks.sort_by_key(|view| view.level);

        let mut maintenance: Vec<MaintenanceView> = self
            .maintenance
            .iter()
            .map(|entry| MaintenanceView {
                component_id: entry.component_id.clone(),
                name: entry.name.clone(),
                category_label: entry.category.label().to_string(),
                cycle_years: entry.cycle_years,
                last_maintenance: entry.last_maintenance,
                next_recommended: entry.next_recommended,
                due: entry.is_due(self.assessed_on),
            })
            .collect();
        maintenance.sort_by_key(|view| view.next_recommended);

        HealthReportSummary {
            house_id: self.house_id.clone(),
            assessed_on: self.assessed_on,
            overall_score: self.result.overall_score,
            age_deduction: self.result.age_deduction,
            structure_bonus: self.result.structure_bonus,
            categories,
            recommendations: self.result.recommendations.clone(),
            risk_counts,
            risks,
            maintenance,
        }
    }
}
