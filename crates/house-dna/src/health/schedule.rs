use super::config::ScoringConfig;
use super::domain::{Category, ComponentId, ComponentRecord};
use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Next recommended maintenance for one component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceEntry {
    pub component_id: ComponentId,
    pub name: String,
    pub category: Category,
    pub cycle_years: u32,
    pub last_maintenance: Option<NaiveDate>,
    pub next_recommended: NaiveDate,
}

impl MaintenanceEntry {
    pub fn is_due(&self, today: NaiveDate) -> bool {
        self.next_recommended <= today
    }
}

/// `(last_maintenance ?? today) + cycle`, using calendar months so the day of
/// month is preserved (29 Feb clamps to 28 Feb).
pub(crate) fn next_maintenance(
    category: &Category,
    last_maintenance: Option<NaiveDate>,
    config: &ScoringConfig,
    today: NaiveDate,
) -> NaiveDate {
    let start = last_maintenance.unwrap_or(today);
    let cycle_years = config.maintenance_cycle_years(category);
    start
        .checked_add_months(Months::new(cycle_years.saturating_mul(12)))
        .unwrap_or(NaiveDate::MAX)
}

/// Uses the component's last inspection as its last maintenance date.
pub(crate) fn schedule_component(
    component: &ComponentRecord,
    config: &ScoringConfig,
    today: NaiveDate,
) -> MaintenanceEntry {
    MaintenanceEntry {
        component_id: component.id.clone(),
        name: component.name.clone(),
        category: component.category.clone(),
        cycle_years: config.maintenance_cycle_years(&component.category),
        last_maintenance: component.last_inspection,
        next_recommended: next_maintenance(
            &component.category,
            component.last_inspection,
            config,
            today,
        ),
    }
}
