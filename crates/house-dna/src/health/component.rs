use super::config::ScoringConfig;
use super::domain::{months_between, Category, ComponentId, ComponentRecord};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-component score together with every adjustment that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentCondition {
    pub component_id: ComponentId,
    pub category: Category,
    pub base_score: f64,
    pub lifespan_ratio: Option<f64>,
    pub lifespan_deduction: u8,
    pub inspection_deduction: u8,
    pub warranty_bonus: u8,
    /// Final score, clamped to `[0, 100]`.
    pub score: f64,
}

pub(crate) fn score_component(
    component: &ComponentRecord,
    config: &ScoringConfig,
    today: NaiveDate,
) -> ComponentCondition {
    let lifespan_ratio = component.lifespan_ratio(today);
    let lifespan_deduction = lifespan_ratio
        .map(|ratio| config.lifespan.deduction(ratio))
        .unwrap_or(0);

    let inspection_deduction = config.inspection.deduction(
        component
            .last_inspection
            .map(|inspected| months_between(inspected, today)),
    );

    let warranty_bonus = component
        .warranty_expires
        .filter(|expires| *expires > today)
        .map(|expires| config.warranty.bonus(months_between(today, expires)))
        .unwrap_or(0);

    let adjusted = component.condition_score - f64::from(lifespan_deduction)
        - f64::from(inspection_deduction)
        + f64::from(warranty_bonus);

    ComponentCondition {
        component_id: component.id.clone(),
        category: component.category.clone(),
        base_score: component.condition_score,
        lifespan_ratio,
        lifespan_deduction,
        inspection_deduction,
        warranty_bonus,
        score: adjusted.clamp(0.0, 100.0),
    }
}
