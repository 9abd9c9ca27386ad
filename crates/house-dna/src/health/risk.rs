use super::config::RiskThresholds;
use super::domain::{Category, ComponentId, ComponentRecord, RiskLevel};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Rule that decided a component's risk level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum RiskReason {
    CriticalCondition { condition_score: f64 },
    PoorCondition { condition_score: f64 },
    PastExpectedLifespan { lifespan_ratio: f64 },
    NearingExpectedLifespan { lifespan_ratio: f64 },
    FairCondition { condition_score: f64 },
    Sound,
}

impl RiskReason {
    pub fn summary(&self) -> String {
        match self {
            RiskReason::CriticalCondition { condition_score } => {
                format!("condition score {condition_score:.0} is critical")
            }
            RiskReason::PoorCondition { condition_score } => {
                format!("condition score {condition_score:.0} is poor")
            }
            RiskReason::PastExpectedLifespan { lifespan_ratio } => format!(
                "in service for {:.0}% of its expected lifespan",
                lifespan_ratio * 100.0
            ),
            RiskReason::NearingExpectedLifespan { lifespan_ratio } => format!(
                "approaching end of life ({:.0}% of expected lifespan)",
                lifespan_ratio * 100.0
            ),
            RiskReason::FairCondition { condition_score } => {
                format!("condition score {condition_score:.0} needs monitoring")
            }
            RiskReason::Sound => "no risk indicators".to_string(),
        }
    }
}

/// Risk verdict for one component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentRisk {
    pub component_id: ComponentId,
    pub name: String,
    pub category: Category,
    pub level: RiskLevel,
    pub reason: RiskReason,
}

/// First matching rule wins. Works from the raw condition score and the
/// lifecycle position, never from the decayed component score.
pub(crate) fn classify(
    component: &ComponentRecord,
    thresholds: &RiskThresholds,
    today: NaiveDate,
) -> (RiskLevel, RiskReason) {
    let condition_score = component.condition_score;

    if condition_score < thresholds.critical_condition {
        return (
            RiskLevel::High,
            RiskReason::CriticalCondition { condition_score },
        );
    }

    if condition_score < thresholds.poor_condition {
        return (
            RiskLevel::Medium,
            RiskReason::PoorCondition { condition_score },
        );
    }

    if let Some(lifespan_ratio) = component.lifespan_ratio(today) {
        if lifespan_ratio >= thresholds.end_of_life_ratio {
            return (
                RiskLevel::High,
                RiskReason::PastExpectedLifespan { lifespan_ratio },
            );
        }
        if lifespan_ratio >= thresholds.approaching_end_of_life_ratio {
            return (
                RiskLevel::Medium,
                RiskReason::NearingExpectedLifespan { lifespan_ratio },
            );
        }
    }

    if condition_score < thresholds.fair_condition {
        return (
            RiskLevel::Medium,
            RiskReason::FairCondition { condition_score },
        );
    }

    (RiskLevel::Low, RiskReason::Sound)
}

pub(crate) fn assess_component(
    component: &ComponentRecord,
    thresholds: &RiskThresholds,
    today: NaiveDate,
) -> ComponentRisk {
    let (level, reason) = classify(component, thresholds, today);
    ComponentRisk {
        component_id: component.id.clone(),
        name: component.name.clone(),
        category: component.category.clone(),
        level,
        reason,
    }
}
