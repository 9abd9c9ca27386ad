use super::domain::{ComponentId, ComponentRecord, HouseSnapshot};

/// Upstream data corruption. Missing optional fields are never reported here.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HealthInputError {
    #[error("component {component}: condition score {value} is outside 0..=100")]
    ConditionOutOfRange { component: ComponentId, value: f64 },
    #[error("component {component}: expected lifespan {value} is negative")]
    NegativeLifespan { component: ComponentId, value: f64 },
    #[error("component {component}: {field} is not a finite number")]
    NonFiniteValue {
        component: ComponentId,
        field: &'static str,
    },
}

pub fn validate_component(component: &ComponentRecord) -> Result<(), HealthInputError> {
    let condition = component.condition_score;
    if !condition.is_finite() {
        return Err(HealthInputError::NonFiniteValue {
            component: component.id.clone(),
            field: "condition_score",
        });
    }
    if !(0.0..=100.0).contains(&condition) {
        return Err(HealthInputError::ConditionOutOfRange {
            component: component.id.clone(),
            value: condition,
        });
    }

    if let Some(lifespan) = component.expected_lifespan {
        if !lifespan.is_finite() {
            return Err(HealthInputError::NonFiniteValue {
                component: component.id.clone(),
                field: "expected_lifespan",
            });
        }
        if lifespan < 0.0 {
            return Err(HealthInputError::NegativeLifespan {
                component: component.id.clone(),
                value: lifespan,
            });
        }
    }

    Ok(())
}

/// Reports the first offending component in input order.
pub fn validate_snapshot(snapshot: &HouseSnapshot) -> Result<(), HealthInputError> {
    snapshot.components.iter().try_for_each(validate_component)
}
