use super::component::ComponentCondition;
use super::config::ScoringConfig;
use super::domain::{Category, HouseProfile};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Score given to a house with no tracked components.
const EMPTY_INVENTORY_AVERAGE: f64 = 100.0;

/// Overall score plus the adjustments applied on top of the category average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallScore {
    pub overall_score: u8,
    pub weighted_average: f64,
    pub building_age: Option<i32>,
    pub age_deduction: u8,
    pub structure_bonus: u8,
}

pub(crate) fn round_score(value: f64) -> u8 {
    value.clamp(0.0, 100.0).round() as u8
}

/// Mean score per category; categories without components get no entry.
///
/// Means stay unrounded so weighting and thresholds see the exact average.
pub(crate) fn category_means(scored: &[ComponentCondition]) -> BTreeMap<Category, f64> {
    let mut totals: BTreeMap<Category, (f64, usize)> = BTreeMap::new();
    for condition in scored {
        let entry = totals.entry(condition.category.clone()).or_insert((0.0, 0));
        entry.0 += condition.score;
        entry.1 += 1;
    }

    totals
        .into_iter()
        .map(|(category, (sum, count))| (category, sum / count as f64))
        .collect()
}

/// Rounded category scores as reported to consumers.
pub(crate) fn reported_scores(
    category_means: &BTreeMap<Category, f64>,
) -> BTreeMap<Category, u8> {
    category_means
        .iter()
        .map(|(category, mean)| (category.clone(), round_score(*mean)))
        .collect()
}

pub(crate) fn weighted_average(
    category_means: &BTreeMap<Category, f64>,
    config: &ScoringConfig,
) -> f64 {
    if category_means.is_empty() {
        return EMPTY_INVENTORY_AVERAGE;
    }

    let (weighted_sum, total_weight) = category_means.iter().fold(
        (0.0, 0.0),
        |(weighted_sum, total_weight), (category, mean)| {
            let weight = config.category_weight(category);
            (weighted_sum + mean * weight, total_weight + weight)
        },
    );

    if total_weight <= 0.0 {
        return EMPTY_INVENTORY_AVERAGE;
    }
    weighted_sum / total_weight
}

pub(crate) fn overall_score(
    category_means: &BTreeMap<Category, f64>,
    profile: &HouseProfile,
    config: &ScoringConfig,
    today: NaiveDate,
) -> OverallScore {
    let building_age = profile.building_age(today);

    // Nothing tracked means nothing to penalize, whatever the building's profile.
    if category_means.is_empty() {
        return OverallScore {
            overall_score: round_score(EMPTY_INVENTORY_AVERAGE),
            weighted_average: EMPTY_INVENTORY_AVERAGE,
            building_age,
            age_deduction: 0,
            structure_bonus: 0,
        };
    }

    let weighted_average = weighted_average(category_means, config);
    let age_deduction = building_age
        .map(|years| config.building_age.deduction(years))
        .unwrap_or(0);
    let structure_bonus = config.structure_bonus(profile.structure_type.as_ref());

    let adjusted = weighted_average - f64::from(age_deduction) + f64::from(structure_bonus);

    OverallScore {
        overall_score: round_score(adjusted),
        weighted_average,
        building_age,
        age_deduction,
        structure_bonus,
    }
}
