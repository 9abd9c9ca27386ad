use super::aggregate::{round_score, OverallScore};
use super::config::RecommendationThresholds;
use super::domain::Category;
use std::collections::BTreeMap;

/// Guidance in reporting order: overall notice, then one message per category
/// below the planned-maintenance cut-off, then the building-age notice.
pub(crate) fn generate(
    overall: &OverallScore,
    category_means: &BTreeMap<Category, f64>,
    thresholds: &RecommendationThresholds,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if overall.overall_score < thresholds.overall_attention {
        recommendations.push(format!(
            "Overall health score is {}; a comprehensive inspection and renovation plan is recommended",
            overall.overall_score
        ));
    }

    for (category, mean) in category_means {
        let score = round_score(*mean);
        if *mean < f64::from(thresholds.category_urgent) {
            recommendations.push(format!(
                "{}: score {} is critical; arrange an urgent inspection or repair",
                category.label(),
                score
            ));
        } else if *mean < f64::from(thresholds.category_planned) {
            recommendations.push(format!(
                "{}: score {} is declining; schedule planned maintenance",
                category.label(),
                score
            ));
        }
    }

    if overall.age_deduction > thresholds.age_deduction_notice {
        let age = overall
            .building_age
            .map(|years| format!(" ({years} years)"))
            .unwrap_or_default();
        recommendations.push(format!(
            "Building age{age} warrants periodic professional inspection"
        ));
    }

    recommendations
}
