use super::domain::{Category, StructureType};

/// One row of a threshold table: a limit and the points awarded when it matches.
///
/// Whether `limit` is an exclusive upper bound, an inclusive upper bound or an
/// exclusive lower bound depends on the table that owns the bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    pub limit: f64,
    pub points: u8,
}

fn bracket(limit: f64, points: u8) -> Bracket {
    Bracket { limit, points }
}

/// Deduction by lifespan ratio; `ratio < limit` matches, first row wins.
#[derive(Debug, Clone, PartialEq)]
pub struct LifespanDeductions {
    pub brackets: Vec<Bracket>,
    pub end_of_life: u8,
}

impl LifespanDeductions {
    pub fn deduction(&self, ratio: f64) -> u8 {
        self.brackets
            .iter()
            .find(|row| ratio < row.limit)
            .map(|row| row.points)
            .unwrap_or(self.end_of_life)
    }
}

/// Deduction by months since the last inspection; `months <= limit` matches.
#[derive(Debug, Clone, PartialEq)]
pub struct InspectionDeductions {
    pub missing: u8,
    pub brackets: Vec<Bracket>,
    pub overdue: u8,
}

impl InspectionDeductions {
    pub fn deduction(&self, months_since: Option<f64>) -> u8 {
        let Some(months) = months_since else {
            return self.missing;
        };
        self.brackets
            .iter()
            .find(|row| months <= row.limit)
            .map(|row| row.points)
            .unwrap_or(self.overdue)
    }
}

/// Bonus by months of warranty remaining; `months > limit` matches.
#[derive(Debug, Clone, PartialEq)]
pub struct WarrantyBonuses {
    pub brackets: Vec<Bracket>,
    pub expiring: u8,
}

impl WarrantyBonuses {
    /// Only meaningful for warranties that are still active.
    pub fn bonus(&self, months_remaining: f64) -> u8 {
        self.brackets
            .iter()
            .find(|row| months_remaining > row.limit)
            .map(|row| row.points)
            .unwrap_or(self.expiring)
    }
}

/// Deduction by building age in years; `years <= limit` matches.
#[derive(Debug, Clone, PartialEq)]
pub struct AgeDeductions {
    pub brackets: Vec<Bracket>,
    pub beyond: u8,
}

impl AgeDeductions {
    pub fn deduction(&self, years: i32) -> u8 {
        let years = f64::from(years);
        self.brackets
            .iter()
            .find(|row| years <= row.limit)
            .map(|row| row.points)
            .unwrap_or(self.beyond)
    }
}

/// Cut-offs for component risk classification.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskThresholds {
    pub critical_condition: f64,
    pub poor_condition: f64,
    pub end_of_life_ratio: f64,
    pub approaching_end_of_life_ratio: f64,
    pub fair_condition: f64,
}

/// Cut-offs for recommendation messages.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationThresholds {
    pub overall_attention: u8,
    pub category_urgent: u8,
    pub category_planned: u8,
    pub age_deduction_notice: u8,
}

/// Immutable scoring tables shared by every stage of the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    pub lifespan: LifespanDeductions,
    pub inspection: InspectionDeductions,
    pub warranty: WarrantyBonuses,
    pub building_age: AgeDeductions,
    pub structure_bonuses: Vec<(StructureType, u8)>,
    pub category_weights: Vec<(Category, f64)>,
    pub default_category_weight: f64,
    pub maintenance_cycles: Vec<(Category, u32)>,
    pub default_cycle_years: u32,
    pub risk: RiskThresholds,
    pub recommendations: RecommendationThresholds,
}

impl ScoringConfig {
    /// The compiled-in HOUSE DNA tables.
    pub fn standard() -> Self {
        Self {
            lifespan: LifespanDeductions {
                brackets: vec![
                    bracket(0.5, 0),
                    bracket(0.7, 5),
                    bracket(0.9, 15),
                    bracket(1.0, 25),
                ],
                end_of_life: 40,
            },
            inspection: InspectionDeductions {
                missing: 10,
                brackets: vec![bracket(12.0, 0), bracket(24.0, 3), bracket(36.0, 7)],
                overdue: 15,
            },
            warranty: WarrantyBonuses {
                brackets: vec![bracket(24.0, 5), bracket(12.0, 3)],
                expiring: 1,
            },
            building_age: AgeDeductions {
                brackets: vec![
                    bracket(5.0, 0),
                    bracket(10.0, 2),
                    bracket(15.0, 5),
                    bracket(20.0, 8),
                    bracket(30.0, 12),
                    bracket(40.0, 18),
                ],
                beyond: 25,
            },
            structure_bonuses: vec![
                (StructureType::Rc, 5),
                (StructureType::Src, 5),
                (StructureType::Steel, 3),
                (StructureType::Wood, 0),
            ],
            category_weights: vec![
                (Category::Roof, 1.5),
                (Category::Exterior, 1.3),
                (Category::Plumbing, 1.2),
                (Category::Electrical, 1.1),
                (Category::Equipment, 1.0),
                (Category::Interior, 0.8),
            ],
            default_category_weight: 1.0,
            maintenance_cycles: vec![
                (Category::Roof, 10),
                (Category::Exterior, 10),
                (Category::Interior, 10),
                (Category::Equipment, 8),
                (Category::Electrical, 15),
                (Category::Plumbing, 15),
            ],
            default_cycle_years: 10,
            risk: RiskThresholds {
                critical_condition: 30.0,
                poor_condition: 50.0,
                end_of_life_ratio: 1.0,
                approaching_end_of_life_ratio: 0.8,
                fair_condition: 70.0,
            },
            recommendations: RecommendationThresholds {
                overall_attention: 50,
                category_urgent: 50,
                category_planned: 70,
                age_deduction_notice: 10,
            },
        }
    }

    pub fn category_weight(&self, category: &Category) -> f64 {
        self.category_weights
            .iter()
            .find(|(known, _)| known == category)
            .map(|(_, weight)| *weight)
            .unwrap_or(self.default_category_weight)
    }

    pub fn maintenance_cycle_years(&self, category: &Category) -> u32 {
        self.maintenance_cycles
            .iter()
            .find(|(known, _)| known == category)
            .map(|(_, years)| *years)
            .unwrap_or(self.default_cycle_years)
    }

    /// Missing or unrecognized structure types earn no bonus.
    pub fn structure_bonus(&self, structure: Option<&StructureType>) -> u8 {
        structure
            .and_then(|structure| {
                self.structure_bonuses
                    .iter()
                    .find(|(known, _)| known == structure)
            })
            .map(|(_, bonus)| *bonus)
            .unwrap_or(0)
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifespan_table_uses_exclusive_upper_bounds() {
        let table = ScoringConfig::standard().lifespan;
        assert_eq!(table.deduction(0.0), 0);
        assert_eq!(table.deduction(0.49), 0);
        assert_eq!(table.deduction(0.5), 5);
        assert_eq!(table.deduction(0.7), 15);
        assert_eq!(table.deduction(0.9), 25);
        assert_eq!(table.deduction(0.99), 25);
        assert_eq!(table.deduction(1.0), 40);
        assert_eq!(table.deduction(50.0), 40);
        assert_eq!(table.deduction(f64::INFINITY), 40);
    }

    #[test]
    fn inspection_table_uses_inclusive_upper_bounds() {
        let table = ScoringConfig::standard().inspection;
        assert_eq!(table.deduction(None), 10);
        assert_eq!(table.deduction(Some(0.0)), 0);
        assert_eq!(table.deduction(Some(12.0)), 0);
        assert_eq!(table.deduction(Some(12.5)), 3);
        assert_eq!(table.deduction(Some(24.0)), 3);
        assert_eq!(table.deduction(Some(36.0)), 7);
        assert_eq!(table.deduction(Some(36.1)), 15);
    }

    #[test]
    fn warranty_table_requires_strictly_more_remaining_months() {
        let table = ScoringConfig::standard().warranty;
        assert_eq!(table.bonus(30.0), 5);
        assert_eq!(table.bonus(24.0), 3);
        assert_eq!(table.bonus(12.5), 3);
        assert_eq!(table.bonus(12.0), 1);
        assert_eq!(table.bonus(0.5), 1);
    }

    #[test]
    fn building_age_buckets_match_published_table() {
        let table = ScoringConfig::standard().building_age;
        let expected = [
            (0, 0),
            (5, 0),
            (6, 2),
            (10, 2),
            (15, 5),
            (20, 8),
            (24, 12),
            (30, 12),
            (31, 18),
            (40, 18),
            (41, 25),
            (120, 25),
        ];
        for (years, deduction) in expected {
            assert_eq!(table.deduction(years), deduction, "age {years}");
        }
    }

    #[test]
    fn unknown_categories_fall_back_to_defaults() {
        let config = ScoringConfig::standard();
        let unknown = Category::Other("solar".to_string());
        assert_eq!(config.category_weight(&unknown), 1.0);
        assert_eq!(config.maintenance_cycle_years(&unknown), 10);
        assert_eq!(config.category_weight(&Category::Roof), 1.5);
        assert_eq!(config.maintenance_cycle_years(&Category::Plumbing), 15);
    }

    #[test]
    fn structure_bonus_defaults_to_zero() {
        let config = ScoringConfig::standard();
        assert_eq!(config.structure_bonus(Some(&StructureType::Src)), 5);
        assert_eq!(config.structure_bonus(Some(&StructureType::Rc)), 5);
        assert_eq!(config.structure_bonus(Some(&StructureType::Steel)), 3);
        assert_eq!(config.structure_bonus(Some(&StructureType::Wood)), 0);
        assert_eq!(
            config.structure_bonus(Some(&StructureType::Other("adobe".to_string()))),
            0
        );
        assert_eq!(config.structure_bonus(None), 0);
    }
}
