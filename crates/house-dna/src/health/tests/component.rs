use super::common::*;

#[test]
fn component_without_dates_only_loses_missing_inspection_penalty() {
    let engine = engine();
    let condition = engine.score_component(&bare("c-1", "roof", 80.0), today());

    assert_eq!(condition.score, 70.0);
    assert_eq!(condition.inspection_deduction, 10);
    assert_eq!(condition.lifespan_deduction, 0);
    assert_eq!(condition.warranty_bonus, 0);
    assert!(condition.lifespan_ratio.is_none());
}

#[test]
fn recent_inspection_keeps_raw_condition() {
    let engine = engine();
    let condition = engine.score_component(&inspected("c-1", "roof", 80.0), today());

    assert_eq!(condition.score, 80.0);
    assert_eq!(condition.inspection_deduction, 0);
}

#[test]
fn stale_inspections_deduct_by_bracket() {
    let engine = engine();
    let cases = [
        (date(2022, 12, 1), 3),
        (date(2021, 9, 1), 7),
        (date(2019, 1, 1), 15),
    ];

    for (last_inspection, deduction) in cases {
        let mut component = bare("c-1", "plumbing", 90.0);
        component.last_inspection = Some(last_inspection);
        let condition = engine.score_component(&component, today());
        assert_eq!(
            condition.inspection_deduction, deduction,
            "inspection on {last_inspection}"
        );
        assert_eq!(condition.score, 90.0 - f64::from(deduction));
    }
}

#[test]
fn inspections_on_exact_anniversaries_stay_in_the_lower_bracket() {
    let engine = engine();
    let cases = [
        (date(2023, 6, 1), 0),
        (date(2022, 6, 1), 3),
        (date(2021, 6, 1), 7),
        (date(2021, 5, 31), 15),
    ];

    for (last_inspection, deduction) in cases {
        let mut component = bare("c-1", "roof", 80.0);
        component.last_inspection = Some(last_inspection);
        let condition = engine.score_component(&component, today());
        assert_eq!(
            condition.inspection_deduction, deduction,
            "inspection on {last_inspection}"
        );
    }
}

#[test]
fn lifespan_anniversaries_hit_bracket_limits_exactly() {
    let engine = engine();
    let cases = [
        (date(2019, 6, 1), today(), 5),
        (date(2017, 6, 1), today(), 15),
        (date(2015, 6, 1), today(), 25),
        (date(2014, 6, 1), today(), 40),
        (date(2014, 1, 1), date(2024, 1, 1), 40),
        (date(2014, 1, 2), date(2024, 1, 1), 25),
    ];

    for (installed_on, assessed_on, deduction) in cases {
        let component = installed(inspected("c-1", "equipment", 90.0), installed_on, 10.0);
        let condition = engine.score_component(&component, assessed_on);
        assert_eq!(
            condition.lifespan_deduction, deduction,
            "installed on {installed_on}, assessed on {assessed_on}"
        );
    }
}

#[test]
fn lifespan_ratio_deducts_on_steep_curve() {
    let engine = engine();
    let cases = [
        (date(2020, 6, 1), 0),
        (date(2018, 6, 1), 5),
        (date(2016, 6, 1), 15),
        (date(2015, 1, 1), 25),
        (date(2010, 1, 1), 40),
    ];

    for (installed_on, deduction) in cases {
        let component = installed(inspected("c-1", "equipment", 90.0), installed_on, 10.0);
        let condition = engine.score_component(&component, today());
        assert_eq!(
            condition.lifespan_deduction, deduction,
            "installed on {installed_on}"
        );
        assert_eq!(condition.score, 90.0 - f64::from(deduction));
    }
}

#[test]
fn lifespan_is_ignored_without_install_date() {
    let engine = engine();
    let mut component = inspected("c-1", "equipment", 90.0);
    component.expected_lifespan = Some(1.0);

    let condition = engine.score_component(&component, today());

    assert_eq!(condition.lifespan_deduction, 0);
    assert_eq!(condition.score, 90.0);
}

#[test]
fn active_warranty_adds_small_bonus() {
    let engine = engine();
    let cases = [
        (date(2027, 1, 1), 5),
        (date(2025, 12, 1), 3),
        (date(2024, 12, 1), 1),
        (date(2024, 6, 2), 1),
    ];

    for (expires, bonus) in cases {
        let mut component = inspected("c-1", "electrical", 60.0);
        component.warranty_expires = Some(expires);
        let condition = engine.score_component(&component, today());
        assert_eq!(condition.warranty_bonus, bonus, "warranty until {expires}");
        assert_eq!(condition.score, 60.0 + f64::from(bonus));
    }
}

#[test]
fn warranty_anniversaries_fall_to_the_lower_bonus() {
    let engine = engine();
    for (expires, bonus) in [(date(2026, 6, 1), 3), (date(2025, 6, 1), 1)] {
        let mut component = inspected("c-1", "electrical", 60.0);
        component.warranty_expires = Some(expires);
        let condition = engine.score_component(&component, today());
        assert_eq!(condition.warranty_bonus, bonus, "warranty until {expires}");
    }
}

#[test]
fn expired_or_same_day_warranty_earns_nothing() {
    let engine = engine();
    for expires in [date(2024, 5, 1), today()] {
        let mut component = inspected("c-1", "electrical", 60.0);
        component.warranty_expires = Some(expires);
        let condition = engine.score_component(&component, today());
        assert_eq!(condition.warranty_bonus, 0, "warranty until {expires}");
    }
}

#[test]
fn scores_are_clamped_at_both_ends() {
    let engine = engine();

    let mut pristine = inspected("c-1", "roof", 100.0);
    pristine.warranty_expires = Some(date(2030, 1, 1));
    assert_eq!(engine.score_component(&pristine, today()).score, 100.0);

    let worn_out = installed(bare("c-2", "roof", 5.0), date(1974, 1, 1), 1.0);
    let condition = engine.score_component(&worn_out, today());
    assert_eq!(condition.lifespan_deduction, 40);
    assert_eq!(condition.score, 0.0);
}

#[test]
fn higher_condition_never_lowers_component_score() {
    let engine = engine();
    let mut previous = f64::MIN;

    for condition_score in 0..=100 {
        let mut component = installed(
            bare("c-1", "exterior", f64::from(condition_score)),
            date(2015, 1, 1),
            10.0,
        );
        component.warranty_expires = Some(date(2025, 1, 1));
        let score = engine.score_component(&component, today()).score;
        assert!(
            score >= previous,
            "score dropped at condition {condition_score}"
        );
        assert!((0.0..=100.0).contains(&score));
        previous = score;
    }
}
