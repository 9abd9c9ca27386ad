use crate::infra::{parse_date, resolve_today, InMemoryHouseRepository};
use crate::report::render_summary;
use chrono::{Datelike, Months, NaiveDate};
use clap::Args;
use house_dna::config::AppConfig;
use house_dna::error::AppError;
use house_dna::health::{
    Category, ComponentId, ComponentRecord, HouseHealthService, HouseId, HouseProfile,
    HouseSnapshot, ScoringConfig, StructureType,
};
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the assessment date (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the report summary as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_demo(args: DemoArgs, config: &AppConfig) -> Result<(), AppError> {
    let today = resolve_today(args.today, config);
    let snapshot = sample_house(today);
    let house_id = snapshot.id.clone();

    let repository = Arc::new(InMemoryHouseRepository::default());
    repository.insert(snapshot);
    let service = HouseHealthService::new(repository.clone(), ScoringConfig::standard());

    let summary = service.assess(&house_id, today)?.summary();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("HOUSE DNA demo");
    render_summary(&summary);
    println!(
        "\nStored {} assessment(s) for {}",
        repository.assessment_count(&house_id),
        house_id
    );
    Ok(())
}

/// A 27-year-old timber house whose dates are relative to `today`.
fn sample_house(today: NaiveDate) -> HouseSnapshot {
    let years_ago = |years: u32| {
        today
            .checked_sub_months(Months::new(years * 12))
            .unwrap_or(today)
    };
    let months_ago = |months: u32| today.checked_sub_months(Months::new(months)).unwrap_or(today);
    let months_ahead = |months: u32| today.checked_add_months(Months::new(months)).unwrap_or(today);

    let component = |id: &str, name: &str, category: Category, condition_score: f64| {
        ComponentRecord {
            id: ComponentId(id.to_string()),
            name: name.to_string(),
            category,
            condition_score,
            installed_date: None,
            expected_lifespan: None,
            warranty_expires: None,
            last_inspection: None,
        }
    };

    HouseSnapshot {
        id: HouseId("demo-house".to_string()),
        profile: HouseProfile {
            built_year: Some(years_ago(27).year()),
            structure_type: Some(StructureType::Wood),
        },
        components: vec![
            ComponentRecord {
                installed_date: Some(years_ago(18)),
                expected_lifespan: Some(20.0),
                last_inspection: Some(months_ago(30)),
                ..component("roof-1", "Clay tile roof", Category::Roof, 68.0)
            },
            ComponentRecord {
                installed_date: Some(years_ago(12)),
                expected_lifespan: Some(30.0),
                last_inspection: Some(months_ago(8)),
                ..component("ext-1", "Exterior paint", Category::Exterior, 74.0)
            },
            ComponentRecord {
                installed_date: Some(years_ago(3)),
                expected_lifespan: Some(15.0),
                warranty_expires: Some(months_ahead(30)),
                last_inspection: Some(months_ago(2)),
                ..component("int-1", "Bathroom unit", Category::Interior, 88.0)
            },
            ComponentRecord {
                installed_date: Some(years_ago(11)),
                expected_lifespan: Some(10.0),
                ..component("eq-1", "Gas water heater", Category::Equipment, 52.0)
            },
            component("el-1", "Distribution board", Category::Electrical, 81.0),
            ComponentRecord {
                last_inspection: Some(months_ago(40)),
                ..component("pl-1", "Drain piping", Category::Plumbing, 44.0)
            },
        ],
    }
}
