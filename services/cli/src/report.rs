use crate::infra::{parse_date, resolve_today};
use chrono::NaiveDate;
use clap::Args;
use house_dna::config::AppConfig;
use house_dna::error::AppError;
use house_dna::health::{Category, HealthEngine, HealthReportSummary, ScoringConfig};
use house_dna::inventory::{load_house_from_path, InventoryImporter};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// House snapshot JSON (id, built_year, structure_type, components)
    #[arg(long)]
    pub(crate) house: PathBuf,
    /// Optional component inventory CSV appended to the snapshot's components
    #[arg(long)]
    pub(crate) inventory: Option<PathBuf>,
    /// Assessment date (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the report summary as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ScheduleArgs {
    /// Component category (roof, exterior, interior, equipment, electrical, plumbing, ...)
    #[arg(long)]
    pub(crate) category: String,
    /// Date of the last maintenance (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) last_maintenance: Option<NaiveDate>,
    /// Reference date used when there is no maintenance history
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the result as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Serialize)]
struct ScheduleResponse {
    category: Category,
    cycle_years: u32,
    last_maintenance: Option<NaiveDate>,
    next_recommended: NaiveDate,
}

pub(crate) fn run_assess(args: AssessArgs, config: &AppConfig) -> Result<(), AppError> {
    let AssessArgs {
        house,
        inventory,
        today,
        json,
    } = args;

    let today = resolve_today(today, config);
    let mut snapshot = load_house_from_path(&house)?;
    if let Some(path) = inventory {
        let imported = InventoryImporter::from_path(&path)?;
        info!(
            house = %snapshot.id,
            components = imported.len(),
            path = %path.display(),
            "imported component inventory"
        );
        snapshot.components.extend(imported);
    }

    let engine = HealthEngine::new(ScoringConfig::standard());
    let summary = engine.assess(&snapshot, today)?.summary();

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        render_summary(&summary);
    }
    Ok(())
}

pub(crate) fn run_schedule(args: ScheduleArgs, config: &AppConfig) -> Result<(), AppError> {
    let today = resolve_today(args.today, config);
    let category = Category::parse(&args.category);
    let engine = HealthEngine::new(ScoringConfig::standard());

    let response = ScheduleResponse {
        cycle_years: engine.config().maintenance_cycle_years(&category),
        next_recommended: engine.next_maintenance(&category, args.last_maintenance, today),
        last_maintenance: args.last_maintenance,
        category,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        let since = response
            .last_maintenance
            .map(|date| format!("last maintained {date}"))
            .unwrap_or_else(|| format!("no maintenance history, counting from {today}"));
        println!(
            "{}: every {} years ({}) -> next maintenance {}",
            response.category.label(),
            response.cycle_years,
            since,
            response.next_recommended
        );
    }
    Ok(())
}

pub(crate) fn render_summary(summary: &HealthReportSummary) {
    println!(
        "House {} health report ({})",
        summary.house_id, summary.assessed_on
    );
    println!(
        "Overall score: {} (age deduction -{}, structure bonus +{})",
        summary.overall_score, summary.age_deduction, summary.structure_bonus
    );

    if summary.categories.is_empty() {
        println!("No tracked components.");
    } else {
        println!("Category scores:");
        for entry in &summary.categories {
            println!(
                "  - {}: {} ({} component(s))",
                entry.category_label, entry.score, entry.components
            );
        }
    }

    if !summary.recommendations.is_empty() {
        println!("Recommendations:");
        for recommendation in &summary.recommendations {
            println!("  - {recommendation}");
        }
    }

    if !summary.risks.is_empty() {
        println!(
            "Component risk: {} high | {} medium | {} low",
            summary.risk_counts.high, summary.risk_counts.medium, summary.risk_counts.low
        );
        for risk in &summary.risks {
            println!(
                "  - [{}] {} ({}): {}",
                risk.level_label, risk.name, risk.category_label, risk.reason
            );
        }
    }

    if !summary.maintenance.is_empty() {
        println!("Maintenance schedule:");
        for entry in &summary.maintenance {
            let marker = if entry.due { " (due)" } else { "" };
            println!(
                "  - {} {} ({}, every {} years){}",
                entry.next_recommended, entry.name, entry.category_label, entry.cycle_years, marker
            );
        }
    }
}
