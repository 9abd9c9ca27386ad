use super::InventoryImportError;
use crate::health::domain::{Category, ComponentId, ComponentRecord};
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};
use std::io::Read;

pub(crate) fn parse_components<R: Read>(
    reader: R,
) -> Result<Vec<ComponentRecord>, InventoryImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut components = Vec::new();

    for (index, record) in csv_reader.deserialize::<InventoryRow>().enumerate() {
        let row = record?;
        components.push(row.into_component(index + 1)?);
    }

    Ok(components)
}

#[derive(Debug, Deserialize)]
struct InventoryRow {
    id: String,
    #[serde(default)]
    name: String,
    category: String,
    condition_score: f64,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    installed_date: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    expected_lifespan: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    warranty_expires: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    last_inspection: Option<String>,
}

impl InventoryRow {
    fn into_component(self, row: usize) -> Result<ComponentRecord, InventoryImportError> {
        let installed_date = optional_date(row, "installed_date", self.installed_date)?;
        let warranty_expires = optional_date(row, "warranty_expires", self.warranty_expires)?;
        let last_inspection = optional_date(row, "last_inspection", self.last_inspection)?;
        let expected_lifespan = self
            .expected_lifespan
            .map(|raw| {
                raw.parse::<f64>()
                    .map_err(|_| InventoryImportError::InvalidField {
                        row,
                        field: "expected_lifespan",
                        value: raw.clone(),
                    })
            })
            .transpose()?;

        Ok(ComponentRecord {
            id: ComponentId(self.id),
            name: self.name,
            category: Category::parse(&self.category),
            condition_score: self.condition_score,
            installed_date,
            expected_lifespan,
            warranty_expires,
            last_inspection,
        })
    }
}

fn optional_date(
    row: usize,
    field: &'static str,
    raw: Option<String>,
) -> Result<Option<NaiveDate>, InventoryImportError> {
    raw.map(|value| match parse_date(&value) {
        Some(date) => Ok(date),
        None => Err(InventoryImportError::InvalidField { row, field, value }),
    })
    .transpose()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp (truncated to its UTC date).
pub(crate) fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }

    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|dt| dt.naive_utc().date())
}
