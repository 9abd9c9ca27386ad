//! Loading house snapshots and component inventories exported by storage.

mod parser;

use crate::health::domain::{ComponentRecord, HouseSnapshot};
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum InventoryImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Json(serde_json::Error),
    InvalidField {
        row: usize,
        field: &'static str,
        value: String,
    },
}

impl std::fmt::Display for InventoryImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InventoryImportError::Io(err) => write!(f, "failed to read inventory: {}", err),
            InventoryImportError::Csv(err) => write!(f, "invalid inventory CSV data: {}", err),
            InventoryImportError::Json(err) => write!(f, "invalid house snapshot JSON: {}", err),
            InventoryImportError::InvalidField { row, field, value } => write!(
                f,
                "inventory row {}: could not parse {} from '{}'",
                row, field, value
            ),
        }
    }
}

impl std::error::Error for InventoryImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InventoryImportError::Io(err) => Some(err),
            InventoryImportError::Csv(err) => Some(err),
            InventoryImportError::Json(err) => Some(err),
            InventoryImportError::InvalidField { .. } => None,
        }
    }
}

impl From<std::io::Error> for InventoryImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for InventoryImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<serde_json::Error> for InventoryImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Reads component rows from a CSV export.
///
/// Empty cells mean "missing" and are passed through as `None`; range checks
/// are left to the engine's input validation.
pub struct InventoryImporter;

impl InventoryImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<ComponentRecord>, InventoryImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ComponentRecord>, InventoryImportError> {
        parser::parse_components(reader)
    }
}

/// Reads a JSON house snapshot (`id`, `built_year`, `structure_type`, `components`).
pub fn load_house<R: Read>(reader: R) -> Result<HouseSnapshot, InventoryImportError> {
    Ok(serde_json::from_reader(reader)?)
}

pub fn load_house_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<HouseSnapshot, InventoryImportError> {
    let file = std::fs::File::open(path)?;
    load_house(std::io::BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::domain::{Category, ComponentId, StructureType};
    use chrono::NaiveDate;
    use std::io::Cursor;

    const HEADER: &str = "id,name,category,condition_score,installed_date,expected_lifespan,warranty_expires,last_inspection\n";

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn parse_date_supports_plain_and_rfc3339_values() {
        assert_eq!(parser::parse_date("2019-04-01"), Some(date(2019, 4, 1)));
        assert_eq!(
            parser::parse_date("2019-04-01T23:30:00-02:00"),
            Some(date(2019, 4, 2))
        );
        assert!(parser::parse_date("  ").is_none());
        assert!(parser::parse_date("April 2019").is_none());
    }

    #[test]
    fn blank_cells_become_missing_fields() {
        let csv = format!("{HEADER}r-1,Main roof, Roof ,72,,,,\n");
        let components = InventoryImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

        assert_eq!(components.len(), 1);
        let roof = &components[0];
        assert_eq!(roof.id, ComponentId("r-1".to_string()));
        assert_eq!(roof.category, Category::Roof);
        assert_eq!(roof.condition_score, 72.0);
        assert!(roof.installed_date.is_none());
        assert!(roof.expected_lifespan.is_none());
        assert!(roof.warranty_expires.is_none());
        assert!(roof.last_inspection.is_none());
    }

    #[test]
    fn full_rows_and_unknown_categories_import() {
        let csv = format!(
            "{HEADER}wh-1,Water heater,equipment,81.5,2016-05-01,12,2026-05-01T00:00:00Z,2023-11-20\n\
sp-1,Solar panels,Solar,90,2021-03-01,25,,\n"
        );
        let components = InventoryImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

        let heater = &components[0];
        assert_eq!(heater.installed_date, Some(date(2016, 5, 1)));
        assert_eq!(heater.expected_lifespan, Some(12.0));
        assert_eq!(heater.warranty_expires, Some(date(2026, 5, 1)));
        assert_eq!(heater.last_inspection, Some(date(2023, 11, 20)));
        assert_eq!(
            components[1].category,
            Category::Other("solar".to_string())
        );
    }

    #[test]
    fn unparseable_dates_name_row_and_field() {
        let csv = format!("{HEADER}r-1,Roof,roof,70,,,,\nr-2,Roof,roof,70,last spring,,,\n");

        match InventoryImporter::from_reader(Cursor::new(csv)) {
            Err(InventoryImportError::InvalidField { row, field, value }) => {
                assert_eq!(row, 2);
                assert_eq!(field, "installed_date");
                assert_eq!(value, "last spring");
            }
            other => panic!("expected invalid field, got {other:?}"),
        }
    }

    #[test]
    fn missing_condition_score_is_a_csv_error() {
        let csv = format!("{HEADER}r-1,Roof,roof,,,,,\n");
        match InventoryImporter::from_reader(Cursor::new(csv)) {
            Err(InventoryImportError::Csv(_)) => {}
            other => panic!("expected csv error, got {other:?}"),
        }
    }

    #[test]
    fn from_path_propagates_io_errors() {
        match InventoryImporter::from_path("./does-not-exist.csv") {
            Err(InventoryImportError::Io(_)) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn house_json_loads_profile_and_components() {
        let json = r#"{
            "id": "house-42",
            "built_year": 1979,
            "structure_type": "steel",
            "components": [
                {"id": "r-1", "name": "Roof", "category": "roof", "condition_score": 64,
                 "installed_date": "2004-07-01", "expected_lifespan": 25,
                 "warranty_expires": null, "last_inspection": "2022-09-12"}
            ]
        }"#;

        let snapshot = load_house(json.as_bytes()).expect("snapshot loads");
        assert_eq!(snapshot.profile.structure_type, Some(StructureType::Steel));
        assert_eq!(snapshot.components.len(), 1);
        assert_eq!(snapshot.components[0].expected_lifespan, Some(25.0));
        assert_eq!(snapshot.components[0].installed_date, Some(date(2004, 7, 1)));
    }
}
