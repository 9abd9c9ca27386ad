use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier wrapper for a tracked house.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HouseId(pub String);

impl fmt::Display for HouseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier wrapper for a single component row owned by storage.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ComponentId(pub String);

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Functional grouping of a component.
///
/// The six known categories are matched exhaustively; anything else is kept as
/// `Other` with its normalized name so it can still be scored with defaults.
/// Ordering follows declaration order, which is also the reporting order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Roof,
    Exterior,
    Interior,
    Equipment,
    Electrical,
    Plumbing,
    Other(String),
}

impl Category {
    pub const fn known() -> [Self; 6] {
        [
            Self::Roof,
            Self::Exterior,
            Self::Interior,
            Self::Equipment,
            Self::Electrical,
            Self::Plumbing,
        ]
    }

    pub fn parse(raw: &str) -> Self {
        let normalized = raw.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "roof" => Self::Roof,
            "exterior" => Self::Exterior,
            "interior" => Self::Interior,
            "equipment" => Self::Equipment,
            "electrical" => Self::Electrical,
            "plumbing" => Self::Plumbing,
            _ => Self::Other(normalized),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Roof => "roof",
            Self::Exterior => "exterior",
            Self::Interior => "interior",
            Self::Equipment => "equipment",
            Self::Electrical => "electrical",
            Self::Plumbing => "plumbing",
            Self::Other(name) => name,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Roof => "Roof",
            Self::Exterior => "Exterior",
            Self::Interior => "Interior",
            Self::Equipment => "Equipment",
            Self::Electrical => "Electrical",
            Self::Plumbing => "Plumbing",
            Self::Other(name) => name,
        }
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        match value {
            Category::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Primary structural system of the building.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StructureType {
    Wood,
    Steel,
    /// Reinforced concrete.
    Rc,
    /// Steel-reinforced concrete.
    Src,
    Other(String),
}

impl StructureType {
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "wood" => Self::Wood,
            "steel" => Self::Steel,
            "rc" => Self::Rc,
            "src" => Self::Src,
            _ => Self::Other(normalized),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Wood => "wood",
            Self::Steel => "steel",
            Self::Rc => "rc",
            Self::Src => "src",
            Self::Other(name) => name,
        }
    }
}

impl From<String> for StructureType {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<StructureType> for String {
    fn from(value: StructureType) -> Self {
        match value {
            StructureType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for StructureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Component row as supplied by storage. Read-only to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentRecord {
    pub id: ComponentId,
    #[serde(default)]
    pub name: String,
    pub category: Category,
    pub condition_score: f64,
    pub installed_date: Option<NaiveDate>,
    /// Expected service life in years; only used together with `installed_date`.
    pub expected_lifespan: Option<f64>,
    pub warranty_expires: Option<NaiveDate>,
    pub last_inspection: Option<NaiveDate>,
}

impl ComponentRecord {
    /// Years in service divided by expected lifespan, when both inputs are known.
    ///
    /// Install dates in the future count as zero years in service. A zero
    /// lifespan is treated as already past end of life.
    pub fn lifespan_ratio(&self, today: NaiveDate) -> Option<f64> {
        let installed = self.installed_date?;
        let lifespan = self.expected_lifespan?;
        let years = years_between(installed, today).max(0.0);
        if lifespan <= 0.0 {
            return Some(f64::INFINITY);
        }
        Some(years / lifespan)
    }
}

/// Structural metadata for a house, independent of its component inventory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HouseProfile {
    pub built_year: Option<i32>,
    pub structure_type: Option<StructureType>,
}

impl HouseProfile {
    /// Calendar years since construction; future build years count as zero.
    pub fn building_age(&self, today: NaiveDate) -> Option<i32> {
        self.built_year.map(|year| (today.year() - year).max(0))
    }
}

/// Full engine input: profile plus the house's component inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseSnapshot {
    pub id: HouseId,
    #[serde(flatten)]
    pub profile: HouseProfile,
    #[serde(default)]
    pub components: Vec<ComponentRecord>,
}

/// Urgency classification for a single component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    pub const fn ordered() -> [Self; 3] {
        [Self::High, Self::Medium, Self::Low]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub(crate) fn years_between(from: NaiveDate, to: NaiveDate) -> f64 {
    months_between(from, to) / 12.0
}

/// Elapsed calendar months, so exact anniversaries land on whole numbers.
///
/// The partial month is the share of days covered between the last whole-month
/// anniversary and the next one. Negative when `to` precedes `from`.
pub(crate) fn months_between(from: NaiveDate, to: NaiveDate) -> f64 {
    if to < from {
        return -months_between(to, from);
    }

    let shifted = |months: u32| from.checked_add_months(Months::new(months));
    let span = (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32;
    let mut whole = u32::try_from(span).unwrap_or(0);
    while whole > 0 && shifted(whole).map_or(true, |anniversary| anniversary > to) {
        whole -= 1;
    }

    let start = shifted(whole).unwrap_or(from);
    let partial = match shifted(whole + 1) {
        Some(end) if end > start => {
            (to - start).num_days() as f64 / (end - start).num_days() as f64
        }
        _ => 0.0,
    };
    f64::from(whole) + partial
}
