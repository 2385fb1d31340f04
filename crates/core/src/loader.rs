use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::catalog::CatalogSnapshot;
use crate::domain::vehicle::{DamagePoint, VehicleGroup, VehicleParameter};

const DEFAULT_CURRENCY: &str = "EUR";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not read catalog file `{path}`: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("could not parse catalog file `{path}`: {source}")]
    Parse { path: PathBuf, source: serde_json::Error },
    #[error("catalog validation failed: {0}")]
    Validation(String),
}

/// Loads a catalog JSON file into an immutable [`CatalogSnapshot`].
///
/// The engine never touches the filesystem itself; the server and CLI call
/// this once at startup and hand the snapshot around behind an `Arc`.
pub fn load_catalog(path: &Path) -> Result<CatalogSnapshot, CatalogError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| CatalogError::Read { path: path.to_path_buf(), source })?;
    let file: CatalogFile = serde_json::from_str(&raw)
        .map_err(|source| CatalogError::Parse { path: path.to_path_buf(), source })?;
    build_snapshot(file)
}

/// Same as [`load_catalog`] but from an in-memory JSON document.
pub fn parse_catalog(raw: &str) -> Result<CatalogSnapshot, CatalogError> {
    let file: CatalogFile = serde_json::from_str(raw)
        .map_err(|source| CatalogError::Validation(source.to_string()))?;
    build_snapshot(file)
}

fn build_snapshot(file: CatalogFile) -> Result<CatalogSnapshot, CatalogError> {
    let vat_pct = file.vat_percentage.unwrap_or_else(|| Decimal::new(22, 0));
    if vat_pct < Decimal::ZERO {
        return Err(CatalogError::Validation(format!(
            "vat_percentage must not be negative (got {vat_pct})"
        )));
    }

    let currency = file.currency.unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

    let mut groups = Vec::with_capacity(file.groups.len());
    for record in file.groups {
        groups.push(record.into_group()?);
    }

    Ok(CatalogSnapshot::new(groups, currency, vat_pct))
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    currency: Option<String>,
    vat_percentage: Option<Decimal>,
    #[serde(default)]
    groups: Vec<GroupRecord>,
}

/// Catalog ids appear both as integers and as strings in the wild.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum IdValue {
    Int(i64),
    Text(String),
}

impl IdValue {
    fn into_string(self) -> String {
        match self {
            IdValue::Int(value) => value.to_string(),
            IdValue::Text(value) => value,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GroupRecord {
    id: Option<IdValue>,
    national_code: Option<String>,
    international_code: String,
    description: Option<String>,
    display_name: Option<String>,
    vendor_macro: Option<String>,
    vehicle_type: Option<String>,
    seats: Option<u8>,
    doors: Option<u8>,
    transmission: Option<String>,
    fuel: Option<String>,
    aircon: Option<bool>,
    image_url: Option<String>,
    daily_rate: Option<Decimal>,
    #[serde(default)]
    locations: Vec<String>,
    #[serde(default)]
    plates: Vec<String>,
    #[serde(default)]
    vehicle_parameters: Vec<ParameterRecord>,
    #[serde(default)]
    damages: BTreeMap<String, Vec<DamageRecord>>,
}

#[derive(Debug, Deserialize)]
struct ParameterRecord {
    name: String,
    description: String,
    position: i32,
}

#[derive(Debug, Deserialize)]
struct DamageRecord {
    description: Option<String>,
    #[serde(rename = "damageType")]
    damage_type: Option<String>,
    #[serde(rename = "damageDictionary")]
    damage_dictionary: Option<String>,
    x: Option<i32>,
    y: Option<i32>,
    percentage_x: Option<f64>,
    percentage_y: Option<f64>,
}

impl GroupRecord {
    fn into_group(self) -> Result<VehicleGroup, CatalogError> {
        let code = self.international_code.trim().to_string();
        if code.is_empty() {
            return Err(CatalogError::Validation(
                "group is missing its international code".to_string(),
            ));
        }

        let daily_rate = self.daily_rate.ok_or_else(|| {
            CatalogError::Validation(format!("group `{code}` is missing daily_rate"))
        })?;
        if daily_rate < Decimal::ZERO {
            return Err(CatalogError::Validation(format!(
                "group `{code}` has a negative daily_rate ({daily_rate})"
            )));
        }

        let display_name = self
            .display_name
            .or(self.description)
            .unwrap_or_else(|| code.clone());

        Ok(VehicleGroup {
            id: self.id.map(IdValue::into_string),
            code,
            national_code: self.national_code,
            display_name,
            macro_category: self.vendor_macro,
            vehicle_type: self.vehicle_type,
            seats: self.seats,
            doors: self.doors,
            transmission: self.transmission,
            fuel: self.fuel,
            aircon: self.aircon,
            image_url: self.image_url,
            daily_rate,
            locations: self.locations,
            plates: self.plates,
            parameters: self
                .vehicle_parameters
                .into_iter()
                .map(|parameter| VehicleParameter {
                    name: parameter.name,
                    description: parameter.description,
                    position: parameter.position,
                })
                .collect(),
            damages: self
                .damages
                .into_iter()
                .map(|(plate, points)| {
                    let points = points
                        .into_iter()
                        .map(|point| DamagePoint {
                            description: point.description,
                            damage_type: point.damage_type,
                            damage_dictionary: point.damage_dictionary,
                            x: point.x,
                            y: point.y,
                            percentage_x: point.percentage_x,
                            percentage_y: point.percentage_y,
                        })
                        .collect();
                    (plate, points)
                })
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use rust_decimal::Decimal;
    use tempfile::TempDir;

    use super::{load_catalog, parse_catalog, CatalogError};

    const SAMPLE: &str = r#"{
        "currency": "EUR",
        "vat_percentage": 22,
        "groups": [
            {
                "id": 1,
                "national_code": "D",
                "international_code": "CDMR",
                "display_name": "Volkswagen Golf or similar",
                "vendor_macro": "COMPACT",
                "vehicle_type": "HATCHBACK",
                "seats": 5,
                "doors": 5,
                "transmission": "M",
                "fuel": "PETROL",
                "aircon": true,
                "daily_rate": 46.0,
                "locations": ["FCO", "MXP", "FLR"],
                "plates": ["AB123CD"],
                "vehicle_parameters": [
                    {"name": "Bagagliaio", "description": "185 L", "position": 4}
                ],
                "damages": {
                    "AB123CD": [
                        {"description": "scratch", "damageType": "LIGHT", "x": 10, "y": 20}
                    ]
                }
            },
            {
                "id": "K-001",
                "international_code": "IFAR",
                "description": "Nissan Qashqai or similar",
                "vendor_macro": "SUV",
                "daily_rate": 72.5,
                "locations": ["FCO"]
            }
        ]
    }"#;

    #[test]
    fn parses_the_full_shape() {
        let catalog = parse_catalog(SAMPLE).expect("sample should parse");

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.currency(), "EUR");
        assert_eq!(catalog.vat_pct(), Decimal::new(22, 0));

        let golf = catalog.find_by_id("1").expect("numeric id coerces to string");
        assert_eq!(golf.code, "CDMR");
        assert_eq!(golf.daily_rate, Decimal::new(4600, 2));
        assert_eq!(golf.parameters.len(), 1);
        assert!(golf.damages.contains_key("AB123CD"));

        let suv = catalog.find_by_id("K-001").expect("string id preserved");
        assert_eq!(suv.display_name, "Nissan Qashqai or similar");
    }

    #[test]
    fn defaults_currency_and_vat_when_absent() {
        let catalog = parse_catalog(r#"{"groups": []}"#).expect("empty catalog is valid");
        assert_eq!(catalog.currency(), "EUR");
        assert_eq!(catalog.vat_pct(), Decimal::new(22, 0));
        assert!(catalog.is_empty());
    }

    #[test]
    fn missing_daily_rate_is_a_validation_error() {
        let raw = r#"{"groups": [{"international_code": "CDMR", "locations": ["FCO"]}]}"#;
        let error = parse_catalog(raw).expect_err("daily_rate is required");
        assert!(matches!(error, CatalogError::Validation(ref message) if message.contains("CDMR")));
    }

    #[test]
    fn negative_vat_is_rejected() {
        let error = parse_catalog(r#"{"vat_percentage": -1, "groups": []}"#)
            .expect_err("negative vat must fail");
        assert!(matches!(error, CatalogError::Validation(_)));
    }

    #[test]
    fn loads_from_disk() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("vehicles.json");
        fs::write(&path, SAMPLE).expect("write sample");

        let catalog = load_catalog(&path).expect("file should load");
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn unreadable_path_is_a_read_error() {
        let error = load_catalog(std::path::Path::new("/definitely/missing/vehicles.json"))
            .expect_err("missing file must fail");
        assert!(matches!(error, CatalogError::Read { .. }));
    }
}
