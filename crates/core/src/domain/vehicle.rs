use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Display-oriented spec sheet entry for a vehicle group (e.g. trunk volume).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleParameter {
    pub name: String,
    pub description: String,
    pub position: i32,
}

/// A recorded damage point on a specific plate, positioned on the wireframe.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DamagePoint {
    pub description: Option<String>,
    pub damage_type: Option<String>,
    pub damage_dictionary: Option<String>,
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub percentage_x: Option<f64>,
    pub percentage_y: Option<f64>,
}

/// One rentable vehicle group from the catalog.
///
/// Reference data: loaded once per process lifetime and never mutated by a
/// request. `code` is the ACRISS-style international group code and doubles
/// as the availability fingerprint key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VehicleGroup {
    pub id: Option<String>,
    pub code: String,
    pub national_code: Option<String>,
    pub display_name: String,
    pub macro_category: Option<String>,
    pub vehicle_type: Option<String>,
    pub seats: Option<u8>,
    pub doors: Option<u8>,
    pub transmission: Option<String>,
    pub fuel: Option<String>,
    pub aircon: Option<bool>,
    pub image_url: Option<String>,
    pub daily_rate: Decimal,
    pub locations: Vec<String>,
    pub plates: Vec<String>,
    pub parameters: Vec<VehicleParameter>,
    pub damages: BTreeMap<String, Vec<DamagePoint>>,
}

impl VehicleGroup {
    /// Whether this group can be picked up at `location`. Codes compare
    /// exactly as provided by the catalog.
    pub fn serves(&self, location: &str) -> bool {
        self.locations.iter().any(|code| code == location)
    }

    /// Case-insensitive match against a requested macro category filter.
    pub fn matches_macro(&self, filter: &str) -> bool {
        self.macro_category
            .as_deref()
            .is_some_and(|category| category.eq_ignore_ascii_case(filter.trim()))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::VehicleGroup;

    fn group(macro_category: Option<&str>, locations: &[&str]) -> VehicleGroup {
        VehicleGroup {
            id: Some("1".to_string()),
            code: "CDMR".to_string(),
            national_code: Some("D".to_string()),
            display_name: "Volkswagen Golf or similar".to_string(),
            macro_category: macro_category.map(str::to_string),
            vehicle_type: Some("HATCHBACK".to_string()),
            seats: Some(5),
            doors: Some(5),
            transmission: Some("M".to_string()),
            fuel: Some("PETROL".to_string()),
            aircon: Some(true),
            image_url: None,
            daily_rate: Decimal::new(4600, 2),
            locations: locations.iter().map(|code| code.to_string()).collect(),
            plates: Vec::new(),
            parameters: Vec::new(),
            damages: Default::default(),
        }
    }

    #[test]
    fn serves_is_exact_on_location_codes() {
        let group = group(None, &["FCO", "MXP"]);
        assert!(group.serves("FCO"));
        assert!(!group.serves("fco"));
        assert!(!group.serves("FLR"));
    }

    #[test]
    fn macro_filter_is_case_insensitive() {
        let group = group(Some("COMPACT"), &["FCO"]);
        assert!(group.matches_macro("compact"));
        assert!(group.matches_macro(" Compact "));
        assert!(!group.matches_macro("SUV"));
    }

    #[test]
    fn macro_filter_never_matches_groups_without_category() {
        let group = group(None, &["FCO"]);
        assert!(!group.matches_macro("SUV"));
    }
}
