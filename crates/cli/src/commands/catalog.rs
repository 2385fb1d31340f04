use std::path::Path;

use rentquote_core::config::{AppConfig, LoadOptions};
use rentquote_core::{load_catalog, VehicleGroup};

use super::CommandResult;

pub fn run(override_path: Option<&Path>, location: Option<&str>, json: bool) -> CommandResult {
    let path = match override_path {
        Some(path) => path.to_path_buf(),
        None => match AppConfig::load(LoadOptions::default()) {
            Ok(config) => config.catalog.path,
            Err(error) => {
                return CommandResult::failure("catalog", "config_validation", error.to_string(), 2)
            }
        },
    };

    let catalog = match load_catalog(&path) {
        Ok(catalog) => catalog,
        Err(error) => {
            return CommandResult::failure("catalog", "catalog_load", error.to_string(), 3)
        }
    };

    let groups: Vec<&VehicleGroup> = match location {
        Some(code) => catalog.eligible_for(code).collect(),
        None => catalog.groups().iter().collect(),
    };

    if json {
        let output = serde_json::to_string_pretty(&groups)
            .unwrap_or_else(|error| format!("{{\"error\":\"{error}\"}}"));
        return CommandResult { exit_code: 0, output };
    }

    let mut lines = vec![format!(
        "{} group(s), currency {}, VAT {}%",
        groups.len(),
        catalog.currency(),
        catalog.vat_pct(),
    )];
    lines.push(format!(
        "{:<6} {:<36} {:>10}  {}",
        "CODE", "MODEL", "RATE/DAY", "LOCATIONS"
    ));
    for group in groups {
        lines.push(format!(
            "{:<6} {:<36} {:>10}  {}",
            group.code,
            group.display_name,
            group.daily_rate.round_dp(2),
            group.locations.join(","),
        ));
    }

    CommandResult { exit_code: 0, output: lines.join("\n") }
}
