use std::env;
use std::fs;
use std::sync::{Mutex, OnceLock};

use rentquote_cli::commands::{catalog, quote, CommandResult};
use serde_json::Value;
use tempfile::TempDir;

const CATALOG: &str = r#"{
    "currency": "EUR",
    "vat_percentage": 22,
    "groups": [
        {
            "id": 1,
            "international_code": "CDMR",
            "display_name": "Volkswagen Golf or similar",
            "vendor_macro": "COMPACT",
            "daily_rate": 80.0,
            "locations": ["FCO", "MXP"]
        },
        {
            "id": 2,
            "international_code": "IFAR",
            "display_name": "Nissan Qashqai or similar",
            "vendor_macro": "SUV",
            "daily_rate": 120.0,
            "locations": ["FCO"]
        }
    ]
}"#;

fn quote_args(catalog: Option<std::path::PathBuf>, start: &str, end: &str) -> quote::QuoteArgs {
    quote::QuoteArgs {
        catalog,
        pickup: "FCO".to_string(),
        drop_off: "MXP".to_string(),
        start: start.to_string(),
        end: end.to_string(),
        age: Some(30),
        channel: None,
        coupon: None,
        discount: None,
        macro_filter: None,
        young: false,
        senior: false,
        json: false,
    }
}

fn write_catalog(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("vehicles.json");
    fs::write(&path, CATALOG).expect("write catalog fixture");
    path
}

#[test]
fn quote_renders_offers_and_the_minimum() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_catalog(&dir);

    with_env(&[], || {
        let result =
            quote::run(quote_args(Some(path.clone()), "2025-07-10T10:00", "2025-07-13T12:00"));
        assert_eq!(result.exit_code, 0, "expected successful quote: {}", result.output);
        assert!(result.output.contains("CDMR"));
        assert!(result.output.contains("IFAR"));
        assert!(
            result.output.contains("minimum over available offers")
                || result.output.contains("no available offers")
        );
    });
}

#[test]
fn quote_json_output_is_the_full_result() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_catalog(&dir);

    with_env(&[], || {
        let mut args = quote_args(Some(path.clone()), "2025-07-10T10:00", "2025-07-13T12:00");
        args.json = true;
        let result = quote::run(args);
        assert_eq!(result.exit_code, 0);

        let payload: Value = serde_json::from_str(&result.output).expect("json output");
        assert_eq!(payload["pickup_location"], "FCO");
        assert_eq!(payload["offers"].as_array().map(Vec::len), Some(2));
    });
}

#[test]
fn quote_rejects_an_inverted_window() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_catalog(&dir);

    with_env(&[], || {
        let result =
            quote::run(quote_args(Some(path.clone()), "2025-07-13T10:00", "2025-07-10T10:00"));
        assert_eq!(result.exit_code, 1);

        let payload = parse_payload(&result);
        assert_eq!(payload["command"], "quote");
        assert_eq!(payload["error_class"], "invalid_window");
    });
}

#[test]
fn quote_rejects_an_unparsable_start() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_catalog(&dir);

    with_env(&[], || {
        let result = quote::run(quote_args(Some(path.clone()), "10/07/2025", "2025-07-13T12:00"));
        assert_eq!(result.exit_code, 2);

        let payload = parse_payload(&result);
        assert_eq!(payload["error_class"], "invalid_argument");
    });
}

#[test]
fn quote_reports_a_missing_catalog_file() {
    with_env(&[], || {
        let result = quote::run(quote_args(
            Some(std::path::PathBuf::from("/definitely/missing/vehicles.json")),
            "2025-07-10T10:00",
            "2025-07-13T12:00",
        ));
        assert_eq!(result.exit_code, 3);

        let payload = parse_payload(&result);
        assert_eq!(payload["error_class"], "catalog_load");
    });
}

#[test]
fn catalog_listing_filters_by_location() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_catalog(&dir);

    with_env(&[], || {
        let all = catalog::run(Some(&path), None, false);
        assert_eq!(all.exit_code, 0);
        assert!(all.output.contains("2 group(s)"));

        let filtered = catalog::run(Some(&path), Some("MXP"), false);
        assert_eq!(filtered.exit_code, 0);
        assert!(filtered.output.contains("CDMR"));
        assert!(!filtered.output.contains("IFAR"));
    });
}

#[test]
fn catalog_listing_honors_the_env_catalog_path() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_catalog(&dir);
    let path_text = path.display().to_string();

    with_env(&[("RENTQUOTE_CATALOG_PATH", path_text.as_str())], || {
        let result = catalog::run(None, None, true);
        assert_eq!(result.exit_code, 0, "expected env catalog path to load: {}", result.output);

        let payload: Value = serde_json::from_str(&result.output).expect("json output");
        assert_eq!(payload.as_array().map(Vec::len), Some(2));
    });
}

fn parse_payload(result: &CommandResult) -> Value {
    serde_json::from_str(&result.output).expect("command output should be JSON")
}

fn env_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

fn with_env(vars: &[(&str, &str)], body: impl FnOnce()) {
    let _guard = env_lock().lock().expect("env lock poisoned");

    let previous: Vec<(String, Option<String>)> = env::vars()
        .filter(|(key, _)| key.starts_with("RENTQUOTE_"))
        .map(|(key, value)| (key, Some(value)))
        .collect();
    for (key, _) in &previous {
        env::remove_var(key);
    }
    for (key, value) in vars {
        env::set_var(key, value);
    }

    body();

    for (key, _) in vars {
        env::remove_var(key);
    }
    for (key, value) in previous {
        match value {
            Some(value) => env::set_var(&key, value),
            None => env::remove_var(&key),
        }
    }
}
