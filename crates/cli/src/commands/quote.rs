use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use clap::Args;
use rentquote_core::config::{AppConfig, LoadOptions};
use rentquote_core::{compute_quotation, load_catalog, CatalogSnapshot, QuoteRequest};
use rust_decimal::Decimal;

use super::CommandResult;

#[derive(Debug, Args)]
pub struct QuoteArgs {
    #[arg(long, help = "Catalog JSON file (defaults to the configured path)")]
    pub catalog: Option<PathBuf>,
    #[arg(long, help = "Pickup location code, e.g. FCO")]
    pub pickup: String,
    #[arg(long = "drop-off", help = "Drop-off location code, e.g. MXP")]
    pub drop_off: String,
    #[arg(long, help = "Pickup datetime, e.g. 2025-07-10T10:00")]
    pub start: String,
    #[arg(long, help = "Return datetime, e.g. 2025-07-13T12:00")]
    pub end: String,
    #[arg(long, help = "Driver age in years")]
    pub age: Option<i64>,
    #[arg(long, help = "Booking channel, e.g. WEB")]
    pub channel: Option<String>,
    #[arg(long, help = "Coupon code")]
    pub coupon: Option<String>,
    #[arg(long, help = "Explicit pre-VAT discount amount")]
    pub discount: Option<Decimal>,
    #[arg(long = "macro", help = "Only price groups in this macro category")]
    pub macro_filter: Option<String>,
    #[arg(long, help = "Force the young-driver surcharge")]
    pub young: bool,
    #[arg(long, help = "Force the senior-driver surcharge")]
    pub senior: bool,
    #[arg(long, help = "Emit machine-readable JSON output")]
    pub json: bool,
}

pub fn run(args: QuoteArgs) -> CommandResult {
    let catalog = match resolve_catalog(args.catalog.as_deref()) {
        Ok(catalog) => catalog,
        Err(result) => return result,
    };

    let pickup_at = match parse_datetime(&args.start) {
        Some(value) => value,
        None => {
            return CommandResult::failure(
                "quote",
                "invalid_argument",
                format!("could not parse --start `{}`", args.start),
                2,
            )
        }
    };
    let return_at = match parse_datetime(&args.end) {
        Some(value) => value,
        None => {
            return CommandResult::failure(
                "quote",
                "invalid_argument",
                format!("could not parse --end `{}`", args.end),
                2,
            )
        }
    };

    let request = QuoteRequest {
        pickup_location: args.pickup,
        drop_off_location: args.drop_off,
        pickup_at,
        return_at,
        driver_age: args.age,
        channel: args.channel,
        coupon: args.coupon,
        discount_amount: args.discount,
        macro_category: args.macro_filter,
        young_driver: args.young.then_some(true),
        senior_driver: args.senior.then_some(true),
    };

    let result = match compute_quotation(&catalog, &request) {
        Ok(result) => result,
        Err(error) => return CommandResult::failure("quote", "invalid_window", error.to_string(), 1),
    };

    if args.json {
        let output = serde_json::to_string_pretty(&result)
            .unwrap_or_else(|error| format!("{{\"error\":\"{error}\"}}"));
        return CommandResult { exit_code: 0, output };
    }

    CommandResult { exit_code: 0, output: render_table(&result, catalog.currency()) }
}

fn resolve_catalog(
    override_path: Option<&std::path::Path>,
) -> Result<CatalogSnapshot, CommandResult> {
    let path = match override_path {
        Some(path) => path.to_path_buf(),
        None => match AppConfig::load(LoadOptions::default()) {
            Ok(config) => config.catalog.path,
            Err(error) => {
                return Err(CommandResult::failure(
                    "quote",
                    "config_validation",
                    error.to_string(),
                    2,
                ))
            }
        },
    };

    load_catalog(&path)
        .map_err(|error| CommandResult::failure("quote", "catalog_load", error.to_string(), 3))
}

/// Accepts `YYYY-MM-DDTHH:MM[:SS]` and bare `YYYY-MM-DD` (midnight).
fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim().trim_end_matches('Z');
    if let Ok(value) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Some(value.and_utc());
    }
    if let Ok(value) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M") {
        return Some(value.and_utc());
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|value| value.and_utc())
}

fn render_table(result: &rentquote_core::QuotationResult, currency: &str) -> String {
    let mut lines = vec![
        format!(
            "{} -> {}  {} .. {}",
            result.pickup_location,
            result.drop_off_location,
            result.pickup_at.format("%Y-%m-%d %H:%M"),
            result.return_at.format("%Y-%m-%d %H:%M"),
        ),
        format!("{:<6} {:<36} {:<12} {:>4} {:>12}", "CODE", "MODEL", "STATUS", "DAYS", "TOTAL"),
    ];

    for offer in &result.offers {
        lines.push(format!(
            "{:<6} {:<36} {:<12} {:>4} {:>12}",
            offer.group.code,
            truncate(&offer.group.display_name, 36),
            offer.availability.as_str(),
            offer.price.days,
            format!("{} {}", offer.price.total.round_dp(2), currency),
        ));
    }

    match &result.best_price {
        Some(best) => lines.push(format!(
            "minimum over available offers: {} {} ({} {} pre-VAT)",
            best.total.round_dp(2),
            currency,
            best.pre_vat.round_dp(2),
            currency,
        )),
        None => lines.push("no available offers".to_string()),
    }

    lines.join("\n")
}

fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        value.to_string()
    } else {
        let kept: String = value.chars().take(max.saturating_sub(1)).collect();
        format!("{kept}…")
    }
}
