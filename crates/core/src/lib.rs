pub mod catalog;
pub mod config;
pub mod domain;
pub mod errors;
pub mod loader;
pub mod pricing;

pub use catalog::CatalogSnapshot;
pub use domain::location::{Location, OpeningHours};
pub use domain::offer::{Availability, BestPrice, Offer, PriceBreakdown, QuotationResult};
pub use domain::request::QuoteRequest;
pub use domain::vehicle::{DamagePoint, VehicleGroup, VehicleParameter};
pub use errors::QuoteError;
pub use loader::{load_catalog, parse_catalog, CatalogError};
pub use pricing::{compute_quotation, AvailabilityOracle, FingerprintOracle, QuotationEngine};
