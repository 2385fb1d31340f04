pub mod availability;
pub mod discounts;
pub mod engine;
pub mod surcharges;
pub mod temporal;

pub use availability::{AvailabilityOracle, FingerprintOracle};
pub use engine::{compute_quotation, QuotationEngine};
