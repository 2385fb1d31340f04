use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::vehicle::{DamagePoint, VehicleGroup};

/// Immutable snapshot of the vehicle-group catalog plus its pricing facts.
///
/// Loaded once at process start and shared read-only; a reload publishes a
/// fresh snapshot rather than mutating groups in place, so in-flight
/// quotations never observe a half-updated catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    groups: Vec<VehicleGroup>,
    currency: String,
    vat_pct: Decimal,
}

impl CatalogSnapshot {
    pub fn new(groups: Vec<VehicleGroup>, currency: impl Into<String>, vat_pct: Decimal) -> Self {
        Self { groups, currency: currency.into(), vat_pct }
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn vat_pct(&self) -> Decimal {
        self.vat_pct
    }

    /// Every group, in catalog order.
    pub fn groups(&self) -> &[VehicleGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Groups that can be picked up at `location`, preserving catalog order.
    pub fn eligible_for<'a>(&'a self, location: &'a str) -> impl Iterator<Item = &'a VehicleGroup> {
        self.groups.iter().filter(move |group| group.serves(location))
    }

    pub fn find_by_id(&self, id: &str) -> Option<&VehicleGroup> {
        self.groups.iter().find(|group| group.id.as_deref() == Some(id))
    }

    /// Damage records for a plate or VIN, with the owning group.
    pub fn damages_for(&self, plate_or_vin: &str) -> Option<(&VehicleGroup, &[DamagePoint])> {
        self.groups.iter().find_map(|group| {
            group.damages.get(plate_or_vin).map(|points| (group, points.as_slice()))
        })
    }
}
