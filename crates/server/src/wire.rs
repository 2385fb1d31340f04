//! Wire DTOs for the Myrent-style contract.
//!
//! Field names and nesting here mirror the reference API exactly; the core
//! keeps its own idiomatic names and full-precision decimals. Monetary
//! values are rounded to two fraction digits at this boundary only.

use chrono::{DateTime, NaiveDateTime, Utc};
use rentquote_core::{
    Availability, CatalogSnapshot, DamagePoint, Location, Offer, QuotationResult, QuoteRequest,
    VehicleGroup,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

fn money(amount: Decimal) -> f64 {
    amount.round_dp(2).to_f64().unwrap_or_default()
}

/// Parses the reference API's ISO-8601 timestamps. A trailing `Z` or an
/// explicit offset is accepted but the *written* wall-clock time is kept,
/// matching the original's naive-hour semantics for the out-of-hours fee.
pub fn parse_iso_datetime(raw: &str) -> Result<DateTime<Utc>, ApiError> {
    let trimmed = raw.trim().trim_end_matches('Z');

    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    if let Ok(fixed) = DateTime::parse_from_rfc3339(raw.trim()) {
        return Ok(fixed.naive_local().and_utc());
    }

    Err(ApiError::BadRequest(format!("Invalid ISO datetime: {raw}")))
}

/// `age` arrives as an integer or a numeric string; anything else is
/// silently treated as unknown, as the reference API does.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum AgeValue {
    Int(i64),
    Text(String),
}

impl AgeValue {
    pub fn to_age(&self) -> Option<i64> {
        match self {
            AgeValue::Int(value) => Some(*value),
            AgeValue::Text(value) => value.trim().parse().ok(),
        }
    }
}

/// `discountValueWithoutVat` arrives as a number or a numeric string;
/// unparsable strings are ignored rather than rejected.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    Int(i64),
    Float(f64),
    Text(String),
}

impl NumberOrText {
    pub fn to_decimal(&self) -> Option<Decimal> {
        match self {
            NumberOrText::Int(value) => Some(Decimal::from(*value)),
            NumberOrText::Float(value) => Decimal::try_from(*value).ok(),
            NumberOrText::Text(value) => value.trim().parse().ok(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationWireRequest {
    pub pickup_location: String,
    pub drop_off_location: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub age: Option<AgeValue>,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub show_pics: bool,
    #[serde(default)]
    pub show_optional_image: bool,
    #[serde(default)]
    pub show_vehicle_parameter: bool,
    #[serde(default)]
    pub show_vehicle_extra_image: bool,
    #[serde(default)]
    pub agreement_coupon: Option<String>,
    #[serde(default)]
    pub discount_value_without_vat: Option<NumberOrText>,
    #[serde(default)]
    pub macro_description: Option<String>,
    #[serde(default)]
    pub show_booking_discount: bool,
    #[serde(default)]
    pub is_young_driver_age: Option<bool>,
    #[serde(default)]
    pub is_senior_driver_age: Option<bool>,
}

impl QuotationWireRequest {
    /// Coerces the wire payload into the core's normalized request.
    pub fn into_quote_request(self) -> Result<QuoteRequest, ApiError> {
        let pickup_at = parse_iso_datetime(&self.start_date)?;
        let return_at = parse_iso_datetime(&self.end_date)?;

        Ok(QuoteRequest {
            pickup_location: self.pickup_location,
            drop_off_location: self.drop_off_location,
            pickup_at,
            return_at,
            driver_age: self.age.as_ref().and_then(AgeValue::to_age),
            channel: self.channel,
            coupon: self.agreement_coupon,
            discount_amount: self
                .discount_value_without_vat
                .as_ref()
                .and_then(NumberOrText::to_decimal),
            macro_category: self.macro_description,
            young_driver: self.is_young_driver_age,
            senior_driver: self.is_senior_driver_age,
        })
    }
}

// ---------------------------------------------------------------------------
// Quotation response
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct QuotationEnvelope {
    pub data: QuotationData,
}

#[derive(Debug, Serialize)]
pub struct QuotationData {
    pub total: usize,
    #[serde(rename = "PickUpLocation")]
    pub pickup_location: String,
    #[serde(rename = "ReturnLocation")]
    pub return_location: String,
    #[serde(rename = "PickUpDateTime")]
    pub pickup_date_time: String,
    #[serde(rename = "ReturnDateTime")]
    pub return_date_time: String,
    #[serde(rename = "Vehicles")]
    pub vehicles: Vec<VehicleStatusDto>,
    pub optionals: Vec<OptionalItemDto>,
    #[serde(rename = "TotalCharge")]
    pub total_charge: TotalChargeDto,
}

#[derive(Debug, Serialize)]
pub struct TotalChargeDto {
    #[serde(rename = "EstimatedTotalAmount")]
    pub estimated_total_amount: f64,
    #[serde(rename = "RateTotalAmount")]
    pub rate_total_amount: f64,
}

#[derive(Debug, Serialize)]
pub struct VehicleStatusDto {
    #[serde(rename = "Status")]
    pub status: &'static str,
    #[serde(rename = "Reference")]
    pub reference: ReferenceDto,
    #[serde(rename = "Vehicle")]
    pub vehicle: BookingVehicleDto,
    #[serde(rename = "vehicleParameter", skip_serializing_if = "Option::is_none")]
    pub vehicle_parameter: Option<Vec<VehicleParameterDto>>,
    #[serde(rename = "vehicleExtraImage", skip_serializing_if = "Option::is_none")]
    pub vehicle_extra_image: Option<Vec<String>>,
    #[serde(rename = "groupPic", skip_serializing_if = "Option::is_none")]
    pub group_pic: Option<GroupPicDto>,
}

#[derive(Debug, Serialize)]
pub struct ReferenceDto {
    pub calculated: CalculatedDto,
}

#[derive(Debug, Serialize)]
pub struct CalculatedDto {
    pub days: i64,
    pub base_daily: f64,
    pub pre_vat: f64,
    pub vat_pct: f64,
    pub total: f64,
}

#[derive(Debug, Serialize)]
pub struct VehMakeModelDto {
    #[serde(rename = "Name")]
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct BookingVehicleDto {
    pub id: Option<String>,
    #[serde(rename = "Code")]
    pub code: String,
    #[serde(rename = "CodeContext")]
    pub code_context: &'static str,
    #[serde(rename = "nationalCode")]
    pub national_code: Option<String>,
    #[serde(rename = "VehMakeModel")]
    pub veh_make_model: Vec<VehMakeModelDto>,
    pub model: Option<String>,
    pub brand: Option<String>,
    pub version: Option<String>,
    #[serde(rename = "VendorCarMacroGroup")]
    pub vendor_car_macro_group: Option<String>,
    #[serde(rename = "VendorCarType")]
    pub vendor_car_type: Option<String>,
    pub seats: Option<u8>,
    pub doors: Option<u8>,
    pub transmission: Option<String>,
    pub fuel: Option<String>,
    pub aircon: Option<bool>,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
    #[serde(rename = "dailyRate")]
    pub daily_rate: f64,
    pub km: i64,
    pub color: Option<String>,
    pub plate_no: Option<String>,
    pub chasis_no: Option<String>,
    pub locations: Vec<String>,
    pub plates: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct VehicleParameterDto {
    pub name: String,
    pub description: String,
    pub position: i32,
    #[serde(rename = "fileUrl")]
    pub file_url: String,
}

#[derive(Debug, Serialize)]
pub struct GroupPicDto {
    pub id: u32,
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct OptionalItemDto {
    #[serde(rename = "Charge")]
    pub charge: ChargeDto,
    #[serde(rename = "Equipment")]
    pub equipment: EquipmentDto,
}

#[derive(Debug, Serialize)]
pub struct ChargeDto {
    #[serde(rename = "Amount")]
    pub amount: f64,
    #[serde(rename = "CurrencyCode")]
    pub currency_code: String,
    #[serde(rename = "Description")]
    pub description: &'static str,
    #[serde(rename = "IncludedInEstTotalInd")]
    pub included_in_est_total_ind: bool,
    #[serde(rename = "IncludedInRate")]
    pub included_in_rate: bool,
    #[serde(rename = "TaxInclusive")]
    pub tax_inclusive: bool,
}

#[derive(Debug, Serialize)]
pub struct EquipmentDto {
    #[serde(rename = "Description")]
    pub description: &'static str,
    #[serde(rename = "EquipType")]
    pub equip_type: &'static str,
    #[serde(rename = "Quantity")]
    pub quantity: u32,
    #[serde(rename = "isMultipliable")]
    pub is_multipliable: bool,
    #[serde(rename = "optionalImage")]
    pub optional_image: Option<String>,
}

/// Display-only flags from the request; each optional response section is
/// emitted only when its flag is set.
#[derive(Clone, Copy, Debug, Default)]
pub struct DisplayFlags {
    pub show_pics: bool,
    pub show_vehicle_parameter: bool,
    pub show_vehicle_extra_image: bool,
}

impl DisplayFlags {
    pub fn from_request(request: &QuotationWireRequest) -> Self {
        Self {
            show_pics: request.show_pics,
            show_vehicle_parameter: request.show_vehicle_parameter,
            show_vehicle_extra_image: request.show_vehicle_extra_image,
        }
    }
}

pub fn quotation_envelope(
    result: &QuotationResult,
    catalog: &CatalogSnapshot,
    flags: DisplayFlags,
) -> QuotationEnvelope {
    let vehicles: Vec<VehicleStatusDto> =
        result.offers.iter().map(|offer| vehicle_status(offer, flags)).collect();
    let days = result.offers.first().map(|offer| offer.price.days).unwrap_or(1);

    QuotationEnvelope {
        data: QuotationData {
            total: vehicles.len(),
            pickup_location: result.pickup_location.clone(),
            return_location: result.drop_off_location.clone(),
            pickup_date_time: format!("{}Z", result.pickup_at.format("%Y-%m-%dT%H:%M:%S")),
            return_date_time: format!("{}Z", result.return_at.format("%Y-%m-%dT%H:%M:%S")),
            vehicles,
            optionals: optional_items(catalog.currency(), days),
            total_charge: TotalChargeDto {
                estimated_total_amount: money(result.minimum_total()),
                rate_total_amount: money(result.minimum_pre_vat()),
            },
        },
    }
}

fn vehicle_status(offer: &Offer, flags: DisplayFlags) -> VehicleStatusDto {
    let group = &offer.group;

    let vehicle_parameter = (flags.show_vehicle_parameter && !group.parameters.is_empty()).then(
        || {
            group
                .parameters
                .iter()
                .map(|parameter| VehicleParameterDto {
                    name: parameter.name.clone(),
                    description: parameter.description.clone(),
                    position: parameter.position,
                    file_url: String::new(),
                })
                .collect()
        },
    );

    VehicleStatusDto {
        status: match offer.availability {
            Availability::Available => "Available",
            Availability::Unavailable => "Unavailable",
        },
        reference: ReferenceDto {
            calculated: CalculatedDto {
                days: offer.price.days,
                base_daily: money(offer.price.base_daily),
                pre_vat: money(offer.price.pre_vat),
                vat_pct: money(offer.price.vat_pct),
                total: money(offer.price.total),
            },
        },
        vehicle: booking_vehicle(group),
        vehicle_parameter,
        vehicle_extra_image: flags.show_vehicle_extra_image.then(Vec::new),
        group_pic: flags
            .show_pics
            .then(|| GroupPicDto { id: group_pic_id(&group.code), url: group.image_url.clone() }),
    }
}

fn booking_vehicle(group: &VehicleGroup) -> BookingVehicleDto {
    BookingVehicleDto {
        id: group.id.clone(),
        code: group.code.clone(),
        code_context: "ACRISS",
        national_code: group.national_code.clone(),
        veh_make_model: vec![VehMakeModelDto { name: group.display_name.clone() }],
        model: Some(group.display_name.clone()),
        brand: None,
        version: None,
        vendor_car_macro_group: group.macro_category.clone(),
        vendor_car_type: group.vehicle_type.clone(),
        seats: group.seats,
        doors: group.doors,
        transmission: group.transmission.clone(),
        fuel: group.fuel.clone(),
        aircon: group.aircon,
        image_url: group.image_url.clone(),
        daily_rate: money(group.daily_rate),
        km: 0,
        color: None,
        plate_no: None,
        chasis_no: None,
        locations: group.locations.clone(),
        plates: group.plates.clone(),
    }
}

/// Stable small id for the group pic, derived from the group code.
fn group_pic_id(code: &str) -> u32 {
    code.bytes().fold(0u32, |acc, byte| acc.wrapping_mul(31).wrapping_add(u32::from(byte))) % 1000
}

fn optional_items(currency: &str, days: i64) -> Vec<OptionalItemDto> {
    let charge = |amount_per_day: i64, description: &'static str| ChargeDto {
        amount: money(Decimal::from(amount_per_day * days)),
        currency_code: currency.to_string(),
        description,
        included_in_est_total_ind: true,
        included_in_rate: false,
        tax_inclusive: false,
    };

    vec![
        OptionalItemDto {
            charge: charge(8, "CHILD SEAT"),
            equipment: EquipmentDto {
                description: "Child seat",
                equip_type: "BABY",
                quantity: 1,
                is_multipliable: true,
                optional_image: None,
            },
        },
        OptionalItemDto {
            charge: charge(12, "ADDITIONAL DRIVER"),
            equipment: EquipmentDto {
                description: "Additional driver",
                equip_type: "ADDITIONAL",
                quantity: 1,
                is_multipliable: false,
                optional_image: None,
            },
        },
    ]
}

// ---------------------------------------------------------------------------
// Catalog listing / locations / damages
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct CatalogGroupDto {
    pub id: Option<String>,
    pub national_code: Option<String>,
    pub international_code: String,
    pub display_name: String,
    pub vendor_macro: Option<String>,
    pub vehicle_type: Option<String>,
    pub seats: Option<u8>,
    pub doors: Option<u8>,
    pub transmission: Option<String>,
    pub fuel: Option<String>,
    pub aircon: Option<bool>,
    pub image_url: Option<String>,
    pub daily_rate: f64,
    pub locations: Vec<String>,
    pub plates: Vec<String>,
    pub vehicle_parameters: Vec<VehicleParameterEntryDto>,
}

#[derive(Debug, Serialize)]
pub struct VehicleParameterEntryDto {
    pub name: String,
    pub description: String,
    pub position: i32,
}

impl CatalogGroupDto {
    pub fn from_group(group: &VehicleGroup) -> Self {
        Self {
            id: group.id.clone(),
            national_code: group.national_code.clone(),
            international_code: group.code.clone(),
            display_name: group.display_name.clone(),
            vendor_macro: group.macro_category.clone(),
            vehicle_type: group.vehicle_type.clone(),
            seats: group.seats,
            doors: group.doors,
            transmission: group.transmission.clone(),
            fuel: group.fuel.clone(),
            aircon: group.aircon,
            image_url: group.image_url.clone(),
            daily_rate: money(group.daily_rate),
            locations: group.locations.clone(),
            plates: group.plates.clone(),
            vehicle_parameters: group
                .parameters
                .iter()
                .map(|parameter| VehicleParameterEntryDto {
                    name: parameter.name.clone(),
                    description: parameter.description.clone(),
                    position: parameter.position,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct VehiclesPageDto {
    pub total: usize,
    pub skip: usize,
    pub page_size: usize,
    pub has_next: bool,
    pub next_skip: Option<usize>,
    pub prev_skip: Option<usize>,
    pub items: Vec<CatalogGroupDto>,
}

#[derive(Debug, Serialize)]
pub struct OpeningDto {
    #[serde(rename = "dayOfTheWeek")]
    pub day_of_the_week: u8,
    #[serde(rename = "dayOfTheWeekName")]
    pub day_of_the_week_name: String,
    #[serde(rename = "startTime")]
    pub start_time: String,
    #[serde(rename = "endTime")]
    pub end_time: String,
}

#[derive(Debug, Serialize)]
pub struct LocationDto {
    #[serde(rename = "locationCode")]
    pub location_code: String,
    #[serde(rename = "locationName")]
    pub location_name: String,
    #[serde(rename = "locationAddress")]
    pub location_address: Option<String>,
    #[serde(rename = "locationNumber")]
    pub location_number: Option<String>,
    #[serde(rename = "locationCity")]
    pub location_city: Option<String>,
    #[serde(rename = "locationType")]
    pub location_type: i32,
    #[serde(rename = "telephoneNumber")]
    pub telephone_number: Option<String>,
    pub email: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(rename = "isAirport")]
    pub is_airport: bool,
    #[serde(rename = "isRailway")]
    pub is_railway: bool,
    pub openings: Vec<OpeningDto>,
    #[serde(rename = "closing", skip_serializing_if = "Option::is_none")]
    pub closing: Option<Vec<OpeningDto>>,
    pub country: Option<String>,
    #[serde(rename = "zipCode")]
    pub zip_code: Option<String>,
}

impl LocationDto {
    pub fn from_location(location: &Location) -> Self {
        let opening = |hours: &rentquote_core::OpeningHours| OpeningDto {
            day_of_the_week: hours.day_of_week,
            day_of_the_week_name: hours.day_name.clone(),
            start_time: hours.start_time.clone(),
            end_time: hours.end_time.clone(),
        };

        Self {
            location_code: location.code.clone(),
            location_name: location.name.clone(),
            location_address: location.address.clone(),
            location_number: location.street_number.clone(),
            location_city: location.city.clone(),
            location_type: location.location_type,
            telephone_number: location.telephone.clone(),
            email: location.email.clone(),
            latitude: location.latitude,
            longitude: location.longitude,
            is_airport: location.is_airport,
            is_railway: location.is_railway,
            openings: location.openings.iter().map(opening).collect(),
            closing: (!location.closings.is_empty())
                .then(|| location.closings.iter().map(opening).collect()),
            country: location.country.clone(),
            zip_code: location.zip_code.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DamagePointDto {
    pub description: Option<String>,
    #[serde(rename = "damageType")]
    pub damage_type: Option<String>,
    #[serde(rename = "damageDictionary")]
    pub damage_dictionary: Option<String>,
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub percentage_x: Option<f64>,
    pub percentage_y: Option<f64>,
}

impl DamagePointDto {
    pub fn from_point(point: &DamagePoint) -> Self {
        Self {
            description: point.description.clone(),
            damage_type: point.damage_type.clone(),
            damage_dictionary: point.damage_dictionary.clone(),
            x: point.x,
            y: point.y,
            percentage_x: point.percentage_x,
            percentage_y: point.percentage_y,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WireframeImageDto {
    pub image: String,
    pub height: u32,
    pub width: u32,
}

#[derive(Debug, Serialize)]
pub struct DamagesData {
    pub damages: Vec<DamagePointDto>,
    #[serde(rename = "wireframeImage")]
    pub wireframe_image: WireframeImageDto,
}

#[derive(Debug, Serialize)]
pub struct DamagesEnvelope {
    pub data: DamagesData,
}
