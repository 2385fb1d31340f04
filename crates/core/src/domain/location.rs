use serde::{Deserialize, Serialize};

/// One opening (or closing) interval for a weekday, times as `HH:MM`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHours {
    pub day_of_week: u8,
    pub day_name: String,
    pub start_time: String,
    pub end_time: String,
}

/// A rental station. Static reference data served by the locations endpoint;
/// the quotation core itself only ever sees the location *codes*.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub code: String,
    pub name: String,
    pub address: Option<String>,
    pub street_number: Option<String>,
    pub city: Option<String>,
    pub location_type: i32,
    pub telephone: Option<String>,
    pub email: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub is_airport: bool,
    pub is_railway: bool,
    pub openings: Vec<OpeningHours>,
    pub closings: Vec<OpeningHours>,
    pub country: Option<String>,
    pub zip_code: Option<String>,
}
