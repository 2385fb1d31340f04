use axum::extract::State;
use axum::Json;
use rentquote_core::{Location, OpeningHours};

use crate::state::AppState;
use crate::wire::LocationDto;

/// `GET /api/v1/touroperator/locations`
pub async fn list_locations(State(_state): State<AppState>) -> Json<Vec<LocationDto>> {
    Json(rental_stations().iter().map(LocationDto::from_location).collect())
}

fn daily_openings(start: &str, end: &str) -> Vec<OpeningHours> {
    const DAY_NAMES: [&str; 7] =
        ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"];
    DAY_NAMES
        .iter()
        .enumerate()
        .map(|(index, name)| OpeningHours {
            day_of_week: (index + 1) as u8,
            day_name: (*name).to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
        })
        .collect()
}

/// The rental station directory. Static for now; a future release will read
/// it from the catalog file alongside the vehicle groups.
pub fn rental_stations() -> Vec<Location> {
    vec![
        Location {
            code: "XRJ".to_string(),
            name: "Roma Termini".to_string(),
            address: Some("Via Giovanni Giolitti".to_string()),
            street_number: Some("34".to_string()),
            city: Some("Roma".to_string()),
            location_type: 2,
            telephone: Some("+39 06 0000001".to_string()),
            email: Some("termini@rentquote.example".to_string()),
            latitude: Some(41.9010),
            longitude: Some(12.5011),
            is_airport: false,
            is_railway: true,
            openings: daily_openings("08:00", "20:00"),
            closings: Vec::new(),
            country: Some("IT".to_string()),
            zip_code: Some("00185".to_string()),
        },
        Location {
            code: "FCO".to_string(),
            name: "Roma Fiumicino Aeroporto".to_string(),
            address: Some("Via dell'Aeroporto di Fiumicino".to_string()),
            street_number: Some("320".to_string()),
            city: Some("Fiumicino".to_string()),
            location_type: 1,
            telephone: Some("+39 06 0000002".to_string()),
            email: Some("fiumicino@rentquote.example".to_string()),
            latitude: Some(41.8003),
            longitude: Some(12.2389),
            is_airport: true,
            is_railway: false,
            openings: daily_openings("08:00", "20:00"),
            closings: Vec::new(),
            country: Some("IT".to_string()),
            zip_code: Some("00054".to_string()),
        },
        Location {
            code: "MXP".to_string(),
            name: "Milano Malpensa Aeroporto".to_string(),
            address: Some("Aeroporto di Malpensa, Terminal 1".to_string()),
            street_number: None,
            city: Some("Ferno".to_string()),
            location_type: 1,
            telephone: Some("+39 02 0000003".to_string()),
            email: Some("malpensa@rentquote.example".to_string()),
            latitude: Some(45.6301),
            longitude: Some(8.7255),
            is_airport: true,
            is_railway: false,
            openings: daily_openings("08:00", "20:00"),
            closings: Vec::new(),
            country: Some("IT".to_string()),
            zip_code: Some("21010".to_string()),
        },
        Location {
            code: "FLR".to_string(),
            name: "Firenze Peretola Aeroporto".to_string(),
            address: Some("Via del Termine".to_string()),
            street_number: Some("11".to_string()),
            city: Some("Firenze".to_string()),
            location_type: 1,
            telephone: Some("+39 055 0000004".to_string()),
            email: Some("firenze@rentquote.example".to_string()),
            latitude: Some(43.8100),
            longitude: Some(11.2051),
            is_airport: true,
            is_railway: false,
            openings: daily_openings("08:00", "20:00"),
            closings: Vec::new(),
            country: Some("IT".to_string()),
            zip_code: Some("50127".to_string()),
        },
        Location {
            code: "PMO100".to_string(),
            name: "Palermo Centro".to_string(),
            address: Some("Via Francesco Crispi".to_string()),
            street_number: Some("120".to_string()),
            city: Some("Palermo".to_string()),
            location_type: 3,
            telephone: Some("+39 091 0000005".to_string()),
            email: Some("palermo@rentquote.example".to_string()),
            latitude: Some(38.1271),
            longitude: Some(13.3587),
            is_airport: false,
            is_railway: false,
            openings: daily_openings("08:30", "19:30"),
            closings: Vec::new(),
            country: Some("IT".to_string()),
            zip_code: Some("90139".to_string()),
        },
        Location {
            code: "AHO100".to_string(),
            name: "Alghero Centro".to_string(),
            address: Some("Via Giuseppe Garibaldi".to_string()),
            street_number: Some("89".to_string()),
            city: Some("Alghero".to_string()),
            location_type: 3,
            telephone: Some("+39 079 0000006".to_string()),
            email: Some("alghero@rentquote.example".to_string()),
            latitude: Some(40.5590),
            longitude: Some(8.3157),
            is_airport: false,
            is_railway: false,
            openings: daily_openings("08:30", "19:30"),
            closings: Vec::new(),
            country: Some("IT".to_string()),
            zip_code: Some("07041".to_string()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::rental_stations;

    #[test]
    fn station_codes_are_unique() {
        let stations = rental_stations();
        let mut codes: Vec<&str> = stations.iter().map(|station| station.code.as_str()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), stations.len());
    }

    #[test]
    fn every_station_has_a_full_week_of_openings() {
        for station in rental_stations() {
            assert_eq!(station.openings.len(), 7, "station {}", station.code);
            assert_eq!(station.openings[0].day_of_week, 1);
            assert_eq!(station.openings[6].day_of_week, 7);
        }
    }
}
