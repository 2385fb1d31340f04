use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;
use crate::wire::{CatalogGroupDto, VehiclesPageDto};

const DEFAULT_PAGE_SIZE: usize = 25;
const MAX_PAGE_SIZE: usize = 100;

#[derive(Debug, Default, Deserialize)]
pub struct VehiclesQuery {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub skip: Option<usize>,
    #[serde(default)]
    pub page_size: Option<usize>,
}

/// `GET /api/v1/touroperator/vehicles`
///
/// Catalog listing with skip-based pagination and an optional
/// case-insensitive location filter.
pub async fn list_vehicles(
    State(state): State<AppState>,
    Query(query): Query<VehiclesQuery>,
) -> Json<VehiclesPageDto> {
    let skip = query.skip.unwrap_or(0);
    let page_size = query.page_size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);

    let filter = query.location.as_deref().map(str::trim).filter(|value| !value.is_empty());
    let matching: Vec<&rentquote_core::VehicleGroup> = state
        .catalog
        .groups()
        .iter()
        .filter(|group| match filter {
            Some(wanted) => {
                group.locations.iter().any(|location| location.eq_ignore_ascii_case(wanted))
            }
            None => true,
        })
        .collect();

    let total = matching.len();
    let items: Vec<CatalogGroupDto> = matching
        .into_iter()
        .skip(skip)
        .take(page_size)
        .map(CatalogGroupDto::from_group)
        .collect();

    let has_next = skip + page_size < total;
    Json(VehiclesPageDto {
        total,
        skip,
        page_size,
        has_next,
        next_skip: has_next.then(|| skip + page_size),
        prev_skip: (skip > 0).then(|| skip.saturating_sub(page_size)),
        items,
    })
}

/// `GET /api/v1/touroperator/vehicles/{id}`
pub async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CatalogGroupDto>, ApiError> {
    state
        .catalog
        .find_by_id(&id)
        .map(CatalogGroupDto::from_group)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Vehicle group {id} not found")))
}
