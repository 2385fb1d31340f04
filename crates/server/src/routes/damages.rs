use axum::extract::{Path, State};
use axum::Json;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::state::AppState;
use crate::wire::{DamagePointDto, DamagesData, DamagesEnvelope, WireframeImageDto};

const WIREFRAME_HEIGHT: u32 = 353;
const WIREFRAME_WIDTH: u32 = 698;

/// `GET /api/v1/touroperator/damages/{plate}`
///
/// An unknown plate yields an empty damage list rather than a 404, matching
/// the reference contract.
pub async fn get_damages(
    State(state): State<AppState>,
    Path(plate): Path<String>,
) -> Json<DamagesEnvelope> {
    let damages = state
        .catalog
        .damages_for(&plate)
        .map(|(_, points)| points.iter().map(DamagePointDto::from_point).collect())
        .unwrap_or_default();

    Json(DamagesEnvelope {
        data: DamagesData {
            damages,
            wireframe_image: WireframeImageDto {
                image: STANDARD.encode(b"placeholder"),
                height: WIREFRAME_HEIGHT,
                width: WIREFRAME_WIDTH,
            },
        },
    })
}
