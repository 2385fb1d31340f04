use axum::extract::State;
use axum::Json;
use rentquote_core::{compute_quotation, QuoteError};
use tracing::info;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;
use crate::wire::{quotation_envelope, DisplayFlags, QuotationEnvelope, QuotationWireRequest};

/// `POST /api/v1/touroperator/quotations`
///
/// Runs the deterministic pricing engine over the catalog snapshot and
/// renders the result in the reference wire shape. The optional response
/// sections (`groupPic`, `vehicleParameter`, `vehicleExtraImage`) follow
/// the request's display flags.
pub async fn create_quotation(
    State(state): State<AppState>,
    Json(payload): Json<QuotationWireRequest>,
) -> Result<Json<QuotationEnvelope>, ApiError> {
    let flags = DisplayFlags::from_request(&payload);
    let request = payload.into_quote_request()?;

    let result = compute_quotation(&state.catalog, &request).map_err(|error| match error {
        QuoteError::InvalidWindow { .. } => {
            ApiError::BadRequest("endDate must be after startDate".to_string())
        }
    })?;

    info!(
        event_name = "api.quotation.computed",
        correlation_id = %Uuid::new_v4(),
        pickup = %result.pickup_location,
        drop_off = %result.drop_off_location,
        offers = result.offer_count(),
        "quotation computed"
    );

    Ok(Json(quotation_envelope(&result, &state.catalog, flags)))
}
