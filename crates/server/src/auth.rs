use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use secrecy::ExposeSecret;
use tracing::warn;

use crate::error::ApiError;
use crate::state::AppState;

/// Guards the `/api/v1` surface: the configured key must arrive in either
/// the `X-API-Key` header or the legacy `tokenValue` header.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let headers = request.headers();
    let presented = headers
        .get("x-api-key")
        .or_else(|| headers.get("tokenvalue"))
        .and_then(|value| value.to_str().ok());

    match presented {
        Some(key) if key == state.api_key.expose_secret() => Ok(next.run(request).await),
        Some(_) => {
            warn!(event_name = "api.auth.rejected", reason = "key_mismatch", "request rejected");
            Err(ApiError::Unauthorized)
        }
        None => {
            warn!(event_name = "api.auth.rejected", reason = "key_missing", "request rejected");
            Err(ApiError::Unauthorized)
        }
    }
}
