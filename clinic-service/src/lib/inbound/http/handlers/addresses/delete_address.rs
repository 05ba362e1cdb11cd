use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::clinic::models::AddressId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Delete an address; patients and dentists pointing at it keep their
/// row with the link cleared.
pub async fn delete_address(
    State(state): State<AppState>,
    Path(address_id): Path<i64>,
) -> Result<ApiSuccess<()>, ApiError> {
    state
        .clinic_service
        .delete_address(&AddressId(address_id))
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}
