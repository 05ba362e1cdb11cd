use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::clinic::models::SurgeryId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Delete a surgery; appointments referencing it keep running with the
/// reference cleared.
pub async fn delete_surgery(
    State(state): State<AppState>,
    Path(surgery_id): Path<i64>,
) -> Result<ApiSuccess<()>, ApiError> {
    state
        .clinic_service
        .delete_surgery(&SurgeryId(surgery_id))
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}
