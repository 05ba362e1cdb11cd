use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::clinic::models::AppointmentId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn delete_appointment(
    State(state): State<AppState>,
    Path(appointment_id): Path<i64>,
) -> Result<ApiSuccess<()>, ApiError> {
    state
        .clinic_service
        .delete_appointment(&AppointmentId(appointment_id))
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}
