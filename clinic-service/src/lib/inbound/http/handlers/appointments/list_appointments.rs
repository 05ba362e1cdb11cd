use axum::extract::State;
use axum::http::StatusCode;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::AppointmentData;
use crate::inbound::http::router::AppState;

/// List appointments in chronological order.
pub async fn list_appointments(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<AppointmentData>>, ApiError> {
    state
        .clinic_service
        .list_appointments()
        .await
        .map_err(ApiError::from)
        .map(|appointments| {
            ApiSuccess::new(
                StatusCode::OK,
                appointments.iter().map(AppointmentData::from).collect(),
            )
        })
}
