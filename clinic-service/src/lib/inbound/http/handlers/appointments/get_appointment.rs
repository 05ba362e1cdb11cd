use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::clinic::models::AppointmentId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::AppointmentData;
use crate::inbound::http::router::AppState;

pub async fn get_appointment(
    State(state): State<AppState>,
    Path(appointment_id): Path<i64>,
) -> Result<ApiSuccess<AppointmentData>, ApiError> {
    state
        .clinic_service
        .get_appointment(&AppointmentId(appointment_id))
        .await
        .map_err(ApiError::from)
        .map(|ref appointment| ApiSuccess::new(StatusCode::OK, appointment.into()))
}
