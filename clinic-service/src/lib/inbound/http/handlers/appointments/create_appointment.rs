use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::AppointmentData;
use crate::inbound::http::handlers::AppointmentRequestBody;
use crate::inbound::http::router::AppState;

pub async fn create_appointment(
    State(state): State<AppState>,
    Json(body): Json<AppointmentRequestBody>,
) -> Result<ApiSuccess<AppointmentData>, ApiError> {
    state
        .clinic_service
        .create_appointment(body.into_new_appointment())
        .await
        .map_err(ApiError::from)
        .map(|ref appointment| ApiSuccess::new(StatusCode::CREATED, appointment.into()))
}
