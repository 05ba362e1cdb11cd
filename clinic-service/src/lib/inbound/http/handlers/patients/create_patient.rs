use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::PatientData;
use crate::inbound::http::handlers::PatientRequestBody;
use crate::inbound::http::router::AppState;

pub async fn create_patient(
    State(state): State<AppState>,
    Json(body): Json<PatientRequestBody>,
) -> Result<ApiSuccess<PatientData>, ApiError> {
    state
        .clinic_service
        .create_patient(body.try_into_new_patient()?)
        .await
        .map_err(ApiError::from)
        .map(|ref patient| ApiSuccess::new(StatusCode::CREATED, patient.into()))
}
