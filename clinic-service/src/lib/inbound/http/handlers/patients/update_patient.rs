use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::domain::clinic::models::PatientId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::PatientData;
use crate::inbound::http::handlers::PatientRequestBody;
use crate::inbound::http::router::AppState;

pub async fn update_patient(
    State(state): State<AppState>,
    Path(patient_id): Path<i64>,
    Json(body): Json<PatientRequestBody>,
) -> Result<ApiSuccess<PatientData>, ApiError> {
    state
        .clinic_service
        .update_patient(&PatientId(patient_id), body.try_into_new_patient()?)
        .await
        .map_err(ApiError::from)
        .map(|ref patient| ApiSuccess::new(StatusCode::OK, patient.into()))
}
