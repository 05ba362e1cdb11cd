use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::clinic::models::PatientId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Delete a patient and, via the schema, their appointments.
pub async fn delete_patient(
    State(state): State<AppState>,
    Path(patient_id): Path<i64>,
) -> Result<ApiSuccess<()>, ApiError> {
    state
        .clinic_service
        .delete_patient(&PatientId(patient_id))
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}
