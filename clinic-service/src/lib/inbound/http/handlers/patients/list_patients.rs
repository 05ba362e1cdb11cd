use axum::extract::State;
use axum::http::StatusCode;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::PatientData;
use crate::inbound::http::router::AppState;

pub async fn list_patients(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<PatientData>>, ApiError> {
    state
        .clinic_service
        .list_patients()
        .await
        .map_err(ApiError::from)
        .map(|patients| {
            ApiSuccess::new(
                StatusCode::OK,
                patients.iter().map(PatientData::from).collect(),
            )
        })
}
