use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::PatientData;
use crate::inbound::http::router::AppState;

/// Case-insensitive substring search over name, email and phone.
pub async fn search_patients(
    State(state): State<AppState>,
    Path(term): Path<String>,
) -> Result<ApiSuccess<Vec<PatientData>>, ApiError> {
    state
        .clinic_service
        .search_patients(&term)
        .await
        .map_err(ApiError::from)
        .map(|patients| {
            ApiSuccess::new(
                StatusCode::OK,
                patients.iter().map(PatientData::from).collect(),
            )
        })
}
