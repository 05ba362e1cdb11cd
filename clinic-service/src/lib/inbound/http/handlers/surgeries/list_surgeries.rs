use axum::extract::State;
use axum::http::StatusCode;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::SurgeryData;
use crate::inbound::http::router::AppState;

pub async fn list_surgeries(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<SurgeryData>>, ApiError> {
    state
        .clinic_service
        .list_surgeries()
        .await
        .map_err(ApiError::from)
        .map(|surgeries| {
            ApiSuccess::new(
                StatusCode::OK,
                surgeries.iter().map(SurgeryData::from).collect(),
            )
        })
}
