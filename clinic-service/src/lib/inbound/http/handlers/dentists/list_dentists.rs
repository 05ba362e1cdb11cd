use axum::extract::State;
use axum::http::StatusCode;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::DentistData;
use crate::inbound::http::router::AppState;

pub async fn list_dentists(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<DentistData>>, ApiError> {
    state
        .clinic_service
        .list_dentists()
        .await
        .map_err(ApiError::from)
        .map(|dentists| {
            ApiSuccess::new(
                StatusCode::OK,
                dentists.iter().map(DentistData::from).collect(),
            )
        })
}
