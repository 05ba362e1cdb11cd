use axum::extract::State;
use axum::http::StatusCode;

use crate::inbound::http::handlers::AddressData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// List addresses ordered by city.
pub async fn list_addresses(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<AddressData>>, ApiError> {
    state
        .clinic_service
        .list_addresses()
        .await
        .map_err(ApiError::from)
        .map(|addresses| {
            ApiSuccess::new(
                StatusCode::OK,
                addresses.iter().map(AddressData::from).collect(),
            )
        })
}
