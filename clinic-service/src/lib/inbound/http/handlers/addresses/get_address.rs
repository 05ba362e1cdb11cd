use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::clinic::models::AddressId;
use crate::inbound::http::handlers::AddressData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_address(
    State(state): State<AppState>,
    Path(address_id): Path<i64>,
) -> Result<ApiSuccess<AddressData>, ApiError> {
    state
        .clinic_service
        .get_address(&AddressId(address_id))
        .await
        .map_err(ApiError::from)
        .map(|ref address| ApiSuccess::new(StatusCode::OK, address.into()))
}
