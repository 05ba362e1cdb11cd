use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::inbound::http::handlers::AddressData;
use crate::inbound::http::handlers::AddressRequestBody;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn create_address(
    State(state): State<AppState>,
    Json(body): Json<AddressRequestBody>,
) -> Result<ApiSuccess<AddressData>, ApiError> {
    state
        .clinic_service
        .create_address(body.into_new_address())
        .await
        .map_err(ApiError::from)
        .map(|ref address| ApiSuccess::new(StatusCode::CREATED, address.into()))
}
