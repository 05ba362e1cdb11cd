use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::SurgeryData;
use crate::inbound::http::handlers::SurgeryRequestBody;
use crate::inbound::http::router::AppState;

pub async fn create_surgery(
    State(state): State<AppState>,
    Json(body): Json<SurgeryRequestBody>,
) -> Result<ApiSuccess<SurgeryData>, ApiError> {
    state
        .clinic_service
        .create_surgery(body.into_new_surgery())
        .await
        .map_err(ApiError::from)
        .map(|ref surgery| ApiSuccess::new(StatusCode::CREATED, surgery.into()))
}
