use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::clinic::models::SurgeryId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::SurgeryData;
use crate::inbound::http::router::AppState;

pub async fn get_surgery(
    State(state): State<AppState>,
    Path(surgery_id): Path<i64>,
) -> Result<ApiSuccess<SurgeryData>, ApiError> {
    state
        .clinic_service
        .get_surgery(&SurgeryId(surgery_id))
        .await
        .map_err(ApiError::from)
        .map(|ref surgery| ApiSuccess::new(StatusCode::OK, surgery.into()))
}
