use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::clinic::models::DentistId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::DentistData;
use crate::inbound::http::router::AppState;

pub async fn get_dentist(
    State(state): State<AppState>,
    Path(dentist_id): Path<i64>,
) -> Result<ApiSuccess<DentistData>, ApiError> {
    state
        .clinic_service
        .get_dentist(&DentistId(dentist_id))
        .await
        .map_err(ApiError::from)
        .map(|ref dentist| ApiSuccess::new(StatusCode::OK, dentist.into()))
}
