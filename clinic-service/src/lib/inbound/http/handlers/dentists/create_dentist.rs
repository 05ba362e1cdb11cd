use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::DentistData;
use crate::inbound::http::handlers::DentistRequestBody;
use crate::inbound::http::router::AppState;

pub async fn create_dentist(
    State(state): State<AppState>,
    Json(body): Json<DentistRequestBody>,
) -> Result<ApiSuccess<DentistData>, ApiError> {
    state
        .clinic_service
        .create_dentist(body.try_into_new_dentist()?)
        .await
        .map_err(ApiError::from)
        .map(|ref dentist| ApiSuccess::new(StatusCode::CREATED, dentist.into()))
}
