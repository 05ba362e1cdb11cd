use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::domain::clinic::models::DentistId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::DentistData;
use crate::inbound::http::handlers::DentistRequestBody;
use crate::inbound::http::router::AppState;

pub async fn update_dentist(
    State(state): State<AppState>,
    Path(dentist_id): Path<i64>,
    Json(body): Json<DentistRequestBody>,
) -> Result<ApiSuccess<DentistData>, ApiError> {
    state
        .clinic_service
        .update_dentist(&DentistId(dentist_id), body.try_into_new_dentist()?)
        .await
        .map_err(ApiError::from)
        .map(|ref dentist| ApiSuccess::new(StatusCode::OK, dentist.into()))
}
