use axum::extract::State;
use axum::http::StatusCode;
use axum::Form;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Exchange form credentials for a bearer token.
///
/// Unknown usernames and wrong passwords are rejected with the same
/// message.
pub async fn issue_token(
    State(state): State<AppState>,
    Form(body): Form<TokenRequestBody>,
) -> Result<ApiSuccess<TokenResponseData>, ApiError> {
    let identity = state
        .identity_service
        .authenticate(&body.username, &body.password)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::Unauthorized("Incorrect username or password".to_string()))?;

    let access_token = state
        .token_service
        .issue(&identity.username, Utc::now(), state.token_ttl)
        .map_err(|e| ApiError::InternalServerError(format!("Token generation failed: {}", e)))?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        TokenResponseData {
            access_token,
            token_type: "bearer".to_string(),
        },
    ))
}

/// Form-encoded credentials, as submitted by OAuth2 password flows
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenRequestBody {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenResponseData {
    pub access_token: String,
    pub token_type: String,
}
