use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use chrono::Utc;

use crate::identity::errors::IdentityError;
use crate::identity::models::Identity;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type to store the authorized caller's identity in request extensions
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Identity);

/// Middleware admitting callers that hold the staff or admin role
pub async fn require_staff(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, Response> {
    require_roles(state, req, next, &["admin", "staff"]).await
}

/// Middleware admitting callers that hold the admin role
pub async fn require_admin(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, Response> {
    require_roles(state, req, next, &["admin"]).await
}

async fn require_roles(
    state: AppState,
    mut req: Request,
    next: Next,
    required_roles: &[&str],
) -> Result<Response, Response> {
    // Extract token from Authorization header
    let token = extract_token_from_header(&req)?;

    let identity = state
        .access_guard
        .authorize(token, required_roles, Utc::now())
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, path = %req.uri().path(), "Request rejected");
            ApiError::from(e).into_response()
        })?;

    // Add the verified identity to request extensions
    req.extensions_mut().insert(CurrentUser(identity));

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(unauthenticated_response)?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| unauthenticated_response())?;

    auth_str
        .strip_prefix("Bearer ")
        .ok_or_else(unauthenticated_response)
}

// Header failures produce the same body as token failures; callers are
// not told which check rejected them.
fn unauthenticated_response() -> Response {
    ApiError::from(IdentityError::Unauthenticated).into_response()
}
