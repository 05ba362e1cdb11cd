use std::sync::Arc;
use std::time::Duration;

use auth::TokenService;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::addresses::create_address;
use super::handlers::addresses::delete_address;
use super::handlers::addresses::get_address;
use super::handlers::addresses::list_addresses;
use super::handlers::addresses::update_address;
use super::handlers::appointments::create_appointment;
use super::handlers::appointments::delete_appointment;
use super::handlers::appointments::get_appointment;
use super::handlers::appointments::list_appointments;
use super::handlers::appointments::update_appointment;
use super::handlers::dentists::create_dentist;
use super::handlers::dentists::delete_dentist;
use super::handlers::dentists::get_dentist;
use super::handlers::dentists::list_dentists;
use super::handlers::dentists::update_dentist;
use super::handlers::issue_token::issue_token;
use super::handlers::patients::create_patient;
use super::handlers::patients::delete_patient;
use super::handlers::patients::get_patient;
use super::handlers::patients::list_patients;
use super::handlers::patients::search_patients;
use super::handlers::patients::update_patient;
use super::handlers::register::register;
use super::handlers::surgeries::create_surgery;
use super::handlers::surgeries::delete_surgery;
use super::handlers::surgeries::get_surgery;
use super::handlers::surgeries::list_surgeries;
use super::handlers::surgeries::update_surgery;
use super::middleware::require_admin;
use super::middleware::require_staff;
use crate::domain::clinic::service::ClinicService;
use crate::domain::identity::service::AccessGuard;
use crate::domain::identity::service::IdentityService;
use crate::outbound::repositories::SqliteClinicRepository;
use crate::outbound::repositories::SqliteIdentityRepository;

#[derive(Clone)]
pub struct AppState {
    pub identity_service: Arc<IdentityService<SqliteIdentityRepository>>,
    pub clinic_service: Arc<ClinicService<SqliteClinicRepository>>,
    pub access_guard: Arc<AccessGuard<SqliteIdentityRepository>>,
    pub token_service: Arc<TokenService>,
    pub token_ttl: chrono::Duration,
}

pub fn create_router(
    identity_service: Arc<IdentityService<SqliteIdentityRepository>>,
    clinic_service: Arc<ClinicService<SqliteClinicRepository>>,
    access_guard: Arc<AccessGuard<SqliteIdentityRepository>>,
    token_service: Arc<TokenService>,
    token_ttl: chrono::Duration,
) -> Router {
    let state = AppState {
        identity_service,
        clinic_service,
        access_guard,
        token_service,
        token_ttl,
    };

    // Reads and the auth endpoints are open; writes are role-gated
    // below.
    let public_routes = Router::new()
        .route("/auth/register", post(register))
        .route("/auth/token", post(issue_token))
        .route("/patients", get(list_patients))
        .route("/patients/search/:term", get(search_patients))
        .route("/patients/:patient_id", get(get_patient))
        .route("/dentists", get(list_dentists))
        .route("/dentists/:dentist_id", get(get_dentist))
        .route("/surgeries", get(list_surgeries))
        .route("/surgeries/:surgery_id", get(get_surgery))
        .route("/appointments", get(list_appointments))
        .route("/appointments/:appointment_id", get(get_appointment))
        .route("/addresses", get(list_addresses))
        .route("/addresses/:address_id", get(get_address));

    let staff_routes = Router::new()
        .route("/patients", post(create_patient))
        .route("/patients/:patient_id", put(update_patient))
        .route("/dentists", post(create_dentist))
        .route("/dentists/:dentist_id", put(update_dentist))
        .route("/surgeries", post(create_surgery))
        .route("/surgeries/:surgery_id", put(update_surgery))
        .route("/appointments", post(create_appointment))
        .route("/appointments/:appointment_id", put(update_appointment))
        .route("/addresses", post(create_address))
        .route("/addresses/:address_id", put(update_address))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_staff));

    let admin_routes = Router::new()
        .route("/patients/:patient_id", delete(delete_patient))
        .route("/dentists/:dentist_id", delete(delete_dentist))
        .route("/surgeries/:surgery_id", delete(delete_surgery))
        .route("/appointments/:appointment_id", delete(delete_appointment))
        .route("/addresses/:address_id", delete(delete_address))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
                headers = ?request.headers(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(staff_routes)
        .merge(admin_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
