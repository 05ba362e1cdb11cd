use std::str::FromStr;
use std::sync::Arc;

use auth::TokenService;
use chrono::Duration;
use clinic_service::config::Config;
use clinic_service::domain::clinic::service::ClinicService;
use clinic_service::domain::identity::models::BootstrapAdmin;
use clinic_service::domain::identity::service::AccessGuard;
use clinic_service::domain::identity::service::IdentityService;
use clinic_service::inbound::http::router::create_router;
use clinic_service::outbound::repositories::SqliteClinicRepository;
use clinic_service::outbound::repositories::SqliteIdentityRepository;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::sqlite::SqlitePoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "clinic_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "clinic-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        database_url = %config.database.url,
        http_port = config.server.http_port,
        token_algorithm = %config.auth.algorithm,
        access_token_expire_minutes = config.auth.access_token_expire_minutes,
        "Configuration loaded"
    );

    if config.auth.secret_key == "secret" {
        tracing::warn!(
            "Signing secret is the built-in default; set AUTH__SECRET_KEY before deploying"
        );
    }

    let connect_options = SqliteConnectOptions::from_str(&config.database.url)?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(connect_options)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "sqlite",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!(database = "sqlite", "Database migrations completed");

    let token_service = Arc::new(TokenService::with_algorithm(
        config.auth.secret_key.as_bytes(),
        &config.auth.algorithm,
    )?);

    let identity_repository = Arc::new(SqliteIdentityRepository::new(pool.clone()));
    let clinic_repository = Arc::new(SqliteClinicRepository::new(pool));

    let identity_service = Arc::new(IdentityService::new(Arc::clone(&identity_repository)));
    let clinic_service = Arc::new(ClinicService::new(clinic_repository));
    let access_guard = Arc::new(AccessGuard::new(
        identity_repository,
        Arc::clone(&token_service),
    ));

    let bootstrap_admin = match (&config.admin.username, &config.admin.password) {
        (Some(username), Some(password)) => Some(BootstrapAdmin {
            username: username.clone(),
            password: password.clone(),
            email: config.admin.email.clone(),
        }),
        _ => None,
    };

    // Seeding failures must not prevent the service from starting.
    if let Err(e) = identity_service
        .seed_initial_data(bootstrap_admin.as_ref())
        .await
    {
        tracing::error!(error = %e, "Initial data seeding failed");
    }

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let application = create_router(
        identity_service,
        clinic_service,
        access_guard,
        token_service,
        Duration::minutes(config.auth.access_token_expire_minutes),
    );

    axum::serve(listener, application).await?;

    Ok(())
}
