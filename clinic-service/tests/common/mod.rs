use std::str::FromStr;
use std::sync::Arc;

use auth::TokenService;
use chrono::Duration;
use clinic_service::domain::clinic::service::ClinicService;
use clinic_service::domain::identity::service::AccessGuard;
use clinic_service::domain::identity::service::IdentityService;
use clinic_service::inbound::http::router::create_router;
use clinic_service::outbound::repositories::SqliteClinicRepository;
use clinic_service::outbound::repositories::SqliteIdentityRepository;
use serde_json::json;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-token-signing-32b";
pub const TOKEN_TTL_MINUTES: i64 = 30;

/// Test application that spawns a real server on a random port
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub identity_service: Arc<IdentityService<SqliteIdentityRepository>>,
    pub token_service: Arc<TokenService>,
}

/// In-memory database for one test.
///
/// Every in-memory sqlite connection is its own database, so the pool
/// is pinned to a single connection that is never recycled.
async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("Failed to parse sqlite options")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .expect("Failed to create sqlite pool");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let pool = test_pool().await;

        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let token_service = Arc::new(TokenService::new(TEST_SECRET));
        let identity_repository = Arc::new(SqliteIdentityRepository::new(pool.clone()));
        let clinic_repository = Arc::new(SqliteClinicRepository::new(pool));

        let identity_service = Arc::new(IdentityService::new(Arc::clone(&identity_repository)));
        let clinic_service = Arc::new(ClinicService::new(clinic_repository));
        let access_guard = Arc::new(AccessGuard::new(
            identity_repository,
            Arc::clone(&token_service),
        ));

        identity_service
            .seed_initial_data(None)
            .await
            .expect("Failed to seed roles");

        let router = create_router(
            Arc::clone(&identity_service),
            clinic_service,
            access_guard,
            Arc::clone(&token_service),
            Duration::minutes(TOKEN_TTL_MINUTES),
        );

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::builder()
                .cookie_store(true)
                .build()
                .expect("Failed to create reqwest client"),
            identity_service,
            token_service,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PUT request with Bearer token
    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .put(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Register an account through the API
    pub async fn register(&self, username: &str, password: &str) {
        let response = self
            .post("/auth/register")
            .json(&json!({
                "username": username,
                "email": format!("{}@example.com", username),
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
    }

    /// Exchange credentials for a bearer token through the API
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .post("/auth/token")
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"]["access_token"]
            .as_str()
            .expect("Missing access token")
            .to_string()
    }

    pub async fn register_and_login(&self, username: &str, password: &str) -> String {
        self.register(username, password).await;
        self.login(username, password).await
    }

    /// Register an account, grant it a role directly through the
    /// service, then log in.
    pub async fn token_with_role(
        &self,
        username: &str,
        password: &str,
        role: &str,
        description: &str,
    ) -> String {
        self.register(username, password).await;
        self.identity_service
            .promote(username, role, description)
            .await
            .expect("Failed to grant role");
        self.login(username, password).await
    }

    pub async fn admin_token(&self) -> String {
        self.token_with_role("admin_user", "admin_password", "admin", "Administrator")
            .await
    }

    pub async fn staff_token(&self) -> String {
        self.token_with_role("staff_user", "staff_password", "staff", "Clinic staff")
            .await
    }
}
