/*!
   Grants the admin role to an existing user.

   Operates directly on the server's database; run it from the same
   working directory so the configuration resolves to the same file.
*/

use std::env;
use std::process;
use std::str::FromStr;
use std::sync::Arc;

use clinic_service::config::Config;
use clinic_service::domain::identity::service::IdentityService;
use clinic_service::identity::errors::IdentityError;
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
                .unwrap_or_else(|_| "clinic_service=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let username = match env::args().nth(1) {
        Some(username) => username,
        None => {
            eprintln!("usage: promote-admin <username>");
            process::exit(2);
        }
    };

    let config = Config::load()?;

    let connect_options = SqliteConnectOptions::from_str(&config.database.url)?.foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(connect_options)
        .await?;

    let identity_service = IdentityService::new(Arc::new(SqliteIdentityRepository::new(pool)));

    match identity_service
        .promote(&username, "admin", "Administrator")
        .await
    {
        Ok(true) => println!("promoted {} to admin", username),
        Ok(false) => println!("{} is already an admin", username),
        Err(IdentityError::NotFound(_)) => {
            eprintln!("user not found: {}", username);
            process::exit(1);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
