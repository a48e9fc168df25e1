//! Initialization of database, sessions, and external clients.

use oauth2::{AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::{
    config::Config,
    data::user::UserRepository,
    error::{config::ConfigError, AppError},
    service::admin::AdminCodeService,
    state::OAuth2Client,
};

/// Connects to the SQLite database and runs pending migrations.
///
/// This function must complete successfully before the application can
/// access the database.
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer on top of the SeaORM connection pool.
///
/// Sessions live in the same SQLite database as the application data and
/// expire after a week of inactivity.
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| AppError::InternalError(format!("Session store migration failed: {}", e)))?;

    Ok(SessionManagerLayer::new(session_store)
        .with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// HTTP client for external API requests.
///
/// Redirects are disabled: every URL this client touches is a fixed Discord
/// endpoint, and following redirects would only open SSRF room.
pub fn setup_reqwest_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap_or_default()
}

/// Builds the Discord OAuth2 client from configuration.
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let parse_err = |name: &str, e: url::ParseError| {
        AppError::ConfigErr(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: e.to_string(),
        })
    };

    let client = oauth2::basic::BasicClient::new(ClientId::new(config.discord_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.discord_client_secret.clone()))
        .set_auth_uri(
            AuthUrl::new(config.discord_auth_url.clone())
                .map_err(|e| parse_err("DISCORD_AUTH_URL", e))?,
        )
        .set_token_uri(
            TokenUrl::new(config.discord_token_url.clone())
                .map_err(|e| parse_err("DISCORD_TOKEN_URL", e))?,
        )
        .set_redirect_uri(
            RedirectUrl::new(config.discord_redirect_url.clone())
                .map_err(|e| parse_err("DISCORD_REDIRECT_URL", e))?,
        );

    Ok(client)
}

/// Generates a bootstrap admin login link when no admin user exists yet.
///
/// The code is single-use and lives only in memory; restarting the server
/// issues a new one.
pub async fn check_for_admin(
    db: &DatabaseConnection,
    config: &Config,
    admin_codes: &AdminCodeService,
) -> Result<(), AppError> {
    let user_repo = UserRepository::new(db);

    if user_repo.admin_exists().await? {
        return Ok(());
    }

    let code = admin_codes.generate();
    tracing::warn!(
        "No admin user exists. Log in with {}/api/auth/login?admin_code={} to claim admin access.",
        config.app_url,
        code
    );

    Ok(())
}
