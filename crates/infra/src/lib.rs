mod cache;
mod config;
mod repos;
mod services;
mod system;

pub use cache::ReminderQueryCache;
pub use config::Config;
pub use repos::{IReminderRepo, InMemoryReminderRepo, PostgresReminderRepo, Repos};
pub use services::{INotificationService, InMemoryNotificationService};
use sqlx::migrate::MigrateError;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
pub use system::ISys;
use system::RealSys;

#[derive(Clone)]
pub struct PawfeedContext {
    pub repos: Repos,
    pub notifications: Arc<dyn INotificationService>,
    pub cache: ReminderQueryCache,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
}

impl PawfeedContext {
    async fn create(config: Config) -> Self {
        let repos = match &config.database_url {
            Some(connection_string) => Repos::create_postgres(connection_string)
                .await
                .expect("Postgres credentials must be valid"),
            None => Repos::create_inmemory(),
        };
        Self {
            repos,
            notifications: Arc::new(InMemoryNotificationService::new()),
            cache: ReminderQueryCache::new(),
            config,
            sys: Arc::new(RealSys {}),
        }
    }

    /// Context backed entirely by in-memory repositories and an in-memory
    /// delivery facility. Used by tests.
    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            notifications: Arc::new(InMemoryNotificationService::new()),
            cache: ReminderQueryCache::new(),
            config: Config {
                group_id: None,
                database_url: None,
            },
            sys: Arc::new(RealSys {}),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> PawfeedContext {
    PawfeedContext::create(Config::new()).await
}

pub async fn run_migration() -> Result<(), MigrateError> {
    const PSQL_CONNECTION_STRING: &str = "DATABASE_URL";
    let connection_string = std::env::var(PSQL_CONNECTION_STRING)
        .unwrap_or_else(|_| panic!("{} env var to be present.", PSQL_CONNECTION_STRING));

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&connection_string)
        .await
        .expect("TO CONNECT TO POSTGRES");

    sqlx::migrate!().run(&pool).await
}
