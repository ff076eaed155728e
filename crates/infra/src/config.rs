use pawfeed_domain::ID;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// The family group whose reminders are reconciled at startup.
    /// When absent the startup reconciliation is skipped.
    pub group_id: Option<ID>,
    /// Postgres connection string. When absent the application falls back
    /// to in-memory repositories, which is only useful for local runs.
    pub database_url: Option<String>,
}

impl Config {
    pub fn new() -> Self {
        let group_id = match std::env::var("GROUP_ID") {
            Ok(group_id) => match group_id.parse::<ID>() {
                Ok(group_id) => Some(group_id),
                Err(_) => {
                    warn!(
                        "The given GROUP_ID: {} is not a valid id. Startup reminder reconciliation will be skipped.",
                        group_id
                    );
                    None
                }
            },
            Err(_) => {
                info!("Did not find GROUP_ID environment variable. Startup reminder reconciliation will be skipped.");
                None
            }
        };

        let database_url = std::env::var("DATABASE_URL").ok();
        if database_url.is_none() {
            warn!("Did not find DATABASE_URL environment variable. Falling back to in-memory repositories.");
        }

        Self {
            group_id,
            database_url,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
