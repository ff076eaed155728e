mod telemetry;

use pawfeed_core::{execute, SyncReminderNotificationsUseCase};
use pawfeed_infra::{run_migration, setup_context};
use telemetry::{get_subscriber, init_subscriber};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let subscriber = get_subscriber("pawfeed".into(), "info".into());
    init_subscriber(subscriber);

    if std::env::var("DATABASE_URL").is_ok() {
        run_migration().await.expect("To run database migrations");
    }

    let context = setup_context().await;

    // One-shot startup reconciliation: make the delivery facility's schedule
    // match the store's snapshot for the configured family group.
    let group_id = match &context.config.group_id {
        Some(group_id) => group_id.clone(),
        None => {
            info!("No family group configured, skipping reminder reconciliation");
            return;
        }
    };

    let usecase = SyncReminderNotificationsUseCase { group_id };
    match execute(usecase, &context).await {
        Ok(res) => {
            for result in &res.results {
                if result.success {
                    info!(
                        "Scheduled {} notifications for reminder {}",
                        result.notification_ids.len(),
                        result.reminder_id
                    );
                } else {
                    error!(
                        "Unable to schedule notifications for reminder {}: {:?}",
                        result.reminder_id, result.error
                    );
                }
            }
        }
        Err(e) => error!("Startup reminder reconciliation failed: {:?}", e),
    }
}
