mod inmemory;

pub use inmemory::InMemoryNotificationService;
use pawfeed_domain::{NotificationContent, ScheduledNotification, WeeklyTrigger};

/// The platform notification facility consumed by the scheduling layer.
///
/// The facility owns notification firing entirely: once a repeating weekly
/// trigger is registered this application is not involved anymore. The only
/// durable linkage back to a reminder is the metadata embedded in the
/// content, which is why implementations must round-trip it through
/// `list_scheduled`. The facility is shared with other producers, so
/// implementations must never assume every scheduled entry is a feeding
/// reminder.
#[async_trait::async_trait]
pub trait INotificationService: Send + Sync {
    /// Whether the user has granted the notification permission. When not
    /// granted, callers are expected to degrade to no-ops instead of
    /// failing the surrounding operation.
    async fn is_permission_granted(&self) -> bool;

    /// Register a repeating weekly trigger and return its opaque identifier
    async fn schedule_weekly(
        &self,
        content: &NotificationContent,
        trigger: &WeeklyTrigger,
    ) -> anyhow::Result<String>;

    /// Cancel a scheduled notification by its identifier. Cancelling an
    /// unknown identifier is not an error.
    async fn cancel(&self, identifier: &str) -> anyhow::Result<()>;

    /// Enumerate every currently scheduled notification
    async fn list_scheduled(&self) -> anyhow::Result<Vec<ScheduledNotification>>;
}
