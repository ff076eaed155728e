use super::INotificationService;
use anyhow::anyhow;
use pawfeed_domain::{NotificationContent, ScheduledNotification, WeeklyTrigger};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// In-memory delivery facility used for tests and local runs. Identifiers
/// are monotonic, so two schedule calls never return the same one.
pub struct InMemoryNotificationService {
    scheduled: Mutex<Vec<ScheduledNotification>>,
    next_identifier: AtomicUsize,
    permission_granted: AtomicBool,
    reject_requests: AtomicBool,
    fail_next: AtomicUsize,
}

impl InMemoryNotificationService {
    pub fn new() -> Self {
        Self {
            scheduled: Mutex::new(Vec::new()),
            next_identifier: AtomicUsize::new(0),
            permission_granted: AtomicBool::new(true),
            reject_requests: AtomicBool::new(false),
            fail_next: AtomicUsize::new(0),
        }
    }

    /// Simulate the user revoking or granting the notification permission
    pub fn set_permission_granted(&self, granted: bool) {
        self.permission_granted.store(granted, Ordering::SeqCst);
    }

    /// Make subsequent schedule requests fail, e.g. to simulate a quota
    pub fn set_reject_requests(&self, reject: bool) {
        self.reject_requests.store(reject, Ordering::SeqCst);
    }

    /// Reject only the next `count` schedule requests, then accept again
    pub fn fail_next_requests(&self, count: usize) {
        self.fail_next.store(count, Ordering::SeqCst);
    }
}

impl Default for InMemoryNotificationService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl INotificationService for InMemoryNotificationService {
    async fn is_permission_granted(&self) -> bool {
        self.permission_granted.load(Ordering::SeqCst)
    }

    async fn schedule_weekly(
        &self,
        content: &NotificationContent,
        trigger: &WeeklyTrigger,
    ) -> anyhow::Result<String> {
        if self.reject_requests.load(Ordering::SeqCst) {
            return Err(anyhow!("Delivery facility rejected the request"));
        }
        if self
            .fail_next
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
        {
            return Err(anyhow!("Delivery facility rejected the request"));
        }

        let identifier = format!(
            "notification-{}",
            self.next_identifier.fetch_add(1, Ordering::SeqCst)
        );
        let mut scheduled = self.scheduled.lock().unwrap();
        scheduled.push(ScheduledNotification {
            identifier: identifier.clone(),
            content: content.clone(),
            trigger: *trigger,
        });

        Ok(identifier)
    }

    async fn cancel(&self, identifier: &str) -> anyhow::Result<()> {
        let mut scheduled = self.scheduled.lock().unwrap();
        scheduled.retain(|notification| notification.identifier != identifier);
        Ok(())
    }

    async fn list_scheduled(&self) -> anyhow::Result<Vec<ScheduledNotification>> {
        let scheduled = self.scheduled.lock().unwrap();
        Ok(scheduled.clone())
    }
}
