use pawfeed_domain::{
    trigger_weekday, InvalidTimeFormatError, NotificationContent, Reminder, TimeOfDay,
    WeeklyTrigger, ID,
};
use pawfeed_infra::PawfeedContext;
use serde::Serialize;
use std::collections::HashSet;
use tracing::{info, warn};

/// Outcome of scheduling a single reminder within a batch
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleReminderResult {
    #[serde(rename = "reminderId")]
    pub reminder_id: ID,
    #[serde(rename = "notificationIds")]
    pub notification_ids: Vec<String>,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Materialize one repeating weekly notification per entry in
/// `days_of_week` of an active reminder and return the identifiers the
/// delivery facility handed back.
///
/// A failed time parse means the whole reminder is skipped. Per-day
/// failures are independent: a rejected request for one weekday is logged
/// and the remaining weekdays are still attempted, so on partial failure
/// fewer identifiers than days are returned. The order of the returned
/// identifiers is not part of the contract.
pub async fn schedule_reminder_notifications(
    reminder: &Reminder,
    ctx: &PawfeedContext,
) -> Vec<String> {
    match try_schedule_reminder_notifications(reminder, ctx).await {
        Ok(notification_ids) => notification_ids,
        Err(e) => {
            warn!(
                "Not scheduling notifications for reminder {}: {}",
                reminder.id, e
            );
            Vec::new()
        }
    }
}

async fn try_schedule_reminder_notifications(
    reminder: &Reminder,
    ctx: &PawfeedContext,
) -> Result<Vec<String>, InvalidTimeFormatError> {
    // Inactive reminders are never materialized as notifications
    if !reminder.is_active {
        return Ok(Vec::new());
    }

    let time = reminder.reminder_time.parse::<TimeOfDay>()?;

    if !ctx.notifications.is_permission_granted().await {
        info!(
            "Notification permission not granted, skipping scheduling of reminder {}",
            reminder.id
        );
        return Ok(Vec::new());
    }

    let content = NotificationContent::feeding_reminder(reminder);
    let mut notification_ids = Vec::with_capacity(reminder.days_of_week.len());

    for day in reminder.days_of_week.iter().copied() {
        // Defensive: stored reminders are validated on write
        let weekday = match trigger_weekday(day) {
            Ok(weekday) => weekday,
            Err(e) => {
                warn!("Skipping weekday on reminder {}: {}", reminder.id, e);
                continue;
            }
        };

        let trigger = WeeklyTrigger::repeating(weekday, time);
        match ctx.notifications.schedule_weekly(&content, &trigger).await {
            Ok(identifier) => notification_ids.push(identifier),
            Err(e) => warn!(
                "Unable to schedule notification for reminder {} on day {}: {:?}",
                reminder.id, day, e
            ),
        }
    }

    Ok(notification_ids)
}

/// Cancel every scheduled notification tagged with the given reminder id.
///
/// The facility offers no queryable secondary index, so this scans its full
/// scheduled set and matches on the `reminderId` metadata tag. Cancellation
/// is best-effort cleanup: per-item failures are logged and swallowed, a
/// stale notification is a lesser harm than blocking a delete or reschedule.
pub async fn cancel_reminder_notifications(reminder_id: &ID, ctx: &PawfeedContext) {
    let scheduled = match ctx.notifications.list_scheduled().await {
        Ok(scheduled) => scheduled,
        Err(e) => {
            warn!("Unable to list scheduled notifications: {:?}", e);
            return;
        }
    };

    let reminder_id = reminder_id.as_string();
    for notification in scheduled {
        if notification.content.data.reminder_id != reminder_id {
            continue;
        }
        if let Err(e) = ctx.notifications.cancel(&notification.identifier).await {
            warn!(
                "Unable to cancel notification {}: {:?}",
                notification.identifier, e
            );
        }
    }
}

/// Cancel-then-create from the current snapshot. Cancellation runs
/// unconditionally so that a reminder flipped inactive loses its stale
/// notifications too.
pub async fn reschedule_reminder_notifications(
    reminder: &Reminder,
    ctx: &PawfeedContext,
) -> Vec<String> {
    cancel_reminder_notifications(&reminder.id, ctx).await;
    schedule_reminder_notifications(reminder, ctx).await
}

/// Schedule every active reminder of a freshly loaded list, collecting a
/// per-reminder outcome. One reminder failing must not prevent the rest
/// from being attempted.
///
/// This performs no cancellation and no deduplication: it is strictly a
/// one-shot startup pass, invoking it twice against the same list will
/// double-schedule every active reminder. Subsequent refreshes must go
/// through `reschedule_reminder_notifications` per changed reminder.
pub async fn schedule_all_reminders(
    reminders: &[Reminder],
    ctx: &PawfeedContext,
) -> Vec<ScheduleReminderResult> {
    let mut results = Vec::new();

    for reminder in reminders {
        if !reminder.is_active {
            continue;
        }

        match try_schedule_reminder_notifications(reminder, ctx).await {
            Ok(notification_ids) => results.push(ScheduleReminderResult {
                reminder_id: reminder.id.clone(),
                notification_ids,
                success: true,
                error: None,
            }),
            Err(e) => {
                warn!("Unable to schedule reminder {}: {}", reminder.id, e);
                results.push(ScheduleReminderResult {
                    reminder_id: reminder.id.clone(),
                    notification_ids: Vec::new(),
                    success: false,
                    error: Some(e.to_string()),
                });
            }
        }
    }

    results
}

/// Cancel feeding-reminder notifications whose reminder is absent from the
/// given list, e.g. because it was deleted from another device while this
/// one was offline. Notifications from other producers are left alone.
pub async fn cancel_orphaned_notifications(reminders: &[Reminder], ctx: &PawfeedContext) {
    let scheduled = match ctx.notifications.list_scheduled().await {
        Ok(scheduled) => scheduled,
        Err(e) => {
            warn!("Unable to list scheduled notifications: {:?}", e);
            return;
        }
    };

    let known_ids = reminders
        .iter()
        .map(|reminder| reminder.id.as_string())
        .collect::<HashSet<_>>();

    for notification in scheduled {
        if !notification.content.is_feeding_reminder() {
            continue;
        }
        if known_ids.contains(&notification.content.data.reminder_id) {
            continue;
        }

        info!(
            "Cancelling orphaned notification {} for stale reminder {}",
            notification.identifier, notification.content.data.reminder_id
        );
        if let Err(e) = ctx.notifications.cancel(&notification.identifier).await {
            warn!(
                "Unable to cancel notification {}: {:?}",
                notification.identifier, e
            );
        }
    }
}
