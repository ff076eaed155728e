use crate::reminder::Reminder;
use crate::time::TimeOfDay;
use serde::{Deserialize, Serialize};

/// Tag stored in notification metadata so feeding reminders can be told
/// apart from unrelated notifications sharing the delivery facility
pub const FEEDING_REMINDER_TYPE: &str = "feeding_reminder";

/// Metadata attached to a scheduled notification. The `reminder_id` tag is
/// the only linkage back to the originating `Reminder`, there is no
/// separate index table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationData {
    #[serde(rename = "reminderId")]
    pub reminder_id: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationContent {
    pub title: String,
    pub body: String,
    pub data: NotificationData,
}

impl NotificationContent {
    /// Content for a feeding reminder notification: fixed title and a
    /// `<name> - <food type>` body, tagged with the reminder id
    pub fn feeding_reminder(reminder: &Reminder) -> Self {
        Self {
            title: "🐾 Feeding Reminder".to_string(),
            body: format!("{} - {}", reminder.name, reminder.food_type),
            data: NotificationData {
                reminder_id: reminder.id.as_string(),
                kind: FEEDING_REMINDER_TYPE.to_string(),
            },
        }
    }

    pub fn is_feeding_reminder(&self) -> bool {
        self.data.kind == FEEDING_REMINDER_TYPE
    }
}

/// A repeating weekly trigger in the delivery facility's own weekday
/// numbering (Sunday = 1 .. Saturday = 7)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeeklyTrigger {
    pub weekday: u32,
    pub hour: u32,
    pub minute: u32,
    pub repeats: bool,
}

impl WeeklyTrigger {
    pub fn repeating(weekday: u32, time: TimeOfDay) -> Self {
        Self {
            weekday,
            hour: time.hour,
            minute: time.minute,
            repeats: true,
        }
    }
}

/// A notification registered with the delivery facility, referenced weakly
/// by its opaque `identifier`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledNotification {
    pub identifier: String,
    pub content: NotificationContent,
    pub trigger: WeeklyTrigger,
}
