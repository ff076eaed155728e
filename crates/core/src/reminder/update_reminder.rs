use crate::error::PawfeedError;
use crate::scheduling::reschedule_reminder_notifications;
use crate::shared::usecase::UseCase;
use pawfeed_domain::{FoodType, Reminder, TimeOfDay, ID};
use pawfeed_infra::PawfeedContext;
use std::collections::BTreeSet;

/// Partial update of a reminder. Every update is followed by a full
/// reschedule, so the facility's schedule always reflects the new snapshot.
#[derive(Debug)]
pub struct UpdateReminderUseCase {
    pub reminder_id: ID,
    pub name: Option<String>,
    pub food_type: Option<FoodType>,
    pub reminder_time: Option<String>,
    pub days_of_week: Option<BTreeSet<u32>>,
    pub is_active: Option<bool>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    ReminderNotFound(ID),
    EmptyName,
    InvalidTime(String),
    InvalidWeekday(u32),
    StorageError,
}

impl From<UseCaseError> for PawfeedError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::ReminderNotFound(reminder_id) => Self::NotFound(format!(
                "The reminder with id: {}, was not found.",
                reminder_id
            )),
            UseCaseError::EmptyName => Self::BadClientData("A reminder must have a name.".into()),
            UseCaseError::InvalidTime(time) => Self::BadClientData(format!(
                "Invalid reminder time: {}. It should be on the `HH:MM` 24-hour format.",
                time
            )),
            UseCaseError::InvalidWeekday(day) => Self::BadClientData(format!(
                "Invalid weekday: {}. It should be in the range 1 (Monday) to 7 (Sunday).",
                day
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub reminder: Reminder,
    pub notification_ids: Vec<String>,
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateReminderUseCase {
    type Response = UseCaseRes;

    type Error = UseCaseError;

    async fn execute(&mut self, ctx: &PawfeedContext) -> Result<Self::Response, Self::Error> {
        let mut reminder = match ctx.repos.reminders.find(&self.reminder_id).await {
            Some(reminder) => reminder,
            None => return Err(UseCaseError::ReminderNotFound(self.reminder_id.clone())),
        };

        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(UseCaseError::EmptyName);
            }
            reminder.name = name.clone();
        }
        if let Some(food_type) = self.food_type {
            reminder.food_type = food_type;
        }
        if let Some(reminder_time) = &self.reminder_time {
            if reminder_time.parse::<TimeOfDay>().is_err() {
                return Err(UseCaseError::InvalidTime(reminder_time.clone()));
            }
            reminder.reminder_time = reminder_time.clone();
        }
        if let Some(days_of_week) = &self.days_of_week {
            if let Some(day) = days_of_week.iter().copied().find(|day| !(1..=7).contains(day)) {
                return Err(UseCaseError::InvalidWeekday(day));
            }
            reminder.days_of_week = days_of_week.clone();
        }
        if let Some(is_active) = self.is_active {
            reminder.is_active = is_active;
        }
        reminder.updated_at = ctx.sys.get_timestamp_millis();

        if ctx.repos.reminders.save(&reminder).await.is_err() {
            return Err(UseCaseError::StorageError);
        }
        ctx.cache.invalidate(&reminder.group_id);

        let notification_ids = reschedule_reminder_notifications(&reminder, ctx).await;

        Ok(UseCaseRes {
            reminder,
            notification_ids,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reminder::CreateReminderUseCase;
    use pawfeed_domain::FoodType;

    async fn create_reminder(ctx: &PawfeedContext) -> Reminder {
        let mut create = CreateReminderUseCase {
            group_id: ID::new(),
            name: "Bella".into(),
            food_type: FoodType::DryFood,
            reminder_time: "08:00".into(),
            days_of_week: vec![1, 3, 5].into_iter().collect(),
            is_active: true,
        };
        create.execute(ctx).await.unwrap().reminder
    }

    fn usecase(reminder_id: ID) -> UpdateReminderUseCase {
        UpdateReminderUseCase {
            reminder_id,
            name: None,
            food_type: None,
            reminder_time: None,
            days_of_week: None,
            is_active: None,
        }
    }

    #[tokio::test]
    async fn updating_time_reschedules_without_compounding() {
        let ctx = PawfeedContext::create_inmemory();
        let reminder = create_reminder(&ctx).await;
        assert_eq!(ctx.notifications.list_scheduled().await.unwrap().len(), 3);

        let mut update = usecase(reminder.id.clone());
        update.reminder_time = Some("19:15".into());
        let res = update.execute(&ctx).await.unwrap();

        assert_eq!(res.reminder.reminder_time, "19:15");
        assert_eq!(res.notification_ids.len(), 3);
        let scheduled = ctx.notifications.list_scheduled().await.unwrap();
        assert_eq!(scheduled.len(), 3);
        assert!(scheduled
            .iter()
            .all(|n| n.trigger.hour == 19 && n.trigger.minute == 15));
    }

    #[tokio::test]
    async fn toggling_off_cancels_all_notifications() {
        let ctx = PawfeedContext::create_inmemory();
        let reminder = create_reminder(&ctx).await;
        assert_eq!(ctx.notifications.list_scheduled().await.unwrap().len(), 3);

        let mut update = usecase(reminder.id.clone());
        update.is_active = Some(false);
        let res = update.execute(&ctx).await.unwrap();

        assert!(res.notification_ids.is_empty());
        assert!(ctx.notifications.list_scheduled().await.unwrap().is_empty());

        // Toggling back on materializes the notifications again
        let mut update = usecase(reminder.id.clone());
        update.is_active = Some(true);
        let res = update.execute(&ctx).await.unwrap();
        assert_eq!(res.notification_ids.len(), 3);
        assert_eq!(ctx.notifications.list_scheduled().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn changing_days_adjusts_the_notification_count() {
        let ctx = PawfeedContext::create_inmemory();
        let reminder = create_reminder(&ctx).await;

        let mut update = usecase(reminder.id.clone());
        update.days_of_week = Some(vec![7].into_iter().collect());
        let res = update.execute(&ctx).await.unwrap();

        assert_eq!(res.notification_ids.len(), 1);
        let scheduled = ctx.notifications.list_scheduled().await.unwrap();
        assert_eq!(scheduled.len(), 1);
        // Sunday maps to the facility's first weekday
        assert_eq!(scheduled[0].trigger.weekday, 1);
    }

    #[tokio::test]
    async fn unknown_reminder_is_rejected() {
        let ctx = PawfeedContext::create_inmemory();
        let reminder_id = ID::new();

        let res = usecase(reminder_id.clone()).execute(&ctx).await;
        assert_eq!(
            res.unwrap_err(),
            UseCaseError::ReminderNotFound(reminder_id)
        );
    }

    #[tokio::test]
    async fn invalid_update_leaves_the_schedule_untouched() {
        let ctx = PawfeedContext::create_inmemory();
        let reminder = create_reminder(&ctx).await;

        let mut update = usecase(reminder.id.clone());
        update.reminder_time = Some("nope".into());
        assert!(update.execute(&ctx).await.is_err());

        assert_eq!(ctx.notifications.list_scheduled().await.unwrap().len(), 3);
        assert_eq!(
            ctx.repos
                .reminders
                .find(&reminder.id)
                .await
                .unwrap()
                .reminder_time,
            "08:00"
        );
    }
}
