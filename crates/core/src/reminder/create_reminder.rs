use crate::error::PawfeedError;
use crate::scheduling::schedule_reminder_notifications;
use crate::shared::usecase::UseCase;
use pawfeed_domain::{FoodType, Reminder, TimeOfDay, ID};
use pawfeed_infra::PawfeedContext;
use std::collections::BTreeSet;

#[derive(Debug)]
pub struct CreateReminderUseCase {
    pub group_id: ID,
    pub name: String,
    pub food_type: FoodType,
    pub reminder_time: String,
    pub days_of_week: BTreeSet<u32>,
    pub is_active: bool,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    EmptyName,
    InvalidTime(String),
    InvalidWeekday(u32),
    StorageError,
}

impl From<UseCaseError> for PawfeedError {
    fn from(e: UseCaseError) -> Self {
        match e {
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
impl UseCase for CreateReminderUseCase {
    type Response = UseCaseRes;

    type Error = UseCaseError;

    async fn execute(&mut self, ctx: &PawfeedContext) -> Result<Self::Response, Self::Error> {
        if self.name.trim().is_empty() {
            return Err(UseCaseError::EmptyName);
        }
        if self.reminder_time.parse::<TimeOfDay>().is_err() {
            return Err(UseCaseError::InvalidTime(self.reminder_time.clone()));
        }
        if let Some(day) = self
            .days_of_week
            .iter()
            .copied()
            .find(|day| !(1..=7).contains(day))
        {
            return Err(UseCaseError::InvalidWeekday(day));
        }

        let mut reminder = Reminder::new(self.group_id.clone());
        reminder.name = self.name.clone();
        reminder.food_type = self.food_type;
        reminder.reminder_time = self.reminder_time.clone();
        reminder.days_of_week = self.days_of_week.clone();
        reminder.is_active = self.is_active;
        let now = ctx.sys.get_timestamp_millis();
        reminder.created_at = now;
        reminder.updated_at = now;

        if ctx.repos.reminders.insert(&reminder).await.is_err() {
            return Err(UseCaseError::StorageError);
        }
        ctx.cache.invalidate(&self.group_id);

        // Store write first, the notification schedule is a best-effort
        // reflection of it
        let notification_ids = schedule_reminder_notifications(&reminder, ctx).await;

        Ok(UseCaseRes {
            reminder,
            notification_ids,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pawfeed_domain::FoodType;

    fn usecase(group_id: ID) -> CreateReminderUseCase {
        CreateReminderUseCase {
            group_id,
            name: "Bella".into(),
            food_type: FoodType::DryFood,
            reminder_time: "08:00".into(),
            days_of_week: vec![1, 3, 5].into_iter().collect(),
            is_active: true,
        }
    }

    #[tokio::test]
    async fn creates_reminder_and_schedules_notifications() {
        let ctx = PawfeedContext::create_inmemory();
        let group_id = ID::new();

        let res = usecase(group_id.clone()).execute(&ctx).await.unwrap();

        assert_eq!(res.notification_ids.len(), 3);
        assert!(ctx.repos.reminders.find(&res.reminder.id).await.is_some());
        assert_eq!(ctx.notifications.list_scheduled().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn inactive_reminder_is_stored_but_not_scheduled() {
        let ctx = PawfeedContext::create_inmemory();
        let mut usecase = usecase(ID::new());
        usecase.is_active = false;

        let res = usecase.execute(&ctx).await.unwrap();

        assert!(res.notification_ids.is_empty());
        assert!(ctx.repos.reminders.find(&res.reminder.id).await.is_some());
        assert!(ctx.notifications.list_scheduled().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn rejects_invalid_input() {
        let ctx = PawfeedContext::create_inmemory();

        let mut bad_name = usecase(ID::new());
        bad_name.name = "  ".into();
        assert_eq!(
            bad_name.execute(&ctx).await.unwrap_err(),
            UseCaseError::EmptyName
        );

        let mut bad_time = usecase(ID::new());
        bad_time.reminder_time = "25:99".into();
        assert_eq!(
            bad_time.execute(&ctx).await.unwrap_err(),
            UseCaseError::InvalidTime("25:99".into())
        );

        let mut bad_day = usecase(ID::new());
        bad_day.days_of_week = vec![1, 8].into_iter().collect();
        assert_eq!(
            bad_day.execute(&ctx).await.unwrap_err(),
            UseCaseError::InvalidWeekday(8)
        );

        // Nothing was stored or scheduled
        assert!(ctx.notifications.list_scheduled().await.unwrap().is_empty());
    }
}
