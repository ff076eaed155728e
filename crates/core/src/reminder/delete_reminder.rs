use crate::error::PawfeedError;
use crate::scheduling::cancel_reminder_notifications;
use crate::shared::usecase::UseCase;
use pawfeed_domain::{Reminder, ID};
use pawfeed_infra::PawfeedContext;

#[derive(Debug)]
pub struct DeleteReminderUseCase {
    pub reminder_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    ReminderNotFound(ID),
    StorageError,
}

impl From<UseCaseError> for PawfeedError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::ReminderNotFound(reminder_id) => Self::NotFound(format!(
                "The reminder with id: {}, was not found.",
                reminder_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub reminder: Reminder,
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteReminderUseCase {
    type Response = UseCaseRes;

    type Error = UseCaseError;

    async fn execute(&mut self, ctx: &PawfeedContext) -> Result<Self::Response, Self::Error> {
        if ctx.repos.reminders.find(&self.reminder_id).await.is_none() {
            return Err(UseCaseError::ReminderNotFound(self.reminder_id.clone()));
        }

        // Cancel before the store delete; cancellation is keyed by id and
        // works regardless of store state, this ordering just keeps the
        // audit trail sane
        cancel_reminder_notifications(&self.reminder_id, ctx).await;

        let reminder = match ctx.repos.reminders.delete(&self.reminder_id).await {
            Some(reminder) => reminder,
            None => return Err(UseCaseError::StorageError),
        };
        ctx.cache.invalidate(&reminder.group_id);

        Ok(UseCaseRes { reminder })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reminder::CreateReminderUseCase;
    use pawfeed_domain::FoodType;

    async fn create_reminder(ctx: &PawfeedContext, name: &str) -> Reminder {
        let mut create = CreateReminderUseCase {
            group_id: ID::new(),
            name: name.into(),
            food_type: FoodType::Medicine,
            reminder_time: "09:30".into(),
            days_of_week: vec![2, 4].into_iter().collect(),
            is_active: true,
        };
        create.execute(ctx).await.unwrap().reminder
    }

    #[tokio::test]
    async fn deletes_reminder_and_cancels_its_notifications() {
        let ctx = PawfeedContext::create_inmemory();
        let keep = create_reminder(&ctx, "Bella").await;
        let remove = create_reminder(&ctx, "Max").await;
        assert_eq!(ctx.notifications.list_scheduled().await.unwrap().len(), 4);

        let mut usecase = DeleteReminderUseCase {
            reminder_id: remove.id.clone(),
        };
        let res = usecase.execute(&ctx).await.unwrap();
        assert_eq!(res.reminder.id, remove.id);

        assert!(ctx.repos.reminders.find(&remove.id).await.is_none());

        // Only the other reminder's notifications remain
        let remaining = ctx.notifications.list_scheduled().await.unwrap();
        assert_eq!(remaining.len(), 2);
        assert!(remaining
            .iter()
            .all(|n| n.content.data.reminder_id == keep.id.as_string()));
    }

    #[tokio::test]
    async fn unknown_reminder_is_rejected() {
        let ctx = PawfeedContext::create_inmemory();
        let reminder_id = ID::new();

        let mut usecase = DeleteReminderUseCase {
            reminder_id: reminder_id.clone(),
        };
        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::ReminderNotFound(reminder_id)
        );
    }
}
