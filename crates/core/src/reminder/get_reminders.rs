use crate::error::PawfeedError;
use crate::shared::usecase::UseCase;
use pawfeed_domain::{Reminder, ID};
use pawfeed_infra::PawfeedContext;

/// List a family group's reminders, reading through the context's query
/// cache so repeated loads do not hit the store
#[derive(Debug)]
pub struct GetRemindersUseCase {
    pub group_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for PawfeedError {
    fn from(e: UseCaseError) -> Self {
        match e {}
    }
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub reminders: Vec<Reminder>,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetRemindersUseCase {
    type Response = UseCaseRes;

    type Error = UseCaseError;

    async fn execute(&mut self, ctx: &PawfeedContext) -> Result<Self::Response, Self::Error> {
        if let Some(reminders) = ctx.cache.get(&self.group_id) {
            return Ok(UseCaseRes { reminders });
        }

        let reminders = ctx.repos.reminders.find_by_group(&self.group_id).await;
        ctx.cache.set(&self.group_id, reminders.clone());

        Ok(UseCaseRes { reminders })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reminder::CreateReminderUseCase;
    use pawfeed_domain::FoodType;

    fn create_usecase(group_id: ID, name: &str, time: &str) -> CreateReminderUseCase {
        CreateReminderUseCase {
            group_id,
            name: name.into(),
            food_type: FoodType::Snacks,
            reminder_time: time.into(),
            days_of_week: vec![6, 7].into_iter().collect(),
            is_active: true,
        }
    }

    #[tokio::test]
    async fn lists_reminders_ordered_by_time() {
        let ctx = PawfeedContext::create_inmemory();
        let group_id = ID::new();

        create_usecase(group_id.clone(), "Evening", "18:00")
            .execute(&ctx)
            .await
            .unwrap();
        create_usecase(group_id.clone(), "Morning", "07:00")
            .execute(&ctx)
            .await
            .unwrap();

        let res = GetRemindersUseCase {
            group_id: group_id.clone(),
        }
        .execute(&ctx)
        .await
        .unwrap();
        let names = res
            .reminders
            .iter()
            .map(|reminder| reminder.name.clone())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Morning", "Evening"]);
    }

    #[tokio::test]
    async fn cache_is_invalidated_by_mutations() {
        let ctx = PawfeedContext::create_inmemory();
        let group_id = ID::new();

        create_usecase(group_id.clone(), "First", "08:00")
            .execute(&ctx)
            .await
            .unwrap();

        // Prime the cache
        let res = GetRemindersUseCase {
            group_id: group_id.clone(),
        }
        .execute(&ctx)
        .await
        .unwrap();
        assert_eq!(res.reminders.len(), 1);
        assert!(ctx.cache.get(&group_id).is_some());

        // A create for the same group invalidates the cached list
        create_usecase(group_id.clone(), "Second", "12:00")
            .execute(&ctx)
            .await
            .unwrap();
        assert!(ctx.cache.get(&group_id).is_none());

        let res = GetRemindersUseCase {
            group_id: group_id.clone(),
        }
        .execute(&ctx)
        .await
        .unwrap();
        assert_eq!(res.reminders.len(), 2);
    }
}
