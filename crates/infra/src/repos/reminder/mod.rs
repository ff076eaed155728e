mod inmemory;
mod postgres;

pub use inmemory::InMemoryReminderRepo;
use pawfeed_domain::{Reminder, ID};
pub use postgres::PostgresReminderRepo;

#[async_trait::async_trait]
pub trait IReminderRepo: Send + Sync {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()>;
    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()>;
    async fn find(&self, reminder_id: &ID) -> Option<Reminder>;
    /// All reminders of a family group, ordered by `reminder_time` ascending
    async fn find_by_group(&self, group_id: &ID) -> Vec<Reminder>;
    async fn delete(&self, reminder_id: &ID) -> Option<Reminder>;
}

#[cfg(test)]
mod tests {
    use crate::PawfeedContext;
    use pawfeed_domain::{FoodType, Reminder, ID};

    #[tokio::test]
    async fn create_and_delete() {
        let ctx = PawfeedContext::create_inmemory();
        let group_id = ID::new();

        let mut reminder = Reminder::new(group_id.clone());
        reminder.name = "Bella".into();
        reminder.food_type = FoodType::DryFood;
        reminder.days_of_week = vec![1, 3, 5].into_iter().collect();

        // Insert
        assert!(ctx.repos.reminders.insert(&reminder).await.is_ok());

        // Find
        let res = ctx.repos.reminders.find(&reminder.id).await.unwrap();
        assert_eq!(res, reminder);
        let res = ctx.repos.reminders.find_by_group(&group_id).await;
        assert_eq!(res.len(), 1);
        assert_eq!(res[0], reminder);

        // Delete
        let res = ctx.repos.reminders.delete(&reminder.id).await;
        assert!(res.is_some());
        assert_eq!(res.unwrap(), reminder);

        // Find
        assert!(ctx.repos.reminders.find(&reminder.id).await.is_none());
    }

    #[tokio::test]
    async fn update() {
        let ctx = PawfeedContext::create_inmemory();

        let mut reminder = Reminder::new(ID::new());
        reminder.days_of_week = vec![2].into_iter().collect();
        assert!(ctx.repos.reminders.insert(&reminder).await.is_ok());

        reminder.is_active = false;
        reminder.reminder_time = "18:30".into();
        assert!(ctx.repos.reminders.save(&reminder).await.is_ok());

        let res = ctx.repos.reminders.find(&reminder.id).await.unwrap();
        assert!(!res.is_active);
        assert_eq!(res.reminder_time, "18:30");
    }

    #[tokio::test]
    async fn lists_group_ordered_by_reminder_time() {
        let ctx = PawfeedContext::create_inmemory();
        let group_id = ID::new();

        for time in &["18:00", "07:30", "12:15"] {
            let mut reminder = Reminder::new(group_id.clone());
            reminder.reminder_time = (*time).into();
            assert!(ctx.repos.reminders.insert(&reminder).await.is_ok());
        }
        // Another group's reminder is not listed
        assert!(ctx
            .repos
            .reminders
            .insert(&Reminder::new(ID::new()))
            .await
            .is_ok());

        let reminders = ctx.repos.reminders.find_by_group(&group_id).await;
        let times = reminders
            .iter()
            .map(|reminder| reminder.reminder_time.clone())
            .collect::<Vec<_>>();
        assert_eq!(times, vec!["07:30", "12:15", "18:00"]);
    }
}
