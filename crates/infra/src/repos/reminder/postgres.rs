use super::IReminderRepo;
use pawfeed_domain::{Reminder, ID};
use sqlx::{
    types::{Json, Uuid},
    FromRow, PgPool,
};
use std::collections::BTreeSet;

pub struct PostgresReminderRepo {
    pool: PgPool,
}

impl PostgresReminderRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ReminderRaw {
    reminder_uid: Uuid,
    group_uid: Uuid,
    name: String,
    food_type: String,
    reminder_time: String,
    days_of_week: serde_json::Value,
    is_active: bool,
    created_at: i64,
    updated_at: i64,
}

impl Into<Reminder> for ReminderRaw {
    fn into(self) -> Reminder {
        Reminder {
            id: self.reminder_uid.into(),
            group_id: self.group_uid.into(),
            name: self.name,
            food_type: self.food_type.parse().unwrap_or_default(),
            reminder_time: self.reminder_time,
            days_of_week: serde_json::from_value::<BTreeSet<u32>>(self.days_of_week)
                .unwrap_or_default(),
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[async_trait::async_trait]
impl IReminderRepo for PostgresReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO reminders(reminder_uid, group_uid, name, food_type, reminder_time, days_of_week, is_active, created_at, updated_at)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(reminder.id.inner_ref())
        .bind(reminder.group_id.inner_ref())
        .bind(&reminder.name)
        .bind(reminder.food_type.to_string())
        .bind(&reminder.reminder_time)
        .bind(Json(&reminder.days_of_week))
        .bind(reminder.is_active)
        .bind(reminder.created_at)
        .bind(reminder.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE reminders
            SET name = $2,
            food_type = $3,
            reminder_time = $4,
            days_of_week = $5,
            is_active = $6,
            updated_at = $7
            WHERE reminder_uid = $1
            "#,
        )
        .bind(reminder.id.inner_ref())
        .bind(&reminder.name)
        .bind(reminder.food_type.to_string())
        .bind(&reminder.reminder_time)
        .bind(Json(&reminder.days_of_week))
        .bind(reminder.is_active)
        .bind(reminder.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, reminder_id: &ID) -> Option<Reminder> {
        let reminder: ReminderRaw = match sqlx::query_as(
            r#"
            SELECT * FROM reminders
            WHERE reminder_uid = $1
            "#,
        )
        .bind(reminder_id.inner_ref())
        .fetch_one(&self.pool)
        .await
        {
            Ok(reminder) => reminder,
            Err(_) => return None,
        };
        Some(reminder.into())
    }

    async fn find_by_group(&self, group_id: &ID) -> Vec<Reminder> {
        let reminders: Vec<ReminderRaw> = match sqlx::query_as(
            r#"
            SELECT * FROM reminders
            WHERE group_uid = $1
            ORDER BY reminder_time ASC
            "#,
        )
        .bind(group_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        {
            Ok(reminders) => reminders,
            Err(_) => return Vec::new(),
        };
        reminders.into_iter().map(|r| r.into()).collect()
    }

    async fn delete(&self, reminder_id: &ID) -> Option<Reminder> {
        match sqlx::query_as(
            r#"
            DELETE FROM reminders
            WHERE reminder_uid = $1
            RETURNING *
            "#,
        )
        .bind(reminder_id.inner_ref())
        .fetch_one(&self.pool)
        .await
        {
            Ok(reminder) => {
                let reminder: ReminderRaw = reminder;
                Some(reminder.into())
            }
            Err(_) => None,
        }
    }
}
