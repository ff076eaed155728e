use crate::error::PawfeedError;
use crate::scheduling::{
    cancel_orphaned_notifications, schedule_all_reminders, ScheduleReminderResult,
};
use crate::shared::usecase::UseCase;
use pawfeed_domain::ID;
use pawfeed_infra::PawfeedContext;

/// Startup reconciliation for one family group: re-derive the facility's
/// notification set from the store's current reminder list, then sweep
/// notifications whose reminder was deleted while this device was offline.
///
/// Expected to run once per session. It goes through
/// `schedule_all_reminders`, so repeated invocations against an unchanged
/// list will double-schedule.
#[derive(Debug)]
pub struct SyncReminderNotificationsUseCase {
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
    pub results: Vec<ScheduleReminderResult>,
}

#[async_trait::async_trait(?Send)]
impl UseCase for SyncReminderNotificationsUseCase {
    type Response = UseCaseRes;

    type Error = UseCaseError;

    async fn execute(&mut self, ctx: &PawfeedContext) -> Result<Self::Response, Self::Error> {
        let reminders = ctx.repos.reminders.find_by_group(&self.group_id).await;

        let results = schedule_all_reminders(&reminders, ctx).await;
        cancel_orphaned_notifications(&reminders, ctx).await;

        Ok(UseCaseRes { results })
    }
}
