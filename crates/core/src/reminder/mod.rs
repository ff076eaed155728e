mod create_reminder;
mod delete_reminder;
mod get_reminders;
mod sync_reminder_notifications;
mod update_reminder;

pub use create_reminder::CreateReminderUseCase;
pub use delete_reminder::DeleteReminderUseCase;
pub use get_reminders::GetRemindersUseCase;
pub use sync_reminder_notifications::SyncReminderNotificationsUseCase;
pub use update_reminder::UpdateReminderUseCase;
