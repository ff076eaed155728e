mod error;
mod reminder;
mod scheduling;
mod shared;

pub use error::PawfeedError;
pub use reminder::{
    CreateReminderUseCase, DeleteReminderUseCase, GetRemindersUseCase,
    SyncReminderNotificationsUseCase, UpdateReminderUseCase,
};
pub use scheduling::{
    cancel_orphaned_notifications, cancel_reminder_notifications,
    reschedule_reminder_notifications, schedule_all_reminders, schedule_reminder_notifications,
    ScheduleReminderResult,
};
pub use shared::usecase::{execute, UseCase};
