mod notification;
mod reminder;
mod shared;
mod time;
mod weekday;

pub use notification::{
    NotificationContent, NotificationData, ScheduledNotification, WeeklyTrigger,
    FEEDING_REMINDER_TYPE,
};
pub use reminder::{FoodType, InvalidFoodTypeError, Reminder};
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use time::{InvalidTimeFormatError, TimeOfDay};
pub use weekday::{trigger_weekday, InvalidWeekdayError};
