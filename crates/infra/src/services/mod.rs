mod notification;

pub use notification::{INotificationService, InMemoryNotificationService};
