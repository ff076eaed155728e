use chrono::Weekday;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidWeekdayError {
    #[error("Weekday: {0} is outside the valid range 1 (Monday) to 7 (Sunday)")]
    OutOfRange(u32),
}

/// Interpret a reminder weekday index, Monday = 1 .. Sunday = 7
fn store_weekday(day: u32) -> Result<Weekday, InvalidWeekdayError> {
    match day {
        1 => Ok(Weekday::Mon),
        2 => Ok(Weekday::Tue),
        3 => Ok(Weekday::Wed),
        4 => Ok(Weekday::Thu),
        5 => Ok(Weekday::Fri),
        6 => Ok(Weekday::Sat),
        7 => Ok(Weekday::Sun),
        _ => Err(InvalidWeekdayError::OutOfRange(day)),
    }
}

/// Translate a reminder weekday index (Monday = 1 .. Sunday = 7) to the
/// delivery facility numbering (Sunday = 1 .. Saturday = 7)
pub fn trigger_weekday(day: u32) -> Result<u32, InvalidWeekdayError> {
    store_weekday(day).map(|weekday| weekday.number_from_sunday())
}
