use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// A wall-clock time of day without a date or timezone component.
///
/// Reminder times are deliberately timezone-naive: the delivery facility
/// resolves them against the device's current timezone at each fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidTimeFormatError {
    #[error("Time: {0} is malformed, expected the `HH:MM` 24-hour format")]
    Malformed(String),
}

impl FromStr for TimeOfDay {
    type Err = InvalidTimeFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || InvalidTimeFormatError::Malformed(s.to_string());

        let fields = s.split(':').collect::<Vec<_>>();
        if fields.len() != 2 {
            return Err(malformed());
        }
        let hour = fields[0].parse::<u32>().map_err(|_| malformed())?;
        let minute = fields[1].parse::<u32>().map_err(|_| malformed())?;
        if hour > 23 || minute > 59 {
            return Err(malformed());
        }

        Ok(Self { hour, minute })
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}
