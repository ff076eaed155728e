use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// A `Reminder` is a recurring feeding alert owned by a family group:
/// a wall-clock time of day, a set of weekdays and an active flag.
///
/// The scheduling layer treats it as an immutable snapshot per call and
/// derives one scheduled notification per entry in `days_of_week`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: ID,
    /// The family group this `Reminder` belongs to. Only used for
    /// store-level scoping, never by scheduling itself.
    pub group_id: ID,
    /// Display label, usually the pet's name
    pub name: String,
    pub food_type: FoodType,
    /// Time of day on the `HH:MM` 24-hour format. Kept as the raw store
    /// string since rows written by other clients may be malformed; it is
    /// parsed into a `TimeOfDay` at scheduling time.
    pub reminder_time: String,
    /// Weekdays the reminder fires on, Monday = 1 .. Sunday = 7.
    /// An empty set means the reminder never fires.
    pub days_of_week: BTreeSet<u32>,
    /// Inactive reminders must have zero scheduled notifications
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Reminder {
    pub fn new(group_id: ID) -> Self {
        Self {
            id: Default::default(),
            group_id,
            name: String::new(),
            food_type: Default::default(),
            reminder_time: "08:00".into(),
            days_of_week: BTreeSet::new(),
            is_active: true,
            created_at: 0,
            updated_at: 0,
        }
    }
}

impl Entity<ID> for Reminder {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

/// The fixed set of food categories a feeding reminder can be about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoodType {
    #[serde(rename = "Dry Food")]
    DryFood,
    #[serde(rename = "Wet Food")]
    WetFood,
    Treats,
    Snacks,
    Medicine,
}

impl Default for FoodType {
    fn default() -> Self {
        Self::DryFood
    }
}

impl Display for FoodType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::DryFood => "Dry Food",
            Self::WetFood => "Wet Food",
            Self::Treats => "Treats",
            Self::Snacks => "Snacks",
            Self::Medicine => "Medicine",
        };
        write!(f, "{}", label)
    }
}

#[derive(Error, Debug)]
pub enum InvalidFoodTypeError {
    #[error("Food type: {0} is not recognized")]
    Unrecognized(String),
}

impl FromStr for FoodType {
    type Err = InvalidFoodTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Dry Food" => Ok(Self::DryFood),
            "Wet Food" => Ok(Self::WetFood),
            "Treats" => Ok(Self::Treats),
            "Snacks" => Ok(Self::Snacks),
            "Medicine" => Ok(Self::Medicine),
            _ => Err(InvalidFoodTypeError::Unrecognized(s.to_string())),
        }
    }
}
