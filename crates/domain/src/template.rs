use derive_more::{Deref, Display, Into};
use uuid::Uuid;

use crate::{Name, PatternID};

#[derive(Debug, Display, Clone, Copy, Hash, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct DaysPerWeek(u8);

impl DaysPerWeek {
    pub fn new(value: u8) -> Result<Self, DaysPerWeekError> {
        if !(1..=7).contains(&value) {
            return Err(DaysPerWeekError::OutOfRange(value));
        }

        Ok(Self(value))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DaysPerWeekError {
    #[error("Days per week must be between 1 and 7 ({0} is not)")]
    OutOfRange(u8),
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct DayTemplateID(Uuid);

impl DayTemplateID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for DayTemplateID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for DayTemplateID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// A named training day consisting of patterns to be filled, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayTemplate {
    pub id: DayTemplateID,
    pub name: Name,
    pub patterns: Vec<PatternID>,
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct SplitID(Uuid);

impl SplitID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for SplitID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for SplitID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// A weekly cycle of day templates, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitTemplate {
    pub id: SplitID,
    pub name: Name,
    pub days_per_week: DaysPerWeek,
    pub days: Vec<DayTemplateID>,
}
