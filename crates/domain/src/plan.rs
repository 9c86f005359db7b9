use std::fmt;

use chrono::NaiveDate;
use derive_more::{Deref, Display, Into};
use uuid::Uuid;

use crate::{CreateError, DaysPerWeek, DeleteError, Movement, MovementID, Name, ReadError};

#[allow(async_fn_in_trait)]
pub trait PlanRepository {
    async fn read_plans(&self) -> Result<Vec<Plan>, ReadError>;
    async fn create_plan(&self, plan: Plan) -> Result<Plan, CreateError>;
    async fn delete_plan(&self, id: PlanID) -> Result<PlanID, DeleteError>;
}

#[allow(async_fn_in_trait)]
pub trait PlanService {
    async fn get_plans(&self) -> Result<Vec<Plan>, ReadError>;
    async fn save_plan(&self, plan: Plan) -> Result<Plan, CreateError>;
    async fn delete_plan(&self, id: PlanID) -> Result<PlanID, DeleteError>;
}

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Sets(u32);

impl Sets {
    pub fn new(value: u32) -> Result<Self, SetsError> {
        if value > 10 {
            return Err(SetsError::OutOfRange(value));
        }

        Ok(Self(value))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SetsError {
    #[error("Sets must be 10 or fewer ({0} > 10)")]
    OutOfRange(u32),
}

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Reps(u32);

impl Reps {
    pub fn new(value: u32) -> Result<Self, RepsError> {
        if value >= 1000 {
            return Err(RepsError::OutOfRange(value));
        }

        Ok(Self(value))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be 999 or fewer ({0} > 999)")]
    OutOfRange(u32),
}

/// An inclusive target rep range, e.g. 8 to 12 reps.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RepRange {
    pub start: Reps,
    pub end: Reps,
}

impl fmt::Display for RepRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Sets and rep range assigned to one scheduled movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prescription {
    pub sets: Sets,
    pub reps: RepRange,
}

impl Prescription {
    /// Applied when no rule covers a volume/mechanic combination.
    pub const FALLBACK: Prescription = Prescription::fixed(2, 8, 10);

    pub(crate) const fn fixed(sets: u32, start_reps: u32, end_reps: u32) -> Self {
        Self {
            sets: Sets(sets),
            reps: RepRange {
                start: Reps(start_reps),
                end: Reps(end_reps),
            },
        }
    }
}

/// One slot of a generated training day.
///
/// A slot whose pattern could not be filled carries a nil movement ID, a
/// zeroed prescription and `skip`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedExercise {
    pub movement_id: MovementID,
    pub name: Name,
    pub sets: Sets,
    pub reps: RepRange,
    pub skip: bool,
}

impl PlannedExercise {
    pub const PLACEHOLDER_NAME: &'static str = "No Suitable Exercises";

    #[must_use]
    pub fn scheduled(movement: &Movement, prescription: Prescription) -> Self {
        Self {
            movement_id: movement.id,
            name: movement.name.clone(),
            sets: prescription.sets,
            reps: prescription.reps,
            skip: false,
        }
    }

    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            movement_id: MovementID::nil(),
            name: Name::new(Self::PLACEHOLDER_NAME).unwrap(),
            sets: Sets::default(),
            reps: RepRange::default(),
            skip: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanDay {
    pub name: Name,
    pub exercises: Vec<PlannedExercise>,
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct PlanID(Uuid);

impl PlanID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for PlanID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for PlanID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub id: PlanID,
    pub name: Name,
    pub days_per_week: DaysPerWeek,
    pub date: NaiveDate,
    pub days: Vec<PlanDay>,
}
