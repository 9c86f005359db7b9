use std::{collections::BTreeSet, slice::Iter};

use crate::{DaysPerWeek, Equipment, MuscleID, Property, ReadError, UpdateError};

#[allow(async_fn_in_trait)]
pub trait PreferencesRepository {
    async fn read_preferences(&self) -> Result<Preferences, ReadError>;
    async fn replace_preferences(
        &self,
        preferences: Preferences,
    ) -> Result<Preferences, UpdateError>;
}

#[allow(async_fn_in_trait)]
pub trait PreferencesService {
    async fn get_preferences(&self) -> Result<Preferences, ReadError>;
    async fn replace_preferences(
        &self,
        preferences: Preferences,
    ) -> Result<Preferences, UpdateError>;
}

/// Training preferences driving plan generation.
///
/// `training_age`, `bodyweight_exercises` and `priority_muscles` are carried
/// for the surrounding application but not consulted when generating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    pub days_per_week: DaysPerWeek,
    pub training_age: u32,
    pub volume: Volume,
    pub bodyweight_exercises: BodyweightPreference,
    pub priority_muscles: BTreeSet<MuscleID>,
    pub equipment: BTreeSet<Equipment>,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Volume {
    Low,
    Moderate,
    High,
}

impl Property for Volume {
    fn iter() -> Iter<'static, Volume> {
        static VOLUME: [Volume; 3] = [Volume::Low, Volume::Moderate, Volume::High];
        VOLUME.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Volume::Low => "Low",
            Volume::Moderate => "Moderate",
            Volume::High => "High",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BodyweightPreference {
    Bodyweight,
    Weighted,
    Absent,
}

impl Property for BodyweightPreference {
    fn iter() -> Iter<'static, BodyweightPreference> {
        static BODYWEIGHT: [BodyweightPreference; 3] = [
            BodyweightPreference::Bodyweight,
            BodyweightPreference::Weighted,
            BodyweightPreference::Absent,
        ];
        BODYWEIGHT.iter()
    }

    fn name(self) -> &'static str {
        match self {
            BodyweightPreference::Bodyweight => "Bodyweight",
            BodyweightPreference::Weighted => "Weighted",
            BodyweightPreference::Absent => "Absent",
        }
    }
}
