use std::{collections::BTreeSet, slice::Iter};

use derive_more::Deref;
use uuid::Uuid;

use crate::Name;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum MuscleID {
    // Chest
    UpperChest = 11,
    LowerChest = 12,
    // Back
    UpperBack = 21,
    LowerBack = 22,
    Lats = 23,
    Traps = 24,
    // Shoulders
    FrontDelts = 31,
    SideDelts = 32,
    RearDelts = 33,
    // Upper arms
    Biceps = 41,
    Triceps = 42,
    // Thighs
    Quads = 51,
    Hamstrings = 52,
    // Hips
    Glutes = 61,
    // Calves
    Calves = 71,
}

impl Property for MuscleID {
    fn iter() -> Iter<'static, MuscleID> {
        static MUSCLES: [MuscleID; 15] = [
            MuscleID::UpperChest,
            MuscleID::LowerChest,
            MuscleID::UpperBack,
            MuscleID::LowerBack,
            MuscleID::Lats,
            MuscleID::Traps,
            MuscleID::FrontDelts,
            MuscleID::SideDelts,
            MuscleID::RearDelts,
            MuscleID::Biceps,
            MuscleID::Triceps,
            MuscleID::Quads,
            MuscleID::Hamstrings,
            MuscleID::Glutes,
            MuscleID::Calves,
        ];
        MUSCLES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MuscleID::UpperChest => "Upper Chest",
            MuscleID::LowerChest => "Lower Chest",
            MuscleID::UpperBack => "Upper Back",
            MuscleID::LowerBack => "Lower Back",
            MuscleID::Lats => "Lats",
            MuscleID::Traps => "Traps",
            MuscleID::FrontDelts => "Front Delts",
            MuscleID::SideDelts => "Side Delts",
            MuscleID::RearDelts => "Rear Delts",
            MuscleID::Biceps => "Biceps",
            MuscleID::Triceps => "Triceps",
            MuscleID::Quads => "Quads",
            MuscleID::Hamstrings => "Hamstrings",
            MuscleID::Glutes => "Glutes",
            MuscleID::Calves => "Calves",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Equipment {
    Barbell,
    Bodyweight,
    Cable,
    Dumbbell,
    Machine,
}

impl Property for Equipment {
    fn iter() -> Iter<'static, Equipment> {
        static EQUIPMENT: [Equipment; 5] = [
            Equipment::Barbell,
            Equipment::Bodyweight,
            Equipment::Cable,
            Equipment::Dumbbell,
            Equipment::Machine,
        ];
        EQUIPMENT.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Equipment::Barbell => "Barbell",
            Equipment::Bodyweight => "Bodyweight",
            Equipment::Cable => "Cable",
            Equipment::Dumbbell => "Dumbbell",
            Equipment::Machine => "Machine",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Mechanic {
    Compound,
    Isolation,
}

impl Property for Mechanic {
    fn iter() -> Iter<'static, Mechanic> {
        static MECHANIC: [Mechanic; 2] = [Mechanic::Compound, Mechanic::Isolation];
        MECHANIC.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Mechanic::Compound => "Compound",
            Mechanic::Isolation => "Isolation",
        }
    }
}

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct PatternID(Uuid);

impl PatternID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for PatternID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for PatternID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// A movement role to be filled with a concrete exercise, e.g. "Vertical Pull".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pub id: PatternID,
    pub name: Name,
    pub primary_muscles: BTreeSet<MuscleID>,
    pub secondary_muscles: BTreeSet<MuscleID>,
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct MovementID(Uuid);

impl MovementID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for MovementID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for MovementID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// A concrete exercise implementing one pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movement {
    pub id: MovementID,
    pub name: Name,
    pub pattern_id: PatternID,
    pub equipment: BTreeSet<Equipment>,
    pub mechanic: Mechanic,
}

impl Movement {
    /// A movement is usable if any of its equipment entries is available.
    #[must_use]
    pub fn usable_with(&self, available: &BTreeSet<Equipment>) -> bool {
        self.equipment.iter().any(|e| available.contains(e))
    }
}
