use std::{collections::BTreeMap, sync::LazyLock};

use crate::{
    DayTemplate, DayTemplateID, DaysPerWeek, Equipment, Mechanic, Movement, MovementID, MuscleID,
    Name, Pattern, PatternID, ReadError, SplitTemplate,
};

#[allow(async_fn_in_trait)]
pub trait CatalogRepository {
    async fn read_catalog(&self) -> Result<Catalog, ReadError>;
}

#[allow(async_fn_in_trait)]
pub trait CatalogService {
    async fn get_catalog(&self) -> Result<Catalog, ReadError>;
}

/// An immutable snapshot of patterns, movements, day templates and splits.
///
/// Vectors preserve creation order. Split lookup returns the first match in
/// that order, which makes the tie-break between splits with the same day
/// count deterministic.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Catalog {
    patterns: Vec<Pattern>,
    movements: Vec<Movement>,
    day_templates: Vec<DayTemplate>,
    splits: Vec<SplitTemplate>,
}

impl Catalog {
    #[must_use]
    pub fn new(
        patterns: Vec<Pattern>,
        movements: Vec<Movement>,
        day_templates: Vec<DayTemplate>,
        splits: Vec<SplitTemplate>,
    ) -> Self {
        Self {
            patterns,
            movements,
            day_templates,
            splits,
        }
    }

    #[must_use]
    pub fn pattern(&self, id: PatternID) -> Option<&Pattern> {
        self.patterns.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn movement(&self, id: MovementID) -> Option<&Movement> {
        self.movements.iter().find(|m| m.id == id)
    }

    #[must_use]
    pub fn day_template(&self, id: DayTemplateID) -> Option<&DayTemplate> {
        self.day_templates.iter().find(|t| t.id == id)
    }

    pub fn movements_for_pattern(&self, pattern_id: PatternID) -> impl Iterator<Item = &Movement> {
        self.movements.iter().filter(move |m| m.pattern_id == pattern_id)
    }

    #[must_use]
    pub fn split_for_days_per_week(&self, days_per_week: DaysPerWeek) -> Option<&SplitTemplate> {
        self.splits.iter().find(|s| s.days_per_week == days_per_week)
    }
}

/// The built-in hypertrophy catalog.
///
/// IDs are deterministic: patterns start at 1, movements at 101, day
/// templates at 201, splits at 301.
pub static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    let patterns = PATTERNS
        .iter()
        .enumerate()
        .map(|(index, pattern)| Pattern {
            id: (index as u128 + 1).into(),
            name: Name::new(pattern.name).unwrap(),
            primary_muscles: pattern.primary_muscles.iter().copied().collect(),
            secondary_muscles: pattern.secondary_muscles.iter().copied().collect(),
        })
        .collect::<Vec<_>>();
    let pattern_ids = patterns
        .iter()
        .map(|p| (p.name.as_ref().as_str(), p.id))
        .collect::<BTreeMap<_, _>>();

    let movements = MOVEMENTS
        .iter()
        .enumerate()
        .map(|(index, movement)| Movement {
            id: (index as u128 + 101).into(),
            name: Name::new(movement.name).unwrap(),
            pattern_id: pattern_ids[movement.pattern],
            equipment: movement.equipment.iter().copied().collect(),
            mechanic: movement.mechanic,
        })
        .collect::<Vec<_>>();

    let day_templates = DAY_TEMPLATES
        .iter()
        .enumerate()
        .map(|(index, template)| DayTemplate {
            id: (index as u128 + 201).into(),
            name: Name::new(template.name).unwrap(),
            patterns: template.patterns.iter().map(|name| pattern_ids[*name]).collect(),
        })
        .collect::<Vec<_>>();
    let day_template_ids = day_templates
        .iter()
        .map(|t| (t.name.as_ref().as_str(), t.id))
        .collect::<BTreeMap<_, _>>();

    let splits = SPLITS
        .iter()
        .enumerate()
        .map(|(index, split)| SplitTemplate {
            id: (index as u128 + 301).into(),
            name: Name::new(split.name).unwrap(),
            days_per_week: DaysPerWeek::new(split.days_per_week).unwrap(),
            days: split.days.iter().map(|name| day_template_ids[*name]).collect(),
        })
        .collect::<Vec<_>>();

    Catalog::new(patterns, movements, day_templates, splits)
});

struct BuiltinPattern {
    name: &'static str,
    primary_muscles: &'static [MuscleID],
    secondary_muscles: &'static [MuscleID],
}

const PATTERNS: [BuiltinPattern; 15] = [
    BuiltinPattern {
        name: "Horizontal Incline Push",
        primary_muscles: &[MuscleID::UpperChest],
        secondary_muscles: &[MuscleID::FrontDelts, MuscleID::Triceps],
    },
    BuiltinPattern {
        name: "Horizontal Push",
        primary_muscles: &[MuscleID::LowerChest],
        secondary_muscles: &[MuscleID::Triceps, MuscleID::FrontDelts],
    },
    BuiltinPattern {
        name: "Vertical Push",
        primary_muscles: &[MuscleID::FrontDelts],
        secondary_muscles: &[MuscleID::Triceps, MuscleID::UpperChest, MuscleID::SideDelts],
    },
    BuiltinPattern {
        name: "Side Delt Isolation",
        primary_muscles: &[MuscleID::SideDelts],
        secondary_muscles: &[],
    },
    BuiltinPattern {
        name: "Tricep Isolation",
        primary_muscles: &[MuscleID::Triceps],
        secondary_muscles: &[],
    },
    BuiltinPattern {
        name: "Horizontal Pull",
        primary_muscles: &[MuscleID::UpperBack, MuscleID::Traps],
        secondary_muscles: &[MuscleID::RearDelts, MuscleID::Lats, MuscleID::Biceps],
    },
    BuiltinPattern {
        name: "Vertical Pull",
        primary_muscles: &[MuscleID::Lats],
        secondary_muscles: &[MuscleID::Biceps, MuscleID::RearDelts, MuscleID::UpperBack],
    },
    BuiltinPattern {
        name: "Rear Delt Isolation",
        primary_muscles: &[MuscleID::RearDelts],
        secondary_muscles: &[MuscleID::Traps],
    },
    BuiltinPattern {
        name: "Bicep Isolation",
        primary_muscles: &[MuscleID::Biceps],
        secondary_muscles: &[],
    },
    BuiltinPattern {
        name: "Lat Isolation",
        primary_muscles: &[MuscleID::Lats],
        secondary_muscles: &[],
    },
    BuiltinPattern {
        name: "Squat",
        primary_muscles: &[MuscleID::Quads, MuscleID::Glutes],
        secondary_muscles: &[MuscleID::Hamstrings],
    },
    BuiltinPattern {
        name: "Hinge",
        primary_muscles: &[MuscleID::Glutes, MuscleID::LowerBack],
        secondary_muscles: &[MuscleID::Hamstrings, MuscleID::Quads],
    },
    BuiltinPattern {
        name: "Quad Isolation",
        primary_muscles: &[MuscleID::Quads],
        secondary_muscles: &[],
    },
    BuiltinPattern {
        name: "Hamstring Isolation",
        primary_muscles: &[MuscleID::Hamstrings],
        secondary_muscles: &[],
    },
    BuiltinPattern {
        name: "Calf Isolation",
        primary_muscles: &[MuscleID::Calves],
        secondary_muscles: &[],
    },
];

struct BuiltinMovement {
    name: &'static str,
    pattern: &'static str,
    equipment: &'static [Equipment],
    mechanic: Mechanic,
}

const MOVEMENTS: [BuiltinMovement; 17] = [
    BuiltinMovement {
        name: "Incline Barbell Bench Press",
        pattern: "Horizontal Incline Push",
        equipment: &[Equipment::Barbell],
        mechanic: Mechanic::Compound,
    },
    BuiltinMovement {
        name: "Flat Dumbbell Press",
        pattern: "Horizontal Push",
        equipment: &[Equipment::Dumbbell],
        mechanic: Mechanic::Compound,
    },
    BuiltinMovement {
        name: "Push-Ups",
        pattern: "Horizontal Push",
        equipment: &[Equipment::Bodyweight],
        mechanic: Mechanic::Compound,
    },
    BuiltinMovement {
        name: "Machine Shoulder Press",
        pattern: "Vertical Push",
        equipment: &[Equipment::Machine],
        mechanic: Mechanic::Compound,
    },
    BuiltinMovement {
        name: "Dumbbell Lateral Raise",
        pattern: "Side Delt Isolation",
        equipment: &[Equipment::Dumbbell],
        mechanic: Mechanic::Isolation,
    },
    BuiltinMovement {
        name: "Tricep Pushdown",
        pattern: "Tricep Isolation",
        equipment: &[Equipment::Cable],
        mechanic: Mechanic::Isolation,
    },
    BuiltinMovement {
        name: "Barbell Row",
        pattern: "Horizontal Pull",
        equipment: &[Equipment::Barbell],
        mechanic: Mechanic::Compound,
    },
    BuiltinMovement {
        name: "Pull-Ups",
        pattern: "Vertical Pull",
        equipment: &[Equipment::Bodyweight],
        mechanic: Mechanic::Compound,
    },
    BuiltinMovement {
        name: "Face Pulls",
        pattern: "Rear Delt Isolation",
        equipment: &[Equipment::Cable],
        mechanic: Mechanic::Isolation,
    },
    BuiltinMovement {
        name: "Barbell Curl",
        pattern: "Bicep Isolation",
        equipment: &[Equipment::Barbell],
        mechanic: Mechanic::Isolation,
    },
    BuiltinMovement {
        name: "Bayesian Curl",
        pattern: "Bicep Isolation",
        equipment: &[Equipment::Cable],
        mechanic: Mechanic::Isolation,
    },
    BuiltinMovement {
        name: "Straight Arm Lat Pulldown",
        pattern: "Lat Isolation",
        equipment: &[Equipment::Cable],
        mechanic: Mechanic::Isolation,
    },
    BuiltinMovement {
        name: "Barbell Squat",
        pattern: "Squat",
        equipment: &[Equipment::Barbell],
        mechanic: Mechanic::Compound,
    },
    BuiltinMovement {
        name: "Romanian Deadlift",
        pattern: "Hinge",
        equipment: &[Equipment::Barbell],
        mechanic: Mechanic::Compound,
    },
    BuiltinMovement {
        name: "Leg Extension",
        pattern: "Quad Isolation",
        equipment: &[Equipment::Machine],
        mechanic: Mechanic::Isolation,
    },
    BuiltinMovement {
        name: "Hamstring Curl",
        pattern: "Hamstring Isolation",
        equipment: &[Equipment::Machine],
        mechanic: Mechanic::Isolation,
    },
    BuiltinMovement {
        name: "Standing Calf Raise",
        pattern: "Calf Isolation",
        equipment: &[Equipment::Machine],
        mechanic: Mechanic::Isolation,
    },
];

struct BuiltinDayTemplate {
    name: &'static str,
    patterns: &'static [&'static str],
}

const DAY_TEMPLATES: [BuiltinDayTemplate; 3] = [
    BuiltinDayTemplate {
        name: "Push",
        patterns: &[
            "Horizontal Incline Push",
            "Horizontal Push",
            "Vertical Push",
            "Side Delt Isolation",
            "Tricep Isolation",
        ],
    },
    BuiltinDayTemplate {
        name: "Pull",
        patterns: &[
            "Vertical Pull",
            "Horizontal Pull",
            "Lat Isolation",
            "Rear Delt Isolation",
            "Bicep Isolation",
        ],
    },
    BuiltinDayTemplate {
        name: "Legs",
        patterns: &[
            "Squat",
            "Hinge",
            "Quad Isolation",
            "Hamstring Isolation",
            "Calf Isolation",
        ],
    },
];

struct BuiltinSplit {
    name: &'static str,
    days_per_week: u8,
    days: &'static [&'static str],
}

const SPLITS: [BuiltinSplit; 2] = [
    BuiltinSplit {
        name: "Push Pull Legs",
        days_per_week: 3,
        days: &["Push", "Pull", "Legs"],
    },
    BuiltinSplit {
        name: "PPLPPL",
        days_per_week: 6,
        days: &["Push", "Pull", "Legs", "Push", "Pull", "Legs"],
    },
];
