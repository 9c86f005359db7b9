use std::collections::BTreeSet;

use chrono::NaiveDate;
use rand::{Rng, seq::SliceRandom};

use crate::{
    Catalog, DayTemplate, Equipment, Mechanic, Movement, MovementID, PatternID, Plan, PlanDay,
    PlanID, PlannedExercise, Preferences, Prescription, Volume,
};

/// Rep prescription rules: two options per volume/mechanic combination, one
/// of which is picked by a uniform coin flip.
const REP_OPTIONS: [(Volume, Mechanic, [Prescription; 2]); 6] = [
    (
        Volume::Low,
        Mechanic::Compound,
        [Prescription::fixed(2, 4, 6), Prescription::fixed(2, 6, 8)],
    ),
    (
        Volume::Low,
        Mechanic::Isolation,
        [Prescription::fixed(2, 6, 8), Prescription::fixed(1, 8, 10)],
    ),
    (
        Volume::Moderate,
        Mechanic::Compound,
        [Prescription::fixed(3, 6, 10), Prescription::fixed(3, 8, 12)],
    ),
    (
        Volume::Moderate,
        Mechanic::Isolation,
        [Prescription::fixed(2, 8, 10), Prescription::fixed(3, 8, 12)],
    ),
    (
        Volume::High,
        Mechanic::Compound,
        [Prescription::fixed(4, 8, 12), Prescription::fixed(3, 10, 15)],
    ),
    (
        Volume::High,
        Mechanic::Isolation,
        [Prescription::fixed(3, 8, 12), Prescription::fixed(3, 10, 15)],
    ),
];

/// Picks one movement for the pattern, uniformly at random among those
/// usable with the available equipment and not yet excluded.
///
/// `None` means no movement qualifies. That is an expected outcome and is
/// turned into a placeholder entry by [`generate_day`].
pub fn select_movement<'a>(
    catalog: &'a Catalog,
    pattern_id: PatternID,
    available_equipment: &BTreeSet<Equipment>,
    excluded: &BTreeSet<MovementID>,
    rng: &mut impl Rng,
) -> Option<&'a Movement> {
    let candidates = catalog
        .movements_for_pattern(pattern_id)
        .filter(|m| m.usable_with(available_equipment))
        .filter(|m| !excluded.contains(&m.id))
        .collect::<Vec<_>>();

    candidates.choose(rng).copied()
}

/// Assigns sets and a rep range for a movement of the given mechanic under
/// the given volume tier.
pub fn prescribe(mechanic: Mechanic, volume: Volume, rng: &mut impl Rng) -> Prescription {
    REP_OPTIONS
        .iter()
        .find(|(v, m, _)| *v == volume && *m == mechanic)
        .and_then(|(_, _, options)| options.choose(rng))
        .copied()
        .unwrap_or(Prescription::FALLBACK)
}

/// Fills each pattern of the day template in order.
///
/// Every pattern yields exactly one entry. Movements already placed earlier
/// in the same day are excluded to avoid duplicates; the exclusion set does
/// not carry over to other days.
pub fn generate_day(
    catalog: &Catalog,
    day_template: &DayTemplate,
    preferences: &Preferences,
    rng: &mut impl Rng,
) -> Vec<PlannedExercise> {
    let mut used = BTreeSet::new();
    let mut exercises = Vec::with_capacity(day_template.patterns.len());

    for pattern_id in &day_template.patterns {
        match select_movement(catalog, *pattern_id, &preferences.equipment, &used, rng) {
            Some(movement) => {
                used.insert(movement.id);
                let prescription = prescribe(movement.mechanic, preferences.volume, rng);
                exercises.push(PlannedExercise::scheduled(movement, prescription));
            }
            None => exercises.push(PlannedExercise::placeholder()),
        }
    }

    exercises
}

/// Generates a full plan for the preferences, or `None` if no split template
/// matches the requested number of training days per week.
pub fn generate_plan(
    catalog: &Catalog,
    preferences: &Preferences,
    date: NaiveDate,
    rng: &mut impl Rng,
) -> Option<Plan> {
    let split = catalog.split_for_days_per_week(preferences.days_per_week)?;
    let days = split
        .days
        .iter()
        .filter_map(|id| catalog.day_template(*id))
        .map(|day_template| PlanDay {
            name: day_template.name.clone(),
            exercises: generate_day(catalog, day_template, preferences, rng),
        })
        .collect();

    Some(Plan {
        id: PlanID::nil(),
        name: split.name.clone(),
        days_per_week: split.days_per_week,
        date,
        days,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::LazyLock;

    use pretty_assertions::assert_eq;
    use rand::{SeedableRng, rngs::StdRng};
    use rstest::rstest;

    use crate::{
        BodyweightPreference, DayTemplateID, DaysPerWeek, Name, Pattern, Property, RepRange, Sets,
        SplitTemplate, catalog,
    };

    use super::*;

    fn test_rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
    }

    fn pattern(id: u128, name: &str) -> Pattern {
        Pattern {
            id: id.into(),
            name: Name::new(name).unwrap(),
            primary_muscles: BTreeSet::new(),
            secondary_muscles: BTreeSet::new(),
        }
    }

    fn movement(
        id: u128,
        name: &str,
        pattern_id: u128,
        equipment: &[Equipment],
        mechanic: Mechanic,
    ) -> Movement {
        Movement {
            id: id.into(),
            name: Name::new(name).unwrap(),
            pattern_id: pattern_id.into(),
            equipment: equipment.iter().copied().collect(),
            mechanic,
        }
    }

    fn day_template(id: u128, name: &str, patterns: &[u128]) -> DayTemplate {
        DayTemplate {
            id: id.into(),
            name: Name::new(name).unwrap(),
            patterns: patterns.iter().map(|p| (*p).into()).collect(),
        }
    }

    fn preferences(days_per_week: u8, volume: Volume, equipment: &[Equipment]) -> Preferences {
        Preferences {
            days_per_week: DaysPerWeek::new(days_per_week).unwrap(),
            training_age: 1,
            volume,
            bodyweight_exercises: BodyweightPreference::Weighted,
            priority_muscles: BTreeSet::new(),
            equipment: equipment.iter().copied().collect(),
        }
    }

    // One movement per pattern, so day generation is fully deterministic.
    static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
        Catalog::new(
            vec![
                pattern(1, "Horizontal Push"),
                pattern(2, "Vertical Pull"),
                pattern(3, "Horizontal Pull"),
                pattern(4, "Rear Delt Isolation"),
                pattern(5, "Bicep Isolation"),
                pattern(6, "Squat"),
                pattern(7, "Hinge"),
                pattern(8, "Calf Isolation"),
            ],
            vec![
                movement(
                    101,
                    "Dumbbell Bench Press",
                    1,
                    &[Equipment::Dumbbell],
                    Mechanic::Compound,
                ),
                movement(102, "Chin Up", 2, &[Equipment::Barbell], Mechanic::Compound),
                movement(103, "T Bar Row", 3, &[Equipment::Barbell], Mechanic::Compound),
                movement(
                    104,
                    "Rear Delt Fly",
                    4,
                    &[Equipment::Dumbbell],
                    Mechanic::Isolation,
                ),
                movement(
                    105,
                    "Bicep Curl",
                    5,
                    &[Equipment::Dumbbell],
                    Mechanic::Isolation,
                ),
                movement(
                    106,
                    "Barbell Squat",
                    6,
                    &[Equipment::Barbell],
                    Mechanic::Compound,
                ),
                movement(
                    107,
                    "Barbell RDL",
                    7,
                    &[Equipment::Barbell],
                    Mechanic::Compound,
                ),
                movement(
                    108,
                    "Dumbbell Calf Raise",
                    8,
                    &[Equipment::Dumbbell],
                    Mechanic::Isolation,
                ),
            ],
            vec![
                day_template(201, "Push", &[1]),
                day_template(202, "Pull", &[2, 3, 4, 5]),
                day_template(203, "Legs", &[6, 7, 8]),
            ],
            vec![SplitTemplate {
                id: 301.into(),
                name: Name::new("1-Day Push").unwrap(),
                days_per_week: DaysPerWeek::new(1).unwrap(),
                days: vec![DayTemplateID::from(201)],
            }],
        )
    });

    fn gym_preferences(volume: Volume) -> Preferences {
        preferences(1, volume, &[Equipment::Dumbbell, Equipment::Barbell])
    }

    #[test]
    fn test_select_movement() {
        let selected = select_movement(
            &CATALOG,
            1.into(),
            &[Equipment::Dumbbell].into(),
            &BTreeSet::new(),
            &mut test_rng(),
        );

        assert_eq!(
            selected.map(|m| m.name.clone()),
            Some(Name::new("Dumbbell Bench Press").unwrap())
        );
    }

    #[rstest]
    #[case::wrong_equipment(1, &[Equipment::Machine], &[])]
    #[case::excluded(1, &[Equipment::Dumbbell], &[101])]
    #[case::unknown_pattern(99, &[Equipment::Dumbbell], &[])]
    fn test_select_movement_none(
        #[case] pattern_id: u128,
        #[case] equipment: &[Equipment],
        #[case] excluded: &[u128],
    ) {
        assert_eq!(
            select_movement(
                &CATALOG,
                pattern_id.into(),
                &equipment.iter().copied().collect(),
                &excluded.iter().map(|id| MovementID::from(*id)).collect(),
                &mut test_rng(),
            ),
            None
        );
    }

    #[test]
    fn test_select_movement_never_returns_excluded() {
        let catalog = Catalog::new(
            vec![pattern(1, "Bicep Isolation")],
            vec![
                movement(101, "Barbell Curl", 1, &[Equipment::Barbell], Mechanic::Isolation),
                movement(102, "Bayesian Curl", 1, &[Equipment::Cable], Mechanic::Isolation),
            ],
            vec![],
            vec![],
        );
        let available = [Equipment::Barbell, Equipment::Cable].into();
        let excluded = BTreeSet::from([MovementID::from(101)]);
        let mut rng = test_rng();

        for _ in 0..20 {
            let selected = select_movement(&catalog, 1.into(), &available, &excluded, &mut rng);
            assert_eq!(
                selected.map(|m| m.name.clone()),
                Some(Name::new("Bayesian Curl").unwrap())
            );
        }
    }

    #[rstest]
    #[case(Volume::Low, Mechanic::Compound, [Prescription::fixed(2, 4, 6), Prescription::fixed(2, 6, 8)])]
    #[case(Volume::Low, Mechanic::Isolation, [Prescription::fixed(2, 6, 8), Prescription::fixed(1, 8, 10)])]
    #[case(Volume::Moderate, Mechanic::Compound, [Prescription::fixed(3, 6, 10), Prescription::fixed(3, 8, 12)])]
    #[case(Volume::Moderate, Mechanic::Isolation, [Prescription::fixed(2, 8, 10), Prescription::fixed(3, 8, 12)])]
    #[case(Volume::High, Mechanic::Compound, [Prescription::fixed(4, 8, 12), Prescription::fixed(3, 10, 15)])]
    #[case(Volume::High, Mechanic::Isolation, [Prescription::fixed(3, 8, 12), Prescription::fixed(3, 10, 15)])]
    fn test_prescribe_stays_within_options(
        #[case] volume: Volume,
        #[case] mechanic: Mechanic,
        #[case] options: [Prescription; 2],
    ) {
        let mut rng = test_rng();

        for _ in 0..20 {
            let prescription = prescribe(mechanic, volume, &mut rng);
            assert!(
                options.contains(&prescription),
                "{volume:?}/{mechanic:?} produced {prescription:?}"
            );
        }
    }

    #[test]
    fn test_prescribe_is_deterministic_with_fixed_seed() {
        for volume in Volume::iter() {
            for mechanic in Mechanic::iter() {
                assert_eq!(
                    prescribe(*mechanic, *volume, &mut test_rng()),
                    prescribe(*mechanic, *volume, &mut test_rng()),
                );
            }
        }
    }

    #[test]
    fn test_generate_day_push() {
        let day_plan = generate_day(
            &CATALOG,
            CATALOG.day_template(201.into()).unwrap(),
            &gym_preferences(Volume::Moderate),
            &mut test_rng(),
        );

        assert_eq!(day_plan.len(), 1);
        assert_eq!(day_plan[0].name, Name::new("Dumbbell Bench Press").unwrap());
        assert!(!day_plan[0].skip);
    }

    #[test]
    fn test_generate_day_pull_in_pattern_order() {
        let day_plan = generate_day(
            &CATALOG,
            CATALOG.day_template(202.into()).unwrap(),
            &gym_preferences(Volume::Moderate),
            &mut test_rng(),
        );

        assert_eq!(
            day_plan.iter().map(|e| e.name.clone()).collect::<Vec<_>>(),
            [
                Name::new("Chin Up").unwrap(),
                Name::new("T Bar Row").unwrap(),
                Name::new("Rear Delt Fly").unwrap(),
                Name::new("Bicep Curl").unwrap(),
            ]
        );
        assert!(day_plan.iter().all(|e| !e.skip));
    }

    #[test]
    fn test_generate_day_prescriptions_match_mechanic() {
        let day_plan = generate_day(
            &CATALOG,
            CATALOG.day_template(203.into()).unwrap(),
            &gym_preferences(Volume::Moderate),
            &mut test_rng(),
        );

        for entry in &day_plan {
            let movement = CATALOG.movement(entry.movement_id).unwrap();
            let options = match movement.mechanic {
                Mechanic::Compound => [Prescription::fixed(3, 6, 10), Prescription::fixed(3, 8, 12)],
                Mechanic::Isolation => [Prescription::fixed(2, 8, 10), Prescription::fixed(3, 8, 12)],
            };
            assert!(options.contains(&Prescription {
                sets: entry.sets,
                reps: entry.reps
            }));
        }
    }

    #[test]
    fn test_generate_day_placeholder_for_unfillable_pattern() {
        let day_plan = generate_day(
            &CATALOG,
            CATALOG.day_template(201.into()).unwrap(),
            &preferences(1, Volume::Moderate, &[Equipment::Machine]),
            &mut test_rng(),
        );

        assert_eq!(day_plan, vec![PlannedExercise::placeholder()]);
        assert_eq!(day_plan[0].name, Name::new("No Suitable Exercises").unwrap());
        assert_eq!(day_plan[0].sets, Sets::default());
        assert_eq!(day_plan[0].reps, RepRange::default());
        assert!(day_plan[0].skip);
    }

    #[test]
    fn test_generate_day_one_entry_per_pattern() {
        // Only the cable movement is eligible, the other patterns fall back
        // to placeholders without shortening the day.
        let template = catalog::BUILTIN
            .split_for_days_per_week(DaysPerWeek::new(3).unwrap())
            .and_then(|split| catalog::BUILTIN.day_template(split.days[0]))
            .unwrap();
        let day_plan = generate_day(
            &catalog::BUILTIN,
            template,
            &preferences(3, Volume::Moderate, &[Equipment::Cable]),
            &mut test_rng(),
        );

        assert_eq!(day_plan.len(), template.patterns.len());
        assert_eq!(day_plan.iter().filter(|e| !e.skip).count(), 1);
        assert_eq!(
            day_plan.iter().filter(|e| e.skip).count(),
            template.patterns.len() - 1
        );
    }

    #[test]
    fn test_generate_day_excludes_duplicates_within_day() {
        // The same pattern three times with two candidates: two distinct
        // movements, then a placeholder once the pool is exhausted.
        let catalog = Catalog::new(
            vec![pattern(1, "Bicep Isolation")],
            vec![
                movement(101, "Barbell Curl", 1, &[Equipment::Barbell], Mechanic::Isolation),
                movement(102, "Bayesian Curl", 1, &[Equipment::Cable], Mechanic::Isolation),
            ],
            vec![day_template(201, "Arms", &[1, 1, 1])],
            vec![],
        );
        let day_plan = generate_day(
            &catalog,
            catalog.day_template(201.into()).unwrap(),
            &preferences(1, Volume::Low, &[Equipment::Barbell, Equipment::Cable]),
            &mut test_rng(),
        );

        assert_eq!(day_plan.len(), 3);
        assert!(!day_plan[0].skip);
        assert!(!day_plan[1].skip);
        assert_ne!(day_plan[0].movement_id, day_plan[1].movement_id);
        assert!(day_plan[2].skip);
    }

    #[test]
    fn test_generate_day_empty_template() {
        let day_plan = generate_day(
            &CATALOG,
            &day_template(299, "Rest", &[]),
            &gym_preferences(Volume::Moderate),
            &mut test_rng(),
        );

        assert_eq!(day_plan, vec![]);
    }

    #[test]
    fn test_generate_plan() {
        let plan = generate_plan(
            &CATALOG,
            &gym_preferences(Volume::Moderate),
            date(),
            &mut test_rng(),
        )
        .unwrap();

        assert!(plan.id.is_nil());
        assert_eq!(plan.name, Name::new("1-Day Push").unwrap());
        assert_eq!(plan.days_per_week, DaysPerWeek::new(1).unwrap());
        assert_eq!(plan.date, date());
        assert_eq!(plan.days.len(), 1);
        assert_eq!(plan.days[0].name, Name::new("Push").unwrap());
        assert_eq!(plan.days[0].exercises.len(), 1);
        assert_eq!(
            plan.days[0].exercises[0].name,
            Name::new("Dumbbell Bench Press").unwrap()
        );
    }

    #[test]
    fn test_generate_plan_day_order_matches_split() {
        let preferences = preferences(
            6,
            Volume::Moderate,
            &[
                Equipment::Barbell,
                Equipment::Bodyweight,
                Equipment::Cable,
                Equipment::Dumbbell,
                Equipment::Machine,
            ],
        );
        let plan = generate_plan(&catalog::BUILTIN, &preferences, date(), &mut test_rng()).unwrap();

        assert_eq!(plan.name, Name::new("PPLPPL").unwrap());
        assert_eq!(
            plan.days.iter().map(|d| d.name.clone()).collect::<Vec<_>>(),
            [
                Name::new("Push").unwrap(),
                Name::new("Pull").unwrap(),
                Name::new("Legs").unwrap(),
                Name::new("Push").unwrap(),
                Name::new("Pull").unwrap(),
                Name::new("Legs").unwrap(),
            ]
        );
        assert!(
            plan.days
                .iter()
                .flat_map(|d| &d.exercises)
                .all(|e| !e.skip)
        );
    }

    #[test]
    fn test_generate_plan_without_matching_split() {
        assert_eq!(
            generate_plan(
                &catalog::BUILTIN,
                &preferences(5, Volume::Moderate, &[Equipment::Barbell]),
                date(),
                &mut test_rng(),
            ),
            None
        );
    }

    #[test]
    fn test_generate_plan_is_deterministic_with_fixed_seed() {
        let preferences = preferences(
            3,
            Volume::High,
            &[Equipment::Barbell, Equipment::Cable, Equipment::Machine],
        );

        assert_eq!(
            generate_plan(
                &catalog::BUILTIN,
                &preferences,
                date(),
                &mut StdRng::seed_from_u64(7)
            ),
            generate_plan(
                &catalog::BUILTIN,
                &preferences,
                date(),
                &mut StdRng::seed_from_u64(7)
            ),
        );
    }
}
