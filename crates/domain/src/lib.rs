#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
pub mod generation;

mod error;
mod exercise;
mod name;
mod plan;
mod preferences;
mod service;
mod template;

pub use catalog::{Catalog, CatalogRepository, CatalogService};
pub use error::{CreateError, DeleteError, ReadError, StorageError, UpdateError};
pub use exercise::{
    Equipment, Mechanic, Movement, MovementID, MuscleID, Pattern, PatternID, Property,
};
pub use name::{Name, NameError};
pub use plan::{
    Plan, PlanDay, PlanID, PlanRepository, PlanService, PlannedExercise, Prescription, RepRange,
    Reps, RepsError, Sets, SetsError,
};
pub use preferences::{
    BodyweightPreference, Preferences, PreferencesRepository, PreferencesService, Volume,
};
pub use service::Service;
pub use template::{
    DayTemplate, DayTemplateID, DaysPerWeek, DaysPerWeekError, SplitID, SplitTemplate,
};
