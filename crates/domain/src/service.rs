use chrono::Local;
use log::{debug, error};
use rand::Rng;

use crate::{
    Catalog, CatalogRepository, CatalogService, CreateError, DeleteError, Plan, PlanID,
    PlanRepository, PlanService, Preferences, PreferencesRepository, PreferencesService, ReadError,
    UpdateError, generation,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R>
where
    R: CatalogRepository + PreferencesRepository + PlanRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Generates a plan from the stored preferences without persisting it.
    ///
    /// `Ok(None)` means no split template matches the preferred number of
    /// training days per week.
    pub async fn generate_plan(&self, rng: &mut impl Rng) -> Result<Option<Plan>, ReadError> {
        let catalog = self.get_catalog().await?;
        let preferences = self.get_preferences().await?;
        let plan = generation::generate_plan(
            &catalog,
            &preferences,
            Local::now().date_naive(),
            rng,
        );

        if plan.is_none() {
            debug!(
                "no split template matches {} training days per week",
                preferences.days_per_week
            );
        }

        Ok(plan)
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: CatalogRepository> CatalogService for Service<R> {
    async fn get_catalog(&self) -> Result<Catalog, ReadError> {
        log_on_error!(self.repository.read_catalog(), ReadError, "get", "catalog")
    }
}

impl<R: PreferencesRepository> PreferencesService for Service<R> {
    async fn get_preferences(&self) -> Result<Preferences, ReadError> {
        log_on_error!(
            self.repository.read_preferences(),
            ReadError,
            "get",
            "preferences"
        )
    }

    async fn replace_preferences(
        &self,
        preferences: Preferences,
    ) -> Result<Preferences, UpdateError> {
        log_on_error!(
            self.repository.replace_preferences(preferences),
            UpdateError,
            "replace",
            "preferences"
        )
    }
}

impl<R: PlanRepository> PlanService for Service<R> {
    async fn get_plans(&self) -> Result<Vec<Plan>, ReadError> {
        log_on_error!(self.repository.read_plans(), ReadError, "get", "plans")
    }

    async fn save_plan(&self, plan: Plan) -> Result<Plan, CreateError> {
        log_on_error!(
            self.repository.create_plan(plan),
            CreateError,
            "save",
            "plan"
        )
    }

    async fn delete_plan(&self, id: PlanID) -> Result<PlanID, DeleteError> {
        log_on_error!(
            self.repository.delete_plan(id),
            DeleteError,
            "delete",
            "plan"
        )
    }
}
