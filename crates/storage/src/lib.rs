#![warn(clippy::pedantic)]

use std::{collections::BTreeMap, sync::RwLock};

use uuid::Uuid;

use robur_domain::{
    Catalog, CatalogRepository, CreateError, DeleteError, Plan, PlanID, PlanRepository,
    Preferences, PreferencesRepository, ReadError, StorageError, UpdateError, catalog,
};

/// In-memory storage backing the domain's repository traits.
///
/// Reads hand out cloned snapshots, so a plan generation run observes a
/// consistent catalog even if the catalog is replaced concurrently.
pub struct InMemory {
    catalog: RwLock<Catalog>,
    preferences: RwLock<Option<Preferences>>,
    plans: RwLock<BTreeMap<PlanID, Plan>>,
}

impl InMemory {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: RwLock::new(catalog),
            preferences: RwLock::new(None),
            plans: RwLock::new(BTreeMap::new()),
        }
    }
}

impl Default for InMemory {
    fn default() -> Self {
        Self::new(catalog::BUILTIN.clone())
    }
}

fn poisoned() -> StorageError {
    StorageError::Other("poisoned lock".into())
}

impl CatalogRepository for InMemory {
    async fn read_catalog(&self) -> Result<Catalog, ReadError> {
        Ok(self.catalog.read().map_err(|_| poisoned())?.clone())
    }
}

impl PreferencesRepository for InMemory {
    async fn read_preferences(&self) -> Result<Preferences, ReadError> {
        self.preferences
            .read()
            .map_err(|_| poisoned())?
            .clone()
            .ok_or(ReadError::NotFound)
    }

    async fn replace_preferences(
        &self,
        preferences: Preferences,
    ) -> Result<Preferences, UpdateError> {
        *self.preferences.write().map_err(|_| poisoned())? = Some(preferences.clone());
        Ok(preferences)
    }
}

impl PlanRepository for InMemory {
    async fn read_plans(&self) -> Result<Vec<Plan>, ReadError> {
        Ok(self
            .plans
            .read()
            .map_err(|_| poisoned())?
            .values()
            .cloned()
            .collect())
    }

    async fn create_plan(&self, mut plan: Plan) -> Result<Plan, CreateError> {
        let mut plans = self.plans.write().map_err(|_| poisoned())?;

        if plan.id.is_nil() {
            plan.id = Uuid::new_v4().into();
        } else if plans.contains_key(&plan.id) {
            return Err(CreateError::Conflict);
        }

        plans.insert(plan.id, plan.clone());
        Ok(plan)
    }

    async fn delete_plan(&self, id: PlanID) -> Result<PlanID, DeleteError> {
        self.plans
            .write()
            .map_err(|_| poisoned())?
            .remove(&id)
            .map(|plan| plan.id)
            .ok_or(DeleteError::NotFound)
    }
}
