use contracts::domain::a002_addon::{Addon, AddonForm};
use contracts::shared::api::ApiError;

use crate::shared::http::{RequestScope, Resource};

const RESOURCE: &str = "addons";

fn addons(scope: RequestScope) -> Resource {
    Resource::new(RESOURCE, scope)
}

pub async fn fetch_addons(scope: RequestScope) -> Result<Vec<Addon>, ApiError> {
    addons(scope).list().await
}

pub async fn fetch_addon(scope: RequestScope, id: String) -> Result<Addon, ApiError> {
    addons(scope).get(&id).await
}

pub async fn create_addon(scope: RequestScope, form: AddonForm) -> Result<(), ApiError> {
    addons(scope).create(&form).await
}

pub async fn update_addon(scope: RequestScope, id: String, form: AddonForm) -> Result<(), ApiError> {
    addons(scope).update(&id, &form).await
}

pub async fn delete_addon(scope: RequestScope, id: String) -> Result<(), ApiError> {
    addons(scope).delete(&id).await
}
