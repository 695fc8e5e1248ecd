use contracts::domain::a003_service::{Service, ServiceForm};
use contracts::shared::api::ApiError;

use crate::shared::http::{RequestScope, Resource};

const RESOURCE: &str = "services";

fn services(scope: RequestScope) -> Resource {
    Resource::new(RESOURCE, scope)
}

pub async fn fetch_services(scope: RequestScope) -> Result<Vec<Service>, ApiError> {
    services(scope).list().await
}

pub async fn fetch_service(scope: RequestScope, id: String) -> Result<Service, ApiError> {
    services(scope).get(&id).await
}

pub async fn create_service(scope: RequestScope, form: ServiceForm) -> Result<(), ApiError> {
    services(scope).create(&form).await
}

pub async fn update_service(
    scope: RequestScope,
    id: String,
    form: ServiceForm,
) -> Result<(), ApiError> {
    services(scope).update(&id, &form).await
}

pub async fn delete_service(scope: RequestScope, id: String) -> Result<(), ApiError> {
    services(scope).delete(&id).await
}
