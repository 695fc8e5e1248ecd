use contracts::domain::a005_deal::{Deal, DealForm};
use contracts::shared::api::ApiError;

use crate::shared::http::{RequestScope, Resource};

const RESOURCE: &str = "deals";

fn deals(scope: RequestScope) -> Resource {
    Resource::new(RESOURCE, scope)
}

pub async fn fetch_deals(scope: RequestScope) -> Result<Vec<Deal>, ApiError> {
    deals(scope).list().await
}

pub async fn fetch_deal(scope: RequestScope, id: String) -> Result<Deal, ApiError> {
    deals(scope).get(&id).await
}

pub async fn create_deal(scope: RequestScope, form: DealForm) -> Result<(), ApiError> {
    deals(scope).create(&form).await
}

pub async fn update_deal(scope: RequestScope, id: String, form: DealForm) -> Result<(), ApiError> {
    deals(scope).update(&id, &form).await
}

pub async fn delete_deal(scope: RequestScope, id: String) -> Result<(), ApiError> {
    deals(scope).delete(&id).await
}
