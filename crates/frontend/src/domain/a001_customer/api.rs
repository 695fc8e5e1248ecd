use contracts::domain::a001_customer::{Customer, CustomerForm};
use contracts::shared::api::ApiError;

use crate::shared::http::{RequestScope, Resource};

const RESOURCE: &str = "customers";

fn customers(scope: RequestScope) -> Resource {
    Resource::new(RESOURCE, scope)
}

/// Fetch all customers
pub async fn fetch_customers(scope: RequestScope) -> Result<Vec<Customer>, ApiError> {
    customers(scope).list().await
}

pub async fn fetch_customer(scope: RequestScope, id: String) -> Result<Customer, ApiError> {
    customers(scope).get(&id).await
}

pub async fn create_customer(scope: RequestScope, form: CustomerForm) -> Result<(), ApiError> {
    customers(scope).create(&form).await
}

pub async fn update_customer(
    scope: RequestScope,
    id: String,
    form: CustomerForm,
) -> Result<(), ApiError> {
    customers(scope).update(&id, &form).await
}

pub async fn delete_customer(scope: RequestScope, id: String) -> Result<(), ApiError> {
    customers(scope).delete(&id).await
}
