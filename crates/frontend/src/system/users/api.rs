use contracts::shared::api::ApiError;
use contracts::system::users::{User, UserForm};

use crate::shared::http::{RequestScope, Resource};

const RESOURCE: &str = "users";

fn users(scope: RequestScope) -> Resource {
    Resource::new(RESOURCE, scope)
}

/// Fetch all users
pub async fn fetch_users(scope: RequestScope) -> Result<Vec<User>, ApiError> {
    users(scope).list().await
}

pub async fn fetch_user(scope: RequestScope, id: String) -> Result<User, ApiError> {
    users(scope).get(&id).await
}

/// Пароль отправляется только если он задан
pub async fn create_user(scope: RequestScope, form: UserForm) -> Result<(), ApiError> {
    users(scope).create(&form).await
}

pub async fn update_user(scope: RequestScope, id: String, form: UserForm) -> Result<(), ApiError> {
    users(scope).update(&id, &form).await
}

pub async fn delete_user(scope: RequestScope, id: String) -> Result<(), ApiError> {
    users(scope).delete(&id).await
}
