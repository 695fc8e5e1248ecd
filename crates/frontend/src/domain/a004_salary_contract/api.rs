use contracts::domain::a004_salary_contract::{SalaryContract, SalaryContractForm};
use contracts::shared::api::ApiError;

use crate::shared::http::{RequestScope, Resource};

const RESOURCE: &str = "salary-contracts";

fn salary_contracts(scope: RequestScope) -> Resource {
    Resource::new(RESOURCE, scope)
}

/// Fetch all salary contracts
pub async fn fetch_contracts(scope: RequestScope) -> Result<Vec<SalaryContract>, ApiError> {
    salary_contracts(scope).list().await
}

pub async fn fetch_contract(scope: RequestScope, id: String) -> Result<SalaryContract, ApiError> {
    salary_contracts(scope).get(&id).await
}

pub async fn create_contract(
    scope: RequestScope,
    form: SalaryContractForm,
) -> Result<(), ApiError> {
    salary_contracts(scope).create(&form).await
}

pub async fn update_contract(
    scope: RequestScope,
    id: String,
    form: SalaryContractForm,
) -> Result<(), ApiError> {
    salary_contracts(scope).update(&id, &form).await
}

pub async fn delete_contract(scope: RequestScope, id: String) -> Result<(), ApiError> {
    salary_contracts(scope).delete(&id).await
}
