use contracts::domain::a004_salary_contract::aggregate::{DEFAULT_SORT, FILTER_KEYS};
use contracts::domain::a004_salary_contract::SalaryContract;

use crate::shared::list_screen::ListScreen;

pub const ENTITY: &str = "hợp đồng lương";

pub fn create_screen() -> ListScreen<SalaryContract> {
    ListScreen::new(FILTER_KEYS, DEFAULT_SORT, ENTITY)
}
