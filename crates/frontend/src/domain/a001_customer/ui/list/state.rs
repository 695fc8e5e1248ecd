use contracts::domain::a001_customer::aggregate::{DEFAULT_SORT, FILTER_KEYS};
use contracts::domain::a001_customer::Customer;

use crate::shared::list_screen::ListScreen;

pub const ENTITY: &str = "khách hàng";

pub fn create_screen() -> ListScreen<Customer> {
    ListScreen::new(FILTER_KEYS, DEFAULT_SORT, ENTITY)
}
