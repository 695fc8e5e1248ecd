use contracts::domain::a005_deal::aggregate::{DEFAULT_SORT, FILTER_KEYS};
use contracts::domain::a005_deal::Deal;

use crate::shared::list_screen::ListScreen;

pub const ENTITY: &str = "giao dịch";

pub fn create_screen() -> ListScreen<Deal> {
    ListScreen::new(FILTER_KEYS, DEFAULT_SORT, ENTITY)
}
