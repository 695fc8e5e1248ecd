use contracts::domain::a003_service::aggregate::{DEFAULT_SORT, FILTER_KEYS};
use contracts::domain::a003_service::Service;

use crate::shared::list_screen::ListScreen;

pub const ENTITY: &str = "dịch vụ";

pub fn create_screen() -> ListScreen<Service> {
    ListScreen::new(FILTER_KEYS, DEFAULT_SORT, ENTITY)
}
