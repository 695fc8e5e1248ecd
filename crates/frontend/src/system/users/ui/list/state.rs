use contracts::system::users::{User, DEFAULT_SORT, FILTER_KEYS};

use crate::shared::list_screen::ListScreen;

pub const ENTITY: &str = "người dùng";

pub fn create_screen() -> ListScreen<User> {
    ListScreen::new(FILTER_KEYS, DEFAULT_SORT, ENTITY)
}
