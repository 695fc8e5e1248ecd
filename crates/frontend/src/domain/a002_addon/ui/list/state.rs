use contracts::domain::a002_addon::aggregate::{DEFAULT_SORT, FILTER_KEYS};
use contracts::domain::a002_addon::Addon;

use crate::shared::list_screen::ListScreen;

pub const ENTITY: &str = "tiện ích";

pub fn create_screen() -> ListScreen<Addon> {
    ListScreen::new(FILTER_KEYS, DEFAULT_SORT, ENTITY)
}
