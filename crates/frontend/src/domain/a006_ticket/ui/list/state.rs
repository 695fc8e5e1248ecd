use leptos::prelude::Update;
use contracts::domain::a006_ticket::aggregate::{DEFAULT_SORT, FILTER_KEYS};
use contracts::domain::a006_ticket::Ticket;

use crate::shared::list_screen::ListScreen;

pub const ENTITY: &str = "phiếu hỗ trợ";

/// Новые обращения сверху
pub fn create_screen() -> ListScreen<Ticket> {
    let screen = ListScreen::new(FILTER_KEYS, DEFAULT_SORT, ENTITY);
    screen.view_state.update(|s| s.toggle_sort(DEFAULT_SORT));
    screen
}
