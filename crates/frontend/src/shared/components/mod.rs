pub mod filter_panel;
pub mod list_page;
pub mod page_header;
pub mod pagination_controls;
pub mod status_badge;
pub mod table;
pub mod ui;
