pub mod api_utils;
pub mod components;
pub mod config;
pub mod form_modal;
pub mod format;
pub mod http;
pub mod icons;
pub mod list_screen;
pub mod list_utils;
pub mod modal;
pub mod notify;
