//! Конфигурация клиента.
//!
//! Встроенный TOML по умолчанию + необязательное переопределение из
//! `localStorage["admin_dashboard_config"]` (тоже TOML, любые секции и ключи).
//! Отсутствующие ключи берутся из встроенной конфигурации.

use once_cell::sync::Lazy;
use serde::Deserialize;

/// Ключ localStorage с переопределением конфигурации
pub const CONFIG_STORAGE_KEY: &str = "admin_dashboard_config";

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
port = 3000
request_timeout_ms = 15000

[lists]
default_page_size = 10
page_size_options = [5, 10, 20, 50]
page_window = 5
search_debounce_ms = 300

[notifications]
dismiss_after_ms = 4000
max_visible = 5
"#;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub lists: ListConfig,
    pub notifications: NotificationConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiConfig {
    /// Явный адрес API; иначе текущий хост + `port`
    #[serde(default)]
    pub base_url: Option<String>,
    pub port: u16,
    pub request_timeout_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListConfig {
    pub default_page_size: usize,
    pub page_size_options: Vec<usize>,
    /// Количество номеров страниц в окне пагинации
    pub page_window: usize,
    pub search_debounce_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NotificationConfig {
    pub dismiss_after_ms: u32,
    pub max_visible: usize,
}

static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    let override_toml = read_override();
    match load_config(override_toml.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid config override, using defaults: {}", e);
            load_config(None).unwrap_or_default()
        }
    }
});

/// Конфигурация приложения (загружается один раз)
pub fn app_config() -> &'static AppConfig {
    &CONFIG
}

/// Объединяет встроенную конфигурацию с переопределением
pub fn load_config(override_toml: Option<&str>) -> Result<AppConfig, toml::de::Error> {
    let mut merged: toml::Table = toml::from_str(DEFAULT_CONFIG)?;
    if let Some(text) = override_toml.filter(|t| !t.trim().is_empty()) {
        let overrides: toml::Table = toml::from_str(text)?;
        merge_tables(&mut merged, overrides);
    }
    let config: AppConfig = toml::Value::Table(merged).try_into()?;
    Ok(config.normalized())
}

fn merge_tables(base: &mut toml::Table, overrides: toml::Table) {
    for (key, value) in overrides {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(base_section)), toml::Value::Table(section)) => {
                merge_tables(base_section, section);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

fn read_override() -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()
        .flatten()?
        .get_item(CONFIG_STORAGE_KEY)
        .ok()
        .flatten()
}

/// Те же значения, что и в `DEFAULT_CONFIG`
impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: None,
                port: 3000,
                request_timeout_ms: 15000,
            },
            lists: ListConfig {
                default_page_size: 10,
                page_size_options: vec![5, 10, 20, 50],
                page_window: 5,
                search_debounce_ms: 300,
            },
            notifications: NotificationConfig {
                dismiss_after_ms: 4000,
                max_visible: 5,
            },
        }
    }
}

impl AppConfig {
    /// Исправляет значения, при которых списки перестают работать
    fn normalized(mut self) -> Self {
        let lists = &mut self.lists;
        if lists.default_page_size == 0 {
            lists.default_page_size = 10;
        }
        lists.page_size_options.retain(|&size| size > 0);
        if !lists.page_size_options.contains(&lists.default_page_size) {
            lists.page_size_options.push(lists.default_page_size);
        }
        lists.page_size_options.sort_unstable();
        lists.page_size_options.dedup();
        lists.page_window = lists.page_window.max(1);

        self.notifications.max_visible = self.notifications.max_visible.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config(None).unwrap();
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.api.base_url, None);
        assert_eq!(config.lists.default_page_size, 10);
        assert_eq!(config.lists.page_size_options, vec![5, 10, 20, 50]);
        assert_eq!(config.lists.page_window, 5);
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_override_merges_per_key() {
        let config = load_config(Some(
            r#"
            [api]
            base_url = "https://api.example.vn"

            [lists]
            default_page_size = 25
            "#,
        ))
        .unwrap();
        assert_eq!(config.api.base_url.as_deref(), Some("https://api.example.vn"));
        assert_eq!(config.api.request_timeout_ms, 15000);
        assert_eq!(config.lists.default_page_size, 25);
        assert_eq!(config.lists.page_size_options, vec![5, 10, 20, 25, 50]);
    }

    #[test]
    fn test_invalid_values_are_normalized() {
        let config = load_config(Some(
            r#"
            [lists]
            default_page_size = 0
            page_size_options = [0, 20, 20]
            page_window = 0
            "#,
        ))
        .unwrap();
        assert_eq!(config.lists.default_page_size, 10);
        assert_eq!(config.lists.page_size_options, vec![10, 20]);
        assert_eq!(config.lists.page_window, 1);
    }

    #[test]
    fn test_broken_override_is_an_error() {
        assert!(load_config(Some("[lists\n")).is_err());
        assert!(load_config(Some("[api]\nport = \"abc\"")).is_err());
        assert!(load_config(Some("   ")).is_ok());
    }
}
