//! Адрес REST API

use crate::shared::config::app_config;

/// Базовый адрес API
///
/// Берётся из `api.base_url`, иначе строится из текущего адреса страницы
/// и `api.port`: "http://localhost:3000" или "https://example.vn:3000".
/// Пустая строка, если window недоступен.
pub fn api_base() -> String {
    let api = &app_config().api;
    if let Some(base) = api.base_url.as_deref().filter(|b| !b.trim().is_empty()) {
        return base.trim().trim_end_matches('/').to_string();
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, api.port)
}

/// Путь ресурса: `/api/<resource>` или `/api/<resource>/<id>`
pub fn resource_path(resource: &str, id: Option<&str>) -> String {
    match id {
        Some(id) => format!("/api/{}/{}", resource, urlencoding::encode(id)),
        None => format!("/api/{}", resource),
    }
}

/// Полный URL для пути API
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_path() {
        assert_eq!(resource_path("customers", None), "/api/customers");
        assert_eq!(resource_path("deals", Some("d-1")), "/api/deals/d-1");
        assert_eq!(
            resource_path("salary-contracts", Some("a b/c")),
            "/api/salary-contracts/a%20b%2Fc"
        );
    }
}
