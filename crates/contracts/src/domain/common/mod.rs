//! Общие помощники для записей всех справочников

/// Варианты фильтра статуса активности (`value`, `label`)
pub const STATUS_OPTIONS: &[(&str, &str)] = &[("active", "Đang hoạt động"), ("inactive", "Ngừng hoạt động")];

/// Пустая (после trim) строка превращается в `None`
pub fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn status_label(is_active: bool) -> &'static str {
    if is_active {
        STATUS_OPTIONS[0].1
    } else {
        STATUS_OPTIONS[1].1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("  "), None);
        assert_eq!(non_empty(" An "), Some("An".to_string()));
    }

    #[test]
    fn test_status_label() {
        assert_eq!(status_label(true), "Đang hoạt động");
        assert_eq!(status_label(false), "Ngừng hoạt động");
    }
}
