//! Форматирование для вьетнамской локали (vi-VN)
//!
//! Разделитель тысяч: точка. Валюта: донг (`₫`) после суммы.
//! Даты: `dd/mm/yyyy`. Нераспознанные даты возвращаются как есть.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const THOUSANDS_SEPARATOR: char = '.';
const CURRENCY_SYMBOL: &str = "₫";

/// Целое число с разделителем тысяч: `1234567` -> `1.234.567`
pub fn format_number(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push(c);
    }

    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Сумма в донгах: `1234567` -> `1.234.567 ₫`
pub fn format_vnd(amount: i64) -> String {
    format!("{} {}", format_number(amount), CURRENCY_SYMBOL)
}

/// ISO дата или дата-время -> `dd/mm/yyyy`
pub fn format_date(iso: &str) -> String {
    let trimmed = iso.trim();
    if let Some(datetime) = parse_datetime(trimmed) {
        return datetime.format("%d/%m/%Y").to_string();
    }
    let date_part = trimmed.split('T').next().unwrap_or(trimmed);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => iso.to_string(),
    }
}

/// ISO дата-время -> `dd/mm/yyyy HH:MM`. Чистая дата форматируется без времени.
pub fn format_datetime(iso: &str) -> String {
    match parse_datetime(iso.trim()) {
        Some(datetime) => datetime.format("%d/%m/%Y %H:%M").to_string(),
        None => format_date(iso),
    }
}

/// Разбор суммы из поля ввода: разделители тысяч и `₫` игнорируются,
/// пустая строка даёт 0, мусор даёт `None`
pub fn parse_amount(input: &str) -> Option<i64> {
    let cleaned: String = input
        .chars()
        .filter(|c| !matches!(c, '.' | ',' | ' ' | '₫'))
        .collect();
    if cleaned.is_empty() {
        return Some(0);
    }
    cleaned.parse().ok()
}

/// Значение для `<input type="date">`: дата без времени
pub fn date_input_value(iso: &str) -> String {
    let trimmed = iso.trim();
    trimmed.split('T').next().unwrap_or(trimmed).to_string()
}

/// Пустое значение в таблице
pub fn or_dash(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "—".to_string(),
    }
}

/// Время показывается так, как его прислал сервер (без перевода в локальную зону)
fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.naive_local());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1.000");
        assert_eq!(format_number(1234567), "1.234.567");
        assert_eq!(format_number(-1234567), "-1.234.567");
        assert_eq!(format_number(i64::MIN), "-9.223.372.036.854.775.808");
    }

    #[test]
    fn test_format_vnd() {
        assert_eq!(format_vnd(1234567), "1.234.567 ₫");
        assert_eq!(format_vnd(500), "500 ₫");
        assert_eq!(format_vnd(-25000), "-25.000 ₫");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T23:30:00+07:00"), "15/03/2024");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "15/03/2024 14:02");
        assert_eq!(format_datetime("2024-12-31T23:59:59"), "31/12/2024 23:59");
        assert_eq!(format_datetime("2024-12-31"), "31/12/2024");
    }

    #[test]
    fn test_unparseable_input_is_unchanged() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_datetime("15.03.2024"), "15.03.2024");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1.234.567"), Some(1234567));
        assert_eq!(parse_amount("15 000 000 ₫"), Some(15000000));
        assert_eq!(parse_amount(""), Some(0));
        assert_eq!(parse_amount("-500"), Some(-500));
        assert_eq!(parse_amount("12a"), None);
    }

    #[test]
    fn test_date_input_value() {
        assert_eq!(date_input_value("2024-03-15T00:00:00Z"), "2024-03-15");
        assert_eq!(date_input_value("2024-03-15"), "2024-03-15");
        assert_eq!(date_input_value(""), "");
    }

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(None), "—");
        assert_eq!(or_dash(Some("  ")), "—");
        assert_eq!(or_dash(Some("Hà Nội")), "Hà Nội");
    }
}
