//! Клиентская валидация форм.
//!
//! Ошибки копятся списком `(поле, сообщение)`, чтобы форма могла показать
//! сообщение под каждым полем. Сообщения на вьетнамском.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Первое сообщение для поля
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn first(&self) -> Option<&FieldError> {
        self.errors.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Форма, которая умеет проверить себя без обращения к сети
pub trait Validate {
    fn validate(&self) -> ValidationErrors;
}

pub fn required(errors: &mut ValidationErrors, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.add(field, "Trường này là bắt buộc");
    }
}

pub fn min_length(errors: &mut ValidationErrors, field: &str, value: &str, min: usize) {
    let len = value.trim().chars().count();
    if len > 0 && len < min {
        errors.add(field, format!("Cần ít nhất {} ký tự", min));
    }
}

/// Пустое значение допустимо; непустое должно выглядеть как `local@domain.tld`
pub fn email(errors: &mut ValidationErrors, field: &str, value: &str) {
    let value = value.trim();
    if value.is_empty() {
        return;
    }
    if !is_email(value) {
        errors.add(field, "Email không hợp lệ");
    }
}

fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !host.starts_with('.') && tld.len() >= 2,
        None => false,
    }
}

/// 9–15 цифр, допускается ведущий `+`; пробелы, точки и дефисы игнорируются
pub fn phone(errors: &mut ValidationErrors, field: &str, value: &str) {
    let value = value.trim();
    if value.is_empty() {
        return;
    }
    let digits = value.strip_prefix('+').unwrap_or(value);
    let mut count = 0;
    for ch in digits.chars() {
        match ch {
            '0'..='9' => count += 1,
            ' ' | '.' | '-' => {}
            _ => {
                errors.add(field, "Số điện thoại không hợp lệ");
                return;
            }
        }
    }
    if !(9..=15).contains(&count) {
        errors.add(field, "Số điện thoại không hợp lệ");
    }
}

pub fn positive_amount(errors: &mut ValidationErrors, field: &str, value: i64) {
    if value <= 0 {
        errors.add(field, "Giá trị phải lớn hơn 0");
    }
}

pub fn non_negative_amount(errors: &mut ValidationErrors, field: &str, value: i64) {
    if value < 0 {
        errors.add(field, "Giá trị không được âm");
    }
}

/// Значение должно входить в список допустимых
pub fn one_of(errors: &mut ValidationErrors, field: &str, value: &str, allowed: &[&str]) {
    if !allowed.contains(&value) {
        errors.add(field, "Giá trị không hợp lệ");
    }
}

/// Разбирает `YYYY-MM-DD` (или начало ISO datetime)
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.trim().split('T').next().unwrap_or("");
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// `end >= start`, если обе даты заданы; непустая неразборчивая дата считается ошибкой
pub fn date_order(errors: &mut ValidationErrors, field: &str, start: &str, end: Option<&str>) {
    let Some(end) = end.map(str::trim).filter(|e| !e.is_empty()) else {
        return;
    };
    let Some(end_date) = parse_date(end) else {
        errors.add(field, "Ngày không hợp lệ");
        return;
    };
    if let Some(start_date) = parse_date(start) {
        if end_date < start_date {
            errors.add(field, "Ngày kết thúc phải sau ngày bắt đầu");
        }
    }
}

/// Обязательная дата в формате ISO
pub fn required_date(errors: &mut ValidationErrors, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.add(field, "Trường này là bắt buộc");
    } else if parse_date(value).is_none() {
        errors.add(field, "Ngày không hợp lệ");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        let mut errors = ValidationErrors::new();
        required(&mut errors, "name", "  ");
        required(&mut errors, "code", "A1");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("name"), Some("Trường này là bắt buộc"));
        assert_eq!(errors.get("code"), None);
    }

    #[test]
    fn test_email() {
        let cases = [
            ("", true),
            ("an@example.vn", true),
            ("an.nguyen@mail.example.com", true),
            ("an@", false),
            ("@example.vn", false),
            ("an@example", false),
            ("an@@example.vn", false),
            ("an @example.vn", false),
            ("an@.vn", false),
        ];
        for (value, ok) in cases {
            let mut errors = ValidationErrors::new();
            email(&mut errors, "email", value);
            assert_eq!(errors.is_empty(), ok, "email {value:?}");
        }
    }

    #[test]
    fn test_phone() {
        let cases = [
            ("", true),
            ("0901234567", true),
            ("+84 90 123 4567", true),
            ("090-123-4567", true),
            ("12345", false),
            ("09012345ab", false),
        ];
        for (value, ok) in cases {
            let mut errors = ValidationErrors::new();
            phone(&mut errors, "phone", value);
            assert_eq!(errors.is_empty(), ok, "phone {value:?}");
        }
    }

    #[test]
    fn test_amounts() {
        let mut errors = ValidationErrors::new();
        positive_amount(&mut errors, "price", 0);
        non_negative_amount(&mut errors, "allowance", 0);
        non_negative_amount(&mut errors, "discount", -1);
        assert_eq!(errors.len(), 2);
        assert!(errors.get("allowance").is_none());
    }

    #[test]
    fn test_date_order() {
        let mut errors = ValidationErrors::new();
        date_order(&mut errors, "end_date", "2024-05-01", Some("2024-04-30"));
        assert_eq!(errors.get("end_date"), Some("Ngày kết thúc phải sau ngày bắt đầu"));

        let mut errors = ValidationErrors::new();
        date_order(&mut errors, "end_date", "2024-05-01", Some("2024-05-01"));
        date_order(&mut errors, "end_date", "2024-05-01", None);
        date_order(&mut errors, "end_date", "2024-05-01", Some(""));
        assert!(errors.is_empty());

        let mut errors = ValidationErrors::new();
        date_order(&mut errors, "end_date", "2024-05-01", Some("01/06/2024"));
        assert_eq!(errors.get("end_date"), Some("Ngày không hợp lệ"));
    }

    #[test]
    fn test_into_result() {
        assert!(ValidationErrors::new().into_result().is_ok());
        let mut errors = ValidationErrors::new();
        errors.add("x", "bad");
        let err = errors.into_result().unwrap_err();
        assert_eq!(err.first().map(|e| e.field.as_str()), Some("x"));
    }
}
