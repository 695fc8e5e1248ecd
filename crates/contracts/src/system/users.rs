use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::common::non_empty;
use crate::enums::UserRole;
use crate::shared::list::{compare_text, FieldValue, Record, Searchable, Sortable};
use crate::shared::validation::{self, Validate, ValidationErrors};

pub const FILTER_KEYS: &[&str] = &["role", "status"];
pub const DEFAULT_SORT: &str = "username";

const MIN_USERNAME_LEN: usize = 3;
const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub last_login_at: Option<String>,
}

impl Record for User {
    fn record_id(&self) -> &str {
        &self.id
    }
}

impl Searchable for User {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.username.as_str()),
            self.full_name.as_deref(),
            self.email.as_deref(),
        ]
    }

    fn filter_value(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "role" => Some(FieldValue::Text(self.role.code())),
            "status" => Some(FieldValue::Bool(self.is_active)),
            _ => None,
        }
    }
}

impl Sortable for User {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "username" => compare_text(Some(&self.username), Some(&other.username)),
            "full_name" => compare_text(self.full_name.as_deref(), other.full_name.as_deref()),
            "email" => compare_text(self.email.as_deref(), other.email.as_deref()),
            "role" => self.role.rank().cmp(&other.role.rank()),
            "is_active" => self.is_active.cmp(&other.is_active),
            "created_at" => self.created_at.cmp(&other.created_at),
            "last_login_at" => compare_text(
                self.last_login_at.as_deref(),
                other.last_login_at.as_deref(),
            ),
            _ => self.username.cmp(&other.username),
        }
    }
}

/// Форма пользователя. Пароль обязателен только при создании.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserForm {
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub role: UserRole,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip)]
    pub require_password: bool,
}

impl UserForm {
    pub fn for_create() -> Self {
        Self {
            username: String::new(),
            email: None,
            full_name: None,
            role: UserRole::default(),
            is_active: true,
            password: None,
            require_password: true,
        }
    }

    pub fn normalized(&self) -> Self {
        Self {
            username: self.username.trim().to_string(),
            email: self.email.as_deref().and_then(non_empty),
            full_name: self.full_name.as_deref().and_then(non_empty),
            password: self.password.clone().filter(|p| !p.is_empty()),
            ..self.clone()
        }
    }
}

impl From<&User> for UserForm {
    fn from(u: &User) -> Self {
        Self {
            username: u.username.clone(),
            email: u.email.clone(),
            full_name: u.full_name.clone(),
            role: u.role.clone(),
            is_active: u.is_active,
            password: None,
            require_password: false,
        }
    }
}

impl Validate for UserForm {
    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        validation::required(&mut errors, "username", &self.username);
        validation::min_length(&mut errors, "username", &self.username, MIN_USERNAME_LEN);
        validation::email(&mut errors, "email", self.email.as_deref().unwrap_or(""));

        let password = self.password.as_deref().unwrap_or("");
        if self.require_password {
            validation::required(&mut errors, "password", password);
        }
        validation::min_length(&mut errors, "password", password, MIN_PASSWORD_LEN);
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_required_on_create_only() {
        let form = UserForm {
            username: "thanh".into(),
            ..UserForm::for_create()
        };
        assert_eq!(
            form.validate().get("password"),
            Some("Trường này là bắt buộc")
        );

        let user = User {
            id: "u-1".into(),
            username: "thanh".into(),
            email: Some("thanh@example.vn".into()),
            full_name: None,
            role: UserRole::Manager,
            is_active: true,
            created_at: "2024-01-01T00:00:00Z".into(),
            last_login_at: None,
        };
        assert!(UserForm::from(&user).validate().is_empty());
    }

    #[test]
    fn test_short_values() {
        let form = UserForm {
            username: "ab".into(),
            password: Some("123".into()),
            ..UserForm::for_create()
        };
        let errors = form.validate();
        assert!(errors.get("username").is_some());
        assert!(errors.get("password").is_some());
    }

    #[test]
    fn test_password_not_serialized_when_empty() {
        let mut form = UserForm::for_create();
        form.username = "thanh".into();
        form.password = Some(String::new());
        let json = serde_json::to_value(form.normalized()).unwrap();
        assert!(json.get("password").is_none());
        assert!(json.get("require_password").is_none());
        assert_eq!(json["role"], "staff");
    }
}
