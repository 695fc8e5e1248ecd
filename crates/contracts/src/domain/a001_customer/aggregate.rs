use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::common::non_empty;
use crate::enums::CustomerType;
use crate::shared::list::{compare_text, FieldValue, Record, Searchable, Sortable};
use crate::shared::validation::{self, Validate, ValidationErrors};

/// Именованные фильтры экрана клиентов
pub const FILTER_KEYS: &[&str] = &["type", "status"];
pub const DEFAULT_SORT: &str = "name";

// ============================================================================
// Record
// ============================================================================

/// Клиент (Customer)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub customer_type: CustomerType,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: String,
}

impl Record for Customer {
    fn record_id(&self) -> &str {
        &self.id
    }
}

impl Searchable for Customer {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.name.as_str()),
            self.email.as_deref(),
            self.phone.as_deref(),
        ]
    }

    fn filter_value(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "type" => Some(FieldValue::Text(self.customer_type.code())),
            "status" => Some(FieldValue::Bool(self.is_active)),
            _ => None,
        }
    }
}

impl Sortable for Customer {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => compare_text(Some(&self.name), Some(&other.name)),
            "email" => compare_text(self.email.as_deref(), other.email.as_deref()),
            "phone" => compare_text(self.phone.as_deref(), other.phone.as_deref()),
            "type" => self.customer_type.label().cmp(other.customer_type.label()),
            "status" => self.is_active.cmp(&other.is_active),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => Ordering::Equal,
        }
    }
}

// ============================================================================
// Form payload (create + update)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerForm {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub customer_type: CustomerType,
    pub is_active: bool,
}

impl Default for CustomerForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: None,
            phone: None,
            address: None,
            customer_type: CustomerType::default(),
            is_active: true,
        }
    }
}

impl From<&Customer> for CustomerForm {
    fn from(c: &Customer) -> Self {
        Self {
            name: c.name.clone(),
            email: c.email.clone(),
            phone: c.phone.clone(),
            address: c.address.clone(),
            customer_type: c.customer_type.clone(),
            is_active: c.is_active,
        }
    }
}

impl CustomerForm {
    /// Приводит необязательные поля: пустые строки -> `None`, trim имени
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.as_deref().and_then(non_empty),
            phone: self.phone.as_deref().and_then(non_empty),
            address: self.address.as_deref().and_then(non_empty),
            ..self.clone()
        }
    }
}

impl Validate for CustomerForm {
    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        validation::required(&mut errors, "name", &self.name);
        validation::email(&mut errors, "email", self.email.as_deref().unwrap_or(""));
        validation::phone(&mut errors, "phone", self.phone.as_deref().unwrap_or(""));
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::{matches, FilterState};

    #[test]
    fn test_missing_fields_deserialize() {
        let c: Customer = serde_json::from_str(r#"{"id":"c-1"}"#).unwrap();
        assert_eq!(c.name, "");
        assert_eq!(c.customer_type, CustomerType::Individual);

        let mut state = FilterState::default();
        state.set_search_term("x");
        assert!(!matches(&c, &state));
    }

    #[test]
    fn test_unknown_type_code_does_not_break_list() {
        let json = r#"[
            {"id":"c-1","name":"An","customer_type":"individual"},
            {"id":"c-2","name":"Bình","customer_type":"vip"}
        ]"#;
        let customers: Vec<Customer> = serde_json::from_str(json).unwrap();
        assert_eq!(customers.len(), 2);
        assert_eq!(customers[1].customer_type, CustomerType::Unknown("vip".into()));
        assert_eq!(customers[1].customer_type.label(), "vip");

        let mut state = FilterState::with_filters(FILTER_KEYS);
        assert!(matches(&customers[1], &state));
        state.set_filter("type", "individual");
        assert!(!matches(&customers[1], &state));
        state.set_filter("type", "business");
        assert!(!matches(&customers[1], &state));

        let form = CustomerForm::from(&customers[1]);
        let sent = serde_json::to_value(&form).unwrap();
        assert_eq!(sent["customer_type"], "vip");
    }

    #[test]
    fn test_search_by_phone() {
        let c = Customer {
            id: "c-1".into(),
            name: "Nguyễn Văn An".into(),
            email: None,
            phone: Some("0901234567".into()),
            address: None,
            customer_type: CustomerType::Business,
            is_active: true,
            created_at: "2024-01-01T00:00:00Z".into(),
        };
        let mut state = FilterState::with_filters(FILTER_KEYS);
        state.set_search_term("0901");
        assert!(matches(&c, &state));
        state.set_search_term("văn an");
        assert!(matches(&c, &state));
        state.set_filter("type", "individual");
        assert!(!matches(&c, &state));
    }

    #[test]
    fn test_validation() {
        let form = CustomerForm {
            email: Some("bad".into()),
            ..CustomerForm::default()
        };
        let errors = form.validate();
        assert!(errors.get("name").is_some());
        assert!(errors.get("email").is_some());
        assert!(errors.get("phone").is_none());
    }

    #[test]
    fn test_normalized() {
        let form = CustomerForm {
            name: "  An  ".into(),
            email: Some("   ".into()),
            ..CustomerForm::default()
        }
        .normalized();
        assert_eq!(form.name, "An");
        assert_eq!(form.email, None);
        assert!(form.is_active);
    }
}
