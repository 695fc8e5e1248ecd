use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::common::non_empty;
use crate::enums::AddonType;
use crate::shared::list::{compare_text, FieldValue, Record, Searchable, Sortable};
use crate::shared::validation::{self, Validate, ValidationErrors};

pub const FILTER_KEYS: &[&str] = &["type", "status"];
pub const DEFAULT_SORT: &str = "name";

/// Дополнение (Addon) к тарифу, цена в VND
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Addon {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub addon_type: AddonType,
    #[serde(default)]
    pub price: i64,
    #[serde(default)]
    pub is_active: bool,
}

impl Record for Addon {
    fn record_id(&self) -> &str {
        &self.id
    }
}

impl Searchable for Addon {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.name.as_str()),
            self.description.as_deref(),
            Some(self.addon_type.label()),
        ]
    }

    fn filter_value(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "type" => Some(FieldValue::Text(self.addon_type.code())),
            "status" => Some(FieldValue::Bool(self.is_active)),
            _ => None,
        }
    }
}

impl Sortable for Addon {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => compare_text(Some(&self.name), Some(&other.name)),
            "type" => self.addon_type.label().cmp(other.addon_type.label()),
            "price" => self.price.cmp(&other.price),
            "status" => self.is_active.cmp(&other.is_active),
            _ => Ordering::Equal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddonForm {
    pub name: String,
    pub description: Option<String>,
    pub addon_type: AddonType,
    pub price: i64,
    pub is_active: bool,
}

impl Default for AddonForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: None,
            addon_type: AddonType::default(),
            price: 0,
            is_active: true,
        }
    }
}

impl From<&Addon> for AddonForm {
    fn from(a: &Addon) -> Self {
        Self {
            name: a.name.clone(),
            description: a.description.clone(),
            addon_type: a.addon_type.clone(),
            price: a.price,
            is_active: a.is_active,
        }
    }
}

impl AddonForm {
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            description: self.description.as_deref().and_then(non_empty),
            ..self.clone()
        }
    }
}

impl Validate for AddonForm {
    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        validation::required(&mut errors, "name", &self.name);
        validation::positive_amount(&mut errors, "price", self.price);
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::{matches, FilterState};

    fn addon() -> Addon {
        Addon {
            id: "a-1".into(),
            name: "Sao lưu".into(),
            description: Some("Sao lưu dữ liệu hằng ngày".into()),
            addon_type: AddonType::Storage,
            price: 150_000,
            is_active: false,
        }
    }

    #[test]
    fn test_search_includes_type_label() {
        let mut state = FilterState::default();
        state.set_search_term("lưu trữ");
        assert!(matches(&addon(), &state));
        state.set_search_term("hằng ngày");
        assert!(matches(&addon(), &state));
    }

    #[test]
    fn test_status_filter() {
        let mut state = FilterState::with_filters(FILTER_KEYS);
        state.set_filter("status", "active");
        assert!(!matches(&addon(), &state));
        state.set_filter("status", "inactive");
        state.set_filter("type", "storage");
        assert!(matches(&addon(), &state));
    }

    #[test]
    fn test_price_must_be_positive() {
        let form = AddonForm {
            name: "Hỗ trợ 24/7".into(),
            ..AddonForm::default()
        };
        assert_eq!(form.validate().len(), 1);
        let form = AddonForm::from(&addon());
        assert!(form.validate().is_empty());
    }
}
