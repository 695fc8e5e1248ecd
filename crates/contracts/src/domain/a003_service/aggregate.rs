use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::common::non_empty;
use crate::enums::{BillingCycle, ServiceCategory};
use crate::shared::list::{compare_text, FieldValue, Record, Searchable, Sortable};
use crate::shared::validation::{self, Validate, ValidationErrors};

pub const FILTER_KEYS: &[&str] = &["category", "billing_cycle", "status"];
pub const DEFAULT_SORT: &str = "name";

/// Услуга (Service)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: ServiceCategory,
    #[serde(default)]
    pub price: i64,
    #[serde(default)]
    pub billing_cycle: BillingCycle,
    #[serde(default)]
    pub is_active: bool,
}

impl Record for Service {
    fn record_id(&self) -> &str {
        &self.id
    }
}

impl Searchable for Service {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.name.as_str()),
            self.description.as_deref(),
            Some(self.category.label()),
        ]
    }

    fn filter_value(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "category" => Some(FieldValue::Text(self.category.code())),
            "billing_cycle" => Some(FieldValue::Text(self.billing_cycle.code())),
            "status" => Some(FieldValue::Bool(self.is_active)),
            _ => None,
        }
    }
}

impl Sortable for Service {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => compare_text(Some(&self.name), Some(&other.name)),
            "category" => self.category.label().cmp(other.category.label()),
            "price" => self.price.cmp(&other.price),
            "billing_cycle" => self.billing_cycle.label().cmp(other.billing_cycle.label()),
            "status" => self.is_active.cmp(&other.is_active),
            _ => Ordering::Equal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceForm {
    pub name: String,
    pub description: Option<String>,
    pub category: ServiceCategory,
    pub price: i64,
    pub billing_cycle: BillingCycle,
    pub is_active: bool,
}

impl Default for ServiceForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: None,
            category: ServiceCategory::default(),
            price: 0,
            billing_cycle: BillingCycle::default(),
            is_active: true,
        }
    }
}

impl From<&Service> for ServiceForm {
    fn from(s: &Service) -> Self {
        Self {
            name: s.name.clone(),
            description: s.description.clone(),
            category: s.category.clone(),
            price: s.price,
            billing_cycle: s.billing_cycle.clone(),
            is_active: s.is_active,
        }
    }
}

impl ServiceForm {
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            description: self.description.as_deref().and_then(non_empty),
            ..self.clone()
        }
    }
}

impl Validate for ServiceForm {
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

    #[test]
    fn test_combined_filters() {
        let service = Service {
            id: "s-1".into(),
            name: "Cloud VPS".into(),
            description: None,
            category: ServiceCategory::Hosting,
            price: 500_000,
            billing_cycle: BillingCycle::Monthly,
            is_active: true,
        };
        let mut state = FilterState::with_filters(FILTER_KEYS);
        state.set_filter("category", "hosting");
        state.set_filter("billing_cycle", "monthly");
        assert!(matches(&service, &state));
        state.set_filter("billing_cycle", "yearly");
        assert!(!matches(&service, &state));
    }

    #[test]
    fn test_validation() {
        let errors = ServiceForm::default().validate();
        assert!(errors.get("name").is_some());
        assert!(errors.get("price").is_some());
    }
}
