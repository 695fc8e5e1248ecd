use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::common::non_empty;
use crate::enums::DealStage;
use crate::shared::list::{compare_text, FieldValue, Record, Searchable, Sortable};
use crate::shared::validation::{self, Validate, ValidationErrors};

pub const FILTER_KEYS: &[&str] = &["stage"];
pub const DEFAULT_SORT: &str = "title";

/// Сделка продаж
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub amount: i64,
    #[serde(default)]
    pub stage: DealStage,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub expected_close_date: Option<String>,
}

impl Record for Deal {
    fn record_id(&self) -> &str {
        &self.id
    }
}

impl Searchable for Deal {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.title.as_str()),
            Some(self.customer_name.as_str()),
            self.owner.as_deref(),
        ]
    }

    fn filter_value(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "stage" => Some(FieldValue::Text(self.stage.code())),
            _ => None,
        }
    }
}

impl Sortable for Deal {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "title" => compare_text(Some(&self.title), Some(&other.title)),
            "customer_name" => compare_text(Some(&self.customer_name), Some(&other.customer_name)),
            "amount" => self.amount.cmp(&other.amount),
            "stage" => self.stage.label().cmp(other.stage.label()),
            "owner" => compare_text(self.owner.as_deref(), other.owner.as_deref()),
            "expected_close_date" => compare_text(
                self.expected_close_date.as_deref(),
                other.expected_close_date.as_deref(),
            ),
            _ => Ordering::Equal,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DealForm {
    pub title: String,
    pub customer_name: String,
    pub amount: i64,
    pub stage: DealStage,
    pub owner: Option<String>,
    pub expected_close_date: Option<String>,
}

impl From<&Deal> for DealForm {
    fn from(d: &Deal) -> Self {
        Self {
            title: d.title.clone(),
            customer_name: d.customer_name.clone(),
            amount: d.amount,
            stage: d.stage.clone(),
            owner: d.owner.clone(),
            expected_close_date: d.expected_close_date.clone(),
        }
    }
}

impl DealForm {
    pub fn normalized(&self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            customer_name: self.customer_name.trim().to_string(),
            owner: self.owner.as_deref().and_then(non_empty),
            expected_close_date: self.expected_close_date.as_deref().and_then(non_empty),
            ..self.clone()
        }
    }
}

impl Validate for DealForm {
    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        validation::required(&mut errors, "title", &self.title);
        validation::required(&mut errors, "customer_name", &self.customer_name);
        validation::non_negative_amount(&mut errors, "amount", self.amount);
        if let Some(date) = self.expected_close_date.as_deref().and_then(non_empty) {
            if validation::parse_date(&date).is_none() {
                errors.add("expected_close_date", "Ngày không hợp lệ");
            }
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::{matches, FilterState};

    #[test]
    fn test_search_by_owner_is_optional() {
        let deal = Deal {
            id: "d-1".into(),
            title: "Gói ERP".into(),
            customer_name: "Công ty Minh Phát".into(),
            amount: 80_000_000,
            stage: DealStage::Negotiation,
            owner: None,
            expected_close_date: None,
        };
        let mut state = FilterState::with_filters(FILTER_KEYS);
        state.set_search_term("minh phát");
        assert!(matches(&deal, &state));
        state.set_search_term("huy");
        assert!(!matches(&deal, &state));
    }

    #[test]
    fn test_validation() {
        let form = DealForm {
            title: "Gói ERP".into(),
            customer_name: "Minh Phát".into(),
            expected_close_date: Some("31/12/2024".into()),
            ..DealForm::default()
        };
        let errors = form.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors.get("expected_close_date").is_some());
    }
}
