use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::common::non_empty;
use crate::enums::ContractStatus;
use crate::shared::list::{compare_text, FieldValue, Record, Searchable, Sortable};
use crate::shared::validation::{self, Validate, ValidationErrors};

pub const FILTER_KEYS: &[&str] = &["status"];
pub const DEFAULT_SORT: &str = "employee_name";

/// Трудовой договор сотрудника (оклад + надбавка, VND)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryContract {
    pub id: String,
    #[serde(default)]
    pub employee_name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub base_salary: i64,
    #[serde(default)]
    pub allowance: i64,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub status: ContractStatus,
}

impl SalaryContract {
    /// Оклад + надбавка
    pub fn total_salary(&self) -> i64 {
        self.base_salary.saturating_add(self.allowance)
    }
}

impl Record for SalaryContract {
    fn record_id(&self) -> &str {
        &self.id
    }
}

impl Searchable for SalaryContract {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![Some(self.employee_name.as_str()), Some(self.position.as_str())]
    }

    fn filter_value(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "status" => Some(FieldValue::Text(self.status.code())),
            _ => None,
        }
    }
}

impl Sortable for SalaryContract {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "employee_name" => compare_text(Some(&self.employee_name), Some(&other.employee_name)),
            "position" => compare_text(Some(&self.position), Some(&other.position)),
            "base_salary" => self.base_salary.cmp(&other.base_salary),
            "total_salary" => self.total_salary().cmp(&other.total_salary()),
            "start_date" => self.start_date.cmp(&other.start_date),
            "end_date" => compare_text(self.end_date.as_deref(), other.end_date.as_deref()),
            "status" => self.status.label().cmp(other.status.label()),
            _ => Ordering::Equal,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalaryContractForm {
    pub employee_name: String,
    pub position: String,
    pub base_salary: i64,
    pub allowance: i64,
    pub start_date: String,
    pub end_date: Option<String>,
    pub status: ContractStatus,
}

impl From<&SalaryContract> for SalaryContractForm {
    fn from(c: &SalaryContract) -> Self {
        Self {
            employee_name: c.employee_name.clone(),
            position: c.position.clone(),
            base_salary: c.base_salary,
            allowance: c.allowance,
            start_date: c.start_date.clone(),
            end_date: c.end_date.clone(),
            status: c.status.clone(),
        }
    }
}

impl SalaryContractForm {
    pub fn normalized(&self) -> Self {
        Self {
            employee_name: self.employee_name.trim().to_string(),
            position: self.position.trim().to_string(),
            start_date: self.start_date.trim().to_string(),
            end_date: self.end_date.as_deref().and_then(non_empty),
            ..self.clone()
        }
    }
}

impl Validate for SalaryContractForm {
    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        validation::required(&mut errors, "employee_name", &self.employee_name);
        validation::required(&mut errors, "position", &self.position);
        validation::positive_amount(&mut errors, "base_salary", self.base_salary);
        validation::non_negative_amount(&mut errors, "allowance", self.allowance);
        validation::required_date(&mut errors, "start_date", &self.start_date);
        validation::date_order(&mut errors, "end_date", &self.start_date, self.end_date.as_deref());
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> SalaryContractForm {
        SalaryContractForm {
            employee_name: "Trần Thị Bình".into(),
            position: "Kế toán".into(),
            base_salary: 12_000_000,
            allowance: 1_000_000,
            start_date: "2024-01-01".into(),
            end_date: Some("2025-12-31".into()),
            status: ContractStatus::Active,
        }
    }

    #[test]
    fn test_valid_form() {
        assert!(valid_form().validate().is_empty());
    }

    #[test]
    fn test_end_before_start() {
        let form = SalaryContractForm {
            end_date: Some("2023-12-31".into()),
            ..valid_form()
        };
        let errors = form.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors.get("end_date").is_some());
    }

    #[test]
    fn test_amounts() {
        let form = SalaryContractForm {
            base_salary: 0,
            allowance: -5,
            ..valid_form()
        };
        let errors = form.validate();
        assert!(errors.get("base_salary").is_some());
        assert!(errors.get("allowance").is_some());
    }

    #[test]
    fn test_total_salary_sort() {
        let a = SalaryContract {
            id: "1".into(),
            employee_name: "A".into(),
            position: "x".into(),
            base_salary: 10,
            allowance: 5,
            start_date: "2024-01-01".into(),
            end_date: None,
            status: ContractStatus::Active,
        };
        let b = SalaryContract {
            id: "2".into(),
            base_salary: 12,
            allowance: 0,
            ..a.clone()
        };
        assert_eq!(a.compare_by_field(&b, "total_salary"), Ordering::Greater);
        assert_eq!(a.compare_by_field(&b, "base_salary"), Ordering::Less);
    }
}
