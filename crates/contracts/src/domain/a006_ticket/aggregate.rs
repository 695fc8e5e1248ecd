use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::common::non_empty;
use crate::enums::{TicketPriority, TicketStatus};
use crate::shared::list::{compare_text, FieldValue, Record, Searchable, Sortable};
use crate::shared::validation::{self, Validate, ValidationErrors};

pub const FILTER_KEYS: &[&str] = &["priority", "status"];
pub const DEFAULT_SORT: &str = "created_at";

/// Заявка службы поддержки (helpdesk ticket)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub priority: TicketPriority,
    #[serde(default)]
    pub status: TicketStatus,
    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

impl Record for Ticket {
    fn record_id(&self) -> &str {
        &self.id
    }
}

impl Searchable for Ticket {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.subject.as_str()),
            Some(self.customer_name.as_str()),
            self.assignee.as_deref(),
        ]
    }

    fn filter_value(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "priority" => Some(FieldValue::Text(self.priority.code())),
            "status" => Some(FieldValue::Text(self.status.code())),
            _ => None,
        }
    }
}

impl Sortable for Ticket {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "subject" => compare_text(Some(&self.subject), Some(&other.subject)),
            "customer_name" => compare_text(Some(&self.customer_name), Some(&other.customer_name)),
            // порядок вариантов = порядок срочности
            "priority" => self.priority.rank().cmp(&other.priority.rank()),
            "status" => self.status.rank().cmp(&other.status.rank()),
            "assignee" => compare_text(self.assignee.as_deref(), other.assignee.as_deref()),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => Ordering::Equal,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TicketForm {
    pub subject: String,
    pub customer_name: String,
    pub priority: TicketPriority,
    pub status: TicketStatus,
    pub assignee: Option<String>,
}

impl From<&Ticket> for TicketForm {
    fn from(t: &Ticket) -> Self {
        Self {
            subject: t.subject.clone(),
            customer_name: t.customer_name.clone(),
            priority: t.priority.clone(),
            status: t.status.clone(),
            assignee: t.assignee.clone(),
        }
    }
}

impl TicketForm {
    pub fn normalized(&self) -> Self {
        Self {
            subject: self.subject.trim().to_string(),
            customer_name: self.customer_name.trim().to_string(),
            assignee: self.assignee.as_deref().and_then(non_empty),
            ..self.clone()
        }
    }
}

impl Validate for TicketForm {
    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        validation::required(&mut errors, "subject", &self.subject);
        validation::required(&mut errors, "customer_name", &self.customer_name);
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::sort_list;

    fn ticket(id: &str, priority: TicketPriority) -> Ticket {
        Ticket {
            id: id.into(),
            subject: "Không đăng nhập được".into(),
            customer_name: "An".into(),
            priority,
            status: TicketStatus::Open,
            assignee: None,
            created_at: "2024-06-01T08:00:00Z".into(),
        }
    }

    #[test]
    fn test_priority_sort_follows_urgency() {
        let mut items = vec![
            ticket("1", TicketPriority::High),
            ticket("2", TicketPriority::Low),
            ticket("3", TicketPriority::Urgent),
            ticket("4", TicketPriority::Unknown("p0".into())),
        ];
        sort_list(&mut items, "priority", true);
        let ids: Vec<_> = items.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1", "3", "4"]);
    }

    #[test]
    fn test_validation() {
        let errors = TicketForm::default().validate();
        assert_eq!(errors.len(), 2);
        assert!(TicketForm::from(&ticket("1", TicketPriority::Low))
            .validate()
            .is_empty());
    }
}
