use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    /// Сравнивает два объекта по указанному полю
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Case-insensitive comparison; missing values sort as empty strings.
pub fn compare_text(a: Option<&str>, b: Option<&str>) -> Ordering {
    a.unwrap_or("")
        .to_lowercase()
        .cmp(&b.unwrap_or("").to_lowercase())
}

/// Сортирует список по указанному полю (стабильная сортировка)
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub field: String,
    pub ascending: bool,
}

impl SortState {
    pub fn new(field: &str) -> Self {
        Self {
            field: field.to_string(),
            ascending: true,
        }
    }

    /// Повторный клик по тому же полю меняет направление,
    /// клик по новому полю сортирует по возрастанию
    pub fn toggle(&mut self, field: &str) {
        if self.field == field {
            self.ascending = !self.ascending;
        } else {
            self.field = field.to_string();
            self.ascending = true;
        }
    }

    /// Индикатор для заголовка колонки
    pub fn indicator(&self, field: &str) -> &'static str {
        if self.field == field {
            if self.ascending {
                " ▲"
            } else {
                " ▼"
            }
        } else {
            " ⇅"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: Option<&'static str>,
        rank: u32,
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => compare_text(self.name, other.name),
                "rank" => self.rank.cmp(&other.rank),
                _ => Ordering::Equal,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: Some("beta"), rank: 2 },
            Row { name: Some("Alpha"), rank: 1 },
            Row { name: None, rank: 2 },
        ]
    }

    #[test]
    fn test_sort_text_case_insensitive() {
        let mut items = rows();
        sort_list(&mut items, "name", true);
        let names: Vec<_> = items.iter().map(|r| r.name).collect();
        assert_eq!(names, vec![None, Some("Alpha"), Some("beta")]);

        sort_list(&mut items, "name", false);
        assert_eq!(items[0].name, Some("beta"));
    }

    #[test]
    fn test_sort_is_stable() {
        let mut items = rows();
        sort_list(&mut items, "rank", true);
        assert_eq!(items[0].rank, 1);
        assert_eq!(items[1].name, Some("beta"));
        assert_eq!(items[2].name, None);
    }

    #[test]
    fn test_toggle() {
        let mut state = SortState::new("name");
        state.toggle("name");
        assert!(!state.ascending);
        assert_eq!(state.indicator("name"), " ▼");
        state.toggle("rank");
        assert_eq!(state.field, "rank");
        assert!(state.ascending);
        assert_eq!(state.indicator("name"), " ⇅");
    }
}
