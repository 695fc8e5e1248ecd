use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Значение именованного фильтра, означающее «без ограничения»
pub const ALL: &str = "all";

/// Значение поля записи, с которым сравнивается именованный фильтр
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    /// Булево поле (например `is_active`), фильтруется токенами `active` / `inactive`
    Bool(bool),
}

impl FieldValue<'_> {
    /// Точное сравнение значения поля с токеном фильтра
    pub fn matches_token(&self, token: &str) -> bool {
        match self {
            FieldValue::Text(value) => *value == token,
            FieldValue::Bool(flag) => parse_bool_token(token) == Some(*flag),
        }
    }
}

/// `active`/`true` -> true, `inactive`/`false` -> false
pub fn parse_bool_token(token: &str) -> Option<bool> {
    match token {
        "active" | "true" => Some(true),
        "inactive" | "false" => Some(false),
        _ => None,
    }
}

/// Trait для типов данных, поддерживающих поиск и фильтрацию
pub trait Searchable {
    /// Поля, по которым идёт поиск подстроки. `None` = поле отсутствует.
    fn search_fields(&self) -> Vec<Option<&str>>;

    /// Значение поля для именованного фильтра (`status`, `type`, ...)
    fn filter_value(&self, key: &str) -> Option<FieldValue<'_>>;
}

/// Строка поиска плюс значения выпадающих фильтров
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub search_term: String,
    pub filters: BTreeMap<String, String>,
}

impl FilterState {
    /// Состояние с набором именованных фильтров, каждый в значении `all`
    pub fn with_filters(keys: &[&str]) -> Self {
        Self {
            search_term: String::new(),
            filters: keys
                .iter()
                .map(|key| (key.to_string(), ALL.to_string()))
                .collect(),
        }
    }

    /// Текущее значение фильтра; неизвестный ключ трактуется как `all`
    pub fn filter(&self, key: &str) -> &str {
        self.filters.get(key).map(String::as_str).unwrap_or(ALL)
    }

    /// Returns `true` when the value actually changed.
    pub fn set_filter(&mut self, key: &str, value: &str) -> bool {
        if self.filter(key) == value {
            return false;
        }
        self.filters.insert(key.to_string(), value.to_string());
        true
    }

    /// Returns `true` when the term actually changed.
    pub fn set_search_term(&mut self, term: &str) -> bool {
        if self.search_term == term {
            return false;
        }
        self.search_term = term.to_string();
        true
    }

    /// Сбрасывает поиск и все фильтры в `all`
    pub fn clear(&mut self) -> bool {
        let mut changed = self.set_search_term("");
        for value in self.filters.values_mut() {
            if value != ALL {
                *value = ALL.to_string();
                changed = true;
            }
        }
        changed
    }

    /// Количество активных ограничений (для бейджа панели фильтров)
    pub fn active_count(&self) -> usize {
        let search = usize::from(!self.search_term.is_empty());
        search + self.filters.values().filter(|v| v.as_str() != ALL).count()
    }
}

/// Проверяет, попадает ли запись в видимый набор.
/// Строка поиска берётся как есть, включая пробелы.
pub fn matches<T: Searchable + ?Sized>(record: &T, state: &FilterState) -> bool {
    let term = state.search_term.to_lowercase();
    if !term.is_empty() {
        let found = record
            .search_fields()
            .into_iter()
            .any(|field| field.unwrap_or("").to_lowercase().contains(&term));
        if !found {
            return false;
        }
    }

    state
        .filters
        .iter()
        .filter(|(_, token)| token.as_str() != ALL)
        .all(|(key, token)| {
            record
                .filter_value(key)
                .is_some_and(|value| value.matches_token(token))
        })
}

/// Фильтрует список, сохраняя исходный порядок
pub fn filter_records<T: Searchable + Clone>(items: &[T], state: &FilterState) -> Vec<T> {
    items
        .iter()
        .filter(|item| matches(*item, state))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Item {
        name: Option<&'static str>,
        email: Option<&'static str>,
        kind: &'static str,
        is_active: bool,
    }

    impl Searchable for Item {
        fn search_fields(&self) -> Vec<Option<&str>> {
            vec![self.name, self.email]
        }

        fn filter_value(&self, key: &str) -> Option<FieldValue<'_>> {
            match key {
                "type" => Some(FieldValue::Text(self.kind)),
                "status" => Some(FieldValue::Bool(self.is_active)),
                _ => None,
            }
        }
    }

    fn item(name: Option<&'static str>, kind: &'static str, is_active: bool) -> Item {
        Item {
            name,
            email: None,
            kind,
            is_active,
        }
    }

    #[test]
    fn test_empty_state_matches_everything() {
        let state = FilterState::with_filters(&["type", "status"]);
        assert!(matches(&item(Some("Alpha"), "a", true), &state));
        assert!(matches(&item(None, "b", false), &state));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let mut state = FilterState::default();
        state.set_search_term("ALP");
        assert!(matches(&item(Some("alpha"), "a", true), &state));
        assert!(!matches(&item(Some("beta"), "a", true), &state));
    }

    #[test]
    fn test_missing_field_is_not_a_match() {
        let mut state = FilterState::default();
        state.set_search_term("x");
        assert!(!matches(&item(None, "a", true), &state));

        let with_email = Item {
            email: Some("x@example.vn"),
            ..item(None, "a", true)
        };
        assert!(matches(&with_email, &state));
    }

    #[test]
    fn test_search_keeps_typed_spaces() {
        let mut state = FilterState::default();
        state.set_search_term("an ");
        assert!(!matches(&item(Some("AnBinh"), "a", true), &state));
        assert!(matches(&item(Some("An Bình"), "a", true), &state));

        state.set_search_term("   ");
        assert!(!matches(&item(Some("An Bình"), "a", true), &state));
        assert_eq!(state.active_count(), 1);
    }

    #[test]
    fn test_named_filters() {
        let mut state = FilterState::with_filters(&["type", "status"]);
        state.set_filter("type", "b");
        assert!(!matches(&item(Some("x"), "a", true), &state));
        assert!(matches(&item(Some("x"), "b", true), &state));

        state.set_filter("status", "inactive");
        assert!(!matches(&item(Some("x"), "b", true), &state));
        assert!(matches(&item(Some("x"), "b", false), &state));
    }

    #[test]
    fn test_unknown_filter_key_excludes_when_constrained() {
        let mut state = FilterState::default();
        state.set_filter("region", "north");
        assert!(!matches(&item(Some("x"), "a", true), &state));
    }

    #[test]
    fn test_bool_tokens() {
        assert_eq!(parse_bool_token("active"), Some(true));
        assert_eq!(parse_bool_token("false"), Some(false));
        assert_eq!(parse_bool_token("maybe"), None);
        assert!(!FieldValue::Bool(true).matches_token("maybe"));
    }

    #[test]
    fn test_set_and_clear_report_changes() {
        let mut state = FilterState::with_filters(&["type"]);
        assert!(!state.set_filter("type", ALL));
        assert!(state.set_filter("type", "b"));
        assert!(state.set_search_term("q"));
        assert_eq!(state.active_count(), 2);
        assert!(state.clear());
        assert!(!state.clear());
        assert_eq!(state.active_count(), 0);
        assert_eq!(state.filter("type"), ALL);
    }

    #[test]
    fn test_filter_records_keeps_order() {
        let items = vec![
            item(Some("anna"), "a", true),
            item(Some("bob"), "a", true),
            item(Some("hanna"), "a", true),
        ];
        let mut state = FilterState::default();
        state.set_search_term("nna");
        let names: Vec<_> = filter_records(&items, &state)
            .into_iter()
            .map(|i| i.name.unwrap())
            .collect();
        assert_eq!(names, vec!["anna", "hanna"]);
    }
}
