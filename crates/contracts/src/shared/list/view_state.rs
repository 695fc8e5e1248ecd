use serde::{Deserialize, Serialize};

use super::filter::{filter_records, FilterState, Searchable, ALL};
use super::page_window::{page_window, PageToken};
use super::pagination::{clamp_page, paginate, total_pages};
use super::sort::{sort_list, SortState, Sortable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    /// 1-based
    pub current_page: usize,
    /// Never zero
    pub items_per_page: usize,
}

/// Состояние экрана списка: поиск, фильтры, страница, сортировка.
///
/// Все изменения поиска, фильтров и размера страницы возвращают на первую
/// страницу; номер страницы всегда в пределах `[1, max(1, total_pages)]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListViewState {
    filter: FilterState,
    page: PageState,
    sort: SortState,
}

/// Результат прохода конвейера для текущего рендера
#[derive(Debug, Clone, PartialEq)]
pub struct ListSnapshot<T> {
    pub items: Vec<T>,
    pub total_items: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub items_per_page: usize,
    pub start_index: usize,
    pub window: Vec<PageToken>,
}

impl<T> ListSnapshot<T> {
    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }

    /// Панель страниц нужна только если страниц больше одной
    pub fn show_pagination(&self) -> bool {
        self.total_pages > 1
    }

    /// 1-based `(first, last)` for "Showing X–Y of N"
    pub fn range(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            None
        } else {
            Some((self.start_index + 1, self.start_index + self.items.len()))
        }
    }
}

impl ListViewState {
    /// `items_per_page` of 0 falls back to 10.
    pub fn new(filter_keys: &[&str], sort_field: &str, items_per_page: usize) -> Self {
        Self {
            filter: FilterState::with_filters(filter_keys),
            page: PageState {
                current_page: 1,
                items_per_page: if items_per_page == 0 { 10 } else { items_per_page },
            },
            sort: SortState::new(sort_field),
        }
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn page(&self) -> PageState {
        self.page
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn search_term(&self) -> &str {
        &self.filter.search_term
    }

    pub fn filter_value(&self, key: &str) -> &str {
        self.filter.filter(key)
    }

    pub fn current_page(&self) -> usize {
        self.page.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.page.items_per_page
    }

    pub fn active_filter_count(&self) -> usize {
        self.filter.active_count()
    }

    pub fn set_search_term(&mut self, term: &str) {
        if self.filter.set_search_term(term) {
            self.page.current_page = 1;
        }
    }

    pub fn set_filter(&mut self, key: &str, value: &str) {
        let value = if value.is_empty() { ALL } else { value };
        if self.filter.set_filter(key, value) {
            self.page.current_page = 1;
        }
    }

    pub fn clear_filters(&mut self) {
        if self.filter.clear() {
            self.page.current_page = 1;
        }
    }

    /// Zero is ignored.
    pub fn set_items_per_page(&mut self, items_per_page: usize) {
        if items_per_page == 0 || items_per_page == self.page.items_per_page {
            return;
        }
        self.page.items_per_page = items_per_page;
        self.page.current_page = 1;
    }

    pub fn toggle_sort(&mut self, field: &str) {
        self.sort.toggle(field);
    }

    pub fn go_to_page(&mut self, page: usize, total_pages: usize) {
        self.page.current_page = clamp_page(page, total_pages);
    }

    /// Повторный clamp после того, как список уменьшился (удаление, перезагрузка)
    pub fn sync_total(&mut self, total_pages: usize) {
        self.page.current_page = clamp_page(self.page.current_page, total_pages);
    }

    /// Полный проход: фильтр -> сортировка -> clamp -> страница -> окно
    pub fn project<T>(&self, items: &[T], window_size: usize) -> ListSnapshot<T>
    where
        T: Searchable + Sortable + Clone,
    {
        let mut visible = filter_records(items, &self.filter);
        sort_list(&mut visible, &self.sort.field, self.sort.ascending);

        let per_page = self.page.items_per_page.max(1);
        let total = total_pages(visible.len(), per_page).unwrap_or(0);
        let current = clamp_page(self.page.current_page, total);

        let (page_items, start_index) = match paginate(&visible, current, per_page) {
            Ok(page) => (page.items.to_vec(), page.start_index),
            Err(_) => (Vec::new(), 0),
        };

        ListSnapshot {
            items: page_items,
            total_items: visible.len(),
            total_pages: total,
            current_page: current,
            items_per_page: per_page,
            start_index,
            window: page_window(current, total, window_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::{compare_text, FieldValue};
    use std::cmp::Ordering;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: usize,
        name: String,
        is_active: bool,
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<Option<&str>> {
            vec![Some(self.name.as_str())]
        }

        fn filter_value(&self, key: &str) -> Option<FieldValue<'_>> {
            match key {
                "status" => Some(FieldValue::Bool(self.is_active)),
                _ => None,
            }
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => compare_text(Some(&self.name), Some(&other.name)),
                _ => self.id.cmp(&other.id),
            }
        }
    }

    fn rows(n: usize) -> Vec<Row> {
        (1..=n)
            .map(|id| Row {
                id,
                name: format!("row {id:02}"),
                is_active: id % 2 == 1,
            })
            .collect()
    }

    #[test]
    fn test_changes_reset_to_first_page() {
        let mut state = ListViewState::new(&["status"], "id", 10);
        state.go_to_page(3, 3);
        state.set_search_term("row");
        assert_eq!(state.current_page(), 1);

        state.go_to_page(2, 3);
        state.set_filter("status", "active");
        assert_eq!(state.current_page(), 1);

        state.go_to_page(2, 3);
        state.set_items_per_page(20);
        assert_eq!(state.current_page(), 1);

        state.go_to_page(2, 3);
        state.clear_filters();
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_unchanged_values_keep_page() {
        let mut state = ListViewState::new(&["status"], "id", 10);
        state.go_to_page(2, 3);
        state.set_search_term("");
        state.set_filter("status", "all");
        state.set_items_per_page(10);
        state.set_items_per_page(0);
        state.toggle_sort("name");
        assert_eq!(state.current_page(), 2);
        assert_eq!(state.items_per_page(), 10);
    }

    #[test]
    fn test_go_to_page_clamps() {
        let mut state = ListViewState::new(&[], "id", 10);
        state.go_to_page(9, 3);
        assert_eq!(state.current_page(), 3);
        state.go_to_page(0, 3);
        assert_eq!(state.current_page(), 1);
        state.go_to_page(2, 0);
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_project_clamps_after_shrink() {
        let mut state = ListViewState::new(&[], "id", 10);
        state.go_to_page(3, 3);
        let snapshot = state.project(&rows(12), 5);
        assert_eq!(snapshot.total_pages, 2);
        assert_eq!(snapshot.current_page, 2);
        assert_eq!(snapshot.items.len(), 2);

        state.sync_total(snapshot.total_pages);
        assert_eq!(state.current_page(), 2);
    }

    #[test]
    fn test_project_empty() {
        let state = ListViewState::new(&[], "id", 10);
        let snapshot = state.project::<Row>(&[], 5);
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.total_pages, 0);
        assert_eq!(snapshot.current_page, 1);
        assert!(snapshot.window.is_empty());
        assert!(!snapshot.show_pagination());
        assert_eq!(snapshot.range(), None);
    }

    #[test]
    fn test_project_filters_and_sorts() {
        let mut state = ListViewState::new(&["status"], "id", 3);
        state.set_filter("status", "inactive");
        state.toggle_sort("id");
        let snapshot = state.project(&rows(10), 5);
        assert_eq!(snapshot.total_items, 5);
        let ids: Vec<_> = snapshot.items.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![10, 8, 6]);
        assert_eq!(snapshot.range(), Some((1, 3)));
        assert_eq!(state.active_filter_count(), 1);
    }

    #[test]
    fn test_empty_filter_value_means_all() {
        let mut state = ListViewState::new(&["status"], "id", 3);
        state.set_filter("status", "active");
        state.set_filter("status", "");
        assert_eq!(state.filter_value("status"), ALL);
    }
}
