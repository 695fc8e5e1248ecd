//! Общий конвейер списков: фильтр -> сортировка -> страница -> окно страниц.
//!
//! Все экраны списков (клиенты, пользователи, дополнения, услуги, договоры,
//! сделки, заявки) используют один и тот же набор чистых функций.

pub mod filter;
pub mod page_window;
pub mod pagination;
pub mod sort;
pub mod view_state;

pub use filter::{filter_records, matches, FieldValue, FilterState, Searchable, ALL};
pub use page_window::{page_window, PageToken};
pub use pagination::{clamp_page, paginate, total_pages, Page};
pub use sort::{compare_text, sort_list, SortState, Sortable};
pub use view_state::{ListSnapshot, ListViewState, PageState};

/// Запись списка со стабильным идентификатором
pub trait Record {
    fn record_id(&self) -> &str;
}

/// Удаляет запись из локального списка без перезагрузки.
/// Возвращает `true`, если запись была найдена.
pub fn splice_remove<T: Record>(items: &mut Vec<T>, id: &str) -> bool {
    let before = items.len();
    items.retain(|item| item.record_id() != id);
    items.len() != before
}

/// Заменяет запись с тем же id. Если записи нет, список не меняется.
pub fn splice_replace<T: Record>(items: &mut [T], record: T) -> bool {
    match items
        .iter_mut()
        .find(|item| item.record_id() == record.record_id())
    {
        Some(slot) => {
            *slot = record;
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: &'static str,
        label: &'static str,
    }

    impl Record for Row {
        fn record_id(&self) -> &str {
            self.id
        }
    }

    #[test]
    fn test_splice_remove() {
        let mut rows = vec![Row { id: "1", label: "a" }, Row { id: "2", label: "b" }];
        assert!(splice_remove(&mut rows, "1"));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "2");
        assert!(!splice_remove(&mut rows, "404"));
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_splice_replace() {
        let mut rows = vec![Row { id: "1", label: "a" }, Row { id: "2", label: "b" }];
        assert!(splice_replace(&mut rows, Row { id: "2", label: "changed" }));
        assert_eq!(rows[1].label, "changed");
        assert!(!splice_replace(&mut rows, Row { id: "3", label: "c" }));
        assert_eq!(rows.len(), 2);
    }
}
