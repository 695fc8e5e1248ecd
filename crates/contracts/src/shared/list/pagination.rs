use crate::shared::error::ListError;

/// `ceil(len / items_per_page)`; пустой список даёт 0 страниц
pub fn total_pages(len: usize, items_per_page: usize) -> Result<usize, ListError> {
    if items_per_page == 0 {
        return Err(ListError::InvalidPageSize);
    }
    Ok(len.div_ceil(items_per_page))
}

/// Приводит номер страницы к диапазону `[1, max(1, total_pages)]`
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Одна страница отфильтрованного списка
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 0-based index of the first item on this page
    pub start_index: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<'_, T> {
    /// 1-based `(first, last)` for "Showing X–Y of N"; `None` for an empty page
    pub fn range(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            None
        } else {
            Some((self.start_index + 1, self.start_index + self.items.len()))
        }
    }
}

/// Вырезает текущую страницу. Номер страницы за пределами списка
/// не исправляется: возвращается пустой срез, clamp делает вызывающий.
pub fn paginate<T>(
    items: &[T],
    current_page: usize,
    items_per_page: usize,
) -> Result<Page<'_, T>, ListError> {
    let total = total_pages(items.len(), items_per_page)?;
    if current_page == 0 {
        return Err(ListError::InvalidPage(current_page));
    }

    let start_index = (current_page - 1).saturating_mul(items_per_page);
    let start = start_index.min(items.len());
    let end = start_index.saturating_add(items_per_page).min(items.len());

    Ok(Page {
        items: &items[start..end],
        start_index,
        total_pages: total,
        total_items: items.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), Ok(0));
        assert_eq!(total_pages(1, 10), Ok(1));
        assert_eq!(total_pages(10, 10), Ok(1));
        assert_eq!(total_pages(23, 10), Ok(3));
        assert_eq!(total_pages(23, 0), Err(ListError::InvalidPageSize));
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 5), 1);
        assert_eq!(clamp_page(3, 5), 3);
        assert_eq!(clamp_page(9, 5), 5);
        assert_eq!(clamp_page(4, 0), 1);
    }

    #[test]
    fn test_last_page_is_partial() {
        let items: Vec<u32> = (1..=23).collect();
        let page = paginate(&items, 3, 10).unwrap();
        assert_eq!(page.items, &[21, 22, 23]);
        assert_eq!(page.start_index, 20);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_items, 23);
        assert_eq!(page.range(), Some((21, 23)));
    }

    #[test]
    fn test_empty_list() {
        let items: Vec<u32> = Vec::new();
        let page = paginate(&items, 1, 10).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.range(), None);
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let items: Vec<u32> = (1..=5).collect();
        let page = paginate(&items, 4, 5).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_invalid_input() {
        let items = [1, 2, 3];
        assert_eq!(paginate(&items, 1, 0), Err(ListError::InvalidPageSize));
        assert_eq!(paginate(&items, 0, 2), Err(ListError::InvalidPage(0)));
    }

    proptest! {
        #[test]
        fn pages_rebuild_the_list(len in 0usize..200, per_page in 1usize..40) {
            let items: Vec<usize> = (0..len).collect();
            let total = total_pages(len, per_page).unwrap();
            prop_assert_eq!(total, (len + per_page - 1) / per_page);

            let mut rebuilt = Vec::with_capacity(len);
            for page in 1..=total {
                rebuilt.extend_from_slice(paginate(&items, page, per_page).unwrap().items);
            }
            prop_assert_eq!(rebuilt, items);
        }

        #[test]
        fn only_the_last_page_is_short(len in 1usize..200, per_page in 1usize..40) {
            let items: Vec<usize> = (0..len).collect();
            let total = total_pages(len, per_page).unwrap();
            for page in 1..=total {
                let slice = paginate(&items, page, per_page).unwrap().items;
                if page < total {
                    prop_assert_eq!(slice.len(), per_page);
                } else {
                    prop_assert_eq!(slice.len(), len - per_page * (total - 1));
                }
            }
        }
    }
}
