use serde::{Deserialize, Serialize};

/// Элемент панели страниц: номер страницы или многоточие
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum PageToken {
    Page(usize),
    Ellipsis,
}

impl PageToken {
    pub fn page(&self) -> Option<usize> {
        match self {
            PageToken::Page(n) => Some(*n),
            PageToken::Ellipsis => None,
        }
    }
}

/// Окно номеров страниц вокруг текущей, с первой/последней страницей и многоточиями.
///
/// ```text
/// total = 20, current = 10, window = 5  ->  1 … 8 9 10 11 12 … 20
/// ```
///
/// Near either end the window shifts instead of shrinking. `window_size` 0
/// is treated as 1; `current_page` is clamped into `[1, total_pages]`.
pub fn page_window(current_page: usize, total_pages: usize, window_size: usize) -> Vec<PageToken> {
    if total_pages == 0 {
        return Vec::new();
    }
    let window_size = window_size.max(1);

    if total_pages <= window_size {
        return (1..=total_pages).map(PageToken::Page).collect();
    }

    let current = current_page.clamp(1, total_pages);
    let start = current
        .saturating_sub(window_size / 2)
        .clamp(1, total_pages - window_size + 1);
    let end = start + window_size - 1;

    let mut tokens = Vec::with_capacity(window_size + 4);
    if start > 1 {
        tokens.push(PageToken::Page(1));
        if start > 2 {
            tokens.push(PageToken::Ellipsis);
        }
    }
    tokens.extend((start..=end).map(PageToken::Page));
    if end < total_pages {
        if end < total_pages - 1 {
            tokens.push(PageToken::Ellipsis);
        }
        tokens.push(PageToken::Page(total_pages));
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageToken::{Ellipsis, Page};

    #[test]
    fn test_all_pages_fit() {
        assert_eq!(
            page_window(4, 7, 7),
            (1..=7).map(Page).collect::<Vec<_>>()
        );
        assert_eq!(page_window(1, 1, 5), vec![Page(1)]);
    }

    #[test]
    fn test_centered_window() {
        assert_eq!(
            page_window(10, 20, 5),
            vec![Page(1), Ellipsis, Page(8), Page(9), Page(10), Page(11), Page(12), Ellipsis, Page(20)]
        );
    }

    #[test]
    fn test_left_boundary() {
        assert_eq!(
            page_window(1, 20, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(20)]
        );
        assert_eq!(page_window(2, 20, 5), page_window(1, 20, 5));
    }

    #[test]
    fn test_right_boundary() {
        assert_eq!(
            page_window(20, 20, 5),
            vec![Page(1), Ellipsis, Page(16), Page(17), Page(18), Page(19), Page(20)]
        );
    }

    #[test]
    fn test_no_ellipsis_next_to_neighbour() {
        // окно 2..6: между 1 и 2 пропусков нет
        assert_eq!(
            page_window(4, 10, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
        // окно 5..9: между 9 и 10 пропусков нет
        assert_eq!(
            page_window(7, 10, 5),
            vec![Page(1), Ellipsis, Page(5), Page(6), Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(page_window(1, 0, 5).is_empty());
        assert_eq!(page_window(3, 3, 0), vec![Page(1), Ellipsis, Page(3)]);
        assert_eq!(page_window(99, 20, 5), page_window(20, 20, 5));
        assert_eq!(page_window(0, 20, 5), page_window(1, 20, 5));
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(page_window(13, 40, 7), page_window(13, 40, 7));
    }

    #[test]
    fn test_token_json_shape() {
        assert_eq!(
            serde_json::to_value(Page(3)).unwrap(),
            serde_json::json!({ "kind": "page", "value": 3 })
        );
        assert_eq!(
            serde_json::to_value(Ellipsis).unwrap(),
            serde_json::json!({ "kind": "ellipsis" })
        );
    }
}
