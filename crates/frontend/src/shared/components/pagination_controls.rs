use contracts::shared::list::PageToken;
use leptos::prelude::*;

use crate::shared::config::app_config;
use crate::shared::icons::icon;

/// Подпись кнопки окна страниц
pub fn token_label(token: &PageToken) -> String {
    match token {
        PageToken::Page(page) => page.to_string(),
        PageToken::Ellipsis => "…".to_string(),
    }
}

/// "Hiển thị 11–20 / 23"
pub fn range_label(range: Option<(usize, usize)>, total_items: usize) -> String {
    match range {
        Some((first, last)) => format!("Hiển thị {}–{} / {}", first, last, total_items),
        None => "Không có bản ghi".to_string(),
    }
}

/// Панель страниц списка (номера 1-based).
///
/// Кнопки навигации видны только при `total_pages > 1`; выбор размера
/// страницы остаётся доступен, пока список не пуст.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Окно номеров страниц
    #[prop(into)]
    window: Signal<Vec<PageToken>>,

    /// 1-based (first, last) текущей страницы
    #[prop(into)]
    range: Signal<Option<(usize, usize)>>,

    /// Total count of items after filtering
    #[prop(into)]
    total_items: Signal<usize>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,

    /// Callback when page size changes
    on_page_size_change: Callback<usize>,
) -> impl IntoView {
    let lists = &app_config().lists;
    let page_size_options = lists.page_size_options.clone();
    let default_page_size = lists.default_page_size;

    let has_prev = move || current_page.get() > 1;
    let has_next = move || current_page.get() < total_pages.get();

    view! {
        <div class="pagination-controls">
            <span class="pagination-info">
                {move || range_label(range.get(), total_items.get())}
            </span>

            <Show when=move || { total_pages.get() > 1 }>
                <button
                    class="pagination-btn"
                    on:click=move |_| on_page_change.run(1)
                    disabled=move || !has_prev()
                    title="Trang đầu"
                >
                    {icon("chevrons-left")}
                </button>
                <button
                    class="pagination-btn"
                    on:click=move |_| on_page_change.run(current_page.get().saturating_sub(1))
                    disabled=move || !has_prev()
                    title="Trang trước"
                >
                    {icon("chevron-left")}
                </button>
                {move || {
                    let current = current_page.get();
                    window
                        .get()
                        .into_iter()
                        .map(|token| match token {
                            PageToken::Page(page) => view! {
                                <button
                                    class=if page == current {
                                        "pagination-btn pagination-btn--active"
                                    } else {
                                        "pagination-btn"
                                    }
                                    on:click=move |_| on_page_change.run(page)
                                >
                                    {token_label(&token)}
                                </button>
                            }
                            .into_any(),
                            PageToken::Ellipsis => view! {
                                <span class="pagination-ellipsis">{token_label(&token)}</span>
                            }
                            .into_any(),
                        })
                        .collect_view()
                }}
                <button
                    class="pagination-btn"
                    on:click=move |_| on_page_change.run(current_page.get() + 1)
                    disabled=move || !has_next()
                    title="Trang sau"
                >
                    {icon("chevron-right")}
                </button>
                <button
                    class="pagination-btn"
                    on:click=move |_| on_page_change.run(total_pages.get())
                    disabled=move || !has_next()
                    title="Trang cuối"
                >
                    {icon("chevrons-right")}
                </button>
            </Show>

            <Show when=move || { total_items.get() > 0 }>
                <select
                    class="page-size-select"
                    on:change=move |ev| {
                        let size = event_target_value(&ev).parse().unwrap_or(default_page_size);
                        on_page_size_change.run(size);
                    }
                    prop:value=move || page_size.get().to_string()
                >
                    {page_size_options.iter().map(|&size| {
                        view! {
                            <option value=size.to_string() selected=move || page_size.get() == size>
                                {format!("{} / trang", size)}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_labels() {
        assert_eq!(token_label(&PageToken::Page(12)), "12");
        assert_eq!(token_label(&PageToken::Ellipsis), "…");
    }

    #[test]
    fn test_range_label() {
        assert_eq!(range_label(Some((11, 20)), 23), "Hiển thị 11–20 / 23");
        assert_eq!(range_label(None, 0), "Không có bản ghi");
    }
}
