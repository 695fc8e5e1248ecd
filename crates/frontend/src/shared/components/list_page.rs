//! Общие части экранов списков: заголовок, панель поиска/фильтров, тело таблицы

use contracts::shared::list::{ListSnapshot, Record, Searchable, SortState, Sortable};
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_screen::ListScreen;
use crate::shared::list_utils::SearchInput;

/// Текст пустой таблицы
pub fn empty_message(loading: bool, has_records: bool, entity: &str) -> String {
    if loading {
        "Đang tải dữ liệu...".to_string()
    } else if !has_records {
        format!("Chưa có {} nào", entity)
    } else {
        "Không tìm thấy kết quả phù hợp".to_string()
    }
}

/// Заголовок со счётчиком и кнопками "Thêm mới" / "Làm mới"
#[component]
pub fn ListPageHeader<T>(
    #[prop(into)] title: String,
    screen: ListScreen<T>,
    snapshot: Memo<ListSnapshot<T>>,
    entity: &'static str,
    on_refresh: Callback<()>,
) -> impl IntoView
where
    T: Record + Searchable + Sortable + Clone + PartialEq + Send + Sync + 'static,
{
    view! {
        <PageHeader
            title=title
            subtitle=Signal::derive(move || format!("{} {}", snapshot.with(|s| s.total_items), entity))
        >
            <Button appearance=ButtonAppearance::Primary on_click=move |_| screen.open_create()>
                {icon("plus")}
                " Thêm mới"
            </Button>
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| on_refresh.run(())
                disabled=Signal::derive(move || screen.loading.get())
            >
                {icon("refresh")}
                {move || if screen.loading.get() { " Đang tải..." } else { " Làm mới" }}
            </Button>
        </PageHeader>
        {move || screen.load_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
    }
}

/// Панель фильтров: поиск и страницы в заголовке, именованные фильтры внутри
#[component]
pub fn ListFilters<T>(
    screen: ListScreen<T>,
    snapshot: Memo<ListSnapshot<T>>,
    #[prop(into)] search_placeholder: String,
    children: Children,
) -> impl IntoView
where
    T: Record + Searchable + Sortable + Clone + PartialEq + Send + Sync + 'static,
{
    let search_term = screen.search_term();
    let on_search = Callback::new(move |term: String| screen.set_search(term));
    let on_page_change = Callback::new(move |page: usize| {
        screen.go_to_page(page, snapshot.with_untracked(|s| s.total_pages))
    });
    let on_page_size_change = Callback::new(move |size: usize| screen.set_page_size(size));

    view! {
        <FilterPanel
            is_expanded=screen.filters_expanded
            active_filters_count=Signal::derive(move || screen.view_state.with(|s| s.active_filter_count()))
            on_clear=Callback::new(move |_| screen.clear_filters())
            header_content=move || {
                let placeholder = search_placeholder.clone();
                view! {
                    <SearchInput value=search_term on_change=on_search placeholder=placeholder />
                    <PaginationControls
                        current_page=Signal::derive(move || snapshot.with(|s| s.current_page))
                        total_pages=Signal::derive(move || snapshot.with(|s| s.total_pages))
                        window=Signal::derive(move || snapshot.with(|s| s.window.clone()))
                        range=Signal::derive(move || snapshot.with(|s| s.range()))
                        total_items=Signal::derive(move || snapshot.with(|s| s.total_items))
                        page_size=Signal::derive(move || snapshot.with(|s| s.items_per_page))
                        on_page_change=on_page_change
                        on_page_size_change=on_page_size_change
                    />
                }
            }
        >
            {children()}
        </FilterPanel>
    }
}

/// Строки текущей страницы или строка "нет данных" на всю ширину
#[component]
pub fn ListTableBody<T, F, IV>(
    screen: ListScreen<T>,
    snapshot: Memo<ListSnapshot<T>>,
    entity: &'static str,
    column_count: usize,
    /// Строка таблицы; второй аргумент: текущий поисковый запрос для подсветки
    render_row: F,
) -> impl IntoView
where
    T: Record + Searchable + Sortable + Clone + PartialEq + Send + Sync + 'static,
    F: Fn(T, String) -> IV + Clone + Send + Sync + 'static,
    IV: IntoView + 'static,
{
    let search_term = screen.search_term();

    view! {
        <TableBody>
            {move || {
                let term = search_term.get();
                let render_row = render_row.clone();
                snapshot.with(|s| {
                    if s.is_empty() {
                        let message = empty_message(
                            screen.loading.get(),
                            screen.records.with(|r| !r.is_empty()),
                            entity,
                        );
                        view! {
                            <tr class="table__empty-row">
                                <td colspan=column_count.to_string()>{message}</td>
                            </tr>
                        }
                        .into_any()
                    } else {
                        s.items
                            .iter()
                            .cloned()
                            .map(|record| render_row(record, term.clone()))
                            .collect_view()
                            .into_any()
                    }
                })
            }}
        </TableBody>
    }
}

/// Текущая сортировка и обработчик клика по заголовку
pub fn sort_bindings<T>(screen: ListScreen<T>) -> (Signal<SortState>, Callback<String>)
where
    T: Record + Searchable + Sortable + Clone + PartialEq + Send + Sync + 'static,
{
    (
        Signal::derive(move || screen.view_state.with(|s| s.sort().clone())),
        Callback::new(move |field: String| screen.toggle_sort(field)),
    )
}

/// Кнопки "Sửa" / "Xóa" в строке
#[component]
pub fn RowActions(on_edit: Callback<()>, on_delete: Callback<()>) -> impl IntoView {
    view! {
        <TableCell>
            <Flex gap=FlexGap::Small>
                <Button
                    appearance=ButtonAppearance::Subtle
                    size=ButtonSize::Small
                    on_click=move |_| on_edit.run(())
                    attr:title="Sửa"
                >
                    {icon("edit")}
                </Button>
                <Button
                    appearance=ButtonAppearance::Subtle
                    size=ButtonSize::Small
                    on_click=move |_| on_delete.run(())
                    attr:title="Xóa"
                >
                    {icon("trash")}
                </Button>
            </Flex>
        </TableCell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_message() {
        assert_eq!(empty_message(true, false, "khách hàng"), "Đang tải dữ liệu...");
        assert_eq!(empty_message(false, false, "khách hàng"), "Chưa có khách hàng nào");
        assert_eq!(
            empty_message(false, true, "khách hàng"),
            "Không tìm thấy kết quả phù hợp"
        );
    }
}
