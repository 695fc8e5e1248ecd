//! Сортируемая ячейка заголовка таблицы
//!
//! ```text
//! <SortableHeaderCell
//!     label="Tên"
//!     field="name"
//!     sort=Signal::derive(move || state.with(|s| s.sort().clone()))
//!     on_sort=Callback::new(move |field: String| state.update(|s| s.toggle_sort(&field)))
//! />
//! ```

use contracts::shared::list::SortState;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Поле для сортировки
    field: &'static str,

    /// Текущая сортировка экрана
    #[prop(into)]
    sort: Signal<SortState>,

    /// Callback при клике на заголовок
    on_sort: Callback<String>,

    /// Минимальная ширина колонки
    #[prop(optional, default = 100.0)]
    min_width: f64,

    /// Выравнивание заголовка (left/right)
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let header_class = if align == "right" {
        "table__sortable-header table__sortable-header--right"
    } else {
        "table__sortable-header"
    };
    let indicator_class = move || {
        if sort.with(|s| s.field == field) {
            "table__sort-indicator table__sort-indicator--active"
        } else {
            "table__sort-indicator"
        }
    };

    view! {
        <TableHeaderCell resizable=true min_width=min_width class="resizable">
            <div class=header_class on:click=move |_| on_sort.run(field.to_string())>
                {label}
                <span class=indicator_class>
                    {move || sort.with(|s| s.indicator(field))}
                </span>
            </div>
        </TableHeaderCell>
    }
}
