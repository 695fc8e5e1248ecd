//! Ячейка таблицы с суммой в донгах
//!
//! ```text
//! <TableCellMoney value=deal.amount />
//! <TableCellMoney value=contract.total_salary() bold=true />
//! ```

use leptos::prelude::*;
use thaw::*;

use crate::shared::format::format_vnd;

/// Сумма `1.234.567 ₫`, выровненная по правому краю.
/// Отрицательные значения выделяются цветом.
#[component]
pub fn TableCellMoney(
    value: i64,
    /// Жирный шрифт
    #[prop(optional, default = false)]
    bold: bool,
) -> impl IntoView {
    let mut styles = Vec::new();
    if value < 0 {
        styles.push("color: var(--color-error-700)");
    }
    if bold {
        styles.push("font-weight: 600");
    }

    view! {
        <TableCell class="text-right">
            <span style=styles.join("; ")>{format_vnd(value)}</span>
        </TableCell>
    }
}
