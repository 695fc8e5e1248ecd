use contracts::shared::list::ALL;
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Сворачиваемая панель фильтров со счётчиком активных условий
#[component]
pub fn FilterPanel(
    /// Whether the filter panel is expanded
    is_expanded: RwSignal<bool>,

    /// Number of active filters (for badge display)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    /// Сброс поиска и всех фильтров
    on_clear: Callback<()>,

    /// Поиск и пагинация в заголовке панели
    #[prop(into)]
    header_content: ViewFn,

    /// Filter content (form fields)
    children: Children,
) -> impl IntoView {
    let toggle_expanded = move |_| {
        is_expanded.update(|e| *e = !*e);
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div class="filter-panel-header__left" on:click=toggle_expanded>
                    <span class=move || {
                        if is_expanded.get() {
                            "filter-panel__chevron filter-panel__chevron--expanded"
                        } else {
                            "filter-panel__chevron"
                        }
                    }>
                        {icon("chevron-down")}
                    </span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Bộ lọc"</span>
                    <Show when=move || { active_filters_count.get() > 0 }>
                        <span class="badge badge--primary">{move || active_filters_count.get()}</span>
                    </Show>
                </div>
                <div class="filter-panel-header__center">
                    {header_content.run()}
                </div>
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">
                    {children()}
                    <button
                        class="button button--ghost filter-panel__clear"
                        disabled=move || active_filters_count.get() == 0
                        on:click=move |_| on_clear.run(())
                    >
                        "Xóa bộ lọc"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Варианты фильтра с первым пунктом "Tất cả" (`all`)
pub fn filter_options(options: &[(&str, &str)]) -> Vec<(String, String)> {
    std::iter::once((ALL.to_string(), "Tất cả".to_string()))
        .chain(options.iter().map(|(v, l)| (v.to_string(), l.to_string())))
        .collect()
}

/// Один именованный фильтр панели
#[component]
pub fn FilterSelect(
    #[prop(into)]
    label: String,
    /// Текущее значение (`all` значит без фильтра)
    #[prop(into)]
    value: Signal<String>,
    /// Пары (`code`, `label`) без пункта "все"
    options: Vec<(&'static str, &'static str)>,
    on_change: Callback<String>,
) -> impl IntoView {
    let options = filter_options(&options);

    view! {
        <div class="filter-panel__field">
            <label class="form__label">{label}</label>
            <select
                class="form__select"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {options.into_iter().map(|(code, text)| {
                    let selected_code = code.clone();
                    view! {
                        <option value=code selected=move || value.get() == selected_code>
                            {text}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_options_start_with_all() {
        let options = filter_options(&[("active", "Đang hoạt động")]);
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].0, "all");
        assert_eq!(options[1], ("active".to_string(), "Đang hoạt động".to_string()));
    }
}
