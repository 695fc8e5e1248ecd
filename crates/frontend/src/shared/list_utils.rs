//! Поиск по списку: поле ввода с задержкой и подсветка совпадений

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::shared::config::app_config;
use crate::shared::icons::icon;

/// Разбивает текст на фрагменты `(текст, совпадает)` для подсветки поиска.
/// Сравнение без учёта регистра, как у фильтра списка.
pub fn highlight_matches(text: &str, term: &str) -> Vec<(String, bool)> {
    if term.is_empty() || text.is_empty() {
        return vec![(text.to_string(), false)];
    }

    // сравнение по char: to_lowercase может менять длину в байтах
    let chars: Vec<char> = text.chars().collect();
    let lower: Vec<char> = chars
        .iter()
        .map(|c| c.to_lowercase().next().unwrap_or(*c))
        .collect();
    let needle: Vec<char> = term
        .chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect();

    let mut parts = Vec::new();
    let mut plain_start = 0;
    let mut i = 0;
    while i + needle.len() <= lower.len() {
        if lower[i..i + needle.len()] == needle[..] {
            if plain_start < i {
                parts.push((chars[plain_start..i].iter().collect(), false));
            }
            parts.push((chars[i..i + needle.len()].iter().collect(), true));
            i += needle.len();
            plain_start = i;
        } else {
            i += 1;
        }
    }
    if plain_start < chars.len() {
        parts.push((chars[plain_start..].iter().collect(), false));
    }
    parts
}

/// Текст ячейки с подсвеченным поисковым запросом
pub fn highlighted(text: String, term: String) -> impl IntoView {
    highlight_matches(&text, &term)
        .into_iter()
        .map(|(part, is_match)| {
            if is_match {
                view! { <mark class="search-highlight">{part}</mark> }.into_any()
            } else {
                view! { <span>{part}</span> }.into_any()
            }
        })
        .collect_view()
}

/// Поле поиска: значение уходит в `on_change` после паузы ввода
/// (`lists.search_debounce_ms`), очистка применяется сразу.
#[component]
pub fn SearchInput(
    /// Применённое значение поиска
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
) -> impl IntoView {
    let (input_value, set_input_value) = signal(value.get_untracked());
    let pending = StoredValue::new_local(None::<Timeout>);
    let delay = app_config().lists.search_debounce_ms;

    // Сброс фильтров снаружи
    Effect::new(move |_| {
        let applied = value.get();
        if applied.is_empty() {
            set_input_value.set(applied);
        }
    });
    on_cleanup(move || {
        let _ = pending.try_update_value(|p| p.take());
    });

    let handle_input = move |new_value: String| {
        set_input_value.set(new_value.clone());
        let timeout = Timeout::new(delay, move || on_change.run(new_value));
        // предыдущий таймер отменяется при drop
        pending.update_value(|p| *p = Some(timeout));
    };

    let clear = move |_| {
        pending.update_value(|p| *p = None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    let placeholder = move || placeholder.get().unwrap_or_else(|| "Tìm kiếm...".to_string());

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class=move || {
                    if value.with(String::is_empty) {
                        "form__input search-input__field"
                    } else {
                        "form__input search-input__field search-input__field--active"
                    }
                }
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="button button--icon search-input__clear" title="Xóa" on:click=clear>
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marked(parts: &[(String, bool)]) -> Vec<&str> {
        parts
            .iter()
            .filter(|(_, m)| *m)
            .map(|(s, _)| s.as_str())
            .collect()
    }

    #[test]
    fn test_highlight_case_insensitive() {
        let parts = highlight_matches("Nguyễn Văn An", "văn");
        assert_eq!(marked(&parts), vec!["Văn"]);
        let joined: String = parts.iter().map(|(s, _)| s.as_str()).collect();
        assert_eq!(joined, "Nguyễn Văn An");
    }

    #[test]
    fn test_highlight_multiple_occurrences() {
        let parts = highlight_matches("an an", "AN");
        assert_eq!(marked(&parts), vec!["an", "an"]);
    }

    #[test]
    fn test_highlight_keeps_typed_spaces() {
        let parts = highlight_matches("An Bình", "an ");
        assert_eq!(marked(&parts), vec!["An "]);
        assert_eq!(marked(&highlight_matches("AnBinh", "an ")), Vec::<&str>::new());
    }

    #[test]
    fn test_no_term_or_no_match() {
        assert_eq!(
            highlight_matches("abc", ""),
            vec![("abc".to_string(), false)]
        );
        assert_eq!(
            highlight_matches("abc", "x"),
            vec![("abc".to_string(), false)]
        );
    }
}
