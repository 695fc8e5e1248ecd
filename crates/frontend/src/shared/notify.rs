//! Уведомления (toast) и подтверждение удаления.
//!
//! `show_success` / `show_error` можно вызывать откуда угодно, в том числе
//! после `await` внутри `spawn_local`: очередь живёт в [`NotificationHost`],
//! смонтированном один раз в корне приложения.

use std::cell::Cell;
use std::collections::VecDeque;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::shared::config::app_config;
use crate::shared::icons::icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    fn class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "toast toast--success",
            NoticeKind::Error => "toast toast--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

/// Ограниченная очередь уведомлений: при переполнении уходит самое старое
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoticeQueue {
    notices: VecDeque<Notice>,
    next_id: u64,
    max_visible: usize,
}

impl NoticeQueue {
    pub fn new(max_visible: usize) -> Self {
        Self {
            notices: VecDeque::new(),
            next_id: 0,
            max_visible: max_visible.max(1),
        }
    }

    pub fn push(&mut self, kind: NoticeKind, title: &str, message: &str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.notices.push_back(Notice {
            id,
            kind,
            title: title.to_string(),
            message: message.to_string(),
        });
        while self.notices.len() > self.max_visible {
            self.notices.pop_front();
        }
        id
    }

    /// `false`, если уведомление уже закрыто или вытеснено
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.notices.len();
        self.notices.retain(|n| n.id != id);
        self.notices.len() != before
    }

    pub fn visible(&self) -> Vec<Notice> {
        self.notices.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

/// Результат диалога подтверждения
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmResult {
    pub is_confirmed: bool,
}

thread_local! {
    static HOST: Cell<Option<RwSignal<NoticeQueue>>> = const { Cell::new(None) };
}

fn push_notice(kind: NoticeKind, title: &str, message: &str) {
    let Some(queue) = HOST.with(Cell::get) else {
        log::warn!("NotificationHost is not mounted: {} {}", title, message);
        return;
    };
    let Some(id) = queue.try_update(|q| q.push(kind, title, message)) else {
        return;
    };

    let dismiss_after = app_config().notifications.dismiss_after_ms;
    Timeout::new(dismiss_after, move || {
        let _ = queue.try_update(|q| q.dismiss(id));
    })
    .forget();
}

pub fn show_success(title: &str, message: &str) {
    push_notice(NoticeKind::Success, title, message);
}

pub fn show_error(title: &str, message: &str) {
    log::error!("{}: {}", title, message);
    push_notice(NoticeKind::Error, title, message);
}

/// Модальное подтверждение браузера
pub fn show_delete_confirm(title: &str, message: &str) -> ConfirmResult {
    let is_confirmed = web_sys::window()
        .and_then(|w| {
            w.confirm_with_message(&format!("{}\n\n{}", title, message))
                .ok()
        })
        .unwrap_or(false);
    ConfirmResult { is_confirmed }
}

/// Контейнер уведомлений; монтируется один раз в `App`
#[component]
pub fn NotificationHost() -> impl IntoView {
    let queue = RwSignal::new(NoticeQueue::new(app_config().notifications.max_visible));
    HOST.with(|host| host.set(Some(queue)));
    on_cleanup(move || HOST.with(|host| host.set(None)));

    view! {
        <div class="toast-container">
            <For
                each=move || queue.get().visible()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div class=notice.kind.class() role="alert">
                            <div class="toast__body">
                                <div class="toast__title">{notice.title}</div>
                                <div class="toast__message">{notice.message}</div>
                            </div>
                            <button
                                class="button button--icon toast__close"
                                on:click=move |_| {
                                    queue.update(|q| {
                                        q.dismiss(id);
                                    });
                                }
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_is_bounded() {
        let mut queue = NoticeQueue::new(2);
        let first = queue.push(NoticeKind::Success, "a", "1");
        queue.push(NoticeKind::Error, "b", "2");
        queue.push(NoticeKind::Success, "c", "3");

        assert_eq!(queue.len(), 2);
        let titles: Vec<_> = queue.visible().into_iter().map(|n| n.title).collect();
        assert_eq!(titles, vec!["b", "c"]);
        // вытесненное уже нельзя закрыть
        assert!(!queue.dismiss(first));
    }

    #[test]
    fn test_dismiss() {
        let mut queue = NoticeQueue::new(5);
        let id = queue.push(NoticeKind::Success, "Đã lưu", "Khách hàng đã được cập nhật");
        assert!(queue.dismiss(id));
        assert!(queue.is_empty());
        assert!(!queue.dismiss(id));
    }

    #[test]
    fn test_ids_are_unique() {
        let mut queue = NoticeQueue::new(1);
        let a = queue.push(NoticeKind::Error, "x", "");
        let b = queue.push(NoticeKind::Error, "x", "");
        assert_ne!(a, b);
    }

    #[test]
    fn test_zero_capacity_keeps_one() {
        let mut queue = NoticeQueue::new(0);
        queue.push(NoticeKind::Success, "a", "");
        assert_eq!(queue.len(), 1);
    }
}
