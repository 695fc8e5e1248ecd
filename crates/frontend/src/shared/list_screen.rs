//! Реактивная обвязка экрана списка поверх `ListViewState`.
//!
//! Экран держит все записи ресурса, а фильтр, сортировка и страница
//! считаются на клиенте через `ListViewState::project`.

use std::future::Future;

use contracts::shared::api::ApiError;
use contracts::shared::list::{
    splice_remove, splice_replace, ListSnapshot, ListViewState, Record, Searchable, Sortable,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::config::app_config;
use crate::shared::notify::{show_delete_confirm, show_error, show_success};

/// Что открыто в модальном окне экрана
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalTarget {
    Create,
    Edit(String),
}

impl ModalTarget {
    pub fn edit_id(&self) -> Option<String> {
        match self {
            ModalTarget::Create => None,
            ModalTarget::Edit(id) => Some(id.clone()),
        }
    }
}

pub struct ListScreen<T: Send + Sync + 'static> {
    pub view_state: RwSignal<ListViewState>,
    pub records: RwSignal<Vec<T>>,
    pub loading: RwSignal<bool>,
    pub load_error: RwSignal<Option<String>>,
    pub filters_expanded: RwSignal<bool>,
    pub modal: RwSignal<Option<ModalTarget>>,
    /// Подпись записи в уведомлениях ("khách hàng")
    entity: &'static str,
}

impl<T: Send + Sync + 'static> Clone for ListScreen<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListScreen<T> {}

impl<T> ListScreen<T>
where
    T: Record + Searchable + Sortable + Clone + PartialEq + Send + Sync + 'static,
{
    pub fn new(filter_keys: &[&str], default_sort: &str, entity: &'static str) -> Self {
        let page_size = app_config().lists.default_page_size;
        Self {
            view_state: RwSignal::new(ListViewState::new(filter_keys, default_sort, page_size)),
            records: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            load_error: RwSignal::new(None),
            filters_expanded: RwSignal::new(false),
            modal: RwSignal::new(None),
            entity,
        }
    }

    /// Текущая страница со всеми производными значениями
    pub fn snapshot(self) -> Memo<ListSnapshot<T>> {
        let window = app_config().lists.page_window;
        Memo::new(move |_| {
            self.records
                .with(|records| self.view_state.with(|state| state.project(records, window)))
        })
    }

    /// Загружает все записи; отменённый запрос игнорируется
    pub fn load<Fut>(self, fetch: Fut)
    where
        Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
    {
        self.loading.set(true);
        self.load_error.set(None);
        let entity = self.entity;
        spawn_local(async move {
            match fetch.await {
                Ok(records) => {
                    log::debug!("loaded {} {} record(s)", records.len(), entity);
                    self.replace_records(records);
                }
                Err(e) if e.is_cancelled() => return,
                Err(e) => {
                    let message = e.user_message();
                    let _ = self.load_error.try_update(|err| *err = Some(message.clone()));
                    show_error(&format!("Không tải được danh sách {}", entity), &message);
                }
            }
            let _ = self.loading.try_update(|l| *l = false);
        });
    }

    fn replace_records(self, records: Vec<T>) {
        if self.records.try_update(|r| *r = records).is_some() {
            self.sync_total();
        }
    }

    /// Номер страницы остаётся в допустимых пределах после изменения списка
    fn sync_total(self) {
        let window = app_config().lists.page_window;
        let total = self.records.with_untracked(|records| {
            self.view_state
                .with_untracked(|state| state.project(records, window).total_pages)
        });
        let _ = self.view_state.try_update(|s| s.sync_total(total));
    }

    /// Перечитывает одну запись после редактирования
    pub fn refresh_one<Fut>(self, fetch: Fut)
    where
        Fut: Future<Output = Result<T, ApiError>> + 'static,
    {
        let entity = self.entity;
        spawn_local(async move {
            match fetch.await {
                Ok(record) => {
                    let updated = self.records.try_update(|records| {
                        if !splice_replace(records, record.clone()) {
                            records.push(record);
                        }
                    });
                    if updated.is_some() {
                        self.sync_total();
                    }
                }
                Err(e) if e.is_cancelled() => {}
                Err(e) => show_error(&format!("Không tải được {}", entity), &e.user_message()),
            }
        });
    }

    /// Запись по id из загруженного списка
    pub fn find(self, id: &str) -> Option<T> {
        self.records
            .with_untracked(|records| records.iter().find(|r| r.record_id() == id).cloned())
    }

    pub fn remove_local(self, id: &str) {
        let removed = self
            .records
            .try_update(|records| splice_remove(records, id))
            .unwrap_or(false);
        if removed {
            self.sync_total();
        }
    }

    /// Подтверждение, запрос на удаление и локальное удаление строки
    pub fn confirm_delete<Fut>(
        self,
        id: String,
        name: String,
        request: impl FnOnce(String) -> Fut + 'static,
    ) where
        Fut: Future<Output = Result<(), ApiError>> + 'static,
    {
        let entity = self.entity;
        let confirm = show_delete_confirm(
            &format!("Xóa {}", entity),
            &format!("Bạn có chắc muốn xóa \"{}\"? Thao tác này không thể hoàn tác.", name),
        );
        if !confirm.is_confirmed {
            return;
        }

        spawn_local(async move {
            match request(id.clone()).await {
                Ok(()) => {
                    self.remove_local(&id);
                    show_success("Đã xóa", &format!("Đã xóa {} \"{}\"", entity, name));
                }
                Err(e) if e.is_cancelled() => {}
                Err(e) => show_error(&format!("Không xóa được {}", entity), &e.user_message()),
            }
        });
    }

    pub fn set_search(self, term: String) {
        self.view_state.update(|s| s.set_search_term(&term));
    }

    pub fn set_filter(self, key: &'static str, value: String) {
        self.view_state.update(|s| s.set_filter(key, &value));
    }

    pub fn clear_filters(self) {
        self.view_state.update(|s| s.clear_filters());
    }

    pub fn toggle_sort(self, field: String) {
        self.view_state.update(|s| s.toggle_sort(&field));
    }

    pub fn go_to_page(self, page: usize, total_pages: usize) {
        self.view_state.update(|s| s.go_to_page(page, total_pages));
    }

    pub fn set_page_size(self, size: usize) {
        self.view_state.update(|s| s.set_items_per_page(size));
    }

    pub fn search_term(self) -> Signal<String> {
        Signal::derive(move || self.view_state.with(|s| s.search_term().to_string()))
    }

    pub fn filter_value(self, key: &'static str) -> Signal<String> {
        Signal::derive(move || self.view_state.with(|s| s.filter_value(key).to_string()))
    }

    pub fn open_create(self) {
        self.modal.set(Some(ModalTarget::Create));
    }

    pub fn open_edit(self, id: String) {
        self.modal.set(Some(ModalTarget::Edit(id)));
    }

    pub fn close_modal(self) {
        self.modal.set(None);
    }
}
