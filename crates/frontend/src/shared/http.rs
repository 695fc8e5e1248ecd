//! REST-клиент справочников.
//!
//! Каждый запрос получает свой `AbortController`: он прерывается по таймауту
//! (`api.request_timeout_ms`) и при размонтировании экрана, которому
//! принадлежит [`RequestScope`].

use std::cell::Cell;
use std::rc::Rc;

use contracts::shared::api::ApiError;
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::AbortController;

use crate::shared::api_utils::{api_url, resource_path};
use crate::shared::config::app_config;

#[derive(Default)]
struct InFlight {
    next_id: u64,
    controllers: Vec<(u64, AbortController)>,
}

/// Набор запросов одного экрана или модального окна
#[derive(Clone, Copy)]
pub struct RequestScope {
    in_flight: StoredValue<InFlight, LocalStorage>,
}

impl RequestScope {
    /// Создаёт scope, привязанный к времени жизни текущего компонента
    pub fn new() -> Self {
        let scope = Self {
            in_flight: StoredValue::new_local(InFlight::default()),
        };
        on_cleanup(move || scope.abort_all());
        scope
    }

    fn register(&self, controller: &AbortController) -> Option<u64> {
        self.in_flight.try_update_value(|state| {
            let id = state.next_id;
            state.next_id += 1;
            state.controllers.push((id, controller.clone()));
            id
        })
    }

    fn finish(&self, id: u64) {
        let _ = self
            .in_flight
            .try_update_value(|state| state.controllers.retain(|(key, _)| *key != id));
    }

    /// Прерывает все незавершённые запросы
    pub fn abort_all(&self) {
        let controllers = self
            .in_flight
            .try_update_value(|state| std::mem::take(&mut state.controllers))
            .unwrap_or_default();
        if !controllers.is_empty() {
            log::debug!("aborting {} in-flight request(s)", controllers.len());
        }
        for (_, controller) in controllers {
            controller.abort();
        }
    }

    /// Выполняет запрос с таймаутом и возможностью отмены
    async fn execute(
        &self,
        method: &'static str,
        path: &str,
        build: impl FnOnce(RequestBuilder) -> Result<Request, ApiError>,
    ) -> Result<String, ApiError> {
        let controller = AbortController::new()
            .map_err(|e| ApiError::Network(format!("AbortController: {:?}", e)))?;
        // Экран уже уничтожен
        let id = self.register(&controller).ok_or(ApiError::Cancelled)?;

        let timed_out = Rc::new(Cell::new(false));
        let timeout_ms = app_config().api.request_timeout_ms;
        let timer = {
            let timed_out = Rc::clone(&timed_out);
            let controller = controller.clone();
            Timeout::new(timeout_ms, move || {
                timed_out.set(true);
                controller.abort();
            })
        };

        log::debug!("{} {}", method, path);
        let signal = controller.signal();
        let url = api_url(path);
        let builder = match method {
            "POST" => Request::post(&url),
            "PUT" => Request::put(&url),
            "DELETE" => Request::delete(&url),
            _ => Request::get(&url),
        }
        .abort_signal(Some(&signal));

        let result = match build(builder) {
            Ok(request) => read_response(request.send().await).await,
            Err(e) => Err(e),
        };

        drop(timer);
        self.finish(id);

        result.map_err(|e| match e {
            ApiError::Network(_) | ApiError::Decode(_) if timed_out.get() => {
                log::warn!("{} {} timed out after {} ms", method, path, timeout_ms);
                ApiError::TimedOut
            }
            ApiError::Network(_) | ApiError::Decode(_) if signal.aborted() => ApiError::Cancelled,
            ApiError::Status { status, ref message } => {
                log::warn!("{} {} -> HTTP {} {:?}", method, path, status, message);
                e
            }
            other => other,
        })
    }
}

async fn read_response(
    response: Result<Response, gloo_net::Error>,
) -> Result<String, ApiError> {
    let response = response.map_err(|e| ApiError::Network(e.to_string()))?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(ApiError::from_status(status, &body));
    }
    Ok(body)
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn json_body<P: Serialize>(builder: RequestBuilder, payload: &P) -> Result<Request, ApiError> {
    builder
        .json(payload)
        .map_err(|e| ApiError::Decode(format!("failed to serialize request: {}", e)))
}

fn no_body(builder: RequestBuilder) -> Result<Request, ApiError> {
    builder
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))
}

/// CRUD-операции одного ресурса `/api/<resource>`
#[derive(Clone, Copy)]
pub struct Resource {
    name: &'static str,
    scope: RequestScope,
}

impl Resource {
    pub fn new(name: &'static str, scope: RequestScope) -> Self {
        Self { name, scope }
    }

    pub async fn list<T: DeserializeOwned>(&self) -> Result<Vec<T>, ApiError> {
        let body = self
            .scope
            .execute("GET", &resource_path(self.name, None), no_body)
            .await?;
        decode(&body)
    }

    pub async fn get<T: DeserializeOwned>(&self, id: &str) -> Result<T, ApiError> {
        let body = self
            .scope
            .execute("GET", &resource_path(self.name, Some(id)), no_body)
            .await?;
        decode(&body)
    }

    /// Ответ сервера не используется: экран перечитывает список
    pub async fn create<P: Serialize>(&self, payload: &P) -> Result<(), ApiError> {
        self.scope
            .execute("POST", &resource_path(self.name, None), |b| {
                json_body(b, payload)
            })
            .await
            .map(|_| ())
    }

    pub async fn update<P: Serialize>(&self, id: &str, payload: &P) -> Result<(), ApiError> {
        self.scope
            .execute("PUT", &resource_path(self.name, Some(id)), |b| {
                json_body(b, payload)
            })
            .await
            .map(|_| ())
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.scope
            .execute("DELETE", &resource_path(self.name, Some(id)), no_body)
            .await
            .map(|_| ())
    }
}
