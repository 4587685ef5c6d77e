//! API utilities for frontend-backend communication
//!
//! Every helper returns [`ApiError`] so pages can render the failure inline
//! without knowing which layer produced it.

use contracts::domain::common::{collection_path, ActivoChange, Entity};
use contracts::shared::error::ApiError;
use contracts::shared::suggestions::{dedupe_suggestions, SuggestionItem};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::config::config;

/// Base URL of the REST backend.
///
/// Taken from configuration; when empty it is built from the current
/// window location using port 3000.
pub fn api_base() -> String {
    let configured = config().api.base.trim_end_matches('/');
    if !configured.is_empty() {
        return configured.to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path starting with "/api/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// URL on the origin serving the `/back/...` suggestion lists
pub fn backup_url(path: &str) -> String {
    let base = config().api.backup_base.trim_end_matches('/');
    if base.is_empty() {
        api_url(path)
    } else {
        format!("{}{}", base, path)
    }
}

async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    log::warn!("{} {} -> {}", status, response.url(), body);
    Err(ApiError::from_response(status, &body))
}

async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
    let response = builder
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    ensure_ok(response).await
}

async fn send_json<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<Response, ApiError> {
    let request = builder
        .json(body)
        .map_err(|e| ApiError::Validation(format!("No se pudo serializar la solicitud: {}", e)))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    ensure_ok(response).await
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// GET an absolute URL and decode the JSON body
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    log::debug!("GET {}", url);
    decode(send(Request::get(url)).await?).await
}

/// GET a URL with a query string built by `serde_qs`
pub async fn get_json_with_query<Q: Serialize, T: DeserializeOwned>(
    url: &str,
    query: &Q,
) -> Result<T, ApiError> {
    let qs = serde_qs::to_string(query)
        .map_err(|e| ApiError::Validation(format!("Parámetros inválidos: {}", e)))?;
    get_json(&format!("{}?{}", url, qs)).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let url = api_url(path);
    log::debug!("POST {}", url);
    decode(send_json(Request::post(&url), body).await?).await
}

/// POST whose response body is ignored
pub async fn post<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let url = api_url(path);
    log::debug!("POST {}", url);
    send_json(Request::post(&url), body).await.map(|_| ())
}

pub async fn put<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let url = api_url(path);
    log::debug!("PUT {}", url);
    send_json(Request::put(&url), body).await.map(|_| ())
}

pub async fn patch<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let url = api_url(path);
    log::debug!("PATCH {}", url);
    send_json(Request::patch(&url), body).await.map(|_| ())
}

pub async fn delete<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let url = api_url(path);
    log::debug!("DELETE {}", url);
    send_json(Request::delete(&url), body).await.map(|_| ())
}

/// `GET /api/<collection>` for any entity
pub async fn fetch_all<T: Entity + DeserializeOwned>() -> Result<Vec<T>, ApiError> {
    get_json(&api_url(&collection_path::<T>())).await
}

/// `GET /api/<collection>/<id>`
pub async fn fetch_by_id<T: Entity + DeserializeOwned>(id: i64) -> Result<T, ApiError> {
    get_json(&api_url(&format!("{}/{}", collection_path::<T>(), id))).await
}

/// Soft delete or restore, returning the change that was applied
pub async fn set_activo<T: Entity>(id: i64, activo: bool) -> Result<ActivoChange, ApiError> {
    let change = ActivoChange::towards(activo);
    patch(&change.path::<T>(), &ActivoChange::body::<T>(id)).await?;
    log::info!("{} {} {}", T::element_name(), id, change.done_label());
    Ok(change)
}

/// Suggestion list from the backup origin, trimmed and de-duplicated
pub async fn fetch_suggestions(path: &str) -> Result<Vec<String>, ApiError> {
    let items: Vec<SuggestionItem> = get_json(&backup_url(path)).await?;
    Ok(dedupe_suggestions(items))
}
