//! Persistence and environment helpers for the app shell.

use crate::core::config::{API_BASE_META, resolve_api_base};
use frames_api_models::UserResponse;
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::{document, window};
use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::HtmlMetaElement;

pub(crate) const SESSION_KEY: &str = "frames.session";

/// Session saved by the last login, if it still parses.
pub(crate) fn load_session() -> Option<UserResponse> {
    LocalStorage::get::<UserResponse>(SESSION_KEY).ok()
}

/// Replace the stored session wholesale, or clear it.
pub(crate) fn persist_session(session: Option<&UserResponse>) {
    match session {
        Some(user) => set_storage(SESSION_KEY, user),
        None => delete_storage(SESSION_KEY),
    }
}

fn meta_api_base() -> Option<String> {
    document()
        .query_selector(&format!("meta[name=\"{API_BASE_META}\"]"))
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlMetaElement>().ok())
        .map(|meta| meta.content())
}

pub(crate) fn api_base_url() -> String {
    let location = window().location();
    let protocol = location.protocol().unwrap_or_default();
    let host = location.hostname().unwrap_or_default();
    let port = location.port().unwrap_or_default();
    resolve_api_base(meta_api_base().as_deref(), &protocol, &host, &port)
}

fn set_storage<T: Serialize>(key: &'static str, value: T) {
    if let Err(err) = LocalStorage::set(key, value) {
        log_storage_error("set", key, &err.to_string());
    }
}

fn delete_storage(key: &'static str) {
    LocalStorage::delete(key);
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
