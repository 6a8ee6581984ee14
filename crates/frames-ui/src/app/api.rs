//! API client context for sharing a singleton client instance.
//!
//! # Design
//! - Create exactly one API client per app boot.
//! - Pages reach it through [`use_api`] instead of threading props.

use crate::app::preferences::api_base_url;
use crate::services::api::ApiClient;
use std::rc::Rc;
use yew::prelude::*;

/// Shared API client context for UI services.
#[derive(Clone)]
pub(crate) struct ApiCtx {
    /// Singleton API client instance.
    pub client: Rc<ApiClient>,
}

impl ApiCtx {
    /// Create a new context with the configured base URL.
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Rc::new(ApiClient::new(base_url)),
        }
    }
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}

/// The app's API client; builds one from the page location outside a provider.
#[hook]
pub(crate) fn use_api() -> Rc<ApiClient> {
    use_context::<ApiCtx>().map_or_else(
        || Rc::new(ApiClient::new(api_base_url())),
        |ctx| ctx.client,
    )
}
