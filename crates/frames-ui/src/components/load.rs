//! Fetch lifecycle shared by the data pages.

use crate::components::atoms::EmptyState;
use crate::core::errors::ApiError;
use yew::prelude::*;

/// One remote resource as a page sees it.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Load<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Load<T> {
    /// Map a finished request, using `fallback` for transport failures.
    pub(crate) fn from_result(result: Result<T, ApiError>, fallback: &str) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(err) => Self::Failed(err.user_message(fallback)),
        }
    }

    pub(crate) const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Loading | Self::Failed(_) => None,
        }
    }
}

/// Spinner, error banner or the rendered value.
pub(crate) fn render_load<T>(load: &Load<T>, render: impl FnOnce(&T) -> Html) -> Html {
    match load {
        Load::Loading => html! {
            <div class="flex justify-center p-8">
                <span class="loading loading-spinner loading-lg" aria-label="Loading"></span>
            </div>
        },
        Load::Failed(message) => html! {
            <EmptyState message={message.clone()} icon="fas fa-triangle-exclamation" error=true />
        },
        Load::Ready(value) => render(value),
    }
}
