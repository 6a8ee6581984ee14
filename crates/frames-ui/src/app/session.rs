//! Signed-in account access for pages.

use crate::core::store::AppStore;
use frames_api_models::UserResponse;
use yew::prelude::*;
use yewdux::prelude::use_selector;

/// Signed-in account; pages rendered inside the shell always see `Some`.
#[hook]
pub(crate) fn use_current_user() -> Option<UserResponse> {
    let session = use_selector(|store: &AppStore| store.session.clone());
    (*session).clone()
}
