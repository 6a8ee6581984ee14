//! App-wide yewdux store.
//!
//! # Design
//! - One store holds the signed-in session, notification read marks and the toast queue.
//! - Pages keep fetched data in local state; only cross-page state lives here.

use frames_api_models::UserResponse;
use yewdux::store::Store;

use crate::core::config::MAX_TOASTS;
use crate::core::notifications::ReadMarks;

/// Toast severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// Informational.
    Info,
    /// Completed action.
    Success,
    /// Failed action.
    Error,
}

impl ToastKind {
    /// Alert style suffix.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Info => "alert-info",
            Self::Success => "alert-success",
            Self::Error => "alert-error",
        }
    }
}

/// Transient message shown in the corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic id used to dismiss it.
    pub id: u64,
    /// Severity.
    pub kind: ToastKind,
    /// Text.
    pub message: String,
}

/// Global application store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Store)]
pub struct AppStore {
    /// Signed-in user, restored from local storage on boot.
    pub session: Option<UserResponse>,
    /// Notifications opened in this session.
    pub read_marks: ReadMarks,
    /// Visible toasts, oldest first.
    pub toasts: Vec<Toast>,
    next_toast_id: u64,
}

impl AppStore {
    /// Queue a toast, dropping the oldest beyond [`MAX_TOASTS`]. Returns its id.
    pub fn push_toast(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_toast_id += 1;
        let id = self.next_toast_id;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        if self.toasts.len() > MAX_TOASTS {
            let overflow = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(..overflow);
        }
        id
    }

    /// Remove a toast by id.
    pub fn dismiss_toast(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    /// Forget the signed-in user and everything tied to them.
    pub fn sign_out(&mut self) {
        self.session = None;
        self.read_marks = ReadMarks::default();
    }

    /// Mark the signed-in user's face as enrolled.
    pub fn mark_face_registered(&mut self) {
        if let Some(user) = self.session.as_mut() {
            user.face_registered = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_queue_keeps_newest() {
        let mut store = AppStore::default();
        for index in 0..6 {
            store.push_toast(ToastKind::Info, format!("toast {index}"));
        }
        assert_eq!(store.toasts.len(), MAX_TOASTS);
        assert_eq!(store.toasts[0].message, "toast 2");
        let last = store.toasts[MAX_TOASTS - 1].id;
        store.dismiss_toast(last);
        assert_eq!(store.toasts.len(), MAX_TOASTS - 1);
    }

    #[test]
    fn face_flag_needs_session() {
        let mut store = AppStore::default();
        store.mark_face_registered();
        assert!(store.session.is_none());
    }

    #[test]
    fn sign_out_clears_read_marks() {
        let mut store = AppStore::default();
        store.read_marks.mark("7");
        store.sign_out();
        assert_eq!(store.read_marks, ReadMarks::default());
    }
}
