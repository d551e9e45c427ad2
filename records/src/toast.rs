//! Toast queue model.
//!
//! An ordered, append-only list of notifications. Entries keep insertion
//! order, duplicate messages are not deduplicated, and dismissal is keyed
//! by id so a timer firing after a manual dismissal is a harmless no-op.
//! Timer ownership lives in the UI layer; the queue itself is pure.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use uuid::Uuid;

/// Fixed delay before a toast is auto-dismissed, in milliseconds.
pub const AUTO_DISMISS_MS: u32 = 5_000;

/// Visual category of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    /// Stable lowercase name, used for CSS modifier classes.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

/// One queued notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub kind: ToastKind,
}

/// Insertion-ordered toast queue.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    /// Append a toast and return its id for later dismissal.
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) -> Uuid {
        let id = Uuid::new_v4();
        self.toasts.push(Toast { id, message: message.into(), kind });
        id
    }

    /// Remove a toast by id. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: Uuid) {
        self.toasts.retain(|toast| toast.id != id);
    }

    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
