//! Reactive wrapper around the toast queue.

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

use leptos::prelude::*;
use records::toast::{Toast, ToastKind, ToastQueue};
use uuid::Uuid;

/// Shared toast store, provided via context from `App`.
///
/// Pushing returns the toast id; the toast host owns the auto-dismiss
/// timers so this store stays pure enough to test without a browser.
#[derive(Clone, Copy)]
pub struct ToastStore {
    queue: RwSignal<ToastQueue>,
}

impl ToastStore {
    #[must_use]
    pub fn new() -> Self {
        Self { queue: RwSignal::new(ToastQueue::default()) }
    }

    pub fn push(&self, message: impl Into<String>, kind: ToastKind) -> Uuid {
        let mut id = Uuid::nil();
        self.queue.update(|queue| id = queue.push(message, kind));
        id
    }

    pub fn success(&self, message: impl Into<String>) -> Uuid {
        self.push(message, ToastKind::Success)
    }

    pub fn error(&self, message: impl Into<String>) -> Uuid {
        self.push(message, ToastKind::Error)
    }

    pub fn info(&self, message: impl Into<String>) -> Uuid {
        self.push(message, ToastKind::Info)
    }

    pub fn dismiss(&self, id: Uuid) {
        self.queue.update(|queue| queue.dismiss(id));
    }

    /// Tracked snapshot of the queue, in insertion order.
    #[must_use]
    pub fn toasts(&self) -> Vec<Toast> {
        self.queue.with(|queue| queue.toasts().to_vec())
    }

    /// Untracked snapshot, for tests and event handlers.
    #[must_use]
    pub fn toasts_untracked(&self) -> Vec<Toast> {
        self.queue.with_untracked(|queue| queue.toasts().to_vec())
    }
}

impl Default for ToastStore {
    fn default() -> Self {
        Self::new()
    }
}
