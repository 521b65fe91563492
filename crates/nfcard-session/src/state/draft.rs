//! # Draft State
//!
//! Holds the current [`OrderDraft`] for the session.
//!
//! ## Thread Safety
//! The draft is wrapped in `Arc<Mutex<T>>`: commands from the storefront may
//! arrive concurrently but only one may change the draft at a time. A
//! poisoned lock is recovered, since every draft mutation leaves the draft
//! in a valid state.

use std::sync::{Arc, Mutex, PoisonError};

use nfcard_core::OrderDraft;

/// Shared handle to the current order draft.
#[derive(Debug, Clone, Default)]
pub struct DraftState {
    draft: Arc<Mutex<OrderDraft>>,
}

impl DraftState {
    /// Creates state holding a fresh draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a function with read access to the draft.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let price = draft_state.with_draft(|d| d.price(&prices));
    /// ```
    pub fn with_draft<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&OrderDraft) -> R,
    {
        let draft = self.draft.lock().unwrap_or_else(PoisonError::into_inner);
        f(&draft)
    }

    /// Executes a function with write access to the draft.
    pub fn with_draft_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut OrderDraft) -> R,
    {
        let mut draft = self.draft.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut draft)
    }
}
