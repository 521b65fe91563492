//! Print preview controls for the session.

use std::sync::{Mutex, PoisonError};

use nfcard_core::PreviewState;

/// Preview controls shared by the preview commands.
#[derive(Debug, Default)]
pub struct PreviewView {
    state: Mutex<PreviewState>,
}

impl PreviewView {
    pub fn new(initial: PreviewState) -> Self {
        PreviewView {
            state: Mutex::new(initial),
        }
    }

    /// Current controls (copied out).
    pub fn current(&self) -> PreviewState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Applies a transition and returns the resulting controls.
    pub fn update<F>(&self, f: F) -> PreviewState
    where
        F: FnOnce(&mut PreviewState),
    {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut state);
        *state
    }
}
