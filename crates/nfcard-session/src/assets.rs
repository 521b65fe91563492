//! # Logo Asset Release
//!
//! Uploaded logos live outside the draft (an object URL, a temp file, a blob
//! in the host's store). The draft only holds an [`AssetRef`]. When the draft
//! drops a handle, the session hands it to the host's [`AssetReleaser`].
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  upload A ──► upload B ──► remove ──► session dropped                   │
//! │                  │            │                                         │
//! │             release(A)   release(B)      (nothing left to release)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use nfcard_core::AssetRef;

/// Failure reported by the host while freeing an asset.
#[derive(Debug, Error)]
#[error("Failed to release asset {asset}: {reason}")]
pub struct ReleaseError {
    pub asset: AssetRef,
    pub reason: String,
}

impl ReleaseError {
    pub fn new(asset: &AssetRef, reason: impl Into<String>) -> Self {
        ReleaseError {
            asset: asset.clone(),
            reason: reason.into(),
        }
    }
}

/// Frees the storage behind an asset handle.
///
/// Called at most once per handle. Failures are logged by the session and
/// never block the command that triggered the release.
pub trait AssetReleaser: Send + Sync {
    fn release(&self, asset: &AssetRef) -> Result<(), ReleaseError>;
}

/// Releaser for hosts whose assets need no cleanup.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReleaser;

impl AssetReleaser for NoopReleaser {
    fn release(&self, _asset: &AssetRef) -> Result<(), ReleaseError> {
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Records every released handle.
    #[derive(Debug, Clone, Default)]
    pub struct RecordingReleaser {
        released: Arc<Mutex<Vec<AssetRef>>>,
    }

    impl RecordingReleaser {
        pub fn released(&self) -> Vec<AssetRef> {
            self.released.lock().unwrap().clone()
        }
    }

    impl AssetReleaser for RecordingReleaser {
        fn release(&self, asset: &AssetRef) -> Result<(), ReleaseError> {
            self.released.lock().unwrap().push(asset.clone());
            Ok(())
        }
    }

    /// Fails every release.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct FailingReleaser;

    impl AssetReleaser for FailingReleaser {
        fn release(&self, asset: &AssetRef) -> Result<(), ReleaseError> {
            Err(ReleaseError::new(asset, "store unavailable"))
        }
    }
}
