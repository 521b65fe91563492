//! # Configurator Session
//!
//! One buyer's configuration flow: the draft, the preview controls, the
//! loaded configuration, and the host's asset releaser.
//!
//! ## Dispatch Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  dispatch(cmd)                                                          │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  DraftState lock ──► OrderDraft::apply(cmd) ──► CommandOutcome          │
//! │     │ (lock released)                                │                  │
//! │     ▼                                                ▼                  │
//! │  snapshot returned                        releaser.release(handle)      │
//! │                                           (failure: warn!, continue)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Dropping the session releases whatever logo the draft still holds.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, warn};

use nfcard_core::{AssetRef, DraftCommand, OrderDraft, PriceList};

use crate::assets::{AssetReleaser, NoopReleaser};
use crate::config::ConfiguratorConfig;
use crate::error::ApiError;
use crate::state::{DraftState, PreviewView};

pub struct ConfiguratorSession {
    config: ConfiguratorConfig,
    prices: PriceList,
    draft: DraftState,
    preview: PreviewView,
    releaser: Arc<dyn AssetReleaser>,
}

impl ConfiguratorSession {
    /// Creates a session with a fresh draft.
    ///
    /// `config` is expected to have passed [`ConfiguratorConfig::validate`].
    pub fn new(config: ConfiguratorConfig, releaser: Arc<dyn AssetReleaser>) -> Self {
        let prices = config.price_list();
        let preview = PreviewView::new(config.preview.initial_state());
        debug!(currency = %config.currency.code, "Configurator session started");

        ConfiguratorSession {
            config,
            prices,
            draft: DraftState::new(),
            preview,
            releaser,
        }
    }

    /// Creates a session after checking `config`.
    ///
    /// ## Errors
    /// - `CONFIG_ERROR` for an invalid price list or any other bad setting
    pub fn try_new(
        config: ConfiguratorConfig,
        releaser: Arc<dyn AssetReleaser>,
    ) -> Result<Self, ApiError> {
        config.price_list().validate()?;
        config.validate()?;
        Ok(Self::new(config, releaser))
    }

    /// Loads configuration (file, then `NFCARD_*` env) and starts a session.
    ///
    /// ## Errors
    /// - `CONFIG_ERROR` when the file cannot be read or parsed, or fails
    ///   validation
    pub fn open(
        config_path: Option<PathBuf>,
        releaser: Arc<dyn AssetReleaser>,
    ) -> Result<Self, ApiError> {
        let config = ConfiguratorConfig::load(config_path)?;
        Self::try_new(config, releaser)
    }

    /// Session with default configuration and no asset cleanup.
    pub fn with_defaults() -> Self {
        Self::new(ConfiguratorConfig::default(), Arc::new(NoopReleaser))
    }

    pub fn config(&self) -> &ConfiguratorConfig {
        &self.config
    }

    pub fn prices(&self) -> &PriceList {
        &self.prices
    }

    pub fn draft(&self) -> &DraftState {
        &self.draft
    }

    pub fn preview(&self) -> &PreviewView {
        &self.preview
    }

    /// Applies a command to the draft and returns a snapshot of the result.
    ///
    /// A handle the draft dropped is released after the lock is released.
    pub fn dispatch(&self, command: DraftCommand) -> OrderDraft {
        let name = command.name();
        let (outcome, snapshot) = self.draft.with_draft_mut(|draft| {
            let outcome = draft.apply(command);
            (outcome, draft.clone())
        });
        debug!(command = name, dragging = snapshot.is_dragging(), "Draft command applied");

        if let Some(asset) = outcome.released {
            self.release(&asset);
        }

        snapshot
    }

    fn release(&self, asset: &AssetRef) {
        match self.releaser.release(asset) {
            Ok(()) => debug!(asset = %asset, "Logo asset released"),
            Err(e) => warn!(error = %e, "Logo asset release failed"),
        }
    }
}

impl Drop for ConfiguratorSession {
    fn drop(&mut self) {
        if let Some(asset) = self.draft.with_draft_mut(OrderDraft::take_asset) {
            self.release(&asset);
        }
    }
}

impl std::fmt::Debug for ConfiguratorSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfiguratorSession")
            .field("config", &self.config)
            .field("draft", &self.draft)
            .field("preview", &self.preview)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::testing::{FailingReleaser, RecordingReleaser};
    use crate::error::ErrorCode;
    use std::io::Write;

    fn recording_session() -> (ConfiguratorSession, RecordingReleaser) {
        let releaser = RecordingReleaser::default();
        let session = ConfiguratorSession::new(ConfiguratorConfig::default(), Arc::new(releaser.clone()));
        (session, releaser)
    }

    #[test]
    fn test_replaced_logo_released_once() {
        let (session, releaser) = recording_session();
        let a = AssetRef::new("a");
        let b = AssetRef::new("b");

        session.dispatch(DraftCommand::UploadLogo { asset: a.clone() });
        session.dispatch(DraftCommand::UploadLogo { asset: a.clone() });
        assert!(releaser.released().is_empty());

        session.dispatch(DraftCommand::UploadLogo { asset: b.clone() });
        session.dispatch(DraftCommand::RemoveLogo);
        session.dispatch(DraftCommand::RemoveLogo);
        assert_eq!(releaser.released(), vec![a.clone(), b.clone()]);

        drop(session);

        assert_eq!(releaser.released(), vec![a, b]);
    }

    #[test]
    fn test_drop_releases_held_logo() {
        let (session, releaser) = recording_session();
        session.dispatch(DraftCommand::UploadLogo {
            asset: AssetRef::new("kept"),
        });

        drop(session);

        assert_eq!(releaser.released(), vec![AssetRef::new("kept")]);
    }

    #[test]
    fn test_release_failure_does_not_block_command() {
        let session = ConfiguratorSession::new(ConfiguratorConfig::default(), Arc::new(FailingReleaser));
        session.dispatch(DraftCommand::UploadLogo {
            asset: AssetRef::new("a"),
        });

        let snapshot = session.dispatch(DraftCommand::RemoveLogo);

        assert!(!snapshot.layout().has_logo());
    }

    #[test]
    fn test_preview_starts_from_config() {
        let mut config = ConfiguratorConfig::default();
        config.preview.default_zoom = 1.5;
        config.preview.show_bleed = true;

        let session = ConfiguratorSession::new(config, Arc::new(NoopReleaser));

        assert_eq!(session.preview().current().zoom(), 1.5);
        assert!(session.preview().current().show_bleed());
    }

    #[test]
    fn test_try_new_rejects_invalid_config() {
        let mut config = ConfiguratorConfig::default();
        config.pricing.standard_unit_cents = 6000;
        let err = ConfiguratorSession::try_new(config, Arc::new(NoopReleaser)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigError);
        assert!(err.message.starts_with("Invalid price list"));

        let mut config = ConfiguratorConfig::default();
        config.currency.code = "euro".into();
        let err = ConfiguratorSession::try_new(config, Arc::new(NoopReleaser)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigError);
        assert!(err.message.contains("currency code"));

        assert!(ConfiguratorSession::try_new(ConfiguratorConfig::default(), Arc::new(NoopReleaser)).is_ok());
    }

    #[test]
    fn test_open_surfaces_unreadable_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[pricing\nstandard_unit_cents = ").unwrap();

        let err = ConfiguratorSession::open(Some(file.path().to_path_buf()), Arc::new(NoopReleaser))
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ConfigError);
        assert!(err.message.starts_with("Failed to load config"));
    }
}
