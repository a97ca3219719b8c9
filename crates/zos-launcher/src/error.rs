//! Error types for launcher transitions
//!
//! Almost every failure in this crate is handled where it happens: an
//! uninitialized screen skips the animation and a superseded start is
//! dropped. The variants here cover the few conditions worth naming.

use crate::state::{LauncherState, WorkspaceState};

/// Errors that can occur in launcher transition operations
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum LauncherError {
    /// A transition to a screen this launcher does not provide was requested.
    ///
    /// This is a programming error and is raised as a panic, never returned.
    #[error("unsupported transition to {target:?}")]
    UnsupportedTransition {
        /// The requested target screen
        target: LauncherState,
    },

    /// A workspace transition targeted a state that is not terminal.
    #[error("unexpected target workspace state: {0:?}")]
    UnexpectedWorkspaceState(WorkspaceState),

    /// A configuration value failed validation.
    #[error("invalid config '{field}': {reason}")]
    InvalidConfig {
        /// Name of the offending field
        field: &'static str,
        /// Why the value was rejected
        reason: &'static str,
    },

    /// Configuration could not be parsed.
    #[error("config error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for LauncherError {
    fn from(e: serde_json::Error) -> Self {
        LauncherError::Config(e.to_string())
    }
}

/// Result type alias for launcher operations
pub type LauncherResult<T> = Result<T, LauncherError>;
