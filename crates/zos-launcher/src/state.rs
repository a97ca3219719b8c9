//! Launcher and workspace states

use serde::{Deserialize, Serialize};

/// Top-level launcher screen
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LauncherState {
    /// Workspace grid is showing
    #[default]
    Workspace,
    /// Apps overlay is showing
    Apps,
    /// Apps overlay with a drag in progress
    AppsSpringLoaded,
    /// Widgets list (not reachable through transitions)
    Widgets,
    /// Widgets list with a drag in progress
    WidgetsSpringLoaded,
}

impl LauncherState {
    /// Check if this state shows the apps overlay
    #[inline]
    pub fn is_overlay(&self) -> bool {
        matches!(self, LauncherState::Apps | LauncherState::AppsSpringLoaded)
    }
}

/// Sub-state of the workspace screen
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkspaceState {
    /// Normal grid
    #[default]
    Normal,
    /// Grid hidden behind the apps overlay
    NormalHidden,
    /// Shrunk grid accepting a drop
    SpringLoaded,
    /// Zoomed-out page overview
    Overview,
}

impl WorkspaceState {
    /// Check if a transition to the workspace may end in this state
    ///
    /// `NormalHidden` is only ever a source: it is the state the workspace
    /// sits in while the overlay covers it.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            WorkspaceState::Normal | WorkspaceState::SpringLoaded | WorkspaceState::Overview
        )
    }
}
