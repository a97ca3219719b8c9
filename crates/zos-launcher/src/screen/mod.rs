//! Screens taking part in launcher transitions
//!
//! The coordinator drives two screens through these traits:
//! - [`WorkspaceScreen`]: the workspace grid, present in every transition
//! - [`OverlayScreen`]: the apps overlay, present when revealing or dismissing
//!
//! [`GridWorkspace`] and [`AppsOverlay`] are reference implementations that
//! animate plain [`Surface`]s.

mod overlay;
mod workspace;

pub use overlay::AppsOverlay;
pub use workspace::GridWorkspace;

use crate::state::WorkspaceState;
use crate::surface::Surface;
use crate::transition::{Animator, CompositeAnimation, LayerHintSet};

/// The workspace grid
///
/// Applying a state and animating to it are separate calls: the coordinator
/// uses [`apply_state`](Self::apply_state) whenever it will not animate.
pub trait WorkspaceScreen {
    /// Surface of the whole workspace
    fn surface(&self) -> Surface;

    /// Current logical state
    fn state(&self) -> WorkspaceState;

    /// Jump to `state` synchronously
    fn apply_state(&mut self, state: WorkspaceState);

    /// Build the animation to `state`
    ///
    /// Returns `None` when there is nothing to animate. Surfaces that should
    /// be promoted while animating are added to `layers`.
    fn state_animation(
        &mut self,
        state: WorkspaceState,
        layers: &mut LayerHintSet,
    ) -> Option<Box<dyn Animator>>;
}

/// The apps overlay
pub trait OverlayScreen {
    /// Surface of the overlay, `None` until attached and measured
    fn surface(&self) -> Option<Surface>;

    /// Check if the overlay can be animated
    fn is_initialized(&self) -> bool {
        self.surface().is_some()
    }

    /// Check if a reveal or dismiss is in progress
    fn is_transitioning(&self) -> bool;

    /// Add the reveal animation to `composite`
    ///
    /// Returns true when the start must wait for the next frame's layout.
    fn prepare_reveal(&mut self, composite: &CompositeAnimation, duration_ms: f64) -> bool;

    /// Add the dismiss animation to `composite`
    ///
    /// Returns true when the start must wait for the next frame's layout.
    fn prepare_dismiss(&mut self, composite: &CompositeAnimation, duration_ms: f64) -> bool;

    /// Settle in the fully revealed state without animating
    fn finish_reveal(&mut self);

    /// Settle in the fully dismissed state without animating
    fn finish_dismiss(&mut self);
}

/// User-event bookkeeping touched by transitions
pub trait ContainerEvents {
    /// Restart the "time spent in current container" counter
    fn reset_elapsed_container(&self);
}

/// [`ContainerEvents`] that records nothing
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopContainerEvents;

impl ContainerEvents for NoopContainerEvents {
    fn reset_elapsed_container(&self) {}
}
