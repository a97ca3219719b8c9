//! Transitions to workspace states

use crate::error::LauncherError;
use crate::state::{LauncherState, WorkspaceState};
use crate::surface::Visibility;
use crate::transition::{CompositeAnimation, LayerHintSet};
use super::{CancelPolicy, OnComplete, TransitionCoordinator};

impl TransitionCoordinator {
    /// Show the workspace in `to_workspace_state`
    ///
    /// Coming from the overlay (or while the overlay is still sliding) the
    /// overlay is dismissed alongside the workspace animation; otherwise only
    /// the workspace changes state. `on_complete` runs at most once.
    pub fn go_to_workspace(
        &self,
        from_state: LauncherState,
        from_workspace_state: WorkspaceState,
        to_workspace_state: WorkspaceState,
        animated: bool,
        on_complete: Option<OnComplete>,
    ) {
        if !to_workspace_state.is_terminal() {
            tracing::error!(
                error = %LauncherError::UnexpectedWorkspaceState(to_workspace_state),
                ?from_state,
                "unexpected call to go_to_workspace"
            );
        }

        let from_overlay = from_state.is_overlay() || self.overlay.borrow().is_transitioning();
        tracing::debug!(
            ?from_state,
            ?from_workspace_state,
            ?to_workspace_state,
            animated,
            from_overlay,
            "transition to workspace"
        );

        if from_overlay {
            self.workspace_from_overlay(from_workspace_state, to_workspace_state, animated, on_complete);
        } else {
            self.workspace_between_states(to_workspace_state, animated, on_complete);
        }
    }

    /// Transitions to the widgets list are not supported
    ///
    /// # Panics
    ///
    /// Always. Requesting this transition is a programming error.
    pub fn go_to_widgets(&self, _animated: bool) -> ! {
        panic!(
            "{}",
            LauncherError::UnsupportedTransition {
                target: LauncherState::Widgets,
            }
        );
    }

    fn workspace_from_overlay(
        &self,
        from_workspace_state: WorkspaceState,
        to_workspace_state: WorkspaceState,
        animated: bool,
        on_complete: Option<OnComplete>,
    ) {
        let overlay_surface = self.overlay.borrow().surface();
        let initialized = overlay_surface.is_some();

        self.cancel_current_animation();

        let composite = CompositeAnimation::new();
        let mut layers = LayerHintSet::new();
        self.play_common_transition_animations(
            to_workspace_state,
            animated,
            initialized,
            &composite,
            &mut layers,
        );

        if !animated || !initialized {
            if from_workspace_state == WorkspaceState::NormalHidden {
                self.overlay.borrow_mut().finish_dismiss();
            }
            if let Some(surface) = overlay_surface {
                surface.set_visibility(Visibility::Gone);
            }
            self.events.reset_elapsed_container();

            if let Some(on_complete) = on_complete {
                on_complete();
            }
            return;
        }

        // Alpha is animated, so give the workspace its own layer
        let workspace_surface = self.workspace.borrow().surface();
        layers.add_surface(&workspace_surface);

        let defer = self
            .overlay
            .borrow_mut()
            .prepare_dismiss(&composite, self.reveal_duration_ms());
        let completion = self
            .completion(CancelPolicy::SkipOnCancel)
            .on_complete(on_complete)
            .reset_events(self.events.clone());

        self.install(composite, layers, completion, Some(workspace_surface), defer);
    }

    /// Workspace state change, e.g. normal to overview
    ///
    /// The animated path completes on any end, canceled or not: the target
    /// state was already recorded when the animation was built.
    fn workspace_between_states(
        &self,
        to_workspace_state: WorkspaceState,
        animated: bool,
        on_complete: Option<OnComplete>,
    ) {
        self.cancel_current_animation();

        let composite = CompositeAnimation::new();
        let mut layers = LayerHintSet::new();
        self.play_common_transition_animations(
            to_workspace_state,
            animated,
            animated,
            &composite,
            &mut layers,
        );
        self.events.reset_elapsed_container();

        if animated {
            let completion = self
                .completion(CancelPolicy::CompleteOnCancel)
                .on_complete(on_complete);
            self.install(composite, layers, completion, None, true);
        } else if let Some(on_complete) = on_complete {
            on_complete();
        }
    }
}
