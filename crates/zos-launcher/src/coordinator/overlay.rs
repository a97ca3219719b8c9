//! Transition to the apps overlay

use crate::state::WorkspaceState;
use crate::transition::{CompositeAnimation, LayerHintSet};
use super::{CancelPolicy, TransitionCoordinator};

impl TransitionCoordinator {
    /// Show the apps overlay
    ///
    /// Without animation, or while the overlay is not yet attached, the
    /// overlay is put straight into its revealed resting state.
    pub fn go_to_overlay(&self, animated: bool) {
        let overlay_surface = self.overlay.borrow().surface();
        let initialized = overlay_surface.is_some();
        tracing::debug!(animated, initialized, "transition to overlay");

        self.cancel_current_animation();

        let composite = CompositeAnimation::new();
        let mut layers = LayerHintSet::new();
        self.play_common_transition_animations(
            WorkspaceState::NormalHidden,
            animated,
            initialized,
            &composite,
            &mut layers,
        );

        let surface = match overlay_surface {
            Some(surface) if animated => surface,
            surface => {
                self.overlay.borrow_mut().finish_reveal();
                if let Some(surface) = surface {
                    surface.reset_to_identity();
                }
                self.events.reset_elapsed_container();
                return;
            }
        };

        // Alpha is animated, so give the overlay its own layer
        if self.config.promote_overlay_layer {
            layers.add_surface(&surface);
        }

        let defer = self
            .overlay
            .borrow_mut()
            .prepare_reveal(&composite, self.reveal_duration_ms());
        let completion = self
            .completion(CancelPolicy::SkipOnCancel)
            .reset_events(self.events.clone());

        self.install(composite, layers, completion, Some(surface), defer);
    }
}
