//! Transition coordinator owning the single active animation
//!
//! This module is split into focused submodules:
//! - `slot`: The active-animation slot and its weak handle
//! - `completion`: Cancel-aware completion listener
//! - `deferred`: Start-on-next-frame with supersession check
//! - `overlay`: Transition to the apps overlay
//! - `workspace`: Transitions to workspace states

mod completion;
mod deferred;
mod overlay;
mod slot;
mod workspace;

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::TransitionConfig;
use crate::error::LauncherResult;
use crate::looper::Looper;
use crate::screen::{ContainerEvents, OverlayScreen, WorkspaceScreen};
use crate::state::WorkspaceState;
use crate::surface::Surface;
use crate::transition::{CompositeAnimation, LayerHintSet};
use crate::types::AnimationId;

pub use completion::{OnComplete, TransitionPhase};
pub use slot::AnimationSlot;

use completion::{CancelPolicy, CompletionListener};
use deferred::DeferredStart;

/// Coordinates transitions between the workspace and the apps overlay
///
/// Every request first cancels whatever animation is in flight, so at most
/// one composite is ever active. All methods take `&self`; completion
/// callbacks may call back into the coordinator.
pub struct TransitionCoordinator {
    config: TransitionConfig,
    workspace: Rc<RefCell<dyn WorkspaceScreen>>,
    overlay: Rc<RefCell<dyn OverlayScreen>>,
    looper: Rc<Looper>,
    events: Rc<dyn ContainerEvents>,
    slot: AnimationSlot,
}

impl TransitionCoordinator {
    /// Create a coordinator, rejecting an invalid `config`
    pub fn new(
        config: TransitionConfig,
        workspace: Rc<RefCell<dyn WorkspaceScreen>>,
        overlay: Rc<RefCell<dyn OverlayScreen>>,
        looper: Rc<Looper>,
        events: Rc<dyn ContainerEvents>,
    ) -> LauncherResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            workspace,
            overlay,
            looper,
            events,
            slot: AnimationSlot::new(),
        })
    }

    pub fn config(&self) -> &TransitionConfig {
        &self.config
    }

    /// Check if a transition owns the slot (started or waiting to start)
    pub fn is_animating(&self) -> bool {
        !self.slot.is_empty()
    }

    pub fn active_animation_id(&self) -> Option<AnimationId> {
        self.slot.current_id()
    }

    /// Handle to the active composite
    pub fn active_animation(&self) -> Option<CompositeAnimation> {
        self.slot.get()
    }

    /// Advance the active composite, returns true while a transition is active
    pub fn tick(&self, now_ms: f64) -> bool {
        if let Some(composite) = self.slot.get() {
            composite.tick(now_ms);
        }
        self.is_animating()
    }

    /// Cancel the in-flight animation, if any
    ///
    /// The slot is emptied before cancel listeners run. Calling this with
    /// nothing active does nothing.
    pub fn cancel_current_animation(&self) {
        let Some(composite) = self.slot.take() else {
            return;
        };
        tracing::debug!(id = composite.id(), "canceling current transition");
        composite.set_duration_ms(0.0);
        composite.cancel();
    }

    fn reveal_duration_ms(&self) -> f64 {
        self.config.overlay_slide_reveal_ms as f64
    }

    /// Workspace side shared by every transition
    ///
    /// Animates when both `animated` and `initialized` hold, otherwise the
    /// workspace jumps straight to `state`.
    fn play_common_transition_animations(
        &self,
        state: WorkspaceState,
        animated: bool,
        initialized: bool,
        composite: &CompositeAnimation,
        layers: &mut LayerHintSet,
    ) {
        let mut workspace = self.workspace.borrow_mut();
        if animated && initialized {
            if let Some(animator) = workspace.state_animation(state, layers) {
                composite.play_boxed(animator);
            }
        } else {
            workspace.apply_state(state);
        }
    }

    /// Make `composite` the active animation and schedule its start
    ///
    /// `completion` is registered last, so layers are restored and every
    /// other listener has seen the end before any completion callback runs.
    fn install(
        &self,
        composite: CompositeAnimation,
        layers: LayerHintSet,
        completion: CompletionListener,
        focus: Option<Surface>,
        defer: bool,
    ) {
        composite.add_listener(layers);
        composite.add_listener(completion);
        let start = DeferredStart::new(&composite, focus, &self.slot);

        // A completion callback run during our own cancel may have installed one
        if let Some(previous) = self.slot.replace(composite) {
            tracing::debug!(id = previous.id(), "canceling transition installed during cancel");
            previous.set_duration_ms(0.0);
            previous.cancel();
        }

        start.schedule(&self.looper, defer);
    }

    fn completion(&self, policy: CancelPolicy) -> CompletionListener {
        CompletionListener::new(policy, self.slot.downgrade())
    }
}
