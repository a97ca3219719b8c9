//! Reference workspace grid screen

use crate::config::TransitionConfig;
use crate::state::WorkspaceState;
use crate::surface::{Surface, SurfaceProperty};
use crate::transition::{Animator, Easing, LayerHintSet, SurfaceAnimator};
use crate::types::SurfaceId;
use super::WorkspaceScreen;

/// Surface id used by [`GridWorkspace::new`]
pub const WORKSPACE_SURFACE_ID: SurfaceId = 1;

/// Resting scale and alpha for a workspace state
#[derive(Clone, Copy, Debug, PartialEq)]
struct StateLook {
    scale: f32,
    alpha: f32,
}

impl StateLook {
    fn of(state: WorkspaceState) -> Self {
        match state {
            WorkspaceState::Normal => Self { scale: 1.0, alpha: 1.0 },
            WorkspaceState::NormalHidden => Self { scale: 1.0, alpha: 0.0 },
            WorkspaceState::SpringLoaded => Self { scale: 0.8, alpha: 1.0 },
            WorkspaceState::Overview => Self { scale: 0.7, alpha: 1.0 },
        }
    }

    fn matches(&self, surface: &Surface) -> bool {
        (surface.get(SurfaceProperty::ScaleX) - self.scale).abs() < f32::EPSILON
            && (surface.get(SurfaceProperty::ScaleY) - self.scale).abs() < f32::EPSILON
            && (surface.get(SurfaceProperty::Alpha) - self.alpha).abs() < f32::EPSILON
    }
}

/// Scales and fades the workspace surface between states
struct WorkspaceStateAnimator {
    parts: Vec<SurfaceAnimator>,
}

impl Animator for WorkspaceStateAnimator {
    fn duration_ms(&self) -> f64 {
        self.parts.iter().map(|p| p.duration_ms()).fold(0.0, f64::max)
    }

    fn set_duration_ms(&mut self, duration_ms: f64) {
        self.parts.iter_mut().for_each(|p| p.set_duration_ms(duration_ms));
    }

    fn on_start(&mut self) {
        self.parts.iter_mut().for_each(|p| p.on_start());
    }

    fn apply(&mut self, fraction: f32) {
        self.parts.iter_mut().for_each(|p| p.apply(fraction));
    }
}

/// Workspace grid backed by a single surface
pub struct GridWorkspace {
    surface: Surface,
    state: WorkspaceState,
    duration_ms: f64,
}

impl GridWorkspace {
    /// Create a workspace in the normal state
    pub fn new(config: &TransitionConfig) -> Self {
        Self::with_surface(Surface::new(WORKSPACE_SURFACE_ID), config)
    }

    pub fn with_surface(surface: Surface, config: &TransitionConfig) -> Self {
        Self {
            surface,
            state: WorkspaceState::Normal,
            duration_ms: config.workspace_state_ms as f64,
        }
    }
}

impl WorkspaceScreen for GridWorkspace {
    fn surface(&self) -> Surface {
        self.surface.clone()
    }

    fn state(&self) -> WorkspaceState {
        self.state
    }

    fn apply_state(&mut self, state: WorkspaceState) {
        let look = StateLook::of(state);
        self.surface.set(SurfaceProperty::ScaleX, look.scale);
        self.surface.set(SurfaceProperty::ScaleY, look.scale);
        self.surface.set(SurfaceProperty::Alpha, look.alpha);
        self.state = state;
    }

    fn state_animation(
        &mut self,
        state: WorkspaceState,
        layers: &mut LayerHintSet,
    ) -> Option<Box<dyn Animator>> {
        self.state = state;

        let look = StateLook::of(state);
        if look.matches(&self.surface) {
            return None;
        }

        layers.add_surface(&self.surface);
        let parts = [
            (SurfaceProperty::ScaleX, look.scale),
            (SurfaceProperty::ScaleY, look.scale),
            (SurfaceProperty::Alpha, look.alpha),
        ]
        .into_iter()
        .map(|(property, to)| {
            SurfaceAnimator::to(&self.surface, property, to, self.duration_ms)
                .with_easing(Easing::EaseInOut)
        })
        .collect();

        Some(Box::new(WorkspaceStateAnimator { parts }))
    }
}
