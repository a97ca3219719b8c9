//! Reference apps overlay screen

use std::cell::Cell;
use std::rc::Rc;

use crate::config::TransitionConfig;
use crate::surface::{Surface, SurfaceProperty, Visibility};
use crate::transition::{AnimationListener, CompositeAnimation, Easing, SurfaceAnimator};
use crate::types::{AnimationId, SurfaceId};
use super::OverlayScreen;

/// Surface id used by [`AppsOverlay::attach_new`]
pub const OVERLAY_SURFACE_ID: SurfaceId = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slide {
    Reveal,
    Dismiss,
}

/// Tracks one reveal/dismiss slide on behalf of the overlay
struct SlideListener {
    slide: Slide,
    surface: Surface,
    transitioning: Rc<Cell<bool>>,
    canceled: bool,
}

impl AnimationListener for SlideListener {
    fn on_start(&mut self, _id: AnimationId) {
        self.transitioning.set(true);
        self.surface.set_visibility(Visibility::Visible);
    }

    fn on_cancel(&mut self, _id: AnimationId) {
        self.canceled = true;
    }

    fn on_end(&mut self, _id: AnimationId) {
        self.transitioning.set(false);
        if !self.canceled && self.slide == Slide::Dismiss {
            self.surface.set_visibility(Visibility::Gone);
        }
    }
}

/// Apps overlay sliding up over the workspace
///
/// The overlay is uninitialized until a surface is attached. After
/// [`request_layout`](Self::request_layout) the next reveal or dismiss asks
/// for a deferred start so it animates from post-layout geometry.
pub struct AppsOverlay {
    surface: Option<Surface>,
    shift_px: f32,
    layout_pending: bool,
    transitioning: Rc<Cell<bool>>,
}

impl AppsOverlay {
    /// Create a detached overlay
    pub fn new(config: &TransitionConfig) -> Self {
        Self {
            surface: None,
            shift_px: config.overlay_shift_px,
            layout_pending: false,
            transitioning: Rc::new(Cell::new(false)),
        }
    }

    /// Attach a surface; it starts dismissed and waits for layout
    pub fn attach(&mut self, surface: Surface) {
        surface.set(SurfaceProperty::TranslationY, self.shift_px);
        surface.set(SurfaceProperty::Alpha, 0.0);
        surface.set_visibility(Visibility::Gone);
        self.surface = Some(surface);
        self.layout_pending = true;
    }

    /// Attach a fresh surface with [`OVERLAY_SURFACE_ID`]
    pub fn attach_new(&mut self) -> Surface {
        let surface = Surface::new(OVERLAY_SURFACE_ID);
        self.attach(surface.clone());
        surface
    }

    pub fn detach(&mut self) {
        self.surface = None;
        self.layout_pending = false;
    }

    /// Mark geometry stale until the next layout pass
    pub fn request_layout(&mut self) {
        self.layout_pending = true;
    }

    pub fn is_layout_pending(&self) -> bool {
        self.layout_pending
    }

    fn prepare_slide(
        &mut self,
        slide: Slide,
        composite: &CompositeAnimation,
        duration_ms: f64,
    ) -> bool {
        let surface = match &self.surface {
            Some(s) => s.clone(),
            None => return false,
        };

        let (to_y, to_alpha, easing) = match slide {
            Slide::Reveal => (0.0, 1.0, Easing::Decelerate),
            Slide::Dismiss => (self.shift_px, 0.0, Easing::EaseInCubic),
        };
        composite.play(
            SurfaceAnimator::to(&surface, SurfaceProperty::TranslationY, to_y, duration_ms)
                .with_easing(easing),
        );
        composite.play(
            SurfaceAnimator::to(&surface, SurfaceProperty::Alpha, to_alpha, duration_ms)
                .with_easing(Easing::Linear),
        );
        composite.add_listener(SlideListener {
            slide,
            surface,
            transitioning: self.transitioning.clone(),
            canceled: false,
        });

        // The layout pass runs before the deferred start does
        std::mem::replace(&mut self.layout_pending, false)
    }
}

impl OverlayScreen for AppsOverlay {
    fn surface(&self) -> Option<Surface> {
        self.surface.clone()
    }

    fn is_transitioning(&self) -> bool {
        self.transitioning.get()
    }

    fn prepare_reveal(&mut self, composite: &CompositeAnimation, duration_ms: f64) -> bool {
        self.prepare_slide(Slide::Reveal, composite, duration_ms)
    }

    fn prepare_dismiss(&mut self, composite: &CompositeAnimation, duration_ms: f64) -> bool {
        self.prepare_slide(Slide::Dismiss, composite, duration_ms)
    }

    fn finish_reveal(&mut self) {
        self.transitioning.set(false);
        if let Some(surface) = &self.surface {
            surface.reset_to_identity();
        }
    }

    fn finish_dismiss(&mut self) {
        self.transitioning.set(false);
        if let Some(surface) = &self.surface {
            surface.set(SurfaceProperty::TranslationY, self.shift_px);
            surface.set(SurfaceProperty::Alpha, 0.0);
            surface.set_visibility(Visibility::Gone);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlay() -> (AppsOverlay, Surface) {
        let mut overlay = AppsOverlay::new(&TransitionConfig::default());
        let surface = overlay.attach_new();
        (overlay, surface)
    }

    #[test]
    fn test_detached_overlay_is_uninitialized() {
        let overlay = AppsOverlay::new(&TransitionConfig::default());
        assert!(!overlay.is_initialized());
    }

    #[test]
    fn test_first_prepare_defers_start() {
        let (mut overlay, _) = overlay();

        assert!(overlay.prepare_reveal(&CompositeAnimation::new(), 100.0));
        assert!(!overlay.prepare_reveal(&CompositeAnimation::new(), 100.0));

        overlay.request_layout();
        assert!(overlay.prepare_dismiss(&CompositeAnimation::new(), 100.0));
    }

    #[test]
    fn test_reveal_slides_in() {
        let (mut overlay, surface) = overlay();
        let composite = CompositeAnimation::new();
        overlay.prepare_reveal(&composite, 100.0);
        assert_eq!(composite.child_count(), 2);

        composite.start(0.0);
        assert!(overlay.is_transitioning());
        assert_eq!(surface.visibility(), Visibility::Visible);

        composite.tick(100.0);
        assert!(!overlay.is_transitioning());
        assert!(surface.get(SurfaceProperty::TranslationY).abs() < 0.001);
        assert!((surface.get(SurfaceProperty::Alpha) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_dismiss_hides_on_end() {
        let (mut overlay, surface) = overlay();
        overlay.finish_reveal();

        let composite = CompositeAnimation::new();
        overlay.prepare_dismiss(&composite, 100.0);
        composite.start(0.0);
        composite.tick(150.0);

        assert_eq!(surface.visibility(), Visibility::Gone);
    }

    #[test]
    fn test_canceled_dismiss_stays_visible() {
        let (mut overlay, surface) = overlay();
        overlay.finish_reveal();

        let composite = CompositeAnimation::new();
        overlay.prepare_dismiss(&composite, 100.0);
        composite.start(0.0);
        composite.tick(50.0);
        composite.cancel();

        assert_eq!(surface.visibility(), Visibility::Visible);
        assert!(!overlay.is_transitioning());
    }

    #[test]
    fn test_finish_reveal_and_dismiss() {
        let (mut overlay, surface) = overlay();

        overlay.finish_reveal();
        assert_eq!(surface.visibility(), Visibility::Visible);
        assert!((surface.get(SurfaceProperty::Alpha) - 1.0).abs() < 0.001);

        overlay.finish_dismiss();
        assert_eq!(surface.visibility(), Visibility::Gone);
        assert!((surface.get(SurfaceProperty::TranslationY) - 400.0).abs() < 0.001);
    }
}
