//! Compositing-layer hints for the surfaces taking part in a transition

use crate::surface::{LayerType, Surface};
use crate::types::AnimationId;
use super::composite::AnimationListener;

/// Surfaces promoted to hardware layers for one composite's lifetime
///
/// Register surfaces while the transition is being built, then hand the set
/// to the composite as a listener. Surfaces are promoted when the composite
/// starts and restored to their previous layer when it ends or is canceled.
#[derive(Debug, Default)]
pub struct LayerHintSet {
    surfaces: Vec<Surface>,
    /// Layer each surface had before promotion
    restored: Vec<LayerType>,
    promoted: bool,
}

impl LayerHintSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a surface; duplicates are ignored
    pub fn add_surface(&mut self, surface: &Surface) {
        if !self.surfaces.contains(surface) {
            self.surfaces.push(surface.clone());
        }
    }

    pub fn contains(&self, surface: &Surface) -> bool {
        self.surfaces.contains(surface)
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    fn promote(&mut self) {
        if self.promoted {
            return;
        }
        self.restored = self.surfaces.iter().map(|s| s.layer()).collect();
        for surface in &self.surfaces {
            surface.set_layer(LayerType::Hardware);
        }
        self.promoted = true;
    }

    fn demote(&mut self) {
        if !self.promoted {
            return;
        }
        for (surface, layer) in self.surfaces.iter().zip(self.restored.drain(..)) {
            surface.set_layer(layer);
        }
        self.promoted = false;
    }
}

impl AnimationListener for LayerHintSet {
    fn on_start(&mut self, _id: AnimationId) {
        self.promote();
    }

    fn on_end(&mut self, _id: AnimationId) {
        self.demote();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::SurfaceProperty;
    use crate::transition::{AnimationPhase, CompositeAnimation, SurfaceAnimator};

    fn composite_with_layers(surface: &Surface) -> CompositeAnimation {
        let mut layers = LayerHintSet::new();
        layers.add_surface(surface);
        layers.add_surface(surface);
        assert_eq!(layers.len(), 1);

        let composite = CompositeAnimation::new();
        composite.play(SurfaceAnimator::to(surface, SurfaceProperty::Alpha, 0.0, 100.0));
        composite.add_listener(layers);
        composite
    }

    #[test]
    fn test_layers_bracket_animation() {
        let surface = Surface::new(1);
        let composite = composite_with_layers(&surface);

        assert_eq!(surface.layer(), LayerType::None);

        composite.start(0.0);
        assert_eq!(surface.layer(), LayerType::Hardware);

        composite.tick(200.0);
        assert_eq!(composite.phase(), AnimationPhase::Ended);
        assert_eq!(surface.layer(), LayerType::None);
    }

    #[test]
    fn test_layers_restored_on_cancel() {
        let surface = Surface::new(1);
        let composite = composite_with_layers(&surface);

        composite.start(0.0);
        composite.cancel();

        assert_eq!(surface.layer(), LayerType::None);
    }

    #[test]
    fn test_cancel_before_start_leaves_layer() {
        let surface = Surface::new(1);
        surface.set_layer(LayerType::Hardware);
        let composite = composite_with_layers(&surface);

        composite.cancel();

        assert_eq!(surface.layer(), LayerType::Hardware);
    }

    #[test]
    fn test_restores_previous_layer() {
        let surface = Surface::new(1);
        surface.set_layer(LayerType::Hardware);
        let composite = composite_with_layers(&surface);

        composite.start(0.0);
        composite.tick(200.0);

        assert_eq!(surface.layer(), LayerType::Hardware);
    }

    #[test]
    fn test_distinct_surfaces_sharing_an_id_are_both_promoted() {
        let a = Surface::new(7);
        let b = Surface::new(7);
        let mut layers = LayerHintSet::new();
        layers.add_surface(&a);
        layers.add_surface(&b);
        assert_eq!(layers.len(), 2);

        let composite = CompositeAnimation::new();
        composite.play(SurfaceAnimator::to(&a, SurfaceProperty::Alpha, 0.0, 100.0));
        composite.add_listener(layers);
        composite.start(0.0);

        assert_eq!(a.layer(), LayerType::Hardware);
        assert_eq!(b.layer(), LayerType::Hardware);

        composite.tick(200.0);
        assert_eq!(b.layer(), LayerType::None);
    }
}
