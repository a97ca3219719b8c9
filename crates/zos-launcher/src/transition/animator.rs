//! Sub-animations played inside a composite

use crate::surface::{Surface, SurfaceProperty};
use super::easing::Easing;

/// A sub-animation driven by its owning composite
///
/// The composite computes a linear fraction from the elapsed time and this
/// animator's duration; the animator maps it onto whatever it animates.
pub trait Animator {
    /// Duration of this animator
    fn duration_ms(&self) -> f64;

    /// Override the duration
    fn set_duration_ms(&mut self, duration_ms: f64);

    /// Called once when the owning composite starts
    fn on_start(&mut self) {}

    /// Apply linear progress in `[0, 1]`
    fn apply(&mut self, fraction: f32);
}

/// Animates one property of a surface between two values
pub struct SurfaceAnimator {
    surface: Surface,
    property: SurfaceProperty,
    from: Option<f32>,
    to: f32,
    resolved_from: f32,
    duration_ms: f64,
    easing: Easing,
}

impl SurfaceAnimator {
    /// Animate from the value the property holds at start time
    pub fn to(surface: &Surface, property: SurfaceProperty, to: f32, duration_ms: f64) -> Self {
        let resolved_from = surface.get(property);
        Self {
            surface: surface.clone(),
            property,
            from: None,
            to,
            resolved_from,
            duration_ms,
            easing: Easing::default(),
        }
    }

    /// Animate between explicit values
    pub fn between(
        surface: &Surface,
        property: SurfaceProperty,
        from: f32,
        to: f32,
        duration_ms: f64,
    ) -> Self {
        Self {
            surface: surface.clone(),
            property,
            from: Some(from),
            to,
            resolved_from: from,
            duration_ms,
            easing: Easing::default(),
        }
    }

    /// Use a different easing curve
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn property(&self) -> SurfaceProperty {
        self.property
    }

    pub fn target(&self) -> f32 {
        self.to
    }
}

impl Animator for SurfaceAnimator {
    fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    fn set_duration_ms(&mut self, duration_ms: f64) {
        self.duration_ms = duration_ms.max(0.0);
    }

    fn on_start(&mut self) {
        self.resolved_from = self.from.unwrap_or_else(|| self.surface.get(self.property));
    }

    fn apply(&mut self, fraction: f32) {
        let t = self.easing.apply(fraction);
        let value = self.resolved_from + (self.to - self.resolved_from) * t;
        self.surface.set(self.property, value);
    }
}

/// Plays its steps one after another
///
/// To the composite this is a single animator; the sequencing is internal.
#[derive(Default)]
pub struct SequentialAnimator {
    steps: Vec<Box<dyn Animator>>,
    started: Vec<bool>,
}

impl SequentialAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step
    pub fn then(mut self, step: impl Animator + 'static) -> Self {
        self.steps.push(Box::new(step));
        self.started.push(false);
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl Animator for SequentialAnimator {
    fn duration_ms(&self) -> f64 {
        self.steps.iter().map(|s| s.duration_ms()).sum()
    }

    fn set_duration_ms(&mut self, duration_ms: f64) {
        let total = self.duration_ms();
        let duration_ms = duration_ms.max(0.0);
        for step in self.steps.iter_mut() {
            let share = if total > 0.0 {
                step.duration_ms() / total
            } else {
                0.0
            };
            step.set_duration_ms(duration_ms * share);
        }
    }

    fn on_start(&mut self) {
        self.started.iter_mut().for_each(|s| *s = false);
    }

    fn apply(&mut self, fraction: f32) {
        let total = self.duration_ms();
        let elapsed = total * fraction.clamp(0.0, 1.0) as f64;
        let mut offset = 0.0;

        for (step, started) in self.steps.iter_mut().zip(self.started.iter_mut()) {
            let duration = step.duration_ms();
            // Steps that have not been reached yet keep their current values
            if offset > 0.0 && elapsed <= offset && fraction < 1.0 {
                break;
            }
            if !*started {
                step.on_start();
                *started = true;
            }
            let local = if duration > 0.0 {
                ((elapsed - offset) / duration).clamp(0.0, 1.0) as f32
            } else {
                1.0
            };
            step.apply(local);
            offset += duration;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_animator_interpolates() {
        let surface = Surface::new(1);
        let mut anim = SurfaceAnimator::between(&surface, SurfaceProperty::Alpha, 0.0, 1.0, 100.0)
            .with_easing(Easing::Linear);

        anim.on_start();
        anim.apply(0.25);
        assert!((surface.get(SurfaceProperty::Alpha) - 0.25).abs() < 0.001);

        anim.apply(1.0);
        assert!((surface.get(SurfaceProperty::Alpha) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_surface_animator_resolves_start_value() {
        let surface = Surface::new(1);
        surface.set(SurfaceProperty::TranslationY, 100.0);
        let mut anim = SurfaceAnimator::to(&surface, SurfaceProperty::TranslationY, 0.0, 100.0)
            .with_easing(Easing::Linear);

        // Value moves after construction but before start
        surface.set(SurfaceProperty::TranslationY, 200.0);
        anim.on_start();
        anim.apply(0.5);

        assert!((surface.get(SurfaceProperty::TranslationY) - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_sequential_duration_is_sum() {
        let surface = Surface::new(1);
        let seq = SequentialAnimator::new()
            .then(SurfaceAnimator::between(&surface, SurfaceProperty::ScaleX, 1.0, 0.5, 100.0))
            .then(SurfaceAnimator::between(&surface, SurfaceProperty::ScaleX, 0.5, 1.0, 300.0));

        assert!((seq.duration_ms() - 400.0).abs() < 0.001);
        assert_eq!(seq.len(), 2);
    }

    #[test]
    fn test_sequential_plays_steps_in_order() {
        let surface = Surface::new(1);
        let mut seq = SequentialAnimator::new()
            .then(
                SurfaceAnimator::between(&surface, SurfaceProperty::ScaleX, 1.0, 0.5, 100.0)
                    .with_easing(Easing::Linear),
            )
            .then(
                SurfaceAnimator::between(&surface, SurfaceProperty::ScaleY, 1.0, 0.0, 100.0)
                    .with_easing(Easing::Linear),
            );

        seq.on_start();
        seq.apply(0.25);
        assert!((surface.get(SurfaceProperty::ScaleX) - 0.75).abs() < 0.001);
        assert!((surface.get(SurfaceProperty::ScaleY) - 1.0).abs() < 0.001);

        seq.apply(0.75);
        assert!((surface.get(SurfaceProperty::ScaleX) - 0.5).abs() < 0.001);
        assert!((surface.get(SurfaceProperty::ScaleY) - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_sequential_set_duration_scales_steps() {
        let surface = Surface::new(1);
        let mut seq = SequentialAnimator::new()
            .then(SurfaceAnimator::between(&surface, SurfaceProperty::Alpha, 0.0, 1.0, 100.0))
            .then(SurfaceAnimator::between(&surface, SurfaceProperty::Alpha, 1.0, 0.0, 300.0));

        seq.set_duration_ms(200.0);
        assert!((seq.duration_ms() - 200.0).abs() < 0.001);

        seq.set_duration_ms(0.0);
        assert!(seq.duration_ms().abs() < 0.001);
    }
}
