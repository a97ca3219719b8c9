//! Animation primitives for launcher transitions
//!
//! - [`Animator`]: a single sub-animation driven by a fraction in `[0, 1]`
//! - [`CompositeAnimation`]: a group of sub-animations played together with
//!   one start/cancel/end lifecycle
//! - [`LayerHintSet`]: compositing-layer promotion bracketing one composite

mod animator;
mod composite;
pub mod easing;
mod layers;

pub use animator::{Animator, SequentialAnimator, SurfaceAnimator};
pub use composite::{AnimationListener, AnimationPhase, CompositeAnimation};
pub use easing::Easing;
pub use layers::LayerHintSet;
