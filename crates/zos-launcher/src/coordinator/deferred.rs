//! Deferred start of a built composite

use crate::looper::Looper;
use crate::surface::Surface;
use crate::transition::CompositeAnimation;
use crate::types::AnimationId;
use super::slot::{AnimationSlot, WeakSlot};

/// Starts a composite later, provided it is still the active one
///
/// Holds only the composite's id, never the composite itself: by the time
/// it runs, a newer request may have replaced the slot's contents.
pub(crate) struct DeferredStart {
    id: AnimationId,
    focus: Option<Surface>,
    slot: WeakSlot,
}

impl DeferredStart {
    pub(crate) fn new(composite: &CompositeAnimation, focus: Option<Surface>, slot: &AnimationSlot) -> Self {
        Self {
            id: composite.id(),
            focus,
            slot: slot.downgrade(),
        }
    }

    /// Post to the next frame, or run right away
    pub(crate) fn schedule(self, looper: &Looper, defer: bool) {
        if defer {
            tracing::debug!(id = self.id, "deferring transition start to next frame");
            looper.post(move |now_ms| self.run(now_ms));
        } else {
            self.run(looper.now_ms());
        }
    }

    /// Focus the target and start, unless superseded
    pub(crate) fn run(self, now_ms: f64) {
        let composite = match self.slot.upgrade().and_then(|slot| slot.get()) {
            Some(composite) if composite.id() == self.id => composite,
            _ => {
                tracing::trace!(id = self.id, "dropping superseded transition start");
                return;
            }
        };

        if let Some(surface) = &self.focus {
            surface.request_focus();
        }
        tracing::debug!(id = self.id, now_ms, "starting transition");
        composite.start(now_ms);
    }
}
