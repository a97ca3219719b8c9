//! Completion tracking for one transition

use std::rc::Rc;

use crate::screen::ContainerEvents;
use crate::transition::AnimationListener;
use crate::types::AnimationId;
use super::slot::WeakSlot;

/// Callback run when a transition completes
pub type OnComplete = Box<dyn FnOnce()>;

/// Progress of one transition as seen by its completion listener
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionPhase {
    Pending,
    Canceled,
    Completed,
}

/// What an end after cancellation means for a transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CancelPolicy {
    /// Skip completion work if the composite was canceled
    SkipOnCancel,
    /// Complete on any end, canceled or not
    CompleteOnCancel,
}

/// Runs a transition's end-of-life work exactly once
///
/// On end: runs `on_complete`, releases the slot if it still holds this
/// transition, then resets the container timer when one was given.
pub(crate) struct CompletionListener {
    phase: TransitionPhase,
    policy: CancelPolicy,
    on_complete: Option<OnComplete>,
    slot: WeakSlot,
    events: Option<Rc<dyn ContainerEvents>>,
}

impl CompletionListener {
    pub(crate) fn new(policy: CancelPolicy, slot: WeakSlot) -> Self {
        Self {
            phase: TransitionPhase::Pending,
            policy,
            on_complete: None,
            slot,
            events: None,
        }
    }

    pub(crate) fn on_complete(mut self, on_complete: Option<OnComplete>) -> Self {
        self.on_complete = on_complete;
        self
    }

    pub(crate) fn reset_events(mut self, events: Rc<dyn ContainerEvents>) -> Self {
        self.events = Some(events);
        self
    }
}

impl AnimationListener for CompletionListener {
    fn on_cancel(&mut self, _id: AnimationId) {
        if self.phase == TransitionPhase::Pending {
            self.phase = TransitionPhase::Canceled;
        }
    }

    fn on_end(&mut self, id: AnimationId) {
        match (self.phase, self.policy) {
            (TransitionPhase::Completed, _) => return,
            (TransitionPhase::Canceled, CancelPolicy::SkipOnCancel) => return,
            _ => {}
        }
        self.phase = TransitionPhase::Completed;

        if let Some(on_complete) = self.on_complete.take() {
            on_complete();
        }
        // The callback may have started a newer transition
        if let Some(slot) = self.slot.upgrade() {
            slot.clear_if(id);
        }
        if let Some(events) = &self.events {
            events.reset_elapsed_container();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use crate::coordinator::AnimationSlot;
    use crate::transition::CompositeAnimation;

    fn counter() -> (Rc<Cell<u32>>, OnComplete) {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        (count, Box::new(move || c.set(c.get() + 1)))
    }

    #[test]
    fn test_skip_on_cancel() {
        let slot = AnimationSlot::new();
        let composite = CompositeAnimation::new();
        let (count, on_complete) = counter();
        composite.add_listener(
            CompletionListener::new(CancelPolicy::SkipOnCancel, slot.downgrade())
                .on_complete(Some(on_complete)),
        );
        slot.replace(composite.clone());

        composite.cancel();

        assert_eq!(count.get(), 0);
        // Cleanup is skipped too; the coordinator empties the slot itself
        assert!(slot.is_current(composite.id()));
    }

    #[test]
    fn test_complete_on_cancel() {
        let slot = AnimationSlot::new();
        let composite = CompositeAnimation::new();
        let (count, on_complete) = counter();
        composite.add_listener(
            CompletionListener::new(CancelPolicy::CompleteOnCancel, slot.downgrade())
                .on_complete(Some(on_complete)),
        );
        slot.replace(composite.clone());

        composite.cancel();

        assert_eq!(count.get(), 1);
        assert!(slot.is_empty());
    }

    #[test]
    fn test_natural_end_runs_once() {
        let slot = AnimationSlot::new();
        let composite = CompositeAnimation::new();
        let (count, on_complete) = counter();
        let mut listener = CompletionListener::new(CancelPolicy::SkipOnCancel, slot.downgrade())
            .on_complete(Some(on_complete));
        slot.replace(composite.clone());

        listener.on_end(composite.id());
        listener.on_end(composite.id());

        assert_eq!(count.get(), 1);
        assert!(slot.is_empty());
    }

    #[test]
    fn test_end_leaves_newer_animation() {
        let slot = AnimationSlot::new();
        let old = CompositeAnimation::new();
        let newer = CompositeAnimation::new();
        let mut listener = CompletionListener::new(CancelPolicy::SkipOnCancel, slot.downgrade());
        slot.replace(newer.clone());

        listener.on_end(old.id());

        assert!(slot.is_current(newer.id()));
    }

    #[test]
    fn test_resets_events() {
        struct Counting(Cell<u32>);
        impl ContainerEvents for Counting {
            fn reset_elapsed_container(&self) {
                self.0.set(self.0.get() + 1);
            }
        }

        let slot = AnimationSlot::new();
        let events = Rc::new(Counting(Cell::new(0)));
        let mut listener = CompletionListener::new(CancelPolicy::SkipOnCancel, slot.downgrade())
            .reset_events(events.clone());

        listener.on_end(1);

        assert_eq!(events.0.get(), 1);
    }
}
