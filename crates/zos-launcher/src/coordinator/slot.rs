//! The single active-animation slot

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::transition::CompositeAnimation;
use crate::types::AnimationId;

/// Holds the one composite animation currently owned by the coordinator
///
/// Clones share the same slot. Closures that outlive the request which
/// created them keep a [`WeakSlot`] plus the id of their animation, and
/// re-check [`is_current`](Self::is_current) before acting.
#[derive(Clone, Default)]
pub struct AnimationSlot {
    current: Rc<RefCell<Option<CompositeAnimation>>>,
}

impl AnimationSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the active composite, if any
    pub fn get(&self) -> Option<CompositeAnimation> {
        self.current.borrow().clone()
    }

    pub fn current_id(&self) -> Option<AnimationId> {
        self.current.borrow().as_ref().map(|a| a.id())
    }

    /// Check if `id` is still the active composite
    pub fn is_current(&self, id: AnimationId) -> bool {
        self.current_id() == Some(id)
    }

    pub fn is_empty(&self) -> bool {
        self.current.borrow().is_none()
    }

    /// Store `animation`, returning whatever was there before
    pub fn replace(&self, animation: CompositeAnimation) -> Option<CompositeAnimation> {
        self.current.borrow_mut().replace(animation)
    }

    /// Empty the slot, returning its composite
    pub fn take(&self) -> Option<CompositeAnimation> {
        self.current.borrow_mut().take()
    }

    /// Empty the slot only if it still holds `id`
    pub fn clear_if(&self, id: AnimationId) -> bool {
        let mut current = self.current.borrow_mut();
        if current.as_ref().map(|a| a.id()) == Some(id) {
            *current = None;
            true
        } else {
            false
        }
    }

    pub(crate) fn downgrade(&self) -> WeakSlot {
        WeakSlot(Rc::downgrade(&self.current))
    }
}

/// Non-owning reference to an [`AnimationSlot`]
///
/// Listeners live inside the composite the slot owns, so they must not keep
/// the slot alive themselves.
#[derive(Clone)]
pub(crate) struct WeakSlot(Weak<RefCell<Option<CompositeAnimation>>>);

impl WeakSlot {
    pub(crate) fn upgrade(&self) -> Option<AnimationSlot> {
        self.0.upgrade().map(|current| AnimationSlot { current })
    }
}
