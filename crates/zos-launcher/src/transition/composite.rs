//! Composite animation: sub-animations played together as one unit

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::types::AnimationId;
use super::animator::Animator;

static NEXT_ANIMATION_ID: AtomicU64 = AtomicU64::new(1);

/// Lifecycle phase of a composite
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationPhase {
    /// Built but not started
    Idle,
    /// Started and progressing
    Running,
    /// Finished naturally
    Ended,
    /// Canceled before finishing
    Canceled,
}

impl AnimationPhase {
    /// Check if the composite can no longer change
    #[inline]
    pub fn is_finished(&self) -> bool {
        matches!(self, AnimationPhase::Ended | AnimationPhase::Canceled)
    }
}

/// Observer of a composite's lifecycle
///
/// A canceled composite reports `on_cancel` followed by `on_end`; a
/// composite that finishes naturally reports only `on_end`.
pub trait AnimationListener {
    fn on_start(&mut self, _id: AnimationId) {}
    fn on_cancel(&mut self, _id: AnimationId) {}
    fn on_end(&mut self, _id: AnimationId) {}
}

#[derive(Clone, Copy)]
enum Event {
    Start,
    Cancel,
    End,
}

struct CompositeInner {
    children: Vec<Box<dyn Animator>>,
    listeners: Vec<Box<dyn AnimationListener>>,
    duration_override: Option<f64>,
    phase: AnimationPhase,
    start_ms: f64,
    /// Set while listeners are being invoked
    dispatching: bool,
    /// Events raised by listeners during dispatch, delivered afterwards
    pending: VecDeque<Event>,
}

impl CompositeInner {
    fn duration_ms(&self) -> f64 {
        self.duration_override.unwrap_or_else(|| {
            self.children
                .iter()
                .map(|c| c.duration_ms())
                .fold(0.0, f64::max)
        })
    }
}

/// A group of concurrently played sub-animations
///
/// Clones share the same underlying animation. Listeners are invoked
/// without any internal borrow held, so a listener may freely call back
/// into this composite or start a different one.
#[derive(Clone)]
pub struct CompositeAnimation {
    id: AnimationId,
    inner: Rc<RefCell<CompositeInner>>,
}

impl std::fmt::Debug for CompositeAnimation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeAnimation")
            .field("id", &self.id)
            .field("phase", &self.phase())
            .field("children", &self.child_count())
            .finish()
    }
}

impl Default for CompositeAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl CompositeAnimation {
    /// Create an empty composite with a fresh id
    pub fn new() -> Self {
        Self {
            id: NEXT_ANIMATION_ID.fetch_add(1, Ordering::Relaxed),
            inner: Rc::new(RefCell::new(CompositeInner {
                children: Vec::new(),
                listeners: Vec::new(),
                duration_override: None,
                phase: AnimationPhase::Idle,
                start_ms: 0.0,
                dispatching: false,
                pending: VecDeque::new(),
            })),
        }
    }

    /// Build a composite from sub-animations; absent ones are skipped
    pub fn from_animators<I>(animators: I) -> Self
    where
        I: IntoIterator<Item = Option<Box<dyn Animator>>>,
    {
        let composite = Self::new();
        for animator in animators.into_iter().flatten() {
            composite.play_boxed(animator);
        }
        composite
    }

    #[inline]
    pub fn id(&self) -> AnimationId {
        self.id
    }

    pub fn phase(&self) -> AnimationPhase {
        self.inner.borrow().phase
    }

    pub fn is_running(&self) -> bool {
        self.phase() == AnimationPhase::Running
    }

    pub fn child_count(&self) -> usize {
        self.inner.borrow().children.len()
    }

    /// Add a sub-animation to play alongside the others
    pub fn play(&self, animator: impl Animator + 'static) {
        self.play_boxed(Box::new(animator));
    }

    pub fn play_boxed(&self, animator: Box<dyn Animator>) {
        self.inner.borrow_mut().children.push(animator);
    }

    pub fn add_listener(&self, listener: impl AnimationListener + 'static) {
        self.inner.borrow_mut().listeners.push(Box::new(listener));
    }

    /// Effective duration: the override if set, else the longest child
    pub fn duration_ms(&self) -> f64 {
        self.inner.borrow().duration_ms()
    }

    /// Override the duration of every child
    pub fn set_duration_ms(&self, duration_ms: f64) {
        let duration_ms = duration_ms.max(0.0);
        let mut inner = self.inner.borrow_mut();
        inner.duration_override = Some(duration_ms);
        for child in inner.children.iter_mut() {
            child.set_duration_ms(duration_ms);
        }
    }

    /// Start playing; a zero-duration composite ends immediately
    pub fn start(&self, now_ms: f64) {
        let duration = {
            let mut inner = self.inner.borrow_mut();
            if inner.phase != AnimationPhase::Idle {
                return;
            }
            inner.phase = AnimationPhase::Running;
            inner.start_ms = now_ms;
            let duration_override = inner.duration_override;
            if let Some(duration) = duration_override {
                inner.children.iter_mut().for_each(|c| c.set_duration_ms(duration));
            }
            for child in inner.children.iter_mut() {
                child.on_start();
                child.apply(0.0);
            }
            inner.duration_ms()
        };

        self.dispatch(Event::Start);

        // A start listener may have canceled us
        if duration <= 0.0 && self.is_running() {
            self.finish();
        }
    }

    /// Advance to `now_ms`, returns true while still running
    pub fn tick(&self, now_ms: f64) -> bool {
        let done = {
            let mut inner = self.inner.borrow_mut();
            if inner.phase != AnimationPhase::Running {
                return false;
            }
            let elapsed = (now_ms - inner.start_ms).max(0.0);
            for child in inner.children.iter_mut() {
                let duration = child.duration_ms();
                let fraction = if duration > 0.0 {
                    (elapsed / duration).clamp(0.0, 1.0) as f32
                } else {
                    1.0
                };
                child.apply(fraction);
            }
            elapsed >= inner.duration_ms()
        };

        if done {
            self.finish();
            false
        } else {
            true
        }
    }

    /// Cancel an idle or running composite
    ///
    /// Children keep their current values. Listeners see `on_cancel` and
    /// then `on_end`. Does nothing once the composite has finished.
    pub fn cancel(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.phase.is_finished() {
                return;
            }
            inner.phase = AnimationPhase::Canceled;
        }
        self.dispatch(Event::Cancel);
        self.dispatch(Event::End);
    }

    fn finish(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            for child in inner.children.iter_mut() {
                child.apply(1.0);
            }
            inner.phase = AnimationPhase::Ended;
        }
        self.dispatch(Event::End);
    }

    /// Deliver `event` to every listener
    ///
    /// Events raised from inside a listener are queued and delivered in
    /// order once the current event has reached every listener.
    fn dispatch(&self, event: Event) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.dispatching {
                inner.pending.push_back(event);
                return;
            }
            inner.dispatching = true;
        }

        let mut next = Some(event);
        while let Some(event) = next {
            let mut listeners = std::mem::take(&mut self.inner.borrow_mut().listeners);
            for listener in listeners.iter_mut() {
                match event {
                    Event::Start => listener.on_start(self.id),
                    Event::Cancel => listener.on_cancel(self.id),
                    Event::End => listener.on_end(self.id),
                }
            }

            // Keep listeners registered during dispatch, after the existing ones
            let mut inner = self.inner.borrow_mut();
            listeners.append(&mut inner.listeners);
            inner.listeners = listeners;
            next = inner.pending.pop_front();
        }

        self.inner.borrow_mut().dispatching = false;
    }
}
