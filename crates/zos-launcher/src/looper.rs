//! Single-threaded event loop
//!
//! Tasks posted to the [`Looper`] run on the next call to
//! [`Looper::run_frame`], after the host has finished layout for the frame.
//! A task posted while a frame is running waits for the following frame.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

/// A unit of work queued for the next frame; receives the frame time
pub type Task = Box<dyn FnOnce(f64)>;

/// Cooperative event loop for the UI thread
#[derive(Default)]
pub struct Looper {
    queue: RefCell<VecDeque<Task>>,
    now_ms: Cell<f64>,
}

impl Looper {
    /// Create an empty looper
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a task for the next frame
    pub fn post(&self, task: impl FnOnce(f64) + 'static) {
        self.queue.borrow_mut().push_back(Box::new(task));
    }

    /// Number of tasks waiting for the next frame
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Time of the most recent frame
    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.now_ms.get()
    }

    /// Run every task queued before this frame, returns how many ran
    pub fn run_frame(&self, now_ms: f64) -> usize {
        self.now_ms.set(now_ms);

        // Tasks posted from inside a task belong to the next frame
        let batch: Vec<Task> = self.queue.borrow_mut().drain(..).collect();
        let count = batch.len();
        for task in batch {
            task(now_ms);
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_post_runs_on_next_frame() {
        let looper = Looper::new();
        let ran = Rc::new(Cell::new(false));

        let flag = ran.clone();
        looper.post(move |_| flag.set(true));

        assert!(!ran.get());
        assert_eq!(looper.pending(), 1);

        assert_eq!(looper.run_frame(16.0), 1);
        assert!(ran.get());
        assert_eq!(looper.pending(), 0);
    }

    #[test]
    fn test_tasks_receive_frame_time() {
        let looper = Looper::new();
        let seen = Rc::new(Cell::new(0.0));

        let s = seen.clone();
        looper.post(move |now| s.set(now));
        looper.run_frame(42.0);

        assert!((seen.get() - 42.0).abs() < 0.001);
        assert!((looper.now_ms() - 42.0).abs() < 0.001);
    }

    #[test]
    fn test_nested_post_waits_for_following_frame() {
        let looper = Rc::new(Looper::new());
        let count = Rc::new(Cell::new(0));

        let inner_looper = looper.clone();
        let c = count.clone();
        looper.post(move |_| {
            c.set(c.get() + 1);
            let c2 = c.clone();
            inner_looper.post(move |_| c2.set(c2.get() + 1));
        });

        looper.run_frame(0.0);
        assert_eq!(count.get(), 1);

        looper.run_frame(16.0);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_run_frame_empty() {
        let looper = Looper::new();
        assert_eq!(looper.run_frame(0.0), 0);
    }
}
