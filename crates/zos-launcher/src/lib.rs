//! Launcher Screen Transitions for Zero OS
//!
//! This crate coordinates the animated transitions between the launcher's
//! mutually-exclusive screens: the workspace grid and the apps overlay.
//!
//! - At most one transition animation is active at any time
//! - A new request cancels the in-flight animation before building its own
//! - Completion callbacks fire at most once per transition
//! - Starts may be deferred to the next frame and are dropped when superseded
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`transition`]: Animation primitives (animators, composites, layer hints)
//! - [`screen`]: Collaborator traits and the reference workspace/overlay screens
//! - [`looper`]: Single-threaded event loop used for deferred starts
//! - [`surface`]: Shared handles to render surfaces
//! - [`config`]: Transition durations and feature switches
//!
//! ## Example
//!
//! ```rust
//! # fn main() -> zos_launcher::LauncherResult<()> {
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use zos_launcher::{
//!     AppsOverlay, GridWorkspace, LauncherState, Looper, NoopContainerEvents,
//!     TransitionConfig, TransitionCoordinator, WorkspaceState,
//! };
//!
//! let config = TransitionConfig::default();
//! let looper = Rc::new(Looper::new());
//! let workspace = Rc::new(RefCell::new(GridWorkspace::new(&config)));
//! let overlay = Rc::new(RefCell::new(AppsOverlay::new(&config)));
//! let coordinator = TransitionCoordinator::new(
//!     config,
//!     workspace,
//!     overlay,
//!     looper.clone(),
//!     Rc::new(NoopContainerEvents),
//! )?;
//!
//! coordinator.go_to_overlay(true);
//! looper.run_frame(0.0);
//! while coordinator.tick(1000.0) {}
//!
//! coordinator.go_to_workspace(
//!     LauncherState::Apps,
//!     WorkspaceState::NormalHidden,
//!     WorkspaceState::Normal,
//!     false,
//!     None,
//! );
//! assert!(!coordinator.is_animating());
//! # Ok(())
//! # }
//! ```
//!
//! ## Threading
//!
//! Everything runs on one logical UI thread. Shared state uses `Rc` and
//! `RefCell`; no borrow is held while animation listeners are dispatched, so
//! listeners and completion callbacks may re-enter the coordinator.

pub mod config;
pub mod coordinator;
pub mod error;
pub mod looper;
pub mod screen;
pub mod surface;
pub mod transition;

mod state;
mod types;

pub use config::TransitionConfig;
pub use coordinator::{AnimationSlot, OnComplete, TransitionCoordinator};
pub use error::{LauncherError, LauncherResult};
pub use looper::Looper;
pub use screen::{
    AppsOverlay, ContainerEvents, GridWorkspace, NoopContainerEvents, OverlayScreen,
    WorkspaceScreen,
};
pub use state::{LauncherState, WorkspaceState};
pub use surface::{LayerType, Surface, SurfaceProperty, Visibility};
pub use transition::{
    AnimationListener, AnimationPhase, Animator, CompositeAnimation, LayerHintSet,
    SequentialAnimator, SurfaceAnimator,
};
pub use types::{AnimationId, SurfaceId};
