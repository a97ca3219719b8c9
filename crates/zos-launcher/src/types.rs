//! Core type definitions for launcher transitions
//!
//! This module centralizes identifiers used throughout the crate
//! for consistency and discoverability.

/// Unique composite animation identifier
///
/// Composites are identified by a monotonically increasing 64-bit integer.
/// The coordinator compares these to detect a superseded transition.
pub type AnimationId = u64;

/// Unique surface identifier
pub type SurfaceId = u32;
