//! # Cross Track Core
//!
//! This library provides the common types and traits for triangulating a 3d
//! location from two independent 2d motion tracks. Each track, combined with
//! the reference origin it was observed from (such as a camera's optical
//! center), casts a [`SightLine`] into world space. Two such lines observed
//! from different origins almost never intersect exactly due to tracking
//! noise, so a [`TriangulatorSightLines`] implementation estimates the
//! location where they most nearly cross.
//!
//! - `p` the crossing location we are trying to estimate
//! - `t` a tracked point a ray passes through
//! - `O` the reference origin a ray is cast from
//!
//! ```text
//!   O           O
//!    \         /
//!     t       t
//!      \     /
//!       \   /
//!        \ /
//!         p
//! ```
//!
//! The crate also provides the host-facing seam for live recomputation: a
//! [`PositionProvider`] feeds a fresh world-space position on every call, and
//! a [`CrossingBinding`] pulls four of them (two per line) through a
//! triangulator each time it is evaluated. There is no global registration
//! table and no cached state, so a binding's result always reflects the
//! current tracking data.
//!
//! The crate is designed to work with `#![no_std]`, even without an
//! allocator. Algorithms that estimate crossings do not belong in this
//! repository; they implement the traits specified here.

#![no_std]

mod line;
mod point;
mod provider;
mod triangulation;

pub use line::*;
pub use nalgebra;
pub use point::*;
pub use provider::*;
pub use triangulation::*;
