//! This crate contains the geometric algorithm of Cross Track: estimating
//! the location where two tracked sight lines most nearly cross.
//!
//! ## Crossing estimation
//!
//! In this problem we know, for each of two independent 2d motion tracks,
//! the reference origin the track was observed from and a tracked point the
//! ray passes through. We want to find the point of intersection of the two
//! rays. Because the tracks are noisy, the rays will almost never intersect
//! exactly, so we settle for the midpoint of the two mutually closest points.
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

#![no_std]

pub mod crossing;
