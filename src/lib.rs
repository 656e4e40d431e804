// Copyright 2025 the Conic Roots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closed-form real roots of low degree polynomials, and the intersection of
//! two conics.
//!
//! The solvers cover quadratics, cubics and quartics with real
//! coefficients, and report only real roots. They are closed-form, so they
//! are fast and allocation free, but make no attempt at polishing their
//! results; repeated and nearly repeated roots come out with the accuracy
//! the formulas give.
//!
//! Roots are appended to a caller-owned [`Roots`] buffer that is never
//! cleared, so several solves can share one buffer. Every solver also takes
//! a [`Diagnostics`] sink: pass [`Quiet`] to ignore what it reports, or
//! [`Trace`] to log each root and its residual through `tracing`.
//!
//! ```
//! use conic_roots::{solve_quartic, Quiet, Roots};
//!
//! // (x - 1)(x - 2)(x - 3)(x - 4)
//! let mut roots = Roots::new();
//! let n = solve_quartic(1.0, -10.0, 35.0, -50.0, 24.0, &mut roots, &Quiet);
//! assert_eq!(n, 4);
//! roots.sort_by(f64::total_cmp);
//! for (root, expected) in roots.iter().zip([1.0, 2.0, 3.0, 4.0]) {
//!     assert!((root - expected).abs() < 1e-9);
//! }
//! ```
//!
//! Two conics in implicit form meet in at most four points:
//!
//! ```
//! use conic_roots::{Conic, Quiet};
//!
//! let a = Conic::circle(0.0, 0.0, 1.0);
//! let b = Conic::circle(1.0, 0.0, 1.0);
//! let points = a.intersection_points(b, &Quiet).unwrap();
//! assert_eq!(points.len(), 2);
//! for (x, y) in points {
//!     assert!((x - 0.5).abs() < 1e-12);
//!     assert!((y.abs() - 0.75f64.sqrt()).abs() < 1e-12);
//! }
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. This is useful for
//! `no_std` environments.
//!
//! The `serde` feature derives serialization for [`Conic`], [`ConicError`]
//! and [`Roots`], and `schemars` derives a JSON schema for [`Conic`].
//!
//! [`libm`]: https://docs.rs/libm

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(
    clippy::unreadable_literal,
    clippy::many_single_char_names,
    clippy::excessive_precision,
    clippy::float_cmp
)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("conic_roots requires either the `std` or `libm` feature");

extern crate alloc;

pub mod common;
mod conic;
mod cubic;
pub mod diagnostics;
mod lineshape;
mod quadratic;
mod quartic;

pub use crate::conic::*;
pub use crate::cubic::*;
pub use crate::diagnostics::{Diagnostics, Event, NoRootsReason, Quiet, Trace, Verbosity};
pub use crate::lineshape::*;
pub use crate::quadratic::*;
pub use crate::quartic::*;

/// An append-only buffer of real roots.
///
/// A quartic contributes at most four roots, so a single solve never spills
/// to the heap.
pub type Roots = smallvec::SmallVec<[f64; 4]>;
