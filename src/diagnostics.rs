// Copyright 2025 the Conic Roots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Injectable diagnostics for the solvers.
//!
//! Every solver takes a `&D where D: Diagnostics` and reports what it did
//! through it. Diagnostics are advisory: no sink can change what a solver
//! returns. Use [`Quiet`] to discard everything, [`Trace`] to forward to
//! the [`tracing`] crate, or implement the trait to collect events yourself.

use crate::common::eval_poly;

/// Why a solver found no real root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum NoRootsReason {
    /// Every coefficient that could carry a root was zero.
    Degenerate,
    /// The discriminant of a quadratic was negative.
    NegativeDiscriminant,
    /// The resolvent cubic of a quartic had no strictly positive root.
    NoPositiveResolvent,
    /// A quartic factored into quadratics that only have complex roots.
    ComplexFactors,
}

/// Something a solver wants to report.
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub enum Event<'a> {
    /// Roots were appended for the polynomial with these coefficients
    /// (highest degree first).
    Solved {
        /// The coefficients as the solver received them.
        coeffs: &'a [f64],
        /// The roots this call appended.
        roots: &'a [f64],
    },
    /// The polynomial with these coefficients has no real root the solver
    /// could find.
    NoRealRoots {
        /// The coefficients as the solver received them.
        coeffs: &'a [f64],
        /// What went wrong.
        reason: NoRootsReason,
    },
    /// The eliminated equation does not determine `x` at `y`, so the `x`
    /// values were found on the substituted conic directly. This happens
    /// where both conics are tangent to the vertical line through `y`, and
    /// at every `y` when the conics are mirrored about the same vertical line.
    VerticalTangent {
        /// The shared `y` coordinate.
        y: f64,
        /// The `x` values found on the substituted conic at `y`.
        xs: &'a [f64],
    },
    /// A root of the eliminated equation had no matching real `x` and was
    /// dropped.
    RootDiscarded {
        /// The dropped `y` coordinate.
        y: f64,
    },
}

/// A sink for solver [`Event`]s.
pub trait Diagnostics {
    /// Receive one event.
    fn emit(&self, event: &Event<'_>);
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Quiet;

impl Diagnostics for Quiet {
    #[inline]
    fn emit(&self, _event: &Event<'_>) {}
}

/// Forwards events to [`tracing`].
///
/// Roots are logged one per line with the residual of the polynomial at
/// that root, so a subscriber at `DEBUG` level shows how well each one
/// satisfies its equation. Discarded roots are logged at `WARN`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Trace;

impl Diagnostics for Trace {
    fn emit(&self, event: &Event<'_>) {
        match *event {
            Event::Solved { coeffs, roots } => {
                let degree = coeffs.len().saturating_sub(1);
                for (i, &root) in roots.iter().enumerate() {
                    tracing::debug!(
                        "degree {} root x{} = {}, residual = {:e}",
                        degree,
                        i,
                        root,
                        eval_poly(coeffs, root)
                    );
                }
            }
            Event::NoRealRoots { coeffs, reason } => {
                tracing::debug!("no real solution to {:?} ({:?})", coeffs, reason);
            }
            Event::VerticalTangent { y, xs } => {
                tracing::debug!("vertical tangent at y = {}, x = {:?}", y, xs);
            }
            Event::RootDiscarded { y } => {
                tracing::warn!("no real x matches root y = {}, root discarded", y);
            }
        }
    }
}

/// A per-call verbosity flag, as a sink.
///
/// `Verbosity::from(true)` traces and `Verbosity::from(false)` stays quiet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Behaves like [`Quiet`].
    #[default]
    Quiet,
    /// Behaves like [`Trace`].
    Verbose,
}

impl From<bool> for Verbosity {
    #[inline]
    fn from(verbose: bool) -> Self {
        if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Quiet
        }
    }
}

impl Diagnostics for Verbosity {
    #[inline]
    fn emit(&self, event: &Event<'_>) {
        match self {
            Verbosity::Quiet => Quiet.emit(event),
            Verbosity::Verbose => Trace.emit(event),
        }
    }
}
