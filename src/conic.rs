// Copyright 2025 the Conic Roots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Implicit conics and their intersection.

use core::fmt;

use arrayvec::ArrayVec;

use crate::diagnostics::{Diagnostics, Event};
use crate::{solve_quadratic, solve_quartic, Roots};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A conic section in implicit form,
/// `a11 x² + a22 y² + a12 xy + a10 x + a01 y + a00 = 0`.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Conic {
    /// Coefficient of `x²`.
    pub a11: f64,
    /// Coefficient of `y²`.
    pub a22: f64,
    /// Coefficient of `xy`.
    pub a12: f64,
    /// Coefficient of `x`.
    pub a10: f64,
    /// Coefficient of `y`.
    pub a01: f64,
    /// Constant term.
    pub a00: f64,
}

/// The two-conic solver hit a configuration it cannot resolve.
///
/// Apart from [`ConicError::Coincident`], these all come from points where
/// both conics are tangent to the same vertical line, so that `x` cannot be
/// recovered from the eliminated equation and has to be found on the
/// substituted conic directly.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum ConicError {
    /// The first conic has no point at this `y`, although the eliminated
    /// quartic says it should.
    MissingCompanion {
        /// The quartic root.
        y: f64,
    },
    /// Two distinct `x` were found at this `y`, but the quartic only
    /// reported it once.
    UnpairedVerticalRoot {
        /// The quartic root.
        y: f64,
    },
    /// Two distinct `x` were found at this `y`, and the quartic reported it
    /// three or more times, so there is no unambiguous pairing.
    TripleVerticalRoot {
        /// The quartic root.
        y: f64,
    },
    /// The conics are the same curve, or one of them is identically zero,
    /// so they share infinitely many points.
    Coincident,
}

impl fmt::Display for ConicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConicError::MissingCompanion { y } => {
                write!(f, "no point of the substituted conic at quartic root y = {y}")
            }
            ConicError::UnpairedVerticalRoot { y } => {
                write!(f, "two x values at y = {y}, but y is a simple root")
            }
            ConicError::TripleVerticalRoot { y } => {
                write!(f, "two x values at y = {y}, but y is at least a triple root")
            }
            ConicError::Coincident => {
                write!(f, "the conics coincide, so they meet in infinitely many points")
            }
        }
    }
}

impl core::error::Error for ConicError {}

/// Intersection points as `(x, y)` pairs.
pub type Points = ArrayVec<(f64, f64), 4>;

impl Conic {
    /// A new conic from its six coefficients.
    #[inline]
    pub const fn new(a11: f64, a22: f64, a12: f64, a10: f64, a01: f64, a00: f64) -> Conic {
        Conic {
            a11,
            a22,
            a12,
            a10,
            a01,
            a00,
        }
    }

    /// The circle `(x - cx)² + (y - cy)² = r²`.
    #[inline]
    pub fn circle(cx: f64, cy: f64, r: f64) -> Conic {
        Conic::new(1.0, 1.0, 0.0, -2.0 * cx, -2.0 * cy, cx * cx + cy * cy - r * r)
    }

    /// Evaluate the implicit form at `(x, y)`.
    #[inline]
    pub fn eval(&self, x: f64, y: f64) -> f64 {
        self.a11 * x * x
            + self.a22 * y * y
            + self.a12 * x * y
            + self.a10 * x
            + self.a01 * y
            + self.a00
    }

    /// Is this conic finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.coeffs().iter().all(|c| c.is_finite())
    }

    /// The coefficients in field order, `a11, a22, a12, a10, a01, a00`.
    #[inline]
    pub fn coeffs(&self) -> [f64; 6] {
        [self.a11, self.a22, self.a12, self.a10, self.a01, self.a00]
    }

    /// Find the real intersections of `self` with `other`.
    ///
    /// The `x` coordinates are appended to `xs` and the `y` coordinates to
    /// `ys`, so that pairs line up index by index; neither is cleared. The
    /// number of pairs appended is returned. See [`solve_two_conics`].
    ///
    /// # Errors
    ///
    /// See [`ConicError`]. Nothing is appended on error.
    pub fn intersect<D: Diagnostics + ?Sized>(
        self,
        other: Conic,
        xs: &mut Roots,
        ys: &mut Roots,
        diag: &D,
    ) -> Result<usize, ConicError> {
        solve_two_conics(self, other, xs, ys, diag)
    }

    /// Find the real intersections of `self` with `other`, as points.
    ///
    /// # Errors
    ///
    /// See [`ConicError`].
    pub fn intersection_points<D: Diagnostics + ?Sized>(
        self,
        other: Conic,
        diag: &D,
    ) -> Result<Points, ConicError> {
        if self.a11 == 0.0 && other.a11 == 0.0 {
            if self.a22 == 0.0 && other.a22 == 0.0 {
                return bilinear_points(&self, &other, diag);
            }
            // Neither conic has an x² term to eliminate, but one has y².
            let mut points = self.transpose().intersection_points(other.transpose(), diag)?;
            for p in &mut points {
                *p = (p.1, p.0);
            }
            return Ok(points);
        }
        // The quartic comes from substituting into `first`, which must keep
        // its x² term or the substitution is an identity.
        let (first, second) = if self.a11 == 0.0 {
            (other, self)
        } else {
            (self, other)
        };
        let elim = Elimination::new(&first, &second);
        if elim.is_zero() {
            return Err(ConicError::Coincident);
        }
        if elim.beta == 0.0 && elim.gamma == 0.0 {
            return Ok(mirrored_points(&first, &elim, diag));
        }
        let [a, b, c, d, e] = elim.quartic(&first);
        let mut ys = Roots::new();
        solve_quartic(a, b, c, d, e, &mut ys, diag);
        // Equal roots must be adjacent for the vertical tangent pairing.
        ys.sort_unstable_by(f64::total_cmp);
        pair_roots(&first, &elim, &ys, diag)
    }

    /// The same conic with the roles of `x` and `y` exchanged.
    #[inline]
    #[must_use]
    pub fn transpose(self) -> Conic {
        Conic::new(self.a22, self.a11, self.a12, self.a01, self.a10, self.a00)
    }

    /// Solve for the `x` where this conic crosses the horizontal line at `y`.
    fn xs_at<D: Diagnostics + ?Sized>(&self, y: f64, diag: &D) -> Roots {
        let mut xs = Roots::new();
        solve_quadratic(
            self.a11,
            self.a12 * y + self.a10,
            (self.a22 * y + self.a01) * y + self.a00,
            &mut xs,
            diag,
        );
        xs
    }
}

/// Find the real intersections of two conics.
///
/// The `x²` term is eliminated by combining the conics, which leaves `x` as
/// a rational function of `y`. Substituting that into one of the conics
/// gives a quartic in `y`, solved with [`solve_quartic`]. The conic used is
/// `first` unless it has no `x²` term, in which case it is `second`; when
/// neither has one, the axes are exchanged, and when neither has any square
/// term the `xy` term is eliminated instead. Each `y` root is then paired
/// with its `x`:
///
/// - normally from the eliminated equation;
/// - where both conics are tangent to the vertical line through `y`, by
///   solving the substituted conic as a quadratic in `x`. Two distinct `x`
///   need `y` to be a double root, and consume both copies.
/// - if the eliminated equation has no solution at `y`, the root is dropped
///   and [`Event::RootDiscarded`] is reported.
///
/// When the conics are mirrored about the same vertical line, the eliminated
/// equation does not involve `x` at all. It is then solved for `y` directly,
/// and every `x` on the substituted conic at those `y` is reported.
///
/// `x` coordinates are appended to `xs` and `y` coordinates to `ys`, which
/// are never cleared; entries appended by this call correspond index by
/// index. The order is not specified. Returns the number of pairs appended.
///
/// # Errors
///
/// Returns [`ConicError::Coincident`] for conics that share a whole curve,
/// and the other [`ConicError`] variants when a vertical tangent cannot be
/// paired up consistently. Nothing is appended in either case.
pub fn solve_two_conics<D: Diagnostics + ?Sized>(
    first: Conic,
    second: Conic,
    xs: &mut Roots,
    ys: &mut Roots,
    diag: &D,
) -> Result<usize, ConicError> {
    let points = first.intersection_points(second, diag)?;
    xs.extend(points.iter().map(|&(x, _)| x));
    ys.extend(points.iter().map(|&(_, y)| y));
    Ok(points.len())
}

/// `second.a11 * first - first.a11 * second`, which has no `x²` term.
///
/// The combination reads `(beta y + gamma) x + alpha y² + delta y + omega = 0`.
struct Elimination {
    alpha: f64,
    beta: f64,
    gamma: f64,
    delta: f64,
    omega: f64,
}

impl Elimination {
    fn new(a: &Conic, b: &Conic) -> Self {
        Elimination {
            alpha: cancel(b.a11 * a.a22, a.a11 * b.a22),
            beta: cancel(b.a11 * a.a12, a.a11 * b.a12),
            gamma: cancel(b.a11 * a.a10, a.a11 * b.a10),
            delta: cancel(b.a11 * a.a01, a.a11 * b.a01),
            omega: cancel(b.a11 * a.a00, a.a11 * b.a00),
        }
    }

    /// The conics are proportional, so the combination vanishes.
    fn is_zero(&self) -> bool {
        self.alpha == 0.0
            && self.beta == 0.0
            && self.gamma == 0.0
            && self.delta == 0.0
            && self.omega == 0.0
    }

    /// Coefficients of the quartic in `y`, highest degree first, obtained by
    /// substituting `x = -(alpha y² + delta y + omega) / (beta y + gamma)`
    /// into `first` and clearing the denominator.
    fn quartic(&self, first: &Conic) -> [f64; 5] {
        let Elimination {
            alpha,
            beta,
            gamma,
            delta,
            omega,
        } = *self;
        let Conic {
            a11,
            a22,
            a12,
            a10,
            a01,
            a00,
        } = *first;
        [
            a11 * alpha * alpha + a22 * beta * beta - a12 * alpha * beta,
            2.0 * a11 * alpha * delta - a12 * (alpha * gamma + delta * beta) - a10 * alpha * beta
                + 2.0 * a22 * beta * gamma
                + a01 * beta * beta,
            a11 * delta * delta + 2.0 * a11 * alpha * omega
                - a12 * (delta * gamma + omega * beta)
                - a10 * (alpha * gamma + delta * beta)
                + a22 * gamma * gamma
                + 2.0 * a01 * beta * gamma
                + a00 * beta * beta,
            2.0 * a11 * delta * omega - a12 * omega * gamma - a10 * (delta * gamma + omega * beta)
                + a01 * gamma * gamma
                + 2.0 * a00 * beta * gamma,
            a11 * omega * omega - a10 * omega * gamma + a00 * gamma * gamma,
        ]
    }

    /// The `x` paired with `y`, if the eliminated equation determines it.
    fn companion(&self, y: f64) -> Companion {
        let den = self.beta * y + self.gamma;
        let num = (self.alpha * y + self.delta) * y + self.omega;
        if den != 0.0 {
            Companion::Unique(-num / den)
        } else if num == 0.0 {
            Companion::Vertical
        } else {
            Companion::Inconsistent
        }
    }
}

enum Companion {
    Unique(f64),
    /// Any `x` satisfies the eliminated equation.
    Vertical,
    /// No `x` satisfies the eliminated equation.
    Inconsistent,
}

/// Pair each quartic root with its `x`. Equal roots must be adjacent in `ys`.
fn pair_roots<D: Diagnostics + ?Sized>(
    first: &Conic,
    elim: &Elimination,
    ys: &[f64],
    diag: &D,
) -> Result<Points, ConicError> {
    let mut points = Points::new();
    let mut i = 0;
    while let Some(&y) = ys.get(i) {
        let repeated = |k: usize| ys.get(i + k) == Some(&y);
        match elim.companion(y) {
            Companion::Unique(x) => {
                points.push((x, y));
                i += 1;
            }
            Companion::Inconsistent => {
                diag.emit(&Event::RootDiscarded { y });
                i += 1;
            }
            Companion::Vertical => {
                let companions = first.xs_at(y, diag);
                diag.emit(&Event::VerticalTangent {
                    y,
                    xs: &companions,
                });
                let (x0, x1) = match *companions.as_slice() {
                    [x] => (x, x),
                    [x0, x1] => (x0, x1),
                    _ => return Err(ConicError::MissingCompanion { y }),
                };
                if x0 == x1 {
                    points.push((x0, y));
                    if repeated(1) {
                        points.push((x0, y));
                        i += 2;
                    } else {
                        i += 1;
                    }
                } else {
                    if !repeated(1) {
                        return Err(ConicError::UnpairedVerticalRoot { y });
                    }
                    if repeated(2) {
                        return Err(ConicError::TripleVerticalRoot { y });
                    }
                    points.push((x0, y));
                    points.push((x1, y));
                    i += 2;
                }
            }
        }
    }
    Ok(points)
}

/// Rounding error allowed in [`cancel`], in units of the larger term.
const CANCEL_ULPS: f64 = 4.0;

/// `p - q`, flushed to zero when it is within rounding of the terms.
#[inline]
fn cancel(p: f64, q: f64) -> f64 {
    let diff = p - q;
    if diff.abs() <= CANCEL_ULPS * f64::EPSILON * p.abs().max(q.abs()) {
        0.0
    } else {
        diff
    }
}

/// Intersect conics whose combination reads `alpha y² + delta y + omega = 0`.
///
/// This is the case for conics mirrored about the same vertical line: each
/// `y` root fixes a horizontal line, met by `first` at up to two `x`.
fn mirrored_points<D: Diagnostics + ?Sized>(
    first: &Conic,
    elim: &Elimination,
    diag: &D,
) -> Points {
    let mut ys = Roots::new();
    solve_quadratic(elim.alpha, elim.delta, elim.omega, &mut ys, diag);
    let mut points = Points::new();
    let mut last = None;
    for y in ys {
        // A double root is one horizontal line.
        if last == Some(y) {
            continue;
        }
        last = Some(y);
        let xs = first.xs_at(y, diag);
        diag.emit(&Event::VerticalTangent { y, xs: &xs });
        if xs.is_empty() {
            diag.emit(&Event::RootDiscarded { y });
        }
        points.extend(xs.iter().map(|&x| (x, y)));
    }
    points
}

/// Intersect conics with no square terms, `a12 xy + a10 x + a01 y + a00 = 0`.
///
/// Eliminating `xy` leaves a line; substituting the line into a conic with
/// an `xy` term leaves a quadratic. Two lines are solved directly.
fn bilinear_points<D: Diagnostics + ?Sized>(
    a: &Conic,
    b: &Conic,
    diag: &D,
) -> Result<Points, ConicError> {
    let (a, b) = if a.a12 == 0.0 { (b, a) } else { (a, b) };
    if a.a12 == 0.0 {
        return line_points(a, b);
    }
    let mut points = Points::new();
    // The line p x + q y + r = 0.
    let p = cancel(b.a12 * a.a10, a.a12 * b.a10);
    let q = cancel(b.a12 * a.a01, a.a12 * b.a01);
    let r = cancel(b.a12 * a.a00, a.a12 * b.a00);
    if q != 0.0 {
        let mut xs = Roots::new();
        solve_quadratic(
            -a.a12 * p,
            a.a10 * q - a.a12 * r - a.a01 * p,
            a.a00 * q - a.a01 * r,
            &mut xs,
            diag,
        );
        points.extend(xs.iter().map(|&x| (x, -(p * x + r) / q)));
    } else if p != 0.0 {
        let x = -r / p;
        let mut ys = Roots::new();
        solve_quadratic(0.0, a.a12 * x + a.a01, a.a10 * x + a.a00, &mut ys, diag);
        points.extend(ys.iter().map(|&y| (x, y)));
    } else if r == 0.0 {
        return Err(ConicError::Coincident);
    }
    Ok(points)
}

/// Intersect two lines `a10 x + a01 y + a00 = 0`.
fn line_points(a: &Conic, b: &Conic) -> Result<Points, ConicError> {
    let mut points = Points::new();
    let det = cancel(a.a10 * b.a01, a.a01 * b.a10);
    if det != 0.0 {
        points.push((
            (a.a01 * b.a00 - a.a00 * b.a01) / det,
            (a.a00 * b.a10 - a.a10 * b.a00) / det,
        ));
        return Ok(points);
    }
    // A nonzero constant has no points at all.
    let empty = |c: &Conic| c.a10 == 0.0 && c.a01 == 0.0 && c.a00 != 0.0;
    let parallel = cancel(a.a10 * b.a00, a.a00 * b.a10) != 0.0
        || cancel(a.a01 * b.a00, a.a00 * b.a01) != 0.0;
    if empty(a) || empty(b) || parallel {
        Ok(points)
    } else {
        Err(ConicError::Coincident)
    }
}
