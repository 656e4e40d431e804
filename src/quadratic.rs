// Copyright 2025 the Conic Roots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::common::sign;
use crate::diagnostics::{Diagnostics, Event, NoRootsReason};
use crate::Roots;

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// Find real roots of the quadratic equation `a x² + b x + c = 0`.
///
/// Roots are appended to `roots`, which is never cleared. A zero
/// discriminant yields the double root twice. If `a` is zero the equation
/// is solved as linear and a single root is appended; if `b` is zero as
/// well there is nothing to solve.
///
/// Returns `false` when no real root was appended.
///
/// When both `b` and the discriminant are nonzero, the roots are computed
/// as `q / a` and `c / q` with `q = -½ (b + sign(b) √disc)`, which avoids
/// the cancellation of the textbook formula.
///
/// See <https://math.stackexchange.com/questions/866331>
pub fn solve_quadratic<D: Diagnostics + ?Sized>(
    a: f64,
    b: f64,
    c: f64,
    roots: &mut Roots,
    diag: &D,
) -> bool {
    let coeffs = [a, b, c];
    let start = roots.len();
    if a == 0.0 {
        if b == 0.0 {
            diag.emit(&Event::NoRealRoots {
                coeffs: &coeffs[1..],
                reason: NoRootsReason::Degenerate,
            });
            return false;
        }
        roots.push(-c / b);
        diag.emit(&Event::Solved {
            coeffs: &coeffs[1..],
            roots: &roots[start..],
        });
        return true;
    }

    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        diag.emit(&Event::NoRealRoots {
            coeffs: &coeffs,
            reason: NoRootsReason::NegativeDiscriminant,
        });
        return false;
    }
    if b == 0.0 {
        let r = disc.sqrt() / (2.0 * a);
        roots.push(r);
        roots.push(-r);
    } else {
        let q = -0.5 * (b + sign(b) * disc.sqrt());
        roots.push(q / a);
        roots.push(c / q);
    }
    diag.emit(&Event::Solved {
        coeffs: &coeffs,
        roots: &roots[start..],
    });
    true
}
