// Copyright 2025 the Conic Roots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::common::{cos_shifted_third, sign, Shift};
use crate::diagnostics::{Diagnostics, Event};
use crate::{solve_quadratic, Roots};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// Find real roots of the cubic equation `a x³ + b x² + c x + d = 0`.
///
/// Roots are appended to `roots`, which is never cleared. When `a` is zero
/// this is [`solve_quadratic`] on `b, c, d`, and its result is returned.
/// Otherwise exactly three roots are appended and the result is `true`:
///
/// - with three real roots, each of them once (a double root appears twice);
/// - with a single real root, that root three times. This is exact for a
///   triple root; otherwise the complex pair is simply not reported.
///
/// The method is the trigonometric / Cardano split described in
/// Numerical Recipes (Press et al., 3rd ed., §5.6), on the monic form
/// `x³ + an x² + bn x + cn`.
pub fn solve_cubic<D: Diagnostics + ?Sized>(
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    roots: &mut Roots,
    diag: &D,
) -> bool {
    if a == 0.0 {
        return solve_quadratic(b, c, d, roots, diag);
    }
    let start = roots.len();

    let an = b / a;
    let bn = c / a;
    let cn = d / a;

    let q = an * an / 9.0 - bn / 3.0;
    let r = an * an * an / 27.0 - an * bn / 6.0 + cn / 2.0;
    let q3 = q * q * q;
    let shift = an / 3.0;

    if r * r < q3 {
        // Three distinct real roots. q3 > r² ≥ 0, so q > 0 here.
        let theta = (r / q3.sqrt()).clamp(-1.0, 1.0).acos() / 3.0;
        let scale = -2.0 * q.sqrt();
        roots.push(scale * theta.cos() - shift);
        roots.push(scale * cos_shifted_third(theta, Shift::Plus) - shift);
        roots.push(scale * cos_shifted_third(theta, Shift::Minus) - shift);
    } else {
        let big_a = -sign(r) * (r.abs() + (r * r - q3).sqrt()).cbrt();
        let big_b = if big_a == 0.0 { 0.0 } else { q / big_a };
        let x = big_a + big_b - shift;
        roots.push(x);
        roots.push(x);
        roots.push(x);
    }

    diag.emit(&Event::Solved {
        coeffs: &[a, b, c, d],
        roots: &roots[start..],
    });
    true
}
