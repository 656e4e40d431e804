// Copyright 2025 the Conic Roots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::diagnostics::{Diagnostics, Event, NoRootsReason};
use crate::{solve_cubic, solve_quadratic, Roots};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// Rounding allowed in the depressed linear coefficient before it counts as
/// zero, in units of the terms it is summed from.
const LINEAR_TERM_ULPS: f64 = 32.0;

/// Find real roots of the quartic equation `a x⁴ + b x³ + c x² + d x + e = 0`.
///
/// Roots are appended to `roots`, which is never cleared, and the number of
/// roots appended is returned; zero means no real solution was found. When
/// `a` is zero this is [`solve_cubic`] on `b, c, d, e`.
///
/// The quartic is shifted by `b / 4a` to remove the cubic term. If the
/// shifted ("depressed") quartic has no linear term, up to rounding, it is a
/// quadratic in `z²` and is solved as such; this covers `x⁴ = k` and every
/// other even quartic, shifted or not. Otherwise the depressed quartic is factored into two quadratics
/// using the first strictly positive root of its resolvent cubic, in the
/// order [`solve_cubic`] produced them, and each factor is solved with
/// [`solve_quadratic`].
///
/// See <https://en.wikipedia.org/wiki/Quartic_function#Solving_by_factoring_into_quadratics>
pub fn solve_quartic<D: Diagnostics + ?Sized>(
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    e: f64,
    roots: &mut Roots,
    diag: &D,
) -> usize {
    let start = roots.len();
    if a == 0.0 {
        solve_cubic(b, c, d, e, roots, diag);
        return roots.len() - start;
    }
    let coeffs = [a, b, c, d, e];

    let an = b / a;
    let bn = c / a - 0.375 * an * an;
    let half = 0.5 * an;
    let cubed = half * half * half;
    let mixed = 0.5 * b * c / (a * a);
    let linear = d / a;
    let mut cn = cubed - mixed + linear;
    let terms = cubed.abs() + mixed.abs() + linear.abs();
    if cn.abs() <= LINEAR_TERM_ULPS * f64::EPSILON * terms {
        // The terms cancel up to rounding, as they do for any shifted even quartic.
        cn = 0.0;
    }
    let quarter = 0.25 * an;
    let dn = -3.0 * (quarter * quarter) * (quarter * quarter) + e / a - 0.25 * b * d / (a * a)
        + c * (0.0625 * b * b) / (a * a * a);

    if cn == 0.0 {
        let mut squares = Roots::new();
        solve_quadratic(1.0, bn, dn, &mut squares, diag);
        for u in squares {
            if u > 0.0 {
                let z = u.sqrt();
                roots.push(z);
                roots.push(-z);
            } else if u == 0.0 {
                roots.push(0.0);
                roots.push(0.0);
            }
        }
    } else {
        let mut resolvent = Roots::new();
        solve_cubic(1.0, 2.0 * bn, bn * bn - 4.0 * dn, -cn * cn, &mut resolvent, diag);
        let Some(y) = resolvent.iter().copied().find(|&y| y > 0.0) else {
            diag.emit(&Event::NoRealRoots {
                coeffs: &coeffs,
                reason: NoRootsReason::NoPositiveResolvent,
            });
            return 0;
        };
        let p = y.sqrt();
        solve_quadratic(p, p * p, 0.5 * (p * (bn + y) - cn), roots, diag);
        solve_quadratic(p, -p * p, 0.5 * (p * (bn + y) + cn), roots, diag);
    }

    for root in &mut roots[start..] {
        *root -= quarter;
    }

    let found = &roots[start..];
    if found.is_empty() {
        diag.emit(&Event::NoRealRoots {
            coeffs: &coeffs,
            reason: NoRootsReason::ComplexFactors,
        });
    } else {
        diag.emit(&Event::Solved {
            coeffs: &coeffs,
            roots: found,
        });
    }
    found.len()
}

#[cfg(test)]
mod tests {
    use crate::common::eval_poly;
    use crate::diagnostics::tests::{Recorder, Seen};
    use crate::diagnostics::{NoRootsReason, Quiet};
    use crate::{solve_quartic, Roots};
    use rand::{Rng, SeedableRng};

    fn solve(coeffs: [f64; 5]) -> Roots {
        let [a, b, c, d, e] = coeffs;
        let mut roots = Roots::new();
        let n = solve_quartic(a, b, c, d, e, &mut roots, &Quiet);
        assert_eq!(n, roots.len());
        roots
    }

    fn verify(mut roots: Roots, expected: &[f64]) {
        roots.sort_by(f64::total_cmp);
        assert_eq!(roots.len(), expected.len(), "{roots:?}");
        for (r, e) in roots.iter().zip(expected) {
            assert!((r - e).abs() < 1e-9, "{r} != {e}");
        }
    }

    /// Coefficients of `k (x - r0)(x - r1)(x - r2)(x - r3)`.
    fn from_roots(k: f64, r: [f64; 4]) -> [f64; 5] {
        let s1 = r[0] + r[1] + r[2] + r[3];
        let s2 = r[0] * r[1] + r[0] * r[2] + r[0] * r[3] + r[1] * r[2] + r[1] * r[3] + r[2] * r[3];
        let s3 = r[0] * r[1] * r[2] + r[0] * r[1] * r[3] + r[0] * r[2] * r[3] + r[1] * r[2] * r[3];
        let s4 = r[0] * r[1] * r[2] * r[3];
        [k, -k * s1, k * s2, -k * s3, k * s4]
    }

    #[test]
    fn fourth_roots_of_unity() {
        // Only the real pair of x⁴ - 1, nothing from ±i.
        verify(solve([1.0, 0.0, 0.0, 0.0, -1.0]), &[-1.0, 1.0]);
        verify(solve([2.0, 0.0, 0.0, 0.0, -32.0]), &[-2.0, 2.0]);
        verify(solve([1.0, 0.0, 0.0, 0.0, 1.0]), &[]);
    }

    #[test]
    fn zero_quadruple_root() {
        let roots = solve([1.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(roots.as_slice(), &[0.0; 4]);
    }

    #[test]
    fn four_distinct_roots() {
        verify(solve(from_roots(1.0, [1.0, 2.0, 3.0, 4.0])), &[1.0, 2.0, 3.0, 4.0]);
        verify(
            solve(from_roots(-0.5, [-3.0, -0.25, 0.5, 7.0])),
            &[-3.0, -0.25, 0.5, 7.0],
        );
    }

    #[test]
    fn biquadratic() {
        // (x² - 1)(x² - 4)
        verify(solve([1.0, 0.0, -5.0, 0.0, 4.0]), &[-2.0, -1.0, 1.0, 2.0]);
        // x²(x² - 1)
        verify(solve([1.0, 0.0, -1.0, 0.0, 0.0]), &[-1.0, 0.0, 0.0, 1.0]);
        // (x² + 1)(x² - 9)
        verify(solve([1.0, 0.0, -8.0, 0.0, -9.0]), &[-3.0, 3.0]);
    }

    #[test]
    fn shifted_biquadratic() {
        // (x - 1)⁴ - 1 has roots 0 and 2 and a zero resolvent root.
        verify(solve([1.0, -4.0, 6.0, -4.0, 0.0]), &[0.0, 2.0]);
    }

    #[test]
    fn shifted_even_quartic_with_rounding() {
        // (x - 0.1)⁴ - 1, whose expanded coefficients are not exact.
        let s = 0.1;
        let coeffs = [1.0, -4.0 * s, 6.0 * s * s, -4.0 * s * s * s, s * s * s * s - 1.0];
        verify(solve(coeffs), &[-0.9, 1.1]);
    }

    #[test]
    fn random_shifted_even_quartics() {
        // (x - s)⁴ + p (x - s)² + q with q < 0 has exactly two real roots.
        let mut rng = rand::rngs::StdRng::seed_from_u64(0x5e4e);
        for _ in 0..1000 {
            let s: f64 = rng.random_range(-2.0..2.0);
            let p: f64 = rng.random_range(-3.0..3.0);
            let q: f64 = rng.random_range(-3.0..-0.1);
            let coeffs = [
                1.0,
                -4.0 * s,
                6.0 * s * s + p,
                -4.0 * s * s * s - 2.0 * p * s,
                s * s * s * s + p * s * s + q,
            ];
            let roots = solve(coeffs);
            assert_eq!(roots.len(), 2, "{coeffs:?} gave {roots:?}");
            let u = 0.5 * (-p + (p * p - 4.0 * q).sqrt());
            verify(roots, &[s - u.sqrt(), s + u.sqrt()]);
        }
    }

    #[test]
    fn two_real_two_complex() {
        // (x - 1)(x + 2)(x² + x + 1) depresses to an even quartic.
        verify(solve([1.0, 2.0, 0.0, -1.0, -2.0]), &[-2.0, 1.0]);
        // (x - 1)(x - 3)(x² + 1) needs the resolvent.
        verify(solve([1.0, -4.0, 4.0, -4.0, 3.0]), &[1.0, 3.0]);
    }

    #[test]
    fn no_real_roots() {
        // (x - 1)⁴ + 1
        let recorder = Recorder::default();
        let mut roots = Roots::new();
        let n = solve_quartic(1.0, -4.0, 6.0, -4.0, 2.0, &mut roots, &recorder);
        assert_eq!(n, 0);
        assert!(roots.is_empty());
        assert_eq!(
            recorder.take().last(),
            Some(&Seen::NoRealRoots(NoRootsReason::ComplexFactors))
        );
    }

    #[test]
    fn delegates_to_cubic() {
        let mut roots = Roots::new();
        let n = solve_quartic(0.0, 1.0, -6.0, 12.0, -8.0, &mut roots, &Quiet);
        assert_eq!(n, 3);
        assert_eq!(roots.as_slice(), &[2.0; 3]);
    }

    #[test]
    fn shift_leaves_existing_roots_alone() {
        let mut roots = Roots::from_slice(&[100.0, -100.0]);
        let n = solve_quartic(1.0, -10.0, 35.0, -50.0, 24.0, &mut roots, &Quiet);
        assert_eq!(n, 4);
        assert_eq!(&roots[..2], &[100.0, -100.0]);
        verify(Roots::from_slice(&roots[2..]), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn reports_quartic_last() {
        let recorder = Recorder::default();
        let mut roots = Roots::new();
        solve_quartic(1.0, 0.0, 0.0, 0.0, -1.0, &mut roots, &recorder);
        let seen = recorder.take();
        match seen.last() {
            Some(Seen::Solved { degree: 4, roots }) => assert_eq!(roots.len(), 2),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn random_factored() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(0x9a27);
        for _ in 0..1000 {
            let mut r = [0.0; 4];
            for x in &mut r {
                *x = rng.random_range(-4.0..4.0);
            }
            let coeffs = from_roots(rng.random_range(0.5..2.0), r);
            let roots = solve(coeffs);
            let magnitude = coeffs.iter().fold(0.0f64, |m, c| m.max(c.abs()));
            for x in roots {
                assert!(
                    eval_poly(&coeffs, x).abs() < 1e-7 * magnitude,
                    "residual at {x} for {coeffs:?}"
                );
            }
        }
    }
}
