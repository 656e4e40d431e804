// Copyright 2025 the Conic Roots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// The relativistic Breit–Wigner lineshape, without normalization.
///
/// This is `m g / ((s - m²)² + (m g)²)` for the squared energy `s`, a
/// resonance of mass `m` and width `g`. It peaks at `s = m²` with value
/// `1 / (m g)`, and falls to half of that at `s = m² ± m g`.
#[inline]
pub fn breit_wigner(s: f64, m: f64, g: f64) -> f64 {
    let k = m * g;
    let d = s - m * m;
    k / (d * d + k * k)
}
