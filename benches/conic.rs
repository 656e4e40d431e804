// Copyright 2025 the Conic Roots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(nightly)]
#![feature(test)]
extern crate test;
use conic_roots::{Conic, Quiet};
use test::{black_box, Bencher};

// Four transversal intersections.
#[bench]
fn bench_ellipse_hyperbola(bb: &mut Bencher) {
    let ellipse = Conic::new(1.0, 4.0, 0.0, 0.0, 0.0, -4.0);
    let hyperbola = Conic::new(1.0, -1.0, 0.0, 0.0, 0.0, -1.0);
    bb.iter(|| black_box(ellipse).intersection_points(black_box(hyperbola), &Quiet));
}

#[bench]
fn bench_circles(bb: &mut Bencher) {
    let a = Conic::circle(0.0, 0.0, 1.0);
    let b = Conic::circle(1.0, 0.5, 1.2);
    bb.iter(|| black_box(a).intersection_points(black_box(b), &Quiet));
}
