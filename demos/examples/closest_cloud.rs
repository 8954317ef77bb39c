// Copyright 2025 the Proxima Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Solve a random 3D cloud and replay the recursion trace.

use proxima_index::points_from_coords;
use proxima_pair::{TraceNode, solve_traced};

struct Rng(u64);

impl Rng {
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    // Uniform in (-size, size), truncated to three decimals like a
    // hand-entered data set.
    fn coord(&mut self, size: f64) -> f64 {
        let v = (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        ((v * 2.0 - 1.0) * size * 1000.0).floor() / 1000.0
    }
}

fn main() {
    let mut rng = Rng(0x1234_5678_9ABC_DEF0);
    let size = 7.2;
    let coords: Vec<[f64; 3]> = (0..200)
        .map(|_| std::array::from_fn(|_| rng.coord(size)))
        .collect();
    let pts = points_from_coords(&coords);

    let mut leaves = 0usize;
    let mut splits = 0usize;
    let result = solve_traced(&pts, None, |node: &TraceNode<'_, 3>| match &node.split {
        None => leaves += 1,
        Some(split) => {
            splits += 1;
            println!(
                "split axis {} at {:+.3}: {} | {} points, best so far {:.4}",
                split.axis,
                split.median,
                split.below.len(),
                split.above.len(),
                node.result.distance()
            );
        }
    })
    .expect("finite random coordinates always solve");

    let (a, b) = result.pair().expect("two hundred points always have a pair");
    println!();
    println!("recursion: {splits} splits, {leaves} leaves");
    println!(
        "closest pair: #{} {:?} and #{} {:?}",
        a.id.get(),
        a.coords,
        b.id.get(),
        b.coords
    );
    println!("distance: {:.6}", result.distance());
}
