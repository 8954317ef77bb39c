// Copyright 2025 the Proxima Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Feed 2D kurbo points through the closest-pair engine.

use kurbo::Point;
use proxima_index::points_from_coords;
use proxima_pair::solve;

fn main() {
    // Vertices of a little scene: the engine neither knows nor cares that
    // these came from a 2D drawing stack.
    let scene = [
        Point::new(10.0, 10.0),
        Point::new(250.0, 40.0),
        Point::new(120.0, 200.0),
        Point::new(252.5, 41.5),
        Point::new(60.0, 140.0),
        Point::new(200.0, 180.0),
    ];

    let coords: Vec<[f64; 2]> = scene.iter().map(|p| [p.x, p.y]).collect();
    let pts = points_from_coords(&coords);

    let result = solve(&pts, None).expect("scene coordinates are finite");
    let (a, b) = result.pair().expect("more than one vertex");

    println!(
        "closest vertices: {} and {}",
        scene[a.id.idx()],
        scene[b.id.idx()]
    );
    println!("distance: {:.3}", result.distance());
}
