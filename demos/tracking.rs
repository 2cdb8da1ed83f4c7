//! Track-to-detection assignment, the bread-and-butter LAP use case.
//!
//! A tracker predicts where its known objects should be this frame; the
//! detector reports where objects actually are. Matching predictions to
//! detections so that total displacement is minimal is exactly a square
//! linear assignment, with squared distance as the cost.
//!
//! Run with: `cargo run --example tracking`

use lap_core::{solve, CostFn};

fn main() {
    // Predicted positions of four tracked objects.
    let tracks = [(10.0, 12.0), (48.0, 7.5), (25.0, 30.0), (5.0, 40.0)];

    // Detections this frame, in arbitrary order, each slightly off its track.
    let detections = [(26.1, 29.2), (9.4, 13.0), (4.2, 38.8), (47.0, 8.1)];

    let costs = CostFn::new(|i: usize, j: usize| {
        let (tx, ty) = tracks[i];
        let (dx, dy) = detections[j];
        (tx - dx) * (tx - dx) + (ty - dy) * (ty - dy)
    });

    let solution = solve(tracks.len(), &costs).expect("finite costs, non-empty problem");

    println!("total squared displacement: {:.2}", solution.cost);
    for (track, &detection) in solution.row_to_col.iter().enumerate() {
        let (tx, ty) = tracks[track];
        let (dx, dy) = detections[detection];
        println!(
            "track {} ({:>4.1}, {:>4.1})  →  detection {} ({:>4.1}, {:>4.1})",
            track, tx, ty, detection, dx, dy
        );
    }
}
