//! Sobel regression test
//!
//! Edge maps on synthetic images: flat regions stay dark, step edges
//! respond on both sides of the boundary, and tile interiors of a
//! checkerboard stay quiet while tile seams light up.

use pixform_filter::{EdgeOrientation, sobel_edge, sobel_edge_map};
use pixform_test::{RegParams, checkerboard};

#[test]
fn sobel_reg() {
    let mut rp = RegParams::new("sobel");

    let board = checkerboard(16, 16, 4, 0, 200);
    let edges = sobel_edge_map(&board).expect("sobel edge map");
    rp.compare_values(16.0, edges.width() as f64, 0.0);
    rp.compare_values(16.0, edges.height() as f64, 0.0);

    // Tile interiors are flat: no response two pixels away from a seam
    rp.compare_values(0.0, edges.channel(1, 1, 0).unwrap() as f64, 0.0);
    rp.compare_values(0.0, edges.channel(5, 5, 0).unwrap() as f64, 0.0);

    // Seam columns respond; the first seam is between x=3 and x=4
    let seam = edges.channel(3, 1, 0).unwrap();
    rp.compare_values(1.0, (seam > 0) as u32 as f64, 0.0);
    eprintln!("  seam response: {}", seam);

    // A vertical seam far from horizontal seams is invisible to the
    // horizontal-edge detector
    let horizontal = sobel_edge(&board, EdgeOrientation::Horizontal).expect("horizontal edges");
    rp.compare_values(0.0, horizontal.channel(3, 1, 0).unwrap() as f64, 0.0);

    assert!(rp.cleanup(), "sobel regression test failed");
}
