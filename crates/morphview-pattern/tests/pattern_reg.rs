//! Input pattern regression test
//!
//! Checks glyph placement in the default workbench grid, clipping in
//! grids smaller than a glyph, and the fill rate of random grids.
//!
//! Run with:
//! ```
//! cargo test -p morphview-pattern --test pattern_reg
//! ```

use morphview_core::BooleanGrid;
use morphview_pattern::{GLYPH_HEIGHT, GLYPH_WIDTH, glyph, random_grid, render_glyph, render_text};
use morphview_test::RegParams;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn glyph_placement_reg() {
    let mut rp = RegParams::new("glyph_placement");

    let expected = BooleanGrid::parse(
        "..........
         ..xxxxx...
         ....x.....
         ....x.....
         ....x.....
         ....x.....
         ....x.....
         ....x.....
         ..........
         ..........",
    )
    .unwrap();
    let t = render_glyph('T', 10, 10).unwrap();
    rp.compare_grids(&expected, &t);
    rp.show_grid("T in 10x10", &t);

    // Lowercase and text input resolve to the same glyph
    rp.compare_grids(&t, &render_glyph('t', 10, 10).unwrap());
    rp.compare_grids(&t, &render_text("Tree", 10, 10).unwrap());

    // Glyphs with no bitmap and empty text give a clear grid
    rp.check(render_glyph('#', 10, 10).unwrap().is_clear(), "unknown glyph");
    rp.check(render_text("  ", 10, 10).unwrap().is_clear(), "empty text");

    // Exact fit at the top-left corner
    let exact = render_glyph('L', GLYPH_HEIGHT, GLYPH_WIDTH).unwrap();
    rp.compare_grids(&glyph('L').unwrap(), &exact);

    assert!(rp.cleanup());
}

#[test]
fn glyph_clipping_reg() {
    let mut rp = RegParams::new("glyph_clipping");

    // Only the first four rows and three columns of 'L' survive
    let expected = BooleanGrid::parse(
        "x..
         x..
         x..
         x..",
    )
    .unwrap();
    rp.compare_grids(&expected, &render_glyph('L', 4, 3).unwrap());

    let tiny = render_glyph('8', 1, 1).unwrap();
    rp.compare_values(1.0, tiny.count_true() as f64, 0.0);

    assert!(rp.cleanup());
}

#[test]
fn random_fill_reg() {
    let mut rp = RegParams::new("random_fill");
    let mut rng = StdRng::seed_from_u64(42);

    let empty = random_grid(20, 20, 0.0, &mut rng).unwrap();
    rp.check(empty.is_clear(), "density 0 is clear");
    let full = random_grid(20, 20, 1.0, &mut rng).unwrap();
    rp.check(full.is_full(), "density 1 is full");

    // 10000 cells at 0.3: the fill rate stays well inside +-0.03
    let grid = random_grid(100, 100, 0.3, &mut rng).unwrap();
    let rate = grid.count_true() as f64 / 10_000.0;
    rp.compare_values(0.3, rate, 0.03);

    // Same seed, same grid
    let a = random_grid(10, 10, 0.5, &mut StdRng::seed_from_u64(7)).unwrap();
    let b = random_grid(10, 10, 0.5, &mut StdRng::seed_from_u64(7)).unwrap();
    rp.compare_grids(&a, &b);

    rp.check(random_grid(4, 4, 1.5, &mut rng).is_err(), "density above 1");
    rp.check(random_grid(4, 4, -0.1, &mut rng).is_err(), "negative density");

    assert!(rp.cleanup());
}
