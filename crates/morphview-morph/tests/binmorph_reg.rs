//! Binary morphology regression test
//!
//! Checks erosion, dilation, opening, and closing against hand-computed
//! grids, including the boundary convention and degenerate elements.
//!
//! Run with:
//! ```
//! cargo test -p morphview-morph --test binmorph_reg
//! ```

use morphview_core::BooleanGrid;
use morphview_morph::{
    MorphError, OperationKind, StructuringElement, apply, apply_named, close, dilate, erode, open,
};
use morphview_test::RegParams;

fn grid(text: &str) -> BooleanGrid {
    BooleanGrid::parse(text).expect("valid grid text")
}

#[test]
fn binmorph_reg() {
    let mut rp = RegParams::new("binmorph");
    let brick = StructuringElement::new(3, 3).unwrap();

    // Center pixel of a 3x3 grid with a 3x3 brick
    eprintln!("  Testing center pixel");
    let center = grid("...\n.x.\n...");
    rp.compare_grids(
        &BooleanGrid::filled(3, 3, true).unwrap(),
        &dilate(&center, &brick).unwrap(),
    );
    rp.compare_grids(
        &BooleanGrid::new(3, 3).unwrap(),
        &erode(&center, &brick).unwrap(),
    );
    // Opening removes the isolated pixel; closing fills then erodes at the border
    rp.compare_grids(
        &BooleanGrid::new(3, 3).unwrap(),
        &open(&center, &brick).unwrap(),
    );
    rp.compare_grids(&center, &close(&center, &brick).unwrap());

    // 1x1 set grid with the identity element
    eprintln!("  Testing 1x1 identity");
    let one = BooleanGrid::single(true);
    for op in OperationKind::ALL {
        rp.compare_grids(&one, &apply(&one, &StructuringElement::identity(), op).unwrap());
    }

    // Larger scene: a blob with a one-cell hole and a stray pixel
    eprintln!("  Testing blob scene");
    let scene = grid(
        "x.........
         ..........
         ..xxxxx...
         ..xxxxx...
         ..xx.xx...
         ..xxxxx...
         ..xxxxx...
         ..........
         .......x..
         ..........",
    );
    rp.show_grid("scene", &scene);

    let expected_erosion = grid(
        "..........
         ..........
         ..........
         ..........
         ..........
         ..........
         ..........
         ..........
         ..........
         ..........",
    );
    rp.compare_grids(&expected_erosion, &erode(&scene, &brick).unwrap());

    let expected_dilation = grid(
        "xx........
         xxxxxxxx..
         .xxxxxxx..
         .xxxxxxx..
         .xxxxxxx..
         .xxxxxxx..
         .xxxxxxx..
         .xxxxxxxx.
         ......xxx.
         ......xxx.",
    );
    rp.compare_grids(&expected_dilation, &dilate(&scene, &brick).unwrap());

    let expected_closing = grid(
        "..........
         ..........
         ..xxxxx...
         ..xxxxx...
         ..xxxxx...
         ..xxxxx...
         ..xxxxx...
         ..........
         .......x..
         ..........",
    );
    let closed = close(&scene, &brick).unwrap();
    rp.show_grid("closing", &closed);
    rp.compare_grids(&expected_closing, &closed);

    // Cross element keeps the hole from eroding the whole blob
    eprintln!("  Testing cross element");
    let cross = StructuringElement::cross(3).unwrap();
    let expected_cross_erosion = grid(
        "..........
         ..........
         ..........
         ...x.x....
         ..........
         ...x.x....
         ..........
         ..........
         ..........
         ..........",
    );
    rp.compare_grids(&expected_cross_erosion, &erode(&scene, &cross).unwrap());

    assert!(rp.cleanup());
}

#[test]
fn degenerate_elements_reg() {
    let mut rp = RegParams::new("degenerate_elements");
    let scene = grid("x..x\n.xx.\n....");

    // All-clear element: no probe can hit, no probe can fail
    let empty = StructuringElement::from_grid(BooleanGrid::new(3, 3).unwrap());
    rp.compare_grids(&BooleanGrid::new(3, 4).unwrap(), &dilate(&scene, &empty).unwrap());
    rp.compare_grids(
        &BooleanGrid::filled(3, 4, true).unwrap(),
        &erode(&scene, &empty).unwrap(),
    );

    // Identity element on a larger grid
    let id = StructuringElement::identity();
    for op in OperationKind::ALL {
        rp.compare_grids(&scene, &apply(&scene, &id, op).unwrap());
    }

    // Even-sized element: origin (1, 1), offsets reach up and left
    let even = StructuringElement::new(2, 2).unwrap();
    let dot = grid("....\n.x..\n....");
    rp.compare_grids(&grid("....\n.xx.\n.xx."), &dilate(&dot, &even).unwrap());
    let square = grid("xx..\nxx..\n....");
    rp.compare_grids(&grid("....\n.x..\n...."), &erode(&square, &even).unwrap());

    assert!(rp.cleanup());
}

#[test]
fn error_conditions_reg() {
    let mut rp = RegParams::new("error_conditions");

    let rows: Vec<Vec<bool>> = vec![vec![]];
    rp.check(
        matches!(
            StructuringElement::from_rows(&rows),
            Err(MorphError::ShapeMismatch(_))
        ),
        "empty element rows",
    );

    let scene = grid("x.\n.x");
    let sel = StructuringElement::identity();
    rp.check(
        matches!(
            apply_named(&scene, &sel, "skeletonize"),
            Err(MorphError::InvalidOperation(_))
        ),
        "unknown operation name",
    );
    rp.compare_grids(&scene, &apply_named(&scene, &sel, "Opening").unwrap());

    assert!(rp.cleanup());
}
