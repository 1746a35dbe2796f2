//! Binary morphological operations
//!
//! Implements erosion, dilation, opening, and closing over [`BooleanGrid`]s.
//!
//! # Boundary convention
//!
//! Cells outside the grid are background:
//!
//! - Dilation ignores probes that land outside the grid
//! - Erosion fails any probe that lands outside the grid
//!
//! With these rules an all-clear structuring element dilates to an all-clear
//! grid and erodes to an all-set grid (no probe can fail).

use crate::{MorphError, MorphResult, OperationKind, StructuringElement};
use morphview_core::BooleanGrid;

/// Dilate a binary grid
///
/// A cell is set iff at least one set offset `(dr, dc)` of the element
/// probes an in-bounds set cell at `(row + dr, col + dc)`.
pub fn dilate(input: &BooleanGrid, sel: &StructuringElement) -> MorphResult<BooleanGrid> {
    check_sel(sel)?;

    let (h, w) = input.shape();
    let offsets: Vec<_> = sel.offsets().collect();
    let mut out = BooleanGrid::new(h, w)?;

    for r in 0..h {
        for c in 0..w {
            let hit = offsets
                .iter()
                .any(|&(dr, dc)| probe(input, r, c, dr, dc) == Some(true));
            if hit {
                out.set_unchecked(r, c, true);
            }
        }
    }

    Ok(out)
}

/// Erode a binary grid
///
/// A cell is set iff every set offset `(dr, dc)` of the element probes an
/// in-bounds set cell at `(row + dr, col + dc)`.
pub fn erode(input: &BooleanGrid, sel: &StructuringElement) -> MorphResult<BooleanGrid> {
    check_sel(sel)?;

    let (h, w) = input.shape();
    let offsets: Vec<_> = sel.offsets().collect();
    let mut out = BooleanGrid::new(h, w)?;

    for r in 0..h {
        for c in 0..w {
            // Outside the grid: probe is None, which fails the test
            let fits = offsets
                .iter()
                .all(|&(dr, dc)| probe(input, r, c, dr, dc) == Some(true));
            if fits {
                out.set_unchecked(r, c, true);
            }
        }
    }

    Ok(out)
}

/// Open a binary grid
///
/// Opening = Erosion followed by Dilation.
/// Removes small foreground objects and smooths contours.
pub fn open(input: &BooleanGrid, sel: &StructuringElement) -> MorphResult<BooleanGrid> {
    let eroded = erode(input, sel)?;
    dilate(&eroded, sel)
}

/// Close a binary grid
///
/// Closing = Dilation followed by Erosion.
/// Fills small holes and connects nearby objects.
pub fn close(input: &BooleanGrid, sel: &StructuringElement) -> MorphResult<BooleanGrid> {
    let dilated = dilate(input, sel)?;
    erode(&dilated, sel)
}

/// Apply the selected operation
///
/// # Example
///
/// ```
/// use morphview_core::BooleanGrid;
/// use morphview_morph::{OperationKind, StructuringElement, apply};
///
/// let input = BooleanGrid::parse("...\n.x.\n...").unwrap();
/// let sel = StructuringElement::new(3, 3).unwrap();
///
/// let dilated = apply(&input, &sel, OperationKind::Dilation).unwrap();
/// assert!(dilated.is_full());
///
/// let eroded = apply(&input, &sel, OperationKind::Erosion).unwrap();
/// assert!(eroded.is_clear());
/// ```
pub fn apply(
    input: &BooleanGrid,
    sel: &StructuringElement,
    op: OperationKind,
) -> MorphResult<BooleanGrid> {
    match op {
        OperationKind::Erosion => erode(input, sel),
        OperationKind::Dilation => dilate(input, sel),
        OperationKind::Opening => open(input, sel),
        OperationKind::Closing => close(input, sel),
    }
}

/// Apply an operation given by name
///
/// # Errors
///
/// Returns [`MorphError::InvalidOperation`] if `name` is not one of the four
/// operations. The input is not examined in that case.
pub fn apply_named(
    input: &BooleanGrid,
    sel: &StructuringElement,
    name: &str,
) -> MorphResult<BooleanGrid> {
    let op: OperationKind = name.parse()?;
    apply(input, sel, op)
}

#[inline]
fn probe(input: &BooleanGrid, r: usize, c: usize, dr: isize, dc: isize) -> Option<bool> {
    input.probe(r as isize + dr, c as isize + dc)
}

fn check_sel(sel: &StructuringElement) -> MorphResult<()> {
    if sel.height() == 0 || sel.width() == 0 {
        return Err(MorphError::ShapeMismatch(format!(
            "structuring element must be at least 1x1, got {}x{}",
            sel.height(),
            sel.width()
        )));
    }
    Ok(())
}
