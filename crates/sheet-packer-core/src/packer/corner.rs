use super::shelf::shelf_place;
use super::{LayoutState, Placer};
use crate::model::Rect;

/// Corner-fit placement with shelf fallback.
///
/// Before starting or extending the current row, try to nest the sprite into
/// unused area above the current scan line, flush against the corner of an
/// already-placed sprite. Falls back to [`shelf_place`] when nothing fits.
pub struct CornerFitPlacer;

impl Placer for CornerFitPlacer {
    fn place(&self, w: u32, h: u32, placed: &[Rect], state: &mut LayoutState, limit: u32) -> Rect {
        if let Some(rect) = corner_fit(w, h, placed, state) {
            // Nested placements sit inside the already-occupied envelope, so
            // scan_x / row_y / max_x are unchanged.
            return rect;
        }
        shelf_place(w, h, state, limit)
    }
}

/// Tries each placed sprite as an anchor, oldest first, with two candidate
/// positions per anchor: to the right of it and below it. A candidate is
/// accepted if it stays within the occupied width, does not reach below the
/// current row baseline, and overlaps no placed sprite. First hit wins; the
/// scan order is a deliberate, reproducible tie-break.
///
/// The bottom edge is bounded by the current row baseline rather than the
/// eventual sheet height, restricting nesting to rows already fully scanned.
fn corner_fit(w: u32, h: u32, placed: &[Rect], state: &LayoutState) -> Option<Rect> {
    for anchor in placed {
        for (x, y) in [(anchor.right(), anchor.y), (anchor.x, anchor.bottom())] {
            let cand = Rect::new(x, y, w, h);
            if cand.right() > state.max_x || cand.bottom() > state.row_y {
                continue;
            }
            if placed.iter().any(|p| p.overlaps(&cand)) {
                continue;
            }
            return Some(cand);
        }
    }
    None
}
