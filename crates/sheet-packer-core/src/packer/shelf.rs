use super::{LayoutState, Placer};
use crate::model::Rect;

/// Row-based placement: sprites go left to right until the width limit is
/// reached, then a new row starts at the tallest baseline seen so far.
pub struct ShelfPlacer;

impl Placer for ShelfPlacer {
    fn place(
        &self,
        w: u32,
        h: u32,
        _placed: &[Rect],
        state: &mut LayoutState,
        limit: u32,
    ) -> Rect {
        shelf_place(w, h, state, limit)
    }
}

/// Shared shelf step, also the fallback of the corner-fit placer.
///
/// A sprite wider than the limit still gets placed at the start of a fresh
/// row; it simply overhangs the limit.
pub(crate) fn shelf_place(w: u32, h: u32, state: &mut LayoutState, limit: u32) -> Rect {
    if state.scan_x.saturating_add(w) > limit {
        state.scan_x = 0;
        state.row_y = state.next_row_y;
    }
    let rect = Rect::new(state.scan_x, state.row_y, w, h);
    state.scan_x += w;
    state.next_row_y = state.next_row_y.max(rect.bottom());
    state.max_x = state.max_x.max(rect.right());
    rect
}
