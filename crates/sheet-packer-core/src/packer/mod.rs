use crate::model::Rect;

pub mod corner;
pub mod shelf;

/// Scan state threaded through one layout attempt.
///
/// `scan_x`/`row_y` are the insertion point of the current row, `next_row_y`
/// is the baseline the next row will start at, and `max_x` is the widest
/// right edge placed so far. Resetting an attempt is just `Default::default()`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LayoutState {
    pub scan_x: u32,
    pub row_y: u32,
    pub next_row_y: u32,
    pub max_x: u32,
}

/// A placer assigns a position to one sprite given everything placed before it.
///
/// Implementations are total: every sprite gets a position, possibly past the
/// width limit for sprites wider than the limit itself. They must never
/// produce a rectangle overlapping an entry of `placed`.
pub trait Placer {
    fn place(&self, w: u32, h: u32, placed: &[Rect], state: &mut LayoutState, limit: u32) -> Rect;
}
