use crate::config::{GrowthPolicy, PackerConfig, Strategy};
use crate::error::{Result, SheetPackerError};
use crate::model::{Atlas, Frame, Rect};
use crate::packer::corner::CornerFitPlacer;
use crate::packer::shelf::ShelfPlacer;
use crate::packer::{LayoutState, Placer};
use tracing::{debug, instrument, trace};

#[instrument(skip_all)]
/// Packs sizes into a single sheet without touching pixel data.
///
/// Inputs are `(key, width, height)`. Sprites are sorted by height desc, then
/// width desc, then key asc; the returned `Atlas` lists frames in that order.
/// The outer loop retries the whole layout with a growing row-width limit
/// until the sheet comes out at least as wide as it is tall.
///
/// Total over the empty set: no sprites yields a `0x0` atlas, not an error.
/// A single sprite is returned at the origin immediately, since growing the
/// limit cannot change its placement and a lone tall sprite would never
/// satisfy the squareness test.
pub fn pack_layout<K: Into<String>>(
    inputs: Vec<(K, u32, u32)>,
    cfg: PackerConfig,
) -> Result<Atlas<String>> {
    cfg.validate()?;

    let mut items: Vec<(String, u32, u32)> = Vec::with_capacity(inputs.len());
    for (k, w, h) in inputs {
        let key = k.into();
        if w == 0 || h == 0 {
            return Err(SheetPackerError::InvalidSpriteSize {
                key,
                width: w,
                height: h,
            });
        }
        items.push((key, w, h));
    }

    if items.is_empty() {
        return Ok(Atlas {
            width: 0,
            height: 0,
            frames: Vec::new(),
        });
    }

    // Tall sprites first so they anchor rows early; key as the final
    // deterministic tie-break.
    items.sort_by(|a, b| {
        b.2.cmp(&a.2)
            .then_with(|| b.1.cmp(&a.1))
            .then_with(|| a.0.cmp(&b.0))
    });

    if let [(key, w, h)] = items.as_slice() {
        let rect = Rect::new(0, 0, *w, *h);
        return Ok(Atlas {
            width: *w,
            height: *h,
            frames: vec![Frame {
                key: key.clone(),
                frame: rect,
            }],
        });
    }

    let placer: Box<dyn Placer> = match cfg.strategy {
        Strategy::ShelfOnly => Box::new(ShelfPlacer),
        Strategy::CornerFitThenShelf => Box::new(CornerFitPlacer),
    };

    let mut limit = cfg.initial_width_limit;
    let mut attempt = 0u32;
    while attempt < cfg.max_attempts {
        attempt += 1;
        let rects = run_attempt(&items, placer.as_ref(), limit);
        let (width, height) = bounds(&rects);
        trace!(attempt, limit, width, height, "layout attempt");
        if width >= height {
            debug!(attempt, width, height, "layout accepted");
            return Ok(assemble(items, rects, width, height));
        }
        let next = match cfg.growth {
            GrowthPolicy::Double => limit.saturating_mul(2),
            GrowthPolicy::AddFixed(n) => limit.saturating_add(n),
        };
        if next <= limit {
            // Saturated at u32::MAX; the limit can no longer increase.
            break;
        }
        limit = next;
    }
    Err(SheetPackerError::NonConvergence {
        attempts: attempt,
        limit,
    })
}

/// One full pass over the sorted sprites with a fresh scan state.
fn run_attempt(items: &[(String, u32, u32)], placer: &dyn Placer, limit: u32) -> Vec<Rect> {
    let mut state = LayoutState::default();
    let mut placed: Vec<Rect> = Vec::with_capacity(items.len());
    for (_, w, h) in items {
        let rect = placer.place(*w, *h, &placed, &mut state, limit);
        placed.push(rect);
    }
    placed
}

/// Tight bounding box over placed rectangles.
fn bounds(rects: &[Rect]) -> (u32, u32) {
    let width = rects.iter().map(Rect::right).max().unwrap_or(0);
    let height = rects.iter().map(Rect::bottom).max().unwrap_or(0);
    (width, height)
}

/// Pure projection of final positions into the exported atlas.
fn assemble(
    items: Vec<(String, u32, u32)>,
    rects: Vec<Rect>,
    width: u32,
    height: u32,
) -> Atlas<String> {
    let frames = items
        .into_iter()
        .zip(rects)
        .map(|((key, _, _), frame)| Frame { key, frame })
        .collect();
    Atlas {
        width,
        height,
        frames,
    }
}
