use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle (pixels). `x,y` is top-left; `w,h` are sizes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
    /// Exclusive right edge coordinate (`x + w`).
    pub fn right(&self) -> u32 {
        self.x + self.w
    }
    /// Exclusive bottom edge coordinate (`y + h`).
    pub fn bottom(&self) -> u32 {
        self.y + self.h
    }
    pub fn area(&self) -> u64 {
        (self.w as u64) * (self.h as u64)
    }
    /// Returns true if `self` and `other` intersect with positive area.
    /// Rectangles that merely share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(self.x >= other.right()
            || other.x >= self.right()
            || self.y >= other.bottom()
            || other.y >= self.bottom())
    }
}

/// A placed sprite within the sheet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Frame<K = String> {
    /// User-specified key (e.g., source filename without extension).
    pub key: K,
    /// Placed rectangle within the sheet.
    pub frame: Rect,
}

/// A packed sheet: tight bounding box plus placements.
///
/// `frames` follows the input sort order (height desc, width desc, key asc),
/// which is also the order the frame-map exporter emits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Atlas<K = String> {
    pub width: u32,
    pub height: u32,
    pub frames: Vec<Frame<K>>,
}

/// Statistics about packing efficiency.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PackStats {
    /// Number of sprites packed.
    pub num_frames: usize,
    /// Area of the sheet bounding box (width * height).
    pub atlas_area: u64,
    /// Total area covered by sprites (sum of frame width * height).
    pub sprite_area: u64,
    /// Occupancy ratio: sprite_area / atlas_area (0.0 to 1.0).
    /// Higher is better (less wasted space).
    pub occupancy: f64,
}

impl<K> Atlas<K> {
    /// Computes packing statistics for this atlas.
    pub fn stats(&self) -> PackStats {
        let atlas_area = (self.width as u64) * (self.height as u64);
        let sprite_area: u64 = self.frames.iter().map(|f| f.frame.area()).sum();
        let occupancy = if atlas_area > 0 {
            sprite_area as f64 / atlas_area as f64
        } else {
            0.0
        };
        PackStats {
            num_frames: self.frames.len(),
            atlas_area,
            sprite_area,
            occupancy,
        }
    }
}

impl PackStats {
    /// Returns a human-readable summary of the statistics.
    pub fn summary(&self) -> String {
        format!(
            "Frames: {}, Occupancy: {:.2}%, Sheet Area: {} px², Sprite Area: {} px²",
            self.num_frames,
            self.occupancy * 100.0,
            self.atlas_area,
            self.sprite_area,
        )
    }

    /// Returns wasted space in pixels.
    pub fn wasted_area(&self) -> u64 {
        self.atlas_area.saturating_sub(self.sprite_area)
    }

    /// Returns the sheet area relative to the total sprite area, as a
    /// percentage (>= 100.0 for any non-empty layout; 100.0 is a perfect
    /// pack). Zero when there are no sprites.
    pub fn expansion_percentage(&self) -> f64 {
        if self.sprite_area > 0 {
            (self.atlas_area as f64 / self.sprite_area as f64) * 100.0
        } else {
            0.0
        }
    }

    /// Returns wasted space as a percentage (0.0 to 100.0).
    pub fn waste_percentage(&self) -> f64 {
        if self.atlas_area > 0 {
            (self.wasted_area() as f64 / self.atlas_area as f64) * 100.0
        } else {
            0.0
        }
    }
}
