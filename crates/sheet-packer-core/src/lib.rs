//! Core library for packing sprites into a single sprite-sheet atlas.
//!
//! - Placement: shelf rows with optional corner-fit nesting, behind a strategy switch
//! - Driver: retries the full layout with a growing row-width limit until the
//!   sheet is at least as wide as it is tall
//! - Pipeline: `pack_images` takes in-memory images and returns the composited
//!   RGBA sheet plus a serde-serializable atlas; `export::to_frame_map` emits
//!   the frame-map JSON consumed by sprite runtimes.
//!
//! Quick example:
//! ```ignore
//! use image::ImageReader;
//! use sheet_packer_core::{InputImage, PackerConfig, pack_images};
//! # fn main() -> anyhow::Result<()> {
//! let img1 = ImageReader::open("a.png")?.decode()?;
//! let img2 = ImageReader::open("b.png")?.decode()?;
//! let inputs = vec![
//!   InputImage { key: "a".into(), image: img1 },
//!   InputImage { key: "b".into(), image: img2 },
//! ];
//! let out = pack_images(inputs, PackerConfig::default())?;
//! println!("sheet: {}x{}", out.atlas.width, out.atlas.height);
//! # Ok(()) }
//! ```

pub mod compositing;
pub mod config;
pub mod error;
pub mod export;
pub mod layout;
pub mod model;
pub mod packer;
pub mod pipeline;

pub use config::*;
pub use error::*;
pub use export::*;
pub use layout::*;
pub use model::*;
pub use pipeline::*;

/// Convenience prelude for common types and functions.
/// Importing `sheet_packer_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::config::{GrowthPolicy, PackerConfig, PackerConfigBuilder, Strategy};
    pub use crate::export::to_frame_map;
    pub use crate::model::{Atlas, Frame, PackStats, Rect};
    pub use crate::{InputImage, PackOutput, pack_images, pack_layout};
}
