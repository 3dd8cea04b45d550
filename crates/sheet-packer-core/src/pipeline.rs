use crate::config::PackerConfig;
use crate::error::Result;
use crate::layout::pack_layout;
use crate::model::Atlas;
use image::{DynamicImage, RgbaImage};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// In-memory image to pack (key + decoded image).
pub struct InputImage {
    pub key: String,
    pub image: DynamicImage,
}

/// Output of a packing run: the atlas record and the composited RGBA sheet.
pub struct PackOutput {
    pub atlas: Atlas,
    pub rgba: RgbaImage,
}

impl PackOutput {
    /// Convenience delegate to `atlas.stats()`.
    pub fn stats(&self) -> crate::model::PackStats {
        self.atlas.stats()
    }
}

#[instrument(skip_all)]
/// Packs `inputs` into a single sheet and composites each source image at its
/// assigned position. Only dimensions feed the layout; pixel data is consumed
/// here, after the layout is accepted.
pub fn pack_images(inputs: Vec<InputImage>, cfg: PackerConfig) -> Result<PackOutput> {
    let mut rgbas: HashMap<String, RgbaImage> = HashMap::with_capacity(inputs.len());
    let mut sizes: Vec<(String, u32, u32)> = Vec::with_capacity(inputs.len());
    for inp in inputs {
        let rgba = inp.image.to_rgba8();
        let (w, h) = rgba.dimensions();
        sizes.push((inp.key.clone(), w, h));
        rgbas.insert(inp.key, rgba);
    }

    let atlas = pack_layout(sizes, cfg)?;

    let mut canvas = RgbaImage::new(atlas.width, atlas.height);
    for f in &atlas.frames {
        if let Some(src) = rgbas.get(&f.key) {
            crate::compositing::blit_rgba(src, &mut canvas, f.frame.x, f.frame.y);
        }
    }

    let stats = atlas.stats();
    debug!(
        frames = stats.num_frames,
        width = atlas.width,
        height = atlas.height,
        occupancy = format!("{:.2}%", stats.occupancy * 100.0),
        "sheet composited"
    );
    Ok(PackOutput { atlas, rgba: canvas })
}
