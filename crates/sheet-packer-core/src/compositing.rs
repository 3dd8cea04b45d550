use image::RgbaImage;

/// Blit all of `src` into `canvas` with its top-left at (dx, dy).
///
/// Out-of-bounds destination pixels are skipped rather than panicking; the
/// layout guarantees frames fit, so this only matters for hand-built canvases.
pub fn blit_rgba(src: &RgbaImage, canvas: &mut RgbaImage, dx: u32, dy: u32) {
    let (cw, ch) = canvas.dimensions();
    let (sw, sh) = src.dimensions();
    for yy in 0..sh {
        for xx in 0..sw {
            if dx + xx < cw && dy + yy < ch {
                canvas.put_pixel(dx + xx, dy + yy, *src.get_pixel(xx, yy));
            }
        }
    }
}
