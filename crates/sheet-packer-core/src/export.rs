use crate::model::Atlas;
use serde_json::{Value, json};

/// Serialize the atlas as a frame map keyed by `<sheet_name>_<frame key>`.
///
/// Shape: `{ frames: { name: { frame: {x, y, w, h} } }, meta: { scale, image } }`,
/// the format sprite runtimes load next to `<sheet_name>.png`. Frames are
/// emitted in placement-table order.
pub fn to_frame_map<K: ToString>(atlas: &Atlas<K>, sheet_name: &str) -> Value {
    let mut frames = serde_json::Map::new();
    for fr in &atlas.frames {
        frames.insert(
            format!("{}_{}", sheet_name, fr.key.to_string()),
            json!({
                "frame": {
                    "x": fr.frame.x,
                    "y": fr.frame.y,
                    "w": fr.frame.w,
                    "h": fr.frame.h,
                }
            }),
        );
    }
    json!({
        "frames": frames,
        "meta": {
            "scale": 1,
            "image": format!("{}.png", sheet_name),
        }
    })
}
