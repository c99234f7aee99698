use std::path::Path;

use anyhow::Context;

use crate::foundation::error::{PixelbrushError, PixelbrushResult};
use crate::surface::raster::SourceImage;

/// Decode encoded image bytes (PNG, JPEG, ...) into a premultiplied [`SourceImage`].
pub fn decode_image(bytes: &[u8]) -> PixelbrushResult<SourceImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| PixelbrushError::decode(format!("decode image from memory: {e}")))?;
    SourceImage::from_rgba_image(dyn_img.to_rgba8())
}

/// Read and decode an image file.
pub fn load_image(path: impl AsRef<Path>) -> PixelbrushResult<SourceImage> {
    let path = path.as_ref();
    let bytes =
        std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
    let img = decode_image(&bytes)?;
    tracing::debug!(
        path = %path.display(),
        width = img.intrinsic_size().width,
        height = img.intrinsic_size().height,
        "image loaded"
    );
    Ok(img)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
