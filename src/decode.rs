//! PNG input through the `image` crate.

use std::path::Path;

use image::{ImageReader, RgbImage};
use imgref::ImgRef;
use rgb::Rgb;

use crate::dump::DumpError;

/// Open and decode `path` into 8-bit RGB.
///
/// Alpha, palette and 16-bit samples are flattened the way
/// `DynamicImage::to_rgb8` does it.
pub fn open_rgb(path: &Path) -> Result<RgbImage, DumpError> {
    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|source| DumpError::Open {
            path: path.to_path_buf(),
            source,
        })?;
    let decoded = reader.decode().map_err(|source| DumpError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!(
        "decoded {}: {}x{} {:?}",
        path.display(),
        decoded.width(),
        decoded.height(),
        decoded.color()
    );
    Ok(decoded.to_rgb8())
}

/// Borrow a decoded image as an `ImgRef` of `rgb` pixels, without copying.
pub fn as_imgref(img: &RgbImage) -> ImgRef<'_, Rgb<u8>> {
    let raw: &[u8] = img.as_raw();
    let pixels: &[Rgb<u8>] = bytemuck::cast_slice(raw);
    ImgRef::new(pixels, img.width() as usize, img.height() as usize)
}
