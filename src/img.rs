//! Whole-image conversions using [`imgref`] types.
//!
//! These handle strided image buffers and produce [`ImgVec`] results, using
//! the SIMD row kernels from [`crate::bytes`].
//!
//! ```rust
//! use rgb::{Bgra, Rgb};
//! use imgref::ImgVec;
//! use png2bgrx::img;
//!
//! let rgb_img = ImgVec::new(vec![Rgb::new(255u8, 0, 128); 100], 10, 10);
//! let bgr0: ImgVec<Bgra<u8>> = img::convert_rgb_to_bgr0(rgb_img.as_ref()).unwrap();
//! assert_eq!(bgr0.buf()[0], Bgra { b: 128, g: 0, r: 255, a: 0 });
//! ```

use alloc::vec;
use alloc::vec::Vec;

use imgref::{ImgRef, ImgVec};
use rgb::{Bgra, Rgb};

use crate::{ConvertError, Region, SizeError};

/// Convert `ImgRef<Rgb<u8>>` to a tightly packed `ImgVec<Bgra<u8>>` with alpha 0.
///
/// Row-major, the whole image. Source stride padding is skipped.
pub fn convert_rgb_to_bgr0(img: ImgRef<'_, Rgb<u8>>) -> Result<ImgVec<Bgra<u8>>, SizeError> {
    let (w, h) = (img.width(), img.height());
    let mut dst = vec![Bgra::default(); w * h];
    let src: &[Rgb<u8>] = img.buf();
    crate::bytes::rgb_to_bgr0_strided(
        bytemuck::cast_slice(src),
        bytemuck::cast_slice_mut(&mut dst[..]),
        w,
        h,
        img.stride() * 3,
        w * 4,
    )?;
    Ok(ImgVec::new(dst, w, h))
}

/// Swap the axes: pixel `(x, y)` of `img` lands at `(y, x)` of the result.
///
/// Row `x` of the result is column `x` of the source. An image with no
/// pixels has no transposed shape and fails with [`ConvertError::EmptyRegion`].
pub fn transpose<T: Copy>(img: ImgRef<'_, T>) -> Result<ImgVec<T>, ConvertError> {
    let (w, h) = (img.width(), img.height());
    if w == 0 || h == 0 {
        return Err(ConvertError::EmptyRegion);
    }
    let mut buf = Vec::with_capacity(w * h);
    for x in 0..w {
        buf.extend(img.rows().map(|row| row[x]));
    }
    Ok(ImgVec::new(buf, h, w))
}

/// Cut `region` out of the top-left corner of `img` and transpose it.
///
/// The result's rows are in column-major dump order.
pub fn transpose_region(
    img: ImgRef<'_, Rgb<u8>>,
    region: Region,
) -> Result<ImgVec<Rgb<u8>>, ConvertError> {
    region.check_fits(img.width(), img.height())?;
    if region.is_empty() {
        return Err(ConvertError::EmptyRegion);
    }
    transpose(img.sub_image(0, 0, region.width, region.height))
}
