//! Conversions over [`rgb`] pixel types, reinterpreted with bytemuck.
//!
//! A BGR0 record is a [`Bgra<u8>`] whose `a` is always 0.
//!
//! ```rust
//! use rgb::{Bgra, Rgb};
//! use png2bgrx::typed_rgb;
//!
//! let src = vec![Rgb::new(255u8, 0, 128); 10];
//! let mut dst = vec![Bgra::default(); 10];
//! typed_rgb::rgb_to_bgr0_buf(&src, &mut dst).unwrap();
//! assert_eq!(dst[0], Bgra { b: 128, g: 0, r: 255, a: 0 });
//! ```

use crate::SizeError;
use rgb::{Bgra, Rgb};

/// Copy `&[Rgb<u8>]` into `&mut [Bgra<u8>]` with alpha forced to 0.
pub fn rgb_to_bgr0_buf(src: &[Rgb<u8>], dst: &mut [Bgra<u8>]) -> Result<(), SizeError> {
    let src_bytes: &[u8] = bytemuck::cast_slice(src);
    let dst_bytes: &mut [u8] = bytemuck::cast_slice_mut(dst);
    crate::bytes::rgb_to_bgr0(src_bytes, dst_bytes)
}

/// Copy `&[Bgra<u8>]` back into `&mut [Rgb<u8>]`, dropping alpha.
pub fn bgr0_to_rgb_buf(src: &[Bgra<u8>], dst: &mut [Rgb<u8>]) -> Result<(), SizeError> {
    let src_bytes: &[u8] = bytemuck::cast_slice(src);
    let dst_bytes: &mut [u8] = bytemuck::cast_slice_mut(dst);
    crate::bytes::bgr0_to_rgb(src_bytes, dst_bytes)
}

/// View BGR0 records as the raw bytes written to a dump.
pub fn records_as_bytes(records: &[Bgra<u8>]) -> &[u8] {
    bytemuck::cast_slice(records)
}
