//! # png2bgrx
//!
//! Dump a rectangular pixel region of a PNG as raw `[B, G, R, 0]` records.
//!
//! Each record is four bytes: blue, green, red, then a zero pad byte. Read
//! as a little-endian `u32` that is an XRGB8888 word, the layout Wayland
//! `wl_shm` surfaces and most framebuffers take as-is. The output has no
//! header; its length is always `width * height * 4`.
//!
//! ## Layers
//!
//! - [`bytes`] — row kernels on raw `&[u8]`, SIMD-dispatched (AVX2, WASM
//!   SIMD128, scalar fallback).
//! - [`typed_rgb`] / [`img`] — the same kernels over [`rgb`] pixel types
//!   and [`imgref`] images.
//! - [`convert_region`] and friends — the region dump itself, in
//!   column-major (the classic dump order) or row-major order.
//! - `decode` / `dump` (feature **`png`**) — PNG decoding through the
//!   `image` crate and file output.
//!
//! ```rust
//! use imgref::ImgVec;
//! use rgb::Rgb;
//! use png2bgrx::{Region, ScanOrder, convert_region};
//!
//! let img = ImgVec::new(vec![Rgb::new(10u8, 20, 30); 4], 2, 2);
//! let out = convert_region(img.as_ref(), Region::new(2, 2), ScanOrder::ColumnMajor).unwrap();
//! assert_eq!(&out[..4], &[30, 20, 10, 0]);
//! assert_eq!(out.len(), 2 * 2 * 4);
//! ```
//!
//! ## Feature flags
//!
//! - **`std`** (default) — [`write_region`] over `std::io::Write`.
//! - **`png`** (default) — PNG input and file output.
//! - **`cli`** — the `png2bgrx` command-line tool.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod bytes;
pub mod img;
pub mod typed_rgb;

mod region;
pub use region::*;

#[cfg(feature = "png")]
pub mod decode;
#[cfg(feature = "png")]
pub mod dump;

#[cfg(feature = "cli")]
pub mod cli;

/// Buffer length does not fit the pixel layout of a row kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SizeError {
    /// Source is empty or not a whole number of pixels.
    NotPixelAligned,
    /// Destination holds fewer pixels than the source.
    PixelCountMismatch,
    /// Width, height and stride do not describe the buffer.
    InvalidStride,
}

impl core::fmt::Display for SizeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SizeError::NotPixelAligned => f.write_str("buffer is empty or not pixel-aligned"),
            SizeError::PixelCountMismatch => {
                f.write_str("destination is too small for the source pixel count")
            }
            SizeError::InvalidStride => {
                f.write_str("stride, width and height do not fit the buffer")
            }
        }
    }
}

impl core::error::Error for SizeError {}
