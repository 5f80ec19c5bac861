// ---------------------------------------------------------------------------
// Row-level RGB ↔ BGR0 kernels with SIMD dispatch.
//
// #[rite] row functions hold the SIMD loops. #[arcane] wrappers are the
// incant! targets: contiguous (single call) and strided (loop over rows,
// single dispatch).
// ---------------------------------------------------------------------------

use crate::SizeError;
use archmage::incant;

mod scalar;
use scalar::*;

#[cfg(target_arch = "x86_64")]
mod avx2;
#[cfg(target_arch = "x86_64")]
use avx2::*;

#[cfg(target_arch = "wasm32")]
mod wasm;
#[cfg(target_arch = "wasm32")]
use wasm::*;


// ===========================================================================
// Validation helpers
// ===========================================================================

#[inline]
fn check_copy(
    src_len: usize,
    src_bpp: usize,
    dst_len: usize,
    dst_bpp: usize,
) -> Result<(), SizeError> {
    if src_len == 0 || !src_len.is_multiple_of(src_bpp) {
        return Err(SizeError::NotPixelAligned);
    }
    if dst_len < (src_len / src_bpp) * dst_bpp {
        return Err(SizeError::PixelCountMismatch);
    }
    Ok(())
}

#[inline]
fn check_strided(
    len: usize,
    width: usize,
    height: usize,
    stride: usize,
    bpp: usize,
) -> Result<(), SizeError> {
    if width == 0 || height == 0 {
        return Err(SizeError::InvalidStride);
    }
    let row_bytes = width.checked_mul(bpp).ok_or(SizeError::InvalidStride)?;
    if row_bytes > stride {
        return Err(SizeError::InvalidStride);
    }
    let total = (height - 1)
        .checked_mul(stride)
        .ok_or(SizeError::InvalidStride)?
        .checked_add(row_bytes)
        .ok_or(SizeError::InvalidStride)?;
    if len < total {
        return Err(SizeError::InvalidStride);
    }
    Ok(())
}

// ===========================================================================
// Public API
// ===========================================================================

/// RGB (3 bytes/px) → BGR0 (4 bytes/px). Reverses channel order, pad byte = 0.
///
/// `dst` must hold at least `src.len() / 3 * 4` bytes; bytes past that are
/// left untouched.
///
/// ```rust
/// let mut out = [0xAAu8; 4];
/// png2bgrx::bytes::rgb_to_bgr0(&[10, 20, 30], &mut out).unwrap();
/// assert_eq!(out, [30, 20, 10, 0]);
/// ```
pub fn rgb_to_bgr0(src: &[u8], dst: &mut [u8]) -> Result<(), SizeError> {
    check_copy(src.len(), 3, dst.len(), 4)?;
    incant!(rgb_to_bgr0_impl(src, dst), [v3, wasm128, scalar]);
    Ok(())
}

/// RGB (3 bytes/px) → BGR0 (4 bytes/px) between strided buffers.
///
/// `src_stride` / `dst_stride` are the distances in bytes between the start
/// of consecutive rows. Padding bytes between rows are never read or written.
pub fn rgb_to_bgr0_strided(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
    src_stride: usize,
    dst_stride: usize,
) -> Result<(), SizeError> {
    check_strided(src.len(), width, height, src_stride, 3)?;
    check_strided(dst.len(), width, height, dst_stride, 4)?;
    incant!(
        rgb_to_bgr0_strided(src, dst, width, height, src_stride, dst_stride),
        [v3, wasm128, scalar]
    );
    Ok(())
}

/// BGR0 (4 bytes/px) → RGB (3 bytes/px). The pad byte is ignored.
///
/// Reads a dump back into packed RGB.
pub fn bgr0_to_rgb(src: &[u8], dst: &mut [u8]) -> Result<(), SizeError> {
    check_copy(src.len(), 4, dst.len(), 3)?;
    incant!(bgr0_to_rgb_impl(src, dst), [v3, wasm128, scalar]);
    Ok(())
}
