use core::arch::wasm32::{i8x16, i8x16_swizzle};

use archmage::prelude::*;
use safe_unaligned_simd::wasm32::{v128_load, v128_store};

// ===========================================================================
// WASM SIMD128 — rite row implementations
// ===========================================================================

#[rite]
pub(super) fn rgb_to_bgr0_row_wasm128(_token: Wasm128Token, src: &[u8], dst: &mut [u8]) {
    // Out-of-range selectors (-128) swizzle to zero: that is the pad byte.
    let shuf = i8x16(2, 1, 0, -128, 5, 4, 3, -128, 8, 7, 6, -128, 11, 10, 9, -128);
    let (slen, dlen) = (src.len(), dst.len());
    let (mut is, mut id) = (0, 0);
    while is + 16 <= slen && id + 16 <= dlen {
        let s: &[u8; 16] = src[is..is + 16].try_into().unwrap();
        let d: &mut [u8; 16] = (&mut dst[id..id + 16]).try_into().unwrap();
        v128_store(d, i8x16_swizzle(v128_load(s), shuf));
        is += 12;
        id += 16;
    }
    for (s, d) in src[is..].chunks_exact(3).zip(dst[id..].chunks_exact_mut(4)) {
        d.copy_from_slice(&[s[2], s[1], s[0], 0]);
    }
}

#[rite]
pub(super) fn bgr0_to_rgb_row_wasm128(_token: Wasm128Token, src: &[u8], dst: &mut [u8]) {
    let mask = i8x16(2, 1, 0, 6, 5, 4, 10, 9, 8, 14, 13, 12, -1, -1, -1, -1);
    let (slen, dlen) = (src.len(), dst.len());
    let (mut is, mut id) = (0, 0);
    while is + 16 <= slen && id + 12 <= dlen {
        let s: &[u8; 16] = src[is..is + 16].try_into().unwrap();
        let mut tmp = [0u8; 16];
        v128_store(&mut tmp, i8x16_swizzle(v128_load(s), mask));
        dst[id..id + 12].copy_from_slice(&tmp[..12]);
        is += 16;
        id += 12;
    }
    for (s, d) in src[is..].chunks_exact(4).zip(dst[id..].chunks_exact_mut(3)) {
        d[0] = s[2];
        d[1] = s[1];
        d[2] = s[0];
    }
}

// ===========================================================================
// WASM arcane wrappers
// ===========================================================================

#[arcane]
pub(super) fn rgb_to_bgr0_impl_wasm128(t: Wasm128Token, s: &[u8], d: &mut [u8]) {
    rgb_to_bgr0_row_wasm128(t, s, d);
}

#[arcane]
pub(super) fn bgr0_to_rgb_impl_wasm128(t: Wasm128Token, s: &[u8], d: &mut [u8]) {
    bgr0_to_rgb_row_wasm128(t, s, d);
}

#[arcane]
pub(super) fn rgb_to_bgr0_strided_wasm128(
    t: Wasm128Token,
    src: &[u8],
    dst: &mut [u8],
    w: usize,
    h: usize,
    ss: usize,
    ds: usize,
) {
    for y in 0..h {
        rgb_to_bgr0_row_wasm128(t, &src[y * ss..][..w * 3], &mut dst[y * ds..][..w * 4]);
    }
}
