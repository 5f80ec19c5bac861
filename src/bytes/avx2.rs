use archmage::prelude::*;
use safe_unaligned_simd::x86_64::{_mm256_loadu_si256, _mm256_storeu_si256};

// ===========================================================================
// SIMD constants
// ===========================================================================

// Per 128-bit lane: reverse each 3-byte group into a 4-byte slot, pad byte
// zeroed by the -128 (high bit set) selector.
const RGB_TO_BGR0_SHUF_AVX: [i8; 32] = [
    2, 1, 0, -128, 5, 4, 3, -128, 8, 7, 6, -128, 11, 10, 9, -128, 2, 1, 0, -128, 5, 4, 3, -128, 8,
    7, 6, -128, 11, 10, 9, -128,
];

// Dword permutation [0, 1, 2, 3, 3, 4, 5, 6]: the second lane starts at
// source byte 12, so each lane holds four whole RGB pixels.
const RGB_ALIGN_PERM_AVX: [i8; 32] = [
    0, 0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 3, 0, 0, 0, 3, 0, 0, 0, 4, 0, 0, 0, 5, 0, 0, 0, 6, 0, 0, 0,
];

// Per lane: pick bytes 2,1,0 of each 4-byte record (swap + strip pad).
const BGR0_TO_RGB_SHUF_AVX: [i8; 32] = [
    2, 1, 0, 6, 5, 4, 10, 9, 8, 14, 13, 12, -128, -128, -128, -128, 2, 1, 0, 6, 5, 4, 10, 9, 8, 14,
    13, 12, -128, -128, -128, -128,
];

// Dword permutation [0, 1, 2, 4, 5, 6, 0, 0]: pack 12 bytes from each lane
// into 24 contiguous bytes.
const PACK_3X4_PERM_AVX: [i8; 32] = [
    0, 0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 4, 0, 0, 0, 5, 0, 0, 0, 6, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

// ===========================================================================
// x86-64 AVX2 — rite row implementations
// ===========================================================================

#[rite]
pub(super) fn rgb_to_bgr0_row_v3(_token: X64V3Token, src: &[u8], dst: &mut [u8]) {
    let perm = _mm256_loadu_si256(&RGB_ALIGN_PERM_AVX);
    let shuf = _mm256_loadu_si256(&RGB_TO_BGR0_SHUF_AVX);
    let (slen, dlen) = (src.len(), dst.len());
    let (mut is, mut id) = (0, 0);
    // 32-byte loads, 24 bytes (8 pixels) consumed per step.
    while is + 32 <= slen && id + 32 <= dlen {
        let s: &[u8; 32] = src[is..is + 32].try_into().unwrap();
        let rgb = _mm256_loadu_si256(s);
        let aligned = _mm256_permutevar8x32_epi32(rgb, perm);
        let bgr0 = _mm256_shuffle_epi8(aligned, shuf);
        let d: &mut [u8; 32] = (&mut dst[id..id + 32]).try_into().unwrap();
        _mm256_storeu_si256(d, bgr0);
        is += 24;
        id += 32;
    }
    for (s, d) in src[is..].chunks_exact(3).zip(dst[id..].chunks_exact_mut(4)) {
        d.copy_from_slice(&[s[2], s[1], s[0], 0]);
    }
}

// Read-back direction: strips the pad byte of each dump record.
#[rite]
pub(super) fn bgr0_to_rgb_row_v3(_token: X64V3Token, src: &[u8], dst: &mut [u8]) {
    let shuf = _mm256_loadu_si256(&BGR0_TO_RGB_SHUF_AVX);
    let pack = _mm256_loadu_si256(&PACK_3X4_PERM_AVX);
    let (slen, dlen) = (src.len(), dst.len());
    let (mut is, mut id) = (0, 0);
    while is + 32 <= slen && id + 24 <= dlen {
        let s: &[u8; 32] = src[is..is + 32].try_into().unwrap();
        let stripped = _mm256_shuffle_epi8(_mm256_loadu_si256(s), shuf);
        let packed = _mm256_permutevar8x32_epi32(stripped, pack);
        let mut tmp = [0u8; 32];
        _mm256_storeu_si256(&mut tmp, packed);
        dst[id..id + 24].copy_from_slice(&tmp[..24]);
        is += 32;
        id += 24;
    }
    for (s, d) in src[is..].chunks_exact(4).zip(dst[id..].chunks_exact_mut(3)) {
        d[0] = s[2];
        d[1] = s[1];
        d[2] = s[0];
    }
}

// ===========================================================================
// x86-64 arcane wrappers
// ===========================================================================

#[arcane]
pub(super) fn rgb_to_bgr0_impl_v3(t: X64V3Token, s: &[u8], d: &mut [u8]) {
    rgb_to_bgr0_row_v3(t, s, d);
}

#[arcane]
pub(super) fn bgr0_to_rgb_impl_v3(t: X64V3Token, s: &[u8], d: &mut [u8]) {
    bgr0_to_rgb_row_v3(t, s, d);
}

#[arcane]
pub(super) fn rgb_to_bgr0_strided_v3(
    t: X64V3Token,
    src: &[u8],
    dst: &mut [u8],
    w: usize,
    h: usize,
    ss: usize,
    ds: usize,
) {
    for y in 0..h {
        rgb_to_bgr0_row_v3(t, &src[y * ss..][..w * 3], &mut dst[y * ds..][..w * 4]);
    }
}
