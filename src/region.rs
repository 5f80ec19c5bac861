// ---------------------------------------------------------------------------
// Region dump: a width × height rectangle anchored at (0, 0), serialized as
// one [B, G, R, 0] record per pixel.
//
// Column-major order walks x in the outer loop and y in the inner loop, so
// record k = x * height + y. Row-major is the framebuffer order,
// k = y * width + x. Either way each output "line" (a column or a row) is
// gathered as packed RGB and pushed through one SIMD kernel call.
// ---------------------------------------------------------------------------

use alloc::vec;
use alloc::vec::Vec;

use imgref::ImgRef;
use rgb::{Bgra, Rgb};

use crate::SizeError;

/// Region width used when none is given.
pub const DEFAULT_WIDTH: usize = 827;
/// Region height used when none is given.
pub const DEFAULT_HEIGHT: usize = 646;

/// Bytes per output record.
pub const RECORD_LEN: usize = 4;

/// The rectangle `[0, width) × [0, height)` of the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    pub width: usize,
    pub height: usize,
}

impl Default for Region {
    /// 827 × 646.
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl Region {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// `width * height`, or `None` on overflow.
    pub const fn pixel_count(&self) -> Option<usize> {
        self.width.checked_mul(self.height)
    }

    /// Exact size of the dump in bytes: `width * height * 4`.
    pub fn output_len(&self) -> Result<usize, ConvertError> {
        self.pixel_count()
            .and_then(|n| n.checked_mul(RECORD_LEN))
            .ok_or(ConvertError::RegionTooLarge)
    }

    /// Fails unless the region lies inside a `image_width × image_height` image.
    pub fn check_fits(&self, image_width: usize, image_height: usize) -> Result<(), ConvertError> {
        if self.width > image_width || self.height > image_height {
            return Err(ConvertError::RegionOutOfBounds {
                region_width: self.width,
                region_height: self.height,
                image_width,
                image_height,
            });
        }
        Ok(())
    }

    /// Shrink each side to at most the image's.
    pub fn clamp_to(self, image_width: usize, image_height: usize) -> Self {
        Self::new(self.width.min(image_width), self.height.min(image_height))
    }
}

/// Order in which region pixels become records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScanOrder {
    /// Outer loop over x, inner over y: one column after another.
    #[default]
    ColumnMajor,
    /// Outer loop over y, inner over x: one row after another.
    RowMajor,
}

impl ScanOrder {
    /// Pixels per output line (a column or a row).
    pub const fn line_len(self, region: Region) -> usize {
        match self {
            ScanOrder::ColumnMajor => region.height,
            ScanOrder::RowMajor => region.width,
        }
    }

    /// Number of output lines.
    pub const fn line_count(self, region: Region) -> usize {
        match self {
            ScanOrder::ColumnMajor => region.width,
            ScanOrder::RowMajor => region.height,
        }
    }
}

/// Region conversion failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConvertError {
    /// The region reaches past the right or bottom edge of the image.
    RegionOutOfBounds {
        region_width: usize,
        region_height: usize,
        image_width: usize,
        image_height: usize,
    },
    /// `width * height * 4` overflows `usize`.
    RegionTooLarge,
    /// The destination slice is shorter than the dump.
    BufferTooSmall { needed: usize, actual: usize },
    /// The operation needs at least one pixel.
    EmptyRegion,
    /// A row kernel rejected its buffers.
    Size(SizeError),
}

impl From<SizeError> for ConvertError {
    fn from(e: SizeError) -> Self {
        ConvertError::Size(e)
    }
}

impl core::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConvertError::RegionOutOfBounds {
                region_width,
                region_height,
                image_width,
                image_height,
            } => write!(
                f,
                "region {region_width}x{region_height} exceeds image bounds {image_width}x{image_height}"
            ),
            ConvertError::RegionTooLarge => f.write_str("region size overflows usize"),
            ConvertError::BufferTooSmall { needed, actual } => {
                write!(f, "output buffer holds {actual} bytes, {needed} needed")
            }
            ConvertError::EmptyRegion => f.write_str("region has no pixels"),
            ConvertError::Size(e) => write!(f, "pixel kernel: {e}"),
        }
    }
}

impl core::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            ConvertError::Size(e) => Some(e),
            _ => None,
        }
    }
}

/// Failure while streaming a region to a writer.
#[cfg(feature = "std")]
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error(transparent)]
    Region(#[from] ConvertError),
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

// ===========================================================================
// Line walk
// ===========================================================================

/// Hand each output line to `f` as packed RGB bytes, in record order.
///
/// The region must already be checked against the image.
fn for_each_line<E>(
    img: ImgRef<'_, Rgb<u8>>,
    region: Region,
    order: ScanOrder,
    mut f: impl FnMut(usize, &[u8]) -> Result<(), E>,
) -> Result<(), E> {
    let (w, h) = (region.width, region.height);
    match order {
        ScanOrder::ColumnMajor => {
            let mut column: Vec<Rgb<u8>> = Vec::with_capacity(h);
            for x in 0..w {
                column.clear();
                column.extend(img.rows().take(h).map(|row| row[x]));
                log::trace!("column {x}: {h} px");
                f(x, bytemuck::cast_slice(&column[..]))?;
            }
        }
        ScanOrder::RowMajor => {
            for (y, row) in img.rows().take(h).enumerate() {
                log::trace!("row {y}: {w} px");
                f(y, bytemuck::cast_slice(&row[..w]))?;
            }
        }
    }
    Ok(())
}

// ===========================================================================
// Public API
// ===========================================================================

/// Dump `region` of `img` into `dst`.
///
/// Writes exactly `region.output_len()` bytes at the start of `dst`. Nothing
/// is written when the region does not fit the image.
pub fn convert_region_into(
    img: ImgRef<'_, Rgb<u8>>,
    region: Region,
    order: ScanOrder,
    dst: &mut [u8],
) -> Result<(), ConvertError> {
    region.check_fits(img.width(), img.height())?;
    let needed = region.output_len()?;
    if dst.len() < needed {
        return Err(ConvertError::BufferTooSmall {
            needed,
            actual: dst.len(),
        });
    }
    log::debug!(
        "converting {}x{} region of {}x{} image, {:?}",
        region.width,
        region.height,
        img.width(),
        img.height(),
        order
    );
    if region.is_empty() {
        return Ok(());
    }
    let line_bytes = order.line_len(region) * RECORD_LEN;
    for_each_line(img, region, order, |i, rgb| {
        crate::bytes::rgb_to_bgr0(rgb, &mut dst[i * line_bytes..][..line_bytes])
            .map_err(ConvertError::from)
    })
}

/// Dump `region` of `img` into a new buffer of `width * height * 4` bytes.
pub fn convert_region(
    img: ImgRef<'_, Rgb<u8>>,
    region: Region,
    order: ScanOrder,
) -> Result<Vec<u8>, ConvertError> {
    region.check_fits(img.width(), img.height())?;
    let mut out = vec![0u8; region.output_len()?];
    convert_region_into(img, region, order, &mut out)?;
    Ok(out)
}

/// Like [`convert_region`], as typed records (`a` is always 0).
pub fn convert_region_pixels(
    img: ImgRef<'_, Rgb<u8>>,
    region: Region,
    order: ScanOrder,
) -> Result<Vec<Bgra<u8>>, ConvertError> {
    region.check_fits(img.width(), img.height())?;
    let n = region.pixel_count().ok_or(ConvertError::RegionTooLarge)?;
    let mut out = vec![Bgra::default(); n];
    convert_region_into(img, region, order, bytemuck::cast_slice_mut(&mut out[..]))?;
    Ok(out)
}

/// Stream `region` of `img` to `writer` one line at a time, then flush.
///
/// Returns the number of bytes written. The region is checked before the
/// first write; an I/O error mid-stream leaves a truncated dump behind.
#[cfg(feature = "std")]
pub fn write_region<W: std::io::Write>(
    img: ImgRef<'_, Rgb<u8>>,
    region: Region,
    order: ScanOrder,
    mut writer: W,
) -> Result<u64, WriteError> {
    region.check_fits(img.width(), img.height())?;
    let total = region.output_len()?;
    let mut line = vec![0u8; order.line_len(region) * RECORD_LEN];
    let mut written = 0u64;
    if !region.is_empty() {
        for_each_line(img, region, order, |_, rgb| -> Result<(), WriteError> {
            crate::bytes::rgb_to_bgr0(rgb, &mut line).map_err(ConvertError::from)?;
            writer.write_all(&line)?;
            written += line.len() as u64;
            Ok(())
        })?;
    }
    writer.flush()?;
    debug_assert_eq!(written, total as u64);
    log::debug!("wrote {written} bytes ({:?})", order);
    Ok(written)
}
