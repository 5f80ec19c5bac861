//! Dump files: write a region of a PNG to disk and read it back.

use alloc::vec;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use imgref::{ImgRef, ImgVec};
use rgb::Rgb;

use crate::decode::{as_imgref, open_rgb};
use crate::{ConvertError, Region, ScanOrder, WriteError, write_region};

/// Everything that can go wrong between the PNG and the dump file.
///
/// Each variant names the operation that failed and the file involved.
#[derive(Debug, thiserror::Error)]
pub enum DumpError {
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error(transparent)]
    Region(#[from] ConvertError),
    #[error("cannot create {}: {source}", path.display())]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{} is {actual} bytes, expected {expected}", path.display())]
    DumpSize {
        path: PathBuf,
        expected: usize,
        actual: usize,
    },
    #[error("pixel ({x}, {y}) is {actual:?} in the dump, {expected:?} in the image")]
    Mismatch {
        x: usize,
        y: usize,
        expected: Rgb<u8>,
        actual: Rgb<u8>,
    },
}

/// Outcome of a successful dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DumpReport {
    pub region: Region,
    pub order: ScanOrder,
    pub image_width: usize,
    pub image_height: usize,
    pub bytes_written: u64,
}

/// Write `region` of an already decoded image to `output`.
///
/// The region is checked before the file is created, so an oversized
/// region never leaves an empty or truncated file behind.
pub fn dump_image(
    img: ImgRef<'_, Rgb<u8>>,
    output: &Path,
    region: Region,
    order: ScanOrder,
) -> Result<DumpReport, DumpError> {
    region.check_fits(img.width(), img.height())?;
    let file = File::create(output).map_err(|source| DumpError::Create {
        path: output.to_path_buf(),
        source,
    })?;
    let bytes_written =
        write_region(img, region, order, BufWriter::new(file)).map_err(|e| match e {
            WriteError::Region(e) => DumpError::Region(e),
            WriteError::Io(source) => DumpError::Write {
                path: output.to_path_buf(),
                source,
            },
        })?;
    log::info!(
        "wrote {}x{} region ({bytes_written} bytes) to {}",
        region.width,
        region.height,
        output.display()
    );
    Ok(DumpReport {
        region,
        order,
        image_width: img.width(),
        image_height: img.height(),
        bytes_written,
    })
}

/// Decode `input` and write `region` of it to `output`.
pub fn dump_png(
    input: &Path,
    output: &Path,
    region: Region,
    order: ScanOrder,
) -> Result<DumpReport, DumpError> {
    let decoded = open_rgb(input)?;
    dump_image(as_imgref(&decoded), output, region, order)
}

/// Load a dump back as a `region.width × region.height` RGB image.
///
/// The file must be exactly `region.output_len()` bytes. Pad bytes are not
/// inspected.
pub fn read_dump(path: &Path, region: Region, order: ScanOrder) -> Result<ImgVec<Rgb<u8>>, DumpError> {
    if region.is_empty() {
        return Err(ConvertError::EmptyRegion.into());
    }
    let expected = region.output_len()?;
    let data = fs::read(path).map_err(|source| DumpError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if data.len() != expected {
        return Err(DumpError::DumpSize {
            path: path.to_path_buf(),
            expected,
            actual: data.len(),
        });
    }
    let mut pixels = vec![Rgb::default(); data.len() / crate::RECORD_LEN];
    crate::bytes::bgr0_to_rgb(&data, bytemuck::cast_slice_mut(&mut pixels[..]))
        .map_err(ConvertError::from)?;
    let lines = ImgVec::new(
        pixels,
        order.line_len(region),
        order.line_count(region),
    );
    Ok(match order {
        ScanOrder::RowMajor => lines,
        ScanOrder::ColumnMajor => crate::img::transpose(lines.as_ref())?,
    })
}

/// Check that the dump at `path` holds exactly `region` of `img`.
///
/// Reports the first differing pixel in row-major order.
pub fn verify_dump(
    img: ImgRef<'_, Rgb<u8>>,
    path: &Path,
    region: Region,
    order: ScanOrder,
) -> Result<(), DumpError> {
    region.check_fits(img.width(), img.height())?;
    let dumped = read_dump(path, region, order)?;
    let source = img.sub_image(0, 0, region.width, region.height);
    for (y, (want_row, got_row)) in source.rows().zip(dumped.rows()).enumerate() {
        if let Some(x) = want_row.iter().zip(got_row).position(|(a, b)| a != b) {
            return Err(DumpError::Mismatch {
                x,
                y,
                expected: want_row[x],
                actual: got_row[x],
            });
        }
    }
    log::debug!("{} matches the source region", path.display());
    Ok(())
}
