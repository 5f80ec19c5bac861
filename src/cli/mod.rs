//! The `png2bgrx` command line.
//!
//! With no arguments it reads `test.png` and writes the 827 × 646
//! column-major dump to `test.txt`.

use std::path::PathBuf;

use clap::Parser;

use crate::decode::{as_imgref, open_rgb};
use crate::dump::{DumpError, DumpReport, dump_image, verify_dump};
use crate::{DEFAULT_HEIGHT, DEFAULT_WIDTH, Region, ScanOrder};

pub mod logger;

#[derive(Debug, Parser)]
#[command(
    name = "png2bgrx",
    version,
    about = "Dump a PNG pixel region as raw BGR0 (XRGB8888) records",
    long_about = "png2bgrx decodes a PNG and writes a width x height region from its top-left corner \
                  as headerless 4-byte [B, G, R, 0] records. Records go column by column unless \
                  --row-major is given."
)]
pub struct Args {
    /// Input image
    #[arg(value_name = "INPUT", default_value = "test.png")]
    pub input: PathBuf,

    /// Output dump file
    #[arg(value_name = "OUTPUT", default_value = "test.txt")]
    pub output: PathBuf,

    /// Region width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Region height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Emit row after row instead of column after column
    #[arg(long)]
    pub row_major: bool,

    /// Shrink the region to the image instead of failing
    #[arg(long)]
    pub fit: bool,

    /// Read the dump back and compare it with the image
    #[arg(long)]
    pub verify: bool,
}

impl Args {
    pub fn region(&self) -> Region {
        Region::new(self.width, self.height)
    }

    pub fn order(&self) -> ScanOrder {
        if self.row_major {
            ScanOrder::RowMajor
        } else {
            ScanOrder::ColumnMajor
        }
    }
}

/// Run one conversion as described by `args`.
pub fn run(args: &Args) -> Result<DumpReport, DumpError> {
    let decoded = open_rgb(&args.input)?;
    let img = as_imgref(&decoded);
    let order = args.order();

    let mut region = args.region();
    if args.fit {
        let fitted = region.clamp_to(img.width(), img.height());
        if fitted != region {
            log::warn!(
                "region {}x{} clamped to {}x{} to fit {}",
                region.width,
                region.height,
                fitted.width,
                fitted.height,
                args.input.display()
            );
        }
        region = fitted;
    }

    let report = dump_image(img, &args.output, region, order)?;
    if args.verify {
        verify_dump(img, &args.output, region, order)?;
        log::info!("verified {}", args.output.display());
    }

    std::println!(
        "Saved {}x{} BGR0 dump ({} bytes) → {}",
        region.width,
        region.height,
        report.bytes_written,
        args.output.display()
    );
    Ok(report)
}
