//! Region dump properties: length, byte order, record order, bounds.

use std::io::{self, Write};

use imgref::{ImgRef, ImgVec};
use png2bgrx::{
    ConvertError, Region, ScanOrder, WriteError, convert_region, convert_region_into,
    convert_region_pixels, write_region,
};
use rgb::{Bgra, Rgb};

fn pattern(w: usize, h: usize) -> ImgVec<Rgb<u8>> {
    let buf = (0..h)
        .flat_map(|y| (0..w).map(move |x| Rgb::new(x as u8, y as u8, (x * 7 + y * 13) as u8)))
        .collect();
    ImgVec::new(buf, w, h)
}

/// The dump written out as the plain nested loop: outer x, inner y.
fn naive_column_major(img: ImgRef<'_, Rgb<u8>>, w: usize, h: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(w * h * 4);
    for i in 0..w {
        for j in 0..h {
            let p = img.rows().nth(j).unwrap()[i];
            out.extend_from_slice(&[p.b, p.g, p.r, 0]);
        }
    }
    out
}

#[test]
fn two_by_two_example() {
    // (x, y) -> (r, g, b)
    let mut img = ImgVec::new(vec![Rgb::new(0u8, 0, 0); 4], 2, 2);
    img[(0usize, 0usize)] = Rgb::new(10, 20, 30);
    img[(0usize, 1usize)] = Rgb::new(40, 50, 60);
    img[(1usize, 0usize)] = Rgb::new(70, 80, 90);
    img[(1usize, 1usize)] = Rgb::new(100, 110, 120);

    let out = convert_region(img.as_ref(), Region::new(2, 2), ScanOrder::ColumnMajor).unwrap();
    assert_eq!(
        out,
        [30, 20, 10, 0, 60, 50, 40, 0, 90, 80, 70, 0, 120, 110, 100, 0]
    );

    let rows = convert_region(img.as_ref(), Region::new(2, 2), ScanOrder::RowMajor).unwrap();
    assert_eq!(
        rows,
        [30, 20, 10, 0, 90, 80, 70, 0, 60, 50, 40, 0, 120, 110, 100, 0]
    );
}

#[test]
fn solid_color_repeats_one_record() {
    let img = ImgVec::new(vec![Rgb::new(200u8, 100, 50); 40 * 30], 40, 30);
    for order in [ScanOrder::ColumnMajor, ScanOrder::RowMajor] {
        let out = convert_region(img.as_ref(), Region::new(33, 17), order).unwrap();
        assert_eq!(out.len(), 33 * 17 * 4);
        assert!(out.chunks_exact(4).all(|r| r == [50, 100, 200, 0]), "{order:?}");
    }
}

#[test]
fn record_k_is_pixel_i_j() {
    let (w, h) = (19, 11);
    let img = pattern(25, 14);
    let out = convert_region(img.as_ref(), Region::new(w, h), ScanOrder::ColumnMajor).unwrap();
    assert_eq!(out, naive_column_major(img.as_ref(), w, h));
    for i in 0..w {
        for j in 0..h {
            let k = i * h + j;
            let p = img[(i, j)];
            assert_eq!(&out[k * 4..k * 4 + 4], &[p.b, p.g, p.r, 0], "i={i} j={j}");
        }
    }
}

#[test]
fn row_major_record_order() {
    let (w, h) = (9, 6);
    let img = pattern(w, h);
    let out = convert_region(img.as_ref(), Region::new(w, h), ScanOrder::RowMajor).unwrap();
    for y in 0..h {
        for x in 0..w {
            let k = y * w + x;
            let p = img[(x, y)];
            assert_eq!(&out[k * 4..k * 4 + 4], &[p.b, p.g, p.r, 0], "x={x} y={y}");
        }
    }
}

#[test]
fn strided_source_is_respected() {
    let (w, h, stride) = (5, 4, 8);
    let buf: Vec<Rgb<u8>> = (0..stride * h)
        .map(|i| Rgb::new((i % stride) as u8, (i / stride) as u8, 9))
        .collect();
    let img = ImgRef::new_stride(&buf[..], w, h, stride);
    let out = convert_region(img, Region::new(w, h), ScanOrder::ColumnMajor).unwrap();
    let tight = pattern_from(img);
    assert_eq!(out, naive_column_major(tight.as_ref(), w, h));
}

fn pattern_from(img: ImgRef<'_, Rgb<u8>>) -> ImgVec<Rgb<u8>> {
    let buf = img.rows().flat_map(|r| r.iter().copied()).collect();
    ImgVec::new(buf, img.width(), img.height())
}

#[test]
fn oversized_region_fails_without_output() {
    let img = pattern(10, 8);
    let err = convert_region(img.as_ref(), Region::new(11, 8), ScanOrder::ColumnMajor).unwrap_err();
    assert_eq!(
        err,
        ConvertError::RegionOutOfBounds {
            region_width: 11,
            region_height: 8,
            image_width: 10,
            image_height: 8,
        }
    );
    assert!(convert_region(img.as_ref(), Region::new(10, 9), ScanOrder::RowMajor).is_err());

    let mut dst = vec![0x77u8; 11 * 8 * 4];
    assert!(
        convert_region_into(img.as_ref(), Region::new(11, 8), ScanOrder::ColumnMajor, &mut dst)
            .is_err()
    );
    assert!(dst.iter().all(|&b| b == 0x77));

    let mut sink = Vec::new();
    assert!(write_region(img.as_ref(), Region::new(10, 9), ScanOrder::ColumnMajor, &mut sink).is_err());
    assert!(sink.is_empty());
}

#[test]
fn empty_region_gives_empty_dump() {
    let img = pattern(4, 4);
    let out = convert_region(img.as_ref(), Region::new(0, 4), ScanOrder::ColumnMajor).unwrap();
    assert!(out.is_empty());
    let out = convert_region(img.as_ref(), Region::new(3, 0), ScanOrder::RowMajor).unwrap();
    assert!(out.is_empty());
}

#[test]
fn into_needs_room() {
    let img = pattern(4, 4);
    let mut dst = vec![0u8; 15];
    assert_eq!(
        convert_region_into(img.as_ref(), Region::new(2, 2), ScanOrder::ColumnMajor, &mut dst),
        Err(ConvertError::BufferTooSmall {
            needed: 16,
            actual: 15
        })
    );
}

#[test]
fn writer_and_buffer_agree() {
    let img = pattern(31, 17);
    let region = Region::new(29, 16);
    for order in [ScanOrder::ColumnMajor, ScanOrder::RowMajor] {
        let mut sink = Vec::new();
        let n = write_region(img.as_ref(), region, order, &mut sink).unwrap();
        assert_eq!(n, (29 * 16 * 4) as u64);
        assert_eq!(sink, convert_region(img.as_ref(), region, order).unwrap());
    }
}

#[test]
fn typed_records_have_zero_alpha() {
    let img = pattern(6, 5);
    let px = convert_region_pixels(img.as_ref(), Region::new(6, 5), ScanOrder::ColumnMajor).unwrap();
    assert_eq!(px.len(), 30);
    let p = img[(1usize, 2usize)];
    assert_eq!(px[5 + 2], Bgra { b: p.b, g: p.g, r: p.r, a: 0 });
    assert!(px.iter().all(|r| r.a == 0));
}

/// Accepts whole writes until `limit` bytes, then reports a full disk.
struct FullAfter {
    limit: usize,
    data: Vec<u8>,
}

impl Write for FullAfter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.data.len() + buf.len() > self.limit {
            return Err(io::Error::new(io::ErrorKind::StorageFull, "disk full"));
        }
        self.data.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn write_failure_stops_at_a_line_boundary() {
    let img = pattern(7, 5);
    let region = Region::new(6, 4);
    for order in [ScanOrder::ColumnMajor, ScanOrder::RowMajor] {
        let line_bytes = order.line_len(region) * 4;
        let mut sink = FullAfter {
            limit: line_bytes * 2 + line_bytes / 2,
            data: Vec::new(),
        };
        match write_region(img.as_ref(), region, order, &mut sink) {
            Err(WriteError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::StorageFull),
            other => panic!("{order:?}: expected an I/O error, got {other:?}"),
        }
        let full = convert_region(img.as_ref(), region, order).unwrap();
        assert_eq!(sink.data.len(), line_bytes * 2, "{order:?}");
        assert_eq!(sink.data[..], full[..line_bytes * 2], "{order:?}");
    }
}
