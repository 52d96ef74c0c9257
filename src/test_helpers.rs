//! Shared test utilities for the shoebox test suite.
//!
//! The interesting fixtures here are byte-level photo constructors: a
//! little-endian TIFF builder that lays out IFD0, an optional Exif
//! sub-IFD, and a trailing data area for long ASCII values, plus a JPEG
//! wrapper that parcels the TIFF into an APP1 `Exif\0\0` segment. Tests
//! pick exactly which date/offset tags a "photo" carries.

use std::fs;
use std::path::{Path, PathBuf};

/// An Exif ASCII value: the string bytes plus the trailing NUL.
pub(crate) fn exif_ascii(s: &str) -> Vec<u8> {
    let mut v = s.as_bytes().to_vec();
    v.push(0);
    v
}

/// Build a little-endian TIFF carrying the given ASCII fields in IFD0 and
/// (when non-empty) an Exif sub-IFD. Field tags must be supplied in
/// ascending order.
pub(crate) fn build_tiff(ifd0_fields: &[(u16, Vec<u8>)], exif_fields: &[(u16, Vec<u8>)]) -> Vec<u8> {
    const EXIF_IFD_POINTER: u16 = 0x8769;
    const TYPE_LONG: u16 = 4;

    let has_exif = !exif_fields.is_empty();
    let ifd0_count = ifd0_fields.len() + usize::from(has_exif);
    let ifd0_size = 2 + ifd0_count * 12 + 4;
    let exif_start = 8 + ifd0_size;
    let exif_size = if has_exif {
        2 + exif_fields.len() * 12 + 4
    } else {
        0
    };
    let mut data_cursor = exif_start + exif_size;
    let mut data_area: Vec<u8> = Vec::new();

    fn push_ascii_entry(
        out: &mut Vec<u8>,
        tag: u16,
        value: &[u8],
        data_cursor: &mut usize,
        data_area: &mut Vec<u8>,
    ) {
        out.extend_from_slice(&tag.to_le_bytes());
        out.extend_from_slice(&2u16.to_le_bytes());
        out.extend_from_slice(&(value.len() as u32).to_le_bytes());
        if value.len() <= 4 {
            let mut inline = [0u8; 4];
            inline[..value.len()].copy_from_slice(value);
            out.extend_from_slice(&inline);
        } else {
            out.extend_from_slice(&(*data_cursor as u32).to_le_bytes());
            data_area.extend_from_slice(value);
            *data_cursor += value.len();
        }
    }

    let mut out = Vec::new();
    out.extend_from_slice(b"II");
    out.extend_from_slice(&42u16.to_le_bytes());
    out.extend_from_slice(&8u32.to_le_bytes());

    // IFD0
    out.extend_from_slice(&(ifd0_count as u16).to_le_bytes());
    for (tag, value) in ifd0_fields {
        push_ascii_entry(&mut out, *tag, value, &mut data_cursor, &mut data_area);
    }
    if has_exif {
        out.extend_from_slice(&EXIF_IFD_POINTER.to_le_bytes());
        out.extend_from_slice(&TYPE_LONG.to_le_bytes());
        out.extend_from_slice(&1u32.to_le_bytes());
        out.extend_from_slice(&(exif_start as u32).to_le_bytes());
    }
    out.extend_from_slice(&0u32.to_le_bytes());

    // Exif sub-IFD
    if has_exif {
        out.extend_from_slice(&(exif_fields.len() as u16).to_le_bytes());
        for (tag, value) in exif_fields {
            push_ascii_entry(&mut out, *tag, value, &mut data_cursor, &mut data_area);
        }
        out.extend_from_slice(&0u32.to_le_bytes());
    }

    out.extend_from_slice(&data_area);
    out
}

/// Wrap a TIFF blob in a minimal JPEG: SOI + APP1 Exif segment + EOI.
pub(crate) fn jpeg_with_exif(tiff: &[u8]) -> Vec<u8> {
    let mut out = vec![0xFF, 0xD8];
    let seg_len = (2 + 6 + tiff.len()) as u16;
    out.extend_from_slice(&[0xFF, 0xE1]);
    out.extend_from_slice(&seg_len.to_be_bytes());
    out.extend_from_slice(b"Exif\0\0");
    out.extend_from_slice(tiff);
    out.extend_from_slice(&[0xFF, 0xD9]);
    out
}

/// Write a JPEG photo whose DateTimeOriginal is `datetime`
/// (`"YYYY:MM:DD HH:MM:SS"`), optionally with an OffsetTimeOriginal.
pub(crate) fn write_photo(
    dir: &Path,
    name: &str,
    datetime: &str,
    offset: Option<&str>,
) -> PathBuf {
    const TAG_DATETIME_ORIGINAL: u16 = 0x9003;
    const TAG_OFFSET_TIME_ORIGINAL: u16 = 0x9011;

    let mut exif_fields = vec![(TAG_DATETIME_ORIGINAL, exif_ascii(datetime))];
    if let Some(offset) = offset {
        exif_fields.push((TAG_OFFSET_TIME_ORIGINAL, exif_ascii(offset)));
    }
    let tiff = build_tiff(&[], &exif_fields);
    let path = dir.join(name);
    fs::write(&path, jpeg_with_exif(&tiff)).unwrap();
    path
}
