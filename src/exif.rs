//! Minimal Exif reader for capture timestamps.
//!
//! Extracts four tags, nothing more:
//! - DateTimeOriginal (0x9003) and its OffsetTimeOriginal (0x9011)
//! - DateTime (0x0132) and its OffsetTime (0x9010)
//!
//! For JPEG: the TIFF blob inside the APP1 `Exif\0\0` segment.
//! For TIFF: the file itself, IFD0 plus the Exif sub-IFD (tag 0x8769).
//!
//! Both byte orders are handled and every read is bounds-checked; a
//! malformed file reads as "no metadata" rather than a panic. The raw
//! `"YYYY:MM:DD HH:MM:SS"` value is validated through chrono so blank-
//! padded timestamps (cameras write those) are rejected, not mangled.

use chrono::NaiveDateTime;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExifError {
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("unsupported extension {0:?} (expected jpg/jpeg/tif/tiff)")]
    UnsupportedFormat(String),
    #[error("no Exif metadata found")]
    NoExif,
    #[error("Exif metadata has no date/time tag")]
    NoTimestamp,
    #[error("malformed Exif timestamp {0:?}")]
    BadTimestamp(String),
}

/// A capture instant read from a photo, plus the UTC offset string
/// (`"+02:00"`) when the file records one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureTime {
    pub datetime: NaiveDateTime,
    pub offset: Option<String>,
}

impl CaptureTime {
    /// Canonical filename stem: `YYYYMMDD-HHMMSS`, with the offset
    /// appended colon-free (`20230704-123045+0200`) when present.
    pub fn compact(&self) -> String {
        let stem = self.datetime.format("%Y%m%d-%H%M%S").to_string();
        match &self.offset {
            Some(offset) => format!("{stem}{}", offset.replace(':', "")),
            None => stem,
        }
    }
}

/// Read the capture timestamp from a photo, dispatching by extension.
///
/// Priority: DateTimeOriginal, then DateTime. The offset tag paired with
/// the chosen timestamp rides along.
pub fn read_capture_time(path: &Path) -> Result<CaptureTime, ExifError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let bytes = std::fs::read(path)?;
    let tiff = match ext.as_str() {
        "jpg" | "jpeg" => find_exif_segment(&bytes).ok_or(ExifError::NoExif)?,
        "tif" | "tiff" => bytes.as_slice(),
        _ => return Err(ExifError::UnsupportedFormat(ext)),
    };

    let DateTimeFields {
        original,
        basic,
        offset_original,
        offset_basic,
    } = read_datetime_fields(tiff).ok_or(ExifError::NoExif)?;

    let (raw, offset) = match (original, basic) {
        (Some(dt), _) => (dt, offset_original),
        (None, Some(dt)) => (dt, offset_basic),
        (None, None) => return Err(ExifError::NoTimestamp),
    };

    let datetime = NaiveDateTime::parse_from_str(&raw, "%Y:%m:%d %H:%M:%S")
        .map_err(|_| ExifError::BadTimestamp(raw.clone()))?;

    Ok(CaptureTime { datetime, offset })
}

// ---------------------------------------------------------------------------
// JPEG: locate the APP1 Exif segment
// ---------------------------------------------------------------------------

const EXIF_HEADER: &[u8] = b"Exif\0\0";

/// Walk JPEG marker segments and return the TIFF blob from the first APP1
/// segment carrying an `Exif\0\0` header.
fn find_exif_segment(data: &[u8]) -> Option<&[u8]> {
    // SOI
    if !data.starts_with(&[0xFF, 0xD8]) {
        return None;
    }

    let mut pos = 2;
    while pos + 4 <= data.len() {
        if data[pos] != 0xFF {
            return None;
        }
        let marker = data[pos + 1];

        // Standalone markers carry no length field
        if marker == 0x01 || (0xD0..=0xD7).contains(&marker) {
            pos += 2;
            continue;
        }
        // SOS means entropy-coded data from here on; EOI means we're done.
        // Exif APP1 precedes both.
        if marker == 0xDA || marker == 0xD9 {
            return None;
        }

        let seg_len = u16::from_be_bytes([data[pos + 2], data[pos + 3]]) as usize;
        if seg_len < 2 {
            return None;
        }

        if marker == 0xE1 {
            let seg_end = (pos + 2 + seg_len).min(data.len());
            let segment = &data[pos + 4..seg_end];
            if let Some(tiff) = segment.strip_prefix(EXIF_HEADER) {
                return Some(tiff);
            }
        }

        pos += 2 + seg_len;
    }
    None
}

// ---------------------------------------------------------------------------
// TIFF: walk IFD0 and the Exif sub-IFD for the date tags
// ---------------------------------------------------------------------------

const TAG_DATETIME: u16 = 0x0132;
const TAG_EXIF_IFD: u16 = 0x8769;
const TAG_DATETIME_ORIGINAL: u16 = 0x9003;
const TAG_OFFSET_TIME: u16 = 0x9010;
const TAG_OFFSET_TIME_ORIGINAL: u16 = 0x9011;

const TYPE_ASCII: u16 = 2;

#[derive(Debug, Default)]
struct DateTimeFields {
    original: Option<String>,
    basic: Option<String>,
    offset_original: Option<String>,
    offset_basic: Option<String>,
}

/// Parse a TIFF blob and collect the date/offset tags.
/// Returns `None` if the header is not TIFF.
fn read_datetime_fields(data: &[u8]) -> Option<DateTimeFields> {
    let big_endian = match data.get(0..2)? {
        b"MM" => true,
        b"II" => false,
        _ => return None,
    };
    if read_u16(data, 2, big_endian)? != 42 {
        return None;
    }

    let mut fields = DateTimeFields::default();
    let ifd0 = read_u32(data, 4, big_endian)? as usize;
    if let Some(exif_ifd) = scan_ifd(data, ifd0, big_endian, &mut fields) {
        scan_ifd(data, exif_ifd, big_endian, &mut fields);
    }
    Some(fields)
}

/// Scan one IFD's entries into `fields`. Returns the Exif sub-IFD offset
/// if the IFD carries the pointer tag.
fn scan_ifd(
    data: &[u8],
    ifd_offset: usize,
    big_endian: bool,
    fields: &mut DateTimeFields,
) -> Option<usize> {
    let entry_count = read_u16(data, ifd_offset, big_endian)? as usize;
    let entries_start = ifd_offset + 2;
    let mut exif_ifd = None;

    for i in 0..entry_count {
        let entry = entries_start + i * 12;
        let Some(tag) = read_u16(data, entry, big_endian) else {
            break;
        };
        match tag {
            TAG_EXIF_IFD => {
                exif_ifd = read_u32(data, entry + 8, big_endian).map(|o| o as usize);
            }
            TAG_DATETIME => fields.basic = ascii_value(data, entry, big_endian),
            TAG_DATETIME_ORIGINAL => fields.original = ascii_value(data, entry, big_endian),
            TAG_OFFSET_TIME => fields.offset_basic = ascii_value(data, entry, big_endian),
            TAG_OFFSET_TIME_ORIGINAL => {
                fields.offset_original = ascii_value(data, entry, big_endian);
            }
            _ => {}
        }
    }

    exif_ifd
}

/// Extract an ASCII entry's value. Values of four bytes or fewer are
/// stored inline in the entry; longer ones live at a data offset.
fn ascii_value(data: &[u8], entry: usize, big_endian: bool) -> Option<String> {
    if read_u16(data, entry + 2, big_endian)? != TYPE_ASCII {
        return None;
    }
    let count = read_u32(data, entry + 4, big_endian)? as usize;

    let bytes = if count <= 4 {
        data.get(entry + 8..entry + 8 + count)?
    } else {
        let offset = read_u32(data, entry + 8, big_endian)? as usize;
        data.get(offset..offset.checked_add(count)?)?
    };

    let value = String::from_utf8_lossy(bytes)
        .trim_end_matches('\0')
        .trim()
        .to_string();
    (!value.is_empty()).then_some(value)
}

fn read_u16(data: &[u8], pos: usize, big_endian: bool) -> Option<u16> {
    let b = data.get(pos..pos + 2)?;
    Some(if big_endian {
        u16::from_be_bytes([b[0], b[1]])
    } else {
        u16::from_le_bytes([b[0], b[1]])
    })
}

fn read_u32(data: &[u8], pos: usize, big_endian: bool) -> Option<u32> {
    let b = data.get(pos..pos + 4)?;
    Some(if big_endian {
        u32::from_be_bytes([b[0], b[1], b[2], b[3]])
    } else {
        u32::from_le_bytes([b[0], b[1], b[2], b[3]])
    })
}
