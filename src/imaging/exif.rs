//! EXIF segment handling for encoded JPEGs
//!
//! The JPEG encoder writes no metadata, so a retained EXIF block is spliced
//! into the finished file as an APP1 segment.

const MARKER: u8 = 0xFF;
const SOI: [u8; 2] = [MARKER, 0xD8];
const APP0: u8 = 0xE0;
const APP1: u8 = 0xE1;
const SOS: u8 = 0xDA;
const EOI: u8 = 0xD9;

/// Identifier that opens an EXIF APP1 payload
pub const EXIF_HEADER: &[u8] = b"Exif\0\0";

/// Largest TIFF body that fits in one APP1 segment
pub const MAX_EXIF_BYTES: usize = u16::MAX as usize - 2 - EXIF_HEADER.len();

/// Insert `exif` into `jpeg` as an APP1 segment.
///
/// `exif` may be given with or without the `Exif\0\0` identifier. The
/// segment goes after a leading JFIF APP0 segment, otherwise right after SOI.
/// Returns `None` if `jpeg` is not a JPEG or the block does not fit.
pub fn embed_exif(jpeg: &[u8], exif: &[u8]) -> Option<Vec<u8>> {
    let tiff = exif.strip_prefix(EXIF_HEADER).unwrap_or(exif);
    if tiff.is_empty() || tiff.len() > MAX_EXIF_BYTES || !jpeg.starts_with(&SOI) {
        return None;
    }

    let mut insert_at = SOI.len();
    if jpeg.len() >= 6 && jpeg[2] == MARKER && jpeg[3] == APP0 {
        let len = u16::from_be_bytes([jpeg[4], jpeg[5]]) as usize;
        insert_at = 4 + len;
        if len < 2 || insert_at > jpeg.len() {
            return None;
        }
    }

    let segment_len = (2 + EXIF_HEADER.len() + tiff.len()) as u16;

    let mut out = Vec::with_capacity(jpeg.len() + 2 + segment_len as usize);
    out.extend_from_slice(&jpeg[..insert_at]);
    out.extend_from_slice(&[MARKER, APP1]);
    out.extend_from_slice(&segment_len.to_be_bytes());
    out.extend_from_slice(EXIF_HEADER);
    out.extend_from_slice(tiff);
    out.extend_from_slice(&jpeg[insert_at..]);
    Some(out)
}

/// Locate the EXIF TIFF body in a JPEG's header segments.
pub fn find_exif(jpeg: &[u8]) -> Option<&[u8]> {
    if !jpeg.starts_with(&SOI) {
        return None;
    }

    let mut pos = SOI.len();
    while pos + 4 <= jpeg.len() {
        if jpeg[pos] != MARKER {
            return None;
        }

        let marker = jpeg[pos + 1];
        if marker == SOS || marker == EOI {
            return None;
        }

        let len = u16::from_be_bytes([jpeg[pos + 2], jpeg[pos + 3]]) as usize;
        let end = pos + 2 + len;
        if len < 2 || end > jpeg.len() {
            return None;
        }

        if marker == APP1 {
            if let Some(tiff) = jpeg[pos + 4..end].strip_prefix(EXIF_HEADER) {
                return Some(tiff);
            }
        }

        pos = end;
    }

    None
}
