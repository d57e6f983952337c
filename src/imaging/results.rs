//! Image transform result types

/// Output of one pipeline run
#[derive(Debug, Clone)]
pub struct TransformResult {
    /// Encoded JPEG, owned by the caller
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub source_width: u32,
    pub source_height: u32,
    pub exif_retained: bool,
}

impl TransformResult {
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
