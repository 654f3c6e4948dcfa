use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::dpx::types::DpxHeader;

/// Structural header decoder.
///
/// Implementations are byte-order strategies; the magic tag of the file
/// says which one applies.
pub trait HeaderReader {
    fn read_header(&self, data: &[u8]) -> Result<DpxHeader>;
}
