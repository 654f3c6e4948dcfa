use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raster::types::UnpackedImage;

/// Turns a packed sample buffer into a displayable raster.
pub trait SampleUnpacker {
    fn unpack(&self, samples: &[u8], width: u32, height: u32) -> Result<UnpackedImage>;
}
