//! Sample unpacking module
//!
//! This module turns packed sample words into displayable RGBA rasters.

mod unpacker;
mod ten_bit_unpacker;
pub mod types;

pub use unpacker::SampleUnpacker;
pub use ten_bit_unpacker::TenBitUnpacker;
pub use types::{PixelRaster, UnpackedImage};
