//! 10-bit sample word unpacking.
//!
//! Each pixel occupies one big-endian 32-bit word. A sample window that
//! cannot be read in full is not an error: its column drives the
//! scanline realignment that compensates for a packing-boundary
//! artifact in the word stream.

use tracing::debug;

use crate::image_pipeline::common::error::{DpxError, Result};
use crate::image_pipeline::raster::types::{PixelRaster, UnpackedImage};
use crate::image_pipeline::raster::unpacker::SampleUnpacker;

/// Bytes per packed sample word, one word per pixel.
const WORD_SIZE: usize = 4;

// Channel bit positions within the sample word. The green and blue
// shifts sit at 10-bit strides below red, so each channel contributes
// its top eight bits.
const RED_SHIFT: u32 = 24;
const GREEN_SHIFT: u32 = 14;
const BLUE_SHIFT: u32 = 4;

/// Unpacks 10-bit-per-channel sample words into an RGBA8 raster.
pub struct TenBitUnpacker;

impl SampleUnpacker for TenBitUnpacker {
    fn unpack(&self, samples: &[u8], width: u32, height: u32) -> Result<UnpackedImage> {
        debug!(
            "Unpacking {} sample bytes into {}x{} raster",
            samples.len(),
            width,
            height
        );

        let raster_len = (u64::from(width) * u64::from(height)).checked_mul(WORD_SIZE as u64);
        match raster_len {
            Some(len) if len <= usize::MAX as u64 => {}
            _ => return Err(DpxError::InvalidDimensions(width, height)),
        }

        let mut raster = PixelRaster::new(width, height);
        let mut shift_correction: Option<u32> = None;

        for y in 0..height as usize {
            for x in 0..width as usize {
                let px = (y * width as usize + x) * WORD_SIZE;
                match samples.get(px..px + WORD_SIZE) {
                    Some(window) => {
                        let word = (u32::from(window[0]) << 24)
                            | (u32::from(window[1]) << 16)
                            | (u32::from(window[2]) << 8)
                            | u32::from(window[3]);
                        raster.data[px] = ((word >> RED_SHIFT) & 0xFF) as u8;
                        raster.data[px + 1] = ((word >> GREEN_SHIFT) & 0xFF) as u8;
                        raster.data[px + 2] = ((word >> BLUE_SHIFT) & 0xFF) as u8;
                        raster.data[px + 3] = 0xFF;
                    }
                    None => {
                        // Short window: remember the first failing column,
                        // leave the pixel transparent black.
                        if shift_correction.is_none() {
                            shift_correction = Some(x as u32);
                        }
                    }
                }
            }
        }

        if let Some(shift) = shift_correction {
            debug!(shift, "Realigning raster around first failed column");
            realign(&mut raster, shift);
        }

        Ok(UnpackedImage {
            raster,
            shift_correction,
        })
    }
}

/// Wraps every scanline around the first failed column: the raster is
/// composited once shifted left by `shift` pixels and once shifted
/// right by `width - shift`, which lands the decode failure on the
/// seam. Equivalent to rotating each row left by `shift` pixels.
fn realign(raster: &mut PixelRaster, shift: u32) {
    let stride = raster.width as usize * WORD_SIZE;
    if stride == 0 {
        return;
    }
    let rotation = shift as usize * WORD_SIZE;
    for row in raster.data.chunks_exact_mut(stride) {
        row.rotate_left(rotation);
    }
}
