//! Pipeline conversions module
//!
//! This module contains orchestration logic for turning DPX frames into
//! TIFF images.

mod dpx_to_tiff;

#[cfg(test)]
mod tests;

pub use dpx_to_tiff::DpxToTiffPipeline;
