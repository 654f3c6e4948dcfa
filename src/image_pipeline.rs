//! DPX image processing pipeline module
//!
//! This module provides a structured approach to DPX frame decoding,
//! with separate modules for header decoding, sample unpacking, TIFF
//! writing, and conversion orchestration.

pub mod common;
pub mod dpx;
pub mod raster;
pub mod tiff;
pub mod conversions;

pub use common::{
    DpxError,
    Result,
};

pub use dpx::{
    DpxHeader,
    HeaderReader,
    BigEndianHeaderReader,
};

pub use raster::{
    PixelRaster,
    UnpackedImage,
    SampleUnpacker,
    TenBitUnpacker,
};

pub use tiff::{
    TiffCompression,
    ConversionConfig,
    ConversionConfigBuilder,
    TiffWriter,
    StandardTiffWriter,
};

pub use conversions::{
    DpxToTiffPipeline,
};
