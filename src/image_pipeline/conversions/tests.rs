use std::io::{Cursor, Write};
use std::sync::{Arc, Mutex};

use crate::image_pipeline::common::error::{DpxError, Result};
use crate::image_pipeline::conversions::DpxToTiffPipeline;
use crate::image_pipeline::dpx::types::{DpxHeader, HEADER_LEN};
use crate::image_pipeline::dpx::{BigEndianHeaderReader, HeaderReader};
use crate::image_pipeline::raster::types::{PixelRaster, UnpackedImage};
use crate::image_pipeline::raster::SampleUnpacker;
use crate::image_pipeline::tiff::types::{ConversionConfig, TiffCompression};
use crate::image_pipeline::tiff::TiffWriter;

/// A complete synthetic DPX frame: valid header plus `sample_words`
/// packed 32-bit words directly after it.
fn dpx_bytes(width: u32, height: u32, sample_words: usize) -> Vec<u8> {
    let mut data = vec![0u8; HEADER_LEN];
    data[0..4].copy_from_slice(b"SDPX");
    data[4..8].copy_from_slice(&(HEADER_LEN as u32).to_be_bytes());
    data[8..12].copy_from_slice(b"V2.0");
    data[770..772].copy_from_slice(&1u16.to_be_bytes());
    data[772..776].copy_from_slice(&width.to_be_bytes());
    data[776..780].copy_from_slice(&height.to_be_bytes());
    data[800] = 50; // RGB
    data[803] = 10;
    data[808..812].copy_from_slice(&(HEADER_LEN as u32).to_be_bytes());

    for i in 0..sample_words {
        let word = (i as u32).wrapping_mul(0x0101_0101);
        data.extend_from_slice(&word.to_be_bytes());
    }
    data
}

fn mock_header(width: u32, height: u32) -> DpxHeader {
    BigEndianHeaderReader
        .read_header(&dpx_bytes(width, height, 0))
        .unwrap()
}

struct MockReader {
    should_fail: bool,
    header: DpxHeader,
}

impl HeaderReader for MockReader {
    fn read_header(&self, _data: &[u8]) -> Result<DpxHeader> {
        if self.should_fail {
            return Err(DpxError::OutOfBounds {
                offset: 2048,
                len: 32,
                buffer_len: 0,
            });
        }
        Ok(self.header.clone())
    }
}

struct MockUnpacker {
    should_fail: bool,
}

impl SampleUnpacker for MockUnpacker {
    fn unpack(&self, _samples: &[u8], width: u32, height: u32) -> Result<UnpackedImage> {
        if self.should_fail {
            return Err(DpxError::InvalidDimensions(width, height));
        }
        Ok(UnpackedImage {
            raster: PixelRaster::new(width, height),
            shift_correction: None,
        })
    }
}

struct MockWriter {
    should_fail: bool,
    written_data: Arc<Mutex<Vec<PixelRaster>>>,
}

impl TiffWriter for MockWriter {
    fn write_raster(
        &self,
        image: &PixelRaster,
        _output: &mut dyn Write,
        _config: &ConversionConfig,
    ) -> Result<()> {
        if self.should_fail {
            return Err(DpxError::EncodeError("Mock encode error".to_string()));
        }
        self.written_data.lock().unwrap().push(image.clone());
        Ok(())
    }
}

#[test]
fn test_config_builder() {
    let config = ConversionConfig::builder()
        .compression(TiffCompression::DeflateBalanced)
        .predictor(Some(2))
        .validate_dimensions(false)
        .validate_header(true)
        .build();

    assert!(matches!(config.compression, TiffCompression::DeflateBalanced));
    assert_eq!(config.predictor, Some(2));
    assert!(!config.validate_dimensions);
    assert!(config.validate_header);
}

#[test]
fn test_successful_conversion() {
    let written = Arc::new(Mutex::new(Vec::new()));
    let reader = MockReader {
        should_fail: false,
        header: mock_header(4, 2),
    };
    let unpacker = MockUnpacker { should_fail: false };
    let writer = MockWriter {
        should_fail: false,
        written_data: written.clone(),
    };

    let pipeline =
        DpxToTiffPipeline::with_custom(reader, unpacker, writer, ConversionConfig::default());

    let mut output = Cursor::new(Vec::new());
    let header = pipeline.convert(b"fake dpx data", &mut output).unwrap();

    assert_eq!(header.image.width, 4);
    assert_eq!(header.image.height, 2);
    assert_eq!(written.lock().unwrap().len(), 1);
}

#[test]
fn test_reader_failure() {
    let written = Arc::new(Mutex::new(Vec::new()));
    let reader = MockReader {
        should_fail: true,
        header: mock_header(4, 2),
    };
    let unpacker = MockUnpacker { should_fail: false };
    let writer = MockWriter {
        should_fail: false,
        written_data: written.clone(),
    };

    let pipeline =
        DpxToTiffPipeline::with_custom(reader, unpacker, writer, ConversionConfig::default());

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(b"fake dpx data", &mut output);

    assert!(matches!(result.unwrap_err(), DpxError::OutOfBounds { .. }));
    assert!(written.lock().unwrap().is_empty());
}

#[test]
fn test_unpacker_failure() {
    let reader = MockReader {
        should_fail: false,
        header: mock_header(4, 2),
    };
    let unpacker = MockUnpacker { should_fail: true };
    let writer = MockWriter {
        should_fail: false,
        written_data: Arc::new(Mutex::new(Vec::new())),
    };

    let pipeline =
        DpxToTiffPipeline::with_custom(reader, unpacker, writer, ConversionConfig::default());

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(b"fake dpx data", &mut output);

    assert!(matches!(result.unwrap_err(), DpxError::InvalidDimensions(_, _)));
}

#[test]
fn test_writer_failure() {
    let reader = MockReader {
        should_fail: false,
        header: mock_header(4, 2),
    };
    let unpacker = MockUnpacker { should_fail: false };
    let writer = MockWriter {
        should_fail: true,
        written_data: Arc::new(Mutex::new(Vec::new())),
    };

    let pipeline =
        DpxToTiffPipeline::with_custom(reader, unpacker, writer, ConversionConfig::default());

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(b"fake dpx data", &mut output);

    assert!(matches!(result.unwrap_err(), DpxError::EncodeError(_)));
}

#[test]
fn test_dimension_validation_failure() {
    let reader = MockReader {
        should_fail: false,
        header: mock_header(0, 0),
    };
    let unpacker = MockUnpacker { should_fail: false };
    let writer = MockWriter {
        should_fail: false,
        written_data: Arc::new(Mutex::new(Vec::new())),
    };

    let config = ConversionConfig::builder().validate_dimensions(true).build();
    let pipeline = DpxToTiffPipeline::with_custom(reader, unpacker, writer, config);

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(b"fake dpx data", &mut output);

    assert!(matches!(result.unwrap_err(), DpxError::InvalidDimensions(0, 0)));
}

#[test]
fn test_dimension_validation_disabled() {
    let written = Arc::new(Mutex::new(Vec::new()));
    let reader = MockReader {
        should_fail: false,
        header: mock_header(0, 0),
    };
    let unpacker = MockUnpacker { should_fail: false };
    let writer = MockWriter {
        should_fail: false,
        written_data: written.clone(),
    };

    let config = ConversionConfig::builder()
        .validate_dimensions(false)
        .build();
    let pipeline = DpxToTiffPipeline::with_custom(reader, unpacker, writer, config);

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(b"fake dpx data", &mut output);

    assert!(result.is_ok());
    assert_eq!(written.lock().unwrap().len(), 1);
}

#[test]
fn test_header_validation_rejects_foreign_magic() {
    let mut data = dpx_bytes(4, 2, 8);
    data[0..4].copy_from_slice(b"RIFF");

    let pipeline = DpxToTiffPipeline::new(
        ConversionConfig::builder().validate_header(true).build(),
    );
    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(&data, &mut output);

    assert!(matches!(result.unwrap_err(), DpxError::Validation(_)));
}

#[test]
fn test_rle_encoded_elements_are_unsupported() {
    let mut data = dpx_bytes(4, 2, 8);
    data[806..808].copy_from_slice(&1u16.to_be_bytes());

    let pipeline = DpxToTiffPipeline::new(ConversionConfig::default());
    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(&data, &mut output);

    assert!(matches!(result.unwrap_err(), DpxError::UnsupportedFormat(_)));
}

#[test]
fn test_non_ten_bit_elements_are_unsupported() {
    let mut data = dpx_bytes(4, 2, 8);
    data[803] = 16;

    let pipeline = DpxToTiffPipeline::new(ConversionConfig::default());
    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(&data, &mut output);

    assert!(matches!(result.unwrap_err(), DpxError::UnsupportedFormat(_)));
}

#[test]
fn test_truncated_samples_still_convert() {
    // Only half a scanline of words present: the shift correction
    // kicks in instead of an error.
    let data = dpx_bytes(4, 2, 2);

    let pipeline = DpxToTiffPipeline::new(ConversionConfig::default());
    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(&data, &mut output);

    assert!(result.is_ok());
    assert!(!output.into_inner().is_empty());
}

#[test]
fn test_convert_file_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("frame.dpx");
    let output_path = dir.path().join("frame.tiff");

    std::fs::write(&input_path, dpx_bytes(4, 2, 8)).unwrap();

    let pipeline = DpxToTiffPipeline::new(
        ConversionConfig::builder().validate_header(true).build(),
    );
    let header = pipeline.convert_file(&input_path, &output_path).unwrap();

    assert_eq!(header.image.width, 4);
    assert_eq!(header.image.height, 2);
    assert_eq!(header.file.image_offset, HEADER_LEN as u32);

    let written = std::fs::read(&output_path).unwrap();
    assert!(!written.is_empty());
}

#[test]
fn test_missing_input_file_reports_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = DpxToTiffPipeline::new(ConversionConfig::default());

    let result = pipeline.convert_file(
        dir.path().join("absent.dpx"),
        dir.path().join("out.tiff"),
    );

    assert!(matches!(result.unwrap_err(), DpxError::InputReadError(_)));
}
