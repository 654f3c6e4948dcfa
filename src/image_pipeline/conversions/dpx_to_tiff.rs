use tracing::{info, instrument, warn};
use std::io::Write;
use std::path::Path;

use crate::image_pipeline::{
    common::error::{DpxError, Result},
    dpx::{BigEndianHeaderReader, DpxHeader, HeaderReader},
    dpx::codes::Encoding,
    dpx::types::ImageElement,
    raster::{SampleUnpacker, TenBitUnpacker},
    tiff::{ConversionConfig, StandardTiffWriter, TiffWriter},
};

pub struct DpxToTiffPipeline<H: HeaderReader, U: SampleUnpacker, W: TiffWriter> {
    reader: H,
    unpacker: U,
    writer: W,
    config: ConversionConfig,
}

impl DpxToTiffPipeline<BigEndianHeaderReader, TenBitUnpacker, StandardTiffWriter> {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            reader: BigEndianHeaderReader,
            unpacker: TenBitUnpacker,
            writer: StandardTiffWriter,
            config,
        }
    }
}

impl<H: HeaderReader, U: SampleUnpacker, W: TiffWriter> DpxToTiffPipeline<H, U, W> {
    pub fn with_custom(reader: H, unpacker: U, writer: W, config: ConversionConfig) -> Self {
        Self {
            reader,
            unpacker,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, width: u32, height: u32) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(DpxError::InvalidDimensions(width, height));
        }

        Ok(())
    }

    fn check_element_support(element: &ImageElement) -> Result<()> {
        if element.encoding == Encoding::Rle {
            return Err(DpxError::UnsupportedFormat(
                "run-length encoded sample data".to_string(),
            ));
        }
        if element.bit_size != 10 {
            return Err(DpxError::UnsupportedFormat(format!(
                "{} bits per sample",
                element.bit_size
            )));
        }
        Ok(())
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<DpxHeader> {
        info!("Starting DPX to TIFF conversion");

        let header = {
            let _span = tracing::info_span!("decode_header").entered();
            self.reader.read_header(input_data)?
        };

        if self.config.validate_header {
            header.validate()?;
        }

        let (width, height) = (header.image.width, header.image.height);
        {
            let _span = tracing::info_span!("validate_dimensions", width, height).entered();
            self.validate_dimensions(width, height)?;
        }

        let element = header.image.elements.first().ok_or_else(|| {
            DpxError::UnsupportedFormat("header declares no image elements".to_string())
        })?;
        Self::check_element_support(element)?;

        let samples = sample_region(input_data, element.data_offset, width, height);

        let unpacked = {
            let _span = tracing::info_span!("unpack_samples").entered();
            self.unpacker.unpack(samples, width, height)?
        };
        if let Some(shift) = unpacked.shift_correction {
            warn!(shift, "Realigned raster around a failed sample window");
        }

        {
            let _span = tracing::info_span!("encode_tiff").entered();
            self.writer.write_raster(&unpacked.raster, output, &self.config)?;
        }

        info!(width, height, "Conversion complete");
        Ok(header)
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<DpxHeader> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                DpxError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        let mut output_file = {
            let _span = tracing::info_span!("create_output_file").entered();
            std::fs::File::create(output_path).map_err(|e| {
                DpxError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?
        };

        self.convert(&input_data, &mut output_file)
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ConversionConfig) {
        self.config = config;
    }
}

/// Sample bytes for one frame, starting at the element's data offset and
/// clamped to the buffer. Missing bytes surface as short windows during
/// unpacking, which is what drives the shift correction.
fn sample_region(data: &[u8], data_offset: u32, width: u32, height: u32) -> &[u8] {
    let start = (data_offset as usize).min(data.len());
    let region = &data[start..];
    let expected = (width as usize)
        .saturating_mul(height as usize)
        .saturating_mul(4);
    &region[..region.len().min(expected)]
}
