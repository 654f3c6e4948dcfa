use std::io::Write;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raster::types::PixelRaster;
use crate::image_pipeline::tiff::types::ConversionConfig;

pub trait TiffWriter {
    fn write_raster(
        &self,
        image: &PixelRaster,
        output: &mut dyn Write,
        config: &ConversionConfig,
    ) -> Result<()>;
}
