use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{error, info};

use dpx_reader_rs::image_pipeline::{ConversionConfig, DpxToTiffPipeline, TiffCompression};
use dpx_reader_rs::logger;

fn main() -> Result<()> {
    logger::init();

    let mut args = std::env::args().skip(1);
    let input = PathBuf::from(
        args.next()
            .context("usage: dpx_reader_rs <frame.dpx> [output.tiff]")?,
    );
    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| input.with_extension("tiff"));

    info!("Starting dpx_reader...");

    let config = ConversionConfig::builder()
        .compression(TiffCompression::None)
        .validate_header(true)
        .build();
    let pipeline = DpxToTiffPipeline::new(config);

    info!("DPX to TIFF pipeline initialized");
    info!("Compression: {:?}", pipeline.config().compression);

    match pipeline.convert_file(&input, &output) {
        Ok(header) => {
            println!("{:#?}", header.file);
            println!("{:#?}", header.image);
            println!("{:#?}", header.orientation);
            info!("Conversion successful!");
        }
        Err(e) => error!("Conversion failed: {}", e),
    }

    Ok(())
}
