//! Big-endian DPX header decoding.
//!
//! The decoder is a structural projection of fixed byte ranges onto
//! typed fields. It does not check the magic tag or any field ranges;
//! see [`DpxHeader::validate`] for the semantic check. Little-endian
//! files (magic `XPDS`) are not re-decoded with swapped byte order;
//! their fields come out implausible and validation is where a caller
//! notices.

use tracing::debug;

use crate::image_pipeline::common::error::{DpxError, Result};
use crate::image_pipeline::dpx::codes::{
    Colorimetric, DataSign, Descriptor, Encoding, Orientation, Packing, Transfer,
};
use crate::image_pipeline::dpx::reader::HeaderReader;
use crate::image_pipeline::dpx::types::{
    DpxHeader, FileInfo, FilmInfo, ImageBorder, ImageElement, ImageInfo, OrientationInfo,
    Reserved, TelevisionInfo, TextField, UserInfo, MAX_ELEMENTS,
};

/// Byte offset of the first image element block.
const ELEMENT_BASE: usize = 780;

/// Size of one image element block. The eighth block ends at byte 1356,
/// exactly where the image section's reserved range begins.
const ELEMENT_STRIDE: usize = 72;

/// Decodes the DPX header sections assuming big-endian field layout.
pub struct BigEndianHeaderReader;

impl HeaderReader for BigEndianHeaderReader {
    fn read_header(&self, data: &[u8]) -> Result<DpxHeader> {
        debug!("Decoding DPX header, {} bytes", data.len());

        Ok(DpxHeader {
            file: read_file_info(data)?,
            image: read_image_info(data)?,
            orientation: read_orientation_info(data)?,
            film: read_film_info(data)?,
            television: read_television_info(data)?,
            user: read_user_info(data)?,
        })
    }
}

fn read_u8(data: &[u8], offset: usize) -> Result<u8> {
    data.get(offset).copied().ok_or(DpxError::OutOfBounds {
        offset,
        len: 1,
        buffer_len: data.len(),
    })
}

fn read_u16(data: &[u8], offset: usize) -> Result<u16> {
    let hi = u16::from(read_u8(data, offset)?);
    let lo = u16::from(read_u8(data, offset + 1)?);
    Ok((hi << 8) | lo)
}

fn read_u32(data: &[u8], offset: usize) -> Result<u32> {
    let mut word = 0u32;
    for lane in 0..4 {
        word = (word << 8) | u32::from(read_u8(data, offset + lane)?);
    }
    Ok(word)
}

fn read_f32(data: &[u8], offset: usize) -> Result<f32> {
    // Reinterpretation of the big-endian bit pattern, not a numeric cast.
    Ok(f32::from_bits(read_u32(data, offset)?))
}

fn read_array<const N: usize>(data: &[u8], offset: usize) -> Result<[u8; N]> {
    let slice = data.get(offset..offset + N).ok_or(DpxError::OutOfBounds {
        offset,
        len: N,
        buffer_len: data.len(),
    })?;
    let mut out = [0u8; N];
    out.copy_from_slice(slice);
    Ok(out)
}

fn read_text<const N: usize>(data: &[u8], offset: usize) -> Result<TextField<N>> {
    Ok(TextField(read_array(data, offset)?))
}

fn read_reserved<const N: usize>(data: &[u8], offset: usize) -> Result<Reserved<N>> {
    Ok(Reserved(read_array(data, offset)?))
}

fn read_file_info(data: &[u8]) -> Result<FileInfo> {
    Ok(FileInfo {
        magic: read_array(data, 0)?,
        image_offset: read_u32(data, 4)?,
        version: read_text(data, 8)?,
        file_size: read_u32(data, 16)?,
        filename: read_text(data, 36)?,
        timestamp: read_text(data, 136)?,
        creator: read_text(data, 160)?,
        project: read_text(data, 260)?,
        copyright: read_text(data, 460)?,
        encrypt_key: read_u32(data, 660)?,
        reserved: read_reserved(data, 664)?,
    })
}

fn read_image_info(data: &[u8]) -> Result<ImageInfo> {
    let orientation = Orientation::from_code(read_u16(data, 768)?)?;
    let number_of_elements = read_u16(data, 770)?;
    let width = read_u32(data, 772)?;
    let height = read_u32(data, 776)?;

    // The layout holds at most eight element blocks back to back; any
    // count the header declares beyond that has no slot to read.
    let slots = usize::from(number_of_elements).min(MAX_ELEMENTS);
    let mut elements = Vec::with_capacity(slots);
    for slot in 0..slots {
        elements.push(read_image_element(data, ELEMENT_BASE + slot * ELEMENT_STRIDE)?);
    }

    Ok(ImageInfo {
        orientation,
        number_of_elements,
        width,
        height,
        elements,
        reserved: read_reserved(data, 1356)?,
    })
}

fn read_image_element(data: &[u8], base: usize) -> Result<ImageElement> {
    Ok(ImageElement {
        data_sign: DataSign::from_code(read_u32(data, base)?)?,
        low_data: read_u32(data, base + 4)?,
        low_quantity: read_f32(data, base + 8)?,
        high_data: read_u32(data, base + 12)?,
        high_quantity: read_f32(data, base + 16)?,
        descriptor: Descriptor::from_code(read_u8(data, base + 20)?)?,
        transfer: Transfer::from_code(read_u8(data, base + 21)?)?,
        colorimetric: Colorimetric::from_code(read_u8(data, base + 22)?)?,
        bit_size: read_u8(data, base + 23)?,
        packing: Packing::from_code(read_u16(data, base + 24)?)?,
        encoding: Encoding::from_code(read_u16(data, base + 26)?)?,
        data_offset: read_u32(data, base + 28)?,
        eol_padding: read_u32(data, base + 32)?,
        eoi_padding: read_u32(data, base + 36)?,
        description: read_text(data, base + 40)?,
    })
}

fn read_orientation_info(data: &[u8]) -> Result<OrientationInfo> {
    Ok(OrientationInfo {
        x_offset: read_u32(data, 1408)?,
        y_offset: read_u32(data, 1412)?,
        x_center: read_f32(data, 1416)?,
        y_center: read_f32(data, 1420)?,
        x_size: read_u32(data, 1424)?,
        y_size: read_u32(data, 1428)?,
        source_name: read_text(data, 1432)?,
        source_time: read_text(data, 1532)?,
        input_device: read_text(data, 1556)?,
        input_serial: read_text(data, 1588)?,
        border: ImageBorder {
            x_left: read_u16(data, 1620)?,
            x_right: read_u16(data, 1622)?,
            y_left: read_u16(data, 1624)?,
            y_right: read_u16(data, 1626)?,
        },
        aspect_ratio: [read_u32(data, 1628)?, read_u32(data, 1632)?],
        reserved: read_reserved(data, 1636)?,
    })
}

fn read_film_info(data: &[u8]) -> Result<FilmInfo> {
    Ok(FilmInfo {
        manufacturer_id: read_text(data, 1664)?,
        film_type: read_text(data, 1666)?,
        perf_offset: read_text(data, 1668)?,
        prefix: read_text(data, 1670)?,
        count: read_text(data, 1676)?,
        format: read_text(data, 1680)?,
        frame_position: read_u32(data, 1712)?,
        frame_sequence: read_u32(data, 1716)?,
        held_count: read_u32(data, 1720)?,
        frame_rate: read_f32(data, 1724)?,
        shutter_angle: read_f32(data, 1728)?,
        frame_id: read_text(data, 1732)?,
        slate: read_text(data, 1764)?,
        reserved: read_reserved(data, 1864)?,
    })
}

fn read_television_info(data: &[u8]) -> Result<TelevisionInfo> {
    Ok(TelevisionInfo {
        time_code: read_u32(data, 1920)?,
        user_bits: read_u32(data, 1924)?,
        interlace: read_u8(data, 1928)?,
        field_number: read_u8(data, 1929)?,
        video_signal: read_u8(data, 1930)?,
        padding: read_u8(data, 1931)?,
        horizontal_sample_rate: read_f32(data, 1932)?,
        vertical_sample_rate: read_f32(data, 1936)?,
        frame_rate: read_f32(data, 1940)?,
        time_offset: read_f32(data, 1944)?,
        gamma: read_f32(data, 1948)?,
        black_level: read_f32(data, 1952)?,
        black_gain: read_f32(data, 1956)?,
        break_point: read_f32(data, 1960)?,
        white_level: read_f32(data, 1964)?,
        integration_times: read_f32(data, 1968)?,
        reserved: read_reserved(data, 1972)?,
    })
}

fn read_user_info(data: &[u8]) -> Result<UserInfo> {
    Ok(UserInfo {
        id: read_text(data, 2048)?,
    })
}
