//! DPX header data types
//!
//! Field layout follows the fixed byte offsets of the DPX generic and
//! industry header sections. All multi-byte integers are big-endian on
//! the wire.

use std::borrow::Cow;
use std::fmt;

use crate::image_pipeline::common::error::{DpxError, Result};
use crate::image_pipeline::dpx::codes::{
    Colorimetric, DataSign, Descriptor, Encoding, Orientation, Packing, Transfer,
};

/// Magic tag of a big-endian DPX file.
pub const MAGIC_BIG_ENDIAN: [u8; 4] = *b"SDPX";

/// Magic tag of a little-endian DPX file.
pub const MAGIC_LITTLE_ENDIAN: [u8; 4] = *b"XPDS";

/// Maximum number of image elements a DPX file can declare.
pub const MAX_ELEMENTS: usize = 8;

/// Encryption key value marking an unencrypted file.
pub const UNENCRYPTED: u32 = 0xFFFF_FFFF;

/// Number of header bytes the decoder reads, through the user id field.
pub const HEADER_LEN: usize = 2080;

/// Fixed-length text field, carried verbatim from the header.
///
/// The wire bytes are kept exactly as read, embedded NUL bytes included.
/// [`TextField::display`] is a rendering aid only.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TextField<const N: usize>(pub [u8; N]);

impl<const N: usize> TextField<N> {
    pub fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }

    /// Printable form, truncated at the first NUL.
    pub fn display(&self) -> Cow<'_, str> {
        let end = self.0.iter().position(|&b| b == 0).unwrap_or(N);
        String::from_utf8_lossy(&self.0[..end])
    }
}

impl<const N: usize> fmt::Debug for TextField<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.display())
    }
}

/// Fixed-length opaque byte range (reserved header padding).
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Reserved<const N: usize>(pub [u8; N]);

impl<const N: usize> Reserved<N> {
    pub fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }
}

impl<const N: usize> fmt::Debug for Reserved<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} reserved bytes>", N)
    }
}

/// File information section (bytes 0..768).
#[derive(Debug, Clone, PartialEq)]
pub struct FileInfo {
    /// Magic tag; identifies byte order (`SDPX` or `XPDS`)
    pub magic: [u8; 4],
    /// Offset to image data (in bytes)
    pub image_offset: u32,
    /// Version of the header format, e.g. `V2.0`
    pub version: TextField<8>,
    /// Total file size (in bytes)
    pub file_size: u32,
    pub filename: TextField<100>,
    /// Creation timestamp, `yyyy:mm:dd:hh:mm:ss:LTZ`
    pub timestamp: TextField<24>,
    pub creator: TextField<100>,
    pub project: TextField<200>,
    pub copyright: TextField<200>,
    /// Encryption key; [`UNENCRYPTED`] for clear files
    pub encrypt_key: u32,
    pub reserved: Reserved<104>,
}

impl FileInfo {
    pub fn is_encrypted(&self) -> bool {
        self.encrypt_key != UNENCRYPTED
    }
}

/// One image element block (72 bytes within the image section).
#[derive(Debug, Clone, PartialEq)]
pub struct ImageElement {
    pub data_sign: DataSign,
    /// Reference low data code value
    pub low_data: u32,
    /// Quantity represented by the low data code
    pub low_quantity: f32,
    /// Reference high data code value
    pub high_data: u32,
    /// Quantity represented by the high data code
    pub high_quantity: f32,
    /// Channel layout of this element
    pub descriptor: Descriptor,
    pub transfer: Transfer,
    pub colorimetric: Colorimetric,
    /// Bits per sample
    pub bit_size: u8,
    pub packing: Packing,
    pub encoding: Encoding,
    /// Byte offset to this element's sample data
    pub data_offset: u32,
    /// End-of-line padding (in bytes)
    pub eol_padding: u32,
    /// End-of-image padding (in bytes)
    pub eoi_padding: u32,
    pub description: TextField<32>,
}

/// Image information section (bytes 768..1408).
#[derive(Debug, Clone, PartialEq)]
pub struct ImageInfo {
    pub orientation: Orientation,
    /// Declared element count (1-8); the decoded [`ImageInfo::elements`]
    /// list is capped at [`MAX_ELEMENTS`]
    pub number_of_elements: u16,
    /// Pixels per scanline
    pub width: u32,
    /// Scanlines per image
    pub height: u32,
    pub elements: Vec<ImageElement>,
    pub reserved: Reserved<52>,
}

/// Eroded or blanked pixels at the image borders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageBorder {
    pub x_left: u16,
    pub x_right: u16,
    pub y_left: u16,
    pub y_right: u16,
}

/// Image source/orientation section (bytes 1408..1664).
#[derive(Debug, Clone, PartialEq)]
pub struct OrientationInfo {
    pub x_offset: u32,
    pub y_offset: u32,
    pub x_center: f32,
    pub y_center: f32,
    pub x_size: u32,
    pub y_size: u32,
    pub source_name: TextField<100>,
    pub source_time: TextField<24>,
    pub input_device: TextField<32>,
    pub input_serial: TextField<32>,
    pub border: ImageBorder,
    pub aspect_ratio: [u32; 2],
    pub reserved: Reserved<28>,
}

/// Motion-picture film section (bytes 1664..1920).
#[derive(Debug, Clone, PartialEq)]
pub struct FilmInfo {
    /// Film edge code manufacturer id
    pub manufacturer_id: TextField<2>,
    pub film_type: TextField<2>,
    /// Offset in perfs
    pub perf_offset: TextField<2>,
    pub prefix: TextField<6>,
    pub count: TextField<4>,
    /// Format string, e.g. Academy
    pub format: TextField<32>,
    pub frame_position: u32,
    pub frame_sequence: u32,
    pub held_count: u32,
    pub frame_rate: f32,
    pub shutter_angle: f32,
    /// Frame identification, e.g. keyframe
    pub frame_id: TextField<32>,
    pub slate: TextField<100>,
    pub reserved: Reserved<56>,
}

/// Television section (bytes 1920..2048).
#[derive(Debug, Clone, PartialEq)]
pub struct TelevisionInfo {
    /// SMPTE time code, packed hh:mm:ss:ff
    pub time_code: u32,
    pub user_bits: u32,
    pub interlace: u8,
    pub field_number: u8,
    pub video_signal: u8,
    pub padding: u8,
    pub horizontal_sample_rate: f32,
    pub vertical_sample_rate: f32,
    pub frame_rate: f32,
    pub time_offset: f32,
    pub gamma: f32,
    pub black_level: f32,
    pub black_gain: f32,
    pub break_point: f32,
    pub white_level: f32,
    pub integration_times: f32,
    pub reserved: Reserved<76>,
}

/// User-defined section (bytes 2048..2080).
#[derive(Debug, Clone, PartialEq)]
pub struct UserInfo {
    pub id: TextField<32>,
}

/// Decoded DPX header.
#[derive(Debug, Clone, PartialEq)]
pub struct DpxHeader {
    pub file: FileInfo,
    pub image: ImageInfo,
    pub orientation: OrientationInfo,
    pub film: FilmInfo,
    pub television: TelevisionInfo,
    pub user: UserInfo,
}

impl DpxHeader {
    /// Semantic sanity check, separate from structural decoding.
    ///
    /// Decoding never inspects the magic tag or dimension values;
    /// callers that want to know whether the buffer really was a DPX
    /// file run this afterwards.
    pub fn validate(&self) -> Result<()> {
        if self.file.magic != MAGIC_BIG_ENDIAN && self.file.magic != MAGIC_LITTLE_ENDIAN {
            return Err(DpxError::Validation(format!(
                "magic tag {:?} is neither SDPX nor XPDS",
                self.file.magic
            )));
        }
        if self.image.width == 0 || self.image.height == 0 {
            return Err(DpxError::Validation(format!(
                "implausible image dimensions {}x{}",
                self.image.width, self.image.height
            )));
        }
        let declared = self.image.number_of_elements;
        if declared == 0 || usize::from(declared) > MAX_ELEMENTS {
            return Err(DpxError::Validation(format!(
                "number of image elements {} outside 1..={}",
                declared, MAX_ELEMENTS
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_field_display_stops_at_first_nul() {
        let field = TextField(*b"frame.dpx\0junk after ");
        assert_eq!(field.display(), "frame.dpx");
        assert_eq!(field.as_bytes().len(), 21);
    }

    #[test]
    fn text_field_display_without_nul_uses_full_length() {
        let field = TextField(*b"V2.0beta");
        assert_eq!(field.display(), "V2.0beta");
    }

    #[test]
    fn reserved_debug_stays_terse() {
        let reserved = Reserved([0xAAu8; 52]);
        assert_eq!(format!("{:?}", reserved), "<52 reserved bytes>");
    }
}
