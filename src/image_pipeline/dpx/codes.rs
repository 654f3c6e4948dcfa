//! Wire-code tables of the DPX header.
//!
//! Each table is a finite closed set. Unknown codes are rejected at
//! decode time instead of being carried through as raw integers.

use crate::image_pipeline::common::error::{DpxError, Result};

/// Sample data sign of an image element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSign {
    Unsigned,
    Signed,
}

impl DataSign {
    pub fn from_code(code: u32) -> Result<Self> {
        match code {
            0 => Ok(Self::Unsigned),
            1 => Ok(Self::Signed),
            _ => Err(DpxError::UnknownCode {
                table: "data sign",
                code,
            }),
        }
    }

    pub fn code(self) -> u32 {
        match self {
            Self::Unsigned => 0,
            Self::Signed => 1,
        }
    }
}

/// Channel layout of an image element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Descriptor {
    Undefined,
    Red,
    Green,
    Blue,
    Alpha,
    Luminance,
    /// Color difference CbCr
    Chroma,
    Depth,
    /// Composite video
    Composite,
    Rgb,
    Rgba,
    Abgr,
    Bgr,
    /// CbYCrY 4:2:2
    CbYCrY422,
    /// CbYCrYA 4:2:2:4
    CbYCrYA4224,
    /// CbYCr 4:4:4
    CbYCr444,
    /// CbYCrA 4:4:4:4
    CbYCrA4444,
    UserDefined,
}

impl Descriptor {
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Self::Undefined),
            1 => Ok(Self::Red),
            2 => Ok(Self::Green),
            3 => Ok(Self::Blue),
            4 => Ok(Self::Alpha),
            6 => Ok(Self::Luminance),
            7 => Ok(Self::Chroma),
            8 => Ok(Self::Depth),
            9 => Ok(Self::Composite),
            50 => Ok(Self::Rgb),
            51 => Ok(Self::Rgba),
            52 => Ok(Self::Abgr),
            53 => Ok(Self::Bgr),
            100 => Ok(Self::CbYCrY422),
            101 => Ok(Self::CbYCrYA4224),
            102 => Ok(Self::CbYCr444),
            103 => Ok(Self::CbYCrA4444),
            150 => Ok(Self::UserDefined),
            _ => Err(DpxError::UnknownCode {
                table: "descriptor",
                code: code.into(),
            }),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::Undefined => 0,
            Self::Red => 1,
            Self::Green => 2,
            Self::Blue => 3,
            Self::Alpha => 4,
            Self::Luminance => 6,
            Self::Chroma => 7,
            Self::Depth => 8,
            Self::Composite => 9,
            Self::Rgb => 50,
            Self::Rgba => 51,
            Self::Abgr => 52,
            Self::Bgr => 53,
            Self::CbYCrY422 => 100,
            Self::CbYCrYA4224 => 101,
            Self::CbYCr444 => 102,
            Self::CbYCrA4444 => 103,
            Self::UserDefined => 150,
        }
    }
}

/// Transfer characteristic of an image element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transfer {
    UserDefined,
    PrintingDensity,
    Linear,
    Logarithmic,
    Unspecified,
    Smpte274M,
    /// Rec. 709
    ItuR709,
    ItuR601Line625,
    ItuR601Line525,
    Ntsc,
    Pal,
    /// Z depth, linear
    ZLinear,
    /// Z depth, homogeneous
    ZHomogeneous,
}

impl Transfer {
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Self::UserDefined),
            1 => Ok(Self::PrintingDensity),
            2 => Ok(Self::Linear),
            3 => Ok(Self::Logarithmic),
            4 => Ok(Self::Unspecified),
            5 => Ok(Self::Smpte274M),
            6 => Ok(Self::ItuR709),
            7 => Ok(Self::ItuR601Line625),
            8 => Ok(Self::ItuR601Line525),
            9 => Ok(Self::Ntsc),
            10 => Ok(Self::Pal),
            11 => Ok(Self::ZLinear),
            12 => Ok(Self::ZHomogeneous),
            _ => Err(DpxError::UnknownCode {
                table: "transfer",
                code: code.into(),
            }),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::UserDefined => 0,
            Self::PrintingDensity => 1,
            Self::Linear => 2,
            Self::Logarithmic => 3,
            Self::Unspecified => 4,
            Self::Smpte274M => 5,
            Self::ItuR709 => 6,
            Self::ItuR601Line625 => 7,
            Self::ItuR601Line525 => 8,
            Self::Ntsc => 9,
            Self::Pal => 10,
            Self::ZLinear => 11,
            Self::ZHomogeneous => 12,
        }
    }
}

/// Colorimetric specification of an image element.
///
/// Shares the transfer characteristic code table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colorimetric {
    UserDefined,
    PrintingDensity,
    Linear,
    Logarithmic,
    Unspecified,
    Smpte274M,
    ItuR709,
    ItuR601Line625,
    ItuR601Line525,
    Ntsc,
    Pal,
    ZLinear,
    ZHomogeneous,
}

impl Colorimetric {
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Self::UserDefined),
            1 => Ok(Self::PrintingDensity),
            2 => Ok(Self::Linear),
            3 => Ok(Self::Logarithmic),
            4 => Ok(Self::Unspecified),
            5 => Ok(Self::Smpte274M),
            6 => Ok(Self::ItuR709),
            7 => Ok(Self::ItuR601Line625),
            8 => Ok(Self::ItuR601Line525),
            9 => Ok(Self::Ntsc),
            10 => Ok(Self::Pal),
            11 => Ok(Self::ZLinear),
            12 => Ok(Self::ZHomogeneous),
            _ => Err(DpxError::UnknownCode {
                table: "colorimetric",
                code: code.into(),
            }),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::UserDefined => 0,
            Self::PrintingDensity => 1,
            Self::Linear => 2,
            Self::Logarithmic => 3,
            Self::Unspecified => 4,
            Self::Smpte274M => 5,
            Self::ItuR709 => 6,
            Self::ItuR601Line625 => 7,
            Self::ItuR601Line525 => 8,
            Self::Ntsc => 9,
            Self::Pal => 10,
            Self::ZLinear => 11,
            Self::ZHomogeneous => 12,
        }
    }
}

/// Image orientation code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    LeftToRightTopToBottom,
    RightToLeftTopToBottom,
    LeftToRightBottomToTop,
    RightToLeftBottomToTop,
    TopToBottomLeftToRight,
    TopToBottomRightToLeft,
    BottomToTopLeftToRight,
    BottomToTopRightToLeft,
}

impl Orientation {
    pub fn from_code(code: u16) -> Result<Self> {
        match code {
            0 => Ok(Self::LeftToRightTopToBottom),
            1 => Ok(Self::RightToLeftTopToBottom),
            2 => Ok(Self::LeftToRightBottomToTop),
            3 => Ok(Self::RightToLeftBottomToTop),
            4 => Ok(Self::TopToBottomLeftToRight),
            5 => Ok(Self::TopToBottomRightToLeft),
            6 => Ok(Self::BottomToTopLeftToRight),
            7 => Ok(Self::BottomToTopRightToLeft),
            _ => Err(DpxError::UnknownCode {
                table: "orientation",
                code: code.into(),
            }),
        }
    }

    pub fn code(self) -> u16 {
        match self {
            Self::LeftToRightTopToBottom => 0,
            Self::RightToLeftTopToBottom => 1,
            Self::LeftToRightBottomToTop => 2,
            Self::RightToLeftBottomToTop => 3,
            Self::TopToBottomLeftToRight => 4,
            Self::TopToBottomRightToLeft => 5,
            Self::BottomToTopLeftToRight => 6,
            Self::BottomToTopRightToLeft => 7,
        }
    }
}

/// Bit-alignment scheme of packed samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Packing {
    /// Standard packing into 32-bit words
    Packed,
    /// Filled to 32-bit words, method A
    FilledA,
    /// Filled to 32-bit words, method B
    FilledB,
}

impl Packing {
    pub fn from_code(code: u16) -> Result<Self> {
        match code {
            0 => Ok(Self::Packed),
            1 => Ok(Self::FilledA),
            2 => Ok(Self::FilledB),
            _ => Err(DpxError::UnknownCode {
                table: "packing",
                code: code.into(),
            }),
        }
    }

    pub fn code(self) -> u16 {
        match self {
            Self::Packed => 0,
            Self::FilledA => 1,
            Self::FilledB => 2,
        }
    }
}

/// Sample stream encoding of an image element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    None,
    /// Run length encoding
    Rle,
}

impl Encoding {
    pub fn from_code(code: u16) -> Result<Self> {
        match code {
            0 => Ok(Self::None),
            1 => Ok(Self::Rle),
            _ => Err(DpxError::UnknownCode {
                table: "encoding",
                code: code.into(),
            }),
        }
    }

    pub fn code(self) -> u16 {
        match self {
            Self::None => 0,
            Self::Rle => 1,
        }
    }
}
