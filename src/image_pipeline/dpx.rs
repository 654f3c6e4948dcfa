//! DPX header decoding module
//!
//! This module provides structural decoding of the fixed-layout DPX
//! header sections into typed values.

mod reader;
mod big_endian_reader;
pub mod codes;
pub mod types;

pub use reader::HeaderReader;
pub use big_endian_reader::BigEndianHeaderReader;
pub use types::DpxHeader;
