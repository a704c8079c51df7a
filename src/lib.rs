//! bhd: Binary-Hex-Decimal Converter
//!
//! An interactive terminal wizard for converting numbers between binary,
//! hexadecimal, and decimal, with dot-delimited byte groups on either side.

pub mod cli;
pub mod convert;
pub mod utils;
pub mod wizard;
