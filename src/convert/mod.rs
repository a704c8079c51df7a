//! Base conversion - parses dot-delimited segments and formats byte-aligned output
//!
//! Input text is split on `.` into segments. A lone segment is read as one
//! signed 64-bit value. Several segments are read as big-endian bytes and
//! packed into a single value, so `ff.ab` in hexadecimal is `0xffab`.
//!
//! Binary and hexadecimal output is left-padded to whole bytes and split back
//! into `.`-joined chunks (8 binary digits or 2 hex digits per chunk).

mod base;
mod error;

pub use base::Base;
pub use error::ConversionError;

/// Convert `text` written in `source` into its representation in `dest`.
pub fn convert(text: &str, source: Base, dest: Base) -> Result<String, ConversionError> {
    let value = parse_segments(text, source)?;
    Ok(format_value(value, dest))
}

/// Parse dot-delimited `text` in the given base into a single value.
///
/// Fails fast on the first bad segment; no partial result is produced.
pub fn parse_segments(text: &str, base: Base) -> Result<i64, ConversionError> {
    let segments: Vec<&str> = text.split('.').collect();

    if let [single] = segments.as_slice() {
        return parse_segment(single, base);
    }

    segments
        .iter()
        .try_fold(0u64, |packed, segment| {
            let byte = parse_segment(segment, base)?;
            if !(0..=255).contains(&byte) {
                return Err(ConversionError::InvalidInput);
            }
            // Shifting would drop a non-zero high byte
            if packed.leading_zeros() < 8 {
                return Err(ConversionError::InvalidInput);
            }
            Ok((packed << 8) | byte as u64)
        })
        .map(|packed| packed as i64)
}

fn parse_segment(segment: &str, base: Base) -> Result<i64, ConversionError> {
    i64::from_str_radix(segment, base.radix()).map_err(|_| ConversionError::InvalidInput)
}

/// Format `value` in `base`.
///
/// Decimal output is the plain signed number. Binary and hexadecimal output
/// use the 64-bit two's-complement bit pattern, chunked into bytes.
pub fn format_value(value: i64, base: Base) -> String {
    let bits = value as u64;
    match base {
        Base::Decimal => value.to_string(),
        Base::Binary => chunk_digits(&format!("{bits:b}"), 8),
        Base::Hexadecimal => chunk_digits(&format!("{bits:x}"), 2),
    }
}

/// Left-pad `digits` with zeros to a multiple of `width` and join the chunks with `.`
fn chunk_digits(digits: &str, width: usize) -> String {
    if digits.is_empty() {
        return "0".repeat(width);
    }

    let padded_len = digits.len().div_ceil(width) * width;
    let padded: Vec<char> = format!("{digits:0>padded_len$}").chars().collect();

    padded
        .chunks(width)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(".")
}
