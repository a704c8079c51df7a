//! Numeric bases supported by the converter

use std::fmt;

/// A numeric base the converter can read from or write to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base {
    Binary,
    Hexadecimal,
    Decimal,
}

impl Base {
    /// All bases in the order the wizard lists them
    pub const ALL: [Base; 3] = [Base::Binary, Base::Hexadecimal, Base::Decimal];

    /// Radix used when parsing and formatting digits
    pub fn radix(self) -> u32 {
        match self {
            Base::Binary => 2,
            Base::Hexadecimal => 16,
            Base::Decimal => 10,
        }
    }

    /// Lowercase display name shown in prompts and results
    pub fn name(self) -> &'static str {
        match self {
            Base::Binary => "binary",
            Base::Hexadecimal => "hexadecimal",
            Base::Decimal => "decimal",
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
