pub(crate) mod utf8sequence;

use std::fmt;

use crate::error::DecodeError;

pub trait Utf: Sized {
    type Point;

    fn build(point: Self::Point) -> Result<Self, DecodeError>;
    fn is_complete(&self) -> bool;
    fn add_point(&mut self, point: Self::Point) -> Result<(), DecodeError>;
    fn codepoint(&self) -> Codepoint;
}

/// A decoded value. Holds up to 21 bits; nothing above U+10FFFF or in the
/// surrogate range is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Codepoint(pub u32);

impl Codepoint {
    pub const fn as_char(self) -> Option<char> {
        char::from_u32(self.0)
    }
}

impl From<Codepoint> for u32 {
    fn from(value: Codepoint) -> Self {
        value.0
    }
}

impl fmt::Display for Codepoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:04X}", self.0)
    }
}

/// How short or broken continuation runs are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Strict,
    /// Stop at the first bad continuation and keep what was accumulated.
    Lenient,
}
