use crate::error::DecodeError;
use crate::utf::{Codepoint, Mode, Utf};

pub const SEQUENCE_CAPACITY: usize = 4;
const CONTINUATION_MASK: u8 = 0b0011_1111;

/// Total length of the sequence introduced by `lead`, or `None` when `lead`
/// cannot start a sequence.
#[inline]
pub const fn sequence_len(lead: u8) -> Option<u8> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC0..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF7 => Some(4),
        _ => None,
    }
}

#[inline]
pub const fn is_continuation(byte: u8) -> bool {
    byte & 0b1100_0000 == 0b1000_0000
}

/// Data bits of a lead byte with its length prefix removed.
#[inline]
pub const fn strip_framing(lead: u8) -> u8 {
    match sequence_len(lead) {
        Some(1) => lead,
        Some(2) => lead & 0b0001_1111,
        Some(3) => lead & 0b0000_1111,
        Some(4) => lead & 0b0000_0111,
        _ => 0,
    }
}

/// One character being assembled a byte at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Utf8Sequence {
    full_length: u8,
    current_length: u8,
    codepoint: u32,
}

impl Utf for Utf8Sequence {
    type Point = u8;

    #[inline]
    fn build(lead: Self::Point) -> Result<Self, DecodeError> {
        Self::from_lead(lead)
    }

    #[inline]
    fn is_complete(&self) -> bool {
        self.current_length == self.full_length
    }

    fn add_point(&mut self, point: Self::Point) -> Result<(), DecodeError> {
        if self.is_complete() {
            return Err(DecodeError::SequenceComplete {
                length: self.full_length,
            });
        }
        if point == 0 {
            return Err(DecodeError::TruncatedSequence {
                expected: self.full_length,
                found: self.current_length,
            });
        }
        if !is_continuation(point) {
            return Err(DecodeError::MalformedContinuation {
                byte: point,
                position: self.current_length,
            });
        }
        self.codepoint = (self.codepoint << 6) | (point & CONTINUATION_MASK) as u32;
        self.current_length += 1;
        Ok(())
    }

    #[inline]
    fn codepoint(&self) -> Codepoint {
        Codepoint(self.codepoint)
    }
}

impl Utf8Sequence {
    pub const fn from_lead(lead: u8) -> Result<Self, DecodeError> {
        match sequence_len(lead) {
            Some(full_length) => Ok(Self {
                full_length,
                current_length: 1,
                codepoint: strip_framing(lead) as u32,
            }),
            None => Err(DecodeError::InvalidLeadByte { byte: lead }),
        }
    }
    pub const fn current_len(&self) -> usize {
        self.current_length as usize
    }
    pub const fn full_len(&self) -> usize {
        self.full_length as usize
    }
}

/// Decodes the character at the front of `bytes`. Slots past the length
/// announced by the lead byte are ignored.
pub fn decode(bytes: [u8; SEQUENCE_CAPACITY]) -> Result<Codepoint, DecodeError> {
    decode_with(bytes, Mode::Strict)
}

pub fn decode_with(
    bytes: [u8; SEQUENCE_CAPACITY],
    mode: Mode,
) -> Result<Codepoint, DecodeError> {
    decode_sequence(bytes, mode).map(|sequence| sequence.codepoint())
}

/// Like [`decode_with`], but hands back the sequence so callers can see how
/// many bytes were folded in. In lenient mode that can be fewer than
/// [`Utf8Sequence::full_len`].
pub fn decode_sequence(
    bytes: [u8; SEQUENCE_CAPACITY],
    mode: Mode,
) -> Result<Utf8Sequence, DecodeError> {
    let mut sequence = Utf8Sequence::build(bytes[0])?;
    for &point in &bytes[1..sequence.full_len()] {
        match sequence.add_point(point) {
            Ok(()) => {}
            Err(
                DecodeError::TruncatedSequence { .. } | DecodeError::MalformedContinuation { .. },
            ) if mode == Mode::Lenient => break,
            Err(error) => return Err(error),
        }
    }
    Ok(sequence)
}
