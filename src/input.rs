use std::io::{BufRead, Write};

use itertools::Itertools;

use crate::error::InputError;
use crate::utf::utf8sequence::SEQUENCE_CAPACITY;

/// Parses one byte written as hex, with or without a `0x` prefix.
pub fn parse_byte(token: &str) -> Result<u8, InputError> {
    let trimmed = token.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(InputError::InvalidHex(token.to_owned()));
    }
    u8::from_str_radix(digits, 16).map_err(|_| InputError::InvalidHex(token.to_owned()))
}

/// Packs hex tokens into a sequence buffer. A zero byte ends the input and
/// anything after it is ignored.
pub fn collect_bytes<I, S>(tokens: I) -> Result<[u8; SEQUENCE_CAPACITY], InputError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parsed = tokens
        .into_iter()
        .map(|token| parse_byte(token.as_ref()))
        .take_while_inclusive(|byte| !matches!(byte, Ok(0)))
        .collect::<Result<Vec<u8>, _>>()?;
    if parsed.is_empty() {
        return Err(InputError::Empty);
    }
    if parsed.len() > SEQUENCE_CAPACITY {
        return Err(InputError::TooManyBytes(parsed.len()));
    }
    let mut bytes = [0; SEQUENCE_CAPACITY];
    bytes[..parsed.len()].copy_from_slice(&parsed);
    Ok(bytes)
}

/// Prompts for up to four bytes, one per line.
pub fn read_interactive<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
) -> Result<[u8; SEQUENCE_CAPACITY], InputError> {
    let mut bytes = [0; SEQUENCE_CAPACITY];
    let mut count = 0;
    let mut line = String::new();
    while count < SEQUENCE_CAPACITY {
        write!(writer, "Enter byte #{}: ", count + 1)?;
        writer.flush()?;
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }
        let byte = parse_byte(&line)?;
        bytes[count] = byte;
        count += 1;
        if byte == 0 {
            break;
        }
    }
    if count == 0 {
        return Err(InputError::Empty);
    }
    Ok(bytes)
}
