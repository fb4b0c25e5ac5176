mod error;
mod input;
mod utf;

use std::ffi::OsString;
use std::io::{BufRead, Write};

use itertools::Itertools;

pub use error::{DecodeError, InputError};
pub use input::{collect_bytes, parse_byte, read_interactive};
pub use utf::utf8sequence::{
    decode, decode_sequence, decode_with, is_continuation, sequence_len, strip_framing,
    Utf8Sequence, SEQUENCE_CAPACITY,
};
pub use utf::{Codepoint, Mode, Utf};

pub const USAGE: &str = "Usage: decode-utf8 [--lenient] [--verbose] [BYTE...]
Decodes one UTF-8 character from up to four hex bytes, e.g. `decode-utf8 E2 82 AC`.
Prompts for the bytes when none are given.";

#[derive(Debug, Default, PartialEq, Eq)]
struct Options {
    mode: Mode,
    verbose: bool,
    help: bool,
    bytes: Vec<String>,
}

impl Options {
    fn parse<I: IntoIterator<Item = OsString>>(argv: I) -> Result<Self, InputError> {
        let mut options = Self::default();
        for argument in argv {
            let argument = argument.to_string_lossy().into_owned();
            match argument.as_str() {
                "--lenient" => options.mode = Mode::Lenient,
                "--verbose" => options.verbose = true,
                "-h" | "--help" => options.help = true,
                flag if flag.starts_with('-') => {
                    return Err(InputError::UnknownFlag(argument));
                }
                _ => options.bytes.push(argument),
            }
        }
        Ok(options)
    }
}

pub fn run<I: IntoIterator<Item = OsString>>(argv: I) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = std::io::stdin();
    run_with(argv, stdin.lock(), std::io::stdout().lock())
}

pub fn run_with<I, R, W>(
    argv: I,
    reader: R,
    mut writer: W,
) -> Result<(), Box<dyn std::error::Error>>
where
    I: IntoIterator<Item = OsString>,
    R: BufRead,
    W: Write,
{
    let options = Options::parse(argv)?;
    if options.help {
        writeln!(writer, "{USAGE}")?;
        return Ok(());
    }
    let bytes = if options.bytes.is_empty() {
        read_interactive(reader, &mut writer)?
    } else {
        collect_bytes(&options.bytes)?
    };
    let sequence = decode_sequence(bytes, options.mode)?;
    if options.verbose {
        writeln!(writer, "{}", describe(bytes, &sequence))?;
    } else {
        writeln!(writer, "{}", sequence.codepoint())?;
    }
    Ok(())
}

/// Renders the bytes folded into `sequence`, which in lenient mode may stop
/// short of the length the lead byte announced.
fn describe(bytes: [u8; SEQUENCE_CAPACITY], sequence: &Utf8Sequence) -> String {
    let codepoint = sequence.codepoint();
    let hex = bytes[..sequence.current_len()]
        .iter()
        .map(|byte| format!("{byte:02X}"))
        .join(" ");
    match codepoint.as_char() {
        Some(c) if !c.is_control() => format!("{hex} -> {codepoint} {c}"),
        _ => format!("{hex} -> {codepoint}"),
    }
}
