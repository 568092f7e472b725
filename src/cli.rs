use std::{
    error::Error,
    io::{self, Write},
    path::PathBuf,
};

use clap::{Parser, Subcommand};
use itertools::Itertools;
use tracing::{debug, info, warn};

use crate::{error::ParseCodePointError, utf::is_text, CodePoint, Encoding};

#[derive(Parser, Debug)]
#[command(name = "unicodec", about = "Encode and decode Unicode code points")]
pub struct Cli {
    /// utf-8 (default), utf-16le, utf-16be, utf-16, ascii
    #[arg(short, long, global = true, default_value = "utf-8")]
    pub encoding: Encoding,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the code points stored in one or more files
    Decode {
        #[arg(required = true, num_args = 1..)]
        files: Vec<PathBuf>,
    },
    /// Print the code units of code points given as U+1F600, 0x1F600 or decimal
    Encode {
        #[arg(required = true, num_args = 1.., value_parser = parse_code_point)]
        code_points: Vec<CodePoint>,
    },
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DecodeSummary {
    pub code_points: usize,
    pub errors: usize,
}

pub fn run<W: Write>(cli: Cli, out: &mut W) -> Result<(), Box<dyn Error>> {
    let encoding = cli.encoding;
    match cli.command {
        Command::Decode { files } => {
            info!(%encoding, files = files.len(), "decoding");
            for path in files.iter() {
                writeln!(out, "{}:", path.display())?;
                match std::fs::read(path) {
                    Ok(bytes) => {
                        let summary = decode_report(encoding, &bytes, out)?;
                        debug!(
                            path = %path.display(),
                            code_points = summary.code_points,
                            errors = summary.errors,
                            "decoded"
                        );
                    }
                    Err(error) => {
                        warn!(path = %path.display(), %error, "unreadable");
                        writeln!(out, "{error}")?;
                    }
                }
            }
        }
        Command::Encode { code_points } => {
            info!(%encoding, code_points = code_points.len(), "encoding");
            let mut bytes = Vec::<u8>::with_capacity(4);
            for code_point in code_points {
                bytes.clear();
                match encoding.encode_bytes(&mut bytes, code_point) {
                    Ok(()) => {
                        let units = bytes
                            .chunks(encoding.unit_width())
                            .map(|unit| unit.iter().map(|byte| format!("{byte:02x}")).join(""))
                            .join(" ");
                        writeln!(out, "U+{code_point:04X}: {units}")?;
                    }
                    Err(error) => {
                        warn!(%encoding, code_point, %error, "unencodable");
                        writeln!(out, "U+{code_point:04X}: {error}")?;
                    }
                }
            }
        }
    }
    Ok(())
}

/// Decodes `bytes` one code point at a time, writing a line per code point or
/// error. After an error decoding restarts one code unit past the failed offset,
/// so units swallowed by a broken sequence are still reported.
pub fn decode_report<W: Write>(
    encoding: Encoding,
    bytes: &[u8],
    out: &mut W,
) -> io::Result<DecodeSummary> {
    let mut input = bytes.iter().copied();
    let mut summary = DecodeSummary::default();
    while input.len() != 0 {
        let offset = bytes.len() - input.len();
        match encoding.decode_bytes(&mut input) {
            Ok(code_point) => {
                summary.code_points += 1;
                writeln!(out, "{offset:#010x}: {}", describe(code_point))?;
            }
            Err(error) => {
                summary.errors += 1;
                warn!(%encoding, offset, %error, "undecodable input");
                writeln!(out, "{offset:#010x}: {error}")?;
                let resume = (offset + encoding.unit_width()).min(bytes.len());
                input = bytes[resume..].iter().copied();
            }
        }
    }
    writeln!(
        out,
        "{} code points, {} errors",
        summary.code_points, summary.errors
    )?;
    Ok(summary)
}

fn describe(code_point: CodePoint) -> String {
    match char::from_u32(code_point).filter(|_| is_text(code_point)) {
        Some(c) => format!("U+{code_point:04X} {c:?}"),
        None => format!("U+{code_point:04X}"),
    }
}

pub fn parse_code_point(s: &str) -> Result<CodePoint, ParseCodePointError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ParseCodePointError::Empty);
    }
    let hex = ["U+", "u+", "0x", "0X"]
        .iter()
        .find_map(|prefix| s.strip_prefix(prefix));
    let parsed = match hex {
        Some(digits) => CodePoint::from_str_radix(digits, 16),
        None => s.parse(),
    };
    parsed.map_err(|_| ParseCodePointError::Invalid(s.to_owned()))
}
