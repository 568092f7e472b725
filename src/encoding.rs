use std::{fmt, str::FromStr};

use crate::{
    error::{CodecError, UnknownEncoding},
    stream::{Endianness, InputStream, OutputStream, Utf16Bytes, Utf16Units},
    Ascii, Codec, CodePoint, Utf16, Utf16Be, Utf16Le, Utf8,
};

/// Run-time tag selecting one of the codecs.
///
/// The byte-level entry points dispatch once to the matching codec. UTF-16
/// variants serialize each unit in their own byte order; plain UTF-16 is
/// big-endian, the RFC 2781 default when there is no byte order mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    Utf8,
    Utf16Le,
    Utf16Be,
    Utf16,
    Ascii,
}

impl Encoding {
    pub const ALL: [Encoding; 5] = [
        Encoding::Utf8,
        Encoding::Utf16Le,
        Encoding::Utf16Be,
        Encoding::Utf16,
        Encoding::Ascii,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf-8",
            Encoding::Utf16Le => "utf-16le",
            Encoding::Utf16Be => "utf-16be",
            Encoding::Utf16 => "utf-16",
            Encoding::Ascii => "ascii",
        }
    }

    /// Width of one code unit in bytes.
    pub const fn unit_width(self) -> usize {
        match self {
            Encoding::Utf8 | Encoding::Ascii => 1,
            Encoding::Utf16Le | Encoding::Utf16Be | Encoding::Utf16 => 2,
        }
    }

    pub const fn endianness(self) -> Option<Endianness> {
        match self {
            Encoding::Utf8 | Encoding::Ascii => None,
            Encoding::Utf16Le => Some(Utf16Le::ENDIANNESS),
            Encoding::Utf16Be => Some(Utf16Be::ENDIANNESS),
            Encoding::Utf16 => Some(Utf16::ENDIANNESS),
        }
    }

    pub fn encode_bytes<O: OutputStream<u8> + ?Sized>(
        self,
        output: &mut O,
        code_point: CodePoint,
    ) -> Result<(), CodecError> {
        match (self, self.endianness()) {
            (Encoding::Utf8, _) => Utf8::encode(output, code_point),
            (Encoding::Ascii, _) => Ascii::encode(output, code_point),
            (Encoding::Utf16Le, Some(order)) => {
                Utf16Le::encode(&mut Utf16Bytes::new(output, order), code_point)
            }
            (Encoding::Utf16Be, Some(order)) => {
                Utf16Be::encode(&mut Utf16Bytes::new(output, order), code_point)
            }
            (Encoding::Utf16, Some(order)) => {
                Utf16::encode(&mut Utf16Bytes::new(output, order), code_point)
            }
            (_, None) => unreachable!(),
        }
    }

    pub fn decode_bytes<I: InputStream<u8> + ?Sized>(
        self,
        input: &mut I,
    ) -> Result<CodePoint, CodecError> {
        match (self, self.endianness()) {
            (Encoding::Utf8, _) => Utf8::decode(input),
            (Encoding::Ascii, _) => Ascii::decode(input),
            (Encoding::Utf16Le, Some(order)) => Utf16Le::decode(&mut Utf16Units::new(input, order)),
            (Encoding::Utf16Be, Some(order)) => Utf16Be::decode(&mut Utf16Units::new(input, order)),
            (Encoding::Utf16, Some(order)) => Utf16::decode(&mut Utf16Units::new(input, order)),
            (_, None) => unreachable!(),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Encoding {
    type Err = UnknownEncoding;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Encoding::Utf8),
            "utf-16le" | "utf16le" => Ok(Encoding::Utf16Le),
            "utf-16be" | "utf16be" => Ok(Encoding::Utf16Be),
            "utf-16" | "utf16" => Ok(Encoding::Utf16),
            "ascii" | "us-ascii" => Ok(Encoding::Ascii),
            _ => Err(UnknownEncoding(s.to_owned())),
        }
    }
}
