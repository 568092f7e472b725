//! UTF-16 as laid out in RFC 2781.
//!
//! [`Utf16`] is the surrogate-aware codec. [`Utf16Le`] and [`Utf16Be`] only
//! move single 16-bit units and leave supplementary planes to the caller;
//! their byte order matters once units are serialized through
//! [`Utf16Bytes`](crate::stream::Utf16Bytes) or read back through
//! [`Utf16Units`](crate::stream::Utf16Units).

use crate::{
    error::CodecError,
    stream::{Endianness, InputStream, OutputStream},
    utf::MAX_CODEPOINT,
    Codec, CodePoint, Encoding,
};

const HIGH_SURROGATES: std::ops::RangeInclusive<u16> = 0xD800..=0xDBFF;
const LOW_SURROGATES: std::ops::RangeInclusive<u16> = 0xDC00..=0xDFFF;
const SUPPLEMENTARY_OFFSET: CodePoint = 0x10000;

#[derive(Debug, Clone, Copy, Default)]
pub struct Utf16Le;

#[derive(Debug, Clone, Copy, Default)]
pub struct Utf16Be;

#[derive(Debug, Clone, Copy, Default)]
pub struct Utf16;

impl Utf16Le {
    pub const ENDIANNESS: Endianness = Endianness::LittleEndian;
}

impl Utf16Be {
    pub const ENDIANNESS: Endianness = Endianness::BigEndian;
}

impl Utf16 {
    /// Byte order assumed for serialized UTF-16 without a byte order mark.
    pub const ENDIANNESS: Endianness = Endianness::BigEndian;
}

macro_rules! single_unit_codec {
    ($codec:ty, $encoding:expr) => {
        impl Codec for $codec {
            type Unit = u16;
            const ENCODING: Encoding = $encoding;

            /// Writes the low 16 bits of `code_point`.
            #[inline]
            fn encode<O: OutputStream<u16> + ?Sized>(
                output: &mut O,
                code_point: CodePoint,
            ) -> Result<(), CodecError> {
                output.put(code_point as u16);
                Ok(())
            }

            #[inline]
            fn decode<I: InputStream<u16> + ?Sized>(
                input: &mut I,
            ) -> Result<CodePoint, CodecError> {
                input.take_unit().map(CodePoint::from)
            }
        }
    };
}

single_unit_codec!(Utf16Le, Encoding::Utf16Le);
single_unit_codec!(Utf16Be, Encoding::Utf16Be);

impl Codec for Utf16 {
    type Unit = u16;
    const ENCODING: Encoding = Encoding::Utf16;

    fn encode<O: OutputStream<u16> + ?Sized>(
        output: &mut O,
        code_point: CodePoint,
    ) -> Result<(), CodecError> {
        match code_point {
            0x0000..=0xFFFF => output.put(code_point as u16),
            0x10000..=MAX_CODEPOINT => {
                let shifted = code_point - SUPPLEMENTARY_OFFSET;
                output.put(0xD800 | (shifted >> 10) as u16);
                output.put(0xDC00 | (shifted & 0x3FF) as u16);
            }
            _ => return Err(CodecError::OutOfRange(code_point)),
        }
        Ok(())
    }

    fn decode<I: InputStream<u16> + ?Sized>(input: &mut I) -> Result<CodePoint, CodecError> {
        let high = input.take_unit()?;
        if LOW_SURROGATES.contains(&high) {
            return Err(CodecError::MalformedSequence);
        }
        if !HIGH_SURROGATES.contains(&high) {
            return Ok(high as CodePoint);
        }
        let low = input.take_unit()?;
        if !LOW_SURROGATES.contains(&low) {
            return Err(CodecError::MalformedSequence);
        }
        let high = (high - 0xD800) as CodePoint;
        let low = (low - 0xDC00) as CodePoint;
        Ok(((high << 10) | low) + SUPPLEMENTARY_OFFSET)
    }
}
