//! UTF-8 as laid out in RFC 3629.
//!
//! ```text
//! U+000000..U+00007F  0xxxxxxx
//! U+000080..U+0007FF  110xxxxx 10xxxxxx
//! U+000800..U+00FFFF  1110xxxx 10xxxxxx 10xxxxxx
//! U+010000..U+10FFFF  11110xxx 10xxxxxx 10xxxxxx 10xxxxxx
//! ```

use crate::{
    error::CodecError,
    stream::{InputStream, OutputStream},
    utf::MAX_CODEPOINT,
    Codec, CodePoint, Encoding,
};

/// Smallest code point that needs the given number of continuation bytes.
const MIN_CODEPOINT: [CodePoint; 4] = [0x00, 0x80, 0x800, 0x10000];

#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8;

impl Codec for Utf8 {
    type Unit = u8;
    const ENCODING: Encoding = Encoding::Utf8;

    fn encode<O: OutputStream<u8> + ?Sized>(
        output: &mut O,
        code_point: CodePoint,
    ) -> Result<(), CodecError> {
        match code_point {
            0x00..=0x7F => output.put(code_point as u8),
            0x80..=0x7FF => {
                output.put(0b1100_0000 | (code_point >> 6) as u8);
                output.put(continuation(code_point));
            }
            0x800..=0xFFFF => {
                output.put(0b1110_0000 | (code_point >> 12) as u8);
                output.put(continuation(code_point >> 6));
                output.put(continuation(code_point));
            }
            0x10000..=MAX_CODEPOINT => {
                output.put(0b1111_0000 | (code_point >> 18) as u8);
                output.put(continuation(code_point >> 12));
                output.put(continuation(code_point >> 6));
                output.put(continuation(code_point));
            }
            _ => return Err(CodecError::OutOfRange(code_point)),
        }
        Ok(())
    }

    fn decode<I: InputStream<u8> + ?Sized>(input: &mut I) -> Result<CodePoint, CodecError> {
        let lead = input.take_unit()?;
        let (continuations, lead_bits): (usize, u8) = match lead.leading_ones() {
            0 => return Ok(lead as CodePoint),
            2 => (1, lead ^ 0b1100_0000),
            3 => (2, lead ^ 0b1110_0000),
            4 => (3, lead ^ 0b1111_0000),
            _ => return Err(CodecError::MalformedSequence),
        };
        let mut codepoint = lead_bits as CodePoint;
        for _ in 0..continuations {
            let byte = input.take_unit()?;
            if !is_continuation(byte) {
                return Err(CodecError::MalformedSequence);
            }
            codepoint = (codepoint << 6) | (byte ^ 0b10_000000) as CodePoint;
        }
        // overlong forms and anything past U+10FFFF
        if codepoint < MIN_CODEPOINT[continuations] || codepoint > MAX_CODEPOINT {
            return Err(CodecError::MalformedSequence);
        }
        Ok(codepoint)
    }
}

#[inline]
const fn continuation(bits: CodePoint) -> u8 {
    0b10_000000 | (bits & 0b11_1111) as u8
}

#[inline]
pub const fn is_continuation(byte: u8) -> bool {
    byte & 0b1100_0000 == 0b10_000000
}
