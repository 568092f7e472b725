use crate::{
    error::CodecError,
    stream::{InputStream, OutputStream},
    Codec, CodePoint, Encoding,
};

const ASCII_MASK: u8 = 0x7F;

/// 7-bit ASCII. Both directions keep only the low seven bits and never reject a value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ascii;

impl Codec for Ascii {
    type Unit = u8;
    const ENCODING: Encoding = Encoding::Ascii;

    #[inline]
    fn encode<O: OutputStream<u8> + ?Sized>(
        output: &mut O,
        code_point: CodePoint,
    ) -> Result<(), CodecError> {
        output.put(code_point as u8 & ASCII_MASK);
        Ok(())
    }

    #[inline]
    fn decode<I: InputStream<u8> + ?Sized>(input: &mut I) -> Result<CodePoint, CodecError> {
        Ok((input.take_unit()? & ASCII_MASK) as CodePoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_high_bits() {
        let mut output = Vec::new();
        Ascii::encode(&mut output, 200).unwrap();
        Ascii::encode(&mut output, 0x41).unwrap();
        Ascii::encode(&mut output, 0x1F641).unwrap();
        assert_eq!(output, [0x48, 0x41, 0x41]);
        assert_eq!(Ascii::decode(&mut [0xC8u8].into_iter()), Ok(0x48));
    }

    #[test]
    fn idempotent() {
        let mut output = Vec::with_capacity(1);
        for code_point in (0..0x1000).chain([0xFFFF, 0x10FFFF, u32::MAX]) {
            output.clear();
            Ascii::encode(&mut output, code_point).unwrap();
            assert_eq!(Ascii::decode(&mut output.iter().copied()), Ok(code_point & 0x7F));
        }
    }

    #[test]
    fn truncated() {
        assert_eq!(Ascii::decode(&mut std::iter::empty::<u8>()), Err(CodecError::Truncated));
    }
}
