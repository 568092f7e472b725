//! The stream contract the codecs are written against.
//!
//! A codec only ever pulls or pushes one code unit at a time. Buffering,
//! allocation and I/O belong to whoever implements these traits.

use crate::error::CodecError;

/// Sequential source of code units.
pub trait InputStream<U> {
    /// Pulls the next unit, or `None` once the stream is exhausted.
    fn take(&mut self) -> Option<U>;

    #[inline]
    fn take_unit(&mut self) -> Result<U, CodecError> {
        self.take().ok_or(CodecError::Truncated)
    }
}

/// Sequential sink of code units.
pub trait OutputStream<U> {
    fn put(&mut self, unit: U);
}

impl<U, I: Iterator<Item = U> + ?Sized> InputStream<U> for I {
    #[inline]
    fn take(&mut self) -> Option<U> {
        self.next()
    }
}

impl<U> OutputStream<U> for Vec<U> {
    #[inline]
    fn put(&mut self, unit: U) {
        self.push(unit);
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Endianness {
    BigEndian,
    LittleEndian,
}

impl Endianness {
    #[inline]
    pub const fn bytes_to_u16(self, bytes: [u8; 2]) -> u16 {
        match self {
            Endianness::BigEndian => u16::from_be_bytes(bytes),
            Endianness::LittleEndian => u16::from_le_bytes(bytes),
        }
    }
    #[inline]
    pub const fn u16_to_bytes(self, unit: u16) -> [u8; 2] {
        match self {
            Endianness::BigEndian => unit.to_be_bytes(),
            Endianness::LittleEndian => unit.to_le_bytes(),
        }
    }
}

/// Reads 16-bit units out of a byte stream.
///
/// A dangling odd byte at the end is consumed and reported as end of stream.
pub struct Utf16Units<'a, I: ?Sized> {
    input: &'a mut I,
    endianness: Endianness,
}

impl<'a, I: InputStream<u8> + ?Sized> Utf16Units<'a, I> {
    pub fn new(input: &'a mut I, endianness: Endianness) -> Self {
        Self { input, endianness }
    }
}

impl<I: InputStream<u8> + ?Sized> InputStream<u16> for Utf16Units<'_, I> {
    #[inline]
    fn take(&mut self) -> Option<u16> {
        let first = InputStream::<u8>::take(&mut *self.input)?;
        let second = InputStream::<u8>::take(&mut *self.input)?;
        Some(self.endianness.bytes_to_u16([first, second]))
    }
}

/// Writes 16-bit units into a byte stream.
pub struct Utf16Bytes<'a, O: ?Sized> {
    output: &'a mut O,
    endianness: Endianness,
}

impl<'a, O: OutputStream<u8> + ?Sized> Utf16Bytes<'a, O> {
    pub fn new(output: &'a mut O, endianness: Endianness) -> Self {
        Self { output, endianness }
    }
}

impl<O: OutputStream<u8> + ?Sized> OutputStream<u16> for Utf16Bytes<'_, O> {
    #[inline]
    fn put(&mut self, unit: u16) {
        let [first, second] = self.endianness.u16_to_bytes(unit);
        self.output.put(first);
        self.output.put(second);
    }
}
