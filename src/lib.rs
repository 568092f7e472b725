//! Stateless codecs between Unicode code points and their UTF-8, UTF-16 and
//! ASCII code units.
//!
//! Every codec is a zero-sized strategy type implementing [`Codec`]. Codecs
//! work against the [`stream`] traits, so the same code serves in-memory
//! buffers, byte adapters or anything else that can hand out one unit at a
//! time. When the encoding is only known at run time, [`Encoding`] dispatches
//! once to the matching strategy over a byte stream.

pub mod ascii;
pub mod cli;
pub mod encoding;
pub mod error;
pub mod stream;
pub mod utf;

pub use ascii::Ascii;
pub use encoding::Encoding;
pub use error::CodecError;
pub use stream::{InputStream, OutputStream};
pub use utf::utf16::{Utf16, Utf16Be, Utf16Le};
pub use utf::utf8::Utf8;

/// A Unicode scalar value. Validity is only judged when encoding or decoding.
pub type CodePoint = u32;

/// A stateless encoding strategy moving one code point to or from its code units.
pub trait Codec {
    /// Fixed-width storage unit of the encoding.
    type Unit: Copy;
    const ENCODING: Encoding;

    /// Appends the units for `code_point`. Nothing is written on error.
    fn encode<O: OutputStream<Self::Unit> + ?Sized>(
        output: &mut O,
        code_point: CodePoint,
    ) -> Result<(), CodecError>;

    /// Consumes the units of exactly one encoded code point.
    fn decode<I: InputStream<Self::Unit> + ?Sized>(input: &mut I) -> Result<CodePoint, CodecError>;
}
