pub mod utf16;
pub mod utf8;

use crate::CodePoint;

pub const MAX_CODEPOINT: CodePoint = 0x10FFFF;

/// Whether a code point is something a terminal can reasonably show.
pub const fn is_text(codepoint: CodePoint) -> bool {
    if char::from_u32(codepoint).is_none() {
        return false;
    }
    !((codepoint < 0xFF)
        && !(0x08 <= codepoint && 0x0D >= codepoint)
        && codepoint != 0x1B
        && !(0x20 <= codepoint && 0x7E >= codepoint)
        && 0xA0 > codepoint)
}
