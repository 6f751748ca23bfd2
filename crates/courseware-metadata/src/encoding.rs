// crates/courseware-metadata/src/encoding.rs
// ============================================================================
// Module: Identifier Encoding
// Description: RFC 4648 base32 encoding for identifier sanitizing.
// Purpose: Turn arbitrary course keys into CSS/HTML-safe tokens.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Course keys contain `/`, `+`, `:` and other characters that are not safe in
//! HTML ids or CSS selectors. Base32 maps them onto `[A-Z2-7]` plus padding,
//! which callers may substitute with a separator of their choice.

// ============================================================================
// SECTION: Constants
// ============================================================================

/// RFC 4648 base32 alphabet.
const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
/// Padding character appended to complete the final 8-symbol block.
pub const BASE32_PADDING: char = '=';
/// Number of output symbols per encoded block.
const BLOCK_SYMBOLS: usize = 8;

// ============================================================================
// SECTION: Base32 Encoding
// ============================================================================

/// Encodes bytes as padded, uppercase RFC 4648 base32.
#[must_use]
pub fn base32_encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len().div_ceil(5) * BLOCK_SYMBOLS);
    let mut buffer: u32 = 0;
    let mut bits: u32 = 0;
    for byte in bytes {
        buffer = (buffer << 8) | u32::from(*byte);
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(symbol((buffer >> bits) & 0x1f));
        }
        buffer &= (1 << bits) - 1;
    }
    if bits > 0 {
        out.push(symbol((buffer << (5 - bits)) & 0x1f));
    }
    while out.len() % BLOCK_SYMBOLS != 0 {
        out.push(BASE32_PADDING);
    }
    out
}

/// Maps a 5-bit group onto the base32 alphabet.
fn symbol(index: u32) -> char {
    usize::try_from(index)
        .ok()
        .and_then(|index| ALPHABET.get(index))
        .map_or(BASE32_PADDING, |value| char::from(*value))
}

// ============================================================================
// SECTION: Tests
// ============================================================================
