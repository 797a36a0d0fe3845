//! Text encodings for the percent-encoding codec.
//!
//! A [`TextEncoding`] converts between characters and bytes before the
//! percent-encoding step and after the decoding step. Malformed input and
//! unmappable characters are always substituted with the encoding's
//! replacement, never reported as errors.

use alloc::{borrow::Cow, string::String, vec::Vec};

/// A character encoding used when percent-encoding or -decoding text.
///
/// Implementations must substitute unmappable characters on
/// [`encode_str`](Self::encode_str) and malformed sequences on
/// [`decode_bytes`](Self::decode_bytes) with the encoding's replacement
/// instead of failing.
pub trait TextEncoding {
    /// The canonical name of the encoding.
    fn name(&self) -> &'static str;

    /// Encodes a string into bytes, appending to `out`.
    fn encode_str(&self, s: &str, out: &mut Vec<u8>);

    /// Decodes bytes into a string.
    fn decode_bytes<'a>(&self, bytes: &'a [u8]) -> Cow<'a, str>;
}

/// The UTF-8 encoding.
#[derive(Clone, Copy, Debug, Default)]
pub struct Utf8;

impl TextEncoding for Utf8 {
    fn name(&self) -> &'static str {
        "UTF-8"
    }

    fn encode_str(&self, s: &str, out: &mut Vec<u8>) {
        out.extend_from_slice(s.as_bytes());
    }

    fn decode_bytes<'a>(&self, bytes: &'a [u8]) -> Cow<'a, str> {
        String::from_utf8_lossy(bytes)
    }
}

/// The US-ASCII encoding.
///
/// Characters outside the ASCII range encode to `b'?'`; bytes outside the
/// ASCII range decode to U+FFFD.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ascii;

impl TextEncoding for Ascii {
    fn name(&self) -> &'static str {
        "US-ASCII"
    }

    fn encode_str(&self, s: &str, out: &mut Vec<u8>) {
        out.extend(s.chars().map(|c| if c.is_ascii() { c as u8 } else { b'?' }));
    }

    fn decode_bytes<'a>(&self, bytes: &'a [u8]) -> Cow<'a, str> {
        if bytes.is_ascii() {
            // ASCII bytes are valid UTF-8.
            Cow::Borrowed(core::str::from_utf8(bytes).unwrap())
        } else {
            bytes
                .iter()
                .map(|&x| if x.is_ascii() { x as char } else { '\u{fffd}' })
                .collect::<String>()
                .into()
        }
    }
}

/// The ISO-8859-1 (Latin-1) encoding.
///
/// Characters above U+00FF encode to `b'?'`; every byte decodes to the
/// character with the same code point.
#[derive(Clone, Copy, Debug, Default)]
pub struct Latin1;

impl TextEncoding for Latin1 {
    fn name(&self) -> &'static str {
        "ISO-8859-1"
    }

    fn encode_str(&self, s: &str, out: &mut Vec<u8>) {
        out.extend(s.chars().map(|c| if (c as u32) < 256 { c as u8 } else { b'?' }));
    }

    fn decode_bytes<'a>(&self, bytes: &'a [u8]) -> Cow<'a, str> {
        if bytes.is_ascii() {
            Cow::Borrowed(core::str::from_utf8(bytes).unwrap())
        } else {
            bytes.iter().map(|&x| x as char).collect::<String>().into()
        }
    }
}
