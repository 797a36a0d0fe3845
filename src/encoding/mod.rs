//! Percent-encoding utilities.
//!
//! An [`Encoder`] turns bytes or text into percent-encoded output, keeping
//! the characters matched by its [`AsciiMask`] literal and writing every
//! other byte as an uppercase `%HH` triplet. The [`decode`] family performs
//! the symmetric conversion. Presets for every URI component are provided
//! as constants on `Encoder`.

pub mod mask;
pub mod text;

mod hex;

pub use mask::AsciiMask;
pub use text::{Ascii, Latin1, TextEncoding, Utf8};

pub(crate) use hex::is_hexdig;

use crate::error::{Component, MaskError, MaskErrorKind, SyntaxError, SyntaxErrorKind};
use alloc::{
    borrow::Cow,
    string::{String, ToString},
    vec::Vec,
};
use core::fmt::{self, Write};

/// A percent-encoder for a fixed set of literal characters.
///
/// The encoder keeps every ASCII character matched by its mask as-is and
/// writes any other byte as a `%HH` triplet with uppercase hexadecimal
/// digits. The mask of every encoder is a subset of [`mask::URIC`], so
/// encoded output is always valid URI text.
///
/// Encoders are plain values: stateless, `Copy`, and freely shareable
/// across threads.
///
/// # Examples
///
/// ```
/// use taut_uri::encoding::Encoder;
///
/// assert_eq!(Encoder::SEGMENT.encode_utf8("a b", false), "a%20b");
/// assert_eq!(Encoder::DATA.encode(&[0xff, b'-']), "%FF-");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Encoder {
    mask: AsciiMask,
}

impl Encoder {
    /// An encoder that keeps only [unreserved] characters literal.
    ///
    /// [unreserved]: https://datatracker.ietf.org/doc/html/rfc3986#section-2.3
    pub const DATA: Encoder = Encoder { mask: mask::UNRESERVED };

    /// An encoder for the userinfo subcomponent.
    pub const USERINFO: Encoder = Encoder { mask: mask::USERINFO };

    /// An encoder for the host subcomponent (registered names).
    pub const HOST: Encoder = Encoder { mask: mask::REG_NAME };

    /// An encoder for the path component, keeping `'/'` literal.
    pub const PATH: Encoder = Encoder { mask: mask::PATH };

    /// An encoder for a single path segment.
    pub const SEGMENT: Encoder = Encoder { mask: mask::SEGMENT };

    /// An encoder for the query component.
    pub const QUERY: Encoder = Encoder { mask: mask::QUERY };

    /// An encoder for the fragment component.
    pub const FRAGMENT: Encoder = Encoder { mask: mask::FRAGMENT };

    /// An encoder that keeps every unreserved and reserved character literal.
    pub const URI: Encoder = Encoder { mask: mask::URIC };

    /// Creates an encoder that keeps the unreserved characters plus the
    /// given extra characters literal.
    ///
    /// # Errors
    ///
    /// Returns a [`MaskError`] if the set contains a non-ASCII character
    /// or a character that may not appear in a URI.
    pub fn extra(chars: &str) -> Result<Encoder, MaskError> {
        Self::with_mask(mask::UNRESERVED.or(AsciiMask::checked_allow(chars)?))
    }

    /// Creates an encoder that keeps exactly the characters of the given
    /// mask literal.
    ///
    /// # Errors
    ///
    /// Returns a [`MaskError`] if the mask matches a character that may
    /// not appear in a URI.
    pub fn with_mask(mask: AsciiMask) -> Result<Encoder, MaskError> {
        if mask::URIC.contains(mask) {
            Ok(Encoder { mask })
        } else {
            Err(MaskError(MaskErrorKind::OutsideUric))
        }
    }

    /// Returns the mask of characters this encoder keeps literal.
    #[must_use]
    pub const fn mask(&self) -> AsciiMask {
        self.mask
    }

    /// Percent-encodes bytes into the given sink.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by the sink.
    pub fn encode_to<W: Write>(&self, bytes: &[u8], dst: &mut W) -> fmt::Result {
        for &x in bytes {
            if self.mask.matches_byte(x) {
                dst.write_char(x as char)?;
            } else {
                hex::write_pct(x, dst)?;
            }
        }
        Ok(())
    }

    /// Percent-encodes bytes into a new string.
    #[must_use]
    pub fn encode(&self, bytes: &[u8]) -> String {
        let mut buf = String::with_capacity(bytes.len());
        self.encode_to(bytes, &mut buf).unwrap();
        buf
    }

    /// Percent-encodes a string in the given text encoding into the sink.
    ///
    /// When `mixed` is true, percent-encoding triplets already present in
    /// the input are passed through with their hexadecimal digits
    /// uppercased instead of being encoded a second time.
    ///
    /// Characters the encoding cannot map are substituted with the
    /// encoding's replacement before percent-encoding.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by the sink.
    pub fn encode_text_to<T, W>(
        &self,
        s: &str,
        encoding: &T,
        mixed: bool,
        dst: &mut W,
    ) -> fmt::Result
    where
        T: TextEncoding + ?Sized,
        W: Write,
    {
        let mut scratch = Vec::new();
        if !mixed {
            encoding.encode_str(s, &mut scratch);
            return self.encode_to(&scratch, dst);
        }

        // Runs between triplets go through the text encoder; the triplets
        // themselves are copied with uppercased hex digits.
        let bytes = s.as_bytes();
        let mut run_start = 0;
        let mut i = 0;
        while i < bytes.len() {
            if is_triplet(bytes, i) {
                if run_start < i {
                    scratch.clear();
                    encoding.encode_str(&s[run_start..i], &mut scratch);
                    self.encode_to(&scratch, dst)?;
                }
                dst.write_char('%')?;
                dst.write_char(bytes[i + 1].to_ascii_uppercase() as char)?;
                dst.write_char(bytes[i + 2].to_ascii_uppercase() as char)?;
                i += 3;
                run_start = i;
            } else {
                i += 1;
            }
        }
        if run_start < bytes.len() {
            scratch.clear();
            encoding.encode_str(&s[run_start..], &mut scratch);
            self.encode_to(&scratch, dst)?;
        }
        Ok(())
    }

    /// Percent-encodes a string in the given text encoding into a new string.
    #[must_use]
    pub fn encode_text<T>(&self, s: &str, encoding: &T, mixed: bool) -> String
    where
        T: TextEncoding + ?Sized,
    {
        let mut buf = String::with_capacity(s.len());
        self.encode_text_to(s, encoding, mixed, &mut buf).unwrap();
        buf
    }

    /// Percent-encodes a UTF-8 string into the given sink.
    ///
    /// Equivalent to [`encode_text_to`](Self::encode_text_to) with the
    /// [`Utf8`] encoding, with the conversion inlined.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by the sink.
    pub fn encode_utf8_to<W: Write>(&self, s: &str, mixed: bool, dst: &mut W) -> fmt::Result {
        let bytes = s.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            let x = bytes[i];
            if self.mask.matches_byte(x) {
                dst.write_char(x as char)?;
                i += 1;
            } else if mixed && is_triplet(bytes, i) {
                dst.write_char('%')?;
                dst.write_char(bytes[i + 1].to_ascii_uppercase() as char)?;
                dst.write_char(bytes[i + 2].to_ascii_uppercase() as char)?;
                i += 3;
            } else {
                // Encoding the UTF-8 bytes of a character one by one
                // yields the same triplets as encoding the character.
                hex::write_pct(x, dst)?;
                i += 1;
            }
        }
        Ok(())
    }

    /// Percent-encodes a UTF-8 string into a new string.
    #[must_use]
    pub fn encode_utf8(&self, s: &str, mixed: bool) -> String {
        let mut buf = String::with_capacity(s.len());
        self.encode_utf8_to(s, mixed, &mut buf).unwrap();
        buf
    }
}

/// Checks whether a percent-encoding triplet starts at `i`.
pub(crate) fn is_triplet(bytes: &[u8], i: usize) -> bool {
    bytes.len() - i >= 3
        && bytes[i] == b'%'
        && is_hexdig(bytes[i + 1])
        && is_hexdig(bytes[i + 2])
}

/// Percent-decodes a string into bytes.
///
/// Every character outside a triplet must be an unreserved or reserved
/// URI character.
///
/// # Errors
///
/// Returns a [`SyntaxError`] pointing at the first malformed triplet or
/// disallowed character.
pub fn decode(s: &str) -> Result<Vec<u8>, SyntaxError> {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let x = bytes[i];
        if x == b'%' {
            if !is_triplet(bytes, i) {
                return Err(decode_err(s, i, SyntaxErrorKind::InvalidOctet));
            }
            out.push(hex::decode_octet(bytes[i + 1], bytes[i + 2]));
            i += 3;
        } else if mask::URIC.matches_byte(x) {
            out.push(x);
            i += 1;
        } else {
            return Err(decode_err(s, i, SyntaxErrorKind::UnexpectedChar));
        }
    }
    Ok(out)
}

/// Percent-decodes a string into UTF-8 text.
///
/// Borrows the input when it contains no triplet. Decoded byte sequences
/// that are not valid UTF-8 are substituted with U+FFFD.
///
/// # Errors
///
/// Returns a [`SyntaxError`] pointing at the first malformed triplet or
/// disallowed character.
pub fn decode_utf8(s: &str) -> Result<Cow<'_, str>, SyntaxError> {
    if !s.as_bytes().contains(&b'%') {
        if let Some(i) = s.bytes().position(|x| !mask::URIC.matches_byte(x)) {
            return Err(decode_err(s, i, SyntaxErrorKind::UnexpectedChar));
        }
        return Ok(Cow::Borrowed(s));
    }
    let bytes = decode(s)?;
    Ok(Cow::Owned(match String::from_utf8_lossy(&bytes) {
        Cow::Borrowed(t) => t.to_string(),
        Cow::Owned(t) => t,
    }))
}

/// Percent-decodes a string into text in the given encoding.
///
/// Malformed byte sequences are substituted with the encoding's
/// replacement.
///
/// # Errors
///
/// Returns a [`SyntaxError`] pointing at the first malformed triplet or
/// disallowed character.
pub fn decode_text<T>(s: &str, encoding: &T) -> Result<String, SyntaxError>
where
    T: TextEncoding + ?Sized,
{
    let bytes = decode(s)?;
    Ok(encoding.decode_bytes(&bytes).into_owned())
}

fn decode_err(s: &str, i: usize, kind: SyntaxErrorKind) -> SyntaxError {
    SyntaxError {
        component: Component::Data,
        index: i,
        input: s.into(),
        kind,
    }
}

/// Uppercases the hexadecimal digits of every triplet, decoding those
/// triplets that stand for unreserved characters.
///
/// With `to_lowercase` set, ASCII letters outside triplets and decoded
/// octets are lowercased as well (host normalization).
///
/// The input must consist of ASCII characters and well-formed triplets.
pub(crate) fn normalize_pct(s: &str, to_lowercase: bool) -> String {
    let bytes = s.as_bytes();
    let mut buf = String::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let mut x = bytes[i];
        if x == b'%' {
            let (hi, lo) = (bytes[i + 1], bytes[i + 2]);
            let mut octet = hex::decode_octet(hi, lo);
            if mask::UNRESERVED.matches_byte(octet) {
                if to_lowercase {
                    octet = octet.to_ascii_lowercase();
                }
                buf.push(octet as char);
            } else {
                buf.push('%');
                buf.push(hi.to_ascii_uppercase() as char);
                buf.push(lo.to_ascii_uppercase() as char);
            }
            i += 3;
        } else {
            if to_lowercase {
                x = x.to_ascii_lowercase();
            }
            buf.push(x as char);
            i += 1;
        }
    }
    buf
}
