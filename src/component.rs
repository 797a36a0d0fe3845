//! URI components.

use crate::encoding::mask;
use core::{fmt, hash, iter};
use ref_cast::{ref_cast_custom, RefCastCustom};

/// A [scheme] component.
///
/// [scheme]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.1
///
/// # Comparison
///
/// `Scheme`s are compared case-insensitively. You should do a
/// case-insensitive comparison if the scheme specification allows both
/// letter cases in the scheme name.
///
/// # Examples
///
/// ```
/// use taut_uri::{component::Scheme, Uri};
///
/// const SCHEME_HTTP: &Scheme = Scheme::new_or_panic("http");
///
/// let uri = Uri::parse("HTTP://EXAMPLE.COM/")?;
///
/// // Case-insensitive comparison.
/// assert_eq!(uri.scheme(), SCHEME_HTTP);
/// // Case-sensitive comparison.
/// assert_eq!(uri.scheme().as_str(), "HTTP");
/// # Ok::<_, taut_uri::error::SyntaxError>(())
/// ```
#[derive(RefCastCustom)]
#[repr(transparent)]
pub struct Scheme {
    inner: str,
}

const ASCII_CASE_MASK: u8 = 0b0010_0000;

impl Scheme {
    #[ref_cast_custom]
    pub(crate) const fn new_validated(scheme: &str) -> &Scheme;

    /// Converts a string slice to `&Scheme`.
    ///
    /// # Panics
    ///
    /// Panics if the string is not a valid scheme name according to
    /// [Section 3.1 of RFC 3986][scheme]. For a non-panicking variant,
    /// use [`new`](Self::new).
    ///
    /// [scheme]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.1
    #[inline]
    #[must_use]
    pub const fn new_or_panic(s: &str) -> &Scheme {
        match Self::new(s) {
            Some(scheme) => scheme,
            None => panic!("invalid scheme"),
        }
    }

    /// Converts a string slice to `&Scheme`, returning `None` if the
    /// conversion fails.
    #[must_use]
    pub const fn new(s: &str) -> Option<&Scheme> {
        let bytes = s.as_bytes();
        if bytes.is_empty() || !bytes[0].is_ascii_alphabetic() {
            return None;
        }
        let mut i = 1;
        while i < bytes.len() {
            if !mask::SCHEME.matches_byte(bytes[i]) {
                return None;
            }
            i += 1;
        }
        Some(Scheme::new_validated(s))
    }

    /// Returns the scheme component as a string slice, preserving its
    /// original letter case.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl PartialEq for Scheme {
    fn eq(&self, other: &Self) -> bool {
        let (a, b) = (self.inner.as_bytes(), other.inner.as_bytes());
        // The only characters allowed in a scheme are alphabets, digits,
        // '+', '-' and '.'. Their ASCII codes allow us to simply set the
        // sixth bits and compare.
        a.len() == b.len()
            && iter::zip(a, b).all(|(x, y)| x | ASCII_CASE_MASK == y | ASCII_CASE_MASK)
    }
}

impl Eq for Scheme {}

impl hash::Hash for Scheme {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        for x in self.inner.bytes() {
            state.write_u8(x | ASCII_CASE_MASK);
        }
    }
}

impl fmt::Debug for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}
