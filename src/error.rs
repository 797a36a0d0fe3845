//! Error types.

use alloc::string::String;
use core::fmt;

/// The URI-reference component an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Component {
    /// The scheme component.
    Scheme,
    /// The userinfo subcomponent of authority.
    Userinfo,
    /// The host subcomponent of authority.
    Host,
    /// The port subcomponent of authority.
    Port,
    /// The authority component as a whole.
    Authority,
    /// The path component.
    Path,
    /// A single path segment.
    Segment,
    /// The query component.
    Query,
    /// The fragment component.
    Fragment,
    /// Standalone codec input that belongs to no particular component.
    Data,
}

impl Component {
    fn as_str(self) -> &'static str {
        match self {
            Component::Scheme => "scheme",
            Component::Userinfo => "userinfo",
            Component::Host => "host",
            Component::Port => "port",
            Component::Authority => "authority",
            Component::Path => "path",
            Component::Segment => "segment",
            Component::Query => "query",
            Component::Fragment => "fragment",
            Component::Data => "data",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detailed cause of a [`SyntaxError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SyntaxErrorKind {
    /// Unexpected character that is not allowed by the URI syntax.
    ///
    /// The error index points to the first byte of the character.
    UnexpectedChar,
    /// Invalid percent-encoded octet that is either non-hexadecimal
    /// or incomplete.
    ///
    /// The error index points to the percent character of the octet.
    InvalidOctet,
    /// Empty scheme component.
    EmptyScheme,
    /// Scheme component required but absent.
    MissingScheme,
    /// Invalid IPv6 address between square brackets.
    ///
    /// The error index points to the opening bracket.
    InvalidIpv6Addr,
    /// Cross-component rule violated.
    Correlation(Correlation),
}

/// A cross-component rule of RFC 3986 sections 3 and 4.2.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Correlation {
    /// Userinfo or port present without a host.
    AuthorityWithoutHost,
    /// No authority, but the path begins with "//".
    DoubleSlashPath,
    /// Authority present, but the path is neither empty nor absolute.
    NonAbemptyPath,
    /// No scheme and no authority, but the first path segment
    /// contains a colon.
    ColonInFirstSegment,
}

/// An error occurred when validating a URI reference or one of
/// its components.
///
/// The error identifies the offending [`Component`] and the byte offset
/// within that component's literal text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntaxError {
    pub(crate) component: Component,
    pub(crate) index: usize,
    pub(crate) input: String,
    pub(crate) kind: SyntaxErrorKind,
}

impl SyntaxError {
    /// Returns the component in which the error occurred.
    #[must_use]
    pub fn component(&self) -> Component {
        self.component
    }

    /// Returns the byte index within the component's literal text at
    /// which the error occurred.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the literal text that was being validated.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Checks whether the error is a violation of a cross-component rule
    /// rather than of a single component's grammar.
    #[must_use]
    pub fn is_correlation(&self) -> bool {
        matches!(self.kind, SyntaxErrorKind::Correlation(_))
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            SyntaxErrorKind::UnexpectedChar => write!(
                f,
                "invalid character in {} at index {}: {:?}",
                self.component, self.index, self.input
            ),
            SyntaxErrorKind::InvalidOctet => write!(
                f,
                "invalid percent-encoded octet in {} at index {}: {:?}",
                self.component, self.index, self.input
            ),
            SyntaxErrorKind::EmptyScheme => write!(f, "empty scheme"),
            SyntaxErrorKind::MissingScheme => write!(f, "no scheme in URI"),
            SyntaxErrorKind::InvalidIpv6Addr => {
                write!(f, "invalid IPv6 address: {:?}", self.input)
            }
            SyntaxErrorKind::Correlation(c) => match c {
                Correlation::AuthorityWithoutHost => {
                    write!(f, "userinfo or port present without a host")
                }
                Correlation::DoubleSlashPath => write!(
                    f,
                    "path begins with \"//\" although authority is absent: {:?}",
                    self.input
                ),
                Correlation::NonAbemptyPath => write!(
                    f,
                    "path is neither empty nor absolute although authority is present: {:?}",
                    self.input
                ),
                Correlation::ColonInFirstSegment => write!(
                    f,
                    "first path segment of a relative reference contains a colon: {:?}",
                    self.input
                ),
            },
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SyntaxError {}

/// An error occurred when a builder was given an out-of-range index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexError {
    pub(crate) index: usize,
    pub(crate) len: usize,
}

impl IndexError {
    /// Returns the out-of-range index.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the number of segments the builder held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "segment index out of range: the index is {} but the length is {}",
            self.index, self.len
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for IndexError {}

/// Detailed cause of a [`MaskError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MaskErrorKind {
    /// A non-ASCII character in a mask character set.
    NonAscii {
        /// Index of the first byte of the character.
        index: usize,
    },
    /// An encoder mask matching a character outside the URIC set.
    OutsideUric,
}

/// An error occurred when constructing an [`AsciiMask`] or an [`Encoder`]
/// from an invalid character set.
///
/// [`AsciiMask`]: crate::encoding::AsciiMask
/// [`Encoder`]: crate::encoding::Encoder
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaskError(pub(crate) MaskErrorKind);

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            MaskErrorKind::NonAscii { index } => {
                write!(f, "non-ASCII character in mask at index {index}")
            }
            MaskErrorKind::OutsideUric => {
                write!(f, "mask matches a character not allowed in a URI")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MaskError {}

/// An error occurred when converting a port component that does not fit
/// in 32 bits.
///
/// The port digits remain accessible through [`port`](Self::port).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortOverflowError {
    pub(crate) port: String,
}

impl PortOverflowError {
    /// Returns the port component as a string slice.
    #[must_use]
    pub fn port(&self) -> &str {
        &self.port
    }
}

impl fmt::Display for PortOverflowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "port overflows 32 bits: {}", self.port)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PortOverflowError {}
