//! The path component and its builder.

mod builder;
mod normalize;

pub use builder::PathBuilder;

use crate::{error::SyntaxError, validate};
use alloc::{slice, string::String, vec::Vec};
use core::{cmp::Ordering, fmt, hash, str::FromStr};

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A [path] component: an ordered sequence of segments, possibly rooted
/// by a leading slash.
///
/// [path]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.3
///
/// A path always holds at least one segment; the empty path is the single
/// empty segment without a root. Two consecutive slashes in the serialized
/// form correspond to an empty interior segment, while the leading slash
/// of an absolute path is not represented as a segment.
///
/// `Path` values are immutable; use [`to_builder`](Self::to_builder) to
/// derive a mutated path.
///
/// # Examples
///
/// ```
/// use taut_uri::Path;
///
/// let path = Path::parse("/to//file")?;
/// assert!(path.is_absolute());
/// assert_eq!(path.segments(), ["to", "", "file"]);
/// assert_eq!(path.as_str(), "/to//file");
/// # Ok::<_, taut_uri::error::SyntaxError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Path {
    value: String,
    absolute: bool,
    segments: Vec<String>,
    /// Write-once marker making repeated normalization O(1).
    normalized: bool,
}

impl Path {
    /// Parses a path from a string.
    ///
    /// # Errors
    ///
    /// Returns a [`SyntaxError`] if the string does not match the `path`
    /// ABNF rule from RFC 3986.
    pub fn parse(s: &str) -> Result<Path, SyntaxError> {
        validate::validate_path(s)?;
        Ok(Self::new_validated(s))
    }

    /// Splits a validated path string into its segment form.
    pub(crate) fn new_validated(s: &str) -> Path {
        let (absolute, rest) = match s.strip_prefix('/') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        Path {
            value: s.into(),
            absolute,
            segments: rest.split('/').map(String::from).collect(),
            normalized: false,
        }
    }

    /// Joins segments into a path, trusting the segments to be valid and
    /// free of serialization ambiguities.
    pub(crate) fn from_parts(absolute: bool, mut segments: Vec<String>) -> Path {
        if segments.is_empty() {
            segments.push(String::new());
        }
        let mut value = String::with_capacity(
            segments.iter().map(|seg| seg.len() + 1).sum::<usize>(),
        );
        if absolute {
            value.push('/');
        }
        for (i, seg) in segments.iter().enumerate() {
            if i != 0 {
                value.push('/');
            }
            value.push_str(seg);
        }
        Path {
            value,
            absolute,
            segments,
            normalized: false,
        }
    }

    /// Returns the path as a whole string, which may be empty.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns the segments of the path.
    ///
    /// The returned slice is never empty, although any segment may be.
    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Checks whether the path begins with a slash.
    #[inline]
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.absolute
    }

    /// Checks whether the path is empty.
    ///
    /// An empty path is not absolute and holds a single empty segment.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Resolves the given path against this path as per
    /// [Section 5.2.2 of RFC 3986][resolution].
    ///
    /// An absolute `that` replaces this path entirely; otherwise `that`
    /// is merged onto this path with its last segment dropped. The result
    /// is in normalized form.
    ///
    /// [resolution]: https://datatracker.ietf.org/doc/html/rfc3986#section-5.2.2
    ///
    /// # Examples
    ///
    /// ```
    /// use taut_uri::Path;
    ///
    /// let base = Path::parse("/b/c/d")?;
    /// assert_eq!(base.resolve(&Path::parse("../g")?).as_str(), "/b/g");
    /// assert_eq!(base.resolve(&Path::parse("/g")?).as_str(), "/g");
    /// # Ok::<_, taut_uri::error::SyntaxError>(())
    /// ```
    #[must_use]
    pub fn resolve(&self, that: &Path) -> Path {
        if that.absolute {
            return that.normalize();
        }
        let mut merged: Vec<String> = Vec::with_capacity(
            self.segments.len() + that.segments.len(),
        );
        merged.extend_from_slice(&self.segments[..self.segments.len() - 1]);
        merged.extend_from_slice(&that.segments);
        Self::normalize_parts(self.absolute, &merged)
    }

    /// Normalizes the path as per
    /// [Section 6.2.2 of RFC 3986][normalization]: dot segments are
    /// removed and percent-encoding triplets are uppercased, with those
    /// standing for unreserved characters decoded.
    ///
    /// This method is idempotent, and O(1) on an already normalized path.
    ///
    /// [normalization]: https://datatracker.ietf.org/doc/html/rfc3986#section-6.2.2
    #[must_use]
    pub fn normalize(&self) -> Path {
        if self.normalized {
            return self.clone();
        }
        Self::normalize_parts(self.absolute, &self.segments)
    }

    fn normalize_parts(absolute: bool, segments: &[String]) -> Path {
        // Decoding comes first: a triplet may stand for a dot, and the
        // segment it uncovers must be subject to removal for the result
        // to be a fixed point.
        let mut decoded = segments.to_vec();
        normalize::normalize_segments(&mut decoded);
        let mut segments = normalize::remove_dot_segments(absolute, &decoded);
        normalize::apply_normal_guards(absolute, &mut segments);
        let mut path = Self::from_parts(absolute, segments);
        path.normalized = true;
        path
    }

    /// Marks the path as a normalization fixed point.
    pub(crate) fn into_normalized(mut self) -> Path {
        self.normalized = true;
        self
    }

    /// Checks whether the path is a fixed point of [`normalize`](Self::normalize).
    #[must_use]
    pub fn is_normalized(&self) -> bool {
        self.normalized || self.normalize().value == self.value
    }

    /// Returns a builder seeded with this path.
    #[must_use]
    pub fn to_builder(&self) -> PathBuilder {
        PathBuilder::from_path(self)
    }
}

impl Default for Path {
    /// Creates an empty path.
    fn default() -> Self {
        Self::from_parts(false, Vec::new())
    }
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Path {}

impl hash::Hash for Path {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl PartialOrd for Path {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Path {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl FromStr for Path {
    type Err = SyntaxError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Path::parse(s)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    /// Iterates over the segments of the path.
    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl PartialEq<str> for Path {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl PartialEq<&str> for Path {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}

impl PartialEq<Path> for str {
    fn eq(&self, other: &Path) -> bool {
        self == other.value
    }
}

#[cfg(feature = "serde")]
impl Serialize for Path {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Path {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Path::parse(&s).map_err(de::Error::custom)
    }
}
