use super::{normalize::apply_join_guards, Path};
use crate::{
    encoding::Encoder,
    error::{IndexError, SyntaxError},
    validate,
};
use alloc::{string::String, vec::Vec};

/// A builder for the [path] component.
///
/// [path]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.3
///
/// Segments are manipulated in three forms: *string* segments are taken
/// literally and checked against the segment grammar when
/// [`build`](Self::build) runs; *byte* segments are percent-encoded with
/// [`Encoder::SEGMENT`]; *UTF-8* segments are encoded to bytes first and
/// then percent-encoded. Batch arguments accept optional items, and
/// absent items are skipped.
///
/// A new builder is absolute and holds no segments. `build` on an empty
/// builder yields the empty path.
///
/// # Examples
///
/// ```
/// use taut_uri::PathBuilder;
///
/// let mut b = PathBuilder::new();
/// b.push_segments(["to", "file"]).absolute(true);
/// assert_eq!(b.build()?.as_str(), "/to/file");
///
/// let mut b = PathBuilder::new();
/// b.push_utf8_segments(["über"]).absolute(false);
/// assert_eq!(b.build()?.as_str(), "%C3%BCber");
/// # Ok::<_, taut_uri::error::SyntaxError>(())
/// ```
#[derive(Clone, Debug)]
pub struct PathBuilder {
    absolute: bool,
    segments: Vec<String>,
}

impl Default for PathBuilder {
    /// Equivalent to [`new`](Self::new).
    fn default() -> Self {
        Self::new()
    }
}

impl PathBuilder {
    /// Creates an absolute builder with no segments.
    #[must_use]
    pub fn new() -> PathBuilder {
        PathBuilder {
            absolute: true,
            segments: Vec::new(),
        }
    }

    pub(crate) fn from_path(path: &Path) -> PathBuilder {
        PathBuilder {
            absolute: path.is_absolute(),
            segments: path.segments().to_vec(),
        }
    }

    /// Returns the number of segments in the builder.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Checks whether the builder holds no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the segments currently in the builder.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Sets whether the built path is absolute.
    pub fn absolute(&mut self, absolute: bool) -> &mut Self {
        self.absolute = absolute;
        self
    }

    /// Appends the given segments, skipping absent items.
    ///
    /// The segments are validated when [`build`](Self::build) runs.
    pub fn push_segments<'a, I, S>(&mut self, segments: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Option<&'a str>>,
    {
        self.segments
            .extend(segments.into_iter().filter_map(Into::into).map(String::from));
        self
    }

    /// Inserts the given segments at increasing positions starting at
    /// `index`, skipping absent items.
    ///
    /// The segments are validated when [`build`](Self::build) runs.
    ///
    /// # Errors
    ///
    /// Returns an [`IndexError`] unless `index <= len()`.
    pub fn insert_segments<'a, I, S>(
        &mut self,
        index: usize,
        segments: I,
    ) -> Result<&mut Self, IndexError>
    where
        I: IntoIterator<Item = S>,
        S: Into<Option<&'a str>>,
    {
        self.insert_encoded(index, segments.into_iter().filter_map(Into::into).map(String::from))
    }

    /// Overwrites segments at increasing positions starting at `index`,
    /// skipping absent items; positions past the end are appended.
    ///
    /// The segments are validated when [`build`](Self::build) runs.
    ///
    /// # Errors
    ///
    /// Returns an [`IndexError`] unless `index < len()`.
    pub fn set_segments<'a, I, S>(
        &mut self,
        index: usize,
        segments: I,
    ) -> Result<&mut Self, IndexError>
    where
        I: IntoIterator<Item = S>,
        S: Into<Option<&'a str>>,
    {
        self.set_encoded(index, segments.into_iter().filter_map(Into::into).map(String::from))
    }

    /// Appends the given byte segments percent-encoded, skipping
    /// absent items.
    pub fn push_byte_segments<'a, I, S>(&mut self, segments: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Option<&'a [u8]>>,
    {
        self.segments.extend(
            segments
                .into_iter()
                .filter_map(Into::into)
                .map(|bytes| Encoder::SEGMENT.encode(bytes)),
        );
        self
    }

    /// Inserts the given byte segments percent-encoded at increasing
    /// positions starting at `index`, skipping absent items.
    ///
    /// # Errors
    ///
    /// Returns an [`IndexError`] unless `index <= len()`.
    pub fn insert_byte_segments<'a, I, S>(
        &mut self,
        index: usize,
        segments: I,
    ) -> Result<&mut Self, IndexError>
    where
        I: IntoIterator<Item = S>,
        S: Into<Option<&'a [u8]>>,
    {
        self.insert_encoded(
            index,
            segments
                .into_iter()
                .filter_map(Into::into)
                .map(|bytes| Encoder::SEGMENT.encode(bytes)),
        )
    }

    /// Overwrites byte segments percent-encoded at increasing positions
    /// starting at `index`, skipping absent items; positions past the end
    /// are appended.
    ///
    /// # Errors
    ///
    /// Returns an [`IndexError`] unless `index < len()`.
    pub fn set_byte_segments<'a, I, S>(
        &mut self,
        index: usize,
        segments: I,
    ) -> Result<&mut Self, IndexError>
    where
        I: IntoIterator<Item = S>,
        S: Into<Option<&'a [u8]>>,
    {
        self.set_encoded(
            index,
            segments
                .into_iter()
                .filter_map(Into::into)
                .map(|bytes| Encoder::SEGMENT.encode(bytes)),
        )
    }

    /// Appends the given segments with their characters UTF-8 encoded and
    /// percent-encoded where the segment grammar requires, skipping
    /// absent items.
    pub fn push_utf8_segments<'a, I, S>(&mut self, segments: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Option<&'a str>>,
    {
        self.segments.extend(
            segments
                .into_iter()
                .filter_map(Into::into)
                .map(|seg| Encoder::SEGMENT.encode_utf8(seg, false)),
        );
        self
    }

    /// Inserts the given segments UTF-8 and percent-encoded at increasing
    /// positions starting at `index`, skipping absent items.
    ///
    /// # Errors
    ///
    /// Returns an [`IndexError`] unless `index <= len()`.
    pub fn insert_utf8_segments<'a, I, S>(
        &mut self,
        index: usize,
        segments: I,
    ) -> Result<&mut Self, IndexError>
    where
        I: IntoIterator<Item = S>,
        S: Into<Option<&'a str>>,
    {
        self.insert_encoded(
            index,
            segments
                .into_iter()
                .filter_map(Into::into)
                .map(|seg| Encoder::SEGMENT.encode_utf8(seg, false)),
        )
    }

    /// Overwrites segments UTF-8 and percent-encoded at increasing
    /// positions starting at `index`, skipping absent items; positions
    /// past the end are appended.
    ///
    /// # Errors
    ///
    /// Returns an [`IndexError`] unless `index < len()`.
    pub fn set_utf8_segments<'a, I, S>(
        &mut self,
        index: usize,
        segments: I,
    ) -> Result<&mut Self, IndexError>
    where
        I: IntoIterator<Item = S>,
        S: Into<Option<&'a str>>,
    {
        self.set_encoded(
            index,
            segments
                .into_iter()
                .filter_map(Into::into)
                .map(|seg| Encoder::SEGMENT.encode_utf8(seg, false)),
        )
    }

    fn insert_encoded<I>(&mut self, mut index: usize, segments: I) -> Result<&mut Self, IndexError>
    where
        I: Iterator<Item = String>,
    {
        self.check_index(index, self.len() + 1)?;
        for seg in segments {
            self.segments.insert(index, seg);
            index += 1;
        }
        Ok(self)
    }

    fn set_encoded<I>(&mut self, mut index: usize, segments: I) -> Result<&mut Self, IndexError>
    where
        I: Iterator<Item = String>,
    {
        self.check_index(index, self.len())?;
        for seg in segments {
            if index < self.segments.len() {
                self.segments[index] = seg;
            } else {
                self.segments.push(seg);
            }
            index += 1;
        }
        Ok(self)
    }

    fn check_index(&self, index: usize, bound: usize) -> Result<(), IndexError> {
        if index < bound {
            Ok(())
        } else {
            Err(IndexError {
                index,
                len: self.len(),
            })
        }
    }

    /// Concatenates the given paths onto the builder, skipping absent and
    /// empty items.
    ///
    /// Each path is split on `'/'`; a leading slash is not represented,
    /// so `"/a/b"` and `"a/b"` contribute the same segments. When the
    /// builder's last segment is empty it is dropped before appending, so
    /// concatenating `"a/"` with `"b"` yields `a/b` rather than `a//b`.
    pub fn push_paths<'a, I, S>(&mut self, paths: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Option<&'a str>>,
    {
        for path in paths.into_iter().filter_map(Into::into) {
            self.push_path(path);
        }
        self
    }

    /// Concatenates the given byte paths percent-encoded (keeping `'/'`
    /// literal), skipping absent and empty items.
    pub fn push_byte_paths<'a, I, S>(&mut self, paths: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Option<&'a [u8]>>,
    {
        for path in paths.into_iter().filter_map(Into::into) {
            self.push_path(&Encoder::PATH.encode(path));
        }
        self
    }

    /// Concatenates the given paths UTF-8 and percent-encoded (keeping
    /// `'/'` literal), skipping absent and empty items.
    pub fn push_utf8_paths<'a, I, S>(&mut self, paths: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Option<&'a str>>,
    {
        for path in paths.into_iter().filter_map(Into::into) {
            self.push_path(&Encoder::PATH.encode_utf8(path, false));
        }
        self
    }

    fn push_path(&mut self, path: &str) {
        if path.is_empty() {
            return;
        }
        if self.segments.last().map_or(false, |seg| seg.is_empty()) {
            self.segments.pop();
        }
        let rest = path.strip_prefix('/').unwrap_or(path);
        self.segments.extend(rest.split('/').map(String::from));
    }

    /// Removes the first `size` segments; the whole list when `size`
    /// exceeds it.
    pub fn strip(&mut self, size: usize) -> &mut Self {
        let size = size.min(self.len());
        self.segments.drain(..size);
        self
    }

    /// Removes the last `size` segments; the whole list when `size`
    /// exceeds it.
    pub fn tear(&mut self, size: usize) -> &mut Self {
        let size = size.min(self.len());
        self.segments.truncate(self.len() - size);
        self
    }

    /// Keeps the first `size` segments, discarding the rest.
    pub fn truncate(&mut self, size: usize) -> &mut Self {
        self.segments.truncate(size);
        self
    }

    /// Removes all trailing empty segments.
    pub fn trim(&mut self) -> &mut Self {
        while self.segments.last().map_or(false, |seg| seg.is_empty()) {
            self.segments.pop();
        }
        self
    }

    /// Removes all empty segments, except that one trailing empty
    /// segment is kept.
    pub fn prune(&mut self) -> &mut Self {
        let trailing = self.segments.last().map_or(false, |seg| seg.is_empty());
        self.segments.retain(|seg| !seg.is_empty());
        if trailing {
            self.segments.push(String::new());
        }
        self
    }

    /// Removes the segment at `index`.
    ///
    /// # Errors
    ///
    /// Returns an [`IndexError`] unless `index < len()`.
    pub fn remove(&mut self, index: usize) -> Result<&mut Self, IndexError> {
        self.check_index(index, self.len())?;
        self.segments.remove(index);
        Ok(self)
    }

    /// Removes all segments.
    pub fn clear(&mut self) -> &mut Self {
        self.segments.clear();
        self
    }

    /// Builds the path component.
    ///
    /// An empty builder yields the single empty segment. When the result
    /// is not absolute and would otherwise serialize like an absolute
    /// path or carry a colon in its first segment, a `"."` segment is
    /// prepended.
    ///
    /// Building borrows the builder: a failed build leaves it unchanged
    /// and usable.
    ///
    /// # Errors
    ///
    /// Returns a [`SyntaxError`] if any segment violates the segment
    /// grammar.
    pub fn build(&self) -> Result<Path, SyntaxError> {
        for seg in &self.segments {
            validate::validate_segment(seg)?;
        }
        let mut segments = self.segments.clone();
        if segments.is_empty() {
            segments.push(String::new());
        }
        apply_join_guards(self.absolute, &mut segments);
        Ok(Path::from_parts(self.absolute, segments))
    }
}
