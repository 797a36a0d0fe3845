use crate::{
    error::SyntaxError,
    path::PathBuilder,
    raw::{self, RawUri},
    uri::{Uri, UriRef},
    validate, Path,
};
use alloc::string::String;

/// A builder for URI references.
///
/// A builder is created empty with [`new`](Self::new) or seeded from an
/// existing value with [`UriRef::to_builder`] / [`Uri::to_builder`].
/// Setters take `Option`s so a component can be unset again; an absent
/// component is distinct from an empty one. All grammar and
/// cross-component checks run in [`build`](Self::build), which borrows
/// the builder: a failed build leaves it unchanged and usable.
///
/// # Examples
///
/// ```
/// use taut_uri::UriBuilder;
///
/// let mut b = UriBuilder::new();
/// b.scheme(Some("foo"))
///     .userinfo(Some("user"))
///     .host(Some("example.com"))
///     .port(Some("8042"))
///     .path_with(|p| {
///         p.push_segments(["over", "there"]).absolute(true);
///     })
///     .query(Some("name=ferret"))
///     .fragment(Some("nose"));
///
/// let uri = b.build_uri()?;
/// assert_eq!(uri.as_str(), "foo://user@example.com:8042/over/there?name=ferret#nose");
/// # Ok::<_, taut_uri::error::SyntaxError>(())
/// ```
#[derive(Clone, Debug)]
pub struct UriBuilder {
    scheme: Option<String>,
    userinfo: Option<String>,
    host: Option<String>,
    port: Option<String>,
    path: PathBuilder,
    query: Option<String>,
    fragment: Option<String>,
}

impl UriBuilder {
    /// Creates a builder with all components absent and an empty,
    /// non-absolute path.
    #[must_use]
    pub fn new() -> UriBuilder {
        let mut path = PathBuilder::new();
        path.absolute(false);
        UriBuilder {
            scheme: None,
            userinfo: None,
            host: None,
            port: None,
            path,
            query: None,
            fragment: None,
        }
    }

    pub(crate) fn from_uri_ref(r: &UriRef) -> UriBuilder {
        UriBuilder {
            scheme: r.scheme.clone(),
            userinfo: r.userinfo.clone(),
            host: r.host.clone(),
            port: r.port.clone(),
            path: r.path.to_builder(),
            query: r.query.clone(),
            fragment: r.fragment.clone(),
        }
    }

    /// Sets or unsets the scheme component.
    pub fn scheme(&mut self, scheme: Option<&str>) -> &mut Self {
        self.scheme = scheme.map(String::from);
        self
    }

    /// Sets or unsets the authority component as a whole, splitting it
    /// into userinfo, host and port.
    ///
    /// Unsetting the authority unsets all three subcomponents.
    ///
    /// # Examples
    ///
    /// ```
    /// use taut_uri::UriBuilder;
    ///
    /// let mut b = UriBuilder::new();
    /// b.scheme(Some("http")).authority(Some("user@example.com:80"));
    ///
    /// let uri = b.build_uri()?;
    /// assert_eq!(uri.userinfo(), Some("user"));
    /// assert_eq!(uri.host(), Some("example.com"));
    /// assert_eq!(uri.port(), Some("80"));
    /// # Ok::<_, taut_uri::error::SyntaxError>(())
    /// ```
    pub fn authority(&mut self, authority: Option<&str>) -> &mut Self {
        match authority {
            Some(authority) => {
                let mut parts = RawUri::default();
                raw::split_authority(authority, &mut parts);
                self.userinfo = parts.userinfo;
                self.host = parts.host;
                self.port = parts.port;
            }
            None => {
                self.userinfo = None;
                self.host = None;
                self.port = None;
            }
        }
        self
    }

    /// Sets or unsets the userinfo subcomponent of authority.
    pub fn userinfo(&mut self, userinfo: Option<&str>) -> &mut Self {
        self.userinfo = userinfo.map(String::from);
        self
    }

    /// Sets or unsets the host subcomponent of authority.
    pub fn host(&mut self, host: Option<&str>) -> &mut Self {
        self.host = host.map(String::from);
        self
    }

    /// Sets or unsets the port subcomponent of authority.
    pub fn port(&mut self, port: Option<&str>) -> &mut Self {
        self.port = port.map(String::from);
        self
    }

    /// Replaces the path with the given one.
    pub fn path(&mut self, path: &Path) -> &mut Self {
        self.path = path.to_builder();
        self
    }

    /// Mutates the path through its [`PathBuilder`].
    ///
    /// # Examples
    ///
    /// ```
    /// use taut_uri::UriRef;
    ///
    /// let r = UriRef::parse("http://example.com/a/b?q")?;
    /// let mut b = r.to_builder();
    /// b.path_with(|p| {
    ///     p.tear(1).push_segments(["c"]);
    /// });
    /// assert_eq!(b.build()?.as_str(), "http://example.com/a/c?q");
    /// # Ok::<_, taut_uri::error::SyntaxError>(())
    /// ```
    pub fn path_with(&mut self, f: impl FnOnce(&mut PathBuilder)) -> &mut Self {
        f(&mut self.path);
        self
    }

    /// Sets or unsets the query component.
    pub fn query(&mut self, query: Option<&str>) -> &mut Self {
        self.query = query.map(String::from);
        self
    }

    /// Sets or unsets the fragment component.
    pub fn fragment(&mut self, fragment: Option<&str>) -> &mut Self {
        self.fragment = fragment.map(String::from);
        self
    }

    /// Builds the URI reference, validating every component and the
    /// correlations between them.
    ///
    /// # Errors
    ///
    /// Returns a [`SyntaxError`] if any component violates its grammar or
    /// a cross-component rule of RFC 3986.
    pub fn build(&self) -> Result<UriRef, SyntaxError> {
        let path = self.path.build()?;
        let raw = RawUri {
            scheme: self.scheme.clone(),
            userinfo: self.userinfo.clone(),
            host: self.host.clone(),
            port: self.port.clone(),
            path: path.as_str().into(),
            query: self.query.clone(),
            fragment: self.fragment.clone(),
        };
        validate::validate(&raw)?;
        Ok(UriRef::from_validated(
            raw.scheme,
            raw.userinfo,
            raw.host,
            raw.port,
            path,
            raw.query,
            raw.fragment,
        ))
    }

    /// Builds the URI, additionally requiring a scheme.
    ///
    /// # Errors
    ///
    /// Returns a [`SyntaxError`] as [`build`](Self::build) does, or when
    /// the scheme is absent.
    pub fn build_uri(&self) -> Result<Uri, SyntaxError> {
        Uri::try_from(self.build()?)
    }
}

impl Default for UriBuilder {
    /// Equivalent to [`new`](Self::new).
    fn default() -> Self {
        Self::new()
    }
}
