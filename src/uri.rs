use crate::{
    builder::UriBuilder,
    component::Scheme,
    error::{Component, PortOverflowError, SyntaxError, SyntaxErrorKind},
    normalize, raw, resolve, validate, Path,
};
use alloc::string::String;
use core::{cmp::Ordering, fmt, hash, str::FromStr};

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A [URI reference][uri-ref], i.e., either a URI or a relative reference.
///
/// [uri-ref]: https://datatracker.ietf.org/doc/html/rfc3986#section-4.1
///
/// A `UriRef` is an immutable, validated value owning its components; it
/// is freely shareable across threads. Use [`to_builder`](Self::to_builder)
/// to derive a mutated reference, and [`Uri`] for references guaranteed
/// to carry a scheme.
///
/// # Comparison
///
/// Two `UriRef`s are equal when their components are pairwise equal:
/// scheme and host ASCII-case-insensitively, every other component
/// byte-wise. An absent component only equals an absent one.
///
/// # Examples
///
/// ```
/// use taut_uri::UriRef;
///
/// let r = UriRef::parse("foo://user@example.com:8042/over/there?name=ferret#nose")?;
///
/// assert_eq!(r.scheme().unwrap().as_str(), "foo");
/// assert_eq!(r.authority(), Some("user@example.com:8042"));
/// assert_eq!(r.userinfo(), Some("user"));
/// assert_eq!(r.host(), Some("example.com"));
/// assert_eq!(r.port(), Some("8042"));
/// assert_eq!(r.path().as_str(), "/over/there");
/// assert_eq!(r.query(), Some("name=ferret"));
/// assert_eq!(r.fragment(), Some("nose"));
/// # Ok::<_, taut_uri::error::SyntaxError>(())
/// ```
#[derive(Clone, Debug)]
pub struct UriRef {
    pub(crate) value: String,
    pub(crate) scheme: Option<String>,
    pub(crate) userinfo: Option<String>,
    pub(crate) host: Option<String>,
    pub(crate) port: Option<String>,
    pub(crate) authority: Option<String>,
    pub(crate) path: Path,
    pub(crate) query: Option<String>,
    pub(crate) fragment: Option<String>,
    /// Write-once marker making repeated normalization O(1).
    pub(crate) normalized: bool,
}

impl UriRef {
    /// Parses a URI reference from a string.
    ///
    /// # Errors
    ///
    /// Returns a [`SyntaxError`] if the string does not match the
    /// `URI-reference` ABNF rule from RFC 3986, identifying the offending
    /// component and the byte offset within it.
    pub fn parse(s: &str) -> Result<UriRef, SyntaxError> {
        let raw = raw::split(s);
        validate::validate(&raw)?;
        let path = Path::new_validated(&raw.path);
        Ok(UriRef {
            value: s.into(),
            authority: compose_authority(
                raw.userinfo.as_deref(),
                raw.host.as_deref(),
                raw.port.as_deref(),
            ),
            scheme: raw.scheme,
            userinfo: raw.userinfo,
            host: raw.host,
            port: raw.port,
            path,
            query: raw.query,
            fragment: raw.fragment,
            normalized: false,
        })
    }

    /// Composes a reference from components that are already known to be
    /// valid, individually and in correlation.
    pub(crate) fn from_validated(
        scheme: Option<String>,
        userinfo: Option<String>,
        host: Option<String>,
        port: Option<String>,
        path: Path,
        query: Option<String>,
        fragment: Option<String>,
    ) -> UriRef {
        let authority =
            compose_authority(userinfo.as_deref(), host.as_deref(), port.as_deref());
        let mut value = String::with_capacity(
            scheme.as_ref().map_or(0, |s| s.len() + 1)
                + authority.as_ref().map_or(0, |a| a.len() + 2)
                + path.as_str().len()
                + query.as_ref().map_or(0, |q| q.len() + 1)
                + fragment.as_ref().map_or(0, |f| f.len() + 1),
        );
        if let Some(scheme) = &scheme {
            value.push_str(scheme);
            value.push(':');
        }
        if let Some(authority) = &authority {
            value.push_str("//");
            value.push_str(authority);
        }
        value.push_str(path.as_str());
        if let Some(query) = &query {
            value.push('?');
            value.push_str(query);
        }
        if let Some(fragment) = &fragment {
            value.push('#');
            value.push_str(fragment);
        }
        UriRef {
            value,
            scheme,
            userinfo,
            host,
            port,
            authority,
            path,
            query,
            fragment,
            normalized: false,
        }
    }

    /// Returns the URI reference as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Consumes this `UriRef` and yields its string form.
    #[inline]
    #[must_use]
    pub fn into_string(self) -> String {
        self.value
    }

    /// Returns the optional [scheme] component.
    ///
    /// Note that the scheme component is *case-insensitive*. See the
    /// documentation of [`Scheme`] for more details on comparison.
    ///
    /// [scheme]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.1
    #[must_use]
    pub fn scheme(&self) -> Option<&Scheme> {
        self.scheme.as_deref().map(Scheme::new_validated)
    }

    /// Returns the optional [authority] component.
    ///
    /// [authority]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2
    ///
    /// # Examples
    ///
    /// ```
    /// use taut_uri::UriRef;
    ///
    /// let r = UriRef::parse("http://user@example.com:80/")?;
    /// assert_eq!(r.authority(), Some("user@example.com:80"));
    ///
    /// let r = UriRef::parse("mailto:user@example.com")?;
    /// assert_eq!(r.authority(), None);
    /// # Ok::<_, taut_uri::error::SyntaxError>(())
    /// ```
    #[must_use]
    pub fn authority(&self) -> Option<&str> {
        self.authority.as_deref()
    }

    /// Returns the optional [userinfo] subcomponent of authority.
    ///
    /// [userinfo]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.1
    #[must_use]
    pub fn userinfo(&self) -> Option<&str> {
        self.userinfo.as_deref()
    }

    /// Returns the optional [host] subcomponent of authority.
    ///
    /// The host is always defined when the authority is, although it may
    /// be empty. The square brackets enclosing an IPv6 or IPvFuture
    /// address are included.
    ///
    /// Note that ASCII characters within a host are *case-insensitive*.
    ///
    /// [host]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.2
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Returns the optional [port] subcomponent of authority.
    ///
    /// The port may be empty, carry leading zeros, or exceed any integer
    /// range.
    ///
    /// [port]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.3
    ///
    /// # Examples
    ///
    /// ```
    /// use taut_uri::UriRef;
    ///
    /// assert_eq!(UriRef::parse("//h:8042")?.port(), Some("8042"));
    /// assert_eq!(UriRef::parse("//h:")?.port(), Some(""));
    /// assert_eq!(UriRef::parse("//h")?.port(), None);
    /// # Ok::<_, taut_uri::error::SyntaxError>(())
    /// ```
    #[must_use]
    pub fn port(&self) -> Option<&str> {
        self.port.as_deref()
    }

    /// Converts the port subcomponent to an integer, if present and
    /// non-empty. Leading zeros are ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`PortOverflowError`] when the port does not fit in 32
    /// bits; the digits remain accessible through [`port`](Self::port).
    ///
    /// # Examples
    ///
    /// ```
    /// use taut_uri::UriRef;
    ///
    /// assert_eq!(UriRef::parse("//h:008042")?.port_to_u32(), Ok(Some(8042)));
    /// assert_eq!(UriRef::parse("//h:")?.port_to_u32(), Ok(None));
    /// assert!(UriRef::parse("//h:123456789123")?.port_to_u32().is_err());
    /// # Ok::<_, taut_uri::error::SyntaxError>(())
    /// ```
    pub fn port_to_u32(&self) -> Result<Option<u32>, PortOverflowError> {
        let port = match self.port.as_deref() {
            None | Some("") => return Ok(None),
            Some(port) => port,
        };
        let mut value: u32 = 0;
        for digit in port.bytes() {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(u32::from(digit - b'0')))
                .ok_or_else(|| PortOverflowError { port: port.into() })?;
        }
        Ok(Some(value))
    }

    /// Returns the [path] component.
    ///
    /// The path component is always present, although it may be empty.
    ///
    /// [path]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.3
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the optional [query] component.
    ///
    /// [query]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.4
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Returns the optional [fragment] component.
    ///
    /// [fragment]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.5
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Checks whether a scheme component is present.
    #[must_use]
    pub fn has_scheme(&self) -> bool {
        self.scheme.is_some()
    }

    /// Checks whether an authority component is present.
    #[must_use]
    pub fn has_authority(&self) -> bool {
        self.host.is_some()
    }

    /// Checks whether a query component is present.
    #[must_use]
    pub fn has_query(&self) -> bool {
        self.query.is_some()
    }

    /// Checks whether a fragment component is present.
    #[must_use]
    pub fn has_fragment(&self) -> bool {
        self.fragment.is_some()
    }

    /// Returns a builder holding copies of this reference's components.
    #[must_use]
    pub fn to_builder(&self) -> UriBuilder {
        UriBuilder::from_uri_ref(self)
    }
}

fn compose_authority(
    userinfo: Option<&str>,
    host: Option<&str>,
    port: Option<&str>,
) -> Option<String> {
    let host = host?;
    let mut authority = String::with_capacity(
        userinfo.map_or(0, |u| u.len() + 1) + host.len() + port.map_or(0, |p| p.len() + 1),
    );
    if let Some(userinfo) = userinfo {
        authority.push_str(userinfo);
        authority.push('@');
    }
    authority.push_str(host);
    if let Some(port) = port {
        authority.push(':');
        authority.push_str(port);
    }
    Some(authority)
}

fn eq_opt_ci(a: Option<&str>, b: Option<&str>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
        _ => false,
    }
}

impl Default for UriRef {
    /// Creates an empty URI reference.
    fn default() -> Self {
        UriRef::from_validated(None, None, None, None, Path::default(), None, None)
    }
}

impl PartialEq for UriRef {
    fn eq(&self, other: &Self) -> bool {
        eq_opt_ci(self.scheme.as_deref(), other.scheme.as_deref())
            && eq_opt_ci(self.host.as_deref(), other.host.as_deref())
            && self.userinfo == other.userinfo
            && self.port == other.port
            && self.path == other.path
            && self.query == other.query
            && self.fragment == other.fragment
    }
}

impl Eq for UriRef {}

impl hash::Hash for UriRef {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        fn hash_opt_ci<H: hash::Hasher>(opt: Option<&str>, state: &mut H) {
            match opt {
                Some(s) => {
                    state.write_u8(1);
                    for x in s.bytes() {
                        state.write_u8(x.to_ascii_lowercase());
                    }
                }
                None => state.write_u8(0),
            }
        }
        hash_opt_ci(self.scheme.as_deref(), state);
        hash_opt_ci(self.host.as_deref(), state);
        self.userinfo.hash(state);
        self.port.hash(state);
        self.path.hash(state);
        self.query.hash(state);
        self.fragment.hash(state);
    }
}

impl fmt::Display for UriRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl FromStr for UriRef {
    type Err = SyntaxError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UriRef::parse(s)
    }
}

impl TryFrom<&str> for UriRef {
    type Error = SyntaxError;

    /// Equivalent to [`parse`](Self::parse).
    #[inline]
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        UriRef::parse(s)
    }
}

impl AsRef<str> for UriRef {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

#[cfg(feature = "serde")]
impl Serialize for UriRef {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for UriRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        UriRef::parse(&s).map_err(de::Error::custom)
    }
}

/// A [URI][uri]: a URI reference whose scheme is present.
///
/// [uri]: https://datatracker.ietf.org/doc/html/rfc3986#section-3
///
/// A `Uri` wraps a [`UriRef`] and upholds the invariant that the scheme
/// component is defined and non-empty, which makes reference
/// [resolution](Self::resolve) and [normalization](Self::normalize)
/// available.
///
/// # Comparison
///
/// `Uri`s compare component-wise like [`UriRef`]s, additionally requiring
/// ASCII-case-insensitive equality of schemes. A `Uri` is never equal to a
/// bare `UriRef`: the types do not compare across the boundary. The total
/// order sorts by scheme, host, port (numerically), userinfo, path, query
/// and fragment, absent components first.
///
/// # Examples
///
/// ```
/// use taut_uri::{Uri, UriRef};
///
/// let base = Uri::parse("http://a/b/c/d;p?q")?;
/// let target = base.resolve(&UriRef::parse("../g")?);
/// assert_eq!(target.as_str(), "http://a/b/g");
/// # Ok::<_, taut_uri::error::SyntaxError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Uri {
    pub(crate) inner: UriRef,
}

impl Uri {
    /// Parses a URI from a string.
    ///
    /// # Errors
    ///
    /// Returns a [`SyntaxError`] if the string does not match the `URI`
    /// ABNF rule from RFC 3986; in particular when the scheme is absent.
    pub fn parse(s: &str) -> Result<Uri, SyntaxError> {
        Uri::try_from(UriRef::parse(s)?)
    }

    /// Returns the URI as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.inner.as_str()
    }

    /// Consumes this `Uri` and yields its string form.
    #[inline]
    #[must_use]
    pub fn into_string(self) -> String {
        self.inner.into_string()
    }

    /// Borrows this URI as a [`UriRef`].
    #[inline]
    #[must_use]
    pub fn as_uri_ref(&self) -> &UriRef {
        &self.inner
    }

    /// Returns the [scheme] component.
    ///
    /// [scheme]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.1
    #[must_use]
    pub fn scheme(&self) -> &Scheme {
        Scheme::new_validated(self.inner.scheme.as_deref().unwrap_or_default())
    }

    /// Returns the optional [authority] component.
    ///
    /// [authority]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2
    #[must_use]
    pub fn authority(&self) -> Option<&str> {
        self.inner.authority()
    }

    /// Returns the optional userinfo subcomponent of authority.
    #[must_use]
    pub fn userinfo(&self) -> Option<&str> {
        self.inner.userinfo()
    }

    /// Returns the optional host subcomponent of authority.
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.inner.host()
    }

    /// Returns the optional port subcomponent of authority.
    #[must_use]
    pub fn port(&self) -> Option<&str> {
        self.inner.port()
    }

    /// Converts the port subcomponent to an integer, if present and
    /// non-empty.
    ///
    /// # Errors
    ///
    /// Returns a [`PortOverflowError`] when the port does not fit in
    /// 32 bits.
    pub fn port_to_u32(&self) -> Result<Option<u32>, PortOverflowError> {
        self.inner.port_to_u32()
    }

    /// Returns the [path] component.
    ///
    /// [path]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.3
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        self.inner.path()
    }

    /// Returns the optional [query] component.
    ///
    /// [query]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.4
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.inner.query()
    }

    /// Returns the optional [fragment] component.
    ///
    /// [fragment]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.5
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.inner.fragment()
    }

    /// Checks whether an authority component is present.
    #[must_use]
    pub fn has_authority(&self) -> bool {
        self.inner.has_authority()
    }

    /// Checks whether this URI is an [absolute URI], i.e., carries
    /// no fragment.
    ///
    /// [absolute URI]: https://datatracker.ietf.org/doc/html/rfc3986#section-4.3
    ///
    /// # Examples
    ///
    /// ```
    /// use taut_uri::Uri;
    ///
    /// assert!(Uri::parse("http://example.com/")?.is_absolute());
    /// assert!(!Uri::parse("http://example.com/#top")?.is_absolute());
    /// # Ok::<_, taut_uri::error::SyntaxError>(())
    /// ```
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.inner.fragment.is_none()
    }

    /// Resolves the given URI reference against this URI and returns the
    /// normalized target URI, as per
    /// [Section 5.2 of RFC 3986][resolution].
    ///
    /// Equivalent to [`resolve_with`](Self::resolve_with) in strict mode.
    /// The fragment of the target always comes from the reference; a
    /// fragment of the base is never carried over.
    ///
    /// [resolution]: https://datatracker.ietf.org/doc/html/rfc3986#section-5
    ///
    /// # Examples
    ///
    /// ```
    /// use taut_uri::{Uri, UriRef};
    ///
    /// let base = Uri::parse("http://a/b/c/d;p?q")?;
    ///
    /// assert_eq!(base.resolve(&UriRef::parse("g;x=1/../y")?), Uri::parse("http://a/b/c/y")?);
    /// assert_eq!(base.resolve(&UriRef::parse("?y")?), Uri::parse("http://a/b/c/d;p?y")?);
    /// assert_eq!(base.resolve(&UriRef::parse("//g")?), Uri::parse("http://g")?);
    /// # Ok::<_, taut_uri::error::SyntaxError>(())
    /// ```
    #[must_use]
    pub fn resolve(&self, reference: &UriRef) -> Uri {
        self.resolve_with(reference, true)
    }

    /// Resolves the given URI reference against this URI and returns the
    /// normalized target URI.
    ///
    /// In non-strict mode, a scheme of the reference equal to the base
    /// scheme (ASCII-case-insensitively) is treated as if it were
    /// undefined, as described in
    /// [Section 5.2.2 of RFC 3986][transform].
    ///
    /// [transform]: https://datatracker.ietf.org/doc/html/rfc3986#section-5.2.2
    #[must_use]
    pub fn resolve_with(&self, reference: &UriRef, strict: bool) -> Uri {
        resolve::resolve(self, reference, strict)
    }

    /// Normalizes this URI as per the syntax-based normalization of
    /// [Section 6.2.2 of RFC 3986][normalization]: the scheme and host
    /// are lowercased, percent-encoding triplets are uppercased with
    /// those standing for unreserved characters decoded, an empty port is
    /// removed, and dot segments are removed from the path.
    ///
    /// This method is idempotent, and O(1) on an already normalized URI.
    ///
    /// [normalization]: https://datatracker.ietf.org/doc/html/rfc3986#section-6.2.2
    ///
    /// # Examples
    ///
    /// ```
    /// use taut_uri::Uri;
    ///
    /// let uri = Uri::parse("HTTP://EXAMPLE.com/%7efoo/./bar/../baz")?;
    /// assert_eq!(uri.normalize().as_str(), "http://example.com/~foo/baz");
    /// # Ok::<_, taut_uri::error::SyntaxError>(())
    /// ```
    #[must_use]
    pub fn normalize(&self) -> Uri {
        normalize::normalize(self)
    }

    /// Returns a builder holding copies of this URI's components.
    #[must_use]
    pub fn to_builder(&self) -> UriBuilder {
        self.inner.to_builder()
    }
}

fn cmp_ci(a: &str, b: &str) -> Ordering {
    let lower = |x: u8| x.to_ascii_lowercase();
    a.bytes().map(lower).cmp(b.bytes().map(lower))
}

fn cmp_opt_ci(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => cmp_ci(a, b),
    }
}

fn cmp_ports(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        // An empty port sorts before any non-empty one; non-empty ports
        // compare as unsigned decimal integers of any width.
        (Some(""), Some("")) => Ordering::Equal,
        (Some(""), Some(_)) => Ordering::Less,
        (Some(_), Some("")) => Ordering::Greater,
        (Some(a), Some(b)) => {
            let (a, b) = (a.trim_start_matches('0'), b.trim_start_matches('0'));
            a.len().cmp(&b.len()).then_with(|| a.cmp(b))
        }
    }
}

impl PartialOrd for Uri {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Uri {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_ci(self.scheme().as_str(), other.scheme().as_str())
            .then_with(|| cmp_opt_ci(self.host(), other.host()))
            .then_with(|| cmp_ports(self.port(), other.port()))
            .then_with(|| self.userinfo().cmp(&other.userinfo()))
            .then_with(|| self.path().cmp(other.path()))
            .then_with(|| self.query().cmp(&other.query()))
            .then_with(|| self.fragment().cmp(&other.fragment()))
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl FromStr for Uri {
    type Err = SyntaxError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uri::parse(s)
    }
}

impl TryFrom<&str> for Uri {
    type Error = SyntaxError;

    /// Equivalent to [`parse`](Self::parse).
    #[inline]
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Uri::parse(s)
    }
}

impl TryFrom<UriRef> for Uri {
    type Error = SyntaxError;

    /// Converts the URI reference to a URI if it contains a scheme.
    fn try_from(r: UriRef) -> Result<Self, Self::Error> {
        if r.has_scheme() {
            Ok(Uri { inner: r })
        } else {
            Err(SyntaxError {
                component: Component::Scheme,
                index: 0,
                input: r.into_string(),
                kind: SyntaxErrorKind::MissingScheme,
            })
        }
    }
}

impl From<Uri> for UriRef {
    /// Consumes the `Uri` and yields the underlying [`UriRef`].
    fn from(uri: Uri) -> Self {
        uri.inner
    }
}

impl AsRef<str> for Uri {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<UriRef> for Uri {
    fn as_ref(&self) -> &UriRef {
        &self.inner
    }
}

#[cfg(feature = "serde")]
impl Serialize for Uri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Uri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Uri::parse(&s).map_err(de::Error::custom)
    }
}
