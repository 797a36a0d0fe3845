use crate::{encoding::normalize_pct, Path, Uri, UriRef};

/// Applies the syntax-based normalization of RFC 3986 section 6.2.2 to a
/// validated URI.
pub(crate) fn normalize(uri: &Uri) -> Uri {
    if uri.inner.normalized {
        return uri.clone();
    }

    let scheme = uri.inner.scheme.as_deref().map(str::to_ascii_lowercase);
    let userinfo = uri.inner.userinfo.as_deref().map(|s| normalize_pct(s, false));
    // Lowercasing also applies to decoded octets, so that decoding
    // unreserved triplets cannot resurface uppercase letters.
    let host = uri.inner.host.as_deref().map(|s| normalize_pct(s, true));
    let port = uri.inner.port.clone().filter(|port| !port.is_empty());
    let query = uri.inner.query.as_deref().map(|s| normalize_pct(s, false));
    let fragment = uri.inner.fragment.as_deref().map(|s| normalize_pct(s, false));

    let mut path = uri.inner.path.normalize();
    // The "." segment guarding the serialized form is unnecessary once a
    // scheme or authority disambiguates it.
    if (path.as_str().starts_with("/.//") && host.is_some()) || path.as_str().starts_with("./") {
        let segments = path.segments()[1..].to_vec();
        path = Path::from_parts(path.is_absolute(), segments).into_normalized();
    }

    let mut inner = UriRef::from_validated(scheme, userinfo, host, port, path, query, fragment);
    inner.normalized = true;
    Uri { inner }
}
