use crate::{Path, Uri, UriRef};
use alloc::string::String;

/// The RFC 3986 section 5.2.2 transform: computes the target components
/// from a base URI and a reference, then normalizes.
pub(crate) fn resolve(base: &Uri, r: &UriRef, strict: bool) -> Uri {
    // In non-strict mode a reference scheme equal to the base scheme is
    // ignored, as if the reference were relative.
    let r_scheme = match r.scheme() {
        Some(scheme) if !strict && scheme == base.scheme() => None,
        scheme => scheme,
    };

    let scheme: Option<String>;
    let (userinfo, host, port): (Option<String>, Option<String>, Option<String>);
    let path: Path;
    let query: Option<String>;

    if let Some(r_scheme) = r_scheme {
        scheme = Some(r_scheme.as_str().into());
        (userinfo, host, port) = authority_of(r);
        path = r.path().normalize();
        query = r.query().map(String::from);
    } else if r.has_authority() {
        scheme = base.inner.scheme.clone();
        (userinfo, host, port) = authority_of(r);
        path = r.path().normalize();
        query = r.query().map(String::from);
    } else {
        scheme = base.inner.scheme.clone();
        (userinfo, host, port) = authority_of(&base.inner);
        if r.path().is_empty() {
            path = base.path().clone();
            query = r.query().or_else(|| base.query()).map(String::from);
        } else {
            path = if r.path().is_absolute() {
                r.path().normalize()
            } else if base.has_authority() && base.path().is_empty() {
                // Merging onto an authority with an empty path roots the
                // reference path.
                Path::from_parts(true, r.path().segments().to_vec()).normalize()
            } else {
                base.path().resolve(r.path())
            };
            query = r.query().map(String::from);
        }
    }

    // The target fragment always comes from the reference.
    let fragment = r.fragment().map(String::from);

    let inner = UriRef::from_validated(scheme, userinfo, host, port, path, query, fragment);
    Uri { inner }.normalize()
}

fn authority_of(r: &UriRef) -> (Option<String>, Option<String>, Option<String>) {
    (
        r.userinfo().map(String::from),
        r.host().map(String::from),
        r.port().map(String::from),
    )
}
