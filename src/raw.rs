use alloc::string::String;

/// The unvalidated component split of a URI reference.
///
/// Produced by [`split`], which realizes the generic splitting expressed
/// by the regular expression of RFC 3986 Appendix B: seven optional
/// component strings, of which the path is always present (possibly
/// empty). Absent is distinct from empty everywhere.
#[derive(Clone, Debug, Default)]
pub(crate) struct RawUri {
    pub scheme: Option<String>,
    pub userinfo: Option<String>,
    pub host: Option<String>,
    pub port: Option<String>,
    pub path: String,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

/// Splits a string into the seven components.
///
/// Splitting never fails; no validation is performed.
pub(crate) fn split(s: &str) -> RawUri {
    let mut raw = RawUri::default();
    let mut rest = s;

    // scheme: the characters before the first ":", "/", "?" or "#",
    // if that first delimiter is a colon at index >= 1.
    if let Some(i) = rest.find(|c| matches!(c, ':' | '/' | '?' | '#')) {
        if rest.as_bytes()[i] == b':' && i > 0 {
            raw.scheme = Some(rest[..i].into());
            rest = &rest[i + 1..];
        }
    }

    // fragment: everything after the first "#".
    if let Some(i) = rest.find('#') {
        raw.fragment = Some(rest[i + 1..].into());
        rest = &rest[..i];
    }

    // query: everything after the first "?" before the fragment.
    if let Some(i) = rest.find('?') {
        raw.query = Some(rest[i + 1..].into());
        rest = &rest[..i];
    }

    // authority: after "//", up to the next "/", "?" or "#".
    if let Some(after) = rest.strip_prefix("//") {
        let end = after.find('/').unwrap_or(after.len());
        split_authority(&after[..end], &mut raw);
        rest = &after[end..];
    }

    raw.path = rest.into();
    raw
}

/// Splits an authority string into userinfo, host and port.
///
/// The host is always defined (possibly empty) for a present authority.
pub(crate) fn split_authority(mut authority: &str, raw: &mut RawUri) {
    if let Some(i) = authority.find('@') {
        raw.userinfo = Some(authority[..i].into());
        authority = &authority[i + 1..];
    }

    // An IP literal keeps its colons; the port colon is the first one
    // after the closing bracket. Unclosed brackets or stray characters
    // after "]" are left in the host for the validator to reject.
    let host_end = if authority.starts_with('[') {
        match authority.find(']') {
            Some(i) if matches!(authority.as_bytes().get(i + 1), None | Some(b':')) => i + 1,
            _ => authority.len(),
        }
    } else {
        authority.find(':').unwrap_or(authority.len())
    };

    raw.host = Some(authority[..host_end].into());
    if host_end < authority.len() {
        raw.port = Some(authority[host_end + 1..].into());
    }
}
