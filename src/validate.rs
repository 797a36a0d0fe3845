use crate::{
    encoding::{is_hexdig, mask, mask::AsciiMask},
    error::{Component, Correlation, SyntaxError, SyntaxErrorKind},
    ip,
    raw::RawUri,
};

/// Validates every component of a split reference, then the correlations
/// between them.
pub(crate) fn validate(raw: &RawUri) -> Result<(), SyntaxError> {
    if let Some(scheme) = &raw.scheme {
        validate_scheme(scheme)?;
    }
    if let Some(userinfo) = &raw.userinfo {
        check(mask::USERINFO, userinfo, true, Component::Userinfo)?;
    }
    if let Some(host) = &raw.host {
        validate_host(host)?;
    }
    if let Some(port) = &raw.port {
        check(mask::PORT, port, false, Component::Port)?;
    }
    validate_path(&raw.path)?;
    if let Some(query) = &raw.query {
        check(mask::QUERY, query, true, Component::Query)?;
    }
    if let Some(fragment) = &raw.fragment {
        check(mask::FRAGMENT, fragment, true, Component::Fragment)?;
    }
    validate_correlations(raw)
}

pub(crate) fn validate_scheme(scheme: &str) -> Result<(), SyntaxError> {
    if scheme.is_empty() {
        return Err(err(Component::Scheme, 0, scheme, SyntaxErrorKind::EmptyScheme));
    }
    if mask::SCHEME_FIRST.match_prefix(scheme) == 0 {
        return Err(err(
            Component::Scheme,
            0,
            scheme,
            SyntaxErrorKind::UnexpectedChar,
        ));
    }
    let matched = mask::SCHEME.match_prefix(&scheme[1..]);
    if matched != scheme.len() - 1 {
        return Err(err(
            Component::Scheme,
            matched + 1,
            scheme,
            SyntaxErrorKind::UnexpectedChar,
        ));
    }
    Ok(())
}

pub(crate) fn validate_host(host: &str) -> Result<(), SyntaxError> {
    let bytes = host.as_bytes();
    if bytes.len() >= 2 && bytes[0] == b'[' && bytes[bytes.len() - 1] == b']' {
        let interior = &host[1..host.len() - 1];
        if interior.starts_with('v') {
            // IPvFuture: "v" 1*HEXDIG "." 1*( unreserved / sub-delims / ":" )
            let ver_len = mask::HEXDIG.match_prefix(&interior[1..]);
            if ver_len > 0 && interior.as_bytes().get(1 + ver_len) == Some(&b'.') {
                let data = &interior[1 + ver_len + 1..];
                let matched = mask::IPV_FUTURE.match_prefix(data);
                if data.is_empty() || matched != data.len() {
                    return Err(err(
                        Component::Host,
                        // Offset of the first offending character, counting
                        // the bracket and the "v<version>." prefix.
                        1 + 1 + ver_len + 1 + matched,
                        host,
                        SyntaxErrorKind::UnexpectedChar,
                    ));
                }
                return Ok(());
            }
        }

        // IPv6address
        let matched = mask::IPV6_ADDRESS.match_prefix(interior);
        if matched != interior.len() {
            return Err(err(
                Component::Host,
                1 + matched,
                host,
                SyntaxErrorKind::UnexpectedChar,
            ));
        }
        if !ip::is_ipv6(interior) {
            return Err(err(Component::Host, 0, host, SyntaxErrorKind::InvalidIpv6Addr));
        }
        Ok(())
    } else {
        // IPv4 addresses comply with reg-name and need no distinct rule.
        check(mask::REG_NAME, host, true, Component::Host)
    }
}

pub(crate) fn validate_path(path: &str) -> Result<(), SyntaxError> {
    check(mask::PATH, path, true, Component::Path)
}

pub(crate) fn validate_segment(segment: &str) -> Result<(), SyntaxError> {
    check(mask::SEGMENT, segment, true, Component::Segment)
}

fn validate_correlations(raw: &RawUri) -> Result<(), SyntaxError> {
    let has_authority = raw.userinfo.is_some() || raw.host.is_some() || raw.port.is_some();

    // RFC 3986 section 3.2: when authority is present, the host must
    // be defined.
    if has_authority && raw.host.is_none() {
        return Err(err(
            Component::Authority,
            0,
            "",
            SyntaxErrorKind::Correlation(Correlation::AuthorityWithoutHost),
        ));
    }

    // RFC 3986 section 3: without authority, the path cannot begin
    // with "//".
    if !has_authority && raw.path.starts_with("//") {
        return Err(err(
            Component::Path,
            0,
            &raw.path,
            SyntaxErrorKind::Correlation(Correlation::DoubleSlashPath),
        ));
    }

    // RFC 3986 section 3: with authority, the path must be empty or
    // begin with "/".
    if has_authority && !(raw.path.is_empty() || raw.path.starts_with('/')) {
        return Err(err(
            Component::Path,
            0,
            &raw.path,
            SyntaxErrorKind::Correlation(Correlation::NonAbemptyPath),
        ));
    }

    // RFC 3986 section 4.2: the first segment of a relative-path
    // reference cannot contain a colon.
    if raw.scheme.is_none() && !has_authority {
        let first = raw.path.split('/').next().unwrap_or("");
        if let Some(i) = first.find(':') {
            return Err(err(
                Component::Path,
                i,
                &raw.path,
                SyntaxErrorKind::Correlation(Correlation::ColonInFirstSegment),
            ));
        }
    }
    Ok(())
}

/// Checks every character of `s` against the mask, stepping over
/// well-formed percent-encoding triplets when `allow_pct` is set.
fn check(
    mask: AsciiMask,
    s: &str,
    allow_pct: bool,
    component: Component,
) -> Result<(), SyntaxError> {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let x = bytes[i];
        if mask.matches_byte(x) {
            i += 1;
        } else if x == b'%' && allow_pct {
            if bytes.len() - i >= 3 && is_hexdig(bytes[i + 1]) && is_hexdig(bytes[i + 2]) {
                i += 3;
            } else {
                return Err(err(component, i, s, SyntaxErrorKind::InvalidOctet));
            }
        } else {
            return Err(err(component, i, s, SyntaxErrorKind::UnexpectedChar));
        }
    }
    Ok(())
}

fn err(component: Component, index: usize, input: &str, kind: SyntaxErrorKind) -> SyntaxError {
    SyntaxError {
        component,
        index,
        input: input.into(),
        kind,
    }
}
