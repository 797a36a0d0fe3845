use taut_uri::{error::Component, Uri, UriRef};

#[test]
fn components() {
    let r = UriRef::parse("foo://user@example.com:8042/over/there?name=ferret#nose").unwrap();
    assert_eq!(r.scheme().unwrap().as_str(), "foo");
    assert_eq!(r.authority(), Some("user@example.com:8042"));
    assert_eq!(r.userinfo(), Some("user"));
    assert_eq!(r.host(), Some("example.com"));
    assert_eq!(r.port(), Some("8042"));
    assert_eq!(r.path().as_str(), "/over/there");
    assert_eq!(r.query(), Some("name=ferret"));
    assert_eq!(r.fragment(), Some("nose"));

    let r = UriRef::parse("mailto:user@example.com").unwrap();
    assert_eq!(r.scheme().unwrap().as_str(), "mailto");
    assert_eq!(r.authority(), None);
    assert_eq!(r.path().as_str(), "user@example.com");

    let r = UriRef::parse("//g").unwrap();
    assert!(r.scheme().is_none());
    assert_eq!(r.host(), Some("g"));
    assert!(r.path().is_empty());

    let r = UriRef::parse("?q#f").unwrap();
    assert_eq!(r.query(), Some("q"));
    assert_eq!(r.fragment(), Some("f"));
    assert!(r.path().is_empty());
}

#[test]
fn absent_vs_empty() {
    let r = UriRef::parse("").unwrap();
    assert!(r.scheme().is_none() && r.host().is_none());
    assert!(!r.has_authority() && !r.has_query() && !r.has_fragment());
    assert!(r.path().is_empty());

    let r = UriRef::parse("foo://").unwrap();
    assert_eq!(r.host(), Some(""));
    assert_eq!(r.authority(), Some(""));
    assert!(r.port().is_none());

    let r = UriRef::parse("foo://h:?#").unwrap();
    assert_eq!(r.port(), Some(""));
    assert_eq!(r.query(), Some(""));
    assert_eq!(r.fragment(), Some(""));

    // The userinfo may be empty yet present.
    let r = UriRef::parse("//@h").unwrap();
    assert_eq!(r.userinfo(), Some(""));
    assert_eq!(r.host(), Some("h"));
}

#[test]
fn roundtrip() {
    for s in [
        "",
        "foo:",
        "foo://user@example.com:8042/over/there?name=ferret#nose",
        "http://[2001:db8::1]:8080/",
        "HTTP://EXAMPLE.com/%7efoo",
        "a/b/c",
        "../g",
        "//h:",
        "mailto:fred@example.com",
        "foo://info.example.com?fred",
        "./a:b",
    ] {
        assert_eq!(UriRef::parse(s).unwrap().to_string(), s);
    }
}

#[test]
fn syntax_errors() {
    let e = UriRef::parse("http://exa mple.com/").unwrap_err();
    assert_eq!(e.component(), Component::Host);
    assert_eq!(e.index(), 3);
    assert_eq!(e.input(), "exa mple.com");

    let e = UriRef::parse("http://example.com:8a/").unwrap_err();
    assert_eq!(e.component(), Component::Port);
    assert_eq!(e.index(), 1);

    let e = UriRef::parse("1http://example.com/").unwrap_err();
    assert_eq!(e.component(), Component::Scheme);
    assert_eq!(e.index(), 0);

    let e = UriRef::parse("http://example.com/a%2xb").unwrap_err();
    assert_eq!(e.component(), Component::Path);
    assert_eq!(e.index(), 2);

    let e = UriRef::parse("http://example.com/#a#b").unwrap_err();
    assert_eq!(e.component(), Component::Fragment);
    assert_eq!(e.index(), 1);

    let e = UriRef::parse("été").unwrap_err();
    assert_eq!(e.component(), Component::Path);
    assert_eq!(e.index(), 0);

    // Incomplete triplet at the very end of a component.
    let e = UriRef::parse("%e").unwrap_err();
    assert_eq!(e.component(), Component::Path);
    assert_eq!(e.index(), 0);
}

#[test]
fn stray_characters_after_ip_literal() {
    let e = UriRef::parse("http://[::1]x/").unwrap_err();
    assert_eq!(e.component(), Component::Host);
    assert_eq!(e.index(), 0);
}

#[test]
fn percent_encoding_in_components() {
    let r = UriRef::parse("//ex%41mple/%2e%2E?%3f#%23").unwrap();
    assert_eq!(r.host(), Some("ex%41mple"));
    assert_eq!(r.path().as_str(), "/%2e%2E");
    assert_eq!(r.query(), Some("%3f"));
    assert_eq!(r.fragment(), Some("%23"));
}

#[test]
fn ports() {
    assert_eq!(UriRef::parse("//h:8042").unwrap().port_to_u32(), Ok(Some(8042)));
    assert_eq!(UriRef::parse("//h:0008042").unwrap().port_to_u32(), Ok(Some(8042)));
    assert_eq!(UriRef::parse("//h:").unwrap().port_to_u32(), Ok(None));
    assert_eq!(UriRef::parse("//h").unwrap().port_to_u32(), Ok(None));
    assert_eq!(
        UriRef::parse("//h:4294967295").unwrap().port_to_u32(),
        Ok(Some(u32::MAX))
    );

    let e = UriRef::parse("//h:4294967296").unwrap().port_to_u32().unwrap_err();
    assert_eq!(e.port(), "4294967296");
}

#[test]
fn uri_requires_scheme() {
    assert!(Uri::parse("http://example.com/").is_ok());

    let e = Uri::parse("//example.com/").unwrap_err();
    assert_eq!(e.component(), Component::Scheme);

    let r = UriRef::parse("http://example.com/").unwrap();
    let uri = Uri::try_from(r).unwrap();
    assert_eq!(uri.scheme().as_str(), "http");

    let r = UriRef::parse("/no/scheme").unwrap();
    assert!(Uri::try_from(r).is_err());
}

#[test]
fn absolute_uri() {
    assert!(Uri::parse("http://example.com/?q").unwrap().is_absolute());
    assert!(!Uri::parse("http://example.com/#top").unwrap().is_absolute());
}

#[test]
fn equality() {
    // Scheme and host compare case-insensitively.
    assert_eq!(
        Uri::parse("HTTP://EXAMPLE.com/a").unwrap(),
        Uri::parse("http://example.COM/a").unwrap()
    );
    // Every other component compares byte-wise.
    assert_ne!(
        UriRef::parse("//h/%7e").unwrap(),
        UriRef::parse("//h/~").unwrap()
    );
    assert_ne!(
        UriRef::parse("//h:80").unwrap(),
        UriRef::parse("//h:080").unwrap()
    );
    // Absent never equals empty.
    assert_ne!(UriRef::parse("//h").unwrap(), UriRef::parse("//h?").unwrap());
    assert_ne!(UriRef::parse("//h").unwrap(), UriRef::parse("//h#").unwrap());
}

#[test]
fn hash_consistent_with_eq() {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    let a = Uri::parse("HTTP://EXAMPLE.com/a?q#f").unwrap();
    let b = Uri::parse("http://example.com/a?q#f").unwrap();
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn ordering() {
    let uris = [
        "a://h",
        "b://g",
        "B://h",
        "b://h",
        "b://h:",
        "b://h:0",
        "b://h:80",
        "b://h:080",
        "b://h:81",
        "b://h:123456789123456789",
        "b://u@h:123456789123456789",
        "b://u@h:123456789123456789/p",
        "b://u@h:123456789123456789/p?q",
        "b://u@h:123456789123456789/p?q#f",
    ];
    for window in uris.windows(2) {
        let (a, b) = (Uri::parse(window[0]).unwrap(), Uri::parse(window[1]).unwrap());
        assert!(a <= b, "{a} <= {b}");
    }

    // Ports with the same numeric value compare equal; the tie is broken
    // by later components.
    let a = Uri::parse("b://h:80").unwrap();
    let b = Uri::parse("b://h:080").unwrap();
    assert_eq!(a.cmp(&b), std::cmp::Ordering::Equal);
}

#[test]
fn default_is_empty() {
    let r = UriRef::default();
    assert_eq!(r.as_str(), "");
    assert!(r.path().is_empty());
}
