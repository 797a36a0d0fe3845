use taut_uri::Uri;

#[track_caller]
fn check(input: &str, expected: &str) {
    let uri = Uri::parse(input).unwrap();
    assert_eq!(uri.normalize().as_str(), expected);
}

#[test]
fn normalize() {
    // Example from Section 6.2 of RFC 3986.
    check("HTTP://EXAMPLE.com/%7efoo/./bar/../baz", "http://example.com/~foo/baz");

    // Case normalization of scheme and host.
    check("HTTP://www.EXAMPLE.com/", "http://www.example.com/");

    // An empty port is removed.
    check("http://example.com:/", "http://example.com/");
    check("http://example.com:80/", "http://example.com:80/");

    // Lowercase hexadecimal digits are uppercased.
    check("x:/%3a", "x:/%3A");

    // Triplets standing for unreserved characters are decoded.
    check(
        "x:/%41%42%43%61%62%63%30%39%2D%2E%5F%7E",
        "x:/ABCabc09-._~",
    );

    // Triplets standing for reserved characters stay encoded.
    check("x:/%3A%2F%3F%23%5B%5D%40%25", "x:/%3A%2F%3F%23%5B%5D%40%25");

    // Decoded octets in the host are lowercased with the rest of it.
    check("HTTP://%45XAMPLE.%43Om", "http://example.com");

    // Userinfo, query and fragment get triplet normalization only.
    check(
        "FOO://%55se%72@EXamp%4ce.com:8042/%4b%2f?%4c%2b#%24%4d",
        "foo://User@example.com:8042/K%2F?L%2B#%24M",
    );

    // Dot segments are removed, underflow stops at the root.
    check("http://a/../../g", "http://a/g");
    check("foo:bar/../baz", "foo:baz");

    // Percent-encoded dots decode before dot-segment removal.
    check("http://a/b/%2E/c", "http://a/b/c");
    check("x:%2e", "x:");

    // A leading empty segment exposed by dot-segment removal is guarded
    // unless an authority disambiguates it.
    check("foo:/.//@@", "foo:/.//@@");
    check("foo:/..//@@", "foo:/.//@@");
    check("http://h/.//x", "http://h//x");
    check("foo:./a:b", "foo:a:b");

    // Already canonical inputs are untouched.
    for s in [
        "foo://user@example.com:8042/over/there?name=ferret#nose",
        "http://example.com/",
        "mailto:fred@example.com",
        "foo:a:b",
    ] {
        check(s, s);
    }
}

#[test]
fn idempotence() {
    for s in [
        "HTTP://EXAMPLE.com/%7efoo/./bar/../baz",
        "http://example.com:/",
        "foo:/.//@@",
        "http://h/.//x",
        "foo:./a:b",
        "x:%2e",
        "foo:bar/..",
        "FOO://%55se%72@EXamp%4ce.com:8042/%4b%2f?%4c%2b#%24%4d",
    ] {
        let once = Uri::parse(s).unwrap().normalize();
        let twice = once.normalize();
        assert_eq!(once.as_str(), twice.as_str(), "{s}");
        assert_eq!(once, twice);
    }
}

#[test]
fn normalized_uris_compare_equal() {
    let a = Uri::parse("HTTP://EXAMPLE.com/%7efoo").unwrap().normalize();
    let b = Uri::parse("http://example.com/~foo").unwrap();
    assert_eq!(a, b);
}
