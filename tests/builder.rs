use taut_uri::{error::Component, Path, Uri, UriBuilder, UriRef};

#[test]
fn from_scratch() {
    let mut b = UriBuilder::new();
    b.scheme(Some("foo"))
        .userinfo(Some("user"))
        .host(Some("example.com"))
        .port(Some("8042"))
        .path_with(|p| {
            p.push_segments(["over", "there"]).absolute(true);
        })
        .query(Some("name=ferret"))
        .fragment(Some("nose"));
    let uri = b.build_uri().unwrap();
    assert_eq!(
        uri.as_str(),
        "foo://user@example.com:8042/over/there?name=ferret#nose"
    );

    // An empty builder yields the empty reference.
    assert_eq!(UriBuilder::new().build().unwrap().as_str(), "");
}

#[test]
fn mutate_roundtrip() {
    for s in [
        "foo://user@example.com:8042/over/there?name=ferret#nose",
        "mailto:user@example.com",
        "//h:?#",
        "",
        "../g",
    ] {
        let r = UriRef::parse(s).unwrap();
        assert_eq!(r.to_builder().build().unwrap(), r, "{s}");
    }

    let uri = Uri::parse("http://example.com/a/b?q").unwrap();
    let mut b = uri.to_builder();
    b.path_with(|p| {
        p.tear(1).push_segments(["c"]);
    });
    assert_eq!(b.build_uri().unwrap().as_str(), "http://example.com/a/c?q");
}

#[test]
fn authority_splitting() {
    let mut b = UriBuilder::new();
    b.scheme(Some("http")).authority(Some("user@example.com:80"));
    let uri = b.build_uri().unwrap();
    assert_eq!(uri.userinfo(), Some("user"));
    assert_eq!(uri.host(), Some("example.com"));
    assert_eq!(uri.port(), Some("80"));

    let mut b = UriBuilder::new();
    b.scheme(Some("http")).authority(Some("[2001:db8::1]:8080"));
    let uri = b.build_uri().unwrap();
    assert_eq!(uri.host(), Some("[2001:db8::1]"));
    assert_eq!(uri.port(), Some("8080"));

    // Unsetting the authority clears all three subcomponents.
    let mut b = Uri::parse("http://user@example.com:80/p").unwrap().to_builder();
    b.authority(None);
    let uri = b.build_uri().unwrap();
    assert_eq!(uri.as_str(), "http:/p");
    assert!(uri.host().is_none());
}

#[test]
fn component_validation() {
    let mut b = UriBuilder::new();
    b.scheme(Some("1st"));
    assert_eq!(b.build().unwrap_err().component(), Component::Scheme);

    let mut b = UriBuilder::new();
    b.scheme(Some(""));
    assert_eq!(b.build().unwrap_err().component(), Component::Scheme);

    let mut b = UriBuilder::new();
    b.host(Some("exa mple"));
    assert_eq!(b.build().unwrap_err().component(), Component::Host);

    let mut b = UriBuilder::new();
    b.host(Some("h")).port(Some("8a"));
    assert_eq!(b.build().unwrap_err().component(), Component::Port);

    let mut b = UriBuilder::new();
    b.query(Some("a#b"));
    assert_eq!(b.build().unwrap_err().component(), Component::Query);
}

#[test]
fn correlation_validation() {
    // Userinfo or port without a host.
    let mut b = UriBuilder::new();
    b.userinfo(Some("u"));
    let e = b.build().unwrap_err();
    assert!(e.is_correlation());
    assert_eq!(e.component(), Component::Authority);

    let mut b = UriBuilder::new();
    b.port(Some("80"));
    assert!(b.build().unwrap_err().is_correlation());

    // Authority with a rootless path.
    let mut b = UriBuilder::new();
    b.host(Some("h")).path_with(|p| {
        p.push_segments(["rel"]).absolute(false);
    });
    let e = b.build().unwrap_err();
    assert!(e.is_correlation());
    assert_eq!(e.component(), Component::Path);

    // A path starting with "//" requires an authority.
    let mut b = UriBuilder::new();
    b.scheme(Some("foo")).path(&Path::parse("//x").unwrap());
    assert!(b.build().unwrap_err().is_correlation());
}

#[test]
fn failed_build_leaves_builder_usable() {
    let mut b = UriBuilder::new();
    b.userinfo(Some("u")).query(Some("q"));
    assert!(b.build().is_err());

    // A host completes the authority; the other components survived
    // the failure.
    b.host(Some("h"));
    assert_eq!(b.build().unwrap().as_str(), "//u@h?q");
}

#[test]
fn builder_guards_compose_with_correlations() {
    // The path builder inserts a "." guard, which then satisfies the
    // relative-reference correlation.
    let mut b = UriBuilder::new();
    b.path_with(|p| {
        p.push_segments(["a:b"]).absolute(false);
    });
    assert_eq!(b.build().unwrap().as_str(), "./a:b");

    let mut b = UriBuilder::new();
    b.path_with(|p| {
        p.push_segments(["", "x"]).absolute(false);
    });
    assert_eq!(b.build().unwrap().as_str(), ".//x");
}

#[test]
fn build_uri_requires_scheme() {
    let mut b = UriBuilder::new();
    b.host(Some("example.com"));
    assert!(b.build().is_ok());
    assert!(b.build_uri().is_err());
}
