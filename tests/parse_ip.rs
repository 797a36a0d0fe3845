use taut_uri::{error::Component, UriRef};

#[track_caller]
fn host_of(s: &str) -> String {
    UriRef::parse(s).unwrap().host().unwrap().to_string()
}

#[test]
fn ipv6_hosts() {
    assert_eq!(host_of("//[::1]"), "[::1]");
    assert_eq!(host_of("//[::]"), "[::]");
    assert_eq!(host_of("//[2001:db8::1]"), "[2001:db8::1]");
    assert_eq!(host_of("//[1:2:3:4:5:6:7:8]"), "[1:2:3:4:5:6:7:8]");
    assert_eq!(host_of("//[::ffff:192.0.2.1]"), "[::ffff:192.0.2.1]");
    assert_eq!(host_of("//[1:2:3:4:5:6:77.77.88.88]"), "[1:2:3:4:5:6:77.77.88.88]");
    assert_eq!(host_of("//[fe80::a:b]"), "[fe80::a:b]");

    let r = UriRef::parse("http://[2001:db8::1]:8080/").unwrap();
    assert_eq!(r.host(), Some("[2001:db8::1]"));
    assert_eq!(r.port(), Some("8080"));
}

#[test]
fn invalid_ipv6_hosts() {
    for s in [
        "//[2001:db8:::1]/",
        "//[]",
        "//[:]",
        "//[:1]",
        "//[1]",
        "//[1:2:3:4:5:6:7]",
        "//[1:2:3:4:5:6:7:8:9]",
        "//[::1::]",
        "//[12345::]",
        "//[::1.2.3]",
        "//[::1.2.3.04]",
        "//[::1.2.3.256]",
        "//[1.2.3.4]",
    ] {
        let e = UriRef::parse(s).unwrap_err();
        assert_eq!(e.component(), Component::Host, "{s}");
    }

    // A zone identifier is not part of the RFC 3986 grammar.
    let e = UriRef::parse("//[fe80::1%25eth0]").unwrap_err();
    assert_eq!(e.component(), Component::Host);
    assert_eq!(e.index(), 8);

    // Hexadecimal characters only.
    let e = UriRef::parse("//[g::1]").unwrap_err();
    assert_eq!(e.component(), Component::Host);
    assert_eq!(e.index(), 1);
}

#[test]
fn ipv_future_hosts() {
    assert_eq!(host_of("//[v1.addr]"), "[v1.addr]");
    assert_eq!(host_of("//[vF.~:!]"), "[vF.~:!]");
    assert_eq!(host_of("//[v1FdE.AddR]"), "[v1FdE.AddR]");

    for s in ["//[v.addr]", "//[v1.]", "//[v1]", "//[v1./]"] {
        let e = UriRef::parse(s).unwrap_err();
        assert_eq!(e.component(), Component::Host, "{s}");
    }
}

#[test]
fn ipv4_hosts_are_reg_names() {
    // Dotted-decimal hosts satisfy the reg-name grammar; nothing else
    // is required of them.
    assert_eq!(host_of("//127.0.0.1"), "127.0.0.1");
    assert_eq!(host_of("//999.1.2.3"), "999.1.2.3");
}
