use std::borrow::Cow;
use taut_uri::encoding::{
    self, decode, decode_text, decode_utf8, mask, Ascii, Encoder, Latin1, Utf8,
};
use taut_uri::error::Component;

#[test]
fn encode_bytes() {
    assert_eq!(Encoder::DATA.encode(b"az09-._~"), "az09-._~");
    assert_eq!(Encoder::DATA.encode(b"a b%c"), "a%20b%25c");
    assert_eq!(Encoder::DATA.encode(&[0x00, 0x7f, 0x80, 0xff]), "%00%7F%80%FF");

    // The query preset keeps "/" and "?" literal, the segment preset
    // does not.
    assert_eq!(Encoder::QUERY.encode(b"a/b?c"), "a/b?c");
    assert_eq!(Encoder::SEGMENT.encode(b"a/b?c"), "a%2Fb%3Fc");

    // The URI preset keeps every reserved character literal.
    assert_eq!(Encoder::URI.encode(b":/?#[]@!$&'()*+,;="), ":/?#[]@!$&'()*+,;=");
}

#[test]
fn mixed_mode() {
    // Existing triplets are preserved in mixed mode and re-encoded
    // otherwise.
    assert_eq!(Encoder::SEGMENT.encode_utf8("a%20b c", true), "a%20b%20c");
    assert_eq!(Encoder::SEGMENT.encode_utf8("a%20b c", false), "a%2520b%20c");

    // Lowercase triplets are uppercased in both modes.
    assert_eq!(Encoder::SEGMENT.encode_utf8("a%2fb", true), "a%2Fb");
    assert_eq!(Encoder::SEGMENT.encode_utf8("a%2fb", false), "a%252fb");

    // "%" followed by non-hex digits is never a triplet.
    assert_eq!(Encoder::SEGMENT.encode_utf8("%zz", true), "%25zz");
}

#[test]
fn encode_text() {
    assert_eq!(Encoder::DATA.encode_utf8("é", false), "%C3%A9");
    assert_eq!(Encoder::DATA.encode_text("é", &Utf8, false), "%C3%A9");
    assert_eq!(Encoder::DATA.encode_text("é", &Latin1, false), "%E9");
    // The ASCII replacement is "?", which the data mask then encodes.
    assert_eq!(Encoder::DATA.encode_text("é", &Ascii, false), "%3F");

    // Mixed mode feeds only the runs between triplets to the text
    // encoder.
    assert_eq!(Encoder::DATA.encode_text("é%3fé", &Latin1, true), "%E9%3F%E9");

    // The inlined UTF-8 entry point matches the generic one.
    for s in ["", "abc", "a b", "déjà vu%20", "%e9"] {
        for mixed in [false, true] {
            assert_eq!(
                Encoder::SEGMENT.encode_utf8(s, mixed),
                Encoder::SEGMENT.encode_text(s, &Utf8, mixed),
                "{s} mixed={mixed}"
            );
        }
    }
}

#[test]
fn encode_into_sink() {
    let mut buf = String::from("q=");
    Encoder::QUERY.encode_utf8_to("a b", false, &mut buf).unwrap();
    assert_eq!(buf, "q=a%20b");
}

#[test]
fn custom_encoders() {
    let enc = Encoder::extra("/").unwrap();
    assert_eq!(enc.encode_utf8("a/b c", false), "a/b%20c");

    // Extra characters must be URI characters.
    assert!(Encoder::extra(" ").is_err());
    assert!(Encoder::extra("é").is_err());
    assert!(Encoder::extra("%").is_err());

    assert!(Encoder::with_mask(mask::PCHAR).is_ok());
    assert!(Encoder::with_mask(mask::PCHAR.or(mask::AsciiMask::allow(" "))).is_err());
}

#[test]
fn encoded_output_stays_in_mask() {
    let bytes: Vec<u8> = (0..=255).collect();
    for enc in [
        Encoder::DATA,
        Encoder::USERINFO,
        Encoder::HOST,
        Encoder::PATH,
        Encoder::SEGMENT,
        Encoder::QUERY,
        Encoder::FRAGMENT,
        Encoder::URI,
    ] {
        let out = enc.encode(&bytes);
        let out_bytes = out.as_bytes();
        let mut i = 0;
        while i < out_bytes.len() {
            if out_bytes[i] == b'%' {
                assert!(out_bytes[i + 1].is_ascii_hexdigit() && !out_bytes[i + 1].is_ascii_lowercase());
                assert!(out_bytes[i + 2].is_ascii_hexdigit() && !out_bytes[i + 2].is_ascii_lowercase());
                i += 3;
            } else {
                assert!(enc.mask().matches_byte(out_bytes[i]));
                i += 1;
            }
        }
    }
}

#[test]
fn decode_bytes() {
    assert_eq!(decode("a%20b").unwrap(), b"a b");
    assert_eq!(decode("").unwrap(), b"");
    assert_eq!(decode("%00%FF").unwrap(), [0x00, 0xff]);
    // Reserved characters pass through undecoded.
    assert_eq!(decode(":/?#[]@").unwrap(), b":/?#[]@");

    let e = decode("%2").unwrap_err();
    assert_eq!((e.component(), e.index()), (Component::Data, 0));

    let e = decode("a%2xb").unwrap_err();
    assert_eq!(e.index(), 1);

    let e = decode("a b").unwrap_err();
    assert_eq!(e.index(), 1);

    let e = decode("caf\u{e9}").unwrap_err();
    assert_eq!(e.index(), 3);
}

#[test]
fn decode_text_modes() {
    assert_eq!(decode_utf8("%C2%A1Hola%21").unwrap(), "¡Hola!");
    assert_eq!(decode_utf8("%FF").unwrap(), "\u{fffd}");
    assert_eq!(decode_text("%E9t%E9", &Latin1).unwrap(), "été");
    assert_eq!(decode_text("%FF", &Ascii).unwrap(), "\u{fffd}");

    // Without triplets the input is borrowed.
    assert!(matches!(decode_utf8("plain").unwrap(), Cow::Borrowed("plain")));
    assert!(matches!(decode_utf8("a%62c").unwrap(), Cow::Owned(_)));
}

#[test]
fn roundtrips() {
    let samples: &[&[u8]] = &[
        b"",
        b"plain",
        b"a b c",
        b"100% sure",
        &[0x00, 0x01, 0xfe, 0xff],
        "déjà vu".as_bytes(),
    ];
    for &bytes in samples {
        for enc in [Encoder::DATA, Encoder::SEGMENT, Encoder::QUERY, Encoder::URI] {
            assert_eq!(decode(&enc.encode(bytes)).unwrap(), bytes);
        }
    }

    for s in ["", "plain", "déjà vu", "a/b?c#d", "100%"] {
        let encoded = Encoder::DATA.encode_utf8(s, false);
        assert_eq!(decode_utf8(&encoded).unwrap(), s);
    }
}

#[test]
fn masks() {
    assert!(mask::URIC.contains(mask::UNRESERVED));
    assert!(mask::URIC.contains(mask::RESERVED));
    assert!(!mask::UNRESERVED.matches('%'));
    assert_eq!(mask::DIGIT.match_prefix("42nd"), 2);

    let vowels = mask::AsciiMask::allow("aeiou");
    assert!(mask::ALPHA.contains(vowels));
    assert!(encoding::AsciiMask::checked_allow("caf\u{e9}").is_err());
}
