use crate::encoding::normalize_pct;
use alloc::{string::String, vec::Vec};

/// Applies the `remove_dot_segments` algorithm of RFC 3986 section 5.2.4
/// to a segment sequence.
///
/// For an absolute path, leading ".." segments cannot escape the root and
/// are stripped after the pass.
pub(crate) fn remove_dot_segments(absolute: bool, segments: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(segments.len());
    for seg in segments {
        match seg.as_str() {
            "." => {}
            ".." => {
                if out.last().map_or(true, |last| last == "..") {
                    out.push(seg.clone());
                } else {
                    out.pop();
                }
            }
            _ => out.push(seg.clone()),
        }
    }

    if absolute {
        let n = out.iter().take_while(|seg| *seg == "..").count();
        out.drain(..n);
    }
    out
}

/// Prepends a "." segment where the serialized form would otherwise be
/// mistaken for an absolute path or a scheme-qualified reference.
///
/// Used when joining builder output, where an absolute path may begin
/// with an empty segment (authority context).
pub(crate) fn apply_join_guards(absolute: bool, segments: &mut Vec<String>) {
    if absolute {
        return;
    }
    let needs_guard = (segments.len() >= 2 && segments[0].is_empty())
        || segments.first().map_or(false, |seg| seg.contains(':'));
    if needs_guard {
        segments.insert(0, String::from("."));
    }
}

/// The guard rule after dot-segment removal: additionally covers an
/// absolute result whose serialized form would begin with "//".
pub(crate) fn apply_normal_guards(absolute: bool, segments: &mut Vec<String>) {
    if segments.len() >= 2 && segments[0].is_empty() {
        segments.insert(0, String::from("."));
    } else {
        apply_join_guards(absolute, segments);
    }
}

/// Normalizes the percent-encoding triplets of every segment in place:
/// hexadecimal digits are uppercased and triplets standing for unreserved
/// characters are decoded.
pub(crate) fn normalize_segments(segments: &mut [String]) {
    for seg in segments {
        if seg.contains('%') {
            *seg = normalize_pct(seg, false);
        }
    }
}
