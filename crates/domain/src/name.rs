//! Presentation-format DNS name helpers.
//!
//! Names handled by this crate are FQDN strings: dot-separated labels
//! with a trailing dot, `"."` being the root. Labels are opaque ASCII;
//! case is preserved.

pub const MAX_NAME: usize = 255;
pub const MAX_LABEL: usize = 63;

pub fn is_fqdn(name: &str) -> bool {
    name.ends_with('.')
}

/// Number of labels in an FQDN; `"."` has zero.
pub fn label_count(name: &str) -> usize {
    match name.strip_suffix('.') {
        Some("") | None => 0,
        Some(rest) => rest.split('.').count(),
    }
}

pub fn first_label(name: &str) -> Option<&str> {
    let rest = name.strip_suffix('.').unwrap_or(name);
    rest.split('.').next().filter(|l| !l.is_empty())
}

pub fn last_label(name: &str) -> Option<&str> {
    let rest = name.strip_suffix('.').unwrap_or(name);
    rest.rsplit('.').next().filter(|l| !l.is_empty())
}

/// Checks a byte against the character set accepted inside a label:
/// visible ASCII except the label separator itself.
pub fn is_name_byte(b: u8) -> bool {
    (0x21..=0x7e).contains(&b) && b != b'.'
}

/// Validates an FQDN: trailing dot, labels of 1-63 visible-ASCII
/// bytes, 255 bytes overall.
pub fn verify_name(name: &str) -> bool {
    if !is_fqdn(name) || name.len() > MAX_NAME {
        return false;
    }
    if name == "." {
        return true;
    }
    let rest = &name[..name.len() - 1];
    rest.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= MAX_LABEL
            && label.bytes().all(is_name_byte)
    })
}
