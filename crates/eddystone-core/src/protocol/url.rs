//! Eddystone-URL compression.
//!
//! A URL goes on the wire as one scheme byte (index into
//! [`URL_SCHEME_PREFIXES`]) followed by the body, where every byte below
//! `URL_EXPANSIONS.len()` stands for a common TLD expansion and every other
//! byte is a literal character. Body bytes 0..=13 therefore can never be
//! literal characters.

use crate::error::{BeaconError, Result};

/// Scheme prefixes, indexed by the scheme byte.
pub const URL_SCHEME_PREFIXES: [&str; 4] = ["http://www.", "https://www.", "http://", "https://"];

/// TLD expansions, indexed by the body byte.
pub const URL_EXPANSIONS: [&str; 14] = [
    ".com/", ".org/", ".edu/", ".net/", ".info/", ".biz/", ".gov/", ".com", ".org", ".edu",
    ".net", ".info", ".biz", ".gov",
];

/// Scheme byte plus encoded body.
pub const MAX_ENCODED_URL_LEN: usize = 17;
/// Encoded body without the scheme byte.
pub const MAX_ENCODED_BODY_LEN: usize = MAX_ENCODED_URL_LEN - 1;
/// Worst case expansion of a maximal encoded URL.
pub const MAX_DECODED_URL_LEN: usize = 12 + MAX_ENCODED_BODY_LEN * 6;

/// Compressed form of a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedUrl {
    /// Index into [`URL_SCHEME_PREFIXES`].
    pub scheme: u8,
    pub body: Vec<u8>,
}

/// Whether a body byte is an expansion code rather than a literal.
pub fn is_expansion_code(b: u8) -> bool {
    usize::from(b) < URL_EXPANSIONS.len()
}

/// Expand a scheme byte and encoded body into the full URL.
pub fn decode_scheme_and_body(scheme: u8, body: &[u8]) -> Result<String> {
    let prefix = URL_SCHEME_PREFIXES
        .get(usize::from(scheme))
        .ok_or(BeaconError::InvalidScheme(scheme))?;

    let mut url = String::with_capacity(MAX_DECODED_URL_LEN);
    url.push_str(prefix);
    for &b in body {
        match URL_EXPANSIONS.get(usize::from(b)) {
            Some(expansion) => url.push_str(expansion),
            None => url.push(char::from(b)),
        }
    }
    Ok(url)
}

/// Compress a URL: longest matching scheme prefix, then greedy longest
/// expansion at each position, else the character itself.
///
/// Body length is not limited here; frame building enforces it.
pub fn encode(full_url: &str) -> Result<EncodedUrl> {
    let (scheme, prefix) = longest_match(full_url, &URL_SCHEME_PREFIXES).ok_or_else(|| {
        BeaconError::InvalidArgument(format!("url has no known scheme prefix: {full_url}"))
    })?;

    let mut rest = full_url.strip_prefix(prefix).unwrap_or_default();
    let mut body = Vec::with_capacity(MAX_ENCODED_BODY_LEN);
    while !rest.is_empty() {
        if let Some((code, expansion)) = longest_match(rest, &URL_EXPANSIONS) {
            body.push(code);
            rest = rest.strip_prefix(expansion).unwrap_or_default();
            continue;
        }

        let mut chars = rest.chars();
        let Some(c) = chars.next() else { break };
        let literal = u8::try_from(u32::from(c))
            .ok()
            .filter(|b| !is_expansion_code(*b))
            .ok_or_else(|| {
                BeaconError::InvalidArgument(format!("url character {c:?} cannot be encoded"))
            })?;
        body.push(literal);
        rest = chars.as_str();
    }

    Ok(EncodedUrl { scheme, body })
}

fn longest_match<'a>(s: &str, table: &[&'a str]) -> Option<(u8, &'a str)> {
    table
        .iter()
        .enumerate()
        .filter(|(_, entry)| s.starts_with(*entry))
        .max_by_key(|(_, entry)| entry.len())
        .and_then(|(i, entry)| u8::try_from(i).ok().map(|code| (code, *entry)))
}
