//! Split a URL into the part before `#` and the fragment after it.

use serde::Serialize;
use url::Url;

use crate::error::{Result, TourError};

/// Sample input shown by the `defrag` command when no URL is given.
pub const SAMPLE_URL: &str = "http://netloc/path;para?query=arg#frag";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Defragmented {
    pub url: String,
    pub fragment: String,
}

/// Remove the fragment from `input`, returning both halves.
///
/// Works on relative references too. Text after the first `#` is the
/// fragment; an input without `#` comes back unchanged with an empty
/// fragment. When there is a fragment, the base is reassembled from its
/// parts: the scheme is lowercased, and empty query and parameter markers
/// left dangling in front of the fragment are dropped, so `p;?#f` becomes `p`.
pub fn defrag(input: &str) -> Defragmented {
    let Some((base, fragment)) = input.split_once('#') else {
        return Defragmented {
            url: input.to_string(),
            fragment: String::new(),
        };
    };

    let base = base.strip_suffix('?').unwrap_or(base);
    let base = strip_empty_params(base);

    Defragmented {
        url: lowercase_scheme(base),
        fragment: fragment.to_string(),
    }
}

/// Like [`defrag`], but the input must be an absolute URL.
///
/// The result is the URL as serialised by the parser, so scheme and host
/// come back normalised.
pub fn defrag_strict(input: &str) -> Result<Defragmented> {
    let mut parsed = Url::parse(input).map_err(|source| TourError::InvalidUrl {
        url: input.to_string(),
        source,
    })?;

    let fragment = parsed.fragment().unwrap_or_default().to_string();
    parsed.set_fragment(None);

    Ok(Defragmented {
        url: parsed.into(),
        fragment,
    })
}

// Only a well-formed scheme (letter, then letters, digits, `+`, `-`, `.`)
// before the first `:` is touched; anything else is left as written.
fn lowercase_scheme(base: &str) -> String {
    if let Some((scheme, rest)) = base.split_once(':') {
        let well_formed = scheme.starts_with(|c: char| c.is_ascii_alphabetic())
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
        if well_formed {
            return format!("{}:{}", scheme.to_ascii_lowercase(), rest);
        }
    }
    base.to_string()
}

// A trailing `;` is an empty params marker only when no query follows the path.
fn strip_empty_params(base: &str) -> &str {
    match base.strip_suffix(';') {
        Some(stripped) if !base.contains('?') => stripped,
        _ => base,
    }
}
