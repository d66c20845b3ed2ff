/// Filename metadata derivation
///
/// The image folders carry no sidecar metadata, so the gallery and carousel
/// derive everything they display from the filename itself. A file named
/// `liveShow_backstage2024.jpg` yields the category "Live Show" and the
/// caption "Backstage 2024". Placeholder URLs (`/placeholder.svg?...&text=`)
/// derive from their `text=` query parameter instead.

use serde::Serialize;
use url::form_urlencoded;

/// A display-ready media asset for the gallery or carousel
///
/// Category and caption are derived once at construction; the derivation
/// functions are pure, so rebuilding an asset from the same path always
/// produces the same pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaAsset {
    /// 1-based position within its section listing
    pub id: usize,
    /// Web-style source path (e.g. "/images/gallery/liveShow_backstage2024.jpg")
    pub src: String,
    /// Filter category shown on the gallery tabs
    pub category: String,
    /// Caption overlaid on the image
    pub caption: String,
}

impl MediaAsset {
    /// Build an asset from its listing position and source path
    pub fn from_path(id: usize, path: &str) -> Self {
        MediaAsset {
            id,
            src: path.to_string(),
            category: derive_category(path),
            caption: derive_caption(path),
        }
    }
}

/// Derive the display category from an asset path
///
/// The category token is the part of the filename before the first
/// underscore (or the whole stem when there is none). Placeholder URLs use
/// the first word of their decoded `text=` parameter.
///
/// # Returns
/// * Title-cased category, empty string for an empty path. Never fails.
pub fn derive_category(path: &str) -> String {
    let segment = last_segment(path);

    let token = match placeholder_text(segment) {
        Some(text) => text
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_string(),
        None => stem_of(segment)
            .split('_')
            .next()
            .unwrap_or_default()
            .to_string(),
    };

    spaced_words(&token, false)
}

/// Derive the display caption from an asset path
///
/// The caption token is the part of the filename after the first underscore
/// (or the whole stem when there is none); later underscores stay verbatim.
/// Placeholder URLs use the full decoded `text=` parameter. On top of the
/// camel-case spacing, captions also get a space at every letter/digit
/// boundary, so "Show2024" reads "Show 2024".
pub fn derive_caption(path: &str) -> String {
    let segment = last_segment(path);

    let token = match placeholder_text(segment) {
        Some(text) => text,
        None => {
            let stem = stem_of(segment);
            match stem.split_once('_') {
                Some((_, rest)) => rest.to_string(),
                None => stem.to_string(),
            }
        }
    };

    spaced_words(&token, true)
}

/// Build a placeholder image URL carrying display text
///
/// This is the fallback used when a section folder has fewer images than
/// items to show. The `text=` parameter round-trips through the derivation
/// functions above.
pub fn placeholder_image(width: u32, height: u32, text: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(text.as_bytes()).collect();
    format!("/placeholder.svg?height={height}&width={width}&text={encoded}")
}

/// Final path segment (the whole string when there is no slash)
fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Filename stem: everything before the first dot
fn stem_of(segment: &str) -> &str {
    segment.split('.').next().unwrap_or(segment)
}

/// Decoded `text=` parameter of a placeholder segment, if present
///
/// Only segments named `placeholder.svg` qualify; a missing or empty `text=`
/// parameter means the segment is treated as a regular filename.
fn placeholder_text(segment: &str) -> Option<String> {
    let (name, query) = segment.split_once('?')?;
    if name != "placeholder.svg" {
        return None;
    }

    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key.as_ref() == "text")
        .map(|(_, value)| value.into_owned())
        .filter(|text| !text.is_empty())
}

/// Format a raw token for display
///
/// Inserts a space before each internal uppercase letter (camel-case split),
/// and with `digit_boundaries` also at every letter/digit transition. Never
/// doubles an existing space. Trims, then uppercases the first character.
/// Empty input gives an empty string.
fn spaced_words(token: &str, digit_boundaries: bool) -> String {
    let mut spaced = String::with_capacity(token.len() + 4);
    let mut prev: Option<char> = None;

    for c in token.chars() {
        let boundary = match prev {
            None => false,
            Some(p) if p.is_whitespace() => false,
            Some(p) => {
                c.is_uppercase()
                    || (digit_boundaries
                        && ((p.is_alphabetic() && c.is_ascii_digit())
                            || (p.is_ascii_digit() && c.is_alphabetic())))
            }
        };
        if boundary {
            spaced.push(' ');
        }
        spaced.push(c);
        prev = Some(c);
    }

    let trimmed = spaced.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}
