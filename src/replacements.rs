use crate::feeds::EmojiIndex;

/// Marker that identifies an image named after its Unicode codepoints.
pub const UNICODE_MARKER: &str = "unicode";
pub const UNICODE_URL_PREFIX: &str = "https://github.githubassets.com/images/icons/emoji/unicode/";
pub const UNICODE_URL_SUFFIX: &str = ".png?v8";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub shortcut: String,
    pub phrase: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplacementSet {
    items: Vec<Replacement>,
}

impl ReplacementSet {
    pub fn push(&mut self, replacement: Replacement) {
        self.items.push(replacement);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Replacement> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a ReplacementSet {
    type Item = &'a Replacement;
    type IntoIter = std::slice::Iter<'a, Replacement>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Build one replacement per codepoint-named emoji, in short-code order.
pub fn build_replacements(index: &EmojiIndex) -> ReplacementSet {
    let mut set = ReplacementSet::default();

    for (shortcode, url) in index {
        let Some(codepoints) = codepoints_from_url(url) else {
            tracing::trace!(shortcode = %shortcode, "skipping non-unicode emoji");
            continue;
        };

        set.push(Replacement {
            shortcut: format!(":{}:", shortcode),
            phrase: escape_codepoints(codepoints),
        });
    }

    tracing::debug!(
        kept = set.len(),
        skipped = index.len() - set.len(),
        "built replacements"
    );
    set
}

/// Recover the hyphen-delimited codepoint sequence from an image URL.
///
/// Returns `None` unless the marker occurs at a positive index; a URL that
/// starts with the marker is not considered a match.
pub fn codepoints_from_url(url: &str) -> Option<&str> {
    match url.find(UNICODE_MARKER) {
        Some(pos) if pos > 0 => {}
        _ => return None,
    }

    let rest = url.strip_prefix(UNICODE_URL_PREFIX).unwrap_or(url);
    Some(rest.strip_suffix(UNICODE_URL_SUFFIX).unwrap_or(rest))
}

/// Turn `1f1fa-1f1f8` into `&#x1f1fa;&#x1f1f8;`.
pub fn escape_codepoints(codepoints: &str) -> String {
    codepoints
        .split('-')
        .map(|cp| format!("&#x{};", cp))
        .collect()
}
