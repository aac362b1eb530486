//! HTML sanitization for rich-text post and comment bodies.
//!
//! Output of [`AmmoniaSanitizer`] is what views render without escaping, so
//! the allowlists here are the whole XSS boundary for post bodies.
//!
//! Tags outside the allowlist are unwrapped: the tag goes, its text stays.
//! That includes `<script>` and `<style>`, whose source survives as inert,
//! escaped text. URL attributes are passed through the library's scheme
//! filter, but callers must not treat that as URL validation.

use std::collections::{HashMap, HashSet};

use ammonia::Builder;

use quill_core::ports::HtmlSanitizer;

/// Tags a post body may keep.
pub const ALLOWED_TAGS: &[&str] = &[
    "a", "abbr", "acronym", "address", "b", "br", "div", "dl", "dt", "em", "h1", "h2", "h3", "h4",
    "h5", "h6", "hr", "i", "img", "li", "ol", "p", "pre", "q", "s", "small", "strike", "strong",
    "span", "sub", "sup", "table", "tbody", "td", "tfoot", "th", "thead", "tr", "tt", "u", "ul",
];

/// Attributes allowed per tag. Any attribute not listed is dropped.
pub const ALLOWED_ATTRIBUTES: &[(&str, &[&str])] = &[
    ("a", &["href", "target", "title"]),
    ("img", &["src", "alt", "width", "height"]),
];

/// Allowlist sanitizer backed by `ammonia`.
pub struct AmmoniaSanitizer {
    builder: Builder<'static>,
}

impl AmmoniaSanitizer {
    pub fn new() -> Self {
        let tag_attributes: HashMap<&'static str, HashSet<&'static str>> = ALLOWED_ATTRIBUTES
            .iter()
            .map(|(tag, attrs)| (*tag, attrs.iter().copied().collect()))
            .collect();

        let mut builder = Builder::default();
        builder
            .tags(ALLOWED_TAGS.iter().copied().collect())
            .clean_content_tags(HashSet::new())
            .generic_attributes(HashSet::new())
            .tag_attributes(tag_attributes)
            .link_rel(None)
            .strip_comments(true);

        Self { builder }
    }
}

impl Default for AmmoniaSanitizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Upper bound on cleaning passes. Re-parsing moves text that was kept
/// inside table context once; a couple of passes always settle in practice.
const MAX_PASSES: usize = 8;

impl HtmlSanitizer for AmmoniaSanitizer {
    /// Cleans until the output reparses to itself. A single pass can leave
    /// unwrapped `<script>`/`<style>` text inside a table, which the next
    /// parse foster-parents in front of it.
    fn sanitize(&self, raw: &str) -> String {
        let mut current = self.builder.clean(raw).to_string();

        for _ in 1..MAX_PASSES {
            let next = self.builder.clean(&current).to_string();
            if next == current {
                break;
            }
            current = next;
        }

        current
    }
}
