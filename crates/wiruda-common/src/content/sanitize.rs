use std::collections::{HashMap, HashSet};

use ammonia::Builder;

const ALLOWED_TAGS: [&str; 22] = [
    "a", "b", "blockquote", "br", "code", "em", "i", "img", "li", "ol", "p", "pre", "strong",
    "u", "ul", "h1", "h2", "h3", "h4", "h5", "h6", "span",
];

const ALLOWED_ATTRIBUTES: [&str; 7] = ["href", "target", "rel", "class", "style", "src", "alt"];

/// Elements dropped together with everything inside them
const STRIPPED_ELEMENTS: [&str; 3] = ["script", "style", "iframe"];

/// Sanitize member-supplied rich text against the fixed tag/attribute policy.
///
/// Disallowed tags are unwrapped (their text kept); script, style and iframe
/// are removed with their content.
#[must_use]
pub fn sanitize_html(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    Builder::default()
        .tags(ALLOWED_TAGS.into_iter().collect::<HashSet<_>>())
        .tag_attributes(HashMap::new())
        .generic_attributes(ALLOWED_ATTRIBUTES.into_iter().collect::<HashSet<_>>())
        .clean_content_tags(STRIPPED_ELEMENTS.into_iter().collect::<HashSet<_>>())
        // `rel` is a member-controlled attribute here
        .link_rel(None)
        .clean(input)
        .to_string()
}
