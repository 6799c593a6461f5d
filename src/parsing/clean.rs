//! Message body cleaning.
//!
//! WhatsApp sprinkles invisible bidirectional controls around names,
//! attachments and pasted text (notably on iOS). They break word counting
//! and exact-match comparisons, so every body goes through [`clean_body`].

use unicode_normalization::UnicodeNormalization;

/// Invisible directional/formatting marks removed from message bodies.
///
/// LRM, RLM, the LRE..RLO embeddings/overrides and the LRI..PDI isolates.
pub const DIRECTIONAL_MARKS: &[char] = &[
    '\u{200E}', '\u{200F}', '\u{202A}', '\u{202B}', '\u{202C}', '\u{202D}', '\u{202E}',
    '\u{2066}', '\u{2067}', '\u{2068}', '\u{2069}',
];

/// Returns `true` for characters stripped by [`clean_body`].
pub fn is_directional_mark(c: char) -> bool {
    DIRECTIONAL_MARKS.contains(&c)
}

/// Cleans a message body: strips directional marks, applies NFKD and trims.
///
/// Marks are removed *before* normalizing so that combining characters which
/// become adjacent end up in canonical order; this keeps the function
/// idempotent.
///
/// # Example
///
/// ```
/// use chatstat::parsing::clean_body;
///
/// assert_eq!(clean_body("\u{200E} image omitted "), "image omitted");
/// assert_eq!(clean_body(&clean_body("ﬁne")), clean_body("ﬁne"));
/// ```
pub fn clean_body(text: &str) -> String {
    let normalized: String = text
        .chars()
        .filter(|c| !is_directional_mark(*c))
        .nfkd()
        .collect();
    normalized.trim().to_string()
}
