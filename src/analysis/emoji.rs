//! Emoji frequency.

use regex::Regex;

use super::{Analyzer, Tally, rank_first_seen};
use crate::Message;
use crate::core::filter::Selection;

/// Matches one emoji code point: pictographs, skin-tone modifiers and the
/// regional indicators flags are built from.
pub(super) fn emoji_regex() -> Regex {
    Regex::new(r"[\p{Extended_Pictographic}\p{Emoji_Modifier}\p{Regional_Indicator}]")
        .expect("emoji pattern is valid")
}

impl Analyzer {
    /// Ranks every emoji code point in the selection by frequency.
    ///
    /// Multi-code-point sequences are counted per code point, so a thumbs up
    /// with a skin tone counts once for the hand and once for the tone.
    pub fn emoji_frequency(&self, selection: &Selection, messages: &[Message]) -> Vec<Tally> {
        let emojis = messages
            .iter()
            .filter(|m| selection.matches(m))
            .flat_map(|m| self.emoji.find_iter(&m.body).map(|e| e.as_str()));

        rank_first_seen(emojis)
            .into_iter()
            .map(|(emoji, count)| Tally::new(emoji, count))
            .collect()
    }
}
