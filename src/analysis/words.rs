//! Vocabulary frequency and the word-cloud token stream.

use std::collections::HashSet;

use super::{Analyzer, Tally, rank_first_seen};
use crate::Message;
use crate::core::filter::Selection;
use crate::core::models::participants;

impl Analyzer {
    /// Bodies that carry words: selected, authored and not a media placeholder.
    fn wordy_bodies<'a>(
        &'a self,
        selection: &'a Selection,
        messages: &'a [Message],
    ) -> impl Iterator<Item = &'a str> + 'a {
        messages
            .iter()
            .filter(move |m| {
                selection.matches(m) && !m.is_notification() && !self.config.is_media_placeholder(&m.body)
            })
            .map(|m| m.body.as_str())
    }

    /// Lowercase tokens of `body` with punctuation removed and stopwords dropped.
    fn tokens(&self, body: &str) -> Vec<String> {
        self.punctuation
            .replace_all(body, "")
            .to_lowercase()
            .split_whitespace()
            .filter(|t| !self.config.is_stopword(t))
            .map(str::to_string)
            .collect()
    }

    /// Lowercased participant names, plus their individual words when
    /// `exclude_name_parts` is set.
    fn name_tokens(&self, messages: &[Message]) -> HashSet<String> {
        if !self.config.exclude_participant_names {
            return HashSet::new();
        }
        let names: Vec<String> = participants(messages).iter().map(|n| n.to_lowercase()).collect();
        if !self.config.exclude_name_parts {
            return names.into_iter().collect();
        }
        names
            .into_iter()
            .flat_map(|lower| {
                let words: Vec<String> = self
                    .punctuation
                    .replace_all(&lower, "")
                    .split_whitespace()
                    .map(str::to_string)
                    .collect();
                std::iter::once(lower).chain(words)
            })
            .collect()
    }

    /// The `top_words` most frequent tokens.
    ///
    /// Stopwords and participant names are excluded; ties keep first-seen
    /// order.
    pub fn most_common_words(&self, selection: &Selection, messages: &[Message]) -> Vec<Tally> {
        let names = self.name_tokens(messages);
        let tokens = self
            .wordy_bodies(selection, messages)
            .flat_map(|body| self.tokens(body))
            .filter(|t| !names.contains(t));

        rank_first_seen(tokens)
            .into_iter()
            .take(self.config.top_words)
            .map(|(word, count)| Tally::new(word, count))
            .collect()
    }

    /// Cleaned tokens in transcript order, for an external word-cloud renderer.
    pub fn word_cloud_tokens(&self, selection: &Selection, messages: &[Message]) -> Vec<String> {
        self.wordy_bodies(selection, messages)
            .flat_map(|body| self.tokens(body))
            .collect()
    }
}
