//! Headline counts.

use serde::Serialize;

use super::Analyzer;
use crate::Message;
use crate::core::filter::Selection;

/// Message, word, media and link counts for one selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// Messages in the selection, notifications included
    pub messages: usize,
    /// Whitespace-separated tokens across all bodies
    pub words: usize,
    /// Bodies that are a media placeholder
    pub media: usize,
    /// Links found in bodies
    pub links: usize,
}

impl Analyzer {
    /// Counts messages, words, media placeholders and links.
    pub fn stats(&self, selection: &Selection, messages: &[Message]) -> Stats {
        messages
            .iter()
            .filter(|m| selection.matches(m))
            .fold(Stats::default(), |mut stats, msg| {
                stats.messages += 1;
                stats.words += msg.body.split_whitespace().count();
                if self.config.is_media_placeholder(&msg.body) {
                    stats.media += 1;
                }
                stats.links += self.urls.count(&msg.body);
                stats
            })
    }
}
