//! Busiest-participant ranking.

use serde::Serialize;

use super::{Analyzer, Tally, rank_first_seen};
use crate::Message;

/// One author's share of the authored messages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserShare {
    pub name: String,
    pub count: usize,
    /// Percentage of authored messages, rounded to two decimals.
    pub percent: f64,
}

/// Busiest authors and every author's share.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BusiestUsers {
    /// The most active authors, at most `top_users` of them.
    pub top: Vec<Tally>,
    /// Every author, most active first.
    pub shares: Vec<UserShare>,
}

fn round_percent(count: usize, total: usize) -> f64 {
    (count as f64 * 10_000.0 / total as f64).round() / 100.0
}

impl Analyzer {
    /// Ranks authors by message count.
    ///
    /// Notification rows (encryption notice included) have no author and are
    /// left out of both the ranking and the percentage denominator.
    pub fn busiest_users(&self, messages: &[Message]) -> BusiestUsers {
        let ranked = rank_first_seen(
            messages
                .iter()
                .filter(|m| !m.is_notification())
                .map(|m| m.author.as_str()),
        );
        let total: usize = ranked.iter().map(|(_, count)| count).sum();

        BusiestUsers {
            top: ranked
                .iter()
                .take(self.config.top_users)
                .map(|&(name, count)| Tally::new(name, count))
                .collect(),
            shares: ranked
                .iter()
                .map(|&(name, count)| UserShare {
                    name: name.to_string(),
                    count,
                    percent: round_percent(count, total),
                })
                .collect(),
        }
    }
}
