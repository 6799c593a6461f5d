//! Weekday and month activity maps, and the weekday × hour heatmap.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use super::{Analyzer, Tally};
use crate::Message;
use crate::core::filter::Selection;
use crate::message::{DAY_NAMES, MONTH_NAMES, hour_bucket};

/// Message counts pivoted by day name (rows) and hour bucket (columns).
///
/// Only days and buckets that occur in the selection are present; a missing
/// combination of a present day and bucket counts as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Heatmap {
    /// Day names, Monday first.
    pub days: Vec<&'static str>,
    /// Hour buckets in hour order, e.g. `"00-01"`.
    pub periods: Vec<String>,
    /// `counts[day][period]`
    pub counts: Vec<Vec<usize>>,
}

impl Heatmap {
    /// Count for one cell, `None` if the day or bucket is not present.
    pub fn get(&self, day: &str, period: &str) -> Option<usize> {
        let row = self.days.iter().position(|d| *d == day)?;
        let col = self.periods.iter().position(|p| p == period)?;
        Some(self.counts[row][col])
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Largest cell value.
    pub fn max(&self) -> usize {
        self.counts.iter().flatten().copied().max().unwrap_or(0)
    }
}

/// Ranks the non-zero `counts` by count, ties kept in calendar order.
fn rank_in_calendar_order(names: &[&'static str], counts: &[usize]) -> Vec<Tally> {
    let mut ranked: Vec<Tally> = names
        .iter()
        .zip(counts)
        .filter(|&(_, &count)| count > 0)
        .map(|(name, &count)| Tally::new(*name, count))
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}

impl Analyzer {
    /// Messages per day name, busiest first.
    pub fn week_activity(&self, selection: &Selection, messages: &[Message]) -> Vec<Tally> {
        let mut counts = [0usize; 7];
        for msg in messages.iter().filter(|m| selection.matches(m)) {
            counts[msg.weekday().num_days_from_monday() as usize] += 1;
        }
        rank_in_calendar_order(&DAY_NAMES, &counts)
    }

    /// Messages per month name, busiest first.
    pub fn month_activity(&self, selection: &Selection, messages: &[Message]) -> Vec<Tally> {
        let mut counts = [0usize; 12];
        for msg in messages.iter().filter(|m| selection.matches(m)) {
            counts[(msg.month_num() - 1) as usize] += 1;
        }
        rank_in_calendar_order(&MONTH_NAMES, &counts)
    }

    /// Pivots message counts by day name and hour bucket.
    pub fn activity_heatmap(&self, selection: &Selection, messages: &[Message]) -> Heatmap {
        let mut cells: BTreeMap<(u32, u32), usize> = BTreeMap::new();
        let mut days = BTreeSet::new();
        let mut hours = BTreeSet::new();

        for msg in messages.iter().filter(|m| selection.matches(m)) {
            let day = msg.weekday().num_days_from_monday();
            let hour = msg.hour();
            days.insert(day);
            hours.insert(hour);
            *cells.entry((day, hour)).or_default() += 1;
        }

        let counts = days
            .iter()
            .map(|&day| {
                hours
                    .iter()
                    .map(|&hour| cells.get(&(day, hour)).copied().unwrap_or(0))
                    .collect()
            })
            .collect();

        Heatmap {
            days: days.iter().map(|&d| DAY_NAMES[d as usize]).collect(),
            periods: hours.iter().map(|&h| hour_bucket(h)).collect(),
            counts,
        }
    }
}
