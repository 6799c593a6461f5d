//! Monthly and daily message timelines.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use super::Analyzer;
use crate::Message;
use crate::core::filter::Selection;
use crate::message::MONTH_NAMES;

/// Messages sent in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyCount {
    pub year: i32,
    pub month_num: u32,
    pub month: &'static str,
    /// `"January-2024"`
    pub label: String,
    pub count: usize,
}

/// Messages sent on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: usize,
}

impl Analyzer {
    fn timeline_messages<'a>(
        &'a self,
        selection: &'a Selection,
        messages: &'a [Message],
    ) -> impl Iterator<Item = &'a Message> + 'a {
        messages
            .iter()
            .filter(move |m| selection.matches(m) && m.timestamp <= self.as_of)
    }

    /// Message counts per (year, month), oldest first.
    pub fn monthly_timeline(&self, selection: &Selection, messages: &[Message]) -> Vec<MonthlyCount> {
        let mut months: BTreeMap<(i32, u32), usize> = BTreeMap::new();
        for msg in self.timeline_messages(selection, messages) {
            *months.entry((msg.year(), msg.month_num())).or_default() += 1;
        }

        months
            .into_iter()
            .map(|((year, month_num), count)| {
                let month = MONTH_NAMES[(month_num - 1) as usize];
                MonthlyCount {
                    year,
                    month_num,
                    month,
                    label: format!("{month}-{year}"),
                    count,
                }
            })
            .collect()
    }

    /// Message counts per day, oldest first. Days without messages are absent.
    pub fn daily_timeline(&self, selection: &Selection, messages: &[Message]) -> Vec<DailyCount> {
        let mut days: BTreeMap<NaiveDate, usize> = BTreeMap::new();
        for msg in self.timeline_messages(selection, messages) {
            *days.entry(msg.only_date()).or_default() += 1;
        }

        days.into_iter()
            .map(|(date, count)| DailyCount { date, count })
            .collect()
    }
}
