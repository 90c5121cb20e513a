//! Weekday buckets for section listings.

use chrono::{NaiveTime, Timelike};
use db::models::section::{Model as SectionModel, Weekday};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Clock formats tried, in order, when reading a section's time label.
const TIME_FORMATS: [&str; 4] = ["%H:%M", "%H:%M:%S", "%I:%M %p", "%I:%M%p"];

/// Sections grouped by the day they meet on.
///
/// All seven days are always present, iterated Sunday through Saturday; a day
/// without sections maps to an empty list. Each list is in time order.
#[derive(Debug, Clone, Serialize)]
pub struct SectionDays {
    days: BTreeMap<Weekday, Vec<SectionModel>>,
}

impl Default for SectionDays {
    fn default() -> Self {
        Self {
            days: Weekday::ALL.iter().map(|day| (*day, Vec::new())).collect(),
        }
    }
}

impl SectionDays {
    pub fn from_sections<I>(sections: I) -> Self
    where
        I: IntoIterator<Item = SectionModel>,
    {
        let mut grouped = Self::default();
        for section in sections {
            grouped.days.entry(section.weekday).or_default().push(section);
        }
        for bucket in grouped.days.values_mut() {
            bucket.sort_by(compare_by_time);
        }
        grouped
    }

    /// Sections meeting on `day`, in time order.
    pub fn day(&self, day: Weekday) -> &[SectionModel] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[SectionModel])> {
        self.days.iter().map(|(day, sections)| (*day, sections.as_slice()))
    }

    pub fn total(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Seconds since midnight when `label` reads as a clock time.
pub fn clock_seconds(label: &str) -> Option<u32> {
    let label = label.trim();
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(label, fmt).ok())
        .map(|t| t.num_seconds_from_midnight())
}

/// Clock times first, in chronological order; other labels after them,
/// lexicographically. Ties fall back to the id so the order is total.
fn compare_by_time(a: &SectionModel, b: &SectionModel) -> Ordering {
    let key = |s: &SectionModel| {
        let secs = clock_seconds(&s.time);
        (secs.is_none(), secs.unwrap_or(0))
    };
    key(a)
        .cmp(&key(b))
        .then_with(|| a.time.cmp(&b.time))
        .then_with(|| a.id.cmp(&b.id))
}
