use chrono::{NaiveDate, TimeDelta};
use std::mem::replace;

/// An inclusive calendar range `[start, end]`.
///
/// Also iterates each date from the start date through the end date.
/// A range with `start > end` is empty: it contains nothing and yields nothing.
#[derive(Clone, Eq, PartialEq, Copy, Debug)]
pub struct DateRange(pub NaiveDate, pub NaiveDate);

impl DateRange {
    pub fn start(&self) -> NaiveDate {
        self.0
    }

    pub fn end(&self) -> NaiveDate {
        self.1
    }

    pub fn is_empty(&self) -> bool {
        self.0 > self.1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.0 <= date && date <= self.1
    }

    /// Reorder a reversed pick and pull both ends inside `bounds`.
    ///
    /// Used on raw date-picker input so the filter always sees `start <= end`
    /// within the loaded data.
    pub fn clamp_to(self, bounds: DateRange) -> DateRange {
        let (a, b) = if self.0 <= self.1 {
            (self.0, self.1)
        } else {
            (self.1, self.0)
        };
        DateRange(
            a.clamp(bounds.0, bounds.1),
            b.clamp(bounds.0, bounds.1),
        )
    }
}

impl Iterator for DateRange {
    type Item = NaiveDate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 <= self.1 {
            let next = self.0 + TimeDelta::days(1);
            Some(replace(&mut self.0, next))
        } else {
            None
        }
    }
}
