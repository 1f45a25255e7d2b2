use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::field::Queryable;

/// Category value that disables a category filter.
pub const ALL: &str = "all";

/// Inclusive instant range; a missing bound is open on that side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DateRange {
    #[serde(default)]
    pub from: Option<jiff::Timestamp>,
    #[serde(default)]
    pub to: Option<jiff::Timestamp>,
}

impl DateRange {
    pub fn new(from: Option<jiff::Timestamp>, to: Option<jiff::Timestamp>) -> Self {
        Self { from, to }
    }

    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    pub fn contains(&self, at: jiff::Timestamp) -> bool {
        self.from.is_none_or(|from| at >= from) && self.to.is_none_or(|to| at <= to)
    }
}

/// Case-insensitive substring match over any of `fields`.
///
/// A blank query keeps every row in its original order. Otherwise the query
/// is matched as typed, surrounding whitespace included.
pub fn filter_by_search<'a, T>(
    records: impl IntoIterator<Item = &'a T>,
    query: &str,
    fields: &[T::Field],
) -> Vec<&'a T>
where
    T: Queryable + 'a,
{
    if query.trim().is_empty() {
        return records.into_iter().collect();
    }
    let needle = query.to_lowercase();

    records
        .into_iter()
        .filter(|record| {
            fields.iter().any(|&f| {
                record
                    .field(f)
                    .as_text()
                    .is_some_and(|text| text.to_lowercase().contains(&needle))
            })
        })
        .collect()
}

/// Exact-match filter on one column; [`ALL`] keeps every row.
pub fn filter_by_category<'a, T>(
    records: impl IntoIterator<Item = &'a T>,
    field: T::Field,
    value: &str,
) -> Vec<&'a T>
where
    T: Queryable + 'a,
{
    if value == ALL {
        return records.into_iter().collect();
    }
    records
        .into_iter()
        .filter(|record| record.field(field).equals(value))
        .collect()
}

/// Keep rows whose `field` instant falls inside `range`.
///
/// Rows without a value for `field` only survive an unbounded range.
pub fn filter_by_date_range<'a, T>(
    records: impl IntoIterator<Item = &'a T>,
    field: T::Field,
    range: &DateRange,
) -> Vec<&'a T>
where
    T: Queryable + 'a,
{
    if range.is_unbounded() {
        return records.into_iter().collect();
    }
    records
        .into_iter()
        .filter(|record| {
            record
                .field(field)
                .as_instant()
                .is_some_and(|at| range.contains(at))
        })
        .collect()
}
