use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::QueryError;

/// A single field read off a row, typed for comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
    Instant(jiff::Timestamp),
    /// Optional field with no value (e.g. `completed_at` on an unfinished test).
    Empty,
}

/// A row type the list engine can filter and sort.
///
/// Each row type names its columns with its own `Field` enum, so a sort key
/// from one list cannot be applied to another.
pub trait Queryable {
    type Field: Copy + PartialEq + fmt::Debug;

    fn field(&self, field: Self::Field) -> FieldValue<'_>;
}

impl<'a> FieldValue<'a> {
    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            FieldValue::Text(s) => Some(*s),
            _ => None,
        }
    }

    pub fn as_instant(&self) -> Option<jiff::Timestamp> {
        match self {
            FieldValue::Instant(ts) => Some(*ts),
            _ => None,
        }
    }

    /// Exact equality against a filter value coming from the UI.
    pub fn equals(&self, value: &str) -> bool {
        match self {
            FieldValue::Text(s) => *s == value,
            FieldValue::Number(n) => value.parse::<f64>().is_ok_and(|v| v == *n),
            FieldValue::Instant(ts) => value.parse::<jiff::Timestamp>().is_ok_and(|v| v == *ts),
            FieldValue::Empty => false,
        }
    }

    /// Ascending order for two values of the same column.
    ///
    /// Empty values always sort after present ones, whatever the direction;
    /// callers handle that case before applying the direction.
    pub(crate) fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (FieldValue::Number(a), FieldValue::Number(b)) => a.total_cmp(b),
            (FieldValue::Instant(a), FieldValue::Instant(b)) => a.cmp(b),
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            FieldValue::Number(_) => 0,
            FieldValue::Instant(_) => 1,
            FieldValue::Text(_) => 2,
            FieldValue::Empty => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

impl FromStr for SortDirection {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(QueryError::UnknownDirection(other.to_string())),
        }
    }
}
