use std::cmp::Ordering;

use crate::field::{FieldValue, Queryable, SortDirection};

/// Stable sort by one column. Equal keys keep their incoming order in both
/// directions, and empty values go last.
pub fn sort_by<'a, T>(
    mut records: Vec<&'a T>,
    field: T::Field,
    direction: SortDirection,
) -> Vec<&'a T>
where
    T: Queryable + 'a,
{
    records.sort_by(|a, b| {
        let (a, b) = (a.field(field), b.field(field));
        match (&a, &b) {
            (FieldValue::Empty, FieldValue::Empty) => Ordering::Equal,
            (FieldValue::Empty, _) => Ordering::Greater,
            (_, FieldValue::Empty) => Ordering::Less,
            _ => match direction {
                SortDirection::Asc => a.compare(&b),
                SortDirection::Desc => b.compare(&a),
            },
        }
    });
    records
}
