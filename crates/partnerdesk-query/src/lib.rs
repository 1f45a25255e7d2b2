//! partnerdesk-query
//!
//! In-memory list views: search, category and date filters, stable sorting
//! and pagination over candidate, affiliation, transaction and claim lists.
//! Source collections are never mutated; every step returns borrowed rows.

pub mod error;
pub mod field;
pub mod fields;
pub mod filter;
pub mod list;
pub mod page;
pub mod sort;

pub use field::{FieldValue, Queryable, SortDirection};
pub use filter::{ALL, DateRange, filter_by_category, filter_by_date_range, filter_by_search};
pub use list::{DEFAULT_PAGE_SIZE, ListQuery};
pub use page::{Page, paginate};
pub use sort::sort_by;
