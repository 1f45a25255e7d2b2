use crate::error::QueryError;
use crate::field::{Queryable, SortDirection};
use crate::filter::{ALL, DateRange, filter_by_category, filter_by_date_range, filter_by_search};
use crate::page::{Page, paginate};
use crate::sort::sort_by;

pub const DEFAULT_PAGE_SIZE: usize = 25;

/// The state behind one list view: filter → sort → paginate.
///
/// Every setter that changes which rows match, or their order, sends the view
/// back to the first page.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery<F> {
    search: String,
    search_fields: Vec<F>,
    categories: Vec<(F, String)>,
    date_ranges: Vec<(F, DateRange)>,
    sort: Option<(F, SortDirection)>,
    page_index: usize,
    page_size: usize,
}

impl<F: Copy + PartialEq + std::fmt::Debug> ListQuery<F> {
    pub fn new(search_fields: impl Into<Vec<F>>) -> Self {
        Self {
            search: String::new(),
            search_fields: search_fields.into(),
            categories: Vec::new(),
            date_ranges: Vec::new(),
            sort: None,
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort(&self) -> Option<(F, SortDirection)> {
        self.sort
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
        self.page_index = 0;
    }

    /// Filter `field` to `value`; [`ALL`] clears the filter for that field.
    pub fn set_category(&mut self, field: F, value: impl Into<String>) {
        let value = value.into();
        self.categories.retain(|(f, _)| *f != field);
        if value != ALL {
            self.categories.push((field, value));
        }
        self.page_index = 0;
    }

    pub fn set_date_range(&mut self, field: F, range: DateRange) {
        self.date_ranges.retain(|(f, _)| *f != field);
        if !range.is_unbounded() {
            self.date_ranges.push((field, range));
        }
        self.page_index = 0;
    }

    pub fn set_sort(&mut self, field: F, direction: SortDirection) {
        self.sort = Some((field, direction));
        self.page_index = 0;
    }

    /// Column-header click: flip the direction on the active column, or start
    /// a new column ascending.
    pub fn toggle_sort(&mut self, field: F) {
        let direction = match self.sort {
            Some((current, direction)) if current == field => direction.flipped(),
            _ => SortDirection::Asc,
        };
        self.set_sort(field, direction);
    }

    pub fn set_page(&mut self, page_index: usize) {
        self.page_index = page_index;
    }

    pub fn set_page_size(&mut self, page_size: usize) -> Result<(), QueryError> {
        if page_size == 0 {
            return Err(QueryError::InvalidPageSize);
        }
        self.page_size = page_size;
        self.page_index = 0;
        Ok(())
    }

    /// Run the query over `records` without touching them.
    pub fn run<'a, T>(&self, records: &'a [T]) -> Page<'a, T>
    where
        T: Queryable<Field = F>,
    {
        let mut rows = filter_by_search(records, &self.search, &self.search_fields);
        for (field, value) in &self.categories {
            rows = filter_by_category(rows, *field, value);
        }
        for (field, range) in &self.date_ranges {
            rows = filter_by_date_range(rows, *field, range);
        }
        if let Some((field, direction)) = self.sort {
            rows = sort_by(rows, field, direction);
        }

        let total = rows.len();
        let items = paginate(&rows, self.page_index, self.page_size).to_vec();
        tracing::debug!(
            total,
            page_index = self.page_index,
            page_size = self.page_size,
            returned = items.len(),
            "list query"
        );

        Page {
            items,
            total,
            page_index: self.page_index,
            page_size: self.page_size,
        }
    }
}
