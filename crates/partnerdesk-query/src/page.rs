/// The slice `[page_index * page_size, page_index * page_size + page_size)`.
///
/// Pages past the end, and a zero page size, yield an empty slice.
pub fn paginate<U>(items: &[U], page_index: usize, page_size: usize) -> &[U] {
    let Some(start) = page_index.checked_mul(page_size) else {
        return &[];
    };
    if page_size == 0 || start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// One rendered page plus what the pager needs.
#[derive(Debug, Clone)]
pub struct Page<'a, T> {
    pub items: Vec<&'a T>,
    /// Rows matching the filters, across all pages.
    pub total: usize,
    pub page_index: usize,
    pub page_size: usize,
}

impl<T> Page<'_, T> {
    pub fn page_count(&self) -> usize {
        if self.page_size == 0 {
            0
        } else {
            self.total.div_ceil(self.page_size)
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn has_next(&self) -> bool {
        self.page_index.saturating_add(1) < self.page_count()
    }
}
