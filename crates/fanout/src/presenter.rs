//! Paginated presenter - fixed-size slicing of a resolved, ordered list.
//!
//! Holds only a borrowed slice, so a page sequence is lazy, finite and
//! restartable: navigating to another page of an already-resolved list is a
//! re-slice, not a re-resolution.

use contracts::NotifyError;

/// One display page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Zero-based page index
    pub index: usize,
    /// Up to `page_size` items; the last page may be shorter
    pub items: Vec<T>,
}

/// Pagination over an ordered slice
#[derive(Debug, Clone, Copy)]
pub struct Paginated<'a, T> {
    items: &'a [T],
    page_size: usize,
}

impl<'a, T: Clone> Paginated<'a, T> {
    /// Create a pagination view
    ///
    /// # Errors
    /// `InvalidArgument` if `page_size` is zero
    pub fn new(items: &'a [T], page_size: usize) -> Result<Self, NotifyError> {
        if page_size == 0 {
            return Err(NotifyError::invalid_argument("page size must be > 0"));
        }
        Ok(Self { items, page_size })
    }

    /// Number of pages; zero for empty input
    pub fn page_count(&self) -> usize {
        self.items.len().div_ceil(self.page_size)
    }

    /// Slice out one page, `None` if the index is past the end
    pub fn page(&self, index: usize) -> Option<Page<T>> {
        let start = index.checked_mul(self.page_size)?;
        if start >= self.items.len() {
            return None;
        }
        let end = (start + self.page_size).min(self.items.len());
        Some(Page {
            index,
            items: self.items[start..end].to_vec(),
        })
    }

    /// Iterate all pages in order
    pub fn iter(&self) -> impl Iterator<Item = Page<T>> + '_ {
        (0..self.page_count()).filter_map(move |i| self.page(i))
    }
}
