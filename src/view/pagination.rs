//! Fixed-size pages over an ordered collection.
//!
//! Pages are numbered from 1. An empty collection still has one (empty)
//! page, so the current page is always a valid page number.

use std::ops::Range;

use serde::Serialize;
use tracing::debug;

use crate::view::{ViewError, ViewResult};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Number of pages needed for `total_items`, never less than 1.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size.max(1)).max(1)
}

/// Page navigation state of one list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    page: usize,
    page_size: usize,
    total_items: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            total_items: 0,
        }
    }
}

impl Paginator {
    pub fn new(page_size: usize) -> ViewResult<Self> {
        if page_size == 0 {
            return Err(ViewError::InvalidPageSize);
        }
        Ok(Self {
            page: 1,
            page_size,
            total_items: 0,
        })
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.page_size)
    }

    /// Record a new collection length, pulling the current page back into
    /// range if the collection shrank below it.
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        let last = self.total_pages();
        if self.page > last {
            debug!(from = self.page, to = last, total_items, "Clamping page into range");
            self.page = last;
        }
    }

    /// Copy of this paginator synced with a collection of `total_items`.
    ///
    /// Reactive callers derive the visible paginator with this and store the
    /// result back, so a clamped page stays clamped if the collection grows
    /// again.
    pub fn resized(&self, total_items: usize) -> Self {
        let mut resized = self.clone();
        resized.set_total_items(total_items);
        resized
    }

    /// Jump to `page`. Pages outside `1..=total_pages` are rejected and leave
    /// the current page untouched.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if page == 0 || page > self.total_pages() {
            return false;
        }
        self.page = page;
        true
    }

    pub fn next_page(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.page += 1;
        true
    }

    pub fn prev_page(&mut self) -> bool {
        if !self.has_prev() {
            return false;
        }
        self.page -= 1;
        true
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Item positions covered by the current page.
    pub fn range(&self) -> Range<usize> {
        let start = ((self.page - 1) * self.page_size).min(self.total_items);
        let end = (start + self.page_size).min(self.total_items);
        start..end
    }

    /// Take the current page out of `items`, first syncing the total with
    /// `items.len()`.
    pub fn slice<'a, T>(&mut self, items: &'a [T]) -> &'a [T] {
        self.set_total_items(items.len());
        &items[self.range()]
    }

    /// Page numbers to show as buttons: at most `width` consecutive pages,
    /// centered on the current page where the edges allow it.
    pub fn page_window(&self, width: usize) -> Vec<usize> {
        let total = self.total_pages();
        let width = width.min(total);
        if width == 0 {
            return Vec::new();
        }

        let mut start = self.page.saturating_sub(width / 2).max(1);
        if start + width - 1 > total {
            start = total + 1 - width;
        }
        (start..start + width).collect()
    }

    /// "Showing 11 - 20 of 23"
    pub fn summary(&self) -> String {
        summary_line(&self.range(), self.total_items)
    }

    /// Materialize the current page of `items`, which must already be the
    /// collection this paginator was last synced with.
    pub fn page_of<T>(&self, items: impl IntoIterator<Item = T>) -> Page<T> {
        let range = self.range();
        Page {
            items: items
                .into_iter()
                .skip(range.start)
                .take(range.len())
                .collect(),
            page: self.page,
            total_pages: self.total_pages(),
            total_items: self.total_items,
            page_size: self.page_size,
        }
    }
}

fn summary_line(range: &Range<usize>, total_items: usize) -> String {
    if range.is_empty() {
        return format!("Showing 0 - 0 of {}", total_items);
    }
    format!(
        "Showing {} - {} of {}",
        range.start + 1,
        range.end,
        total_items
    )
}

/// One rendered page of a list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    #[serde(skip)]
    pub page_size: usize,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn summary(&self) -> String {
        let start = (self.page.saturating_sub(1) * self.page_size).min(self.total_items);
        summary_line(&(start..start + self.items.len()), self.total_items)
    }
}

/// One-shot pagination: clamp `page` into range and slice `items`.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> ViewResult<Page<&T>> {
    let mut paginator = Paginator::new(page_size)?;
    paginator.set_total_items(items.len());
    paginator.page = page.clamp(1, paginator.total_pages());
    Ok(paginator.page_of(items))
}
