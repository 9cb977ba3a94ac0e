//! Search -> Sort -> Paginate over a screen's collection.

use std::fmt;

use tracing::debug;

use crate::view::pagination::{Page, Paginator};
use crate::view::search::SearchState;
use crate::view::sort::{self, SortState};
use crate::view::{FieldValue, Record, SortOrder, ViewResult};

type Predicate<R> = Box<dyn Fn(&R) -> bool>;

/// A record paired with its position in the base collection, so the stages
/// can run on positions instead of cloned records.
struct Indexed<'a, R> {
    index: usize,
    record: &'a R,
}

impl<R: Record> Record for Indexed<'_, R> {
    type Field = R::Field;

    fn field(&self, field: Self::Field) -> FieldValue<'_> {
        self.record.field(field)
    }
}

/// State of one list screen.
///
/// Each stage result is cached. Changing the data, the query or the
/// predicate re-runs search and sort; changing the sort re-runs sort only.
/// The current page is clamped whenever the matched set changes size.
pub struct ListView<R: Record> {
    data: Vec<R>,
    search_fields: Vec<R::Field>,
    search: SearchState,
    sort: SortState<R::Field>,
    predicate: Option<Predicate<R>>,
    paginator: Paginator,
    filtered: Vec<usize>,
    ordered: Vec<usize>,
}

impl<R: Record> ListView<R> {
    pub fn new(
        data: Vec<R>,
        search_fields: Vec<R::Field>,
        sort: SortState<R::Field>,
        page_size: usize,
    ) -> ViewResult<Self> {
        let mut view = Self {
            data,
            search_fields,
            search: SearchState::new(),
            sort,
            predicate: None,
            paginator: Paginator::new(page_size)?,
            filtered: Vec::new(),
            ordered: Vec::new(),
        };
        view.refilter();
        Ok(view)
    }

    pub fn data(&self) -> &[R] {
        &self.data
    }

    pub fn search_fields(&self) -> &[R::Field] {
        &self.search_fields
    }

    pub fn query(&self) -> &str {
        self.search.query()
    }

    pub fn sort(&self) -> &SortState<R::Field> {
        &self.sort
    }

    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    /// Number of records left after the predicate and the search.
    pub fn matched(&self) -> usize {
        self.ordered.len()
    }

    /// Swap in a freshly loaded collection.
    pub fn replace_data(&mut self, data: Vec<R>) {
        self.data = data;
        self.refilter();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query == self.search.query() {
            return;
        }
        self.search.set_query(query);
        self.refilter();
    }

    pub fn clear_query(&mut self) {
        self.set_query(String::new());
    }

    /// Restrict the collection before searching, e.g. to non-deleted rows.
    pub fn set_predicate(&mut self, predicate: impl Fn(&R) -> bool + 'static) {
        self.predicate = Some(Box::new(predicate));
        self.refilter();
    }

    pub fn clear_predicate(&mut self) {
        if self.predicate.take().is_some() {
            self.refilter();
        }
    }

    pub fn toggle_sort(&mut self, key: R::Field) {
        self.sort.toggle(key);
        self.resort();
    }

    pub fn set_sort(&mut self, key: Option<R::Field>, order: SortOrder) {
        self.sort.set(key, order);
        self.resort();
    }

    pub fn go_to_page(&mut self, page: usize) -> bool {
        self.paginator.go_to_page(page)
    }

    pub fn next_page(&mut self) -> bool {
        self.paginator.next_page()
    }

    pub fn prev_page(&mut self) -> bool {
        self.paginator.prev_page()
    }

    /// Clear the query, restore the default sort and return to page 1.
    /// The predicate is left in place.
    pub fn reset(&mut self) {
        self.search.clear();
        self.sort.reset();
        self.paginator.reset();
        self.refilter();
    }

    /// Records on the current page.
    pub fn rows(&self) -> Vec<&R> {
        self.ordered[self.paginator.range()]
            .iter()
            .map(|&index| &self.data[index])
            .collect()
    }

    pub fn page(&self) -> Page<&R> {
        self.paginator
            .page_of(self.ordered.iter().map(|&index| &self.data[index]))
    }

    fn refilter(&mut self) {
        let candidates = self
            .data
            .iter()
            .enumerate()
            .filter(|&(_, record)| self.predicate.as_ref().is_none_or(|keep| keep(record)))
            .map(|(index, record)| Indexed { index, record });

        self.filtered = self
            .search
            .apply(candidates, &self.search_fields)
            .into_iter()
            .map(|item| item.index)
            .collect();

        debug!(
            total = self.data.len(),
            matched = self.filtered.len(),
            query = self.search.query(),
            "Search stage recomputed"
        );
        self.resort();
    }

    fn resort(&mut self) {
        let candidates = self.filtered.iter().map(|&index| Indexed {
            index,
            record: &self.data[index],
        });

        self.ordered = sort::sort_by_field(candidates, self.sort.key(), self.sort.order())
            .into_iter()
            .map(|item| item.index)
            .collect();
        self.paginator.set_total_items(self.ordered.len());
    }
}

impl<R: Record> fmt::Debug for ListView<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListView")
            .field("records", &self.data.len())
            .field("query", &self.search.query())
            .field("sort", &self.sort)
            .field("has_predicate", &self.predicate.is_some())
            .field("paginator", &self.paginator)
            .finish()
    }
}
