//! Paginated, filtered list state
//!
//! A list screen owns a [`ListQuery`] (page, search text, discrete filters)
//! and a [`ListState`] (the rows of the last applied fetch). The backend is
//! the source of truth for ordering and page count; nothing is cached.

use std::collections::BTreeMap;

use shared::response::PaginatedResponse;

use crate::config::DEFAULT_PAGE_SIZE;

/// Query sent with every list fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    page: u32,
    limit: u32,
    search: String,
    filters: BTreeMap<String, String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ListQuery {
    pub fn new(limit: u32) -> Self {
        Self {
            page: 1,
            limit: limit.max(1),
            search: String::new(),
            filters: BTreeMap::new(),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn filter(&self, key: &str) -> Option<&str> {
        self.filters.get(key).map(String::as_str)
    }

    /// Replace the search text; always returns to page 1
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    /// Set a filter value; an empty value clears it. Always returns to page 1.
    pub fn set_filter(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if value.is_empty() {
            self.filters.remove(&key);
        } else {
            self.filters.insert(key, value);
        }
        self.page = 1;
    }

    pub fn clear_filter(&mut self, key: &str) {
        self.set_filter(key, "");
    }

    /// Builder form of [`set_filter`](Self::set_filter)
    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_filter(key, value);
        self
    }

    /// Jump to `page`, clamped to `[1, total_pages]`
    pub fn go_to(&mut self, page: u32, total_pages: u32) {
        self.page = page.clamp(1, total_pages.max(1));
    }

    /// Step forward; returns false when already on the last page
    pub fn next(&mut self, total_pages: u32) -> bool {
        if self.page >= total_pages.max(1) {
            return false;
        }
        self.page += 1;
        true
    }

    /// Step back; returns false when already on page 1
    pub fn prev(&mut self) -> bool {
        if self.page <= 1 {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Query-string pairs: `page`, `limit`, `search`, `filters[<key>]`
    ///
    /// Empty search text and empty filters are omitted.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_string(), self.page.to_string()),
            ("limit".to_string(), self.limit.to_string()),
        ];
        let search = self.search.trim();
        if !search.is_empty() {
            pairs.push(("search".to_string(), search.to_string()));
        }
        for (key, value) in &self.filters {
            pairs.push((format!("filters[{key}]"), value.clone()));
        }
        pairs
    }
}

/// Identifies one fetch; only the latest ticket may update the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Rows and page count of the last applied fetch
#[derive(Debug, Clone)]
pub struct ListState<T> {
    items: Vec<T>,
    total_pages: u32,
    total_data: u64,
    loading: bool,
    error: Option<String>,
    latest: u64,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_pages: 1,
            total_data: 0,
            loading: false,
            error: None,
            latest: 0,
        }
    }
}

impl<T> ListState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn total_data(&self) -> u64 {
        self.total_data
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Start a fetch. Any ticket issued earlier becomes stale.
    pub fn begin(&mut self) -> FetchTicket {
        self.latest += 1;
        self.loading = true;
        self.error = None;
        FetchTicket(self.latest)
    }

    /// Apply a fetch result; returns false (and changes nothing) for a stale ticket
    ///
    /// A failed fetch clears the rows and resets the page count to 1.
    pub fn finish(&mut self, ticket: FetchTicket, result: Result<PaginatedResponse<T>, String>) -> bool {
        if ticket.0 != self.latest {
            tracing::debug!(ticket = ticket.0, latest = self.latest, "Discarding stale list response");
            return false;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.total_pages = page.page_count();
                self.total_data = page.total_data;
                self.items = page.data;
                self.error = None;
            }
            Err(message) => {
                self.items.clear();
                self.total_pages = 1;
                self.total_data = 0;
                self.error = Some(message);
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_and_filter_reset_page() {
        let mut query = ListQuery::new(10);
        query.go_to(3, 5);
        assert_eq!(query.page(), 3);

        query.set_search("avanza");
        assert_eq!(query.page(), 1);

        query.go_to(4, 5);
        query.set_filter("status", "pending");
        assert_eq!(query.page(), 1);

        query.go_to(2, 5);
        query.clear_filter("status");
        assert_eq!(query.page(), 1);
        assert_eq!(query.filter("status"), None);
    }

    #[test]
    fn test_query_pairs() {
        let mut query = ListQuery::new(10).with_filter("status", "on progress");
        query.set_search("  oil ");
        let pairs = query.to_query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("page".to_string(), "1".to_string()),
                ("limit".to_string(), "10".to_string()),
                ("search".to_string(), "oil".to_string()),
                ("filters[status]".to_string(), "on progress".to_string()),
            ]
        );

        let pairs = ListQuery::new(5).to_query_pairs();
        assert_eq!(pairs.len(), 2);
    }

    #[test]
    fn test_paging_bounds() {
        let mut query = ListQuery::new(10);
        assert!(!query.prev());
        assert!(query.next(2));
        assert!(!query.next(2));
        assert_eq!(query.page(), 2);
        query.go_to(99, 3);
        assert_eq!(query.page(), 3);
        query.go_to(0, 3);
        assert_eq!(query.page(), 1);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state: ListState<&str> = ListState::new();
        let first = state.begin();
        let second = state.begin();

        assert!(state.finish(second, Ok(PaginatedResponse::new(vec!["new"], 1, 1, 10))));
        assert!(!state.finish(first, Ok(PaginatedResponse::new(vec!["old"], 1, 1, 10))));
        assert_eq!(state.items(), &["new"]);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_failed_fetch_clears_rows() {
        let mut state: ListState<&str> = ListState::new();
        let ticket = state.begin();
        state.finish(ticket, Ok(PaginatedResponse::new(vec!["a", "b"], 25, 1, 10)));
        assert_eq!(state.total_pages(), 3);

        let ticket = state.begin();
        state.finish(ticket, Err("Failed to fetch bookings.".into()));
        assert!(state.is_empty());
        assert_eq!(state.total_pages(), 1);
        assert_eq!(state.error(), Some("Failed to fetch bookings."));
    }
}
