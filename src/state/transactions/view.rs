//! Transaction list state: loaded set, load limit, search and type filter.
//!
//! [`TransactionView`] is a synchronous state machine. Operations that need
//! the network return a [`FetchRequest`] instead of performing it; the caller
//! runs the request and hands the outcome back through
//! [`TransactionView::complete`]. While a request is outstanding every other
//! fetching operation is a silent no-op, so at most one request is ever in
//! flight and responses are applied in one synchronous step.

use std::fmt;

use super::controls::ViewControls;
use super::request::{FetchOrigin, FetchRequest};
use crate::client::SearchQuery;
use crate::constants::{DEFAULT_LOAD_LIMIT, LOAD_MORE_STEP, MAX_LOAD_LIMIT};
use crate::domain::{CassaError, Transaction, TransactionPage, TypeFilter};

// ============================================================================
// Listing
// ============================================================================

/// What the transaction table currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Listing {
    /// Nothing has been fetched yet.
    #[default]
    Empty,
    /// The whole loaded set.
    Loaded,
    /// Indices into the loaded set that passed a local type filter.
    Filtered(Vec<usize>),
    /// The last fetch failed.
    Failed {
        /// User-facing error text.
        message: String,
        /// Whether the failed fetch was a search.
        during_search: bool,
    },
}

// ============================================================================
// Summary
// ============================================================================

/// One-line description of the current listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Summary {
    /// Nothing to report yet.
    #[default]
    None,
    /// Result of a recent-transactions fetch.
    Loaded {
        /// Transactions received.
        count: usize,
        /// Limit requested.
        limit: u32,
    },
    /// Result of a search.
    Found {
        /// Matches reported by the server.
        total: usize,
        /// Limit the server applied, when it says so.
        limit: Option<u32>,
        /// The search term.
        query: String,
    },
    /// Result of a local type filter.
    Filtered {
        /// Transactions shown.
        count: usize,
        /// Current load limit.
        limit: u32,
    },
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::Loaded { count, limit } => {
                write!(f, "Loaded: {count} transactions (limit: {limit})")
            }
            Self::Found { total: 0, query, .. } => {
                write!(f, "No transactions found for \"{query}\"")
            }
            Self::Found {
                total,
                limit,
                query,
            } => {
                write!(f, "Found: {total} transactions")?;
                if let Some(limit) = limit {
                    write!(f, " (limit: {limit})")?;
                }
                write!(f, " for \"{query}\"")
            }
            Self::Filtered { count, limit } => {
                write!(f, "Filtered: {count} transactions (limit: {limit})")
            }
        }
    }
}

// ============================================================================
// Search Input Outcome
// ============================================================================

/// What the caller must do after the search box changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchInput {
    /// Schedule a debounced search for this term, replacing any pending one.
    Debounce(String),
    /// The box was cleared: drop any pending search and run this fetch now.
    Cleared(Option<FetchRequest>),
}

// ============================================================================
// Transaction View
// ============================================================================

/// State of the admin transaction list.
#[derive(Debug)]
pub struct TransactionView {
    loaded: Vec<Transaction>,
    listing: Listing,
    load_limit: u32,
    has_more: bool,
    is_loading: bool,
    ceiling_reached: bool,
    summary: Summary,
    controls: ViewControls,
}

impl Default for TransactionView {
    fn default() -> Self {
        Self {
            loaded: Vec::new(),
            listing: Listing::Empty,
            load_limit: DEFAULT_LOAD_LIMIT,
            has_more: true,
            is_loading: false,
            ceiling_reached: false,
            summary: Summary::None,
            controls: ViewControls::default(),
        }
    }
}

impl TransactionView {
    /// Creates a view with default limit and no data.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Transactions from the last successful fetch, in server order.
    #[must_use]
    pub fn loaded(&self) -> &[Transaction] {
        &self.loaded
    }

    /// Transactions the table should show right now.
    #[must_use]
    pub fn visible(&self) -> Vec<&Transaction> {
        match &self.listing {
            Listing::Loaded => self.loaded.iter().collect(),
            Listing::Filtered(indices) => indices
                .iter()
                .filter_map(|&index| self.loaded.get(index))
                .collect(),
            Listing::Empty | Listing::Failed { .. } => Vec::new(),
        }
    }

    /// Current listing.
    #[must_use]
    pub const fn listing(&self) -> &Listing {
        &self.listing
    }

    /// Summary of the current listing.
    #[must_use]
    pub const fn summary(&self) -> &Summary {
        &self.summary
    }

    /// Controls bar state.
    #[must_use]
    pub const fn controls(&self) -> &ViewControls {
        &self.controls
    }

    /// Limit of the last successful fetch.
    #[must_use]
    pub const fn load_limit(&self) -> u32 {
        self.load_limit
    }

    /// Whether more data may exist behind the current limit.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.has_more
    }

    /// Whether a fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Whether "load more" hit the ceiling during this session.
    #[must_use]
    pub const fn ceiling_reached(&self) -> bool {
        self.ceiling_reached
    }

    /// Trimmed search box text.
    #[must_use]
    pub fn search_term(&self) -> &str {
        self.controls.search_input.trim()
    }

    // ========================================================================
    // Fetching Operations
    // ========================================================================

    /// Requests the most recent `limit` transactions.
    ///
    /// Returns `None` while another fetch is in flight.
    pub fn load_recent(&mut self, limit: u32) -> Option<FetchRequest> {
        self.load_recent_from(limit, FetchOrigin::Refresh)
    }

    /// Grows the limit by one step and re-runs the current query.
    ///
    /// # Errors
    ///
    /// Returns `CassaError::CeilingExceeded` when the grown limit would pass
    /// the ceiling, and on every attempt after that until [`Self::reset`].
    /// The load-more affordance stays hidden afterwards.
    pub fn load_more(&mut self) -> Result<Option<FetchRequest>, CassaError> {
        if self.ceiling_reached {
            return Err(CassaError::CeilingExceeded {
                max: MAX_LOAD_LIMIT,
            });
        }
        if self.is_loading || !self.controls.load_more_visible {
            return Ok(None);
        }

        let next = self.load_limit + LOAD_MORE_STEP;
        if next > MAX_LOAD_LIMIT {
            tracing::warn!(
                limit = self.load_limit,
                "load more rejected at ceiling {MAX_LOAD_LIMIT}"
            );
            self.ceiling_reached = true;
            self.controls.load_more_visible = false;
            return Err(CassaError::CeilingExceeded {
                max: MAX_LOAD_LIMIT,
            });
        }

        let term = self.search_term().to_string();
        Ok(self.search_from(&term, next, FetchOrigin::LoadMore))
    }

    /// Runs a server-side search; an empty term loads recent transactions.
    pub fn search(&mut self, term: &str, limit: u32) -> Option<FetchRequest> {
        self.search_from(term, limit, FetchOrigin::Search)
    }

    /// Runs the search a debounce timer fired for.
    ///
    /// A term that no longer matches the search box is stale and ignored.
    pub fn run_debounced_search(&mut self, term: &str) -> Option<FetchRequest> {
        if self.search_term() != term {
            tracing::debug!(term, "dropping stale debounced search");
            return None;
        }
        let limit = self.controls.limit.value();
        self.search(term, limit)
    }

    /// Records new search box text.
    pub fn search_input_changed(&mut self, text: impl Into<String>) -> SearchInput {
        self.controls.search_input = text.into();
        let term = self.search_term();
        if term.is_empty() {
            self.controls.limit.select(DEFAULT_LOAD_LIMIT);
            SearchInput::Cleared(self.load_recent(DEFAULT_LOAD_LIMIT))
        } else {
            SearchInput::Debounce(term.to_string())
        }
    }

    /// Applies a limit preset picked by the user.
    pub fn select_limit(&mut self, value: u32) -> Option<FetchRequest> {
        if self.is_loading || !self.controls.limit.select(value) {
            return None;
        }
        let term = self.search_term().to_string();
        self.search(&term, value)
    }

    /// Changes the type filter: searched locally without a term, on the
    /// server with one.
    pub fn change_filter(&mut self, filter: TypeFilter) -> Option<FetchRequest> {
        let term = self.search_term().to_string();
        if term.is_empty() {
            self.filter_locally(filter);
            return None;
        }
        if self.is_loading {
            return None;
        }
        self.controls.filter = filter;
        let limit = self.controls.limit.value();
        self.search(&term, limit)
    }

    /// Clears search and filter and reloads with the default limit.
    ///
    /// Does nothing while a fetch is in flight, so the controls never drift
    /// from the results that fetch brings back.
    pub fn reset(&mut self) -> Option<FetchRequest> {
        if self.is_loading {
            tracing::debug!("fetch already in flight, ignoring reset");
            return None;
        }
        self.controls.search_input.clear();
        self.controls.filter = TypeFilter::All;
        self.controls.limit.select(DEFAULT_LOAD_LIMIT);
        self.load_limit = DEFAULT_LOAD_LIMIT;
        self.has_more = true;
        self.ceiling_reached = false;
        if matches!(self.listing, Listing::Filtered(_)) {
            self.listing = Listing::Loaded;
        }
        self.refresh_load_more();
        self.load_recent(DEFAULT_LOAD_LIMIT)
    }

    // ========================================================================
    // Local Filter
    // ========================================================================

    /// Narrows the loaded set by type without touching the network.
    ///
    /// The loaded set itself is left alone; only the listing changes.
    pub fn filter_locally(&mut self, filter: TypeFilter) {
        self.controls.filter = filter;
        let limit = self.load_limit as usize;

        let count = if filter == TypeFilter::All {
            self.listing = Listing::Loaded;
            self.refresh_load_more();
            self.loaded.len().min(limit)
        } else {
            let indices: Vec<usize> = self
                .loaded
                .iter()
                .enumerate()
                .filter(|(_, txn)| filter.matches(txn.kind))
                .map(|(index, _)| index)
                .take(limit)
                .collect();
            let count = indices.len();
            self.listing = Listing::Filtered(indices);
            self.controls.load_more_visible = false;
            count
        };

        self.summary = Summary::Filtered {
            count,
            limit: self.load_limit,
        };
    }

    // ========================================================================
    // Completion
    // ========================================================================

    /// Applies the outcome of `request`.
    ///
    /// Returns a message for the user when a failure deserves more than the
    /// inline error, i.e. a failed "load more".
    pub fn complete(
        &mut self,
        request: &FetchRequest,
        result: Result<TransactionPage, CassaError>,
    ) -> Option<String> {
        self.is_loading = false;

        match result {
            Ok(page) => {
                self.apply_page(request, page);
                None
            }
            Err(error) => {
                tracing::warn!(
                    origin = ?request.origin(),
                    network = error.is_network_failure(),
                    "transaction fetch failed: {error}"
                );
                self.listing = Listing::Failed {
                    message: error.to_string(),
                    during_search: request.search_term().is_some(),
                };
                (request.origin() == FetchOrigin::LoadMore)
                    .then(|| format!("Failed to load more transactions: {error}"))
            }
        }
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn load_recent_from(&mut self, limit: u32, origin: FetchOrigin) -> Option<FetchRequest> {
        if self.is_loading {
            tracing::debug!("fetch already in flight, ignoring load");
            return None;
        }
        self.has_more = true;
        self.begin(FetchRequest::Recent {
            limit: limit.clamp(1, MAX_LOAD_LIMIT),
            origin,
        })
    }

    fn search_from(&mut self, term: &str, limit: u32, origin: FetchOrigin) -> Option<FetchRequest> {
        let term = term.trim();
        if term.is_empty() {
            return self.load_recent_from(limit, origin);
        }
        if self.is_loading {
            tracing::debug!("fetch already in flight, ignoring search");
            return None;
        }
        if self.search_term() != term {
            self.controls.search_input = term.to_string();
        }

        self.has_more = true;
        self.begin(FetchRequest::Search {
            query: SearchQuery {
                term: term.to_string(),
                filter: self.controls.filter,
                limit: limit.clamp(1, MAX_LOAD_LIMIT),
            },
            origin,
        })
    }

    fn begin(&mut self, request: FetchRequest) -> Option<FetchRequest> {
        tracing::debug!(?request, "fetch started");
        self.is_loading = true;
        Some(request)
    }

    fn apply_page(&mut self, request: &FetchRequest, page: TransactionPage) {
        let limit = request.limit();
        let received = page.transactions.len();

        self.loaded = page.transactions;
        self.load_limit = limit;
        // Short page means exhausted, unless the server says otherwise.
        self.has_more = page
            .has_more
            .unwrap_or(!(received == 0 || received < limit as usize));
        self.listing = Listing::Loaded;
        self.summary = match request {
            FetchRequest::Recent { .. } => Summary::Loaded {
                count: received,
                limit,
            },
            FetchRequest::Search { query, .. } => Summary::Found {
                total: page.total_count.unwrap_or(received),
                limit: page.limit,
                query: query.term.clone(),
            },
        };
        self.controls.limit.sync_to(limit);
        self.refresh_load_more();

        if request.search_term().is_none() && self.controls.filter != TypeFilter::All {
            self.filter_locally(self.controls.filter);
        }

        tracing::debug!(received, limit, has_more = self.has_more, "fetch applied");
    }

    fn refresh_load_more(&mut self) {
        self.controls.load_more_visible =
            self.has_more && !self.ceiling_reached && self.load_limit < MAX_LOAD_LIMIT;
    }
}
