use lmcore::{
    error::BackendError,
    links::PageLinks,
    page::{
        CollectionPage,
        PageRequest,
    },
    pagination::PaginationState,
    record::Record,
};
use std::collections::HashSet;
use tokio::sync::broadcast::error::TryRecvError;

use crate::{
    error::FetchError,
    handle::list::*,
    platform::Platform,
};

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    pub fn request(&self) -> PageRequest {
        PageRequest::from(&self.state)
    }
}

impl<'p, R: Record> ListCtrl<'p, R> {
    pub fn new(platform: &'p Platform, query: &str) -> Self {
        Self {
            platform,
            state: PaginationState::init_from_query(query, platform.items_per_page()),
            records: Vec::new(),
            total_count: None,
            links: PageLinks::default(),
            generation: 0,
            loading: false,
            events: platform.subscribe(),
        }
    }

    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn total_count(&self) -> Option<u64> {
        self.total_count
    }

    pub fn links(&self) -> &PageLinks {
        &self.links
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    /// The current state reflected back into query string form.
    pub fn query(&self) -> String {
        self.state.to_query()
    }

    /// Whether the server advertised a page beyond the active one.
    pub fn has_more(&self) -> bool {
        self.links.next_page_index()
            .map(|next| self.state.active_page() - 1 < next)
            .unwrap_or(false)
    }

    // Any request in flight targets a state that no longer holds.
    fn invalidate(&mut self) {
        self.generation += 1;
        self.loading = false;
    }

    fn clear(&mut self) {
        self.records.clear();
        self.total_count = None;
        self.links = PageLinks::default();
    }

    /// Return to the first page and discard the accumulated records.
    pub fn reset(&mut self) {
        self.state = self.state.reset();
        self.clear();
        self.invalidate();
    }

    /// Switch the sort; being a new query the list starts over at the
    /// first page with nothing accumulated.
    pub fn toggle_sort(&mut self, field: &str) {
        self.state = self.state.toggle_sort(field);
        self.clear();
        self.invalidate();
    }

    /// Issue a request for the current state.
    pub fn issue(&mut self) -> FetchTicket {
        let state = self.state.clone();
        self.issue_for(state)
    }

    /// Issue a request for the page following the current one.
    pub fn issue_next(&mut self) -> FetchTicket {
        let state = self.state.advance_page();
        self.issue_for(state)
    }

    fn issue_for(&mut self, state: PaginationState) -> FetchTicket {
        self.generation += 1;
        self.loading = true;
        FetchTicket {
            generation: self.generation,
            state,
        }
    }

    /// Apply the outcome of the request identified by `ticket`.
    ///
    /// A first page replaces the list and any later page is appended,
    /// skipping records whose identifier is already present.  On
    /// failure the list is left untouched and the message is passed on
    /// to the notifier.
    pub fn apply(
        &mut self,
        ticket: FetchTicket,
        result: Result<CollectionPage, BackendError>,
    ) -> Result<Applied, FetchError> {
        if ticket.generation != self.generation {
            log::debug!(
                "discarding stale response for {} (generation {} != {})",
                R::COLLECTION,
                ticket.generation,
                self.generation,
            );
            return Ok(Applied::Stale);
        }
        self.loading = false;

        let page = match result
            .map_err(FetchError::from)
            .and_then(|page| Ok(page.decode::<R>()?))
        {
            Ok(page) => page,
            Err(e) => {
                log::warn!("failed to fetch {}: {e}", R::COLLECTION);
                self.platform.notifier.error(e.message.clone());
                return Err(e);
            }
        };

        let applied = if ticket.state.active_page() == 1 {
            self.records = page.records;
            Applied::Replaced(self.records.len())
        } else {
            Applied::Appended(self.append(page.records))
        };
        log::debug!(
            "{} page {}: {applied:?}",
            R::COLLECTION,
            ticket.state.active_page(),
        );
        self.state = ticket.state;
        self.total_count = page.total_count;
        self.links = page.links;
        Ok(applied)
    }

    // keeps the first occurrence of any identifier.
    fn append(&mut self, records: Vec<R>) -> usize {
        let mut seen = self.records.iter()
            .filter_map(|record| record.id())
            .collect::<HashSet<_>>();
        let before = self.records.len();
        self.records.extend(records.into_iter()
            .filter(|record| match record.id() {
                Some(id) => seen.insert(id),
                None => true,
            })
        );
        self.records.len() - before
    }

    async fn run(&mut self, ticket: FetchTicket) -> Result<Applied, FetchError> {
        let request = ticket.request();
        let result = self.platform.backend
            .list(R::COLLECTION, &request)
            .await;
        self.apply(ticket, result)
    }

    /// Fetch the current state's page.
    pub async fn fetch(&mut self) -> Result<Applied, FetchError> {
        let ticket = self.issue();
        self.run(ticket).await
    }

    /// Reset to the first page and fetch it anew.
    pub async fn refresh(&mut self) -> Result<Applied, FetchError> {
        self.reset();
        self.fetch().await
    }

    pub async fn sort_by(&mut self, field: &str) -> Result<Applied, FetchError> {
        self.toggle_sort(field);
        self.fetch().await
    }

    /// Fetch and append the next page, if the server advertised one.
    pub async fn load_more(&mut self) -> Result<Applied, FetchError> {
        if !self.has_more() {
            return Ok(Applied::Exhausted);
        }
        let ticket = self.issue_next();
        self.run(ticket).await
    }

    /// Consume the mutation events received since the last call; if any
    /// concern this collection the list is refreshed exactly once.
    pub async fn sync_mutations(&mut self) -> Result<Option<Applied>, FetchError> {
        let mut pending = false;
        loop {
            match self.events.try_recv() {
                Ok(event) => if event.collection == R::COLLECTION {
                    pending = true;
                },
                Err(TryRecvError::Lagged(n)) => {
                    log::warn!("{} list missed {n} mutation events", R::COLLECTION);
                    pending = true;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }
        match pending {
            true => Ok(Some(self.refresh().await?)),
            false => Ok(None),
        }
    }
}
