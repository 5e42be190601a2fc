use lmcore::{
    links::PageLinks,
    pagination::PaginationState,
    record::Record,
};
use tokio::sync::broadcast;

use crate::{
    event::MutationEvent,
    platform::Platform,
};

/// The list screen of one collection: its pagination state and the
/// records accumulated under it.
///
/// Every transition takes `&mut self`, so a list only ever has a single
/// writer; responses arriving for a superseded request are discarded
/// through the generation carried by each [`FetchTicket`].
pub struct ListCtrl<'p, R: Record> {
    pub(crate) platform: &'p Platform,
    pub(crate) state: PaginationState,
    pub(crate) records: Vec<R>,
    pub(crate) total_count: Option<u64>,
    pub(crate) links: PageLinks,
    pub(crate) generation: u64,
    pub(crate) loading: bool,
    pub(crate) events: broadcast::Receiver<MutationEvent>,
}

/// An issued list request; the state it targets only becomes the list's
/// state once the response is applied.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchTicket {
    pub(crate) generation: u64,
    pub(crate) state: PaginationState,
}

/// What applying a response did to the list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Applied {
    /// The list was replaced by a first page of this many records.
    Replaced(usize),
    /// This many records not already present were appended.
    Appended(usize),
    /// The response belonged to a superseded request and was dropped.
    Stale,
    /// There was no further page to fetch.
    Exhausted,
}

mod impls;
