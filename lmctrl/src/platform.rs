use lmcore::{
    platform::CollectionBackend,
    record::Record,
};
use std::sync::Arc;
use tokio::sync::broadcast;

use crate::{
    error::FetchError,
    event::{
        MutationEvent,
        EVENT_CAPACITY,
    },
    handle::{
        DeleteCtrl,
        DetailCtrl,
        ListCtrl,
        MutationCtrl,
        RelationLookup,
    },
    notify::Notifier,
};

/// Everything the controllers of one client share: the backend, the
/// global notification area and the mutation event channel.
#[derive(Clone)]
pub struct Platform {
    pub backend: Arc<dyn CollectionBackend>,
    pub notifier: Notifier,
    pub(crate) events: broadcast::Sender<MutationEvent>,
    pub(crate) items_per_page: u64,
}

impl Platform {
    pub fn new(backend: Arc<dyn CollectionBackend>, items_per_page: u64) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            backend,
            notifier: Notifier::new(),
            events,
            items_per_page: items_per_page.max(1),
        }
    }

    pub fn items_per_page(&self) -> u64 {
        self.items_per_page
    }

    pub fn subscribe(&self) -> broadcast::Receiver<MutationEvent> {
        self.events.subscribe()
    }

    pub(crate) fn emit(&self, event: MutationEvent) {
        log::debug!("emitting {event:?}");
        // an error only signifies that no list is currently listening.
        if self.events.send(event).is_err() {
            log::trace!("no subscribers for mutation event");
        }
    }

    /// A list screen seeded from the query string of its location.
    pub fn list_ctrl<R: Record>(&self, query: &str) -> ListCtrl<'_, R> {
        ListCtrl::new(self, query)
    }

    pub fn mutation_ctrl<R: Record>(&self) -> MutationCtrl<'_, R> {
        MutationCtrl::new(self)
    }

    pub fn detail_ctrl<R: Record>(&self) -> DetailCtrl<'_, R> {
        DetailCtrl::new(self)
    }

    pub fn delete_ctrl<R: Record>(&self, id: i64) -> DeleteCtrl<'_, R> {
        DeleteCtrl::new(self, id)
    }

    pub async fn relation_lookup<R: Record>(&self) -> Result<RelationLookup<R>, FetchError> {
        RelationLookup::load(self).await
    }
}
