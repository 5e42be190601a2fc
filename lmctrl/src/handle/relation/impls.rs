use lmcore::{
    page::PageRequest,
    record::Record,
};
use std::ops::Deref;

use crate::{
    error::FetchError,
    handle::relation::*,
    platform::Platform,
};

impl<R: Record> From<Vec<R>> for RelationLookup<R> {
    fn from(records: Vec<R>) -> Self {
        Self { records }
    }
}

impl<R: Record> Deref for RelationLookup<R> {
    type Target = [R];

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

impl<R: Record> RelationLookup<R> {
    /// Fetch the related collection using the unsorted request.
    pub async fn load(platform: &Platform) -> Result<Self, FetchError> {
        let result = platform.backend
            .list(R::COLLECTION, &PageRequest::unsorted())
            .await
            .map_err(FetchError::from)
            .and_then(|page| Ok(page.decode::<R>()?));
        match result {
            Ok(page) => Ok(page.records.into()),
            Err(e) => {
                log::warn!("failed to load related {}: {e}", R::COLLECTION);
                platform.notifier.error(e.message.clone());
                Err(e)
            }
        }
    }

    pub fn find(&self, id: i64) -> Option<&R> {
        self.records.iter()
            .find(|record| record.id() == Some(id))
    }

    /// Resolve an optional foreign key into a copy of the record.
    pub fn resolve(&self, id: Option<i64>) -> Option<R> {
        id.and_then(|id| self.find(id)).cloned()
    }
}
