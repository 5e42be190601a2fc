use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    links::PageLinks,
    page::*,
    pagination::PaginationState,
};

impl From<&PaginationState> for PageRequest {
    fn from(state: &PaginationState) -> Self {
        match state.sort_expression() {
            Some(sort) => Self {
                page: Some(state.active_page().saturating_sub(1)),
                size: Some(state.items_per_page()),
                sort: Some(sort),
            },
            None => Self::unsorted(),
        }
    }
}

impl PageRequest {
    pub fn unsorted() -> Self {
        Self::default()
    }

    pub fn is_unsorted(&self) -> bool {
        self.sort.is_none()
    }

    /// The query string form, without the leading `?`.
    pub fn to_query(&self) -> String {
        // only fails for unsupported top-level types, which this is not.
        serde_urlencoded::to_string(self)
            .unwrap_or_default()
    }
}

impl<T> Default for CollectionPage<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            total_count: None,
            links: PageLinks::default(),
        }
    }
}

impl<T> CollectionPage<T> {
    pub fn new(records: Vec<T>, total_count: Option<u64>, links: PageLinks) -> Self {
        Self { records, total_count, links }
    }

    pub fn has_next_page(&self) -> bool {
        self.links.has_next_page()
    }

    pub fn next_page_index(&self) -> Option<u64> {
        self.links.next_page_index()
    }
}

impl CollectionPage<Value> {
    /// Convert the raw records into the typed record.
    pub fn decode<T: DeserializeOwned>(self) -> Result<CollectionPage<T>, serde_json::Error> {
        Ok(CollectionPage {
            records: self.records.into_iter()
                .map(serde_json::from_value)
                .collect::<Result<Vec<_>, _>>()?,
            total_count: self.total_count,
            links: self.links,
        })
    }
}

impl MutationReply {
    pub fn decode<T: DeserializeOwned>(&self) -> Result<Option<T>, serde_json::Error> {
        self.body.clone()
            .map(serde_json::from_value)
            .transpose()
    }
}
