use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::links::PageLinks;

/// Query parameters for one list request against a collection.
///
/// The wire `page` is zero-based.  When `sort` is absent the paging
/// parameters are omitted entirely so the server applies its default
/// ordering over the whole collection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

/// One page of records returned by a list request.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct CollectionPage<T = Value> {
    pub records: Vec<T>,
    pub total_count: Option<u64>,
    pub links: PageLinks,
}

/// The reply to a write against a collection.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct MutationReply {
    /// Body returned by the server, if any.
    pub body: Option<Value>,
    /// The server provided alert message, if any.
    pub alert: Option<String>,
}

mod impls;
