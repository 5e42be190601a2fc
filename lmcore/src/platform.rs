use async_trait::async_trait;
use serde_json::{Map, Value};
use crate::{
    error::BackendError,
    page::{
        CollectionPage,
        MutationReply,
        PageRequest,
    },
};

/// The remote collection resources as seen by the client.
///
/// Each method addresses the collection named by `collection` (the
/// `Record::COLLECTION` of the record type), i.e. `api/<collection>`.
/// Records cross this boundary as raw JSON; typing them is left to the
/// controllers.
#[async_trait]
pub trait CollectionBackend: Send + Sync {
    async fn list(
        &self,
        collection: &str,
        request: &PageRequest,
    ) -> Result<CollectionPage, BackendError>;
    async fn get(
        &self,
        collection: &str,
        id: i64,
    ) -> Result<Value, BackendError>;
    async fn create(
        &self,
        collection: &str,
        body: Map<String, Value>,
    ) -> Result<MutationReply, BackendError>;
    async fn update(
        &self,
        collection: &str,
        id: i64,
        body: Map<String, Value>,
    ) -> Result<MutationReply, BackendError>;
    async fn partial_update(
        &self,
        collection: &str,
        id: i64,
        body: Map<String, Value>,
    ) -> Result<MutationReply, BackendError>;
    async fn delete(
        &self,
        collection: &str,
        id: i64,
    ) -> Result<MutationReply, BackendError>;
}
