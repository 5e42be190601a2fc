use async_trait::async_trait;
use mockall::mock;
use lmcore::{
    error::BackendError,
    page::{
        CollectionPage,
        MutationReply,
        PageRequest,
    },
    platform::CollectionBackend,
};
use serde_json::{Map, Value};

mock! {
    pub Backend {}

    #[async_trait]
    impl CollectionBackend for Backend {
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
}
