use async_trait::async_trait;
use http::header::CONTENT_TYPE;
use lmcore::{
    error::BackendError,
    page::{
        CollectionPage,
        MutationReply,
        PageRequest,
    },
    platform::CollectionBackend,
};
use reqwest::{
    Client,
    Method,
    Request,
    RequestBuilder,
};
use serde_json::{Map, Value};
use url::Url;

use crate::response::{
    parse_page,
    parse_record,
    parse_reply,
};

const MERGE_PATCH: &str = "application/merge-patch+json";

/// The collection endpoints of a remote server, reached over HTTP.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: Client,
    base: Url,
}

impl HttpBackend {
    /// The `base` must end with a `/`; see [`crate::Builder`].
    pub fn new(client: Client, base: Url) -> Self {
        Self { client, base }
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn collection_url(&self, collection: &str) -> Result<Url, BackendError> {
        self.base.join(&format!("api/{collection}"))
            .map_err(|e| BackendError::AppInvariantViolation(e.to_string()))
    }

    pub fn record_url(&self, collection: &str, id: i64) -> Result<Url, BackendError> {
        self.base.join(&format!("api/{collection}/{id}"))
            .map_err(|e| BackendError::AppInvariantViolation(e.to_string()))
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        log::trace!("{method} {url}");
        self.client.request(method, url)
    }

    async fn send(
        &self,
        request: Request,
    ) -> Result<(http::StatusCode, http::HeaderMap, Vec<u8>), BackendError> {
        let response = self.client.execute(request).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();
        Ok((status, headers, body))
    }

    /// A write carrying `body`; a PATCH is sent as a merge patch so the
    /// server only touches the attributes present.
    fn write_request(
        &self,
        method: Method,
        url: Url,
        body: &Map<String, Value>,
    ) -> Result<Request, BackendError> {
        let patch = method == Method::PATCH;
        let builder = self.request(method, url);
        let builder = if patch {
            builder
                .header(CONTENT_TYPE, MERGE_PATCH)
                .body(serde_json::to_vec(body)?)
        } else {
            builder.json(body)
        };
        Ok(builder.build()?)
    }

    async fn write(
        &self,
        method: Method,
        url: Url,
        body: Map<String, Value>,
    ) -> Result<MutationReply, BackendError> {
        let request = self.write_request(method, url, &body)?;
        let (status, headers, body) = self.send(request).await?;
        parse_reply(status, &headers, &body)
    }
}

#[async_trait]
impl CollectionBackend for HttpBackend {
    async fn list(
        &self,
        collection: &str,
        request: &PageRequest,
    ) -> Result<CollectionPage, BackendError> {
        let mut url = self.collection_url(collection)?;
        let query = request.to_query();
        if !query.is_empty() {
            url.set_query(Some(&query));
        }
        let (status, headers, body) = self.send(
            self.request(Method::GET, url).build()?
        ).await?;
        parse_page(status, &headers, &body)
    }

    async fn get(
        &self,
        collection: &str,
        id: i64,
    ) -> Result<Value, BackendError> {
        let url = self.record_url(collection, id)?;
        let (status, _, body) = self.send(
            self.request(Method::GET, url).build()?
        ).await?;
        parse_record(status, &body)
    }

    async fn create(
        &self,
        collection: &str,
        body: Map<String, Value>,
    ) -> Result<MutationReply, BackendError> {
        let url = self.collection_url(collection)?;
        self.write(Method::POST, url, body).await
    }

    async fn update(
        &self,
        collection: &str,
        id: i64,
        body: Map<String, Value>,
    ) -> Result<MutationReply, BackendError> {
        let url = self.record_url(collection, id)?;
        self.write(Method::PUT, url, body).await
    }

    async fn partial_update(
        &self,
        collection: &str,
        id: i64,
        body: Map<String, Value>,
    ) -> Result<MutationReply, BackendError> {
        let url = self.record_url(collection, id)?;
        self.write(Method::PATCH, url, body).await
    }

    async fn delete(
        &self,
        collection: &str,
        id: i64,
    ) -> Result<MutationReply, BackendError> {
        let url = self.record_url(collection, id)?;
        let (status, headers, body) = self.send(
            self.request(Method::DELETE, url).build()?
        ).await?;
        parse_reply(status, &headers, &body)
    }
}
