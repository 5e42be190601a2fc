use lmcore::{
    error::BackendError,
    page::MutationReply,
    record::{
        clean,
        Record,
    },
};

use crate::{
    error::MutationError,
    event::{
        MutationEvent,
        MutationKind,
    },
    handle::mutation::*,
    platform::Platform,
};

impl<'p, R: Record> MutationCtrl<'p, R> {
    pub fn new(platform: &'p Platform) -> Self {
        Self {
            platform,
            entity: None,
            updating: false,
        }
    }

    /// The record returned by the last successful write.
    pub fn entity(&self) -> Option<&R> {
        self.entity.as_ref()
    }

    pub fn updating(&self) -> bool {
        self.updating
    }

    /// Create the record; any identifier it carries is sent as is and
    /// left for the server to reject.
    pub async fn create(&mut self, record: &R) -> Result<R, MutationError> {
        let body = clean(record)?;
        self.updating = true;
        let result = self.platform.backend
            .create(R::COLLECTION, body)
            .await;
        self.finish(MutationKind::Created, None, result)
            .map(|saved| saved.unwrap_or_else(|| record.clone()))
    }

    /// Replace the record in full.
    pub async fn update(&mut self, record: &R) -> Result<R, MutationError> {
        let id = record.id().ok_or_else(MutationError::missing_identifier)?;
        let body = clean(record)?;
        self.updating = true;
        let result = self.platform.backend
            .update(R::COLLECTION, id, body)
            .await;
        self.finish(MutationKind::Updated, Some(id), result)
            .map(|saved| saved.unwrap_or_else(|| record.clone()))
    }

    /// Update only the attributes that are set; the server ignores the
    /// ones that are null.
    pub async fn partial_update(&mut self, record: &R) -> Result<R, MutationError> {
        let id = record.id().ok_or_else(MutationError::missing_identifier)?;
        let body = clean(record)?;
        self.updating = true;
        let result = self.platform.backend
            .partial_update(R::COLLECTION, id, body)
            .await;
        self.finish(MutationKind::Updated, Some(id), result)
            .map(|saved| saved.unwrap_or_else(|| record.clone()))
    }

    /// Delete the record; the server may or may not return it.
    pub async fn delete(&mut self, id: i64) -> Result<Option<R>, MutationError> {
        self.updating = true;
        let result = self.platform.backend
            .delete(R::COLLECTION, id)
            .await;
        self.finish(MutationKind::Deleted, Some(id), result)
    }

    fn finish(
        &mut self,
        kind: MutationKind,
        id: Option<i64>,
        result: Result<MutationReply, BackendError>,
    ) -> Result<Option<R>, MutationError> {
        self.updating = false;
        let reply = match result {
            Ok(reply) => reply,
            Err(e) => {
                let e = MutationError::from(e);
                log::warn!("{kind:?} on {} failed: {e}", R::COLLECTION);
                self.platform.notifier.error(e.message.clone());
                return Err(e);
            }
        };
        // the write has happened regardless of what came back.
        let record = reply.decode::<R>()
            .unwrap_or_else(|e| {
                log::warn!("unexpected {} record returned: {e}", R::COLLECTION);
                None
            });
        if let Some(alert) = reply.alert {
            self.platform.notifier.info(alert);
        }
        self.platform.emit(MutationEvent {
            collection: R::COLLECTION,
            kind,
            id: record.as_ref().and_then(|record| record.id()).or(id),
        });
        if kind == MutationKind::Deleted {
            self.entity = None;
        } else {
            self.entity = record.clone();
        }
        Ok(record)
    }
}
