use lmcore::{
    error::BackendError,
    record::Record,
};

use crate::{
    error::{
        CtrlError,
        FetchError,
    },
    handle::detail::*,
    platform::Platform,
};

impl<'p, R: Record> DetailCtrl<'p, R> {
    pub fn new(platform: &'p Platform) -> Self {
        Self {
            platform,
            entity: R::default(),
            is_new: true,
            loading: false,
        }
    }

    pub fn entity(&self) -> &R {
        &self.entity
    }

    pub fn into_entity(self) -> R {
        self.entity
    }

    pub fn is_new(&self) -> bool {
        self.is_new
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Prepare a form for a record yet to be created; nothing is
    /// fetched.
    pub fn new_record(&mut self, defaults: R) -> &R {
        self.entity = defaults;
        self.is_new = true;
        &self.entity
    }

    /// Fetch the record identified by `id`.
    ///
    /// Should the record not exist the held record becomes the empty
    /// placeholder; for any other failure the previous record is kept.
    pub async fn load(&mut self, id: i64) -> Result<&R, CtrlError> {
        self.loading = true;
        let result = self.platform.backend
            .get(R::COLLECTION, id)
            .await;
        self.loading = false;
        let entity = match result {
            Ok(value) => serde_json::from_value::<R>(value)
                .map_err(|e| CtrlError::Fetch(FetchError::from(e))),
            Err(BackendError::NotFound) => {
                self.entity = R::default();
                Err(CtrlError::NotFound(id))
            }
            Err(e) => Err(CtrlError::Fetch(FetchError::from(e))),
        };
        match entity {
            Ok(entity) => {
                self.entity = entity;
                self.is_new = false;
                Ok(&self.entity)
            }
            Err(e) => {
                log::warn!("failed to load {}/{id}: {e}", R::COLLECTION);
                self.platform.notifier.error(e.to_string());
                Err(e)
            }
        }
    }
}
