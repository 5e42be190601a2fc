use lmcore::record::Record;

use crate::{
    error::{
        CtrlError,
        MutationError,
    },
    handle::delete::*,
    platform::Platform,
};

impl<'p, R: Record> DeleteCtrl<'p, R> {
    pub fn new(platform: &'p Platform, id: i64) -> Self {
        Self {
            id,
            detail: DetailCtrl::new(platform),
            mutation: MutationCtrl::new(platform),
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    /// Load the record so the confirmation may show what is deleted.
    pub async fn load(&mut self) -> Result<&R, CtrlError> {
        self.detail.load(self.id).await
    }

    pub fn record(&self) -> &R {
        self.detail.entity()
    }

    pub fn updating(&self) -> bool {
        self.mutation.updating()
    }

    /// Delete the record.  On failure the confirmation stays open.
    pub async fn confirm(&mut self) -> Result<Outcome, MutationError> {
        self.mutation.delete(self.id).await?;
        Ok(Outcome::ReturnToList)
    }

    pub fn cancel(self) -> Outcome {
        Outcome::ReturnToList
    }
}
