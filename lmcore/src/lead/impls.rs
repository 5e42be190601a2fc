use chrono::{DateTime, Utc};

use crate::{
    lead::Lead,
    record::Record,
};

impl Record for Lead {
    const COLLECTION: &'static str = "leads";
    const WRITABLE: &'static [&'static str] = &[
        "id",
        "name",
        "phone",
        "createdAt",
        "createdBy",
        "updatedAt",
        "updatedBy",
    ];

    fn id(&self) -> Option<i64> {
        self.id
    }
}

impl Lead {
    /// A new, unsaved lead with both timestamps set to `now`.
    pub fn new_with_timestamps(now: DateTime<Utc>) -> Self {
        Self {
            created_at: Some(now),
            updated_at: Some(now),
            ..Default::default()
        }
    }
}
