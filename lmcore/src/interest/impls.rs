use chrono::{DateTime, Utc};

use crate::{
    interest::Interest,
    lead::Lead,
    record::Record,
};

impl Default for Interest {
    fn default() -> Self {
        Self {
            id: None,
            category: None,
            brand: None,
            article_id: None,
            order_id: None,
            is_purchased: Some(false),
            created_at: None,
            created_by: None,
            updated_at: None,
            updated_by: None,
            lead: None,
        }
    }
}

impl Record for Interest {
    const COLLECTION: &'static str = "interests";
    const WRITABLE: &'static [&'static str] = &[
        "id",
        "category",
        "brand",
        "articleId",
        "orderId",
        "isPurchased",
        "createdAt",
        "createdBy",
        "updatedAt",
        "updatedBy",
        "lead",
    ];
    const RELATIONS: &'static [&'static str] = &["lead"];

    fn id(&self) -> Option<i64> {
        self.id
    }
}

impl Interest {
    /// A new, unsaved interest with both timestamps set to `now`.
    pub fn new_with_timestamps(now: DateTime<Utc>) -> Self {
        Self {
            created_at: Some(now),
            updated_at: Some(now),
            ..Default::default()
        }
    }

    pub fn lead_id(&self) -> Option<i64> {
        self.lead.as_ref().and_then(|lead| lead.id)
    }

    /// Replace the lead with the one selected by identifier, using the
    /// provided resolver to find the full record; an identifier that
    /// does not resolve clears the relation.
    pub fn assign_lead<'a>(
        &mut self,
        lead_id: Option<i64>,
        resolve: impl FnOnce(i64) -> Option<&'a Lead>,
    ) {
        self.lead = lead_id.and_then(resolve).cloned();
    }
}
