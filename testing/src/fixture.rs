use lmcore::{
    links::PageLinks,
    page::CollectionPage,
};
use serde_json::{json, Value};

/// A lead record on the wire with the given identifier.
pub fn lead(id: i64) -> Value {
    json!({
        "id": id,
        "name": format!("Lead {id}"),
        "phone": 9000000000i64 + id,
        "createdAt": "2024-01-01T00:00:00Z",
        "createdBy": "system",
        "updatedAt": null,
        "updatedBy": null,
    })
}

/// An interest record on the wire owned by the lead `lead_id`, with the
/// lead expanded the way the server returns it.
pub fn interest(id: i64, lead_id: i64) -> Value {
    json!({
        "id": id,
        "category": "Shoes",
        "brand": null,
        "articleId": format!("A-{id}"),
        "orderId": null,
        "isPurchased": false,
        "createdAt": "2024-01-01T00:00:00Z",
        "createdBy": "system",
        "updatedAt": null,
        "updatedBy": null,
        "lead": lead(lead_id),
    })
}

/// The zero-based `page` of a collection of `total` leads numbered from
/// 1, split into pages of `size`, with the link relations the server
/// would advertise for it.
pub fn lead_page(page: u64, size: u64, total: u64) -> CollectionPage {
    let start = page * size;
    let end = (start + size).min(total);
    let last = total.saturating_sub(1) / size.max(1);
    CollectionPage::new(
        (start..end).map(|i| lead(i as i64 + 1)).collect(),
        Some(total),
        PageLinks {
            first: Some(0),
            prev: (page > 0).then(|| page - 1),
            next: (page < last).then(|| page + 1),
            last: Some(last),
        },
    )
}

/// A page holding exactly the given lead identifiers.
pub fn leads_page(ids: &[i64], next: Option<u64>) -> CollectionPage {
    CollectionPage::new(
        ids.iter().map(|id| lead(*id)).collect(),
        None,
        PageLinks {
            next,
            ..Default::default()
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paging_fixture() {
        let first = lead_page(0, 20, 45);
        assert_eq!(first.records.len(), 20);
        assert_eq!(first.links.next, Some(1));
        assert_eq!(first.links.last, Some(2));

        let last = lead_page(2, 20, 45);
        assert_eq!(last.records.len(), 5);
        assert_eq!(last.records[0]["id"], 41);
        assert_eq!(last.links.next, None);
        assert_eq!(last.links.prev, Some(1));
    }
}
