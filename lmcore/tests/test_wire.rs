use lmcore::{
    interest::Interest,
    lead::Lead,
    page::PageRequest,
    pagination::PaginationState,
    platform::CollectionBackend,
    record::clean,
};
use serde_json::json;
use test_lm::{
    core::MockBackend,
    fixture,
};

#[test]
fn decode_lead_page() -> anyhow::Result<()> {
    let page = fixture::lead_page(2, 20, 45).decode::<Lead>()?;
    assert_eq!(page.records.len(), 5);
    assert_eq!(page.records[0].id, Some(41));
    assert_eq!(page.records[0].phone, Some(9000000041));
    assert!(page.records[0].created_at.is_some());
    assert!(!page.has_next_page());
    assert_eq!(page.total_count, Some(45));
    Ok(())
}

#[test]
fn resubmit_fetched_interest() -> anyhow::Result<()> {
    let interest = serde_json::from_value::<Interest>(fixture::interest(5, 3))?;
    let body = clean(&interest)?;
    assert_eq!(body["id"], json!(5));
    assert_eq!(body["lead"], json!({"id": 3}));
    assert_eq!(body["articleId"], json!("A-5"));
    assert!(body.keys().all(|key| <Interest as lmcore::record::Record>::WRITABLE
        .contains(&key.as_str())));
    Ok(())
}

// the request a list controller derives from its state is what reaches
// the backend.
#[async_std::test]
async fn request_reaches_backend() -> anyhow::Result<()> {
    let mut backend = MockBackend::new();
    backend.expect_list()
        .times(1)
        .withf(|collection: &str, request: &PageRequest| {
            collection == "leads" && request.to_query() == "page=1&size=5&sort=name%2Casc"
        })
        .returning(|_, _| Ok(fixture::lead_page(1, 5, 12)));
    let state = PaginationState::init_from_query("page=2&sort=name", 5);
    let page = backend.list("leads", &PageRequest::from(&state)).await?;
    assert_eq!(page.records.len(), 5);
    assert_eq!(page.next_page_index(), Some(2));
    Ok(())
}
