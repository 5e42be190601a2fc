//! Interpretation of the responses returned by the collection endpoints.
//!
//! These are kept free of any transport so they may be exercised with
//! plain status codes, headers and bodies.

use http::{
    header::LINK,
    HeaderMap,
    StatusCode,
};
use lmcore::{
    error::{BackendError, Problem},
    links::PageLinks,
    page::{CollectionPage, MutationReply},
};
use serde_json::Value;

pub const TOTAL_COUNT: &str = "x-total-count";
const ALERT_SUFFIX: &str = "-alert";
const PARAMS_SUFFIX: &str = "-params";

/// Convert a non-success status into the appropriate error.
pub fn check_status(status: StatusCode, body: &[u8]) -> Result<(), BackendError> {
    if status.is_success() {
        return Ok(())
    }
    if status == StatusCode::NOT_FOUND {
        return Err(BackendError::NotFound)
    }
    let problem = serde_json::from_slice::<Problem>(body)
        .unwrap_or_else(|_| Problem {
            detail: (!body.is_empty())
                .then(|| String::from_utf8_lossy(body).into_owned()),
            ..Default::default()
        });
    log::warn!("request failed with {status}: {}", problem.summary());
    Err(BackendError::Status { status, problem })
}

pub fn parse_page(
    status: StatusCode,
    headers: &HeaderMap,
    body: &[u8],
) -> Result<CollectionPage, BackendError> {
    check_status(status, body)?;
    let records = serde_json::from_slice::<Vec<Value>>(body)?;
    let links = headers.get(LINK)
        .and_then(|value| value.to_str().ok())
        .map(PageLinks::parse)
        .unwrap_or_default();
    let total_count = headers.get(TOTAL_COUNT)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok());
    Ok(CollectionPage::new(records, total_count, links))
}

pub fn parse_record(
    status: StatusCode,
    body: &[u8],
) -> Result<Value, BackendError> {
    check_status(status, body)?;
    Ok(serde_json::from_slice(body)?)
}

pub fn parse_reply(
    status: StatusCode,
    headers: &HeaderMap,
    body: &[u8],
) -> Result<MutationReply, BackendError> {
    check_status(status, body)?;
    let body = match body.iter().all(u8::is_ascii_whitespace) {
        true => None,
        false => Some(serde_json::from_slice(body)?),
    };
    Ok(MutationReply {
        body,
        alert: alert(headers),
    })
}

/// The alert message the server attaches to a successful write, in the
/// form of the `X-<application>-alert` and `X-<application>-params`
/// headers.
pub fn alert(headers: &HeaderMap) -> Option<String> {
    let find = |suffix: &str| headers.iter()
        .find(|(name, _)| name.as_str().starts_with("x-") && name.as_str().ends_with(suffix))
        .and_then(|(_, value)| value.to_str().ok())
        .map(|value| url::form_urlencoded::parse(format!("v={value}").as_bytes())
            .map(|(_, v)| v.into_owned())
            .next()
            .unwrap_or_default()
        );
    let alert = find(ALERT_SUFFIX)?;
    Some(match find(PARAMS_SUFFIX) {
        Some(params) if !params.is_empty() => format!("{alert} ({params})"),
        _ => alert,
    })
}

#[cfg(test)]
mod tests {
    use http::HeaderValue;
    use serde_json::json;
    use super::*;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut result = HeaderMap::new();
        for (name, value) in pairs {
            result.insert(*name, HeaderValue::from_static(value));
        }
        result
    }

    #[test]
    fn page_with_links() -> anyhow::Result<()> {
        let headers = headers(&[
            ("link", r#"</api/leads?page=1&size=2>; rel="next", </api/leads?page=4&size=2>; rel="last""#),
            ("x-total-count", "9"),
        ]);
        let page = parse_page(
            StatusCode::OK,
            &headers,
            br#"[{"id": 1}, {"id": 2}]"#,
        )?;
        assert_eq!(page.records, vec![json!({"id": 1}), json!({"id": 2})]);
        assert_eq!(page.total_count, Some(9));
        assert_eq!(page.links.next, Some(1));
        assert_eq!(page.links.last, Some(4));
        Ok(())
    }

    #[test]
    fn page_without_headers() -> anyhow::Result<()> {
        let page = parse_page(StatusCode::OK, &HeaderMap::new(), b"[]")?;
        assert!(page.records.is_empty());
        assert_eq!(page.total_count, None);
        assert!(!page.has_next_page());
        Ok(())
    }

    #[test]
    fn page_not_an_array() {
        assert!(matches!(
            parse_page(StatusCode::OK, &HeaderMap::new(), br#"{"id": 1}"#),
            Err(BackendError::Serde(_)),
        ));
    }

    #[test]
    fn not_found() {
        assert!(matches!(
            parse_record(StatusCode::NOT_FOUND, b""),
            Err(BackendError::NotFound),
        ));
    }

    #[test]
    fn problem_with_field_errors() {
        let err = parse_reply(
            StatusCode::BAD_REQUEST,
            &HeaderMap::new(),
            br#"{
                "title": "Method argument not valid",
                "status": 400,
                "message": "error.validation",
                "fieldErrors": [{
                    "objectName": "interest",
                    "field": "category",
                    "message": "NotNull"
                }]
            }"#,
        ).unwrap_err();
        assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
        assert_eq!(err.field_errors().len(), 1);
        assert_eq!(err.field_errors()[0].field, "category");
        assert_eq!(err.to_string(), "400 Bad Request: Method argument not valid");
    }

    #[test]
    fn problem_unparsable() {
        let err = check_status(StatusCode::BAD_GATEWAY, b"upstream down").unwrap_err();
        assert_eq!(err.to_string(), "502 Bad Gateway: upstream down");
        let err = check_status(StatusCode::INTERNAL_SERVER_ERROR, b"").unwrap_err();
        assert_eq!(err.to_string(), "500 Internal Server Error: request failed");
    }

    #[test]
    fn reply_empty_body() -> anyhow::Result<()> {
        let headers = headers(&[
            ("x-leadmanagementapp-alert", "leadManagementApp.lead.deleted"),
            ("x-leadmanagementapp-params", "12"),
        ]);
        let reply = parse_reply(StatusCode::NO_CONTENT, &headers, b"")?;
        assert_eq!(reply.body, None);
        assert_eq!(reply.alert.as_deref(), Some("leadManagementApp.lead.deleted (12)"));
        Ok(())
    }

    #[test]
    fn reply_with_body() -> anyhow::Result<()> {
        let reply = parse_reply(StatusCode::CREATED, &HeaderMap::new(), br#"{"id": 3}"#)?;
        assert_eq!(reply.body, Some(json!({"id": 3})));
        assert_eq!(reply.alert, None);
        Ok(())
    }
}
