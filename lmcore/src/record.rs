use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use std::fmt::Debug;

/// A single entity instance as exchanged with its collection endpoint.
///
/// The associated constants describe the wire shape of the record so
/// that generic code may clean a record before submission without
/// knowing its concrete fields.
pub trait Record:
    Clone + Debug + Default + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Path segment of the collection under `api/`, e.g. `leads`.
    const COLLECTION: &'static str;
    /// Wire names of the attributes the server accepts on write.
    const WRITABLE: &'static [&'static str];
    /// Wire names of the foreign key attributes; these must also be
    /// listed in `WRITABLE`.
    const RELATIONS: &'static [&'static str] = &[];

    fn id(&self) -> Option<i64>;
}

/// Serialize the record into the body to be submitted to the server.
pub fn clean<R: Record>(record: &R) -> Result<Map<String, Value>, serde_json::Error> {
    Ok(clean_value(serde_json::to_value(record)?, R::WRITABLE, R::RELATIONS))
}

/// Reduce an arbitrary JSON object down to the writable attributes.
///
/// Unknown keys and null identifiers are dropped and every relation is
/// collapsed into an object holding only its `id`; a relation without
/// a usable `id` is dropped entirely.
pub fn clean_value(
    value: Value,
    writable: &[&str],
    relations: &[&str],
) -> Map<String, Value> {
    let Value::Object(fields) = value else {
        log::warn!("attempted to clean a non-object record");
        return Map::new();
    };
    fields.into_iter()
        .filter(|(key, _)| writable.contains(&key.as_str()))
        .filter_map(|(key, value)| {
            if relations.contains(&key.as_str()) {
                relation_ref(&value).map(|id| (key, id))
            } else if key == "id" && value.is_null() {
                None
            } else {
                Some((key, value))
            }
        })
        .collect()
}

fn relation_ref(value: &Value) -> Option<Value> {
    let id = match value {
        Value::Object(inner) => inner.get("id")?.clone(),
        _ => return None,
    };
    let usable = match &id {
        Value::Number(_) => true,
        Value::String(s) => !s.is_empty(),
        _ => false,
    };
    usable.then(|| serde_json::json!({ "id": id }))
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use super::*;

    #[test]
    fn strips_unknown_keys() {
        let cleaned = clean_value(
            json!({
                "id": 3,
                "name": "Jane",
                "expanded": true,
                "interests": [{"id": 1}],
            }),
            &["id", "name"],
            &[],
        );
        assert_eq!(Value::Object(cleaned), json!({"id": 3, "name": "Jane"}));
    }

    #[test]
    fn null_id_omitted() {
        let cleaned = clean_value(
            json!({"id": null, "name": "Jane"}),
            &["id", "name"],
            &[],
        );
        assert!(!cleaned.contains_key("id"));
        assert_eq!(cleaned["name"], "Jane");
    }

    #[test]
    fn relation_reduced_to_identifier() {
        let cleaned = clean_value(
            json!({
                "category": "Shoes",
                "lead": {"id": 7, "name": "Jane", "phone": 9876543210u64},
            }),
            &["category", "lead"],
            &["lead"],
        );
        assert_eq!(cleaned["lead"], json!({"id": 7}));
    }

    #[test]
    fn relation_without_identifier_dropped() {
        let cleaned = clean_value(
            json!({
                "category": "Shoes",
                "lead": {"id": ""},
            }),
            &["category", "lead"],
            &["lead"],
        );
        assert!(!cleaned.contains_key("lead"));

        let cleaned = clean_value(
            json!({"category": "Shoes", "lead": null}),
            &["category", "lead"],
            &["lead"],
        );
        assert!(!cleaned.contains_key("lead"));
    }

    #[test]
    fn non_object() {
        assert!(clean_value(json!([1, 2]), &["id"], &[]).is_empty());
    }
}
