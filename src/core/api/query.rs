//! Query parameter mapping.
//!
//! A key is only ever present when the caller supplied the matching argument;
//! absence and a supplied default are different things on the wire.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

/// One entry of an indexed repeated parameter such as `owners[0].type`.
pub trait IndexedEntry {
    /// Sub-keys and their values for this entry, e.g. `[("type", "Job"), ("id", 7)]`.
    fn fields(&self) -> Vec<(&'static str, Value)>;
}

/// Wire-level query parameters for a single request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    entries: BTreeMap<String, Value>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value unconditionally.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Insert the value only when it was supplied.
    pub fn opt<V: Into<Value>>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.set(key, value),
            None => self,
        }
    }

    /// Insert `key=true` only when the flag is set. `false` leaves the key out.
    pub fn flag(self, key: &str, enabled: bool) -> Self {
        if enabled { self.set(key, true) } else { self }
    }

    /// Insert a comma-joined id list. An empty list counts as not supplied.
    pub fn ids<T: ToString>(self, key: &str, ids: Option<&[T]>) -> Self {
        match ids {
            Some(ids) if !ids.is_empty() => {
                let joined = ids.iter().map(ToString::to_string).collect::<Vec<_>>();
                self.set(key, joined.join(","))
            }
            _ => self,
        }
    }

    /// Flatten a list into `prefix[i].field` keys, keeping list order as the index.
    pub fn indexed<E: IndexedEntry>(mut self, prefix: &str, entries: Option<&[E]>) -> Self {
        for (index, entry) in entries.unwrap_or_default().iter().enumerate() {
            for (field, value) in entry.fields() {
                self.entries
                    .insert(format!("{prefix}[{index}].{field}"), value);
            }
        }
        self
    }

    /// Forward `page`, `pageSize` and `includeTotal` the way every list endpoint takes them.
    pub fn paging(self, page: Option<i32>, page_size: Option<i32>, include_total: bool) -> Self {
        self.opt("page", page)
            .opt("pageSize", page_size)
            .flag("includeTotal", include_total)
    }

    /// Forward the created/modified time window shared by most list endpoints.
    pub fn window(self, window: &ChangeWindow) -> Self {
        self.opt("createdBefore", window.created_before.as_deref())
            .opt("createdOnOrAfter", window.created_on_or_after.as_deref())
            .opt("modifiedBefore", window.modified_before.as_deref())
            .opt("modifiedOnOrAfter", window.modified_on_or_after.as_deref())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// String pairs as sent on the wire.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|(key, value)| {
                let value = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (key.clone(), value)
            })
            .collect()
    }

    /// URL-encoded form of the parameters, used in request logs.
    pub fn to_query_string(&self) -> String {
        serde_urlencoded::to_string(self.to_pairs()).unwrap_or_default()
    }
}

/// Created/modified filters accepted by most list endpoints.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ChangeWindow {
    /// Return items created before this UTC timestamp (RFC 3339).
    pub created_before: Option<String>,

    /// Return items created on or after this UTC timestamp (RFC 3339).
    pub created_on_or_after: Option<String>,

    /// Return items modified before this UTC timestamp (RFC 3339).
    pub modified_before: Option<String>,

    /// Return items modified on or after this UTC timestamp (RFC 3339).
    pub modified_on_or_after: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Pair {
        kind: &'static str,
        id: i64,
    }

    impl IndexedEntry for Pair {
        fn fields(&self) -> Vec<(&'static str, Value)> {
            vec![("type", json!(self.kind)), ("id", json!(self.id))]
        }
    }

    #[test]
    fn test_absent_values_add_no_keys() {
        let params = QueryParams::new()
            .opt::<i32>("page", None)
            .opt::<&str>("name", None)
            .ids::<i64>("ids", None)
            .indexed::<Pair>("owners", None);
        assert!(params.is_empty());
    }

    #[test]
    fn test_supplied_falsy_value_is_kept() {
        let params = QueryParams::new().opt("hasTriggers", Some(false));
        assert_eq!(params.get("hasTriggers"), Some(&json!(false)));
    }

    #[test]
    fn test_flag_only_sent_when_true() {
        assert!(!QueryParams::new().flag("includeTotal", false).contains("includeTotal"));
        assert_eq!(
            QueryParams::new().flag("includeTotal", true).get("includeTotal"),
            Some(&json!(true))
        );
    }

    #[test]
    fn test_paging_forwards_both_keys_unmodified() {
        let params = QueryParams::new().paging(Some(3), Some(250), false);
        assert_eq!(params.get("page"), Some(&json!(3)));
        assert_eq!(params.get("pageSize"), Some(&json!(250)));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_ids_are_comma_joined() {
        let params = QueryParams::new().ids("ids", Some(&[4_i64, 8, 15][..]));
        assert_eq!(params.get("ids"), Some(&json!("4,8,15")));

        let empty: &[i64] = &[];
        assert!(QueryParams::new().ids("ids", Some(empty)).is_empty());
    }

    #[test]
    fn test_indexed_entries_keep_list_order() {
        let owners = [Pair { kind: "Job", id: 10 }, Pair { kind: "Customer", id: 20 }];
        let params = QueryParams::new().indexed("owners", Some(&owners[..]));
        assert_eq!(params.get("owners[0].type"), Some(&json!("Job")));
        assert_eq!(params.get("owners[0].id"), Some(&json!(10)));
        assert_eq!(params.get("owners[1].type"), Some(&json!("Customer")));
        assert_eq!(params.get("owners[1].id"), Some(&json!(20)));
    }

    #[test]
    fn test_window_maps_to_camel_case() {
        let window = ChangeWindow {
            created_before: Some("2024-01-01".into()),
            modified_on_or_after: Some("2023-06-01".into()),
            ..Default::default()
        };
        let params = QueryParams::new().window(&window);
        let keys: Vec<_> = params.keys().collect();
        assert_eq!(keys, vec!["createdBefore", "modifiedOnOrAfter"]);
    }

    #[test]
    fn test_pairs_render_primitives_as_text() {
        let params = QueryParams::new()
            .set("active", "True")
            .set("page", 2)
            .set("includeTotal", true);
        let pairs = params.to_pairs();
        assert!(pairs.contains(&("active".to_string(), "True".to_string())));
        assert!(pairs.contains(&("page".to_string(), "2".to_string())));
        assert!(pairs.contains(&("includeTotal".to_string(), "true".to_string())));
        assert_eq!(
            params.to_query_string(),
            "active=True&includeTotal=true&page=2"
        );
    }
}
