//! JSON body assembly for create and update requests.

use serde_json::{Map, Value};

/// A JSON object built from individually optional fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonBody {
    fields: Map<String, Value>,
}

impl JsonBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    /// Insert the value only when it was supplied.
    pub fn opt<V: Into<Value>>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.set(key, value),
            None => self,
        }
    }

    /// Nest another body under `key`, skipping it when it has no fields.
    pub fn nest(self, key: &str, body: JsonBody) -> Self {
        if body.is_empty() {
            self
        } else {
            self.set(key, body.into_value())
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_only_supplied_fields_are_written() {
        let body = JsonBody::new()
            .opt("landingPageUrl", Some("https://example.com"))
            .opt::<&str>("gclid", None)
            .opt("jobId", Some(5));
        assert_eq!(
            body.into_value(),
            json!({"landingPageUrl": "https://example.com", "jobId": 5})
        );
    }

    #[test]
    fn test_empty_nested_bodies_are_dropped() {
        let body = JsonBody::new()
            .nest("externalCallData", JsonBody::new())
            .nest("webSessionData", JsonBody::new().set("referrerUrl", "x"));
        assert_eq!(
            body.into_value(),
            json!({"webSessionData": {"referrerUrl": "x"}})
        );
    }
}
