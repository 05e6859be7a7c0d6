//! GraphQL request and response types

use crate::errors::TransportError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// A GraphQL operation with its bound variables
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphQLRequest {
    /// Operation document
    pub query: String,

    /// Named variables referenced by the document
    pub variables: Map<String, JsonValue>,
}

impl GraphQLRequest {
    /// Start a request from an operation document
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: Map::new(),
        }
    }

    /// Bind a variable, serializing the value to JSON
    ///
    /// Binding the same name twice keeps the last value.
    pub fn var<T>(mut self, name: &str, value: &T) -> Result<Self, TransportError>
    where
        T: Serialize + ?Sized,
    {
        let value = serde_json::to_value(value)?;
        self.variables.insert(name.to_string(), value);
        Ok(self)
    }

    /// Name of the operation, e.g. `CreateIntegration` for
    /// `mutation CreateIntegration(...)`
    pub fn operation_name(&self) -> Option<&str> {
        let mut words = self.query.split_whitespace();
        while let Some(word) = words.next() {
            if matches!(word, "query" | "mutation" | "subscription") {
                return words
                    .next()
                    .map(|name| name.split(['(', '{']).next().unwrap_or(name))
                    .filter(|name| !name.is_empty());
            }
        }
        None
    }
}

/// Standard GraphQL response envelope
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphQLResponse {
    #[serde(default)]
    pub data: Option<JsonValue>,

    #[serde(default)]
    pub errors: Vec<GraphQLErrorMessage>,
}

/// One entry of a response's `errors` array
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphQLErrorMessage {
    pub message: String,

    #[serde(default)]
    pub path: Option<Vec<JsonValue>>,
}

impl GraphQLResponse {
    /// Resolve the envelope into its data object
    ///
    /// Any reported error fails the whole response, even when partial data
    /// is present.
    pub fn into_result(self) -> Result<JsonValue, TransportError> {
        if !self.errors.is_empty() {
            let messages: Vec<&str> = self.errors.iter().map(|e| e.message.as_str()).collect();
            return Err(TransportError::GraphQL(messages.join("; ")));
        }

        match self.data {
            Some(JsonValue::Null) | None => Err(TransportError::MissingData),
            Some(data) => Ok(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_binds_variables() {
        let request = GraphQLRequest::new("mutation Ping($name: String!) { ping }")
            .var("name", "repo")
            .unwrap()
            .var("attrs", &json!({"a": [1, 2]}))
            .unwrap();

        assert_eq!(request.variables["name"], json!("repo"));
        assert_eq!(request.variables["attrs"], json!({"a": [1, 2]}));

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["query"], json!("mutation Ping($name: String!) { ping }"));
        assert_eq!(body["variables"]["name"], json!("repo"));
    }

    #[test]
    fn test_request_rebinding_keeps_last_value() {
        let request = GraphQLRequest::new("query Q { q }")
            .var("name", "first")
            .unwrap()
            .var("name", "second")
            .unwrap();
        assert_eq!(request.variables.len(), 1);
        assert_eq!(request.variables["name"], json!("second"));
    }

    #[test]
    fn test_operation_name() {
        let request = GraphQLRequest::new(
            "\n\tmutation CreateIntegration($name: String!) {\n\t\tcreateIntegration { id }\n\t}\n",
        );
        assert_eq!(request.operation_name(), Some("CreateIntegration"));

        let request = GraphQLRequest::new("mutation UpdateRepo { updateRepository { id } }");
        assert_eq!(request.operation_name(), Some("UpdateRepo"));

        assert_eq!(GraphQLRequest::new("{ me { id } }").operation_name(), None);
    }

    #[test]
    fn test_response_into_result() {
        let ok: GraphQLResponse =
            serde_json::from_value(json!({"data": {"createIntegration": {"id": "abc"}}})).unwrap();
        assert_eq!(ok.into_result().unwrap()["createIntegration"]["id"], json!("abc"));

        let failed: GraphQLResponse = serde_json::from_value(json!({
            "data": null,
            "errors": [{"message": "forbidden"}, {"message": "not found", "path": ["x"]}]
        }))
        .unwrap();
        match failed.into_result() {
            Err(TransportError::GraphQL(message)) => assert_eq!(message, "forbidden; not found"),
            other => panic!("unexpected result: {:?}", other),
        }

        let empty: GraphQLResponse = serde_json::from_value(json!({})).unwrap();
        assert!(matches!(empty.into_result(), Err(TransportError::MissingData)));
    }
}
