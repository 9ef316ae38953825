use serde::Deserialize;
use serde_json::Value;

use crate::error::{AppError, Result};

/// JSON body accepted by `POST /graphql`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlPayload {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub variables: Option<Value>,
    #[serde(default)]
    pub operation_name: Option<String>,
}

impl GraphQlPayload {
    /// Parses a request body. Only a JSON object is accepted: serde would
    /// otherwise read a JSON array positionally into the struct fields.
    pub fn from_body(body: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {}", e)))?;
        if !value.is_object() {
            return Err(AppError::BadRequest("Request body must be a JSON object".to_string()));
        }
        serde_json::from_value(value)
            .map_err(|e| AppError::BadRequest(format!("Invalid GraphQL payload: {}", e)))
    }

    /// The query text, or `None` when it is absent or blank.
    pub fn query_text(&self) -> Option<&str> {
        self.query.as_deref().filter(|q| !q.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_camel_case_operation_name() {
        let payload: GraphQlPayload = serde_json::from_str(
            r#"{"query":"{ books { slug } }","operationName":"All","variables":null}"#,
        )
        .unwrap();
        assert_eq!(payload.operation_name.as_deref(), Some("All"));
        assert_eq!(payload.query_text(), Some("{ books { slug } }"));
        assert!(payload.variables.is_none());
    }

    #[test]
    fn blank_query_counts_as_missing() {
        let payload: GraphQlPayload = serde_json::from_str(r#"{"query":"   "}"#).unwrap();
        assert_eq!(payload.query_text(), None);

        let payload: GraphQlPayload = serde_json::from_str("{}").unwrap();
        assert_eq!(payload.query_text(), None);

        let payload = GraphQlPayload::from_body(br#"{"query":null}"#).unwrap();
        assert_eq!(payload.query_text(), None);
    }

    #[test]
    fn from_body_rejects_non_objects() {
        let bodies: [&[u8]; 5] = [b"[]", br#"["{ books { slug } }"]"#, b"\"query\"", b"42", b"null"];
        for body in bodies {
            let err = GraphQlPayload::from_body(body).unwrap_err();
            assert!(matches!(err, AppError::BadRequest(_)), "accepted {:?}", body);
        }
    }

    #[test]
    fn from_body_rejects_wrongly_typed_fields() {
        let err = GraphQlPayload::from_body(br#"{"query":7}"#).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
