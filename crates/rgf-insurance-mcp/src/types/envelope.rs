//! JSON-RPC 2.0 envelopes. Clients send requests and notifications; the
//! server only ever sends replies.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::{McpError, McpResult};

pub const JSONRPC_VERSION: &str = "2.0";

/// Request identifier, echoed back unchanged in the reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestId {
    Number(i64),
    Text(String),
    Null,
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestId::Number(n) => write!(f, "{n}"),
            RequestId::Text(s) => write!(f, "{s:?}"),
            RequestId::Null => f.write_str("null"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    pub jsonrpc: String,
    pub id: RequestId,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl Request {
    /// Decode the params of a method that requires them.
    pub fn params_as<T: DeserializeOwned>(&self) -> McpResult<T> {
        let params = self
            .params
            .clone()
            .ok_or_else(|| McpError::InvalidParams(format!("{} requires params", self.method)))?;
        serde_json::from_value(params).map_err(|e| McpError::InvalidParams(e.to_string()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

/// Anything a client may send. Only requests carry an `id`, so they are
/// tried first.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Incoming {
    Request(Request),
    Notification(Notification),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorObject {
    pub code: i32,
    pub message: String,
}

/// `{"result": ...}` or `{"error": {...}}`, flattened into the reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Result(Value),
    Error(ErrorObject),
}

/// The server's answer to one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub jsonrpc: String,
    pub id: RequestId,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl Reply {
    pub fn success(id: RequestId, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            outcome: Outcome::Result(result),
        }
    }

    pub fn failure(id: RequestId, error: &McpError) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            outcome: Outcome::Error(ErrorObject {
                code: error.code(),
                message: error.to_string(),
            }),
        }
    }

    pub fn into_value(self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reply_shapes() {
        let ok = Reply::success(RequestId::Number(3), json!({ "a": 1 })).into_value();
        assert_eq!(ok, json!({ "jsonrpc": "2.0", "id": 3, "result": { "a": 1 } }));

        let err = Reply::failure(
            RequestId::Text("x".to_string()),
            &McpError::MethodNotFound("tools/delete".to_string()),
        )
        .into_value();
        assert_eq!(err["id"], "x");
        assert_eq!(err["error"]["code"], -32601);
        assert_eq!(err["error"]["message"], "Method not found: tools/delete");
        assert!(err.get("result").is_none());
    }

    #[test]
    fn test_incoming_is_split_on_id() {
        let msg: Incoming =
            serde_json::from_value(json!({ "jsonrpc": "2.0", "id": null, "method": "ping" }))
                .unwrap();
        assert!(matches!(msg, Incoming::Request(ref r) if r.id == RequestId::Null));

        let msg: Incoming =
            serde_json::from_value(json!({ "jsonrpc": "2.0", "method": "initialized" })).unwrap();
        assert!(matches!(msg, Incoming::Notification(_)));
    }

    #[test]
    fn test_params_required() {
        let request: Request =
            serde_json::from_value(json!({ "jsonrpc": "2.0", "id": 1, "method": "tools/call" }))
                .unwrap();
        let err = request.params_as::<Value>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid params: tools/call requires params");
    }
}
