//! Newline-delimited JSON framing.

use serde_json::Value;

use crate::types::{Incoming, McpError, McpResult, Reply, RequestId};

/// Parse one line as a JSON-RPC message.
pub fn parse_message(line: &str) -> McpResult<Incoming> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(McpError::ParseError("Empty message".to_string()));
    }

    serde_json::from_str(trimmed).map_err(|e| McpError::ParseError(e.to_string()))
}

/// Serialize a value as one line, trailing newline included.
pub fn frame_message(value: &Value) -> McpResult<String> {
    let mut json = serde_json::to_string(value).map_err(McpError::Json)?;
    json.push('\n');
    Ok(json)
}

/// Reply to a message that could not be parsed, so has no id.
pub fn parse_error_response(error: &McpError) -> Value {
    Reply::failure(RequestId::Null, error).into_value()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_request_and_notification() {
        let msg = parse_message(r#"{"jsonrpc":"2.0","id":1,"method":"ping"}"#).unwrap();
        assert!(matches!(msg, Incoming::Request(ref r) if r.method == "ping"));

        let msg = parse_message(r#" {"jsonrpc":"2.0","method":"notifications/initialized"} "#)
            .unwrap();
        assert!(matches!(msg, Incoming::Notification(_)));
    }

    #[test]
    fn test_parse_garbage() {
        assert!(matches!(parse_message("{not json"), Err(McpError::ParseError(_))));
        assert!(matches!(parse_message("   "), Err(McpError::ParseError(_))));
    }

    #[test]
    fn test_frame_ends_with_newline() {
        let framed = frame_message(&serde_json::json!({"a": 1})).unwrap();
        assert_eq!(framed, "{\"a\":1}\n");
    }

    #[test]
    fn test_parse_error_response_has_null_id() {
        let err = parse_message("nope").unwrap_err();
        let value = parse_error_response(&err);
        assert_eq!(value["id"], serde_json::Value::Null);
        assert_eq!(value["error"]["code"], -32700);
    }
}
