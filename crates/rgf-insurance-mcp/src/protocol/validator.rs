//! Request envelope checks.

use crate::types::{Request, McpError, McpResult, JSONRPC_VERSION};

/// Reject requests with a wrong `jsonrpc` version or an empty method.
pub fn validate_request(request: &Request) -> McpResult<()> {
    if request.jsonrpc != JSONRPC_VERSION {
        return Err(McpError::InvalidRequest(format!(
            "Expected jsonrpc version \"{JSONRPC_VERSION}\", got \"{}\"",
            request.jsonrpc
        )));
    }

    if request.method.trim().is_empty() {
        return Err(McpError::InvalidRequest(
            "Method name must not be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RequestId;

    fn request(jsonrpc: &str, method: &str) -> Request {
        Request {
            jsonrpc: jsonrpc.to_string(),
            id: RequestId::Number(1),
            method: method.to_string(),
            params: None,
        }
    }

    #[test]
    fn test_accepts_well_formed() {
        assert!(validate_request(&request("2.0", "tools/list")).is_ok());
    }

    #[test]
    fn test_rejects_version_and_blank_method() {
        assert_eq!(validate_request(&request("1.0", "ping")).unwrap_err().code(), -32600);
        assert_eq!(validate_request(&request("2.0", "  ")).unwrap_err().code(), -32600);
    }
}
