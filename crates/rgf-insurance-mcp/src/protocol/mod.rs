//! JSON-RPC dispatch for the MCP protocol.

pub mod handler;
pub mod negotiation;
pub mod validator;

pub use handler::ProtocolHandler;
pub use negotiation::ClientSession;
