//! MCP server for the RGF insurance advisor: the car insurance page and the
//! recommendation engine exposed as LLM tools.

pub mod config;
pub mod prompts;
pub mod protocol;
pub mod repl;
pub mod resources;
pub mod tools;
pub mod transport;
pub mod types;

pub use config::resolve_target_url;
pub use protocol::ProtocolHandler;
pub use transport::StdioTransport;
