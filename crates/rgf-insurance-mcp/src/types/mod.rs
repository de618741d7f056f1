//! Wire types: JSON-RPC envelopes, the MCP handshake, and tool/resource/prompt
//! payloads.

pub mod content;
pub mod envelope;
pub mod error;
pub mod handshake;

pub use content::*;
pub use envelope::*;
pub use error::*;
pub use handshake::*;
