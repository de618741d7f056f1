//! MCP resources: the questionnaire catalog and the live policy summary.

pub mod catalog;
pub mod registry;

pub use registry::ResourceRegistry;
