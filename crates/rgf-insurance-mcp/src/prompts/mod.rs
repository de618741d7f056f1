//! MCP prompts.

pub mod consultation;
pub mod registry;

pub use registry::PromptRegistry;
