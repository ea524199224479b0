//! Prompt templates offered to MCP clients.
//!
//! Each prompt lives in its own file under `definitions/` and is listed in
//! `registry.rs`; `PromptService` renders them on request.

pub mod definitions;
mod error;
mod registry;
mod service;
pub mod templates;

pub use definitions::PromptDefinition;
pub use error::PromptError;
pub use registry::{get_all_prompts, prompt_names};
pub use service::PromptService;
pub use templates::PromptTemplate;
