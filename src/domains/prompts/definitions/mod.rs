//! Prompt definitions module.
//!
//! Each prompt is defined in its own file with:
//! - Metadata (name, description, arguments)
//! - Template string
//! - An optional `prepare` hook that derives extra template variables

use rmcp::model::PromptArgument;
use std::collections::HashMap;

mod greet_user;

pub use greet_user::{GreetUserPrompt, GreetingStyle};

/// Trait for prompt definitions.
///
/// Each prompt must implement this trait to provide its metadata and template.
pub trait PromptDefinition {
    /// The unique name of the prompt.
    const NAME: &'static str;

    /// A description of what the prompt does.
    const DESCRIPTION: &'static str;

    /// The template string with {{variable}} placeholders.
    fn template() -> &'static str;

    /// The arguments this prompt accepts.
    fn arguments() -> Vec<PromptArgument>;

    /// Fill in defaults and derived variables before rendering.
    fn prepare(_arguments: &mut HashMap<String, String>) {}
}
