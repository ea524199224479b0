//! Resource definitions module.
//!
//! Each resource template lives in its own file and implements
//! `ResourceTemplateDefinition`.

mod greeting;

pub use greeting::GreetingResource;

use super::error::ResourceError;

/// Trait for parameterised resources described by an RFC 6570 URI template.
pub trait ResourceTemplateDefinition {
    /// The URI template, e.g. `greeting://{name}`.
    const URI_TEMPLATE: &'static str;

    /// The display name of the template.
    const NAME: &'static str;

    /// A description of the template.
    const DESCRIPTION: &'static str;

    /// The MIME type of the rendered content.
    const MIME_TYPE: &'static str;

    /// Render the resource at `uri`.
    ///
    /// Returns `None` when `uri` does not belong to this template.
    fn read(uri: &str) -> Option<Result<String, ResourceError>>;
}
