//! Greeting resource template.

use super::ResourceTemplateDefinition;
use crate::domains::resources::error::ResourceError;

const SCHEME: &str = "greeting://";

/// Personalised greeting addressed by name.
pub struct GreetingResource;

impl ResourceTemplateDefinition for GreetingResource {
    const URI_TEMPLATE: &'static str = "greeting://{name}";
    const NAME: &'static str = "Greeting";
    const DESCRIPTION: &'static str = "Get a personalized greeting";
    const MIME_TYPE: &'static str = "text/plain";

    fn read(uri: &str) -> Option<Result<String, ResourceError>> {
        let name = uri.strip_prefix(SCHEME)?;
        // `{name}` is a single path segment.
        if name.is_empty() || name.contains('/') {
            return Some(Err(ResourceError::not_found(uri)));
        }
        Some(Ok(format!("Hello, {}!", name)))
    }
}
