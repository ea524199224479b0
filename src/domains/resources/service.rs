//! Resource service implementation.
//!
//! There are no fixed resources; every readable URI comes from a template.
//! A read is offered to each template in registration order and the first
//! one that recognises the URI answers.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents, ResourceTemplate};
use tracing::{debug, info};

use super::error::ResourceError;
use super::registry::get_all_resource_templates;

/// Renders the content behind a template URI.
pub type ReadFn = fn(&str) -> Option<Result<String, ResourceError>>;

/// An entry in the template registry.
#[derive(Debug, Clone)]
pub struct TemplateEntry {
    /// The template metadata advertised to clients.
    pub template: ResourceTemplate,

    pub read: ReadFn,
}

/// Service for listing and reading resources.
pub struct ResourceService {
    templates: Vec<TemplateEntry>,
}

impl Default for ResourceService {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceService {
    pub fn new() -> Self {
        info!("Initializing ResourceService");
        let templates = get_all_resource_templates();
        for entry in &templates {
            debug!("Registering resource template: {}", entry.template.raw.uri_template);
        }
        Self { templates }
    }

    /// List all concrete resources (none are registered).
    pub async fn list_resources(&self) -> Vec<Resource> {
        Vec::new()
    }

    /// List all available resource templates.
    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.templates
            .iter()
            .map(|entry| entry.template.clone())
            .collect()
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        if !uri.contains("://") {
            return Err(ResourceError::invalid_uri(uri));
        }

        let text = self
            .templates
            .iter()
            .find_map(|entry| (entry.read)(uri))
            .ok_or_else(|| ResourceError::not_found(uri))??;

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(text, uri)],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_no_static_resources() {
        let service = ResourceService::new();
        assert!(service.list_resources().await.is_empty());
        assert_eq!(service.list_resource_templates().await.len(), 1);
    }

    #[tokio::test]
    async fn test_read_greeting() {
        let service = ResourceService::new();
        let result = service.read_resource("greeting://Ana").await.unwrap();
        let contents = serde_json::to_value(&result.contents[0]).unwrap();
        assert_eq!(contents["text"], "Hello, Ana!");
        assert_eq!(contents["uri"], "greeting://Ana");
    }

    #[tokio::test]
    async fn test_read_unknown_scheme() {
        let service = ResourceService::new();
        let result = service.read_resource("weather://Paris").await;
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_read_invalid_uri() {
        let service = ResourceService::new();
        let result = service.read_resource("not a uri").await;
        assert!(matches!(result, Err(ResourceError::InvalidUri(_))));
    }
}
