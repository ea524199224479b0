//! Resource Registry - central registration of all resource templates.
//!
//! When adding a new template:
//! 1. Create the file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_resource_templates()`

use rmcp::model::{AnnotateAble, RawResourceTemplate};

use super::definitions::{GreetingResource, ResourceTemplateDefinition};
use super::service::TemplateEntry;

/// Build a registry entry from a template definition.
fn build_template<R: ResourceTemplateDefinition>() -> TemplateEntry {
    TemplateEntry {
        template: RawResourceTemplate {
            uri_template: R::URI_TEMPLATE.to_string(),
            name: R::NAME.to_string(),
            title: None,
            description: Some(R::DESCRIPTION.to_string()),
            mime_type: Some(R::MIME_TYPE.to_string()),
        }
        .no_annotation(),
        read: R::read,
    }
}

/// Get all registered resource templates.
pub fn get_all_resource_templates() -> Vec<TemplateEntry> {
    vec![build_template::<GreetingResource>()]
}

/// Get the URI templates of all registered templates.
pub fn resource_template_uris() -> Vec<&'static str> {
    vec![GreetingResource::URI_TEMPLATE]
}
