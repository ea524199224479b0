//! Resources domain module.
//!
//! Resources represent data that MCP clients can read by URI.
//!
//! - `definitions/` - Individual resource templates (one file per template)
//! - `registry.rs` - Central template registration
//! - `service.rs` - Listing and reading

pub mod definitions;
mod error;
mod registry;
mod service;

pub use definitions::ResourceTemplateDefinition;
pub use error::ResourceError;
pub use registry::{get_all_resource_templates, resource_template_uris};
pub use service::{ReadFn, ResourceService, TemplateEntry};
