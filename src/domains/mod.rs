//! Domains module containing business logic organized by bounded contexts.
//!
//! `infoblox` talks to the upstream services; `tools`, `resources` and
//! `prompts` expose that (and a few utilities) to MCP clients.

pub mod infoblox;
pub mod prompts;
pub mod resources;
pub mod tools;
