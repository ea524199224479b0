//! Infoblox domain module.
//!
//! Typed WAPI records and the client that fetches them. The breed listing
//! lives here too since it goes through the same client.

mod client;
mod error;
pub mod models;

pub use client::InfobloxClient;
pub use error::ClientError;
pub use models::{Breed, BreedAttributes, BreedId, DnsRecord, GridMember, Zone};
