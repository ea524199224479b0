//! Typed records decoded from WAPI and breed API responses.
//!
//! Upstream objects carry their reference identifier as `_ref`; the records
//! read it from there and write it back out as `ref`.

use serde::{Deserialize, Serialize};

/// An authoritative DNS zone (`zone_auth`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub fqdn: String,
    pub view: String,
    #[serde(rename(deserialize = "_ref", serialize = "ref"))]
    pub reference: String,
}

/// A DNS A record (`record:a`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    pub name: String,
    pub ipv4addr: String,
    /// Only present when the provider includes it in the response.
    #[serde(default)]
    pub zone: Option<String>,
    #[serde(rename(deserialize = "_ref", serialize = "ref"))]
    pub reference: String,
}

/// A grid member (`member`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridMember {
    pub host_name: String,
    pub ipv4_address: String,
    /// `None` means the status is unknown, not that the member is down.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(rename(deserialize = "_ref", serialize = "ref"))]
    pub reference: String,
}

/// Identifier of a breed entry.
///
/// The dataset historically used numeric ids; the current API issues UUIDs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BreedId {
    Numeric(i64),
    Opaque(String),
}

/// A dog breed from the public reference API (JSON:API resource object).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breed {
    pub id: BreedId,
    #[serde(rename = "type")]
    pub kind: String,
    pub attributes: BreedAttributes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreedAttributes {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub hypoallergenic: Option<bool>,
}

/// Top-level envelope of the breed listing.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct BreedPage {
    pub data: Vec<Breed>,
}
