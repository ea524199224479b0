//! Tool definitions module.
//!
//! Each tool lives in its own file and exposes `NAME`, `to_tool()`,
//! `create_route()` and `http_handler()`.

mod add;
mod breeds;
pub mod common;
pub mod ddi;

pub use add::{AddParams, AddTool};
pub use breeds::{BreedListing, ListBreedsParams, ListBreedsTool};
pub use ddi::{
    ListGridMembersParams, ListGridMembersTool, ListRecordsParams, ListRecordsTool,
    ListZonesParams, ListZonesTool,
};
