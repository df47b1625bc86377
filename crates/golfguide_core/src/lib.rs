//! Core content model for Golf Guide.
//! Groups, items, their capped previews and catalog lookups live here.

pub mod catalog;
pub mod collection;
pub mod image;
pub mod logging;
pub mod model;
pub mod sample_data;
pub mod snapshot;

pub use catalog::{Catalog, CatalogError, CatalogResult, LookupKind, ALL_GROUPS_SELECTOR};
pub use collection::observable::{
    CollectionChange, CollectionError, IndexedSource, ObservableVec, SubscriptionId,
};
pub use collection::projection::TOP_ITEMS_CAP;
pub use image::{BaseUriResolver, ImageError, ImageHandle, ImageResolver, DEFAULT_IMAGE_BASE_URI};
pub use logging::{
    default_log_dir, default_log_level, init_logging, logging_status, LoggingStatus,
};
pub use model::group::{Group, GroupError, GroupFields, GroupResult};
pub use model::item::{Item, ItemFields};
pub use model::node::{ContentNode, ImageRef};
pub use model::notify::Property;
pub use sample_data::build_sample_catalog;
pub use snapshot::{CatalogSnapshot, GroupSnapshot, ItemSnapshot};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
