//! Serializable read views of the catalog.
//!
//! # Responsibility
//! - Flatten live model state into plain data for UI adapters and tooling.
//!
//! # Invariants
//! - A snapshot is a copy; it never aliases live model state.
//! - Capturing resolves pending image paths through the supplied resolver,
//!   the same way a UI read would.

use crate::catalog::Catalog;
use crate::image::ImageResolver;
use crate::model::group::Group;
use crate::model::item::Item;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSnapshot {
    pub unique_id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub content: String,
    /// Resolved image URI; `None` when absent or unresolvable.
    pub image: Option<String>,
    pub col_span: u32,
    pub row_span: u32,
    pub group_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSnapshot {
    pub unique_id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub image: Option<String>,
    pub items: Vec<ItemSnapshot>,
    /// Ids of the capped preview, in order.
    pub top_item_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub groups: Vec<GroupSnapshot>,
}

impl ItemSnapshot {
    pub fn capture(item: &Item, resolver: &dyn ImageResolver) -> Self {
        Self {
            unique_id: item.unique_id().to_string(),
            title: item.title(),
            subtitle: item.subtitle(),
            description: item.description(),
            content: item.content(),
            image: item.image(resolver).map(|handle| handle.uri().to_string()),
            col_span: item.col_span(),
            row_span: item.row_span(),
            group_id: item.group_id().to_string(),
        }
    }
}

impl GroupSnapshot {
    pub fn capture(group: &Group, resolver: &dyn ImageResolver) -> Self {
        Self {
            unique_id: group.unique_id().to_string(),
            title: group.title(),
            subtitle: group.subtitle(),
            description: group.description(),
            image: group.image(resolver).map(|handle| handle.uri().to_string()),
            items: group
                .items()
                .iter()
                .map(|item| ItemSnapshot::capture(item, resolver))
                .collect(),
            top_item_ids: group
                .top_items()
                .iter()
                .map(|item| item.unique_id().to_string())
                .collect(),
        }
    }
}

impl CatalogSnapshot {
    pub fn capture(catalog: &Catalog, resolver: &dyn ImageResolver) -> Self {
        Self {
            groups: catalog
                .groups()
                .iter()
                .map(|group| GroupSnapshot::capture(group, resolver))
                .collect(),
        }
    }

    pub fn item_count(&self) -> usize {
        self.groups.iter().map(|group| group.items.len()).sum()
    }
}
