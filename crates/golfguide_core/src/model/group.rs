//! Group domain model.
//!
//! # Responsibility
//! - Own the ordered item list of one group.
//! - Keep the capped `top_items` preview in lock-step with `items`.
//!
//! # Invariants
//! - After every mutation method returns, `top_items` equals the first
//!   `min(TOP_ITEMS_CAP, items.len())` entries of `items`.
//! - `top_items` is only ever changed by the projection maintainer.
//! - Every item's `group_id` equals this group's `unique_id`.

use crate::collection::observable::{
    CollectionChange, CollectionError, ObservableVec, SubscriptionId,
};
use crate::collection::projection::{apply_change, rebuild};
use crate::model::item::Item;
use crate::model::node::ContentNode;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::rc::Rc;

/// Construction input for [`Group`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupFields {
    pub unique_id: String,
    pub title: String,
    pub subtitle: String,
    pub image_path: Option<String>,
    pub description: String,
}

impl GroupFields {
    /// Minimal fields; subtitle and description empty, no image.
    pub fn new(unique_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            unique_id: unique_id.into(),
            title: title.into(),
            subtitle: String::new(),
            image_path: None,
            description: String::new(),
        }
    }
}

/// Errors from group item mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupError {
    /// Item was built for another group.
    ForeignItem {
        item_id: String,
        item_group: String,
        group_id: String,
    },
    /// Index outside the item list.
    Collection(CollectionError),
}

impl Display for GroupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ForeignItem {
                item_id,
                item_group,
                group_id,
            } => write!(
                f,
                "item {item_id} belongs to group {item_group}, not {group_id}"
            ),
            Self::Collection(err) => write!(f, "{err}"),
        }
    }
}

impl Error for GroupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Collection(err) => Some(err),
            Self::ForeignItem { .. } => None,
        }
    }
}

impl From<CollectionError> for GroupError {
    fn from(value: CollectionError) -> Self {
        Self::Collection(value)
    }
}

pub type GroupResult<T> = Result<T, GroupError>;

/// Named bucket of items with a capped preview projection.
#[derive(Debug)]
pub struct Group {
    node: ContentNode,
    items: ObservableVec<Rc<Item>>,
    top_items: ObservableVec<Rc<Item>>,
}

impl Group {
    pub fn new(fields: GroupFields) -> Self {
        Self {
            node: ContentNode::new(
                fields.unique_id,
                fields.title,
                fields.subtitle,
                fields.image_path,
                fields.description,
            ),
            items: ObservableVec::new(),
            top_items: ObservableVec::new(),
        }
    }

    pub fn node(&self) -> &ContentNode {
        &self.node
    }

    /// Full ordered item list.
    pub fn items(&self) -> &[Rc<Item>] {
        self.items.as_slice()
    }

    /// Capped preview of `items`.
    pub fn top_items(&self) -> &[Rc<Item>] {
        self.top_items.as_slice()
    }

    /// Appends an item and returns the shared handle stored in the group.
    pub fn push_item(&mut self, item: Item) -> GroupResult<Rc<Item>> {
        let index = self.items.len();
        self.insert_item(index, item)
    }

    pub fn insert_item(&mut self, index: usize, item: Item) -> GroupResult<Rc<Item>> {
        self.ensure_member(&item)?;
        let item = Rc::new(item);
        self.items.insert(index, Rc::clone(&item))?;
        let change = CollectionChange::Insert {
            index,
            value: &self.items.as_slice()[index],
        };
        apply_change(&mut self.top_items, &self.items, change);
        Ok(item)
    }

    /// Moves the item at `from` to `to`. Same-position moves are no-ops.
    pub fn move_item(&mut self, from: usize, to: usize) -> GroupResult<()> {
        if self.items.move_item(from, to)? {
            apply_change(
                &mut self.top_items,
                &self.items,
                CollectionChange::Move { from, to },
            );
        }
        Ok(())
    }

    pub fn remove_item(&mut self, index: usize) -> GroupResult<Rc<Item>> {
        let removed = self.items.remove(index)?;
        apply_change(
            &mut self.top_items,
            &self.items,
            CollectionChange::Remove { index },
        );
        Ok(removed)
    }

    /// Replaces the item at `index`, returning the previous one.
    pub fn replace_item(&mut self, index: usize, item: Item) -> GroupResult<Rc<Item>> {
        self.ensure_member(&item)?;
        let previous = self.items.replace(index, Rc::new(item))?;
        let change = CollectionChange::Replace {
            index,
            value: &self.items.as_slice()[index],
        };
        apply_change(&mut self.top_items, &self.items, change);
        Ok(previous)
    }

    /// Replaces the whole item list. Nothing changes if any item is foreign.
    pub fn reset_items(&mut self, items: impl IntoIterator<Item = Item>) -> GroupResult<()> {
        let items: Vec<Item> = items.into_iter().collect();
        for item in &items {
            self.ensure_member(item)?;
        }
        self.items.reset(items.into_iter().map(Rc::new));
        rebuild(&mut self.top_items, &self.items);
        debug!(
            "event=top_items_reset module=group status=ok group={} items={} top_items={}",
            self.node.unique_id(),
            self.items.len(),
            self.top_items.len()
        );
        Ok(())
    }

    pub fn clear_items(&mut self) {
        self.items.clear();
        rebuild(&mut self.top_items, &self.items);
    }

    /// Observes the full item list.
    pub fn subscribe_items(
        &mut self,
        callback: impl FnMut(CollectionChange<'_, Rc<Item>>) + 'static,
    ) -> SubscriptionId {
        self.items.subscribe(callback)
    }

    pub fn unsubscribe_items(&mut self, id: SubscriptionId) -> bool {
        self.items.unsubscribe(id)
    }

    /// Observes the capped preview.
    pub fn subscribe_top_items(
        &mut self,
        callback: impl FnMut(CollectionChange<'_, Rc<Item>>) + 'static,
    ) -> SubscriptionId {
        self.top_items.subscribe(callback)
    }

    pub fn unsubscribe_top_items(&mut self, id: SubscriptionId) -> bool {
        self.top_items.unsubscribe(id)
    }

    fn ensure_member(&self, item: &Item) -> GroupResult<()> {
        if item.group_id() != self.node.unique_id() {
            return Err(GroupError::ForeignItem {
                item_id: item.unique_id().to_string(),
                item_group: item.group_id().to_string(),
                group_id: self.node.unique_id().to_string(),
            });
        }
        Ok(())
    }
}

impl Deref for Group {
    type Target = ContentNode;

    fn deref(&self) -> &Self::Target {
        &self.node
    }
}

impl Display for Group {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.node, f)
    }
}
