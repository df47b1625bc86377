//! Item domain model.
//!
//! # Responsibility
//! - One content entry with body text and grid layout hints.
//! - Remember the owning group by id for navigation.
//!
//! # Invariants
//! - `col_span` and `row_span` are always >= 1.
//! - The owning group id is fixed at construction; items never move between groups.

use crate::model::node::ContentNode;
use crate::model::notify::Property;
use std::cell::RefCell;
use std::fmt::{Display, Formatter};
use std::ops::Deref;

/// Construction input for [`Item`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFields {
    pub unique_id: String,
    pub title: String,
    pub subtitle: String,
    pub image_path: Option<String>,
    pub description: String,
    pub content: String,
    pub col_span: u32,
    pub row_span: u32,
    pub group_id: String,
}

impl ItemFields {
    /// Minimal fields; display strings empty, spans 1x1, no image.
    pub fn new(
        unique_id: impl Into<String>,
        group_id: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            unique_id: unique_id.into(),
            title: title.into(),
            subtitle: String::new(),
            image_path: None,
            description: String::new(),
            content: String::new(),
            col_span: 1,
            row_span: 1,
            group_id: group_id.into(),
        }
    }
}

/// A single content entry belonging to exactly one group.
#[derive(Debug)]
pub struct Item {
    node: ContentNode,
    content: RefCell<String>,
    col_span: RefCell<u32>,
    row_span: RefCell<u32>,
    group_id: String,
}

impl Item {
    pub fn new(fields: ItemFields) -> Self {
        Self {
            node: ContentNode::new(
                fields.unique_id,
                fields.title,
                fields.subtitle,
                fields.image_path,
                fields.description,
            ),
            content: RefCell::new(fields.content),
            col_span: RefCell::new(fields.col_span.max(1)),
            row_span: RefCell::new(fields.row_span.max(1)),
            group_id: fields.group_id,
        }
    }

    pub fn node(&self) -> &ContentNode {
        &self.node
    }

    pub fn content(&self) -> String {
        self.content.borrow().clone()
    }

    pub fn set_content(&self, value: impl Into<String>) {
        self.node.set_field(&self.content, value.into(), Property::Content);
    }

    pub fn col_span(&self) -> u32 {
        *self.col_span.borrow()
    }

    /// Sets the column span; zero is clamped to 1.
    pub fn set_col_span(&self, span: u32) {
        self.node.set_field(&self.col_span, span.max(1), Property::ColSpan);
    }

    pub fn row_span(&self) -> u32 {
        *self.row_span.borrow()
    }

    /// Sets the row span; zero is clamped to 1.
    pub fn set_row_span(&self, span: u32) {
        self.node.set_field(&self.row_span, span.max(1), Property::RowSpan);
    }

    /// Id of the owning group.
    pub fn group_id(&self) -> &str {
        &self.group_id
    }
}

impl Deref for Item {
    type Target = ContentNode;

    fn deref(&self) -> &Self::Target {
        &self.node
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.node, f)
    }
}
