//! Property-change observers for bindable model attributes.
//!
//! # Invariants
//! - Observers run after the new value is stored.
//! - No internal borrow is held while observers run, so an observer may read
//!   the node or (un)subscribe without panicking.

use crate::collection::observable::SubscriptionId;
use std::cell::{Cell, RefCell};
use std::fmt::{Display, Formatter};
use std::rc::Rc;

/// Observable attribute of an item or group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Title,
    Subtitle,
    Description,
    Image,
    Content,
    ColSpan,
    RowSpan,
}

impl Property {
    /// Binding name of the attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Subtitle => "Subtitle",
            Self::Description => "Description",
            Self::Image => "Image",
            Self::Content => "Content",
            Self::ColSpan => "ColSpan",
            Self::RowSpan => "RowSpan",
        }
    }
}

impl Display for Property {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

type PropertyCallback = Rc<dyn Fn(Property)>;

/// Registered property-change callbacks of one node.
#[derive(Default)]
pub struct PropertyObservers {
    callbacks: RefCell<Vec<(SubscriptionId, PropertyCallback)>>,
    next_id: Cell<u64>,
}

impl PropertyObservers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, callback: impl Fn(Property) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        self.callbacks.borrow_mut().push((id, Rc::new(callback)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut callbacks = self.callbacks.borrow_mut();
        let before = callbacks.len();
        callbacks.retain(|(existing, _)| *existing != id);
        callbacks.len() != before
    }

    pub fn len(&self) -> usize {
        self.callbacks.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.borrow().is_empty()
    }

    pub fn notify(&self, property: Property) {
        let snapshot: Vec<PropertyCallback> = self
            .callbacks
            .borrow()
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();
        for callback in snapshot {
            callback(property);
        }
    }
}

impl std::fmt::Debug for PropertyObservers {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropertyObservers")
            .field("len", &self.len())
            .finish()
    }
}
