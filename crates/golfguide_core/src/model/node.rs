//! Display state shared by items and groups.
//!
//! # Responsibility
//! - Hold identifier, display strings and the image reference of one entity.
//! - Notify observers by attribute name after every effective change.
//!
//! # Invariants
//! - `unique_id` never changes after construction.
//! - The image is either absent, an unresolved path, or a resolved handle;
//!   never a path and a handle at once.
//! - Setters release their borrow before observers run.

use crate::collection::observable::SubscriptionId;
use crate::image::{ImageHandle, ImageResolver};
use crate::model::notify::{Property, PropertyObservers};
use log::warn;
use std::cell::RefCell;
use std::fmt::{Display, Formatter};

/// Image attribute of a node.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ImageRef {
    #[default]
    None,
    /// Relative path, resolved on first read.
    Path(String),
    /// Materialized handle.
    Resolved(ImageHandle),
}

impl ImageRef {
    fn from_path(path: Option<String>) -> Self {
        match path {
            Some(path) => Self::Path(path),
            None => Self::None,
        }
    }
}

/// Common bindable attributes of items and groups.
#[derive(Debug)]
pub struct ContentNode {
    unique_id: String,
    title: RefCell<String>,
    subtitle: RefCell<String>,
    description: RefCell<String>,
    image: RefCell<ImageRef>,
    observers: PropertyObservers,
}

impl ContentNode {
    pub fn new(
        unique_id: impl Into<String>,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        image_path: Option<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            unique_id: unique_id.into(),
            title: RefCell::new(title.into()),
            subtitle: RefCell::new(subtitle.into()),
            description: RefCell::new(description.into()),
            image: RefCell::new(ImageRef::from_path(image_path)),
            observers: PropertyObservers::new(),
        }
    }

    pub fn unique_id(&self) -> &str {
        &self.unique_id
    }

    pub fn title(&self) -> String {
        self.title.borrow().clone()
    }

    pub fn set_title(&self, value: impl Into<String>) {
        self.set_field(&self.title, value.into(), Property::Title);
    }

    pub fn subtitle(&self) -> String {
        self.subtitle.borrow().clone()
    }

    pub fn set_subtitle(&self, value: impl Into<String>) {
        self.set_field(&self.subtitle, value.into(), Property::Subtitle);
    }

    pub fn description(&self) -> String {
        self.description.borrow().clone()
    }

    pub fn set_description(&self, value: impl Into<String>) {
        self.set_field(&self.description, value.into(), Property::Description);
    }

    /// Current image representation without resolving it.
    pub fn image_ref(&self) -> ImageRef {
        self.image.borrow().clone()
    }

    /// Returns the image, resolving a pending path on first read.
    ///
    /// A failed resolution is logged and keeps the path pending, so the next
    /// read retries.
    pub fn image(&self, resolver: &dyn ImageResolver) -> Option<ImageHandle> {
        let pending = match &*self.image.borrow() {
            ImageRef::None => return None,
            ImageRef::Resolved(handle) => return Some(handle.clone()),
            ImageRef::Path(path) => path.clone(),
        };

        match resolver.resolve(&pending) {
            Ok(handle) => {
                *self.image.borrow_mut() = ImageRef::Resolved(handle.clone());
                Some(handle)
            }
            Err(err) => {
                warn!(
                    "event=image_resolve module=model status=error node={} error={}",
                    self.unique_id, err
                );
                None
            }
        }
    }

    /// Stores a resolved handle (or clears the image), dropping any pending path.
    pub fn set_image(&self, handle: Option<ImageHandle>) {
        let value = match handle {
            Some(handle) => ImageRef::Resolved(handle),
            None => ImageRef::None,
        };
        self.set_field(&self.image, value, Property::Image);
    }

    /// Stores a path to resolve lazily, dropping any cached handle.
    pub fn set_image_path(&self, path: impl Into<String>) {
        *self.image.borrow_mut() = ImageRef::Path(path.into());
        self.observers.notify(Property::Image);
    }

    /// Registers a property-change observer.
    pub fn subscribe(&self, callback: impl Fn(Property) + 'static) -> SubscriptionId {
        self.observers.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Stores `value` and notifies `property` when it differs from the
    /// current value. Returns whether a change happened.
    pub(crate) fn set_field<V: PartialEq>(
        &self,
        cell: &RefCell<V>,
        value: V,
        property: Property,
    ) -> bool {
        {
            let mut current = cell.borrow_mut();
            if *current == value {
                return false;
            }
            *current = value;
        }
        self.observers.notify(property);
        true
    }
}

impl Display for ContentNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.title.borrow())
    }
}
