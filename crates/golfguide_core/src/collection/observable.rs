//! Observable ordered collection.
//!
//! # Responsibility
//! - Hold an ordered sequence and report every mutation as one typed event.
//! - Fan events out to subscribers after the mutation is applied.
//!
//! # Invariants
//! - A rejected mutation (bad index) leaves the sequence untouched and
//!   emits nothing.
//! - Subscribers run in registration order and observe post-mutation state
//!   through the event only; the collection is not re-entrant.
//! - Inside [`ObservableVec::batch`] nothing is emitted until the batch ends;
//!   a batch of several mutations is observed as one `Reset`.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// One applied mutation of an [`ObservableVec`].
///
/// Each variant carries only the fields its consumers need. Positions are
/// post-mutation for `Insert`/`Move.to`/`Replace` and pre-mutation for
/// `Remove`/`Move.from`.
#[derive(Debug, PartialEq, Eq)]
pub enum CollectionChange<'a, T> {
    Insert { index: usize, value: &'a T },
    Move { from: usize, to: usize },
    Remove { index: usize },
    Replace { index: usize, value: &'a T },
    /// Contents replaced wholesale; carries the new contents.
    Reset { values: &'a [T] },
}

impl<T> Clone for CollectionChange<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for CollectionChange<'_, T> {}

impl<T> CollectionChange<'_, T> {
    /// Stable action name used in diagnostics.
    pub fn action(&self) -> &'static str {
        match self {
            Self::Insert { .. } => "insert",
            Self::Move { .. } => "move",
            Self::Remove { .. } => "remove",
            Self::Replace { .. } => "replace",
            Self::Reset { .. } => "reset",
        }
    }
}

/// Index-level mutation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// Index is outside the valid range for the attempted operation.
    IndexOutOfRange { index: usize, len: usize },
}

impl Display for CollectionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for collection of length {len}")
            }
        }
    }
}

impl Error for CollectionError {}

pub type CollectionResult<T> = Result<T, CollectionError>;

/// Handle returned by `subscribe`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub(crate) u64);

type ChangeCallback<T> = Box<dyn FnMut(CollectionChange<'_, T>)>;

/// Owned record of an applied mutation, turned into a [`CollectionChange`]
/// when it is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Applied {
    Insert(usize),
    Move(usize, usize),
    Remove(usize),
    Replace(usize),
    Reset,
}

/// Read-only positional access used by projections.
pub trait IndexedSource<T> {
    fn len(&self) -> usize;
    fn get(&self, index: usize) -> Option<&T>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> IndexedSource<T> for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<T> IndexedSource<T> for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

/// Ordered sequence that notifies subscribers of every mutation.
pub struct ObservableVec<T> {
    values: Vec<T>,
    subscribers: Vec<(SubscriptionId, ChangeCallback<T>)>,
    next_subscription: u64,
    held: Option<Vec<Applied>>,
}

impl<T> Default for ObservableVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ObservableVec<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservableVec")
            .field("values", &self.values)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl<T> ObservableVec<T> {
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            subscribers: Vec::new(),
            next_subscription: 0,
            held: None,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.values.get(index)
    }

    /// Mutable access to one element. In-place edits are not collection
    /// changes and emit nothing.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.values.get_mut(index)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    /// Registers a change callback. Callbacks fire in registration order.
    pub fn subscribe(
        &mut self,
        callback: impl FnMut(CollectionChange<'_, T>) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Removes a callback. Returns `false` when the id is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    /// Appends one value at the end and returns its index.
    pub fn push(&mut self, value: T) -> usize {
        let index = self.values.len();
        self.values.push(value);
        self.emit(Applied::Insert(index));
        index
    }

    /// Inserts at `index`, accepting `0..=len`.
    pub fn insert(&mut self, index: usize, value: T) -> CollectionResult<()> {
        let len = self.values.len();
        if index > len {
            return Err(CollectionError::IndexOutOfRange { index, len });
        }
        self.values.insert(index, value);
        self.emit(Applied::Insert(index));
        Ok(())
    }

    /// Moves the element at `from` so it ends up at `to`.
    ///
    /// Returns `Ok(false)` for `from == to`; nothing is emitted in that case.
    pub fn move_item(&mut self, from: usize, to: usize) -> CollectionResult<bool> {
        self.check_index(from)?;
        self.check_index(to)?;
        if from == to {
            return Ok(false);
        }
        let value = self.values.remove(from);
        self.values.insert(to, value);
        self.emit(Applied::Move(from, to));
        Ok(true)
    }

    /// Removes and returns the element at `index`.
    pub fn remove(&mut self, index: usize) -> CollectionResult<T> {
        self.check_index(index)?;
        let removed = self.values.remove(index);
        self.emit(Applied::Remove(index));
        Ok(removed)
    }

    /// Overwrites the element at `index`, returning the previous value.
    pub fn replace(&mut self, index: usize, value: T) -> CollectionResult<T> {
        self.check_index(index)?;
        let previous = std::mem::replace(&mut self.values[index], value);
        self.emit(Applied::Replace(index));
        Ok(previous)
    }

    /// Replaces the whole contents.
    pub fn reset(&mut self, values: impl IntoIterator<Item = T>) {
        self.values = values.into_iter().collect();
        self.emit(Applied::Reset);
    }

    /// Removes every element (a `Reset` event).
    pub fn clear(&mut self) {
        self.values.clear();
        self.emit(Applied::Reset);
    }

    /// Runs several mutations as one observable step.
    ///
    /// Subscribers hear nothing while `apply` runs. Afterwards a lone
    /// mutation is emitted as its own event and two or more are emitted as a
    /// single `Reset`, so no subscriber sees an intermediate length. Nested
    /// batches join the outermost one.
    pub fn batch<R>(&mut self, apply: impl FnOnce(&mut Self) -> R) -> R {
        if self.held.is_some() {
            return apply(self);
        }
        self.held = Some(Vec::new());
        let result = apply(self);
        let held = self.held.take().unwrap_or_default();
        match held.as_slice() {
            [] => {}
            [single] => self.emit(*single),
            _ => self.emit(Applied::Reset),
        }
        result
    }

    fn emit(&mut self, applied: Applied) {
        if let Some(held) = self.held.as_mut() {
            held.push(applied);
            return;
        }
        let change = match applied {
            Applied::Insert(index) => CollectionChange::Insert {
                index,
                value: &self.values[index],
            },
            Applied::Move(from, to) => CollectionChange::Move { from, to },
            Applied::Remove(index) => CollectionChange::Remove { index },
            Applied::Replace(index) => CollectionChange::Replace {
                index,
                value: &self.values[index],
            },
            Applied::Reset => CollectionChange::Reset {
                values: &self.values,
            },
        };
        dispatch(&mut self.subscribers, change);
    }

    fn check_index(&self, index: usize) -> CollectionResult<()> {
        let len = self.values.len();
        if index >= len {
            return Err(CollectionError::IndexOutOfRange { index, len });
        }
        Ok(())
    }
}

fn dispatch<T>(
    subscribers: &mut [(SubscriptionId, ChangeCallback<T>)],
    change: CollectionChange<'_, T>,
) {
    for (_, callback) in subscribers.iter_mut() {
        callback(change);
    }
}

impl<T> IndexedSource<T> for ObservableVec<T> {
    fn len(&self) -> usize {
        self.values.len()
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.values.get(index)
    }
}

impl<'a, T> IntoIterator for &'a ObservableVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<T> FromIterator<T> for ObservableVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
            subscribers: Vec::new(),
            next_subscription: 0,
            held: None,
        }
    }
}
