//! Catalog of groups with id lookups.
//!
//! # Responsibility
//! - Hold groups in display order.
//! - Resolve groups and items by identifier with linear scans.
//!
//! # Invariants
//! - Group ids are expected unique across the catalog and item ids unique
//!   across all groups. Lookups only return a value for exactly one match.
//! - The catalog is an explicit value; there is no process-wide instance.

use crate::collection::observable::{CollectionChange, ObservableVec, SubscriptionId};
use crate::model::group::Group;
use crate::model::item::Item;
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

/// The only selector accepted by [`Catalog::list_groups`].
pub const ALL_GROUPS_SELECTOR: &str = "AllGroups";

/// Entity kind of a lookup, used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    Group,
    Item,
}

impl LookupKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Group => "group",
            Self::Item => "item",
        }
    }
}

/// Catalog usage and consistency errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Selector other than [`ALL_GROUPS_SELECTOR`].
    UnsupportedSelector(String),
    /// More than one entity carries the same id.
    DuplicateId {
        kind: LookupKind,
        id: String,
        matches: usize,
    },
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedSelector(selector) => write!(
                f,
                "unsupported group selector `{selector}`; only `{ALL_GROUPS_SELECTOR}` is supported"
            ),
            Self::DuplicateId { kind, id, matches } => {
                write!(f, "{} id `{id}` matches {matches} entries", kind.as_str())
            }
        }
    }
}

impl Error for CatalogError {}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Top-level container of all groups.
#[derive(Debug, Default)]
pub struct Catalog {
    groups: ObservableVec<Group>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a group; insertion order is display order.
    pub fn add_group(&mut self, group: Group) -> usize {
        self.groups.push(group)
    }

    pub fn groups(&self) -> &[Group] {
        self.groups.as_slice()
    }

    /// Mutable access to one group, for population.
    ///
    /// Follows the same exactly-one-match rule as [`Catalog::find_group`].
    pub fn group_mut(&mut self, id: &str) -> Option<&mut Group> {
        let mut positions = self
            .groups
            .iter()
            .enumerate()
            .filter(|(_, group)| group.unique_id() == id)
            .map(|(position, _)| position);
        let position = positions.next()?;
        if positions.next().is_some() {
            warn!(
                "event=catalog_lookup module=catalog status=ambiguous kind=group id={}",
                id
            );
            return None;
        }
        self.groups.get_mut(position)
    }

    /// Returns the group sequence for `selector`.
    ///
    /// # Errors
    /// - `UnsupportedSelector` for anything but [`ALL_GROUPS_SELECTOR`].
    pub fn list_groups(&self, selector: &str) -> CatalogResult<&[Group]> {
        if selector != ALL_GROUPS_SELECTOR {
            warn!(
                "event=list_groups module=catalog status=rejected selector={}",
                selector
            );
            return Err(CatalogError::UnsupportedSelector(selector.to_string()));
        }
        Ok(self.groups.as_slice())
    }

    /// Finds a group by id. Missing and ambiguous ids both yield `None`.
    pub fn find_group(&self, id: &str) -> Option<&Group> {
        absent_on_duplicate(self.try_find_group(id))
    }

    /// Finds an item by id across all groups. Missing and ambiguous ids both
    /// yield `None`.
    pub fn find_item(&self, id: &str) -> Option<&Rc<Item>> {
        absent_on_duplicate(self.try_find_item(id))
    }

    /// Strict group lookup that reports duplicate ids.
    pub fn try_find_group(&self, id: &str) -> CatalogResult<Option<&Group>> {
        unique_match(
            LookupKind::Group,
            id,
            self.groups.iter().filter(|group| group.unique_id() == id),
        )
    }

    /// Strict item lookup that reports duplicate ids.
    pub fn try_find_item(&self, id: &str) -> CatalogResult<Option<&Rc<Item>>> {
        unique_match(
            LookupKind::Item,
            id,
            self.groups
                .iter()
                .flat_map(|group| group.items().iter())
                .filter(|item| item.unique_id() == id),
        )
    }

    /// Owning group of `item`, for navigation.
    pub fn group_of(&self, item: &Item) -> Option<&Group> {
        self.find_group(item.group_id())
    }

    pub fn subscribe_groups(
        &mut self,
        callback: impl FnMut(CollectionChange<'_, Group>) + 'static,
    ) -> SubscriptionId {
        self.groups.subscribe(callback)
    }

    pub fn unsubscribe_groups(&mut self, id: SubscriptionId) -> bool {
        self.groups.unsubscribe(id)
    }
}

fn unique_match<'a, T: 'a>(
    kind: LookupKind,
    id: &str,
    mut candidates: impl Iterator<Item = &'a T>,
) -> CatalogResult<Option<&'a T>> {
    let Some(first) = candidates.next() else {
        return Ok(None);
    };
    let extra = candidates.count();
    if extra > 0 {
        return Err(CatalogError::DuplicateId {
            kind,
            id: id.to_string(),
            matches: extra + 1,
        });
    }
    Ok(Some(first))
}

fn absent_on_duplicate<T>(result: CatalogResult<Option<T>>) -> Option<T> {
    match result {
        Ok(found) => found,
        Err(err) => {
            warn!(
                "event=catalog_lookup module=catalog status=ambiguous error={}",
                err
            );
            None
        }
    }
}
