//! Bindable content model for groups and items.
//!
//! # Responsibility
//! - Define the display entities rendered by list, grid and detail views.
//! - Report attribute changes to registered observers.
//!
//! # Invariants
//! - Every entity is identified by a stable, immutable `unique_id`.
//! - Items are shared (`Rc`) between a group's full list and its preview.

pub mod group;
pub mod item;
pub mod node;
pub mod notify;
