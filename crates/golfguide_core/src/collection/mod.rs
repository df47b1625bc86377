//! Observable collections and the projections derived from them.
//!
//! # Responsibility
//! - Provide an ordered container that reports every mutation as a typed event.
//! - Maintain capped prefix projections incrementally from those events.

pub mod observable;
pub mod projection;
