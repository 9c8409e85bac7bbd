//! # Motorpool Core
//!
//! The collection-management layer: a [`Fleet`] owns [`Garage`]s, a garage
//! owns vehicles. Ownership is a strict tree, so every entity has exactly one
//! parent and callers refer to entities through their ids.

pub mod fleet;
pub mod garage;
pub mod sample;

pub use fleet::Fleet;
pub use garage::Garage;
