//! # Motorpool Common
//!
//! Shared domain models used by every crate in the workspace.
//!
//! * **[`vehicle`]**: The vehicle entity, its variants and the textual spec parser.
//! * **[`id`]**: Synthetic identities used for removal and lookup.
//! * **[`event`]**: Notifications emitted after a state change.
//! * **[`config`]**: Runtime options chosen by the driver.
//! * **[`error`]**: Errors for input that comes from outside the model.

pub mod config;
pub mod error;
pub mod event;
pub mod id;
pub mod vehicle;

pub use error::SpecParseError;
pub use event::Event;
pub use id::{GarageId, VehicleId};
pub use vehicle::{EngineState, Vehicle, VehicleKind, spec::VehicleSpec};
