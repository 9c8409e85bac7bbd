//! # Notification Events
//!
//! Every successful state change in the model produces one [`Event`].
//! Events are published through `tracing` on the [`EVENT_TARGET`] target,
//! so the core never writes to the terminal itself. A subscriber decides
//! how (and whether) they are shown.

use std::fmt;

use tracing::info;

use crate::id::{GarageId, VehicleId};

/// Tracing target every event is published on.
pub const EVENT_TARGET: &str = "motorpool::event";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A vehicle's engine went from off to on.
    EngineStarted { vehicle: VehicleId, label: String },
    /// A vehicle's engine went from on to off.
    EngineStopped { vehicle: VehicleId, label: String },
    /// A vehicle was appended to a garage.
    VehicleAdded {
        garage: GarageId,
        garage_name: String,
        vehicle: VehicleId,
        label: String,
    },
    /// A vehicle was removed from a garage.
    VehicleRemoved {
        garage: GarageId,
        garage_name: String,
        vehicle: VehicleId,
        label: String,
    },
    /// A garage was appended to the fleet.
    GarageAdded { garage: GarageId, label: String },
    /// A garage was removed from the fleet. Its vehicles go with it silently.
    GarageRemoved { garage: GarageId, label: String },
}

impl Event {
    /// Stable snake_case name, recorded as the `kind` field.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::EngineStarted { .. } => "engine_started",
            Event::EngineStopped { .. } => "engine_stopped",
            Event::VehicleAdded { .. } => "vehicle_added",
            Event::VehicleRemoved { .. } => "vehicle_removed",
            Event::GarageAdded { .. } => "garage_added",
            Event::GarageRemoved { .. } => "garage_removed",
        }
    }

    pub fn vehicle(&self) -> Option<VehicleId> {
        match self {
            Event::EngineStarted { vehicle, .. }
            | Event::EngineStopped { vehicle, .. }
            | Event::VehicleAdded { vehicle, .. }
            | Event::VehicleRemoved { vehicle, .. } => Some(*vehicle),
            Event::GarageAdded { .. } | Event::GarageRemoved { .. } => None,
        }
    }

    pub fn garage(&self) -> Option<GarageId> {
        match self {
            Event::VehicleAdded { garage, .. }
            | Event::VehicleRemoved { garage, .. }
            | Event::GarageAdded { garage, .. }
            | Event::GarageRemoved { garage, .. } => Some(*garage),
            Event::EngineStarted { .. } | Event::EngineStopped { .. } => None,
        }
    }

    /// Publishes the event on [`EVENT_TARGET`].
    pub fn emit(self) {
        let vehicle = self.vehicle().map(VehicleId::get);
        let garage = self.garage().map(GarageId::get);
        info!(
            target: EVENT_TARGET,
            kind = self.kind(),
            vehicle,
            garage,
            "{}",
            self
        );
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::EngineStarted { label, .. } => write!(f, "Engine of {label} started."),
            Event::EngineStopped { label, .. } => write!(f, "Engine of {label} stopped."),
            Event::VehicleAdded {
                garage_name, label, ..
            } => write!(f, "[{garage_name}] Added: {label}"),
            Event::VehicleRemoved {
                garage_name, label, ..
            } => write!(f, "[{garage_name}] Removed: {label}"),
            Event::GarageAdded { label, .. } => write!(f, "[Fleet] Added {label}"),
            Event::GarageRemoved { label, .. } => write!(f, "[Fleet] Removed {label}"),
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
