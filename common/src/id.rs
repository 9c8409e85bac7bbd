//! # Identity Handles
//!
//! Vehicles and garages are removed and looked up by identity, never by
//! field equality. Each construction draws a fresh number from a
//! process-wide counter, so two entities with identical fields still
//! have distinct ids.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_VEHICLE_ID: AtomicU64 = AtomicU64::new(1);
static NEXT_GARAGE_ID: AtomicU64 = AtomicU64::new(1);

/// Non-owning handle to a [`crate::Vehicle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VehicleId(u64);

/// Non-owning handle to a garage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GarageId(u64);

impl VehicleId {
    pub(crate) fn next() -> Self {
        Self(NEXT_VEHICLE_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl GarageId {
    /// Allocates a fresh id. Called once per garage construction.
    pub fn next() -> Self {
        Self(NEXT_GARAGE_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "V#{}", self.0)
    }
}

impl fmt::Display for GarageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "G#{}", self.0)
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
