//! # Garage
//!
//! A named, ordered collection of vehicles. Insertion order is preserved and
//! the garage is the only thing allowed to mutate its list; callers get a
//! slice for reading and go through [`Garage::vehicle_mut`] for engine control.

use std::fmt;

use motorpool_common::event::Event;
use motorpool_common::id::{GarageId, VehicleId};
use motorpool_common::vehicle::Vehicle;
use tracing::debug;

#[derive(Debug)]
pub struct Garage {
    id: GarageId,
    name: String,
    vehicles: Vec<Vehicle>,
}

impl Garage {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: GarageId::next(),
            name: name.into(),
            vehicles: Vec::new(),
        }
    }

    pub fn id(&self) -> GarageId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends a vehicle. `None` is ignored without an event.
    pub fn add_vehicle(&mut self, vehicle: impl Into<Option<Vehicle>>) {
        let Some(vehicle) = vehicle.into() else {
            debug!(garage = %self.id, "ignoring absent vehicle");
            return;
        };

        let event = Event::VehicleAdded {
            garage: self.id,
            garage_name: self.name.clone(),
            vehicle: vehicle.id(),
            label: vehicle.describe(),
        };
        self.vehicles.push(vehicle);
        event.emit();
    }

    /// Removes the vehicle with this identity. Returns `false` when it is not here.
    pub fn remove_vehicle(&mut self, id: VehicleId) -> bool {
        self.take_vehicle(id).is_some()
    }

    /// Removes the vehicle with this identity and hands it back to the caller.
    pub fn take_vehicle(&mut self, id: VehicleId) -> Option<Vehicle> {
        let Some(index) = self.vehicles.iter().position(|v| v.id() == id) else {
            debug!(garage = %self.id, vehicle = %id, "vehicle not in garage");
            return None;
        };

        let vehicle = self.vehicles.remove(index);
        Event::VehicleRemoved {
            garage: self.id,
            garage_name: self.name.clone(),
            vehicle: vehicle.id(),
            label: vehicle.describe(),
        }
        .emit();

        Some(vehicle)
    }

    /// Read-only view in insertion order.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn vehicle(&self, id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id() == id)
    }

    pub fn vehicle_mut(&mut self, id: VehicleId) -> Option<&mut Vehicle> {
        self.vehicles.iter_mut().find(|v| v.id() == id)
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Garage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Garage \"{}\" (vehicles: {})",
            self.name,
            self.vehicles.len()
        )
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
