//! # Fleet
//!
//! Root of the ownership tree. Holds garages in the order they were added
//! and answers cross-garage queries such as [`Fleet::find_by_brand`].

use motorpool_common::event::Event;
use motorpool_common::id::{GarageId, VehicleId};
use motorpool_common::vehicle::Vehicle;
use tracing::debug;

use crate::garage::Garage;

#[derive(Debug, Default)]
pub struct Fleet {
    garages: Vec<Garage>,
}

impl Fleet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a garage. `None` is ignored without an event.
    pub fn add_garage(&mut self, garage: impl Into<Option<Garage>>) {
        let Some(garage) = garage.into() else {
            debug!("ignoring absent garage");
            return;
        };

        let event = Event::GarageAdded {
            garage: garage.id(),
            label: garage.describe(),
        };
        self.garages.push(garage);
        event.emit();
    }

    /// Removes the garage with this identity, dropping the vehicles it holds.
    ///
    /// Only a single `garage_removed` event is emitted; the vehicles inside
    /// do not produce events of their own.
    pub fn remove_garage(&mut self, id: GarageId) -> bool {
        let Some(index) = self.garages.iter().position(|g| g.id() == id) else {
            debug!(garage = %id, "garage not in fleet");
            return false;
        };

        let garage = self.garages.remove(index);
        Event::GarageRemoved {
            garage: garage.id(),
            label: garage.describe(),
        }
        .emit();

        true
    }

    /// Every vehicle whose brand matches `brand` ignoring case, in fleet
    /// order and then insertion order within each garage.
    pub fn find_by_brand(&self, brand: &str) -> Vec<&Vehicle> {
        self.garages
            .iter()
            .flat_map(Garage::vehicles)
            .filter(|v| v.has_brand(brand))
            .collect()
    }

    /// Read-only view in insertion order.
    pub fn garages(&self) -> &[Garage] {
        &self.garages
    }

    pub fn garage(&self, id: GarageId) -> Option<&Garage> {
        self.garages.iter().find(|g| g.id() == id)
    }

    pub fn garage_mut(&mut self, id: GarageId) -> Option<&mut Garage> {
        self.garages.iter_mut().find(|g| g.id() == id)
    }

    /// Finds a vehicle in any garage.
    pub fn vehicle_mut(&mut self, id: VehicleId) -> Option<&mut Vehicle> {
        self.garages.iter_mut().find_map(|g| g.vehicle_mut(id))
    }

    pub fn vehicle_count(&self) -> usize {
        self.garages.iter().map(Garage::len).sum()
    }

    pub fn len(&self) -> usize {
        self.garages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.garages.is_empty()
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
