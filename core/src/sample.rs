//! The demo inventory: two garages with a car and a motorcycle each.

use motorpool_common::id::{GarageId, VehicleId};
use motorpool_common::vehicle::Vehicle;

use crate::fleet::Fleet;
use crate::garage::Garage;

pub const CENTRAL: &str = "Центральный";
pub const NORTH: &str = "Северный";

/// Ids of every entity in [`demo_fleet`], so drivers can address them after
/// ownership has moved into the fleet.
#[derive(Debug, Clone, Copy)]
pub struct DemoHandles {
    pub car1: VehicleId,
    pub car2: VehicleId,
    pub moto1: VehicleId,
    pub moto2: VehicleId,
    pub central: GarageId,
    pub north: GarageId,
}

pub fn demo_fleet() -> (Fleet, DemoHandles) {
    let car1 = Vehicle::car("Toyota", "Corolla", 2018, 4, "AT");
    let car2 = Vehicle::car("Hyundai", "Sonata", 2020, 4, "AT");
    let moto1 = Vehicle::motorcycle("Yamaha", "MT-07", 2021, "Roadster", true);
    let moto2 = Vehicle::motorcycle("Honda", "CBR500R", 2019, "Sport", false);

    let mut central = Garage::new(CENTRAL);
    let mut north = Garage::new(NORTH);

    let handles = DemoHandles {
        car1: car1.id(),
        car2: car2.id(),
        moto1: moto1.id(),
        moto2: moto2.id(),
        central: central.id(),
        north: north.id(),
    };

    central.add_vehicle(car1);
    central.add_vehicle(moto1);
    north.add_vehicle(car2);
    north.add_vehicle(moto2);

    let mut fleet = Fleet::new();
    fleet.add_garage(central);
    fleet.add_garage(north);

    (fleet, handles)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
