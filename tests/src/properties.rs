//! Property-based tests over the model invariants.

use motorpool_common::vehicle::{EngineState, Vehicle};
use motorpool_core::{Fleet, Garage};
use proptest::prelude::*;

// =============================================================================
// Engine Property Tests
// =============================================================================

/// `true` starts the engine, `false` stops it.
fn toggle_strategy() -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), 0..32)
}

fn vehicle_strategy() -> impl Strategy<Value = (String, String, i32, bool)> {
    ("[A-Za-z]{1,12}", "[A-Za-z0-9-]{1,12}", 1900i32..2100, any::<bool>())
}

fn build((brand, model, year, is_car): (String, String, i32, bool)) -> Vehicle {
    if is_car {
        Vehicle::car(brand, model, year, 4, "AT")
    } else {
        Vehicle::motorcycle(brand, model, year, "Sport", false)
    }
}

proptest! {
    /// Engine state always equals the last toggle applied, or Off if none.
    #[test]
    fn engine_follows_last_toggle(toggles in toggle_strategy()) {
        let mut car = Vehicle::car("Toyota", "Corolla", 2018, 4, "AT");
        for &start in &toggles {
            if start {
                car.start_engine();
            } else {
                car.stop_engine();
            }
        }
        let expected = match toggles.last() {
            Some(true) => EngineState::On,
            _ => EngineState::Off,
        };
        prop_assert_eq!(car.engine(), expected);
    }

    /// describe() is pure: repeated calls and engine toggles do not change it.
    #[test]
    fn describe_is_stable(spec in vehicle_strategy(), toggles in toggle_strategy()) {
        let mut vehicle = build(spec);
        let first = vehicle.describe();
        for &start in &toggles {
            if start {
                vehicle.start_engine();
            } else {
                vehicle.stop_engine();
            }
        }
        prop_assert_eq!(vehicle.describe(), first);
    }
}

// =============================================================================
// Garage Property Tests
// =============================================================================

proptest! {
    /// Removing any added vehicle shrinks the garage by one and drops only it.
    #[test]
    fn remove_drops_exactly_one(
        specs in prop::collection::vec(vehicle_strategy(), 1..10),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut garage = Garage::new("Central");
        let vehicles: Vec<Vehicle> = specs.into_iter().map(build).collect();
        let ids: Vec<_> = vehicles.iter().map(Vehicle::id).collect();
        for vehicle in vehicles {
            garage.add_vehicle(vehicle);
        }

        let target = ids[pick.index(ids.len())];
        let before = garage.len();
        prop_assert!(garage.remove_vehicle(target));
        prop_assert_eq!(garage.len(), before - 1);

        let remaining: Vec<_> = garage.vehicles().iter().map(Vehicle::id).collect();
        let expected: Vec<_> = ids.into_iter().filter(|id| *id != target).collect();
        prop_assert_eq!(remaining, expected);

        prop_assert!(!garage.remove_vehicle(target));
        prop_assert_eq!(garage.len(), before - 1);
    }
}

// =============================================================================
// Fleet Property Tests
// =============================================================================

/// Randomly flips the case of each ASCII letter.
fn recase(brand: &str, flips: &[bool]) -> String {
    brand
        .chars()
        .zip(flips.iter().cycle())
        .map(|(c, &flip)| {
            if flip {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

proptest! {
    /// Search matches the brand under any casing of the query.
    #[test]
    fn find_ignores_query_case(
        brand in "[A-Za-z]{1,12}",
        flips in prop::collection::vec(any::<bool>(), 1..12),
    ) {
        let mut garage = Garage::new("Central");
        garage.add_vehicle(Vehicle::car(brand.clone(), "Model", 2020, 4, "AT"));
        let mut fleet = Fleet::new();
        fleet.add_garage(garage);

        let query = recase(&brand, &flips);
        prop_assert_eq!(fleet.find_by_brand(&query).len(), 1);
    }

    /// Search results follow garage order, then insertion order.
    #[test]
    fn find_preserves_scan_order(
        layout in prop::collection::vec(prop::collection::vec(any::<bool>(), 0..5), 0..5),
    ) {
        // `true` entries are Toyotas, `false` entries are Hondas.
        let mut fleet = Fleet::new();
        let mut expected = Vec::new();
        for (g, garage_layout) in layout.iter().enumerate() {
            let mut garage = Garage::new(format!("Garage{g}"));
            for &is_toyota in garage_layout {
                let vehicle = if is_toyota {
                    Vehicle::car("Toyota", "Corolla", 2018, 4, "AT")
                } else {
                    Vehicle::motorcycle("Honda", "CBR500R", 2019, "Sport", false)
                };
                if is_toyota {
                    expected.push(vehicle.id());
                }
                garage.add_vehicle(vehicle);
            }
            fleet.add_garage(garage);
        }

        let found: Vec<_> = fleet.find_by_brand("toyota").iter().map(|v| v.id()).collect();
        prop_assert_eq!(found, expected);
    }
}
