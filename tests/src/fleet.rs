use motorpool_common::id::VehicleId;
use motorpool_common::vehicle::Vehicle;
use motorpool_core::sample::{self, CENTRAL};
use motorpool_core::{Fleet, Garage};

use crate::support::{capture, kinds};

fn vehicle_ids(found: &[&Vehicle]) -> Vec<VehicleId> {
    found.iter().map(|v| v.id()).collect()
}

/// Runs the walkthrough: search, remove a motorcycle, then drop its garage.
#[test]
fn walkthrough_scenario() {
    let (mut fleet, handles) = sample::demo_fleet();

    let found = fleet.find_by_brand("Toyota");
    assert_eq!(vehicle_ids(&found), vec![handles.car1]);

    let north = fleet.garage_mut(handles.north).expect("north garage present");
    assert!(north.remove_vehicle(handles.moto2));
    assert_eq!(north.len(), 1);
    assert_eq!(north.vehicles()[0].id(), handles.car2);

    assert!(fleet.remove_garage(handles.north));
    assert_eq!(fleet.len(), 1);
    assert_eq!(fleet.garages()[0].name(), CENTRAL);
    assert_eq!(fleet.vehicle_count(), 2);
}

#[test]
fn demo_fleet_emits_inventory_events_in_order() {
    let (_, events) = capture(sample::demo_fleet);

    assert_eq!(
        kinds(&events),
        vec![
            "vehicle_added",
            "vehicle_added",
            "vehicle_added",
            "vehicle_added",
            "garage_added",
            "garage_added",
        ]
    );
    assert_eq!(events[0].message, "[Центральный] Added: Toyota Corolla (2018) | Car: 4 doors, AT");
    assert_eq!(
        events[4].message,
        "[Fleet] Added Garage \"Центральный\" (vehicles: 2)"
    );
}

#[test]
fn engine_events_fire_once_per_transition() {
    let mut car = Vehicle::car("Toyota", "Corolla", 2018, 4, "AT");
    let car_id = car.id();

    let ((), events) = capture(|| {
        car.start_engine();
        car.start_engine();
        car.stop_engine();
        car.stop_engine();
    });

    assert_eq!(kinds(&events), vec!["engine_started", "engine_stopped"]);
    assert!(events.iter().all(|e| e.vehicle == Some(car_id.get())));
    assert!(events.iter().all(|e| e.garage.is_none()));
    assert_eq!(
        events[0].message,
        "Engine of Toyota Corolla (2018) | Car: 4 doors, AT started."
    );
}

#[test]
fn rejected_mutations_are_silent() {
    let mut garage = Garage::new("Central");
    let mut fleet = Fleet::new();
    let stranger = Vehicle::car("Lada", "Niva", 1990, 3, "MT");

    let ((), events) = capture(|| {
        garage.add_vehicle(None::<Vehicle>);
        assert!(!garage.remove_vehicle(stranger.id()));
        fleet.add_garage(None::<Garage>);
        assert!(!fleet.remove_garage(garage.id()));
    });

    assert!(events.is_empty(), "unexpected events: {events:?}");
    assert!(garage.is_empty());
    assert!(fleet.is_empty());
}

#[test]
fn garage_removal_does_not_cascade_vehicle_events() {
    let (mut fleet, handles) = sample::demo_fleet();

    let (removed, events) = capture(|| fleet.remove_garage(handles.north));

    assert!(removed);
    assert_eq!(kinds(&events), vec!["garage_removed"]);
    assert_eq!(events[0].garage, Some(handles.north.get()));
    assert_eq!(events[0].message, "[Fleet] Removed Garage \"Северный\" (vehicles: 2)");
}

#[test]
fn vehicle_removal_reports_garage_and_vehicle() {
    let (mut fleet, handles) = sample::demo_fleet();
    let central = fleet.garage_mut(handles.central).expect("central garage present");

    let (removed, events) = capture(|| central.remove_vehicle(handles.moto1));

    assert!(removed);
    assert_eq!(kinds(&events), vec!["vehicle_removed"]);
    assert_eq!(events[0].vehicle, Some(handles.moto1.get()));
    assert_eq!(events[0].garage, Some(handles.central.get()));
}

#[test]
fn search_spans_garages_in_fleet_order() {
    let car_a = Vehicle::car("Toyota", "Corolla", 2018, 4, "AT");
    let car_b = Vehicle::car("toyota", "Yaris", 2015, 5, "MT");
    let moto_c = Vehicle::motorcycle("Honda", "CBR500R", 2019, "Sport", false);
    let (a, b, c) = (car_a.id(), car_b.id(), moto_c.id());

    let mut first = Garage::new("Garage1");
    first.add_vehicle(car_a);
    let mut second = Garage::new("Garage2");
    second.add_vehicle(car_b);
    second.add_vehicle(moto_c);

    let mut fleet = Fleet::new();
    fleet.add_garage(first);
    fleet.add_garage(second);

    assert_eq!(vehicle_ids(&fleet.find_by_brand("TOYOTA")), vec![a, b]);
    assert_eq!(vehicle_ids(&fleet.find_by_brand("honda")), vec![c]);
    assert!(fleet.find_by_brand("Suzuki").is_empty());
}

#[test]
fn vehicle_moves_between_garages_with_identity() {
    let (mut fleet, handles) = sample::demo_fleet();

    let moto = fleet
        .garage_mut(handles.north)
        .and_then(|g| g.take_vehicle(handles.moto2))
        .expect("moto2 in north garage");
    fleet
        .garage_mut(handles.central)
        .expect("central garage present")
        .add_vehicle(moto);

    let central = fleet.garage(handles.central).expect("central garage present");
    let ids: Vec<VehicleId> = central.vehicles().iter().map(Vehicle::id).collect();
    assert_eq!(ids, vec![handles.car1, handles.moto1, handles.moto2]);
    assert_eq!(fleet.vehicle_count(), 4);
}
