use anyhow::Context;
use motorpool_common::config::Config;
use motorpool_core::Fleet;
use motorpool_core::sample::{self, DemoHandles};

use crate::commands::print_fleet;
use crate::terminal::{format, print};

const SEARCH_BRAND: &str = "Toyota";

pub fn demo(cfg: &Config) -> anyhow::Result<()> {
    print::header("building the fleet", cfg);
    let (mut fleet, handles) = sample::demo_fleet();

    print::spacer(cfg);
    print::header("fleet contents", cfg);
    print_fleet(&fleet);

    print::spacer(cfg);
    print::header("engine start and stop", cfg);
    toggle_engines(&mut fleet, &handles)?;

    print::spacer(cfg);
    print::header("search by brand", cfg);
    for vehicle in fleet.find_by_brand(SEARCH_BRAND) {
        print::print_status(format!("Found: {}", format::vehicle_line(vehicle)));
    }

    print::spacer(cfg);
    print::header("removing a vehicle and a garage", cfg);
    let north = fleet
        .garage_mut(handles.north)
        .context("demo garage is missing from the fleet")?;
    north.remove_vehicle(handles.moto2);
    fleet.remove_garage(handles.north);

    print::spacer(cfg);
    print::header("final fleet state", cfg);
    print_fleet(&fleet);

    print::end_of_program(cfg);
    Ok(())
}

fn toggle_engines(fleet: &mut Fleet, handles: &DemoHandles) -> anyhow::Result<()> {
    for id in [handles.car1, handles.moto1] {
        let vehicle = fleet
            .vehicle_mut(id)
            .with_context(|| format!("demo vehicle {id} is missing from the fleet"))?;
        vehicle.start_engine();
        vehicle.stop_engine();
    }
    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
