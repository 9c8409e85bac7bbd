use motorpool_common::config::Config;
use motorpool_common::vehicle::spec::VehicleSpec;
use motorpool_core::sample;

use crate::commands::{add_extra_vehicles, print_fleet};
use crate::terminal::print;

pub fn list(extra: &[VehicleSpec], cfg: &Config) {
    print::header("fleet contents", cfg);

    let (mut fleet, _) = sample::demo_fleet();
    add_extra_vehicles(&mut fleet, extra);

    print_fleet(&fleet);
    print::print_status(format!(
        "{} garages, {} vehicles",
        fleet.len(),
        fleet.vehicle_count()
    ));
    print::end_of_program(cfg);
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
