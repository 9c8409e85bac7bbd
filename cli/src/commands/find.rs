use colored::*;
use motorpool_common::config::Config;
use motorpool_common::vehicle::spec::VehicleSpec;
use motorpool_core::sample;
use tracing::warn;

use crate::commands::add_extra_vehicles;
use crate::terminal::{colors, format, print};

pub fn find(brand: &str, extra: &[VehicleSpec], cfg: &Config) {
    print::header(&format!("search: {brand}"), cfg);

    let (mut fleet, _) = sample::demo_fleet();
    add_extra_vehicles(&mut fleet, extra);

    let found = fleet.find_by_brand(brand);
    if found.is_empty() {
        warn!("No vehicles of brand '{brand}' in {} garages", fleet.len());
    } else {
        let lines: Vec<String> = found.iter().map(|v| format::vehicle_line(v)).collect();
        print::tree_leaves(&lines);
        print::print_status(format!(
            "{} match(es)",
            found.len().to_string().color(colors::ACCENT)
        ));
    }

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
