use colored::*;
use motorpool_common::vehicle::{Vehicle, VehicleKind};
use motorpool_core::Garage;

use crate::terminal::colors;

pub fn vehicle_line(vehicle: &Vehicle) -> String {
    let kind_color: Color = match vehicle.kind() {
        VehicleKind::Car { .. } => colors::CAR,
        VehicleKind::Motorcycle { .. } => colors::MOTORCYCLE,
    };
    let engine: ColoredString = if vehicle.is_engine_on() {
        "on".color(colors::ENGINE_ON).bold()
    } else {
        "off".color(colors::ENGINE_OFF)
    };

    format!(
        "{} {} {}",
        vehicle.describe().color(kind_color),
        "· engine".color(colors::SEPARATOR),
        engine
    )
}

pub fn garage_title(garage: &Garage) -> String {
    let count: ColoredString = garage.len().to_string().color(colors::ACCENT);
    format!("Garage \"{}\" (vehicles: {})", garage.name(), count)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
