pub mod demo;
pub mod describe;
pub mod find;
pub mod list;

use clap::{ArgAction, Parser, Subcommand};
use motorpool_common::config::Config;
use motorpool_common::vehicle::spec::VehicleSpec;
use motorpool_core::{Fleet, Garage};

use crate::terminal::{format, print};

/// Name of the garage that receives `--with` vehicles.
pub const EXTRA_GARAGE: &str = "Temporary";

#[derive(Parser)]
#[command(name = "motorpool")]
#[command(about = "An in-memory garage and fleet inventory.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Less output. Once hides headers, twice also hides engine and inventory events
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full walkthrough: list, engines, search, removal
    #[command(alias = "d")]
    Demo,
    /// Print the sample fleet
    #[command(alias = "l")]
    List {
        /// Extra vehicle added to a temporary garage, e.g. "car:Kia,Rio,2017,4,MT"
        #[arg(long = "with", value_name = "SPEC")]
        with: Vec<VehicleSpec>,
    },
    /// Find vehicles by brand, ignoring case
    #[command(alias = "f")]
    Find {
        brand: String,
        /// Extra vehicle added to a temporary garage, e.g. "car:Kia,Rio,2017,4,MT"
        #[arg(long = "with", value_name = "SPEC")]
        with: Vec<VehicleSpec>,
    },
    /// Print the description of each vehicle spec
    Describe {
        #[arg(required = true, value_name = "SPEC")]
        specs: Vec<VehicleSpec>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            quiet: self.quiet,
            no_color: self.no_color,
        }
    }
}

/// Puts every `--with` vehicle into one extra garage at the end of the fleet.
pub fn add_extra_vehicles(fleet: &mut Fleet, extra: &[VehicleSpec]) {
    if extra.is_empty() {
        return;
    }

    let mut garage = Garage::new(EXTRA_GARAGE);
    for spec in extra {
        garage.add_vehicle(spec.build());
    }
    fleet.add_garage(garage);
}

pub fn print_fleet(fleet: &Fleet) {
    if fleet.is_empty() {
        print::print_status("The fleet has no garages");
        return;
    }

    for (idx, garage) in fleet.garages().iter().enumerate() {
        print::tree_head(idx + 1, &format::garage_title(garage));
        let lines: Vec<String> = garage.vehicles().iter().map(format::vehicle_line).collect();
        print::tree_leaves(&lines);
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
