use motorpool_common::config::Config;
use motorpool_common::vehicle::spec::VehicleSpec;

use crate::terminal::print;

pub fn describe(specs: &[VehicleSpec], cfg: &Config) {
    print::header("vehicle descriptions", cfg);
    for spec in specs {
        print::print_status(spec.build().describe());
    }
}
