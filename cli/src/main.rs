mod commands;
mod terminal;

use commands::{CommandLine, Commands, demo, describe, find, list};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = commands.config();

    logging::init_logging(&cfg);
    print::banner(&cfg);

    match commands.command {
        Commands::Demo => demo::demo(&cfg),
        Commands::List { with } => {
            list::list(&with, &cfg);
            Ok(())
        }
        Commands::Find { brand, with } => {
            find::find(&brand, &with, &cfg);
            Ok(())
        }
        Commands::Describe { specs } => {
            describe::describe(&specs, &cfg);
            Ok(())
        }
    }
}
