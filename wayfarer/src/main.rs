use clap::Parser;

use wayfarer_core::GameConfig;
use wayfarer_lib::{Cli, launch};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();
    launch(cli.strategy(), GameConfig::from_env())
}
