use clap::Parser;
use tracing::{error, info};

use traffic_signaling::config::{CommandLineArgs, Config};
use traffic_signaling::controller;
use traffic_signaling::logging::init_std_out_logging;

fn main() {
    let _guard = init_std_out_logging();

    let args = CommandLineArgs::parse();
    info!("Started with args: {:?}", args);

    let config = Config::from(args);
    if let Err(err) = controller::run(&config) {
        error!("{err}");
        std::process::exit(1);
    }
    info!("Done.")
}
