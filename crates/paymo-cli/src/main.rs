//! PayMo anti-fraud CLI - judges a payment stream against a batch history.

use clap::Parser;
use paymo_cli::{logging, Cli};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.log_level.as_deref()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    match paymo_cli::run(&cli) {
        Ok(Some(summary)) => println!("{}", summary),
        Ok(None) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
