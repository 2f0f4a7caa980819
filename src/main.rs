use std::process::ExitCode;

use clap::Parser;

use freight_scheduler::{app, cli::Cli, config::Config, logger};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init();

    let result = Config::from_cli(&cli).and_then(|config| {
        log::debug!("Running with {:?}", config);
        let stdout = std::io::stdout();
        app::run(&config, &mut stdout.lock())
    });

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
