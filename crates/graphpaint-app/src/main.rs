//! Main application entry point.

use clap::Parser;

fn main() {
    env_logger::init();
    log::info!("Starting graphpaint");

    let config = graphpaint_app::AppConfig::from(graphpaint_app::Cli::parse());
    let stdout = std::io::stdout();
    match graphpaint_app::run(&config, &mut stdout.lock()) {
        Ok(report) => log::info!("Painted {} draw calls ({} theme)", report.commands, report.theme),
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    }
}
