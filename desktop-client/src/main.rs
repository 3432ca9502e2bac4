mod config;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use common::{log, logger};
use eframe::egui;

use config::{DEFAULT_CONFIG_FILE, get_config_manager};
use ui::TicTacToeApp;

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Two-player Tic Tac Toe in a native window")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = get_config_manager(&args.config).get_config()?;
    log!("Starting with config from {}", args.config.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title("Tic Tac Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic Tac Toe",
        options,
        Box::new(move |_cc| Ok(Box::new(TicTacToeApp::new(&config)))),
    )?;

    Ok(())
}
