mod game_session;
mod server_config;
mod web_server;

use std::path::PathBuf;

use clap::Parser;
use common::{log, logger};

use game_session::GameSession;
use server_config::{DEFAULT_CONFIG_FILE, get_config_manager};
use web_server::run_web_server;

#[derive(Parser)]
#[command(name = "tictactoe_server", about = "Serves a two-player Tic Tac Toe page")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Overrides the port from the config file.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Server".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let mut config = get_config_manager(&args.config).get_config()?;
    if let Some(port) = args.port {
        config.port = port;
    }
    let addr = config.socket_addr()?;

    run_web_server(GameSession::new(), addr, config.static_dir()).await?;

    log!("Server shut down gracefully");

    Ok(())
}
