use clap::{
    Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};

use tunescope::{config, error, info, server, session::SessionStore};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name = env!("CARGO_PKG_NAME"),
  bin_name = env!("CARGO_PKG_NAME"),
  about = env!("CARGO_PKG_DESCRIPTION"),
  styles = styles(),
)]
struct Cli {
    /// Address to bind the server to (overrides SERVER_ADDRESS)
    #[clap(long)]
    address: Option<String>,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env() {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();
    let addr = cli.address.unwrap_or_else(config::server_addr);

    info!("Listening on {}", addr);
    server::start_server(&addr, SessionStore::new()).await;
}
