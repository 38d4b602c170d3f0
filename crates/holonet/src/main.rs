#![allow(unused)]

use crate::prelude::*;
use clap::Parser;

mod error;
mod prelude;
mod server;
mod swapi;
#[cfg(test)]
mod testing;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Read-only aggregation API over the Star Wars catalog"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Base URL of the upstream Star Wars catalog
    #[clap(
        long,
        env = "HOLONET_UPSTREAM_URL",
        global = true,
        default_value = swapi::DEFAULT_UPSTREAM_URL
    )]
    upstream_url: String,

    /// Upstream request timeout in seconds (no timeout when unset)
    #[clap(long, env = "HOLONET_TIMEOUT", global = true)]
    timeout: Option<u64>,

    /// Whether to display additional information.
    #[clap(long, env = "HOLONET_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Serve the aggregation API over HTTP
    Serve(crate::server::ServeOptions),

    /// Query the catalog from the command line
    Swapi(crate::swapi::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Serve(options) => crate::server::run(options, app.global).await,
        SubCommands::Swapi(sub_app) => crate::swapi::run(sub_app, app.global).await,
    }
}
