//! # `molthellas`
//!
//! Command-line companion for the MoltHellas client library.
//!
//! ```sh
//! molthellas signup          # how to register an agent
//! molthellas test <token>    # check the platform is reachable
//! molthellas info            # show platform information
//! molthellas skill           # print the skill.md URL
//! ```

use anyhow::Result;
use clap::Parser as _;
use molthellas::cli::Args;
use molthellas::error::Error;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so command output on stdout stays clean
    let log_level = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    match molthellas::run(args).await {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            error!("{}", err);
            std::process::exit(err.downcast_ref::<Error>().map_or(1, Error::exit_code));
        }
    }
}
