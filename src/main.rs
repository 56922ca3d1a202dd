#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! tdcinfo — list xHPTDC8 TDC boards and show their info blocks.

mod cli;
mod commands;
mod device;
mod registry;
mod types;

use std::io::Write;

use tracing_subscriber::EnvFilter;

use cli::Cli;
use cli::output::{write_about, write_footer};
use device::{Session, SimulatedBackend};

fn main() {
    let cli = Cli::parse_normalized();
    init_tracing(cli.debug);

    let mut out = std::io::stdout();
    if !cli.json_only {
        write_about(&mut out);
    }

    let mut session = Session::new(SimulatedBackend::new(cli.devices, std::io::stdout()));
    let code = commands::run(&cli, &mut *session, &mut out);
    session.close();

    if !cli.json_only {
        write_footer(&mut out);
    }
    let _ = out.flush();
    std::process::exit(code);
}

/// Log to stderr. `RUST_LOG` wins; otherwise warnings, or debug with `-debug`.
fn init_tracing(debug: bool) {
    let default = if debug { "tdcinfo=debug" } else { "tdcinfo=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
