//! gridpath: route search on a generated or loaded grid.
//!
//! Usage: `gridpath [CONFIG.ron]`. Without a file the defaults are used.
//! Set `RUST_LOG` to change log verbosity (default `info`).

use gridpath_lib::{Config, run};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args_os().nth(1) {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    log::debug!("config: {config:?}");

    let report = run(&config)?;
    println!("{}", report.render());
    Ok(())
}
