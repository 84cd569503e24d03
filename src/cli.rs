//! Command-line entry point.

use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use clap::Parser;

use crate::config::{Args, Config};
use crate::render::write_documents;

/// Run the `domain-label` command
pub fn run() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let config = Config::from_args(args)?;
    log::debug!("Effective configuration: {:?}", config);

    let documents = config.input.load()?;
    log::info!(
        "Rendering {} documents as {:?}",
        documents.len(),
        config.format
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_documents(&mut out, &documents, config.format).context("Failed to write output")?;

    Ok(())
}

/// Initialise env_logger; `RUST_LOG` takes precedence over `--log-level`
///
/// Returns false if a logger was already installed, in which case the
/// existing one is kept.
pub fn init_logging(level: &str) -> bool {
    match env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .try_init()
    {
        Ok(()) => true,
        Err(e) => {
            log::debug!("Keeping existing logger: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_twice_does_not_panic() {
        init_logging("warn");
        assert!(!init_logging("debug"));
    }
}
