use std::{env, fs, path::Path};

use anyhow::{Context, Result};

use super::args::{Command, ScanCommand};
use crate::config::{CONFIG_FILE_NAME, default_config_json, load_config};
use crate::reconcile::Reconciler;
use crate::reporter;

/// Dispatch to the appropriate command handler.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Scan(cmd) => scan(cmd),
        Command::Init => init(),
    }
}

fn scan(ScanCommand { args }: ScanCommand) -> Result<()> {
    let scan_root = match args.path {
        Some(path) => path,
        None => env::current_dir().context("Failed to determine current directory")?,
    };

    let loaded = load_config(&scan_root)?;
    let mut config = loaded.config;
    if args.sort {
        config.sort_keys = true;
    }

    // --lang-path beats the config; either way a relative root is anchored
    // at the scanned path.
    let lang_root = match &args.lang_path {
        Some(path) if path.is_absolute() => path.clone(),
        Some(path) => scan_root.join(path),
        None => {
            let configured = Path::new(&config.lang_path);
            if configured.is_absolute() {
                configured.to_path_buf()
            } else {
                scan_root.join(configured)
            }
        }
    };

    let verbose = args.verbose || args.detailed;

    reporter::print_start(
        &scan_root.display().to_string(),
        &lang_root.display().to_string(),
    );

    let reconciler = Reconciler::new(config, &scan_root, &lang_root, verbose);
    let summary = reconciler.run()?;

    reporter::print_summary(&summary, verbose);
    Ok(())
}

fn init() -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    Ok(())
}
