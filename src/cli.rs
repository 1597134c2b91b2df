use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// Terminal admin console for a remote product catalog.
#[derive(Debug, Parser)]
#[command(name = "shopdesk", version, about)]
pub struct Cli {
    /// Override the catalog API base URL.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Directory for exported CSV files.
    #[arg(long)]
    pub export_dir: Option<PathBuf>,

    /// Read configuration from this file instead of the default location.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(dir) = &self.export_dir {
            config.export.dir = dir.clone();
        }
    }
}
