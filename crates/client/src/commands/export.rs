//! Re-export a tower record in canonical form.

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use tower_content::TowerLoader;

/// Import a tower record and write it back out in canonical form
#[derive(Parser)]
pub struct Export {
    /// Tower record to read
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Destination file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Write the partially imported tower even when the record has errors
    #[arg(short, long)]
    force: bool,
}

impl Export {
    pub fn execute(self) -> Result<()> {
        let result = TowerLoader::load(&self.input)?;

        if !result.is_clean() {
            for error in &result.errors {
                tracing::warn!("{error}");
            }
            if !self.force {
                bail!(
                    "{} has {} import error(s); use --force to export anyway",
                    self.input.display(),
                    result.errors.len()
                );
            }
        }

        TowerLoader::save(&result.tower, &self.output)?;
        tracing::info!(
            tower = %result.tower.name,
            output = %self.output.display(),
            "tower exported"
        );
        println!("wrote {}", self.output.display());
        Ok(())
    }
}
