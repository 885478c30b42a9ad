//! Elora to Corne layout sync command.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::parser;
use crate::remap;

/// Copy an Elora layout onto a Corne layout via the static position table
#[derive(Debug, Clone, Args)]
pub struct SyncArgs {
    /// Source Elora .vil file
    #[arg(long, value_name = "FILE")]
    pub from: PathBuf,

    /// Destination Corne .vil file
    #[arg(long, value_name = "FILE")]
    pub to: PathBuf,

    /// Where to write the result (defaults to the destination file)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl SyncArgs {
    /// Execute the sync command.
    pub fn execute(&self) -> Result<()> {
        let output = self.output.as_ref().unwrap_or(&self.to);

        println!("Loading Elora layout from {}", self.from.display());
        let elora = parser::parse_vil_file(&self.from)?;

        println!("Loading Corne layout from {}", self.to.display());
        let corne = parser::parse_vil_file(&self.to)?;

        println!("Syncing layouts...");
        let result = remap::sync_layouts(&elora, &corne);

        println!("Saving synced layout to {}", output.display());
        parser::save_vil_file(&result, output)?;

        println!("Done! Layout synced successfully.");
        println!();
        println!("Note: Elora-only features (number row, outer keys, layers");
        println!("beyond the Corne's count) are not carried over.");

        Ok(())
    }
}
