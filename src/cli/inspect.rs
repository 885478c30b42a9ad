//! Layer grid inspection command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::decoder::{decode, DecodedKey};
use crate::parser;

/// Print the decoded key grid of one layer of a layout file
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Path to the .vil layout file
    #[arg(short, long, value_name = "FILE")]
    pub layout: PathBuf,

    /// Layer number to inspect (0-based)
    #[arg(short = 'n', long, default_value_t = 0)]
    pub layer: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl InspectArgs {
    /// Execute the inspect command.
    pub fn execute(&self) -> Result<()> {
        let file = parser::parse_vil_file(&self.layout)?;

        let rows = file.layout.get(self.layer).with_context(|| {
            format!(
                "Layer {} out of range: {} has {} layers",
                self.layer,
                self.layout.display(),
                file.num_layers()
            )
        })?;

        let decoded: Vec<Vec<DecodedKey>> = rows
            .iter()
            .map(|row| row.iter().map(decode).collect())
            .collect();

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&decoded).context("Failed to serialize JSON")?
            );
            return Ok(());
        }

        for row in &decoded {
            let cells: Vec<String> = row
                .iter()
                .map(|key| format!("{:^7}", key.display.replace('\n', "/")))
                .collect();
            println!("{}", cells.join("|"));
        }

        Ok(())
    }
}
