//! Single-token decode command.

use anyhow::{Context, Result};
use clap::Args;

use crate::decoder::{decode, Keycode};

/// Decode one keycode token into display text and a semantic class
#[derive(Debug, Clone, Args)]
pub struct DecodeArgs {
    /// Keycode token to decode (e.g., "LCTL_T(KC_A)", "-1")
    #[arg(short, long, value_name = "TOKEN", allow_hyphen_values = true)]
    pub expr: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl DecodeArgs {
    /// Execute the decode command.
    pub fn execute(&self) -> Result<()> {
        // Bare integers take the raw token form, everything else is an
        // identifier string.
        let token = self
            .expr
            .trim()
            .parse::<i64>()
            .map_or_else(|_| Keycode::Code(self.expr.clone()), Keycode::Raw);

        let decoded = decode(&token);

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&decoded).context("Failed to serialize JSON")?
            );
        } else {
            println!("Token:   {}", decoded.raw);
            println!("Display: {}", decoded.display.replace('\n', " / "));
            println!("Class:   {}", decoded.class);
        }

        Ok(())
    }
}
