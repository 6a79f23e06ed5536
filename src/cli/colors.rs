//! Colors command: print the banding colors for a number of apps.

use crate::cli::common::{print_json, CliResult};
use crate::layout::assign_colors;
use clap::Args;

/// Print the background color assigned to each of N top-level groups
#[derive(Debug, Clone, Args)]
pub struct ColorsArgs {
    /// Number of top-level groups
    #[arg(value_name = "N")]
    pub count: usize,

    /// Output as a JSON array of hex strings
    #[arg(long)]
    pub json: bool,
}

impl ColorsArgs {
    /// Execute the colors command
    pub fn execute(&self) -> CliResult<()> {
        let colors: Vec<String> = assign_colors(self.count)
            .iter()
            .map(|c| c.to_hex())
            .collect();

        if self.json {
            print_json(&colors)?;
        } else {
            for (index, color) in colors.iter().enumerate() {
                println!("{:>3}  {color}", index + 1);
            }
        }

        Ok(())
    }
}
