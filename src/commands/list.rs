//! `gradetab list` command - list classes with their averages

use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use gradetab_core::error::Result;

/// Execute the list command
pub fn execute(cli: &Cli, grades_dir: &Path) -> Result<()> {
    let mut session = super::session_for(cli);
    session.load(grades_dir)?;

    match cli.format {
        OutputFormat::Json => {
            let classes = session
                .roster()
                .entries()
                .iter()
                .map(super::class_json)
                .collect::<Result<Vec<_>>>()?;
            let output = serde_json::json!({
                "user": session.user_name(),
                "classes": classes,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            for entry in session.roster().entries() {
                println!("{}\t{}%", entry.class_name, entry.class_average()?);
            }
        }
    }

    Ok(())
}
