//! `gradetab show` command - show one class record

use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use gradetab_core::error::{GradetabError, Result};
use gradetab_core::format;

/// Execute the show command
pub fn execute(cli: &Cli, grades_dir: &Path, class: &str) -> Result<()> {
    let mut session = super::session_for(cli);
    session.load(grades_dir)?;

    let entry = session
        .roster()
        .find(class)
        .ok_or_else(|| GradetabError::class_not_found(class))?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&super::class_json(entry)?)?);
        }
        OutputFormat::Human => {
            print!("{}", format::render_class(entry)?);
        }
    }

    Ok(())
}
