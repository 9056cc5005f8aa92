//! `gradetab edit` command - replace a class's grade lists
//!
//! Grade lists are replaced wholesale; the stored weights are carried over
//! unchanged.

use std::path::Path;

use tracing::debug;

use crate::cli::{Cli, EditArgs, OutputFormat};
use gradetab_core::error::{GradetabError, Result};

/// Execute the edit command
pub fn execute(cli: &Cli, grades_dir: &Path, args: &EditArgs) -> Result<()> {
    let mut session = super::session_for(cli);
    session.load(grades_dir)?;

    session.replace_grades(&args.class, &args.minor, &args.major)?;
    let path = session.save(grades_dir)?;

    debug!(class = %args.class, path = %path.display(), "edit_class");

    match cli.format {
        OutputFormat::Json => {
            let entry = session
                .roster()
                .find(&args.class)
                .ok_or_else(|| GradetabError::class_not_found(&args.class))?;
            println!("{}", serde_json::to_string_pretty(&super::class_json(entry)?)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Class edited successfully.");
            }
        }
    }

    Ok(())
}
