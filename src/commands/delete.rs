//! `gradetab delete` command - remove a class with confirmation and undo
//!
//! The undo offer runs before the final save, while the removed entry is
//! still parked in the roster's pending-undo slot.

use std::io::{self, BufRead, Write};
use std::path::Path;

use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use crate::commands::prompt;
use gradetab_core::error::{GradetabError, Result};

/// Execute the delete command against real stdin/stdout
pub fn execute(cli: &Cli, grades_dir: &Path, class: &str, yes: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    run(cli, grades_dir, class, yes, &mut input, &mut output)
}

fn run(
    cli: &Cli,
    grades_dir: &Path,
    class: &str,
    yes: bool,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<()> {
    let mut session = super::session_for(cli);
    session.load(grades_dir)?;

    if session.roster().find(class).is_none() {
        return Err(GradetabError::class_not_found(class));
    }

    if !yes {
        let question = format!("Are you sure you want to delete {}?", class);
        if !prompt::confirm(input, output, &question)? {
            writeln!(output, "Delete cancelled.")?;
            return Ok(());
        }
    }

    session.remove_class(class)?;
    if !cli.quiet {
        writeln!(output, "Successfully deleted {}!", class)?;
    }

    let restored = if !yes && prompt::confirm(input, output, "Undo?")? {
        let name = session.undo_remove()?;
        writeln!(output, "Restored {}.", name)?;
        true
    } else {
        session.discard_undo();
        false
    };

    let path = session.save(grades_dir)?;
    debug!(class = %class, restored, path = %path.display(), "delete_class");

    if cli.format == OutputFormat::Json {
        let summary = serde_json::json!({
            "class": class,
            "deleted": !restored,
            "restored": restored,
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}
