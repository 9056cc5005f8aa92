//! `gradetab add` command - add a class to the user's roster
//!
//! The minor weight comes from the flag, the config default, or 50; the
//! major weight is always derived as the remainder and reported back.

use std::path::Path;

use tracing::debug;

use crate::cli::{AddArgs, Cli, OutputFormat};
use gradetab_core::config::Config;
use gradetab_core::error::{GradetabError, Result};

/// Execute the add command
pub fn execute(cli: &Cli, config: &Config, grades_dir: &Path, args: &AddArgs) -> Result<()> {
    let mut session = super::session_for(cli);

    // First run has no file yet; anything else is a real failure.
    match session.load(grades_dir) {
        Ok(_) | Err(GradetabError::FileNotFound { .. }) => {}
        Err(e) => return Err(e),
    }

    let weight_text = args
        .minor_weight
        .clone()
        .or_else(|| config.default_minor_weight.map(|w| w.to_string()))
        .unwrap_or_else(|| "50".to_string());

    let major_weight = session.add_class(&args.class, &args.minor, &args.major, &weight_text)?;
    let path = session.save(grades_dir)?;

    debug!(class = %args.class, path = %path.display(), "add_class");

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
                println!("Major weight automatically set to {}%", major_weight);
                println!("Class added successfully.");
            }
        }
    }

    Ok(())
}
