//! Command dispatch logic for gradetab

use std::fs;
use std::time::Instant;

use tracing::debug;

use crate::cli::paths::resolve_root_path;
use crate::cli::{Cli, Commands};
use gradetab_core::config::Config;
use gradetab_core::error::Result;

use super::{add, delete, edit, list, shell, show};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    // Determine the root directory and where grade files live under it
    let root = resolve_root_path(cli.root.clone());
    let config = Config::load(&root)?;
    let grades_dir = config.resolve_grades_dir(&root);
    if grades_dir != root && !grades_dir.exists() {
        fs::create_dir_all(&grades_dir)?;
    }

    debug!(elapsed = ?start.elapsed(), root = %root.display(), "resolve_root");

    match &cli.command {
        Commands::List => list::execute(cli, &grades_dir),
        Commands::Show { class } => show::execute(cli, &grades_dir, class),
        Commands::Add(args) => add::execute(cli, &config, &grades_dir, args),
        Commands::Edit(args) => edit::execute(cli, &grades_dir, args),
        Commands::Delete { class, yes } => delete::execute(cli, &grades_dir, class, *yes),
        Commands::Shell => shell::execute(cli, &grades_dir),
    }
}
