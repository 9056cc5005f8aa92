//! `gradetab shell` command - interactive session
//!
//! A line-oriented rendition of the original windowed session: one command
//! per line, every outcome reported as a message, and the quit flow backed
//! by the session controller's dirty tracking. Errors never end the shell.

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::cli::Cli;
use crate::commands::prompt::{self, SaveChoice};
use gradetab_core::error::{GradetabError, Result};
use gradetab_core::format;
use gradetab_core::session::{QuitPrompt, Session};

const HELP: &str = "\
Commands:
  user <name>                                Set the active user
  load                                       Load the user's grade file
  save                                       Save the user's grade file
  add <class> <minor> <major> <minorWeight>  Add a class (use - for no grades)
  edit <class> <minor> <major>               Replace a class's grade lists
  delete <class>                             Delete a class (with undo offer)
  undo                                       Restore the last deleted class
  list                                       List classes with averages
  show <class>                               Show one class record
  help                                       Show this help
  quit                                       Leave the shell";

/// Execute the shell command against real stdin/stdout
pub fn execute(cli: &Cli, grades_dir: &Path) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    run(cli, grades_dir, &mut input, &mut output)
}

fn run(
    cli: &Cli,
    grades_dir: &Path,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<()> {
    let mut session = super::session_for(cli);

    loop {
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // EOF quits; unsaved changes cannot be prompted for anymore.
            if session.quit_prompt() == QuitPrompt::UnsavedChanges {
                writeln!(output, "Unsaved changes discarded.")?;
            }
            return Ok(());
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line == "quit" || line == "exit" {
            if confirm_quit(&mut session, grades_dir, input, output)? {
                return Ok(());
            }
            continue;
        }

        if let Err(e) = dispatch_line(&mut session, grades_dir, line, input, output) {
            writeln!(output, "error: {}", e)?;
        }
    }
}

/// Run one shell command. Usage mistakes and failed operations come back
/// as errors for the caller to report.
fn dispatch_line(
    session: &mut Session,
    grades_dir: &Path,
    line: &str,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<()> {
    let mut words = line.split_whitespace();
    let command = words.next().unwrap_or_default();
    let args: Vec<&str> = words.collect();

    match command {
        "user" => {
            session.set_user_name(args.first().copied().unwrap_or_default());
            match session.user_name() {
                Some(name) => writeln!(output, "User set to {}.", name)?,
                None => writeln!(output, "User cleared.")?,
            }
        }
        "load" => {
            let count = session.load(grades_dir)?;
            writeln!(output, "Grades loaded successfully ({} classes).", count)?;
        }
        "save" => {
            session.save(grades_dir)?;
            writeln!(output, "Grades saved successfully.")?;
        }
        "add" => match args.as_slice() {
            [class, minor, major, weight] => {
                let major_weight = session.add_class(class, csv(minor), csv(major), weight)?;
                writeln!(output, "Major weight automatically set to {}%", major_weight)?;
                writeln!(output, "Class added successfully.")?;
            }
            _ => return Err(usage("add <class> <minorCSV> <majorCSV> <minorWeight>")),
        },
        "edit" => match args.as_slice() {
            [class, minor, major] => {
                session.replace_grades(class, csv(minor), csv(major))?;
                writeln!(output, "Class edited successfully.")?;
            }
            _ => return Err(usage("edit <class> <minorCSV> <majorCSV>")),
        },
        "delete" => match args.as_slice() {
            [class] => delete_class(session, class, input, output)?,
            _ => return Err(usage("delete <class>")),
        },
        "undo" => {
            let name = session.undo_remove()?;
            writeln!(output, "Restored {}.", name)?;
        }
        "list" => {
            for entry in session.roster().entries() {
                writeln!(output, "{}\t{}%", entry.class_name, entry.class_average()?)?;
            }
        }
        "show" => match args.as_slice() {
            [class] => {
                let entry = session
                    .roster()
                    .find(class)
                    .ok_or_else(|| GradetabError::class_not_found(*class))?;
                write!(output, "{}", format::render_class(entry)?)?;
            }
            _ => return Err(usage("show <class>")),
        },
        "help" => writeln!(output, "{}", HELP)?,
        other => {
            return Err(GradetabError::UsageError(format!(
                "unknown command: {} (try help)",
                other
            )))
        }
    }

    Ok(())
}

/// The original's delete dialog chain: confirm, remove, offer undo
fn delete_class(
    session: &mut Session,
    class: &str,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<()> {
    if session.roster().find(class).is_none() {
        return Err(GradetabError::class_not_found(class));
    }

    let question = format!("Are you sure you want to delete {}?", class);
    if !prompt::confirm(input, output, &question)? {
        writeln!(output, "Delete cancelled.")?;
        return Ok(());
    }

    session.remove_class(class)?;
    writeln!(output, "Successfully deleted {}!", class)?;

    if prompt::confirm(input, output, "Undo?")? {
        let name = session.undo_remove()?;
        writeln!(output, "Restored {}.", name)?;
    } else {
        session.discard_undo();
    }

    Ok(())
}

/// Returns true when the session should end
fn confirm_quit(
    session: &mut Session,
    grades_dir: &Path,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<bool> {
    match session.quit_prompt() {
        QuitPrompt::UnsavedChanges => {
            let choice =
                prompt::confirm_save(input, output, "Do you want to save before quitting?")?;
            match choice {
                SaveChoice::Save => match session.save(grades_dir) {
                    Ok(_) => {
                        writeln!(output, "Grades saved successfully.")?;
                        Ok(true)
                    }
                    // A failed save is reported and the session stays open.
                    Err(e) => {
                        writeln!(output, "error: {}", e)?;
                        Ok(false)
                    }
                },
                SaveChoice::Discard => Ok(true),
                SaveChoice::Cancel => Ok(false),
            }
        }
        QuitPrompt::NoChanges => {
            Ok(prompt::confirm(input, output, "No changes are made. Do you want to quit now?")?)
        }
    }
}

/// Shell grammar uses `-` for an empty grade list; positional words cannot
/// be empty strings.
fn csv(word: &str) -> &str {
    if word == "-" {
        ""
    } else {
        word
    }
}

fn usage(text: &str) -> GradetabError {
    GradetabError::UsageError(format!("usage: {}", text))
}
