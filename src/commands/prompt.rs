//! Stdin prompt helpers shared by delete and the interactive shell

use std::io::{BufRead, Write};

/// Answer to the save-before-quit question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveChoice {
    Save,
    Discard,
    Cancel,
}

/// Ask a yes/no question. EOF or anything but y/yes answers no.
pub fn confirm(
    input: &mut impl BufRead,
    output: &mut impl Write,
    question: &str,
) -> std::io::Result<bool> {
    write!(output, "{} [y/N] ", question)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(false);
    }
    let answer = line.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Ask the three-way save/discard/cancel question. EOF discards: nothing
/// further can be asked.
pub fn confirm_save(
    input: &mut impl BufRead,
    output: &mut impl Write,
    question: &str,
) -> std::io::Result<SaveChoice> {
    write!(output, "{} [y/n/c] ", question)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(SaveChoice::Discard);
    }
    Ok(match line.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => SaveChoice::Save,
        "n" | "no" => SaveChoice::Discard,
        _ => SaveChoice::Cancel,
    })
}
