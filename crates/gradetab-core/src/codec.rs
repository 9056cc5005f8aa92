//! Flat-file roster codec
//!
//! One class per line, fields separated by a single tab:
//!
//! ```text
//! className \t minorCSV \t majorCSV \t minorWeight \t majorWeight [\t classAverage]
//! ```
//!
//! The trailing class-average field is written on save but ignored on load;
//! averages are always recomputed from the grade lists. Fields are not
//! escaped: a tab or newline inside a class name corrupts the record.

use std::io::{BufRead, Write};

use crate::error::{GradetabError, Result};
use crate::format::grade_list;
use crate::grades::{self, GradeSet};
use crate::roster::Roster;

/// Encode one class record as a file line (no trailing newline).
///
/// The class average is computed fresh, so a record whose weights sum to
/// zero cannot be encoded.
pub fn encode_line(entry: &GradeSet) -> Result<String> {
    Ok(format!(
        "{}\t{}\t{}\t{}\t{}\t{}",
        entry.class_name,
        grade_list(&entry.minor_grades),
        grade_list(&entry.major_grades),
        entry.minor_weight,
        entry.major_weight,
        entry.class_average()?,
    ))
}

/// Write the whole roster, one newline-terminated line per entry, in
/// roster order
pub fn encode(roster: &Roster, mut writer: impl Write) -> Result<()> {
    for entry in roster.entries() {
        let line = encode_line(entry)?;
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;
    Ok(())
}

/// Decode one file line. `line_no` is 1-based and only used for error
/// reporting.
pub fn decode_line(line: &str, line_no: usize) -> Result<GradeSet> {
    let fields: Vec<&str> = line.split('\t').collect();
    if !(5..=6).contains(&fields.len()) {
        return Err(GradetabError::malformed_line(
            line_no,
            format!("expected 5 or 6 tab-separated fields, got {}", fields.len()),
        ));
    }

    let minor_grades = grades::parse_grade_list(fields[1])?;
    let major_grades = grades::parse_grade_list(fields[2])?;
    // Weights are taken as stored; only the add flow range-checks them.
    let minor_weight: f64 = fields[3]
        .trim()
        .parse()
        .map_err(|_| GradetabError::invalid_number("minor weight", fields[3]))?;
    let major_weight: f64 = fields[4]
        .trim()
        .parse()
        .map_err(|_| GradetabError::invalid_number("major weight", fields[4]))?;

    Ok(GradeSet::new(
        fields[0],
        minor_grades,
        major_grades,
        minor_weight,
        major_weight,
    ))
}

/// Read a whole roster in file order.
///
/// Any line failure aborts the load; there is no partial roster. Blank
/// lines and a trailing CR (CRLF files) are tolerated.
pub fn decode(reader: impl BufRead) -> Result<Roster> {
    let mut roster = Roster::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }
        roster.add(decode_line(line, idx + 1)?)?;
    }
    Ok(roster)
}
