//! Session controller
//!
//! Orchestrates load/save/add/edit/delete against a roster, tracks the
//! dirty flag, and owns the quit-confirmation decision. One instance per
//! user session; every operation runs to completion on the calling thread,
//! and file handles are scoped to the call.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use crate::codec;
use crate::error::{GradetabError, Result};
use crate::grades::{self, GradeSet};
use crate::roster::Roster;

/// Which quit confirmation the presentation layer should run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuitPrompt {
    /// Unsaved changes and a user is set: offer save / discard / cancel
    UnsavedChanges,
    /// Nothing to lose: a plain yes/no confirmation
    NoChanges,
}

/// One user's editing session over a roster
#[derive(Debug, Default)]
pub struct Session {
    user_name: String,
    roster: Roster,
    dirty: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the active user. An empty name means no active user. Does not
    /// touch the dirty flag or the roster.
    pub fn set_user_name(&mut self, name: &str) {
        self.user_name = name.to_string();
    }

    pub fn user_name(&self) -> Option<&str> {
        if self.user_name.is_empty() {
            None
        } else {
            Some(&self.user_name)
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// True when the in-memory roster differs from the last load/save
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Path of this user's grade file under `dir`
    pub fn grades_path(&self, dir: &Path) -> Result<PathBuf> {
        let name = self.user_name().ok_or(GradetabError::NoUserName)?;
        Ok(dir.join(format!("{}Grades.txt", name)))
    }

    /// Load the user's grade file, replacing the roster wholesale.
    ///
    /// A missing file is [`GradetabError::FileNotFound`], distinct from a
    /// read failure. On any failure the in-memory roster is untouched.
    #[tracing::instrument(skip(self, dir), fields(user = %self.user_name))]
    pub fn load(&mut self, dir: &Path) -> Result<usize> {
        let path = self.grades_path(dir)?;
        if !path.exists() {
            return Err(GradetabError::FileNotFound { path });
        }
        let file = File::open(&path)?;
        let roster = codec::decode(BufReader::new(file))?;
        let count = roster.len();
        self.roster = roster;
        self.dirty = false;
        tracing::debug!(classes = count, "roster_loaded");
        Ok(count)
    }

    /// Save the roster to the user's grade file (overwrite).
    ///
    /// The dirty flag is cleared only on success, so a failed save can be
    /// retried.
    #[tracing::instrument(skip(self, dir), fields(user = %self.user_name))]
    pub fn save(&mut self, dir: &Path) -> Result<PathBuf> {
        let path = self.grades_path(dir)?;
        let file = File::create(&path)?;
        codec::encode(&self.roster, BufWriter::new(file))?;
        self.dirty = false;
        tracing::debug!(classes = self.roster.len(), path = %path.display(), "roster_saved");
        Ok(path)
    }

    /// Add a class from raw input strings.
    ///
    /// All inputs are parsed and validated before anything mutates, so a
    /// rejected add leaves the roster unchanged. The major weight is derived
    /// as `100 - minor` and returned for display.
    pub fn add_class(
        &mut self,
        class_name: &str,
        minor_csv: &str,
        major_csv: &str,
        minor_weight_text: &str,
    ) -> Result<f64> {
        let minor_grades = grades::parse_grade_list(minor_csv)?;
        let major_grades = grades::parse_grade_list(major_csv)?;
        let minor_weight = grades::parse_weight(minor_weight_text)?;
        let major_weight = 100.0 - minor_weight;
        self.roster.add(GradeSet::new(
            class_name,
            minor_grades,
            major_grades,
            minor_weight,
            major_weight,
        ))?;
        self.dirty = true;
        Ok(major_weight)
    }

    /// Replace both grade lists of a class; weights are carried over
    /// unchanged
    pub fn replace_grades(
        &mut self,
        class_name: &str,
        minor_csv: &str,
        major_csv: &str,
    ) -> Result<()> {
        let minor_grades = grades::parse_grade_list(minor_csv)?;
        let major_grades = grades::parse_grade_list(major_csv)?;
        self.roster
            .replace_grades(class_name, minor_grades, major_grades)?;
        self.dirty = true;
        Ok(())
    }

    /// Remove a class, keeping it available for a single undo
    pub fn remove_class(&mut self, class_name: &str) -> Result<()> {
        self.roster.remove(class_name)?;
        self.dirty = true;
        Ok(())
    }

    /// Restore the most recently removed class; returns its name
    pub fn undo_remove(&mut self) -> Result<String> {
        let entry = self.roster.undo_remove()?;
        Ok(entry.class_name.clone())
    }

    /// Drop the pending-undo slot (undo declined)
    pub fn discard_undo(&mut self) {
        self.roster.discard_undo();
    }

    /// Which confirmation to run before quitting
    pub fn quit_prompt(&self) -> QuitPrompt {
        if self.dirty && self.user_name().is_some() {
            QuitPrompt::UnsavedChanges
        } else {
            QuitPrompt::NoChanges
        }
    }
}
