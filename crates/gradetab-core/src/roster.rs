//! Ordered, name-keyed roster of class records
//!
//! Insertion order is significant: it is the display order and the file
//! line order. Class names are unique, compared exactly (case-sensitive).
//! The roster also owns the single pending-undo slot for the most recently
//! removed entry.

use crate::error::{GradetabError, Result};
use crate::grades::GradeSet;

/// A removed entry parked for single-step undo
#[derive(Debug, Clone)]
struct PendingUndo {
    /// Position the entry occupied before removal
    index: usize,
    entry: GradeSet,
}

/// One user's set of class records
#[derive(Debug, Clone, Default)]
pub struct Roster {
    entries: Vec<GradeSet>,
    pending_undo: Option<PendingUndo>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a class record.
    ///
    /// Fails without mutating when the name is empty or already taken.
    pub fn add(&mut self, entry: GradeSet) -> Result<()> {
        if entry.class_name.is_empty() {
            return Err(GradetabError::EmptyClassName);
        }
        if self.find(&entry.class_name).is_some() {
            return Err(GradetabError::DuplicateClass {
                name: entry.class_name,
            });
        }
        self.pending_undo = None;
        self.entries.push(entry);
        Ok(())
    }

    /// Exact, case-sensitive lookup
    pub fn find(&self, class_name: &str) -> Option<&GradeSet> {
        self.entries.iter().find(|e| e.class_name == class_name)
    }

    /// Overwrite both grade lists of a class; weights are untouched
    pub fn replace_grades(
        &mut self,
        class_name: &str,
        minor_grades: Vec<f64>,
        major_grades: Vec<f64>,
    ) -> Result<()> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.class_name == class_name)
            .ok_or_else(|| GradetabError::class_not_found(class_name))?;
        entry.minor_grades = minor_grades;
        entry.major_grades = major_grades;
        self.pending_undo = None;
        Ok(())
    }

    /// Remove a class, parking it (with its position) for a single undo
    pub fn remove(&mut self, class_name: &str) -> Result<()> {
        let index = self
            .entries
            .iter()
            .position(|e| e.class_name == class_name)
            .ok_or_else(|| GradetabError::class_not_found(class_name))?;
        let entry = self.entries.remove(index);
        self.pending_undo = Some(PendingUndo { index, entry });
        Ok(())
    }

    /// Reinsert the most recently removed entry at its original position.
    ///
    /// The saved index is clamped to the current length, so an undo after
    /// the sequence shrank never panics.
    pub fn undo_remove(&mut self) -> Result<&GradeSet> {
        let pending = self.pending_undo.take().ok_or(GradetabError::NothingToUndo)?;
        let index = pending.index.min(self.entries.len());
        self.entries.insert(index, pending.entry);
        Ok(&self.entries[index])
    }

    /// Drop the pending-undo slot (undo declined)
    pub fn discard_undo(&mut self) {
        self.pending_undo = None;
    }

    pub fn has_pending_undo(&self) -> bool {
        self.pending_undo.is_some()
    }

    /// All entries in roster order, for display and encoding
    pub fn entries(&self) -> &[GradeSet] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
