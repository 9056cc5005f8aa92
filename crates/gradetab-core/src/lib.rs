//! Gradetab Core Library
//!
//! Core domain logic for the gradetab grade tracker: the grade record
//! model, roster semantics, the flat-file codec, and the session
//! controller.

pub mod codec;
pub mod config;
pub mod error;
pub mod format;
pub mod grades;
pub mod logging;
pub mod roster;
pub mod session;
