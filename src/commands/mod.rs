//! Command implementations for gradetab

pub mod add;
pub mod delete;
pub mod dispatch;
pub mod edit;
pub mod list;
pub mod shell;
pub mod show;

mod prompt;

use crate::cli::Cli;
use gradetab_core::error::Result;
use gradetab_core::grades::GradeSet;
use gradetab_core::session::Session;

/// Build a session carrying the CLI's user name (if any)
pub(crate) fn session_for(cli: &Cli) -> Session {
    let mut session = Session::new();
    if let Some(user) = &cli.user {
        session.set_user_name(user);
    }
    session
}

/// JSON projection of one class record, averages included
pub(crate) fn class_json(entry: &GradeSet) -> Result<serde_json::Value> {
    let class_average = entry.class_average()?;
    let mut value = serde_json::to_value(entry)?;
    if let Some(obj) = value.as_object_mut() {
        obj.insert(
            "minor_average".to_string(),
            serde_json::json!(entry.minor_average()),
        );
        obj.insert(
            "major_average".to_string(),
            serde_json::json!(entry.major_average()),
        );
        obj.insert("class_average".to_string(), serde_json::json!(class_average));
    }
    Ok(value)
}
