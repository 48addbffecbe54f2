//! Output formatting for CLI results

pub mod json;
pub mod redact;
pub mod table;
