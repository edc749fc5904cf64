pub mod error;
pub mod format;

pub use error::{CheckError, Relation, SurroundingCheck};
pub use format::{DiagnosticFormatter, PlainFormatter, Segment, render_error};
