// Error types for the septik crate.
//
// The resolver itself is total and has no error path. The only fallible
// operation is turning user-supplied text (a CLI flag, a config string)
// into a `Septik`, which goes through `Septik::from_str` in `types.rs`.

use thiserror::Error as ThisError;

/// Failure to interpret a string as one of the six cases.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum ParseSeptikError {
    #[error("case code {0} is outside 1..=6")]
    CodeOutOfRange(i64),
    #[error("unknown case name '{0}'")]
    UnknownName(String),
}
