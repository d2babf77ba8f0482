use thiserror::Error;

/// Error returned when a configuration name is not recognized.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown {kind} `{name}` (expected one of: {expected})")]
    Unknown {
        kind: &'static str,
        name: String,
        expected: &'static str,
    },
}

impl ParseError {
    pub(crate) fn unknown(kind: &'static str, name: &str, expected: &'static str) -> Self {
        Self::Unknown {
            kind,
            name: name.to_owned(),
            expected,
        }
    }
}
