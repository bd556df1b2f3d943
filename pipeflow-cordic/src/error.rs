//! Errors.

use thiserror::Error;

/// Configuration errors, reported when a core or a constant table is built.
#[allow(missing_docs)]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("`{name}` must be positive")]
    ZeroWidth { name: &'static str },

    #[error("`{name}` is {width} bits, at least {min} bits are required")]
    WidthTooSmall { name: &'static str, width: usize, min: usize },

    #[error("`{name}` is {width} bits, at most {max} bits are supported")]
    WidthTooLarge { name: &'static str, width: usize, max: usize },

    #[error("at least one iteration is required")]
    NoIterations,

    #[error("{iterations} iterations requested, but the arctangent table has {available} entries")]
    TooManyIterations { iterations: usize, available: usize },
}

/// Errors of the single-sample calls of the cores.
#[allow(missing_docs)]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("{in_flight} samples are still in flight")]
    PipelineBusy { in_flight: usize },

    #[error("no output after {cycles} cycles")]
    NoOutput { cycles: u64 },
}
