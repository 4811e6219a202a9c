use derive_more::Display;

/// Everything that can go wrong before (or around) a search. The solvers
/// themselves are infallible once a `Problem` has been built.
#[derive(Display, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[display(
        fmt = "Got {} values but {} weights, both must have the same length.",
        values,
        weights
    )]
    LengthMismatch { values: usize, weights: usize },
    #[display(fmt = "Item {} has zero weight, weights must be positive.", index)]
    ZeroWeight { index: usize },
    #[display(fmt = "Could not load file: {}, because: {}", path, reason)]
    Io { path: String, reason: String },
    #[display(fmt = "Line {}: {}", line, reason)]
    Parse { line: usize, reason: String },
    #[display(
        fmt = "Method {:?} not found, following are valid: {}.",
        name,
        valid
    )]
    UnknownMethod { name: String, valid: String },
    #[display(
        fmt = "Reference value is {}, but solver found {}.",
        expected,
        found
    )]
    ReferenceMismatch { expected: u64, found: u64 },
}

impl std::error::Error for Error {}
