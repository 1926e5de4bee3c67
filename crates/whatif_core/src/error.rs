use std::fmt;

/// Errors raised by a model's name dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// `set` or `get` referenced a name the model does not recognize
    UnknownParameter(String),
    /// An output read referenced an unrecognized output
    UnknownOutput(String),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::UnknownParameter(name) => {
                write!(f, "unknown model parameter {name:?}")
            }
            ModelError::UnknownOutput(name) => write!(f, "unknown model output {name:?}"),
        }
    }
}

impl std::error::Error for ModelError {}

/// Errors related to malformed scenario or random-input specifications
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecError {
    /// A scenario key was declared with no candidate values
    EmptyScenarioValues(String),
    /// Random-input sequences within one simulation call differ in length
    MismatchedLengths {
        name: String,
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for SpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecError::EmptyScenarioValues(name) => {
                write!(f, "scenario input {name:?} has an empty value list")
            }
            SpecError::MismatchedLengths {
                name,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "random input {name:?} has {actual} draws, expected {expected}"
                )
            }
        }
    }
}

impl std::error::Error for SpecError {}

/// Top-level error for the analysis entry points.
///
/// Any error aborts the whole call; no partial rows or groups are returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    Model(ModelError),
    Spec(SpecError),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::Model(e) => write!(f, "{e}"),
            AnalysisError::Spec(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for AnalysisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnalysisError::Model(e) => Some(e),
            AnalysisError::Spec(e) => Some(e),
        }
    }
}

impl From<ModelError> for AnalysisError {
    fn from(e: ModelError) -> Self {
        AnalysisError::Model(e)
    }
}

impl From<SpecError> for AnalysisError {
    fn from(e: SpecError) -> Self {
        AnalysisError::Spec(e)
    }
}
