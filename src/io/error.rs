//! Error types and context management for navigation operations

use std::fmt;
use std::path::PathBuf;

use crate::spatial::{Coordinate, Direction};

/// Main error type for all navigation operations
///
/// An unreachable planet is not an error; searches report it as
/// [`crate::search::SearchOutcome::NoPathFound`].
#[derive(Debug)]
pub enum NavigationError {
    /// A probe step would leave the grid
    ///
    /// Strategies only steer along pre-filtered legal directions, so this
    /// signals a defect in the caller rather than a recoverable condition.
    OutOfBounds {
        /// Probe position when the step was attempted
        position: Coordinate,
        /// Offending direction
        direction: Direction,
    },

    /// A hazard list line could not be understood
    HazardParse {
        /// 1-based line number
        line: usize,
        /// Description of what's wrong with the line
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system or stream operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                position,
                direction,
            } => {
                write!(f, "Step {direction} from ({position}) leaves the grid")
            }
            Self::HazardParse { line, reason } => {
                write!(f, "Invalid hazard record on line {line}: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for NavigationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for navigation results
pub type Result<T> = std::result::Result<T, NavigationError>;

/// Additional context to enrich error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// File involved in the failing operation
    pub path: Option<PathBuf>,
    /// Operation being performed
    pub operation: Option<&'static str>,
}

/// Enriches error messages with the state of the failing operation
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Add path and operation context
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: impl Into<PathBuf>, operation: &'static str) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<NavigationError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only file system errors carry a path worth replacing
            if let NavigationError::FileSystem {
                path, operation, ..
            } = &mut error
            {
                if let Some(context_path) = context.path {
                    *path = context_path;
                }
                if let Some(context_operation) = context.operation {
                    *operation = context_operation;
                }
            }
            error
        })
    }

    fn with_path(self, path: impl Into<PathBuf>, operation: &'static str) -> Result<T> {
        self.with_context(ErrorContext {
            path: Some(path.into()),
            operation: Some(operation),
        })
    }
}

impl From<std::io::Error> for NavigationError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> NavigationError {
    NavigationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a hazard list parse error
pub fn parse_error(line: usize, reason: &impl ToString) -> NavigationError {
    NavigationError::HazardParse {
        line,
        reason: reason.to_string(),
    }
}
