//! Error types for the BCL (Boolean cube list) engine
//!
//! This module provides error types organized by source and operation, following
//! the same per-source enum convention throughout the crate: each kind of failure
//! gets its own small enum with `Display`/`Error`/targeted `From` impls rather than
//! one catch-all error type.

use std::fmt;
use std::io;
use std::sync::Arc;

/// Errors produced while decoding a textual cube or cube list (see §6 "Textual
/// cube format").
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Cube lines in the same list disagree on variable count
    WidthMismatch {
        /// The width inferred from the first non-blank line
        expected: usize,
        /// The width of the offending line
        actual: usize,
        /// Zero-based line number of the offending line
        line: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::WidthMismatch {
                expected,
                actual,
                line,
            } => write!(
                f,
                "line {} has {} variables, expected {} (inferred from the first line)",
                line, actual, expected
            ),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<ParseError> for io::Error {
    fn from(err: ParseError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// Errors related to cube-list capacity and appends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CubeListError {
    /// The list's configured capacity ceiling was reached
    CapacityExceeded {
        /// The capacity that was exceeded
        capacity: usize,
    },
}

impl fmt::Display for CubeListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CubeListError::CapacityExceeded { capacity } => {
                write!(f, "cube list capacity of {} cubes exceeded", capacity)
            }
        }
    }
}

impl std::error::Error for CubeListError {}

impl From<CubeListError> for io::Error {
    fn from(err: CubeListError) -> Self {
        io::Error::new(io::ErrorKind::OutOfMemory, err)
    }
}

/// Errors related to boolean expression parsing (§6 "Expression grammar").
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpressionParseError {
    /// Failed to parse a boolean expression due to invalid syntax
    InvalidSyntax {
        /// The error message from the parser
        message: Arc<str>,
        /// The original input string that failed to parse
        input: Arc<str>,
        /// Character offset in the input where the error occurred, if known
        position: Option<usize>,
    },
}

impl fmt::Display for ExpressionParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpressionParseError::InvalidSyntax {
                message,
                input,
                position,
            } => {
                if let Some(pos) = position {
                    write!(
                        f,
                        "failed to parse expression at position {}: {}. input: {:?}",
                        pos, message, input
                    )
                } else {
                    write!(f, "failed to parse expression: {}. input: {:?}", message, input)
                }
            }
        }
    }
}

impl std::error::Error for ExpressionParseError {}

impl From<ExpressionParseError> for io::Error {
    fn from(err: ExpressionParseError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// Errors produced by the minimization / decision pipeline (§4.6, §4.11).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MinimizationError {
    /// A recursive decision procedure (tautology, cofactor-complement) exceeded
    /// its configured depth bound
    RecursionLimitExceeded {
        /// The depth bound that was exceeded
        depth: usize,
    },
    /// The cube-list arena backing the operation ran out of capacity
    CubeList(CubeListError),
}

impl fmt::Display for MinimizationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinimizationError::RecursionLimitExceeded { depth } => write!(
                f,
                "recursion depth bound of {} exceeded during minimization",
                depth
            ),
            MinimizationError::CubeList(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for MinimizationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MinimizationError::CubeList(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CubeListError> for MinimizationError {
    fn from(err: CubeListError) -> Self {
        MinimizationError::CubeList(err)
    }
}

/// Errors surfaced by the JSON command-script interpreter (§6 "JSON command script").
#[derive(Debug)]
pub enum ScriptError {
    /// The top-level script value was not a JSON array of command objects
    NotAnArray,
    /// A command object was missing its required `cmd` field, or named an
    /// unrecognized command
    UnknownCommand {
        /// The offending command name, if one was present
        cmd: Option<String>,
    },
    /// A command referenced a slot outside the supported `0..8` range
    SlotOutOfRange {
        /// The offending slot index
        slot: i64,
    },
    /// A command supplied neither `bcl` nor `expr`, or supplied both
    MissingOperand,
    /// Failed to decode the `bcl` field as a cube list
    Parse(ParseError),
    /// Failed to parse the `expr` field as a boolean expression
    Expression(ExpressionParseError),
    /// The requested algebraic operation failed
    Minimization(MinimizationError),
    /// Malformed JSON input
    Json(serde_json::Error),
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::NotAnArray => write!(f, "script must be a top-level JSON array"),
            ScriptError::UnknownCommand { cmd } => match cmd {
                Some(cmd) => write!(f, "unrecognized command {:?}", cmd),
                None => write!(f, "command object missing required \"cmd\" field"),
            },
            ScriptError::SlotOutOfRange { slot } => {
                write!(f, "slot {} out of range 0..8", slot)
            }
            ScriptError::MissingOperand => {
                write!(f, "command requires exactly one of \"bcl\" or \"expr\"")
            }
            ScriptError::Parse(e) => write!(f, "{}", e),
            ScriptError::Expression(e) => write!(f, "{}", e),
            ScriptError::Minimization(e) => write!(f, "{}", e),
            ScriptError::Json(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScriptError::Parse(e) => Some(e),
            ScriptError::Expression(e) => Some(e),
            ScriptError::Minimization(e) => Some(e),
            ScriptError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseError> for ScriptError {
    fn from(err: ParseError) -> Self {
        ScriptError::Parse(err)
    }
}

impl From<ExpressionParseError> for ScriptError {
    fn from(err: ExpressionParseError) -> Self {
        ScriptError::Expression(err)
    }
}

impl From<MinimizationError> for ScriptError {
    fn from(err: MinimizationError) -> Self {
        ScriptError::Minimization(err)
    }
}

impl From<CubeListError> for ScriptError {
    fn from(err: CubeListError) -> Self {
        ScriptError::Minimization(MinimizationError::CubeList(err))
    }
}

impl From<serde_json::Error> for ScriptError {
    fn from(err: serde_json::Error) -> Self {
        ScriptError::Json(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_width_mismatch_message() {
        let err = ParseError::WidthMismatch {
            expected: 4,
            actual: 3,
            line: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("line 2"));
        assert!(msg.contains("expected 4"));
    }

    #[test]
    fn cube_list_error_to_io_error() {
        let err = CubeListError::CapacityExceeded { capacity: 16 };
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::OutOfMemory);
    }

    #[test]
    fn minimization_error_from_cube_list_error() {
        let cube_err = CubeListError::CapacityExceeded { capacity: 4 };
        let min_err: MinimizationError = cube_err.into();
        assert!(matches!(min_err, MinimizationError::CubeList(_)));
    }

    #[test]
    fn script_error_unknown_command_display() {
        let err = ScriptError::UnknownCommand {
            cmd: Some("frobnicate".to_string()),
        };
        assert!(err.to_string().contains("frobnicate"));
    }
}
