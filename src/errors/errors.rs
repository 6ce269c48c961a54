use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A syntax error and where it happened. The first error aborts the parse.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// The human-readable description, without the location prefix.
    pub fn message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedInFactor { .. } => "UnexpectedInFactor",
            ErrorImpl::EmptyStatement => "EmptyStatement",
            ErrorImpl::ImportOutsideGlobalScope => "ImportOutsideGlobalScope",
            ErrorImpl::UnreachableStatement => "UnreachableStatement",
            ErrorImpl::MalformedParameterList { .. } => "MalformedParameterList",
            ErrorImpl::MalformedArgumentList { .. } => "MalformedArgumentList",
            ErrorImpl::MalformedLiteral { .. } => "MalformedLiteral",
            ErrorImpl::AccessAfterIndexAssignment => "AccessAfterIndexAssignment",
            ErrorImpl::LibraryNotFound { .. } => "LibraryNotFound",
            ErrorImpl::LibraryUnreadable { .. } => "LibraryUnreadable",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { found, .. } if found == "\"}\"" => {
                ErrorTip::Suggestion(String::from("did you miss a semicolon?"))
            }
            ErrorImpl::NumberParseError { .. } => {
                ErrorTip::Suggestion(String::from("is it above the integer limit?"))
            }
            ErrorImpl::EmptyStatement => {
                ErrorTip::Suggestion(String::from("remove the stray `;`"))
            }
            ErrorImpl::UnreachableStatement => ErrorTip::Suggestion(String::from(
                "`break`, `continue` and `return` must be the last statement in a block",
            )),
            ErrorImpl::ImportOutsideGlobalScope => {
                ErrorTip::Suggestion(String::from("move the import to the top of the file"))
            }
            ErrorImpl::LibraryNotFound { .. } => ErrorTip::Suggestion(format!(
                "add the library's directory to {}",
                crate::LIBRARY_PATH_VAR
            )),
            _ => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.position, self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// Every way a parse can fail. `found` fields are already formatted
/// descriptions of the offending token, such as `identifier "x"`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised character {token:?}")]
    UnrecognisedToken { token: String },
    #[error("malformed numeric literal {token}")]
    NumberParseError { token: String },
    #[error("expected {expected}, got {found} instead")]
    UnexpectedToken { expected: String, found: String },
    #[error("didn't expect to see a {found} in factor")]
    UnexpectedInFactor { found: String },
    #[error("empty statement")]
    EmptyStatement,
    #[error("imports are only allowed in the global scope")]
    ImportOutsideGlobalScope,
    #[error("unreachable statement")]
    UnreachableStatement,
    #[error("expected \",\" or {end}, got {found} instead")]
    MalformedParameterList { end: String, found: String },
    #[error("expected \",\" or {end} next in {context}, got {found} instead")]
    MalformedArgumentList {
        end: String,
        context: String,
        found: String,
    },
    #[error("expected \",\" or \"]\" next in {kind} literal, got {found} instead")]
    MalformedLiteral { kind: &'static str, found: String },
    #[error("can't index or call a method after an index assignment")]
    AccessAfterIndexAssignment,
    #[error("couldn't find a match for import \"{library}\" on library path \"{path}\"")]
    LibraryNotFound { library: String, path: String },
    #[error("couldn't import \"{library}\": {message}")]
    LibraryUnreadable { library: String, message: String },
}
