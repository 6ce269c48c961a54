#![allow(clippy::module_inception)]

use std::{env, fmt::Display, path::PathBuf, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Environment variable holding the library search path, in the platform's
/// path-list syntax.
pub const LIBRARY_PATH_VAR: &str = "TALC_LIBRARY_PATH";

/// A source location: line number (1-based) and file name.
///
/// Line 0 is reserved for nodes that have no corresponding source token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn new(line: u32, file: Rc<String>) -> Self {
        Position(line, file)
    }

    /// Location for nodes synthesized by the parser, such as the implicit
    /// `true` of a `for` loop with no condition.
    pub fn synthetic() -> Self {
        Position(0, Rc::new(String::from("<synthetic>")))
    }

    pub fn is_synthetic(&self) -> bool {
        self.0 == 0
    }

    pub fn line(&self) -> u32 {
        self.0
    }

    pub fn file(&self) -> &str {
        &self.1
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.1, self.0)
    }
}

/// Reads the library search path from `TALC_LIBRARY_PATH`. An unset variable
/// yields an empty path.
pub fn library_path_from_env() -> Vec<PathBuf> {
    match env::var_os(LIBRARY_PATH_VAR) {
        Some(value) => env::split_paths(&value).collect(),
        None => Vec::new(),
    }
}

/// Returns the text of a 1-based line, without its line terminator.
pub fn get_line(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth((line - 1) as usize)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}

/// Formats an error together with the offending source line.
///
/// ```text
/// Error: UnexpectedToken (expected ";", got "}" instead)
/// -> main.talc
///    |
/// 20 | x: int = 3
///    |
/// ```
pub fn render_error(error: &Error, source: &str) -> String {
    let position = error.get_position();

    let mut result = String::new();
    if let ErrorTip::None = error.get_tip() {
        result.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.message()));
    } else {
        result.push_str(&format!(
            "Error: {} ({}; {})\n",
            error.get_error_name(),
            error.message(),
            error.get_tip()
        ));
    }
    result.push_str(&format!("-> {}\n", position.file()));

    if let Some(line_text) = get_line(source, position.line()) {
        let line_string = position.line().to_string();
        let padding = line_string.len() + 2;

        result.push_str(&format!("{:>padding$}\n", "|"));
        result.push_str(&format!("{} | {}\n", line_string, line_text.trim()));
        result.push_str(&format!("{:>padding$}\n", "|"));
    }

    result
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::errors::errors::{Error, ErrorImpl};

    use super::{get_line, render_error, Position};

    #[test]
    fn test_get_line() {
        let source = "Hello, world!\nsecond\r\nthird";
        assert_eq!(get_line(source, 1), Some("Hello, world!"));
        assert_eq!(get_line(source, 2), Some("second"));
        assert_eq!(get_line(source, 3), Some("third"));
        assert_eq!(get_line(source, 4), None);
        assert_eq!(get_line(source, 0), None);
    }

    #[test]
    fn test_synthetic_position() {
        assert!(Position::synthetic().is_synthetic());
        assert!(!Position::new(3, Rc::new("a.talc".to_string())).is_synthetic());
        assert_eq!(Position::new(3, Rc::new("a.talc".to_string())).to_string(), "a.talc:3");
    }

    #[test]
    fn test_render_error() {
        let source = "x: int = 1;\n  return y;\n";
        let error = Error::new(
            ErrorImpl::UnreachableStatement,
            Position::new(2, Rc::new("main.talc".to_string())),
        );

        let rendered = render_error(&error, source);
        assert!(rendered.starts_with("Error: UnreachableStatement (unreachable statement;"));
        assert!(rendered.contains("-> main.talc\n"));
        assert!(rendered.contains("2 | return y;\n"));
    }
}
