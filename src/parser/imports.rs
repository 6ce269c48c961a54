//! `import "<library>";` resolution.
//!
//! A library is parsed in place the first time it is imported: its top-level
//! statements are appended to the importer's output at the point of import.
//! Later imports of the same name are no-ops.

use std::path::PathBuf;

use tracing::debug;

use crate::{
    ast::ast::AstNode,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        source::{SourceError, TokenSource},
        tokens::TokenKind,
    },
};

use super::parser::Parser;

pub const LIBRARY_EXTENSION: &str = ".talc";

pub fn parse_import<S: TokenSource>(parser: &mut Parser<S>, result: &mut Vec<AstNode>) -> Result<(), Error> {
    let position = parser.get_position();
    parser.expect(TokenKind::Import)?;
    let library = parser.expect_string_literal()?;
    parser.expect(TokenKind::Semicolon)?;

    // Marked before parsing so that a library importing itself terminates.
    if !parser.mark_imported(&library) {
        debug!(library = %library, "already imported");
        return Ok(());
    }

    let Some(path) = find_library(parser.library_path(), &library) else {
        return Err(Error::new(
            ErrorImpl::LibraryNotFound {
                library,
                path: join_library_path(parser.library_path()),
            },
            position,
        ));
    };
    debug!(library = %library, path = %path.display(), "importing");

    let lexer = S::open(&path).map_err(|error| match error {
        SourceError::Io(error) => Error::new(
            ErrorImpl::LibraryUnreadable {
                library: library.clone(),
                message: error.to_string(),
            },
            position.clone(),
        ),
        SourceError::Lex(error) => error,
    })?;

    let importer = parser.swap_lexer(lexer);
    let parsed = parser.parse_into(result);
    parser.swap_lexer(importer);

    parsed
}

/// Finds the first file named `library` (with `.talc` appended if missing)
/// in the directories of `library_path`, searched in order.
pub fn find_library(library_path: &[PathBuf], library: &str) -> Option<PathBuf> {
    let file_name = if library.ends_with(LIBRARY_EXTENSION) {
        library.to_string()
    } else {
        format!("{}{}", library, LIBRARY_EXTENSION)
    };

    library_path
        .iter()
        .map(|directory| directory.join(&file_name))
        .find(|candidate| candidate.exists())
}

/// The search path as it appears in "not found" errors: directories joined
/// with `:`.
pub fn join_library_path(library_path: &[PathBuf]) -> String {
    library_path
        .iter()
        .map(|directory| directory.display().to_string())
        .collect::<Vec<String>>()
        .join(":")
}
