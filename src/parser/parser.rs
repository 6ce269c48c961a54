//! Parser implementation for building the AST forest.
//!
//! The parser reads through a `TokenSource` one token at a time with no
//! backtracking. Statements are dispatched through a lookup table keyed on
//! the leading token; expressions use precedence climbing (see `expr`).
//!
//! Between top-level `parse` calls the only state kept is the set of
//! libraries already imported and the active token source, which imports
//! swap out and restore.

use std::{
    collections::{HashMap, HashSet},
    mem,
    path::PathBuf,
};

use tracing::{debug, trace};

use crate::{
    ast::ast::AstNode,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        source::{TokenSource, TokenStream},
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    imports::parse_import,
    lookups::{create_token_lookups, StmtHandler, StmtLookup},
    stmt::parse_stmt,
};

pub struct Parser<S: TokenSource = TokenStream> {
    /// The active token source; swapped out while an import is parsed
    lexer: S,
    /// Directories searched, in order, for imported libraries
    library_path: Vec<PathBuf>,
    /// Names of libraries already spliced into the output
    imported_libraries: HashSet<String>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup<S>,
    /// Set while parsing the value of `a[i] = value`, where no indexing or
    /// method call may follow
    access_forbidden: bool,
}

impl<S: TokenSource> Parser<S> {
    pub fn new(lexer: S, library_path: Vec<PathBuf>) -> Self {
        let mut parser = Parser {
            lexer,
            library_path,
            imported_libraries: HashSet::new(),
            stmt_lookup: HashMap::new(),
            access_forbidden: false,
        };
        create_token_lookups(&mut parser);
        parser
    }

    /// Parses every top-level statement up to the end of input, splicing in
    /// imported libraries where they are first imported.
    #[tracing::instrument(skip_all)]
    pub fn parse(&mut self) -> Result<Vec<AstNode>, Error> {
        let mut result = Vec::new();
        self.parse_into(&mut result)?;
        debug!(statements = result.len(), "parsed");
        Ok(result)
    }

    pub(crate) fn parse_into(&mut self, result: &mut Vec<AstNode>) -> Result<(), Error> {
        while self.current_token_kind() != TokenKind::EndOfInput {
            if self.current_token_kind() == TokenKind::Import {
                parse_import(self, result)?;
            } else {
                let statement = parse_stmt(self)?;
                trace!(?statement, "parsed");
                result.push(statement);
            }
        }

        Ok(())
    }

    pub fn lexer(&self) -> &S {
        &self.lexer
    }

    /// Makes `lexer` the active token source and returns the previous one.
    pub(crate) fn swap_lexer(&mut self, lexer: S) -> S {
        mem::replace(&mut self.lexer, lexer)
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.lexer.token()
    }

    pub fn get_position(&self) -> Position {
        self.lexer.location()
    }

    pub fn advance(&mut self) {
        self.lexer.next_token();
    }

    /// Describes the current token for diagnostics, including identifier
    /// text and numeric values.
    pub fn what_we_got(&self) -> String {
        let kind = self.current_token_kind();
        match kind {
            TokenKind::Identifier => format!("{} \"{}\"", kind, self.lexer.identifier()),
            TokenKind::IntLiteral | TokenKind::RealLiteral => match self.lexer.numeric_literal() {
                Ok(value) => format!("{} {}", kind, value),
                Err(_) => format!("{} {}", kind, self.lexer.identifier()),
            },
            _ => kind.to_string(),
        }
    }

    /// Builds an "expected X, got Y instead" error at the current token.
    pub fn unexpected(&self, expected: impl Into<String>) -> Error {
        Error::new(
            ErrorImpl::UnexpectedToken {
                expected: expected.into(),
                found: self.what_we_got(),
            },
            self.get_position(),
        )
    }

    /// Builds an error of the given kind at the current token.
    pub fn error(&self, error_impl: ErrorImpl) -> Error {
        Error::new(error_impl, self.get_position())
    }

    /// Consumes a token of the expected kind or fails.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<(), Error> {
        if self.current_token_kind() != expected_kind {
            return Err(self.unexpected(expected_kind.to_string()));
        }

        self.advance();
        Ok(())
    }

    /// Consumes an identifier and returns its text. `description` names what
    /// the identifier is for, such as "class name".
    pub fn expect_identifier(&mut self, description: &str) -> Result<String, Error> {
        if self.current_token_kind() != TokenKind::Identifier {
            return Err(self.unexpected(description));
        }

        let identifier = self.lexer.identifier().to_string();
        self.advance();
        Ok(identifier)
    }

    /// Consumes a string literal and returns its contents.
    pub fn expect_string_literal(&mut self) -> Result<String, Error> {
        if self.current_token_kind() != TokenKind::StringLiteral {
            return Err(self.unexpected(TokenKind::StringLiteral.to_string()));
        }

        let value = self.lexer.identifier().to_string();
        self.advance();
        Ok(value)
    }

    /// `break`, `continue` and `return` must end their block.
    pub fn check_for_unreachable_statements(&self) -> Result<(), Error> {
        if self.current_token_kind() != TokenKind::CloseBrace {
            return Err(self.error(ErrorImpl::UnreachableStatement));
        }

        Ok(())
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup<S> {
        &self.stmt_lookup
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler<S>) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    pub fn library_path(&self) -> &[PathBuf] {
        &self.library_path
    }

    /// Records `library` as imported. Returns false if it already was.
    pub fn mark_imported(&mut self, library: &str) -> bool {
        self.imported_libraries.insert(library.to_string())
    }

    pub fn is_imported(&self, library: &str) -> bool {
        self.imported_libraries.contains(library)
    }

    pub fn is_access_forbidden(&self) -> bool {
        self.access_forbidden
    }

    /// Sets whether indexing and method calls are currently rejected and
    /// returns the previous setting.
    pub(crate) fn set_access_forbidden(&mut self, forbidden: bool) -> bool {
        mem::replace(&mut self.access_forbidden, forbidden)
    }
}

/// Parses a token vector into the top-level statements of a program.
///
/// # Arguments
///
/// * `tokens` - Output of `tokenize`
/// * `library_path` - Directories searched for `import`ed libraries
pub fn parse(tokens: Vec<Token>, library_path: Vec<PathBuf>) -> Result<Vec<AstNode>, Error> {
    let mut parser = Parser::new(TokenStream::new(tokens), library_path);
    parser.parse()
}

/// Tokenizes and parses Talc source text.
pub fn parse_source(source: &str, file: &str, library_path: Vec<PathBuf>) -> Result<Vec<AstNode>, Error> {
    let mut parser = Parser::new(TokenStream::from_source(source, file)?, library_path);
    parser.parse()
}
