//! The parser's view of the lexer.
//!
//! The parser only ever looks at the current token and moves forward one
//! token at a time; `TokenSource` is exactly that interface. `TokenStream`
//! is the in-crate implementation over a pre-tokenized file.

use std::{fs, io, path::Path};

use thiserror::Error;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::{
    lexer::tokenize,
    tokens::{NumericLiteral, Token, TokenKind},
};

/// Why a token source could not be opened over a file.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Lex(#[from] Error),
}

pub trait TokenSource {
    /// Kind of the current token.
    fn token(&self) -> TokenKind;
    /// Text of the current identifier or string literal.
    fn identifier(&self) -> &str;
    /// Value of the current int or real literal.
    fn numeric_literal(&self) -> Result<NumericLiteral, Error>;
    /// Location of the current token.
    fn location(&self) -> Position;
    /// Consumes the current token.
    fn next_token(&mut self);
    /// Opens a fresh token source over the file at `path`.
    fn open(path: &Path) -> Result<Self, SourceError>
    where
        Self: Sized;
}

#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenStream {
    /// Wraps the output of `tokenize`. A missing trailing `EndOfInput` is
    /// added so the stream always has a current token.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EndOfInput) {
            let position = tokens
                .last()
                .map(|token| token.position.clone())
                .unwrap_or_else(Position::synthetic);
            tokens.push(Token {
                kind: TokenKind::EndOfInput,
                value: String::new(),
                position,
            });
        }

        TokenStream { tokens, pos: 0 }
    }

    pub fn from_source(source: &str, file: &str) -> Result<Self, Error> {
        Ok(TokenStream::new(tokenize(source.to_string(), Some(file.to_string()))?))
    }

    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }
}

impl TokenSource for TokenStream {
    fn token(&self) -> TokenKind {
        self.current_token().kind
    }

    fn identifier(&self) -> &str {
        &self.current_token().value
    }

    fn numeric_literal(&self) -> Result<NumericLiteral, Error> {
        let token = self.current_token();
        let error = || {
            Error::new(
                ErrorImpl::NumberParseError { token: token.value.clone() },
                token.position.clone(),
            )
        };

        match token.kind {
            TokenKind::IntLiteral => {
                let text = token.value.as_str();
                let value = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
                    Some(hex) => i64::from_str_radix(hex, 16),
                    None => text.parse(),
                };
                value.map(NumericLiteral::Int).map_err(|_| error())
            }
            TokenKind::RealLiteral => token.value.parse().map(NumericLiteral::Real).map_err(|_| error()),
            _ => Err(error()),
        }
    }

    fn location(&self) -> Position {
        self.current_token().position.clone()
    }

    fn next_token(&mut self) {
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
    }

    fn open(path: &Path) -> Result<Self, SourceError> {
        // The file is read whole and closed before tokenizing.
        let source = fs::read_to_string(path)?;
        let file = path.to_string_lossy().into_owned();
        Ok(TokenStream::new(tokenize(source, Some(file))?))
    }
}
