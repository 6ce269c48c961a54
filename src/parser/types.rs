//! Type annotation parsing.
//!
//! ```text
//! TYPE = void | identifier | identifier "<" TYPE ("," TYPE)? ">"
//! ```
//!
//! The same grammar serves return, field, parameter and variable types and the
//! operand of `new`.

use tracing::trace;

use crate::{
    ast::types::TalcTypeDescriptor,
    errors::errors::Error,
    lexer::{source::TokenSource, tokens::TokenKind},
};

use super::parser::Parser;

pub fn parse_type<S: TokenSource>(parser: &mut Parser<S>) -> Result<TalcTypeDescriptor, Error> {
    trace!("parse_type");

    match parser.current_token_kind() {
        TokenKind::Void => {
            parser.advance();
            Ok(TalcTypeDescriptor::void())
        }
        TokenKind::Identifier => {
            let name = parser.expect_identifier("type")?;
            if parser.current_token_kind() != TokenKind::Lt {
                return Ok(TalcTypeDescriptor::simple(name));
            }

            parser.expect(TokenKind::Lt)?;
            let first = parse_type(parser)?;
            let second = if parser.current_token_kind() == TokenKind::Comma {
                parser.advance();
                Some(parse_type(parser)?)
            } else {
                None
            };
            parser.expect(TokenKind::Gt)?;

            Ok(TalcTypeDescriptor::parameterized(name, first, second))
        }
        _ => Err(parser.unexpected("type")),
    }
}
