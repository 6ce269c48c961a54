//! Expression parsing by precedence climbing.
//!
//! `parse_expr` parses a primary and then folds in binary operators whose
//! precedence is at least the requested minimum, recursing for the right-hand
//! side with the same minimum for right-associative operators and one more for
//! left-associative ones. Precedences live in `lookups`.

use tracing::trace;

use crate::{
    ast::{
        ast::AstNode,
        expressions::{
            BinaryOperator, Constant, ConstantValue, FunctionCall, ListLiteral, MapLiteral, VariableName,
            GET_ITEM, SET_ITEM,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::{
        source::TokenSource,
        tokens::{NumericLiteral, TokenKind},
    },
};

use super::{
    decl::parse_variable_definition,
    lookups::{
        binary_operator_precedence, is_postfix_operator, is_prefix_operator, is_right_associative,
        is_unary_operator, to_binary_operator, to_postfix_operator, to_prefix_operator,
        unary_operator_precedence, Precedence, UNARY_PRECEDENCE,
    },
    parser::Parser,
    types::parse_type,
};

/// Parses a full expression, starting again from the lowest precedence.
///
/// Used wherever a nested expression is delimited by brackets or separators,
/// so any restriction on indexing from an enclosing index assignment is lifted.
pub fn parse_expression<S: TokenSource>(parser: &mut Parser<S>) -> Result<AstNode, Error> {
    let previous = parser.set_access_forbidden(false);
    let result = parse_expr(parser, 0);
    parser.set_access_forbidden(previous);
    result
}

pub fn parse_expr<S: TokenSource>(parser: &mut Parser<S>, min_precedence: Precedence) -> Result<AstNode, Error> {
    trace!(min_precedence, "parse_expr");

    let mut left = parse_primary(parser)?;

    loop {
        let kind = parser.current_token_kind();
        let (Some(precedence), Some(operator)) = (binary_operator_precedence(kind), to_binary_operator(kind)) else {
            break;
        };
        if precedence < min_precedence {
            break;
        }

        let position = parser.get_position();
        parser.advance();

        let next_min_precedence = if is_right_associative(kind) {
            precedence
        } else {
            precedence + 1
        };
        let right = parse_expr(parser, next_min_precedence)?;

        left = AstNode::BinaryOperator(BinaryOperator::binary(position, operator, left, right));
    }

    Ok(left)
}

fn parse_prefix_expr<S: TokenSource>(parser: &mut Parser<S>) -> Result<AstNode, Error> {
    trace!("parse_prefix_expr");

    let position = parser.get_position();
    let kind = parser.current_token_kind();
    let Some(operator) = to_prefix_operator(kind) else {
        return Err(parser.error(ErrorImpl::UnexpectedInFactor {
            found: kind.to_string(),
        }));
    };
    parser.advance();

    let precedence = unary_operator_precedence(operator).unwrap_or(UNARY_PRECEDENCE);
    let operand = parse_expr(parser, precedence)?;

    Ok(AstNode::BinaryOperator(BinaryOperator::unary(position, operator, operand)))
}

pub fn parse_primary<S: TokenSource>(parser: &mut Parser<S>) -> Result<AstNode, Error> {
    trace!("parse_primary");

    let kind = parser.current_token_kind();
    if is_unary_operator(kind) && is_prefix_operator(kind) {
        return parse_prefix_expr(parser);
    }

    let position = parser.get_position();
    let mut primary = match kind {
        TokenKind::OpenParenthesis => {
            parser.advance();
            let expression = parse_expression(parser)?;
            parser.expect(TokenKind::CloseParenthesis)?;
            expression
        }
        TokenKind::IntLiteral | TokenKind::RealLiteral => {
            let value = match parser.lexer().numeric_literal()? {
                NumericLiteral::Int(value) => ConstantValue::Int(value),
                NumericLiteral::Real(value) => ConstantValue::Real(value),
            };
            parser.advance();
            AstNode::Constant(Constant { value, position: position.clone() })
        }
        TokenKind::True | TokenKind::False => {
            parser.advance();
            AstNode::Constant(Constant {
                value: ConstantValue::Bool(kind == TokenKind::True),
                position: position.clone(),
            })
        }
        TokenKind::Null => {
            parser.advance();
            AstNode::Constant(Constant {
                value: ConstantValue::Null,
                position: position.clone(),
            })
        }
        TokenKind::StringLiteral => {
            let value = parser.expect_string_literal()?;
            AstNode::Constant(Constant {
                value: ConstantValue::Str(value),
                position: position.clone(),
            })
        }
        TokenKind::OpenBracket => parse_list_or_map_literal(parser)?,
        TokenKind::New => {
            parser.advance();
            let type_descriptor = parse_type(parser)?;
            let context = format!("arguments to call of \"{}\" constructor", type_descriptor);
            let arguments = parse_expression_list(
                parser,
                TokenKind::OpenParenthesis,
                TokenKind::CloseParenthesis,
                &context,
            )?;
            AstNode::FunctionCall(FunctionCall::constructor(position.clone(), type_descriptor, arguments))
        }
        TokenKind::Identifier => {
            let name = parser.expect_identifier("identifier")?;
            match parser.current_token_kind() {
                TokenKind::Colon => AstNode::VariableDefinition(parse_variable_definition(
                    parser,
                    position.clone(),
                    name,
                )?),
                TokenKind::OpenParenthesis => {
                    let context = format!("arguments to call of function \"{}\"", name);
                    let arguments = parse_expression_list(
                        parser,
                        TokenKind::OpenParenthesis,
                        TokenKind::CloseParenthesis,
                        &context,
                    )?;
                    AstNode::FunctionCall(FunctionCall::function(position.clone(), name, arguments))
                }
                _ => AstNode::VariableName(VariableName {
                    name,
                    position: position.clone(),
                }),
            }
        }
        _ => {
            return Err(parser.error(ErrorImpl::UnexpectedInFactor {
                found: kind.to_string(),
            }))
        }
    };

    // Postfix operators apply to the primary and take its position.
    loop {
        let kind = parser.current_token_kind();
        if !(is_unary_operator(kind) && is_postfix_operator(kind)) {
            break;
        }
        let Some(operator) = to_postfix_operator(kind) else {
            break;
        };

        primary = AstNode::BinaryOperator(BinaryOperator::unary(position.clone(), operator, primary));
        parser.advance();
    }

    while matches!(parser.current_token_kind(), TokenKind::Dot | TokenKind::OpenBracket) {
        if parser.is_access_forbidden() {
            return Err(parser.error(ErrorImpl::AccessAfterIndexAssignment));
        }

        if parser.current_token_kind() == TokenKind::Dot {
            parser.advance();
            let name = parser.expect_identifier("method name")?;
            let context = format!("arguments to call of method \"{}\"", name);
            let arguments = parse_expression_list(
                parser,
                TokenKind::OpenParenthesis,
                TokenKind::CloseParenthesis,
                &context,
            )?;
            primary = AstNode::FunctionCall(FunctionCall::method(position.clone(), name, primary, arguments));
            continue;
        }

        parser.expect(TokenKind::OpenBracket)?;
        let index = parse_expression(parser)?;
        parser.expect(TokenKind::CloseBracket)?;

        if parser.current_token_kind() != TokenKind::Assign {
            primary = AstNode::FunctionCall(FunctionCall::method(position.clone(), GET_ITEM, primary, vec![index]));
            continue;
        }

        // The assigned value may not itself be indexed or have methods called
        // on it, and nothing may follow the assignment in this chain.
        parser.advance();
        let previous = parser.set_access_forbidden(true);
        let value = parse_expr(parser, 0);
        parser.set_access_forbidden(previous);

        primary = AstNode::FunctionCall(FunctionCall::method(
            position.clone(),
            SET_ITEM,
            primary,
            vec![index, value?],
        ));
        break;
    }

    Ok(primary)
}

/// Parses `start expression, ... end` for argument lists.
///
/// `context` names the call in the error for a bad separator, such as
/// `arguments to call of function "f"`.
pub fn parse_expression_list<S: TokenSource>(
    parser: &mut Parser<S>,
    start: TokenKind,
    end: TokenKind,
    context: &str,
) -> Result<Vec<AstNode>, Error> {
    trace!(context, "parse_expression_list");

    parser.expect(start)?;

    let mut expressions = Vec::new();
    if parser.current_token_kind() != end {
        loop {
            expressions.push(parse_expression(parser)?);

            let kind = parser.current_token_kind();
            if kind == TokenKind::Comma {
                parser.advance();
            } else if kind == end {
                break;
            } else {
                return Err(parser.error(ErrorImpl::MalformedArgumentList {
                    end: end.to_string(),
                    context: context.to_string(),
                    found: parser.what_we_got(),
                }));
            }
        }
    }

    parser.expect(end)?;

    Ok(expressions)
}

/// `[ a, b, ... ]` or `[ k : v, ... ]`, with `[:]` as the empty map.
///
/// The first element decides: a `:` after it makes the whole literal a map.
pub fn parse_list_or_map_literal<S: TokenSource>(parser: &mut Parser<S>) -> Result<AstNode, Error> {
    trace!("parse_list_or_map_literal");

    let position = parser.get_position();
    parser.expect(TokenKind::OpenBracket)?;

    if parser.current_token_kind() == TokenKind::Colon {
        parser.advance();
        parser.expect(TokenKind::CloseBracket)?;
        return Ok(AstNode::MapLiteral(MapLiteral {
            entries: Vec::new(),
            position,
        }));
    }

    let mut elements = Vec::new();
    let mut entries = Vec::new();
    let mut is_map = false;

    if parser.current_token_kind() != TokenKind::CloseBracket {
        loop {
            let expression = parse_expression(parser)?;

            let first = elements.is_empty() && entries.is_empty();
            if is_map || (first && parser.current_token_kind() == TokenKind::Colon) {
                if parser.current_token_kind() != TokenKind::Colon {
                    return Err(malformed_literal(parser, "map"));
                }
                is_map = true;
                parser.advance();
                let value = parse_expression(parser)?;
                entries.push((expression, value));
            } else {
                elements.push(expression);
            }

            match parser.current_token_kind() {
                TokenKind::Comma => parser.advance(),
                TokenKind::CloseBracket => break,
                _ => return Err(malformed_literal(parser, if is_map { "map" } else { "list" })),
            }
        }
    }

    parser.expect(TokenKind::CloseBracket)?;

    if is_map {
        Ok(AstNode::MapLiteral(MapLiteral { entries, position }))
    } else {
        Ok(AstNode::ListLiteral(ListLiteral { elements, position }))
    }
}

fn malformed_literal<S: TokenSource>(parser: &Parser<S>, kind: &'static str) -> Error {
    parser.error(ErrorImpl::MalformedLiteral {
        kind,
        found: parser.what_we_got(),
    })
}
