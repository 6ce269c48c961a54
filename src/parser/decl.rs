//! Classes, functions, extern functions and variable definitions.

use tracing::trace;

use crate::{
    ast::{
        ast::AstNode,
        statements::{ClassDefinition, ExternBinding, FunctionDefinition, VariableDefinition},
        types::TalcTypeDescriptor,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::{source::TokenSource, tokens::TokenKind},
    Position,
};

use super::{expr::parse_expression, parser::Parser, stmt::parse_block, types::parse_type};

pub fn parse_class_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<AstNode, Error> {
    trace!("parse_class_stmt");

    let position = parser.get_position();
    parser.expect(TokenKind::Class)?;
    let name = parser.expect_identifier("class name")?;
    parser.expect(TokenKind::OpenBrace)?;

    let mut fields = Vec::new();
    let mut methods = Vec::new();
    loop {
        match parser.current_token_kind() {
            TokenKind::Function => methods.push(parse_function_definition(parser)?),
            TokenKind::Identifier => {
                let field_position = parser.get_position();
                let field_name = parser.expect_identifier("field name")?;
                fields.push(parse_variable_definition(parser, field_position, field_name)?);
                parser.expect(TokenKind::Semicolon)?;
            }
            _ => break,
        }
    }

    parser.expect(TokenKind::CloseBrace)?;

    Ok(AstNode::ClassDefinition(ClassDefinition {
        name,
        fields,
        methods,
        position,
    }))
}

pub fn parse_function_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<AstNode, Error> {
    Ok(AstNode::FunctionDefinition(parse_function_definition(parser)?))
}

/// `function <return-type> [<name>] ( <formals> ) <block>`
///
/// With no name the function is a constructor, named after its return type.
pub fn parse_function_definition<S: TokenSource>(
    parser: &mut Parser<S>,
) -> Result<FunctionDefinition, Error> {
    trace!("parse_function_definition");

    let position = parser.get_position();
    parser.expect(TokenKind::Function)?;

    let return_type = parse_type(parser)?;
    let name = parse_function_name(parser, &return_type, "function name")?;
    let formal_parameters =
        parse_formal_parameters(parser, TokenKind::OpenParenthesis, TokenKind::CloseParenthesis)?;
    let body = parse_block(parser)?;

    Ok(FunctionDefinition::new(
        position,
        name,
        formal_parameters,
        return_type,
        Some(body),
        None,
    ))
}

/// `extern "<language>" function <return-type> [<name>] ( <formals> ) = "<descriptor>" ;`
pub fn parse_extern_function_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<AstNode, Error> {
    trace!("parse_extern_function_stmt");

    let position = parser.get_position();
    parser.expect(TokenKind::Extern)?;
    let language = parser.expect_string_literal()?;
    parser.expect(TokenKind::Function)?;

    let return_type = parse_type(parser)?;
    let name = parse_function_name(parser, &return_type, "extern function name")?;
    let formal_parameters =
        parse_formal_parameters(parser, TokenKind::OpenParenthesis, TokenKind::CloseParenthesis)?;

    parser.expect(TokenKind::Assign)?;
    let descriptor = parser.expect_string_literal()?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(AstNode::FunctionDefinition(FunctionDefinition::new(
        position,
        name,
        formal_parameters,
        return_type,
        None,
        Some(ExternBinding { language, descriptor }),
    )))
}

fn parse_function_name<S: TokenSource>(
    parser: &mut Parser<S>,
    return_type: &TalcTypeDescriptor,
    description: &str,
) -> Result<String, Error> {
    if parser.current_token_kind() == TokenKind::OpenParenthesis {
        return Ok(return_type.to_string());
    }

    parser.expect_identifier(description)
}

/// Parses `( a, b : int, c : string )`. Names collect until a `:`, and the
/// type after it applies to every name in that group.
pub fn parse_formal_parameters<S: TokenSource>(
    parser: &mut Parser<S>,
    start: TokenKind,
    end: TokenKind,
) -> Result<Vec<(String, TalcTypeDescriptor)>, Error> {
    trace!("parse_formal_parameters");

    parser.expect(start)?;

    let mut parameters = Vec::new();
    while parser.current_token_kind() != end {
        let mut names = Vec::new();
        loop {
            names.push(parser.expect_identifier("formal parameter name")?);
            if parser.current_token_kind() != TokenKind::Comma {
                break;
            }
            parser.advance();
        }

        parser.expect(TokenKind::Colon)?;
        let type_descriptor = parse_type(parser)?;
        parameters.extend(names.into_iter().map(|name| (name, type_descriptor.clone())));

        if parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
        } else if parser.current_token_kind() != end {
            return Err(parser.error(ErrorImpl::MalformedParameterList {
                end: end.to_string(),
                found: parser.what_we_got(),
            }));
        }
    }

    parser.expect(end)?;

    Ok(parameters)
}

/// `<name> : [final] [<type>] [= <initializer>]`, entered with the name
/// already consumed and the current token at the `:`.
///
/// The type may only be left out when an initializer follows.
pub fn parse_variable_definition<S: TokenSource>(
    parser: &mut Parser<S>,
    position: Position,
    name: String,
) -> Result<VariableDefinition, Error> {
    trace!("parse_variable_definition");

    parser.expect(TokenKind::Colon)?;

    let is_final = parser.current_token_kind() == TokenKind::Final;
    if is_final {
        parser.advance();
    }

    let type_descriptor = if parser.current_token_kind() != TokenKind::Assign {
        Some(parse_type(parser)?)
    } else {
        None
    };

    let initializer = if parser.current_token_kind() == TokenKind::Assign {
        parser.advance();
        Some(Box::new(parse_expression(parser)?))
    } else {
        None
    };

    Ok(VariableDefinition {
        name,
        type_descriptor,
        initializer,
        is_final,
        position,
    })
}
