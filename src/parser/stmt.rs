use tracing::trace;

use crate::{
    ast::{
        ast::AstNode,
        expressions::Constant,
        statements::{
            AssertStatement, Block, BreakStatement, ContinueStatement, DoStatement, ForEachStatement,
            ForStatement, IfStatement, ReturnStatement, VariableDefinition, WhileStatement,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::{source::TokenSource, tokens::TokenKind},
    Position,
};

use super::{decl::parse_variable_definition, expr::parse_expression, parser::Parser};

pub fn parse_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<AstNode, Error> {
    trace!("parse_stmt");

    let handler = parser.get_stmt_lookup().get(&parser.current_token_kind()).copied();
    if let Some(handler) = handler {
        return handler(parser);
    }

    let expression = parse_expression(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(expression)
}

pub fn parse_block<S: TokenSource>(parser: &mut Parser<S>) -> Result<Block, Error> {
    trace!("parse_block");

    let position = parser.get_position();
    parser.expect(TokenKind::OpenBrace)?;

    let mut body = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseBrace {
        body.push(parse_stmt(parser)?);
    }

    parser.expect(TokenKind::CloseBrace)?;

    Ok(Block { body, position })
}

pub fn parse_block_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<AstNode, Error> {
    Ok(AstNode::Block(parse_block(parser)?))
}

pub fn parse_empty_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<AstNode, Error> {
    Err(parser.error(ErrorImpl::EmptyStatement))
}

pub fn parse_misplaced_import_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<AstNode, Error> {
    Err(parser.error(ErrorImpl::ImportOutsideGlobalScope))
}

pub fn parse_assert_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<AstNode, Error> {
    trace!("parse_assert_stmt");

    let position = parser.get_position();
    parser.expect(TokenKind::Assert)?;

    let test_expression = parse_expression(parser)?;
    let explanatory_expression = if parser.current_token_kind() == TokenKind::Colon {
        parser.advance();
        Some(Box::new(parse_expression(parser)?))
    } else {
        None
    };

    parser.expect(TokenKind::Semicolon)?;

    Ok(AstNode::AssertStatement(AssertStatement {
        test_expression: Box::new(test_expression),
        explanatory_expression,
        position,
    }))
}

pub fn parse_break_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<AstNode, Error> {
    trace!("parse_break_stmt");

    let position = parser.get_position();
    parser.expect(TokenKind::Break)?;
    parser.expect(TokenKind::Semicolon)?;
    parser.check_for_unreachable_statements()?;

    Ok(AstNode::BreakStatement(BreakStatement { position }))
}

pub fn parse_continue_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<AstNode, Error> {
    trace!("parse_continue_stmt");

    let position = parser.get_position();
    parser.expect(TokenKind::Continue)?;
    parser.expect(TokenKind::Semicolon)?;
    parser.check_for_unreachable_statements()?;

    Ok(AstNode::ContinueStatement(ContinueStatement { position }))
}

pub fn parse_return_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<AstNode, Error> {
    trace!("parse_return_stmt");

    let position = parser.get_position();
    parser.expect(TokenKind::Return)?;

    let value = if parser.current_token_kind() != TokenKind::Semicolon {
        Some(Box::new(parse_expression(parser)?))
    } else {
        None
    };

    parser.expect(TokenKind::Semicolon)?;
    parser.check_for_unreachable_statements()?;

    Ok(AstNode::ReturnStatement(ReturnStatement { value, position }))
}

/// `( expression )`, as used by `if`, `while` and `do`.
fn parse_condition<S: TokenSource>(parser: &mut Parser<S>) -> Result<AstNode, Error> {
    parser.expect(TokenKind::OpenParenthesis)?;
    let condition = parse_expression(parser)?;
    parser.expect(TokenKind::CloseParenthesis)?;

    Ok(condition)
}

pub fn parse_if_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<AstNode, Error> {
    trace!("parse_if_stmt");

    let position = parser.get_position();
    parser.expect(TokenKind::If)?;

    let mut conditions = vec![parse_condition(parser)?];
    let mut blocks = vec![parse_block(parser)?];
    let mut else_block = None;

    while parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        if parser.current_token_kind() == TokenKind::If {
            parser.advance();
            conditions.push(parse_condition(parser)?);
            blocks.push(parse_block(parser)?);
        } else {
            else_block = Some(parse_block(parser)?);
            break;
        }
    }

    Ok(AstNode::IfStatement(IfStatement {
        conditions,
        blocks,
        else_block,
        position,
    }))
}

pub fn parse_for_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<AstNode, Error> {
    trace!("parse_for_stmt");

    let position = parser.get_position();
    parser.expect(TokenKind::For)?;
    parser.expect(TokenKind::OpenParenthesis)?;

    // Either a loop variable definition or the for-each variable list.
    let mut initializer = None;
    if parser.current_token_kind() == TokenKind::Identifier {
        let variable_position = parser.get_position();
        let variable_name = parser.expect_identifier("loop variable name")?;

        if matches!(parser.current_token_kind(), TokenKind::Comma | TokenKind::In) {
            return parse_for_each_stmt(parser, position, variable_name, variable_position);
        }

        initializer = Some(parse_variable_definition(parser, variable_position, variable_name)?);
    }
    parser.expect(TokenKind::Semicolon)?;

    // A missing condition or update is taken to be `true`.
    let condition = if parser.current_token_kind() == TokenKind::Semicolon {
        AstNode::Constant(Constant::synthetic_true())
    } else {
        parse_expression(parser)?
    };
    parser.expect(TokenKind::Semicolon)?;

    let update = if parser.current_token_kind() == TokenKind::CloseParenthesis {
        AstNode::Constant(Constant::synthetic_true())
    } else {
        parse_expression(parser)?
    };
    parser.expect(TokenKind::CloseParenthesis)?;

    let body = parse_block(parser)?;

    Ok(AstNode::ForStatement(ForStatement {
        initializer,
        condition: Box::new(condition),
        update: Box::new(update),
        body,
        position,
    }))
}

/// Continues a `for` once the first loop variable has been read and the
/// current token is `,` or `in`.
fn parse_for_each_stmt<S: TokenSource>(
    parser: &mut Parser<S>,
    position: Position,
    first_name: String,
    first_position: Position,
) -> Result<AstNode, Error> {
    trace!("parse_for_each_stmt");

    let mut loop_variables = vec![loop_variable(first_name, first_position)];

    if parser.current_token_kind() == TokenKind::Comma {
        parser.advance();
        let second_position = parser.get_position();
        let second_name = parser.expect_identifier("second loop variable name in for-each loop")?;
        loop_variables.push(loop_variable(second_name, second_position));
    }

    parser.expect(TokenKind::In)?;
    let expression = parse_expression(parser)?;
    parser.expect(TokenKind::CloseParenthesis)?;

    let body = parse_block(parser)?;

    Ok(AstNode::ForEachStatement(ForEachStatement {
        loop_variables,
        expression: Box::new(expression),
        body,
        position,
    }))
}

fn loop_variable(name: String, position: Position) -> VariableDefinition {
    VariableDefinition {
        name,
        type_descriptor: None,
        initializer: None,
        is_final: false,
        position,
    }
}

pub fn parse_while_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<AstNode, Error> {
    trace!("parse_while_stmt");

    let position = parser.get_position();
    parser.expect(TokenKind::While)?;

    let condition = parse_condition(parser)?;
    let body = parse_block(parser)?;

    Ok(AstNode::WhileStatement(WhileStatement {
        condition: Box::new(condition),
        body,
        position,
    }))
}

pub fn parse_do_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<AstNode, Error> {
    trace!("parse_do_stmt");

    let position = parser.get_position();
    parser.expect(TokenKind::Do)?;

    let body = parse_block(parser)?;
    parser.expect(TokenKind::While)?;
    let condition = parse_condition(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(AstNode::DoStatement(DoStatement {
        body,
        condition: Box::new(condition),
        position,
    }))
}
