use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::{ast::AstNode, expressions::Operator},
    errors::errors::Error,
    lexer::{source::TokenSource, tokens::TokenKind},
};

use super::{decl::*, parser::Parser, stmt::*};

/// Operator precedence, 0 (assignment) to 13 (`**`).
///
/// ```text
///  0: = += -= *= /= %= **= &= |= ^= <<= >>=
///  1: ?: (reserved)
///  2: ||
///  3: &&
///  4: |
///  5: ^
///  6: &
///  7: == !=
///  8: > >= < <=
///  9: << >>
/// 10: + -
/// 11: * / %
/// 12: unary - ! ~ ++ --
/// 13: **
/// ```
pub type Precedence = u8;

pub const UNARY_PRECEDENCE: Precedence = 12;

lazy_static! {
    pub static ref BINARY_PRECEDENCE_LOOKUP: HashMap<TokenKind, Precedence> = {
        let mut map = HashMap::new();
        for kind in [
            TokenKind::Assign,
            TokenKind::PlusAssign,
            TokenKind::SubAssign,
            TokenKind::MulAssign,
            TokenKind::PowAssign,
            TokenKind::DivAssign,
            TokenKind::ModAssign,
            TokenKind::ShlAssign,
            TokenKind::ShrAssign,
            TokenKind::AndAssign,
            TokenKind::OrAssign,
            TokenKind::XorAssign,
        ] {
            map.insert(kind, 0);
        }
        map.insert(TokenKind::LOr, 2);
        map.insert(TokenKind::LAnd, 3);
        map.insert(TokenKind::BOr, 4);
        map.insert(TokenKind::BXor, 5);
        map.insert(TokenKind::BAnd, 6);
        map.insert(TokenKind::Eq, 7);
        map.insert(TokenKind::Ne, 7);
        map.insert(TokenKind::Gt, 8);
        map.insert(TokenKind::Ge, 8);
        map.insert(TokenKind::Lt, 8);
        map.insert(TokenKind::Le, 8);
        map.insert(TokenKind::Shl, 9);
        map.insert(TokenKind::Shr, 9);
        map.insert(TokenKind::Plus, 10);
        map.insert(TokenKind::Minus, 10);
        map.insert(TokenKind::Mul, 11);
        map.insert(TokenKind::Div, 11);
        map.insert(TokenKind::Mod, 11);
        map.insert(TokenKind::Pow, 13);
        map
    };
}

pub fn is_binary_operator(kind: TokenKind) -> bool {
    BINARY_PRECEDENCE_LOOKUP.contains_key(&kind)
}

pub fn binary_operator_precedence(kind: TokenKind) -> Option<Precedence> {
    BINARY_PRECEDENCE_LOOKUP.get(&kind).copied()
}

/// Everything but assignment and `**` is left-associative.
pub fn is_right_associative(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Pow
            | TokenKind::Assign
            | TokenKind::PlusAssign
            | TokenKind::SubAssign
            | TokenKind::MulAssign
            | TokenKind::PowAssign
            | TokenKind::DivAssign
            | TokenKind::ModAssign
            | TokenKind::ShlAssign
            | TokenKind::ShrAssign
            | TokenKind::AndAssign
            | TokenKind::OrAssign
            | TokenKind::XorAssign
    )
}

pub fn unary_operator_precedence(operator: Operator) -> Option<Precedence> {
    if operator.is_unary() {
        Some(UNARY_PRECEDENCE)
    } else {
        None
    }
}

// The unary, prefix and postfix sets overlap but differ: `~` is unary yet
// neither prefix nor postfix, so it is not accepted in operand position.

pub fn is_unary_operator(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::BNot | TokenKind::Minus | TokenKind::MinusMinus | TokenKind::Pling | TokenKind::PlusPlus
    )
}

pub fn is_prefix_operator(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Minus | TokenKind::MinusMinus | TokenKind::Pling | TokenKind::PlusPlus
    )
}

pub fn is_postfix_operator(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::MinusMinus | TokenKind::Pling | TokenKind::PlusPlus)
}

pub fn to_prefix_operator(kind: TokenKind) -> Option<Operator> {
    match kind {
        TokenKind::Minus => Some(Operator::Neg),
        TokenKind::MinusMinus => Some(Operator::PreDecrement),
        TokenKind::Pling => Some(Operator::LNot),
        TokenKind::PlusPlus => Some(Operator::PreIncrement),
        _ => None,
    }
}

pub fn to_postfix_operator(kind: TokenKind) -> Option<Operator> {
    match kind {
        TokenKind::MinusMinus => Some(Operator::PostDecrement),
        TokenKind::Pling => Some(Operator::Factorial),
        TokenKind::PlusPlus => Some(Operator::PostIncrement),
        _ => None,
    }
}

/// Maps a binary operator token to its operator; `-` becomes subtraction.
pub fn to_binary_operator(kind: TokenKind) -> Option<Operator> {
    let operator = match kind {
        TokenKind::Assign => Operator::Assign,
        TokenKind::PlusAssign => Operator::PlusAssign,
        TokenKind::SubAssign => Operator::SubAssign,
        TokenKind::MulAssign => Operator::MulAssign,
        TokenKind::PowAssign => Operator::PowAssign,
        TokenKind::DivAssign => Operator::DivAssign,
        TokenKind::ModAssign => Operator::ModAssign,
        TokenKind::ShlAssign => Operator::ShlAssign,
        TokenKind::ShrAssign => Operator::ShrAssign,
        TokenKind::AndAssign => Operator::AndAssign,
        TokenKind::OrAssign => Operator::OrAssign,
        TokenKind::XorAssign => Operator::XorAssign,
        TokenKind::LOr => Operator::LOr,
        TokenKind::LAnd => Operator::LAnd,
        TokenKind::BOr => Operator::BOr,
        TokenKind::BXor => Operator::BXor,
        TokenKind::BAnd => Operator::BAnd,
        TokenKind::Eq => Operator::Eq,
        TokenKind::Ne => Operator::Ne,
        TokenKind::Gt => Operator::Gt,
        TokenKind::Ge => Operator::Ge,
        TokenKind::Lt => Operator::Lt,
        TokenKind::Le => Operator::Le,
        TokenKind::Shl => Operator::Shl,
        TokenKind::Shr => Operator::Shr,
        TokenKind::Plus => Operator::Plus,
        TokenKind::Minus => Operator::Sub,
        TokenKind::Mul => Operator::Mul,
        TokenKind::Div => Operator::Div,
        TokenKind::Mod => Operator::Mod,
        TokenKind::Pow => Operator::Pow,
        _ => return None,
    };
    Some(operator)
}

pub type StmtHandler<S> = fn(&mut Parser<S>) -> Result<AstNode, Error>;

// Lookup table inside parser struct, so it's easier
pub type StmtLookup<S> = HashMap<TokenKind, StmtHandler<S>>;

pub fn create_token_lookups<S: TokenSource>(parser: &mut Parser<S>) {
    parser.stmt(TokenKind::Assert, parse_assert_stmt);
    parser.stmt(TokenKind::Break, parse_break_stmt);
    parser.stmt(TokenKind::Class, parse_class_stmt);
    parser.stmt(TokenKind::Continue, parse_continue_stmt);
    parser.stmt(TokenKind::Do, parse_do_stmt);
    parser.stmt(TokenKind::Extern, parse_extern_function_stmt);
    parser.stmt(TokenKind::If, parse_if_stmt);
    parser.stmt(TokenKind::Import, parse_misplaced_import_stmt);
    parser.stmt(TokenKind::For, parse_for_stmt);
    parser.stmt(TokenKind::Function, parse_function_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);
    parser.stmt(TokenKind::While, parse_while_stmt);
    // A new block may be opened anywhere a statement is expected.
    parser.stmt(TokenKind::OpenBrace, parse_block_stmt);
    parser.stmt(TokenKind::Semicolon, parse_empty_stmt);
}
