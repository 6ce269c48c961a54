use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("assert", TokenKind::Assert);
        map.insert("break", TokenKind::Break);
        map.insert("class", TokenKind::Class);
        map.insert("continue", TokenKind::Continue);
        map.insert("do", TokenKind::Do);
        map.insert("else", TokenKind::Else);
        map.insert("extern", TokenKind::Extern);
        map.insert("false", TokenKind::False);
        map.insert("final", TokenKind::Final);
        map.insert("for", TokenKind::For);
        map.insert("function", TokenKind::Function);
        map.insert("if", TokenKind::If);
        map.insert("import", TokenKind::Import);
        map.insert("in", TokenKind::In);
        map.insert("new", TokenKind::New);
        map.insert("null", TokenKind::Null);
        map.insert("return", TokenKind::Return);
        map.insert("true", TokenKind::True);
        map.insert("void", TokenKind::Void);
        map.insert("while", TokenKind::While);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EndOfInput,
    IntLiteral,
    RealLiteral,
    StringLiteral,
    Identifier,

    OpenBracket,
    CloseBracket,
    OpenBrace,
    CloseBrace,
    OpenParenthesis,
    CloseParenthesis,

    Dot,
    Semicolon,
    Colon,
    Comma,

    Assign,    // =
    PlusAssign,
    SubAssign,
    MulAssign,
    PowAssign,
    DivAssign,
    ModAssign,
    ShlAssign,
    ShrAssign,
    AndAssign,
    OrAssign,
    XorAssign,

    LOr,  // ||
    LAnd, // &&
    BOr,  // |
    BXor, // ^
    BAnd, // &
    BNot, // ~
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
    Shl,
    Shr,

    Plus,
    Minus,
    Mul,
    Div,
    Mod,
    Pow, // **

    PlusPlus,
    MinusMinus,
    Pling, // !

    // Reserved
    Assert,
    Break,
    Class,
    Continue,
    Do,
    Else,
    Extern,
    False,
    Final,
    For,
    Function,
    If,
    Import,
    In,
    New,
    Null,
    Return,
    True,
    Void,
    While,
}

impl TokenKind {
    /// Source spelling for fixed tokens, `None` for tokens with a payload.
    pub fn symbol(&self) -> Option<&'static str> {
        let symbol = match self {
            TokenKind::EndOfInput
            | TokenKind::IntLiteral
            | TokenKind::RealLiteral
            | TokenKind::StringLiteral
            | TokenKind::Identifier => return None,
            TokenKind::OpenBracket => "[",
            TokenKind::CloseBracket => "]",
            TokenKind::OpenBrace => "{",
            TokenKind::CloseBrace => "}",
            TokenKind::OpenParenthesis => "(",
            TokenKind::CloseParenthesis => ")",
            TokenKind::Dot => ".",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::Comma => ",",
            TokenKind::Assign => "=",
            TokenKind::PlusAssign => "+=",
            TokenKind::SubAssign => "-=",
            TokenKind::MulAssign => "*=",
            TokenKind::PowAssign => "**=",
            TokenKind::DivAssign => "/=",
            TokenKind::ModAssign => "%=",
            TokenKind::ShlAssign => "<<=",
            TokenKind::ShrAssign => ">>=",
            TokenKind::AndAssign => "&=",
            TokenKind::OrAssign => "|=",
            TokenKind::XorAssign => "^=",
            TokenKind::LOr => "||",
            TokenKind::LAnd => "&&",
            TokenKind::BOr => "|",
            TokenKind::BXor => "^",
            TokenKind::BAnd => "&",
            TokenKind::BNot => "~",
            TokenKind::Eq => "==",
            TokenKind::Ne => "!=",
            TokenKind::Gt => ">",
            TokenKind::Ge => ">=",
            TokenKind::Lt => "<",
            TokenKind::Le => "<=",
            TokenKind::Shl => "<<",
            TokenKind::Shr => ">>",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Mul => "*",
            TokenKind::Div => "/",
            TokenKind::Mod => "%",
            TokenKind::Pow => "**",
            TokenKind::PlusPlus => "++",
            TokenKind::MinusMinus => "--",
            TokenKind::Pling => "!",
            TokenKind::Assert => "assert",
            TokenKind::Break => "break",
            TokenKind::Class => "class",
            TokenKind::Continue => "continue",
            TokenKind::Do => "do",
            TokenKind::Else => "else",
            TokenKind::Extern => "extern",
            TokenKind::False => "false",
            TokenKind::Final => "final",
            TokenKind::For => "for",
            TokenKind::Function => "function",
            TokenKind::If => "if",
            TokenKind::Import => "import",
            TokenKind::In => "in",
            TokenKind::New => "new",
            TokenKind::Null => "null",
            TokenKind::Return => "return",
            TokenKind::True => "true",
            TokenKind::Void => "void",
            TokenKind::While => "while",
        };
        Some(symbol)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::EndOfInput => write!(f, "end of input"),
            TokenKind::IntLiteral => write!(f, "int literal"),
            TokenKind::RealLiteral => write!(f, "real literal"),
            TokenKind::StringLiteral => write!(f, "string literal"),
            TokenKind::Identifier => write!(f, "identifier"),
            _ => write!(f, "\"{}\"", self.symbol().unwrap_or_default()),
        }
    }
}

/// The value of an int or real literal token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericLiteral {
    Int(i64),
    Real(f64),
}

impl Display for NumericLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumericLiteral::Int(value) => write!(f, "{}", value),
            NumericLiteral::Real(value) => write!(f, "{:?}", value),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    /// Identifier text, string literal contents (escapes resolved), numeric
    /// literal spelling, or the fixed spelling of any other token.
    pub value: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Identifier | TokenKind::StringLiteral => {
                write!(f, "{} \"{}\"", self.kind, self.value)
            }
            TokenKind::IntLiteral | TokenKind::RealLiteral => {
                write!(f, "{} {}", self.kind, self.value)
            }
            _ => write!(f, "{}", self.kind),
        }
    }
}
