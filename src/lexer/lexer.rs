use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, Position, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &Regex) -> Result<(), Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Order matters: longer spellings must come before their prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"\A[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new(r"\A([0-9]+(\.[0-9]+)?[eE][+-]?[0-9]+|[0-9]+\.[0-9]+)").unwrap(), handler: real_handler },
        RegexPattern { regex: Regex::new(r"\A(0[xX][0-9a-fA-F]+|[0-9]+)").unwrap(), handler: int_handler },
        RegexPattern { regex: Regex::new(r"\A\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r#"\A"(\\.|[^"\\])*""#).unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new(r"\A//[^\n]*").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"\A(?s)/\*.*?\*/").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"\A/\*").unwrap(), handler: unterminated_handler },
        RegexPattern { regex: Regex::new(r"\A\[").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenBracket, "[") },
        RegexPattern { regex: Regex::new(r"\A\]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseBracket, "]") },
        RegexPattern { regex: Regex::new(r"\A\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenBrace, "{") },
        RegexPattern { regex: Regex::new(r"\A\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseBrace, "}") },
        RegexPattern { regex: Regex::new(r"\A\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParenthesis, "(") },
        RegexPattern { regex: Regex::new(r"\A\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParenthesis, ")") },
        RegexPattern { regex: Regex::new(r"\A==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Eq, "==") },
        RegexPattern { regex: Regex::new(r"\A!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Ne, "!=") },
        RegexPattern { regex: Regex::new(r"\A!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Pling, "!") },
        RegexPattern { regex: Regex::new(r"\A=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assign, "=") },
        RegexPattern { regex: Regex::new(r"\A<<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::ShlAssign, "<<=") },
        RegexPattern { regex: Regex::new(r"\A<<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Shl, "<<") },
        RegexPattern { regex: Regex::new(r"\A<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Le, "<=") },
        RegexPattern { regex: Regex::new(r"\A<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Lt, "<") },
        RegexPattern { regex: Regex::new(r"\A>>=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::ShrAssign, ">>=") },
        RegexPattern { regex: Regex::new(r"\A>>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Shr, ">>") },
        RegexPattern { regex: Regex::new(r"\A>=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Ge, ">=") },
        RegexPattern { regex: Regex::new(r"\A>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Gt, ">") },
        RegexPattern { regex: Regex::new(r"\A\|\|").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LOr, "||") },
        RegexPattern { regex: Regex::new(r"\A\|=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OrAssign, "|=") },
        RegexPattern { regex: Regex::new(r"\A\|").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::BOr, "|") },
        RegexPattern { regex: Regex::new(r"\A&&").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LAnd, "&&") },
        RegexPattern { regex: Regex::new(r"\A&=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::AndAssign, "&=") },
        RegexPattern { regex: Regex::new(r"\A&").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::BAnd, "&") },
        RegexPattern { regex: Regex::new(r"\A\^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::XorAssign, "^=") },
        RegexPattern { regex: Regex::new(r"\A\^").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::BXor, "^") },
        RegexPattern { regex: Regex::new(r"\A~").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::BNot, "~") },
        RegexPattern { regex: Regex::new(r"\A\.").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dot, ".") },
        RegexPattern { regex: Regex::new(r"\A;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
        RegexPattern { regex: Regex::new(r"\A:").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Colon, ":") },
        RegexPattern { regex: Regex::new(r"\A,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
        RegexPattern { regex: Regex::new(r"\A\+\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::PlusPlus, "++") },
        RegexPattern { regex: Regex::new(r"\A\+=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::PlusAssign, "+=") },
        RegexPattern { regex: Regex::new(r"\A\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new(r"\A--").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::MinusMinus, "--") },
        RegexPattern { regex: Regex::new(r"\A-=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::SubAssign, "-=") },
        RegexPattern { regex: Regex::new(r"\A-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Minus, "-") },
        RegexPattern { regex: Regex::new(r"\A\*\*=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::PowAssign, "**=") },
        RegexPattern { regex: Regex::new(r"\A\*\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Pow, "**") },
        RegexPattern { regex: Regex::new(r"\A\*=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::MulAssign, "*=") },
        RegexPattern { regex: Regex::new(r"\A\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Mul, "*") },
        RegexPattern { regex: Regex::new(r"\A/=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::DivAssign, "/=") },
        RegexPattern { regex: Regex::new(r"\A/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Div, "/") },
        RegexPattern { regex: Regex::new(r"\A%=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::ModAssign, "%=") },
        RegexPattern { regex: Regex::new(r"\A%").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Mod, "%") },
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    line: u32,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            line: 1,
            file: file_name,
        }
    }

    /// Moves `n` bytes forward, counting any newlines passed over.
    pub fn advance_n(&mut self, n: usize) {
        let end = (self.pos + n).min(self.source.len());
        self.line += self.source[self.pos..end].matches('\n').count() as u32;
        self.pos = end;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap_or('\0')
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position(self.line, Rc::clone(&self.file))
    }

    fn matched(&self, regex: &Regex) -> String {
        regex
            .find(self.remainder())
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }
}

fn int_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = lexer.matched(regex);

    lexer.push(MK_TOKEN!(TokenKind::IntLiteral, matched.clone(), lexer.position()));
    lexer.advance_n(matched.len());
    Ok(())
}

fn real_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = lexer.matched(regex);

    lexer.push(MK_TOKEN!(TokenKind::RealLiteral, matched.clone(), lexer.position()));
    lexer.advance_n(matched.len());
    Ok(())
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = lexer.matched(regex);
    lexer.advance_n(matched.len());
    Ok(())
}

fn unterminated_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    Err(Error::new(ErrorImpl::UnrecognisedToken { token: lexer.matched(regex) }, lexer.position()))
}

fn string_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = lexer.matched(regex);
    let position = lexer.position();
    lexer.advance_n(matched.len());

    let string_literal = &matched[1..matched.len() - 1];
    let mut result = String::new();
    let mut chars = string_literal.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }

        match chars.next() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('r') => result.push('\r'),
            Some('\\') => result.push('\\'),
            Some('"') => result.push('"'),
            Some('0') => result.push('\0'),
            Some('x') => {
                let mut hex = String::new();
                while hex.len() < 2 {
                    match chars.peek() {
                        Some(ch) if ch.is_ascii_hexdigit() => {
                            hex.push(*ch);
                            chars.next();
                        }
                        _ => break,
                    }
                }

                match u8::from_str_radix(&hex, 16) {
                    Ok(byte) => result.push(byte as char),
                    Err(_) => {
                        result.push_str("\\x");
                        result.push_str(&hex);
                    }
                }
            }
            // Unknown escapes keep their backslash.
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
            None => result.push('\\'),
        }
    }

    lexer.push(MK_TOKEN!(TokenKind::StringLiteral, result, position));
    Ok(())
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let value = lexer.matched(regex);

    let kind = RESERVED_LOOKUP.get(value.as_str()).copied().unwrap_or(TokenKind::Identifier);
    lexer.push(MK_TOKEN!(kind, value.clone(), lexer.position()));

    lexer.advance_n(value.len());
    Ok(())
}

/// Splits Talc source into tokens, ending with an `EndOfInput` token.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        let pattern = PATTERNS.iter().find(|pattern| pattern.regex.is_match(lex.remainder()));

        match pattern {
            Some(pattern) => (pattern.handler)(&mut lex, &pattern.regex)?,
            None => {
                return Err(Error::new(ErrorImpl::UnrecognisedToken { token: lex.at().to_string() }, lex.position()));
            }
        }
    }

    lex.push(MK_TOKEN!(TokenKind::EndOfInput, String::new(), lex.position()));
    Ok(lex.tokens)
}
