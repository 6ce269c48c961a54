//! Unit tests for the lexer module.

use super::{
    lexer::tokenize,
    source::{TokenSource, TokenStream},
    tokens::{NumericLiteral, TokenKind},
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.talc".to_string()))
        .unwrap()
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    let source = "assert break class continue do else extern false final for function if import in new null return true void while";
    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Assert,
            TokenKind::Break,
            TokenKind::Class,
            TokenKind::Continue,
            TokenKind::Do,
            TokenKind::Else,
            TokenKind::Extern,
            TokenKind::False,
            TokenKind::Final,
            TokenKind::For,
            TokenKind::Function,
            TokenKind::If,
            TokenKind::Import,
            TokenKind::In,
            TokenKind::New,
            TokenKind::Null,
            TokenKind::Return,
            TokenKind::True,
            TokenKind::Void,
            TokenKind::While,
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo baz_123 _underscore CamelCase".to_string(), None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].value, "baz_123");
    assert_eq!(tokens[2].value, "_underscore");
    assert_eq!(tokens[3].value, "CamelCase");
    assert_eq!(tokens[4].kind, TokenKind::EndOfInput);
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 3.14 0x1F 2e10 1.5E-3".to_string(), None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::IntLiteral);
    assert_eq!(tokens[1].kind, TokenKind::RealLiteral);
    assert_eq!(tokens[2].kind, TokenKind::IntLiteral);
    assert_eq!(tokens[2].value, "0x1F");
    assert_eq!(tokens[3].kind, TokenKind::RealLiteral);
    assert_eq!(tokens[4].kind, TokenKind::RealLiteral);
    assert_eq!(tokens[4].value, "1.5E-3");
}

#[test]
fn test_number_followed_by_method_call() {
    assert_eq!(
        kinds("1.abs()"),
        vec![
            TokenKind::IntLiteral,
            TokenKind::Dot,
            TokenKind::Identifier,
            TokenKind::OpenParenthesis,
            TokenKind::CloseParenthesis,
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn test_tokenize_string_escapes() {
    let source = r#""hello\nworld" "tab\there" "backslash\\" "hex\x41" "quote\"test" """#;
    let tokens = tokenize(source.to_string(), None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[0].value, "hello\nworld");
    assert_eq!(tokens[1].value, "tab\there");
    assert_eq!(tokens[2].value, "backslash\\");
    assert_eq!(tokens[3].value, "hexA");
    assert_eq!(tokens[4].value, "quote\"test");
    assert_eq!(tokens[5].value, "");
    assert_eq!(tokens[6].kind, TokenKind::EndOfInput);
}

#[test]
fn test_tokenize_operators() {
    let source = "= += -= *= **= /= %= <<= >>= &= |= ^= || && | ^ & ~ == != > >= < <= << >> + - * / % ** ++ -- !";
    assert_eq!(
        kinds(source),
        vec![
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
            TokenKind::LOr,
            TokenKind::LAnd,
            TokenKind::BOr,
            TokenKind::BXor,
            TokenKind::BAnd,
            TokenKind::BNot,
            TokenKind::Eq,
            TokenKind::Ne,
            TokenKind::Gt,
            TokenKind::Ge,
            TokenKind::Lt,
            TokenKind::Le,
            TokenKind::Shl,
            TokenKind::Shr,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Mul,
            TokenKind::Div,
            TokenKind::Mod,
            TokenKind::Pow,
            TokenKind::PlusPlus,
            TokenKind::MinusMinus,
            TokenKind::Pling,
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        kinds("( ) { } [ ] . , ; :"),
        vec![
            TokenKind::OpenParenthesis,
            TokenKind::CloseParenthesis,
            TokenKind::OpenBrace,
            TokenKind::CloseBrace,
            TokenKind::OpenBracket,
            TokenKind::CloseBracket,
            TokenKind::Dot,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::Colon,
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn test_tokenize_comments() {
    let source = "x // line comment\n/* block\ncomment */ y";
    let tokens = tokenize(source.to_string(), None).unwrap();

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].value, "x");
    assert_eq!(tokens[1].value, "y");
    assert_eq!(tokens[1].position.0, 3);
}

#[test]
fn test_line_numbers() {
    let tokens = tokenize("a\nb\n\n\"multi\nline\" c".to_string(), Some("lines.talc".to_string())).unwrap();

    assert_eq!(tokens[0].position.0, 1);
    assert_eq!(tokens[1].position.0, 2);
    assert_eq!(tokens[2].position.0, 4);
    assert_eq!(tokens[3].position.0, 5);
    assert_eq!(tokens[3].position.file(), "lines.talc");
}

#[test]
fn test_tokenize_unrecognized_token() {
    assert!(tokenize("x = @".to_string(), None).is_err());
    assert!(tokenize("\"unterminated".to_string(), None).is_err());
    assert!(tokenize("/* unterminated".to_string(), None).is_err());
}

#[test]
fn test_token_stream_navigation() {
    let mut stream = TokenStream::from_source("x 42 2.5", "test.talc").unwrap();

    assert_eq!(stream.token(), TokenKind::Identifier);
    assert_eq!(stream.identifier(), "x");
    stream.next_token();
    assert_eq!(stream.numeric_literal().unwrap(), NumericLiteral::Int(42));
    stream.next_token();
    assert_eq!(stream.numeric_literal().unwrap(), NumericLiteral::Real(2.5));
    stream.next_token();
    assert_eq!(stream.token(), TokenKind::EndOfInput);
    stream.next_token();
    assert_eq!(stream.token(), TokenKind::EndOfInput);
}

#[test]
fn test_numeric_literal_overflow() {
    let stream = TokenStream::from_source("99999999999999999999", "test.talc").unwrap();
    assert!(stream.numeric_literal().is_err());

    let stream = TokenStream::from_source("0xff", "test.talc").unwrap();
    assert_eq!(stream.numeric_literal().unwrap(), NumericLiteral::Int(255));
}

#[test]
fn test_token_stream_without_end_marker() {
    let stream = TokenStream::new(vec![]);
    assert_eq!(stream.token(), TokenKind::EndOfInput);
}
