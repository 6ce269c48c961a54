//! Lexical analysis for Talc source.
//!
//! - `tokens`: token kinds, reserved words and numeric literal values
//! - `lexer`: the regex-driven tokenizer
//! - `source`: the `TokenSource` trait the parser reads through, and the
//!   `TokenStream` implementation over tokenized files

pub mod lexer;
pub mod source;
pub mod tokens;

#[cfg(test)]
mod tests;
