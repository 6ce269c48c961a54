//! Error types for the Talc front end.
//!
//! Every failure the lexer or parser can report is a syntax error carrying a
//! source position and a message naming what was expected and what was
//! found. Parsing is fail-fast: the first error aborts the whole parse.

pub mod errors;
