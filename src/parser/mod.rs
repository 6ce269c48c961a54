//! Parser module for building the Talc AST.
//!
//! This module turns a token source into the ordered list of top-level
//! statements of a program. It is a hand-written recursive descent parser
//! with one token of lookahead and no backtracking:
//!
//! - Statement parsing through a lookup keyed on the leading token
//! - Class, function and extern declarations
//! - Expression parsing by precedence climbing
//! - Type parsing for annotations and `new`
//! - Import resolution against a library search path
//!
//! The first syntax error aborts the parse.

pub mod decl;
pub mod expr;
pub mod imports;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;
