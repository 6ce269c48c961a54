//! Integration tests for end-to-end parsing.
//!
//! These tests run the whole front end from source text to AST, including
//! library imports resolved against real directories on disk.

use std::{fs, path::PathBuf};

use talc::{
    ast::ast::{AstNode, NodeType},
    errors::errors::ErrorImpl,
    lexer::source::{TokenSource, TokenStream},
    library_path_from_env,
    parser::parser::{parse_source, Parser},
    render_error, LIBRARY_PATH_VAR,
};
use tempfile::TempDir;

fn library_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (name, contents) in files {
        fs::write(dir.path().join(name), contents).unwrap();
    }
    dir
}

fn node_types(statements: &[AstNode]) -> Vec<NodeType> {
    statements.iter().map(|statement| statement.get_node_type()).collect()
}

fn function_names(statements: &[AstNode]) -> Vec<String> {
    statements
        .iter()
        .filter_map(|statement| match statement {
            AstNode::FunctionDefinition(function) => Some(function.name.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn test_parse_program() {
    let source = r#"
        class Counter {
            count: int = 0;
            function Counter() { }
            function void increment() { count += 1; }
        }

        function int fib(n: int) {
            if (n < 2) {
                return n;
            }
            return fib(n - 1) + fib(n - 2);
        }

        squares: list<int> = [];
        for (i: int = 0; i < 10; ++i) {
            squares.push_back(i ** 2);
        }
        for (i, square in squares) {
            assert square == i * i : "bad square";
        }
        counter := new Counter();
        counter.increment();
    "#;

    let statements = parse_source(source, "main.talc", vec![]).unwrap();

    assert_eq!(
        node_types(&statements),
        vec![
            NodeType::ClassDefinition,
            NodeType::FunctionDefinition,
            NodeType::VariableDefinition,
            NodeType::ForStatement,
            NodeType::ForEachStatement,
            NodeType::VariableDefinition,
            NodeType::FunctionCall,
        ]
    );
}

#[test]
fn test_import_splices_library_once() {
    let dir = library_dir(&[("math.talc", "function int square(x: int) { return x * x; }\n")]);
    let source = "import \"math\";\nimport \"math\";\ny := square(2);\n";

    let statements = parse_source(source, "main.talc", vec![dir.path().to_path_buf()]).unwrap();

    assert_eq!(
        node_types(&statements),
        vec![NodeType::FunctionDefinition, NodeType::VariableDefinition]
    );
    assert_eq!(function_names(&statements), vec!["square"]);
}

#[test]
fn test_import_keeps_statement_order() {
    let dir = library_dir(&[("lib.talc", "function void middle() { }\n")]);
    let source = "function void first() { }\nimport \"lib\";\nfunction void last() { }\n";

    let statements = parse_source(source, "main.talc", vec![dir.path().to_path_buf()]).unwrap();

    assert_eq!(function_names(&statements), vec!["first", "middle", "last"]);
}

#[test]
fn test_imported_positions_name_the_library() {
    let dir = library_dir(&[("lib.talc", "\n\nfunction void f() { }\n")]);

    let statements = parse_source("import \"lib.talc\";", "main.talc", vec![dir.path().to_path_buf()]).unwrap();

    let position = statements[0].get_position();
    assert_eq!(position.line(), 3);
    assert!(position.file().ends_with("lib.talc"));
}

#[test]
fn test_library_path_searched_in_order() {
    let first = library_dir(&[("lib.talc", "function void from_first() { }\n")]);
    let second = library_dir(&[
        ("lib.talc", "function void from_second() { }\n"),
        ("other.talc", "function void other() { }\n"),
    ]);
    let library_path = vec![first.path().to_path_buf(), second.path().to_path_buf()];

    let statements = parse_source("import \"lib\";\nimport \"other\";", "main.talc", library_path).unwrap();

    assert_eq!(function_names(&statements), vec!["from_first", "other"]);
}

#[test]
fn test_library_not_found() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    let library_path = vec![first.path().to_path_buf(), second.path().to_path_buf()];

    let error = parse_source("x := 1;\nimport \"missing\";", "main.talc", library_path).unwrap_err();

    assert_eq!(
        error.message(),
        format!(
            "couldn't find a match for import \"missing\" on library path \"{}:{}\"",
            first.path().display(),
            second.path().display()
        )
    );
    assert_eq!(error.get_position().line(), 2);
    assert_eq!(error.get_position().file(), "main.talc");
}

#[test]
fn test_library_not_found_on_empty_path() {
    let error = parse_source("import \"missing\";", "main.talc", vec![]).unwrap_err();

    assert_eq!(
        error.message(),
        "couldn't find a match for import \"missing\" on library path \"\""
    );
}

#[test]
fn test_library_unreadable() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("broken.talc")).unwrap();

    let error = parse_source("import \"broken\";", "main.talc", vec![dir.path().to_path_buf()]).unwrap_err();

    match error.get_kind() {
        ErrorImpl::LibraryUnreadable { library, .. } => assert_eq!(library, "broken"),
        other => panic!("expected an unreadable library, got {:?}", other),
    }
    assert!(error.message().starts_with("couldn't import \"broken\": "));
}

#[test]
fn test_import_cycles_terminate() {
    let dir = library_dir(&[
        ("a.talc", "import \"b\";\nfunction void a() { }\n"),
        ("b.talc", "import \"a\";\nimport \"b\";\nfunction void b() { }\n"),
    ]);

    let statements = parse_source("import \"a\";", "main.talc", vec![dir.path().to_path_buf()]).unwrap();

    assert_eq!(function_names(&statements), vec!["b", "a"]);
}

#[test]
fn test_import_only_at_top_level() {
    let dir = library_dir(&[("lib.talc", "")]);

    let error = parse_source(
        "function void f() { import \"lib\"; }",
        "main.talc",
        vec![dir.path().to_path_buf()],
    )
    .unwrap_err();

    assert!(matches!(error.get_kind(), ErrorImpl::ImportOutsideGlobalScope));
}

#[test]
fn test_import_needs_string_literal() {
    let error = parse_source("import math;", "main.talc", vec![]).unwrap_err();

    assert_eq!(
        error.message(),
        "expected string literal, got identifier \"math\" instead"
    );
}

#[test]
fn test_library_syntax_error_restores_importer() {
    let dir = library_dir(&[("bad.talc", "function void f() {\n  return 1;\n  x;\n}\n")]);
    let lexer = TokenStream::from_source("import \"bad\";\nafter();\n", "main.talc").unwrap();
    let mut parser = Parser::new(lexer, vec![dir.path().to_path_buf()]);

    let error = parser.parse().unwrap_err();

    assert!(matches!(error.get_kind(), ErrorImpl::UnreachableStatement));
    assert_eq!(error.get_position().line(), 3);
    assert!(error.get_position().file().ends_with("bad.talc"));

    // The importer's token source is back in place, just past the import.
    assert_eq!(parser.lexer().location().file(), "main.talc");
    assert_eq!(parser.lexer().identifier(), "after");
    assert!(parser.is_imported("bad"));
}

#[test]
fn test_library_lex_error() {
    let dir = library_dir(&[("bad.talc", "x := 1;\ny := @;\n")]);

    let error = parse_source("import \"bad\";", "main.talc", vec![dir.path().to_path_buf()]).unwrap_err();

    assert!(matches!(error.get_kind(), ErrorImpl::UnrecognisedToken { .. }));
    assert_eq!(error.get_position().line(), 2);
}

#[test]
fn test_render_error() {
    let source = "x := 1;\nwhile (x < 10) {\n    break;\n    x += 1;\n}\n";

    let error = parse_source(source, "main.talc", vec![]).unwrap_err();
    let rendered = render_error(&error, source);

    assert!(rendered.starts_with("Error: UnreachableStatement (unreachable statement; "));
    assert!(rendered.contains("-> main.talc\n"));
    assert!(rendered.contains("4 | x += 1;\n"));
}

#[test]
fn test_library_path_from_env() {
    let first = PathBuf::from("/usr/lib/talc");
    let second = PathBuf::from("/home/talc/lib");
    let joined = std::env::join_paths([&first, &second]).unwrap();

    std::env::set_var(LIBRARY_PATH_VAR, &joined);
    let library_path = library_path_from_env();
    std::env::remove_var(LIBRARY_PATH_VAR);

    assert_eq!(library_path, vec![first, second]);
}
