use std::slice::Iter;

use crate::Position;

use super::{ast::AstNode, types::TalcTypeDescriptor};

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub body: Vec<AstNode>,
    pub position: Position,
}

impl Block {
    pub fn iter(&self) -> Iter<'_, AstNode> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// `assert test [: explanation];`
#[derive(Debug, Clone, PartialEq)]
pub struct AssertStatement {
    pub test_expression: Box<AstNode>,
    pub explanatory_expression: Option<Box<AstNode>>,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BreakStatement {
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContinueStatement {
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassDefinition {
    pub name: String,
    pub fields: Vec<VariableDefinition>,
    pub methods: Vec<FunctionDefinition>,
    pub position: Position,
}

/// Where an extern function's implementation lives: a language tag such as
/// `"Java"` and a symbol descriptor in that language's notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternBinding {
    pub language: String,
    pub descriptor: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDefinition {
    pub name: String,
    formal_parameter_names: Vec<String>,
    formal_parameter_types: Vec<TalcTypeDescriptor>,
    pub return_type: TalcTypeDescriptor,
    pub body: Option<Block>,
    pub extern_binding: Option<ExternBinding>,
    pub position: Position,
}

impl FunctionDefinition {
    /// Builds a definition from `(name, type)` pairs, which keeps the name and
    /// type sequences the same length.
    pub fn new(
        position: Position,
        name: impl Into<String>,
        formal_parameters: Vec<(String, TalcTypeDescriptor)>,
        return_type: TalcTypeDescriptor,
        body: Option<Block>,
        extern_binding: Option<ExternBinding>,
    ) -> Self {
        let (formal_parameter_names, formal_parameter_types) = formal_parameters.into_iter().unzip();

        FunctionDefinition {
            name: name.into(),
            formal_parameter_names,
            formal_parameter_types,
            return_type,
            body,
            extern_binding,
            position,
        }
    }

    pub fn formal_parameter_names(&self) -> &[String] {
        &self.formal_parameter_names
    }

    pub fn formal_parameter_types(&self) -> &[TalcTypeDescriptor] {
        &self.formal_parameter_types
    }

    pub fn formal_parameters(&self) -> impl Iterator<Item = (&String, &TalcTypeDescriptor)> {
        self.formal_parameter_names.iter().zip(self.formal_parameter_types.iter())
    }

    pub fn is_extern(&self) -> bool {
        self.extern_binding.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableDefinition {
    pub name: String,
    /// `None` when the type is left to inference.
    pub type_descriptor: Option<TalcTypeDescriptor>,
    pub initializer: Option<Box<AstNode>>,
    pub is_final: bool,
    pub position: Position,
}

/// `if`, any number of `else if`, and an optional `else`. `conditions` and
/// `blocks` run in parallel.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    pub conditions: Vec<AstNode>,
    pub blocks: Vec<Block>,
    pub else_block: Option<Block>,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForStatement {
    pub initializer: Option<VariableDefinition>,
    pub condition: Box<AstNode>,
    pub update: Box<AstNode>,
    pub body: Block,
    pub position: Position,
}

/// `for (k, v in expression)`. Holds one or two untyped loop variables.
#[derive(Debug, Clone, PartialEq)]
pub struct ForEachStatement {
    pub loop_variables: Vec<VariableDefinition>,
    pub expression: Box<AstNode>,
    pub body: Block,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStatement {
    pub condition: Box<AstNode>,
    pub body: Block,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DoStatement {
    pub body: Block,
    pub condition: Box<AstNode>,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub value: Option<Box<AstNode>>,
    pub position: Position,
}
