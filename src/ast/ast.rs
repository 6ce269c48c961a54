use crate::Position;

use super::{
    expressions::{BinaryOperator, Constant, FunctionCall, ListLiteral, MapLiteral, VariableName},
    statements::{
        AssertStatement, Block, BreakStatement, ClassDefinition, ContinueStatement, DoStatement,
        ForEachStatement, ForStatement, FunctionDefinition, IfStatement, ReturnStatement,
        VariableDefinition, WhileStatement,
    },
};

/// Node Types
///
/// Mirrors the variants of `AstNode` without their payloads.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum NodeType {
    Block,
    AssertStatement,
    BreakStatement,
    ContinueStatement,
    ClassDefinition,
    FunctionDefinition,
    VariableDefinition,
    IfStatement,
    ForStatement,
    ForEachStatement,
    WhileStatement,
    DoStatement,
    ReturnStatement,
    BinaryOperator,
    FunctionCall,
    Constant,
    VariableName,
    ListLiteral,
    MapLiteral,
}

/// Every statement and expression the parser produces.
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    Block(Block),
    AssertStatement(AssertStatement),
    BreakStatement(BreakStatement),
    ContinueStatement(ContinueStatement),
    ClassDefinition(ClassDefinition),
    FunctionDefinition(FunctionDefinition),
    VariableDefinition(VariableDefinition),
    IfStatement(IfStatement),
    ForStatement(ForStatement),
    ForEachStatement(ForEachStatement),
    WhileStatement(WhileStatement),
    DoStatement(DoStatement),
    ReturnStatement(ReturnStatement),
    BinaryOperator(BinaryOperator),
    FunctionCall(FunctionCall),
    Constant(Constant),
    VariableName(VariableName),
    ListLiteral(ListLiteral),
    MapLiteral(MapLiteral),
}

impl AstNode {
    pub fn get_node_type(&self) -> NodeType {
        match self {
            AstNode::Block(_) => NodeType::Block,
            AstNode::AssertStatement(_) => NodeType::AssertStatement,
            AstNode::BreakStatement(_) => NodeType::BreakStatement,
            AstNode::ContinueStatement(_) => NodeType::ContinueStatement,
            AstNode::ClassDefinition(_) => NodeType::ClassDefinition,
            AstNode::FunctionDefinition(_) => NodeType::FunctionDefinition,
            AstNode::VariableDefinition(_) => NodeType::VariableDefinition,
            AstNode::IfStatement(_) => NodeType::IfStatement,
            AstNode::ForStatement(_) => NodeType::ForStatement,
            AstNode::ForEachStatement(_) => NodeType::ForEachStatement,
            AstNode::WhileStatement(_) => NodeType::WhileStatement,
            AstNode::DoStatement(_) => NodeType::DoStatement,
            AstNode::ReturnStatement(_) => NodeType::ReturnStatement,
            AstNode::BinaryOperator(_) => NodeType::BinaryOperator,
            AstNode::FunctionCall(_) => NodeType::FunctionCall,
            AstNode::Constant(_) => NodeType::Constant,
            AstNode::VariableName(_) => NodeType::VariableName,
            AstNode::ListLiteral(_) => NodeType::ListLiteral,
            AstNode::MapLiteral(_) => NodeType::MapLiteral,
        }
    }

    pub fn get_position(&self) -> &Position {
        match self {
            AstNode::Block(node) => &node.position,
            AstNode::AssertStatement(node) => &node.position,
            AstNode::BreakStatement(node) => &node.position,
            AstNode::ContinueStatement(node) => &node.position,
            AstNode::ClassDefinition(node) => &node.position,
            AstNode::FunctionDefinition(node) => &node.position,
            AstNode::VariableDefinition(node) => &node.position,
            AstNode::IfStatement(node) => &node.position,
            AstNode::ForStatement(node) => &node.position,
            AstNode::ForEachStatement(node) => &node.position,
            AstNode::WhileStatement(node) => &node.position,
            AstNode::DoStatement(node) => &node.position,
            AstNode::ReturnStatement(node) => &node.position,
            AstNode::BinaryOperator(node) => &node.position,
            AstNode::FunctionCall(node) => &node.position,
            AstNode::Constant(node) => &node.position,
            AstNode::VariableName(node) => &node.position,
            AstNode::ListLiteral(node) => &node.position,
            AstNode::MapLiteral(node) => &node.position,
        }
    }
}
