use std::fmt::Display;

use crate::Position;

use super::{ast::AstNode, types::TalcTypeDescriptor};

/// Method name that `a[i]` desugars to.
pub const GET_ITEM: &str = "__get_item__";
/// Method name that `a[i] = v` desugars to.
pub const SET_ITEM: &str = "__set_item__";

/// Operators after the parser has settled whether a token is prefix, postfix
/// or binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Assign,
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

    LOr,
    LAnd,
    BOr,
    BXor,
    BAnd,
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
    Shl,
    Shr,
    Plus,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,

    // Unary
    Neg,
    LNot,
    BNot,
    PreIncrement,
    PreDecrement,
    PostIncrement,
    PostDecrement,
    Factorial,
}

impl Operator {
    pub fn is_unary(&self) -> bool {
        matches!(
            self,
            Operator::Neg
                | Operator::LNot
                | Operator::BNot
                | Operator::PreIncrement
                | Operator::PreDecrement
                | Operator::PostIncrement
                | Operator::PostDecrement
                | Operator::Factorial
        )
    }

    pub fn is_postfix(&self) -> bool {
        matches!(
            self,
            Operator::PostIncrement | Operator::PostDecrement | Operator::Factorial
        )
    }

    pub fn is_assignment(&self) -> bool {
        matches!(
            self,
            Operator::Assign
                | Operator::PlusAssign
                | Operator::SubAssign
                | Operator::MulAssign
                | Operator::PowAssign
                | Operator::DivAssign
                | Operator::ModAssign
                | Operator::ShlAssign
                | Operator::ShrAssign
                | Operator::AndAssign
                | Operator::OrAssign
                | Operator::XorAssign
        )
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Assign => "=",
            Operator::PlusAssign => "+=",
            Operator::SubAssign => "-=",
            Operator::MulAssign => "*=",
            Operator::PowAssign => "**=",
            Operator::DivAssign => "/=",
            Operator::ModAssign => "%=",
            Operator::ShlAssign => "<<=",
            Operator::ShrAssign => ">>=",
            Operator::AndAssign => "&=",
            Operator::OrAssign => "|=",
            Operator::XorAssign => "^=",
            Operator::LOr => "||",
            Operator::LAnd => "&&",
            Operator::BOr => "|",
            Operator::BXor => "^",
            Operator::BAnd => "&",
            Operator::Eq => "==",
            Operator::Ne => "!=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Shl => "<<",
            Operator::Shr => ">>",
            Operator::Plus => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Mod => "%",
            Operator::Pow => "**",
            Operator::Neg => "-",
            Operator::LNot => "!",
            Operator::BNot => "~",
            Operator::PreIncrement | Operator::PostIncrement => "++",
            Operator::PreDecrement | Operator::PostDecrement => "--",
            Operator::Factorial => "!",
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Binary, prefix or postfix operation.
///
/// Unary forms keep their operand in `left` and have no `right`.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOperator {
    pub operator: Operator,
    pub left: Box<AstNode>,
    pub right: Option<Box<AstNode>>,
    pub position: Position,
}

impl BinaryOperator {
    pub fn binary(position: Position, operator: Operator, left: AstNode, right: AstNode) -> Self {
        BinaryOperator {
            operator,
            left: Box::new(left),
            right: Some(Box::new(right)),
            position,
        }
    }

    pub fn unary(position: Position, operator: Operator, operand: AstNode) -> Self {
        BinaryOperator {
            operator,
            left: Box::new(operand),
            right: None,
            position,
        }
    }
}

/// A call of a function, a method (`instance` set) or a constructor
/// (`constructor_type` set).
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub name: String,
    pub instance: Option<Box<AstNode>>,
    pub constructor_type: Option<TalcTypeDescriptor>,
    pub arguments: Vec<AstNode>,
    pub position: Position,
}

impl FunctionCall {
    pub fn function(position: Position, name: impl Into<String>, arguments: Vec<AstNode>) -> Self {
        FunctionCall {
            name: name.into(),
            instance: None,
            constructor_type: None,
            arguments,
            position,
        }
    }

    pub fn method(
        position: Position,
        name: impl Into<String>,
        instance: AstNode,
        arguments: Vec<AstNode>,
    ) -> Self {
        FunctionCall {
            name: name.into(),
            instance: Some(Box::new(instance)),
            constructor_type: None,
            arguments,
            position,
        }
    }

    pub fn constructor(position: Position, type_descriptor: TalcTypeDescriptor, arguments: Vec<AstNode>) -> Self {
        FunctionCall {
            name: type_descriptor.raw_name().to_string(),
            instance: None,
            constructor_type: Some(type_descriptor),
            arguments,
            position,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConstantValue {
    Int(i64),
    Real(f64),
    Bool(bool),
    Str(String),
    Null,
}

impl Display for ConstantValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConstantValue::Int(value) => write!(f, "{}", value),
            ConstantValue::Real(value) => write!(f, "{:?}", value),
            ConstantValue::Bool(value) => write!(f, "{}", value),
            ConstantValue::Str(value) => write!(f, "{:?}", value),
            ConstantValue::Null => write!(f, "null"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Constant {
    pub value: ConstantValue,
    pub position: Position,
}

impl Constant {
    /// The `true` the parser supplies for an omitted loop condition or
    /// update expression.
    pub fn synthetic_true() -> Self {
        Constant {
            value: ConstantValue::Bool(true),
            position: Position::synthetic(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableName {
    pub name: String,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListLiteral {
    pub elements: Vec<AstNode>,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapLiteral {
    pub entries: Vec<(AstNode, AstNode)>,
    pub position: Position,
}
