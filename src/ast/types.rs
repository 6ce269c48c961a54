//! Type descriptors as written in source.
//!
//! A descriptor is the unresolved form of a type annotation: a name plus up to
//! two type arguments (`int`, `list<string>`, `map<string, list<int>>`). The
//! semantic pass resolves them to concrete types.

use std::fmt::Display;

pub const VOID_TYPE_NAME: &str = "void";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TalcTypeDescriptor {
    name: String,
    arguments: Vec<TalcTypeDescriptor>,
}

impl TalcTypeDescriptor {
    pub fn void() -> Self {
        TalcTypeDescriptor::simple(VOID_TYPE_NAME)
    }

    /// A primitive or user-defined type with no type arguments.
    pub fn simple(name: impl Into<String>) -> Self {
        TalcTypeDescriptor {
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    /// A generic type with one (`list<T>`) or two (`map<K, V>`) arguments.
    pub fn parameterized(
        name: impl Into<String>,
        first: TalcTypeDescriptor,
        second: Option<TalcTypeDescriptor>,
    ) -> Self {
        let mut arguments = vec![first];
        arguments.extend(second);

        TalcTypeDescriptor {
            name: name.into(),
            arguments,
        }
    }

    /// The name without type arguments: `list` for `list<int>`.
    pub fn raw_name(&self) -> &str {
        &self.name
    }

    pub fn arguments(&self) -> &[TalcTypeDescriptor] {
        &self.arguments
    }

    pub fn arity(&self) -> usize {
        self.arguments.len()
    }

    pub fn is_void(&self) -> bool {
        self.arguments.is_empty() && self.name == VOID_TYPE_NAME
    }
}

impl Display for TalcTypeDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)?;

        if !self.arguments.is_empty() {
            let arguments = self
                .arguments
                .iter()
                .map(|argument| argument.to_string())
                .collect::<Vec<String>>();
            write!(f, "<{}>", arguments.join(", "))?;
        }

        Ok(())
    }
}
