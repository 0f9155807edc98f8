//! Support types shared by declarations, statements, and expressions: type
//! references, qualified names, parameter/argument lists, and using
//! directives.

use crate::children::Node;
use crate::expr::Expr;
use sharpc_util::symbol::Symbol;
use std::fmt;

/// A dotted name (`System.Collections.Generic`), stored as its interned
/// segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedName {
    pub segments: Vec<Symbol>,
}

impl QualifiedName {
    pub fn simple(name: &str) -> Self {
        Self {
            segments: vec![Symbol::intern(name)],
        }
    }

    pub fn new<'a>(segments: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            segments: segments.into_iter().map(Symbol::intern).collect(),
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, seg) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{seg}")?;
        }
        Ok(())
    }
}

/// A reference to a type, optionally generic (`List<int>`, `Dictionary<string, int>`).
#[derive(Debug, Clone, PartialEq)]
pub struct TypeReference {
    pub name: QualifiedName,
    pub type_arguments: Option<TypeArgumentsList>,
}

impl TypeReference {
    pub fn simple(name: &str) -> Self {
        Self {
            name: QualifiedName::simple(name),
            type_arguments: None,
        }
    }

    pub fn generic(name: &str, arguments: Vec<TypeReference>) -> Self {
        Self {
            name: QualifiedName::simple(name),
            type_arguments: Some(TypeArgumentsList { arguments }),
        }
    }
}

impl fmt::Display for TypeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(args) = &self.type_arguments {
            write!(f, "{args}")?;
        }
        Ok(())
    }
}

/// The `<T, U>` portion of a generic type reference or generic name expression.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeArgumentsList {
    pub arguments: Vec<TypeReference>,
}

impl fmt::Display for TypeArgumentsList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<")?;
        for (i, arg) in self.arguments.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{arg}")?;
        }
        write!(f, ">")
    }
}

/// A single method/constructor/local-function parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub ty: TypeReference,
    pub name: Symbol,
    pub default: Option<Expr>,
}

impl Parameter {
    pub fn new(ty: TypeReference, name: &str) -> Self {
        Self {
            ty,
            name: Symbol::intern(name),
            default: None,
        }
    }

    pub fn children(&self) -> Vec<Node<'_>> {
        crate::children::child_list([self.default.as_ref().map(Node::Expr)])
    }
}

/// An ordered, parenthesised parameter list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParameterList {
    pub parameters: Vec<Parameter>,
}

impl ParameterList {
    pub fn children(&self) -> Vec<Node<'_>> {
        self.parameters
            .iter()
            .flat_map(Parameter::children)
            .collect()
    }
}

/// A single call argument. `name` is present for named arguments
/// (`Foo(x: 1)`).
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    pub name: Option<Symbol>,
    pub value: Expr,
}

impl Argument {
    pub fn positional(value: Expr) -> Self {
        Self { name: None, value }
    }

    pub fn named(name: &str, value: Expr) -> Self {
        Self {
            name: Some(Symbol::intern(name)),
            value,
        }
    }
}

/// An argument list: parenthesised for invocations/object creation, or
/// bracketed for element access (`a[i]`).
#[derive(Debug, Clone, PartialEq)]
pub struct ArgumentList {
    pub arguments: Vec<Argument>,
    pub is_bracketed: bool,
}

/// Entries over this length collapse to a count summary in rendered output,
/// keeping diagnostics scannable.
pub const ARGUMENT_RENDER_COLLAPSE_THRESHOLD: usize = 10;

impl ArgumentList {
    pub fn new(arguments: Vec<Argument>) -> Self {
        Self {
            arguments,
            is_bracketed: false,
        }
    }

    pub fn bracketed(arguments: Vec<Argument>) -> Self {
        Self {
            arguments,
            is_bracketed: true,
        }
    }

    pub fn children(&self) -> Vec<Node<'_>> {
        self.arguments.iter().map(|a| Node::Expr(&a.value)).collect()
    }
}

impl fmt::Display for ArgumentList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (open, close) = if self.is_bracketed { ('[', ']') } else { ('(', ')') };
        if self.arguments.len() > ARGUMENT_RENDER_COLLAPSE_THRESHOLD {
            return write!(f, "{open}<{} arguments>{close}", self.arguments.len());
        }
        write!(f, "{open}")?;
        for (i, arg) in self.arguments.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            if let Some(name) = &arg.name {
                write!(f, "{name}: ")?;
            }
            write!(f, "{}", arg.value)?;
        }
        write!(f, "{close}")
    }
}

/// A `using System.Collections.Generic;` or `using Alias = Some.Namespace;` directive.
#[derive(Debug, Clone, PartialEq)]
pub struct UsingDirective {
    pub path: QualifiedName,
    pub alias: Option<Symbol>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::Expr;

    #[test]
    fn test_simple_type_reference_display() {
        assert_eq!(TypeReference::simple("int").to_string(), "int");
    }

    #[test]
    fn test_generic_type_reference_display() {
        let ty = TypeReference::generic("List", vec![TypeReference::simple("int")]);
        assert_eq!(ty.to_string(), "List<int>");
    }

    #[test]
    fn test_qualified_name_display() {
        let name = QualifiedName::new(["System", "Collections", "Generic"]);
        assert_eq!(name.to_string(), "System.Collections.Generic");
    }

    #[test]
    fn test_parameter_without_default_has_no_children() {
        let p = Parameter::new(TypeReference::simple("int"), "x");
        assert!(p.children().is_empty());
    }

    #[test]
    fn test_parameter_with_default_has_one_child() {
        let mut p = Parameter::new(TypeReference::simple("int"), "x");
        p.default = Some(Expr::numeric_i32("0"));
        assert_eq!(p.children().len(), 1);
    }

    #[test]
    fn test_argument_list_collapses_over_threshold() {
        let args = (0..11)
            .map(|i| Argument::positional(Expr::numeric_i32(&i.to_string())))
            .collect();
        let list = ArgumentList::new(args);
        assert_eq!(list.to_string(), "(<11 arguments>)");
    }

    #[test]
    fn test_argument_list_at_threshold_does_not_collapse() {
        let args = (0..10)
            .map(|i| Argument::positional(Expr::numeric_i32(&i.to_string())))
            .collect();
        let list = ArgumentList::new(args);
        assert!(!list.to_string().contains("arguments>"));
    }

    #[test]
    fn test_bracketed_argument_list_uses_brackets() {
        let list = ArgumentList::bracketed(vec![Argument::positional(Expr::numeric_i32("0"))]);
        assert_eq!(list.to_string(), "[0]");
    }

    #[test]
    fn test_named_argument_renders_with_name_prefix() {
        let list = ArgumentList::new(vec![Argument::named("x", Expr::numeric_i32("1"))]);
        assert_eq!(list.to_string(), "(x: 1)");
    }
}
