//! The top-level compilation-unit node.

use crate::children::Node;
use crate::decl::Decl;
use crate::stmt::Stmt;
use crate::support::UsingDirective;

/// A whole source file: its using-directives, any top-level statements
/// (C# "top-level programs"), and its type declarations, in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Root {
    pub usings: Vec<UsingDirective>,
    pub global_statements: Vec<Stmt>,
    pub declarations: Vec<Decl>,
}

impl Root {
    pub fn children(&self) -> Vec<Node<'_>> {
        let mut out: Vec<Node<'_>> = self.global_statements.iter().map(Node::Stmt).collect();
        out.extend(self.declarations.iter().map(Node::Decl));
        out
    }
}
