//! Uniform child enumeration (component C7).
//!
//! Every node kind exposes its ordered list of structural children through
//! [`Node`], a borrowed reference that erases which concrete node type it
//! points at. [`child_list`] is the one helper every `children()` method
//! funnels through: it takes a fixed-order sequence of optional children and
//! filters out the absent ones, so optional fields never leave a gap or
//! require callers to special-case `None`.

use crate::decl::Decl;
use crate::expr::Expr;
use crate::stmt::Stmt;

/// A borrowed reference to any AST node, for traversal that doesn't care
/// which concrete type it is looking at.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Expr(&'a Expr),
    Stmt(&'a Stmt),
    Decl(&'a Decl),
}

/// Builds a child list from a fixed-order sequence of optional children,
/// keeping only the present ones and preserving their relative order.
pub fn child_list<'a>(items: impl IntoIterator<Item = Option<Node<'a>>>) -> Vec<Node<'a>> {
    items.into_iter().flatten().collect()
}
