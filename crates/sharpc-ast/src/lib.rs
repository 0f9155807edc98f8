//! AST node schema for a C#-like curly-brace object-oriented language.
//!
//! The schema is a closed set of variants (expressions, statements,
//! declarations, and the support types they share) rather than one type
//! per grammar production. Every node kind exposes an ordered `children()`
//! list through the [`children::Node`] reference-erasure enum, built with
//! [`children::child_list`] so optional children never leave a gap.

pub mod children;
pub mod decl;
pub mod expr;
pub mod root;
pub mod stmt;
pub mod support;

pub use children::{child_list, Node};
pub use decl::Decl;
pub use expr::Expr;
pub use root::Root;
pub use stmt::Stmt;
