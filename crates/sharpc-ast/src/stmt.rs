//! Statement node kinds.

use crate::children::{child_list, Node};
use crate::expr::Expr;
use crate::support::TypeReference;
use sharpc_util::symbol::Symbol;

/// The closed set of statement kinds that can appear inside a block.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Expression(Expr),
    Return(Option<Expr>),
    VariableDeclaration(VariableDeclarationStmt),
    Empty,
    Block(Block),
    If(IfStmt),
    While(WhileStmt),
    DoWhile(DoWhileStmt),
    For(ForStmt),
    Foreach(ForeachStmt),
    LocalFunction(LocalFunctionStmt),
    Break,
    Continue,
}

impl Stmt {
    /// The ordered list of this statement's structural children. Nested
    /// blocks, conditions, and sub-statements are all expressed as `Node`s
    /// so a caller walking the tree doesn't need to special-case kinds.
    pub fn children(&self) -> Vec<Node<'_>> {
        match self {
            Stmt::Expression(e) => vec![Node::Expr(e)],
            Stmt::Return(e) => child_list([e.as_ref().map(Node::Expr)]),
            Stmt::VariableDeclaration(v) => v.children(),
            Stmt::Empty | Stmt::Break | Stmt::Continue => Vec::new(),
            Stmt::Block(b) => b.children(),
            Stmt::If(i) => i.children(),
            Stmt::While(w) => vec![Node::Expr(&w.condition), Node::Stmt(&w.body)],
            Stmt::DoWhile(d) => vec![Node::Stmt(&d.body), Node::Expr(&d.condition)],
            Stmt::For(f) => f.children(),
            Stmt::Foreach(f) => vec![Node::Expr(&f.source), Node::Stmt(&f.body)],
            Stmt::LocalFunction(l) => l.children(),
        }
    }
}

/// `Type name = initializer;` (initializer optional) or, with multiple
/// declarators, `Type a = 1, b = 2;`.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclarationStmt {
    pub ty: TypeReference,
    pub declarators: Vec<VariableDeclarator>,
}

impl VariableDeclarationStmt {
    pub fn children(&self) -> Vec<Node<'_>> {
        self.declarators
            .iter()
            .filter_map(|d| d.initializer.as_ref().map(Node::Expr))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclarator {
    pub name: Symbol,
    pub initializer: Option<Expr>,
}

/// A brace-delimited sequence of statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub statements: Vec<Stmt>,
}

impl Block {
    pub fn children(&self) -> Vec<Node<'_>> {
        self.statements.iter().map(Node::Stmt).collect()
    }
}

/// `if (condition) then_branch [else else_branch]`.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_branch: Box<Stmt>,
    pub else_branch: Option<Box<Stmt>>,
}

impl IfStmt {
    pub fn children(&self) -> Vec<Node<'_>> {
        child_list([
            Some(Node::Expr(&self.condition)),
            Some(Node::Stmt(&self.then_branch)),
            self.else_branch.as_deref().map(Node::Stmt),
        ])
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: Box<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DoWhileStmt {
    pub body: Box<Stmt>,
    pub condition: Expr,
}

/// `for (init; condition; increments) body`. `init` may declare a variable
/// or be a bare expression statement; both, and `condition`, are optional.
#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub init: Option<Box<Stmt>>,
    pub condition: Option<Expr>,
    pub increments: Vec<Expr>,
    pub body: Box<Stmt>,
}

impl ForStmt {
    pub fn children(&self) -> Vec<Node<'_>> {
        let mut out = child_list([
            self.init.as_deref().map(Node::Stmt),
            self.condition.as_ref().map(Node::Expr),
        ]);
        out.extend(self.increments.iter().map(Node::Expr));
        out.push(Node::Stmt(&self.body));
        out
    }
}

/// `foreach (Type name in source) body`.
#[derive(Debug, Clone, PartialEq)]
pub struct ForeachStmt {
    pub element_type: Option<TypeReference>,
    pub name: Symbol,
    pub source: Expr,
    pub body: Box<Stmt>,
}

/// A function declared inside a method body, scoped to it.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalFunctionStmt {
    pub name: Symbol,
    pub return_type: TypeReference,
    pub parameters: crate::support::ParameterList,
    pub body: Block,
}

impl LocalFunctionStmt {
    pub fn children(&self) -> Vec<Node<'_>> {
        let mut out = self.parameters.children();
        out.extend(self.body.children());
        out
    }
}
