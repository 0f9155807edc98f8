//! Expression node kinds.
//!
//! Operators are tagged data (`BinaryExpr { op, lhs, rhs }`) rather than one
//! variant per operator: a single `Binary`/`Unary` case covers the whole
//! family, and `BinOp`/`UnOp` carry which specific operator it is. This
//! keeps the match in any visitor exhaustive over a small variant set
//! instead of growing one arm per operator symbol.

use crate::children::{child_list, Node};
use crate::support::{ArgumentList, TypeArgumentsList, TypeReference};
use sharpc_lex::NumericValue;
use sharpc_util::symbol::Symbol;
use std::fmt;

/// The closed set of expression kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    NumericLiteral(NumericLiteralExpr),
    BooleanLiteral(bool),
    StringLiteral(String),
    Identifier(Symbol),
    Parenthesized(Box<Expr>),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    MemberAccess(MemberAccessExpr),
    ElementAccess(ElementAccessExpr),
    Invocation(InvocationExpr),
    ObjectCreation(ObjectCreationExpr),
    GenericName(GenericNameExpr),
    Ternary(TernaryExpr),
}

impl Expr {
    /// Test/example helper: a numeric literal expression from a raw lexeme,
    /// narrowed the same way the lexer narrows integers.
    pub fn numeric_i32(lexeme: &str) -> Self {
        Expr::NumericLiteral(NumericLiteralExpr {
            lexeme: lexeme.to_string(),
            value: NumericValue::I32(lexeme.parse().unwrap_or(0)),
        })
    }

    pub fn identifier(name: &str) -> Self {
        Expr::Identifier(Symbol::intern(name))
    }

    /// The ordered list of this expression's structural child expressions.
    /// Literals and identifiers have none; compound expressions expose
    /// their operand(s) in source order.
    pub fn children(&self) -> Vec<Node<'_>> {
        match self {
            Expr::NumericLiteral(_)
            | Expr::BooleanLiteral(_)
            | Expr::StringLiteral(_)
            | Expr::Identifier(_) => Vec::new(),
            Expr::Parenthesized(inner) => vec![Node::Expr(inner)],
            Expr::Unary(u) => vec![Node::Expr(&u.operand)],
            Expr::Binary(b) => vec![Node::Expr(&b.lhs), Node::Expr(&b.rhs)],
            Expr::MemberAccess(m) => vec![Node::Expr(&m.target)],
            Expr::ElementAccess(e) => child_list(
                std::iter::once(Some(Node::Expr(&e.target))).chain(e.arguments.children().into_iter().map(Some)),
            ),
            Expr::Invocation(i) => child_list(
                std::iter::once(Some(Node::Expr(&i.callee))).chain(i.arguments.children().into_iter().map(Some)),
            ),
            Expr::ObjectCreation(o) => o.arguments.children(),
            Expr::GenericName(_) => Vec::new(),
            Expr::Ternary(t) => vec![
                Node::Expr(&t.condition),
                Node::Expr(&t.when_true),
                Node::Expr(&t.when_false),
            ],
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::NumericLiteral(n) => write!(f, "{}", n.lexeme),
            Expr::BooleanLiteral(b) => write!(f, "{b}"),
            Expr::StringLiteral(s) => write!(f, "{s:?}"),
            Expr::Identifier(name) => write!(f, "{name}"),
            Expr::Parenthesized(inner) => write!(f, "({inner})"),
            Expr::Unary(u) if u.is_prefix => write!(f, "{}{}", u.op.symbol(), u.operand),
            Expr::Unary(u) => write!(f, "{}{}", u.operand, u.op.symbol()),
            Expr::Binary(b) => write!(f, "{} {} {}", b.lhs, b.op.symbol(), b.rhs),
            Expr::MemberAccess(m) => write!(f, "{}.{}", m.target, m.member),
            Expr::ElementAccess(e) => write!(f, "{}{}", e.target, e.arguments),
            Expr::Invocation(i) => write!(f, "{}{}", i.callee, i.arguments),
            Expr::ObjectCreation(o) => write!(f, "new {}{}", o.ty, o.arguments),
            Expr::GenericName(g) => write!(f, "{}{}", g.name, g.type_arguments),
            Expr::Ternary(t) => write!(f, "{} ? {} : {}", t.condition, t.when_true, t.when_false),
        }
    }
}

/// A numeric literal: the original lexeme plus its narrowed parsed value.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericLiteralExpr {
    pub lexeme: String,
    pub value: NumericValue,
}

/// Prefix or postfix unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    Negate,
    LogicalNot,
    Increment,
    Decrement,
}

impl UnOp {
    pub fn symbol(self) -> &'static str {
        match self {
            UnOp::Negate => "-",
            UnOp::LogicalNot => "!",
            UnOp::Increment => "++",
            UnOp::Decrement => "--",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub op: UnOp,
    pub operand: Box<Expr>,
    pub is_prefix: bool,
}

/// Arithmetic, comparison, logical, and (compound-)assignment operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Eq,
    Neq,
    Lt,
    Lte,
    Gt,
    Gte,
    And,
    Or,
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    ModAssign,
    AndAssign,
    OrAssign,
}

impl BinOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Mod => "%",
            BinOp::Eq => "==",
            BinOp::Neq => "!=",
            BinOp::Lt => "<",
            BinOp::Lte => "<=",
            BinOp::Gt => ">",
            BinOp::Gte => ">=",
            BinOp::And => "&&",
            BinOp::Or => "||",
            BinOp::Assign => "=",
            BinOp::AddAssign => "+=",
            BinOp::SubAssign => "-=",
            BinOp::MulAssign => "*=",
            BinOp::DivAssign => "/=",
            BinOp::ModAssign => "%=",
            BinOp::AndAssign => "&=",
            BinOp::OrAssign => "|=",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub op: BinOp,
    pub lhs: Box<Expr>,
    pub rhs: Box<Expr>,
}

/// `target.member`.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberAccessExpr {
    pub target: Box<Expr>,
    pub member: Symbol,
}

/// `target[arguments]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementAccessExpr {
    pub target: Box<Expr>,
    pub arguments: ArgumentList,
}

/// `callee(arguments)`.
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationExpr {
    pub callee: Box<Expr>,
    pub arguments: ArgumentList,
}

/// `new Type(arguments)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectCreationExpr {
    pub ty: TypeReference,
    pub arguments: ArgumentList,
}

/// A bare generic name used as a value expression (`List<int>` as a type
/// argument to another call, e.g. `typeof(List<int>)`), distinct from
/// `ObjectCreationExpr` which always carries a constructor argument list.
#[derive(Debug, Clone, PartialEq)]
pub struct GenericNameExpr {
    pub name: Symbol,
    pub type_arguments: TypeArgumentsList,
}

/// `condition ? when_true : when_false`.
#[derive(Debug, Clone, PartialEq)]
pub struct TernaryExpr {
    pub condition: Box<Expr>,
    pub when_true: Box<Expr>,
    pub when_false: Box<Expr>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_expressions_have_no_children() {
        assert!(Expr::numeric_i32("1").children().is_empty());
        assert!(Expr::BooleanLiteral(true).children().is_empty());
        assert!(Expr::StringLiteral("hi".to_string()).children().is_empty());
        assert!(Expr::identifier("x").children().is_empty());
    }

    #[test]
    fn test_binary_expr_children_in_order() {
        let expr = Expr::Binary(BinaryExpr {
            op: BinOp::Add,
            lhs: Box::new(Expr::identifier("a")),
            rhs: Box::new(Expr::identifier("b")),
        });
        assert_eq!(expr.children().len(), 2);
    }

    #[test]
    fn test_binary_expr_renders_with_operator_symbol() {
        let expr = Expr::Binary(BinaryExpr {
            op: BinOp::Eq,
            lhs: Box::new(Expr::identifier("a")),
            rhs: Box::new(Expr::identifier("b")),
        });
        assert_eq!(expr.to_string(), "a == b");
    }

    #[test]
    fn test_prefix_vs_postfix_unary_rendering() {
        let prefix = Expr::Unary(UnaryExpr {
            op: UnOp::Increment,
            operand: Box::new(Expr::identifier("x")),
            is_prefix: true,
        });
        let postfix = Expr::Unary(UnaryExpr {
            op: UnOp::Increment,
            operand: Box::new(Expr::identifier("x")),
            is_prefix: false,
        });
        assert_eq!(prefix.to_string(), "++x");
        assert_eq!(postfix.to_string(), "x++");
    }

    #[test]
    fn test_invocation_children_include_callee_and_arguments() {
        let expr = Expr::Invocation(InvocationExpr {
            callee: Box::new(Expr::identifier("foo")),
            arguments: ArgumentList::new(vec![crate::support::Argument::positional(
                Expr::numeric_i32("1"),
            )]),
        });
        assert_eq!(expr.children().len(), 2);
    }

    #[test]
    fn test_ternary_renders_all_three_branches() {
        let expr = Expr::Ternary(TernaryExpr {
            condition: Box::new(Expr::identifier("ok")),
            when_true: Box::new(Expr::numeric_i32("1")),
            when_false: Box::new(Expr::numeric_i32("0")),
        });
        assert_eq!(expr.to_string(), "ok ? 1 : 0");
        assert_eq!(expr.children().len(), 3);
    }

    #[test]
    fn test_member_access_child_is_target_only() {
        let expr = Expr::MemberAccess(MemberAccessExpr {
            target: Box::new(Expr::identifier("obj")),
            member: Symbol::intern("Field"),
        });
        assert_eq!(expr.to_string(), "obj.Field");
        assert_eq!(expr.children().len(), 1);
    }
}
