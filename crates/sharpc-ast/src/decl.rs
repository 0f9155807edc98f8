//! Type declaration node kinds: class, struct, interface, enum, and record,
//! plus their member lists.

use crate::children::Node;
use crate::expr::Expr;
use crate::stmt::Block;
use crate::support::{ParameterList, TypeReference};
use sharpc_util::symbol::Symbol;

/// `public`, `private`, `protected`, `internal`, or a C# compound
/// modifier (`protected internal`, `private protected`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accessibility {
    Public,
    Private,
    Protected,
    Internal,
    ProtectedInternal,
    PrivateProtected,
}

/// Non-accessibility modifiers that can appear on a type or member
/// declaration. Kept as a flag set rather than a bitfield so the common
/// case (no modifiers) doesn't need a default-value dance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub is_static: bool,
    pub is_abstract: bool,
    pub is_sealed: bool,
    pub is_virtual: bool,
    pub is_override: bool,
    pub is_readonly: bool,
    pub is_partial: bool,
    pub is_async: bool,
}

/// The closed set of type declaration kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    Class(ClassDecl),
    Struct(StructDecl),
    Interface(InterfaceDecl),
    Enum(EnumDecl),
    Record(RecordDecl),
}

impl Decl {
    pub fn name(&self) -> Symbol {
        match self {
            Decl::Class(d) => d.name,
            Decl::Struct(d) => d.name,
            Decl::Interface(d) => d.name,
            Decl::Enum(d) => d.name,
            Decl::Record(d) => d.name,
        }
    }

    /// The ordered list of this declaration's members, each exposed
    /// uniformly as a `Node` regardless of the declaration kind.
    pub fn children(&self) -> Vec<Node<'_>> {
        match self {
            Decl::Class(d) => d.members.iter().flat_map(Member::children).collect(),
            Decl::Struct(d) => d.members.iter().flat_map(Member::children).collect(),
            Decl::Interface(d) => d.members.iter().flat_map(Member::children).collect(),
            Decl::Enum(d) => d
                .members
                .iter()
                .filter_map(|m| m.value.as_ref().map(Node::Expr))
                .collect(),
            Decl::Record(d) => d.members.iter().flat_map(Member::children).collect(),
        }
    }
}

/// Fields shared by class/struct/interface/record headers: the parts of a
/// type declaration that exist regardless of its kind.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeHeader {
    pub accessibility: Accessibility,
    pub modifiers: Modifiers,
    pub base_types: Vec<TypeReference>,
}

impl Default for TypeHeader {
    fn default() -> Self {
        Self {
            accessibility: Accessibility::Private,
            modifiers: Modifiers::default(),
            base_types: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    pub name: Symbol,
    pub header: TypeHeader,
    pub members: Vec<Member>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructDecl {
    pub name: Symbol,
    pub header: TypeHeader,
    pub members: Vec<Member>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceDecl {
    pub name: Symbol,
    pub header: TypeHeader,
    pub members: Vec<Member>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumDecl {
    pub name: Symbol,
    pub header: TypeHeader,
    pub members: Vec<EnumMember>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumMember {
    pub name: Symbol,
    pub value: Option<Expr>,
}

/// `record Name(params...) : Base;` — a positional-parameter record, the
/// common C# form. A record's "members" are still a regular member list
/// (records can also carry a body with additional members).
#[derive(Debug, Clone, PartialEq)]
pub struct RecordDecl {
    pub name: Symbol,
    pub header: TypeHeader,
    pub parameters: ParameterList,
    pub members: Vec<Member>,
}

/// The closed set of member kinds that can appear in a class/struct/
/// interface/record body.
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    Field(FieldMember),
    Property(PropertyMember),
    Method(MethodMember),
    Constructor(ConstructorMember),
}

impl Member {
    pub fn children(&self) -> Vec<Node<'_>> {
        match self {
            Member::Field(f) => f.initializer.iter().map(Node::Expr).collect(),
            Member::Property(p) => p.children(),
            Member::Method(m) => {
                let mut out = m.parameters.children();
                if let Some(body) = &m.body {
                    out.extend(body.children());
                }
                out
            }
            Member::Constructor(c) => {
                let mut out = c.parameters.children();
                out.extend(c.body.children());
                out
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldMember {
    pub accessibility: Accessibility,
    pub modifiers: Modifiers,
    pub ty: TypeReference,
    pub name: Symbol,
    pub initializer: Option<Expr>,
}

/// A property's accessor bodies. Auto-implemented properties
/// (`{ get; set; }`) carry no bodies; block/expression-bodied properties do.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyAccessors {
    Auto { has_setter: bool, init_only: bool },
    Block { getter: Option<Block>, setter: Option<Block>, init_only: bool },
    ExpressionBodied(Expr),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyMember {
    pub accessibility: Accessibility,
    pub modifiers: Modifiers,
    pub ty: TypeReference,
    pub name: Symbol,
    pub accessors: PropertyAccessors,
}

impl PropertyMember {
    pub fn children(&self) -> Vec<Node<'_>> {
        match &self.accessors {
            PropertyAccessors::Auto { .. } => Vec::new(),
            PropertyAccessors::Block { getter, setter, .. } => {
                let mut out = Vec::new();
                if let Some(g) = getter {
                    out.extend(g.children());
                }
                if let Some(s) = setter {
                    out.extend(s.children());
                }
                out
            }
            PropertyAccessors::ExpressionBodied(e) => vec![Node::Expr(e)],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodMember {
    pub accessibility: Accessibility,
    pub modifiers: Modifiers,
    pub return_type: TypeReference,
    pub name: Symbol,
    pub parameters: ParameterList,
    /// `None` for an abstract/interface method with no body.
    pub body: Option<Block>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConstructorMember {
    pub accessibility: Accessibility,
    pub parameters: ParameterList,
    pub body: Block,
}
