//! sharpc-util - Core utilities and foundation types shared across the
//! workspace: string interning, source positions, diagnostics, typed
//! indices, and the error enums used to construct richer error types
//! downstream.
//!
//! None of these types know anything about C# syntax; they are the
//! plumbing every other crate in the workspace builds on.

pub mod def_id;
pub mod diagnostic;
pub mod error;
pub mod index_vec;
pub mod span;
pub mod symbol;

pub use def_id::{DefId, DefIdGenerator};
pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet};
pub use error::{DiagnosticError, IndexVecError, SourceMapError, SymbolError};
pub use index_vec::{Idx, IndexVec};
pub use span::{FileId, SourceFile, SourceMap, Span};
pub use symbol::{InternerStats, Symbol};

pub use rustc_hash::FxHashMap;
pub use rustc_hash::FxHashSet;
