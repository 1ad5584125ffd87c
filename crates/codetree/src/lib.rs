//! # codetree
//!
//! Closed-variant syntax trees that render themselves into exact source text.
//!
//! ## Families
//!
//! - [`go`]: Go fragments (literals, composite literals, statements, idioms
//!   such as `if err != nil { return err }`)
//! - [`sql`]: SQL fragments (identifiers, value expressions, boolean
//!   predicates, joins, `DELETE` statements)
//!
//! Every node implements [`Node`]. A tree is built by value, then walked once
//! by [`write`] or [`to_string`]; nodes coordinate layout only through the
//! [`Writer`] cursor and through their own flags (such as `compact` or
//! `list_style`).
//!
//! ## Example
//!
//! ```
//! use codetree::sql::{BoolOpExpr, BoolValueExprList, ColumnIdent};
//!
//! let cond = BoolValueExprList::new(ColumnIdent::new("a")?)
//!     .item(BoolOpExpr::and(ColumnIdent::new("b")?))
//!     .item(BoolOpExpr::or_not(ColumnIdent::new("c")?));
//!
//! assert_eq!(codetree::to_string(&cond)?, r#""a" AND "b" OR NOT "c""#);
//! # Ok::<(), codetree::Error>(())
//! ```

/// Implement `From<$node>` for a capability enum, one line per node kind.
macro_rules! impl_capability {
    ($cap:ident { $($node:ty => $variant:ident),+ $(,)? }) => {
        $(
            impl From<$node> for $cap {
                fn from(node: $node) -> Self {
                    $cap::$variant(node.into())
                }
            }
        )+
    };
}

pub(crate) use impl_capability;

pub mod config;
pub mod error;
pub mod go;
pub mod node;
pub mod sql;
pub mod writer;

pub use config::{IndentStyle, LineEnding, WriterConfig};
pub use error::{Error, Result};
pub use node::{Node, NodeList, NodeSlice, to_string, to_string_with, write, write_with};
pub use writer::Writer;
