//! Common Table Expression (CTE) support
//!
//! A CTE names a subquery, optionally renaming its columns, so that the rest
//! of the enclosing query can refer to it like a table.

use super::extension::{DialectNode, Extensions};
use super::ident::Ident;
use super::query::{Query, Select};

/// A Common Table Expression in a WITH clause
#[derive(Debug, Clone, PartialEq)]
pub struct CommonTableExpr {
    /// Name of the CTE
    pub name: Ident,
    /// Column renames: WITH cte(col1, col2) AS (...); empty means none
    pub columns: Vec<Ident>,
    /// The query that defines the CTE
    pub query: Box<Query>,
    pub extensions: Extensions,
}

impl CommonTableExpr {
    pub fn new(name: impl Into<Ident>, query: impl Into<Query>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            query: Box::new(query.into()),
            extensions: None,
        }
    }

    /// Create a CTE from a bare select
    pub fn select(name: impl Into<Ident>, select: Select) -> Self {
        Self::new(name, select)
    }

    /// Add column aliases to the CTE
    pub fn with_columns(mut self, columns: Vec<impl Into<Ident>>) -> Self {
        self.columns = columns.into_iter().map(|c| c.into()).collect();
        self
    }

    pub fn with_extensions(mut self, node: DialectNode) -> Self {
        self.extensions = Some(node);
        self
    }
}
