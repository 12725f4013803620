//! SQL statement types
//!
//! This module defines the top-level [`Statement`] enum covering queries,
//! schema definition, schema manipulation, privileges, and the
//! data-manipulation statements INSERT, UPDATE, DELETE.

use super::alter::{AlterDomain, AlterTable, DropStatement};
use super::expr::Expr;
use super::extension::{DialectNode, Extensions};
use super::ident::{Ident, QualifiedIdent};
use super::query::Query;
use super::schema::{
    DomainDefinition, GrantStatement, RevokeStatement, SchemaDefinition, TableDefinition,
    ViewDefinition,
};

/// Top-level SQL statement
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Query(Query),
    CreateSchema(SchemaDefinition),
    CreateTable(TableDefinition),
    CreateView(ViewDefinition),
    CreateDomain(DomainDefinition),
    Grant(GrantStatement),
    Revoke(RevokeStatement),
    AlterTable(AlterTable),
    AlterDomain(AlterDomain),
    Drop(DropStatement),
    Insert(InsertStmt),
    Update(UpdateStmt),
    Delete(DeleteStmt),
}

impl Statement {
    /// Short name of the statement kind, used in log events
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Query(_) => "Query",
            Self::CreateSchema(_) => "SchemaDefinition",
            Self::CreateTable(_) => "TableDefinition",
            Self::CreateView(_) => "ViewDefinition",
            Self::CreateDomain(_) => "DomainDefinition",
            Self::Grant(_) => "GrantStatement",
            Self::Revoke(_) => "RevokeStatement",
            Self::AlterTable(_) => "AlterTable",
            Self::AlterDomain(_) => "AlterDomain",
            Self::Drop(_) => "Drop",
            Self::Insert(_) => "Insert",
            Self::Update(_) => "Update",
            Self::Delete(_) => "Delete",
        }
    }
}

macro_rules! impl_from_statement {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Statement {
                fn from(stmt: $ty) -> Self {
                    Self::$variant(stmt)
                }
            }
        )*
    };
}

impl_from_statement! {
    Query => Query,
    SchemaDefinition => CreateSchema,
    TableDefinition => CreateTable,
    ViewDefinition => CreateView,
    DomainDefinition => CreateDomain,
    GrantStatement => Grant,
    RevokeStatement => Revoke,
    AlterTable => AlterTable,
    AlterDomain => AlterDomain,
    DropStatement => Drop,
    InsertStmt => Insert,
    UpdateStmt => Update,
    DeleteStmt => Delete,
}

/// A value slot in INSERT or UPDATE: an expression or the `DEFAULT` keyword
#[derive(Debug, Clone, PartialEq)]
pub enum ValueOrDefault {
    Value(Expr),
    Default,
}

impl From<Expr> for ValueOrDefault {
    fn from(expr: Expr) -> Self {
        Self::Value(expr)
    }
}

/// Values for INSERT statement
#[derive(Debug, Clone, PartialEq)]
pub enum InsertValues {
    /// VALUES (row1), (row2), ...
    Values(Vec<Vec<ValueOrDefault>>),
    /// INSERT ... SELECT ...
    Query(Box<Query>),
    /// DEFAULT VALUES
    DefaultValues,
}

/// INSERT statement
#[derive(Debug, Clone, PartialEq)]
pub struct InsertStmt {
    /// Target table
    pub table: QualifiedIdent,
    /// Target columns
    pub columns: Vec<Ident>,
    /// Values to insert
    pub values: InsertValues,
    pub extensions: Extensions,
}

impl InsertStmt {
    pub fn new(table: impl Into<QualifiedIdent>, columns: Vec<Ident>, values: InsertValues) -> Self {
        Self {
            table: table.into(),
            columns,
            values,
            extensions: None,
        }
    }

    /// INSERT with a single VALUES row of plain expressions
    pub fn row(table: impl Into<QualifiedIdent>, columns: Vec<Ident>, row: Vec<Expr>) -> Self {
        Self::new(
            table,
            columns,
            InsertValues::Values(vec![row.into_iter().map(ValueOrDefault::Value).collect()]),
        )
    }

    pub fn with_extensions(mut self, node: DialectNode) -> Self {
        self.extensions = Some(node);
        self
    }
}

/// UPDATE statement
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateStmt {
    /// Target table
    pub table: QualifiedIdent,
    /// SET clause: column = value pairs
    pub assignments: Vec<(Ident, ValueOrDefault)>,
    /// WHERE clause
    pub where_clause: Option<Expr>,
    pub extensions: Extensions,
}

impl UpdateStmt {
    pub fn new(table: impl Into<QualifiedIdent>, assignments: Vec<(Ident, ValueOrDefault)>) -> Self {
        Self {
            table: table.into(),
            assignments,
            where_clause: None,
            extensions: None,
        }
    }

    pub fn with_where(mut self, expr: Expr) -> Self {
        self.where_clause = Some(expr);
        self
    }
}

/// DELETE statement
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteStmt {
    /// Target table
    pub table: QualifiedIdent,
    /// WHERE clause
    pub where_clause: Option<Expr>,
    pub extensions: Extensions,
}

impl DeleteStmt {
    pub fn new(table: impl Into<QualifiedIdent>) -> Self {
        Self {
            table: table.into(),
            where_clause: None,
            extensions: None,
        }
    }

    pub fn with_where(mut self, expr: Expr) -> Self {
        self.where_clause = Some(expr);
        self
    }
}
