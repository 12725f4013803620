//! Schema manipulation statements
//!
//! ALTER TABLE and ALTER DOMAIN carry exactly one action each. Rejecting a
//! builder state with several pending actions happens before a node is
//! constructed; the node itself cannot hold more than one.

use super::extension::{DialectNode, Extensions};
use super::ident::{Ident, QualifiedIdent};
use super::schema::{
    ColumnDefinition, DefaultOption, DomainConstraintDefinition, TableConstraintDefinition,
};

/// CASCADE / RESTRICT
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropBehavior {
    Cascade,
    Restrict,
}

impl DropBehavior {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Cascade => "CASCADE",
            Self::Restrict => "RESTRICT",
        }
    }
}

/// The action inside `ALTER COLUMN`
#[derive(Debug, Clone, PartialEq)]
pub enum AlterColumnAction {
    SetDefault(DefaultOption),
    DropDefault,
}

/// The single action of an ALTER TABLE statement
#[derive(Debug, Clone, PartialEq)]
pub enum AlterTableAction {
    /// ADD COLUMN <definition>
    AddColumn(ColumnDefinition),
    /// ALTER COLUMN "c" SET DEFAULT .. | DROP DEFAULT
    AlterColumn {
        column: Ident,
        action: AlterColumnAction,
    },
    /// DROP COLUMN "c" CASCADE|RESTRICT
    DropColumn { column: Ident, behavior: DropBehavior },
    /// ADD <table constraint>
    AddConstraint(TableConstraintDefinition),
    /// DROP CONSTRAINT "n" CASCADE|RESTRICT
    DropConstraint { name: Ident, behavior: DropBehavior },
}

/// ALTER TABLE
#[derive(Debug, Clone, PartialEq)]
pub struct AlterTable {
    pub name: QualifiedIdent,
    pub action: AlterTableAction,
    pub extensions: Extensions,
}

impl AlterTable {
    pub fn new(name: impl Into<QualifiedIdent>, action: AlterTableAction) -> Self {
        Self {
            name: name.into(),
            action,
            extensions: None,
        }
    }

    pub fn with_extensions(mut self, node: DialectNode) -> Self {
        self.extensions = Some(node);
        self
    }
}

/// The single action of an ALTER DOMAIN statement
#[derive(Debug, Clone, PartialEq)]
pub enum AlterDomainAction {
    SetDefault(DefaultOption),
    DropDefault,
    AddConstraint(DomainConstraintDefinition),
    DropConstraint(Ident),
}

/// ALTER DOMAIN
#[derive(Debug, Clone, PartialEq)]
pub struct AlterDomain {
    pub name: QualifiedIdent,
    pub action: AlterDomainAction,
    pub extensions: Extensions,
}

impl AlterDomain {
    pub fn new(name: impl Into<QualifiedIdent>, action: AlterDomainAction) -> Self {
        Self {
            name: name.into(),
            action,
            extensions: None,
        }
    }
}

/// The object kind a DROP statement removes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropKind {
    Schema,
    Table,
    View,
    Domain,
}

impl DropKind {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Schema => "SCHEMA",
            Self::Table => "TABLE",
            Self::View => "VIEW",
            Self::Domain => "DOMAIN",
        }
    }
}

/// DROP SCHEMA|TABLE|VIEW|DOMAIN "n" CASCADE|RESTRICT
#[derive(Debug, Clone, PartialEq)]
pub struct DropStatement {
    pub kind: DropKind,
    pub name: QualifiedIdent,
    pub behavior: DropBehavior,
    pub extensions: Extensions,
}

impl DropStatement {
    pub fn new(kind: DropKind, name: impl Into<QualifiedIdent>, behavior: DropBehavior) -> Self {
        Self {
            kind,
            name: name.into(),
            behavior,
            extensions: None,
        }
    }
}
