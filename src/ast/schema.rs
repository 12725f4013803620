//! Schema definition statements
//!
//! CREATE SCHEMA / TABLE / VIEW / DOMAIN, the constraints that hang off
//! columns, tables and domains, column defaults, and GRANT / REVOKE.
//!
//! Nodes store their fields verbatim. Cross-field invariants (a non-empty
//! unique column list, a non-empty grantee list) are left to whoever builds
//! the tree.

use super::alter::DropBehavior;
use super::expr::{Expr, Literal};
use super::extension::{DialectNode, Extensions};
use super::ident::{Ident, QualifiedIdent};
use super::query::Query;
use super::types::{ColumnType, DataType};

// =============================================================================
// Constraints
// =============================================================================

/// `INITIALLY {DEFERRED|IMMEDIATE} {DEFERRABLE|NOT DEFERRABLE}`
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintCheckTime {
    pub initially_deferred: bool,
    pub deferrable: bool,
    pub extensions: Extensions,
}

impl ConstraintCheckTime {
    pub fn new(initially_deferred: bool, deferrable: bool) -> Self {
        Self {
            initially_deferred,
            deferrable,
            extensions: None,
        }
    }

    pub fn with_extensions(mut self, node: DialectNode) -> Self {
        self.extensions = Some(node);
        self
    }
}

/// A constraint with its optional name and check-time attribute
///
/// `C` is the payload family: [`ColumnConstraint`], [`TableConstraint`] or,
/// for domains, [`CheckConstraint`].
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintDefinition<C> {
    /// Renders as a `CONSTRAINT "name"` prefix when present
    pub name: Option<Ident>,
    pub constraint: C,
    pub check_time: Option<ConstraintCheckTime>,
    pub extensions: Extensions,
}

impl<C> ConstraintDefinition<C> {
    /// An unnamed constraint with no check-time attribute
    pub fn new(constraint: C) -> Self {
        Self {
            name: None,
            constraint,
            check_time: None,
            extensions: None,
        }
    }

    pub fn named(name: impl Into<Ident>, constraint: C) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new(constraint)
        }
    }

    pub fn with_check_time(mut self, check_time: ConstraintCheckTime) -> Self {
        self.check_time = Some(check_time);
        self
    }

    pub fn with_extensions(mut self, node: DialectNode) -> Self {
        self.extensions = Some(node);
        self
    }
}

/// `UNIQUE` or `PRIMARY KEY`, optionally with an explicit column list
///
/// Attached to a column the list is usually empty; at table level it names
/// the covered columns.
#[derive(Debug, Clone, PartialEq)]
pub struct UniqueConstraint {
    pub primary_key: bool,
    pub columns: Vec<Ident>,
    pub extensions: Extensions,
}

impl UniqueConstraint {
    pub fn unique(columns: Vec<Ident>) -> Self {
        Self {
            primary_key: false,
            columns,
            extensions: None,
        }
    }

    pub fn primary_key(columns: Vec<Ident>) -> Self {
        Self {
            primary_key: true,
            ..Self::unique(columns)
        }
    }

    pub fn with_extensions(mut self, node: DialectNode) -> Self {
        self.extensions = Some(node);
        self
    }
}

/// `MATCH` clause of a reference constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    /// No MATCH clause
    Regular,
    Full,
    Partial,
}

/// ON UPDATE / ON DELETE actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferentialAction {
    Cascade,
    SetNull,
    SetDefault,
    NoAction,
}

impl ReferentialAction {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Cascade => "CASCADE",
            Self::SetNull => "SET NULL",
            Self::SetDefault => "SET DEFAULT",
            Self::NoAction => "NO ACTION",
        }
    }
}

/// `[FOREIGN KEY (cols)] REFERENCES "t" [(cols)] [MATCH ..] [ON UPDATE ..] [ON DELETE ..]`
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceConstraint {
    /// Local columns; empty for a column-level reference
    pub referencing: Vec<Ident>,
    pub table: QualifiedIdent,
    /// Target columns; empty means the target's primary key
    pub columns: Vec<Ident>,
    pub match_type: MatchType,
    pub on_update: Option<ReferentialAction>,
    pub on_delete: Option<ReferentialAction>,
    pub extensions: Extensions,
}

impl ReferenceConstraint {
    pub fn new(table: impl Into<QualifiedIdent>, columns: Vec<Ident>) -> Self {
        Self {
            referencing: Vec::new(),
            table: table.into(),
            columns,
            match_type: MatchType::Regular,
            on_update: None,
            on_delete: None,
            extensions: None,
        }
    }

    /// Table-level foreign key from `referencing` to `table(columns)`
    pub fn foreign_key(
        referencing: Vec<Ident>,
        table: impl Into<QualifiedIdent>,
        columns: Vec<Ident>,
    ) -> Self {
        Self {
            referencing,
            ..Self::new(table, columns)
        }
    }

    pub fn with_match(mut self, match_type: MatchType) -> Self {
        self.match_type = match_type;
        self
    }

    pub fn on_update(mut self, action: ReferentialAction) -> Self {
        self.on_update = Some(action);
        self
    }

    pub fn on_delete(mut self, action: ReferentialAction) -> Self {
        self.on_delete = Some(action);
        self
    }

    pub fn with_extensions(mut self, node: DialectNode) -> Self {
        self.extensions = Some(node);
        self
    }
}

/// `CHECK (search)`
#[derive(Debug, Clone, PartialEq)]
pub struct CheckConstraint {
    pub search: Expr,
}

impl CheckConstraint {
    pub fn new(search: Expr) -> Self {
        Self { search }
    }
}

/// Constraints that can be attached to a column
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnConstraint {
    NotNull,
    Unique(UniqueConstraint),
    References(ReferenceConstraint),
    Check(CheckConstraint),
    Custom(DialectNode),
}

/// Constraints declared at table level
#[derive(Debug, Clone, PartialEq)]
pub enum TableConstraint {
    Unique(UniqueConstraint),
    References(ReferenceConstraint),
    Check(CheckConstraint),
    Custom(DialectNode),
}

pub type ColumnConstraintDefinition = ConstraintDefinition<ColumnConstraint>;
pub type TableConstraintDefinition = ConstraintDefinition<TableConstraint>;
pub type DomainConstraintDefinition = ConstraintDefinition<CheckConstraint>;

// =============================================================================
// Defaults
// =============================================================================

/// The value of a `DEFAULT` clause
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultOption {
    Literal(Literal),
    CurrentDate,
    /// CURRENT_TIME[(p)]
    CurrentTime(Option<u32>),
    /// CURRENT_TIMESTAMP[(p)]
    CurrentTimestamp(Option<u32>),
    User,
    CurrentUser,
    SessionUser,
    SystemUser,
    Null,
}

impl From<Literal> for DefaultOption {
    fn from(lit: Literal) -> Self {
        Self::Literal(lit)
    }
}

// =============================================================================
// Definitions
// =============================================================================

/// CREATE SCHEMA
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDefinition {
    pub name: QualifiedIdent,
    pub authorization: Option<Ident>,
    pub character_set: Option<QualifiedIdent>,
    /// Nested definitions, rendered space-separated after the header
    pub elements: Vec<SchemaElement>,
    pub extensions: Extensions,
}

impl SchemaDefinition {
    pub fn new(name: impl Into<QualifiedIdent>) -> Self {
        Self {
            name: name.into(),
            authorization: None,
            character_set: None,
            elements: Vec::new(),
            extensions: None,
        }
    }

    pub fn with_authorization(mut self, owner: impl Into<Ident>) -> Self {
        self.authorization = Some(owner.into());
        self
    }

    pub fn with_character_set(mut self, charset: impl Into<QualifiedIdent>) -> Self {
        self.character_set = Some(charset.into());
        self
    }

    pub fn with_element(mut self, element: impl Into<SchemaElement>) -> Self {
        self.elements.push(element.into());
        self
    }
}

/// A definition that may appear inside CREATE SCHEMA
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaElement {
    Table(TableDefinition),
    View(ViewDefinition),
    Domain(DomainDefinition),
    Grant(GrantStatement),
}

impl From<TableDefinition> for SchemaElement {
    fn from(def: TableDefinition) -> Self {
        Self::Table(def)
    }
}

impl From<ViewDefinition> for SchemaElement {
    fn from(def: ViewDefinition) -> Self {
        Self::View(def)
    }
}

impl From<DomainDefinition> for SchemaElement {
    fn from(def: DomainDefinition) -> Self {
        Self::Domain(def)
    }
}

impl From<GrantStatement> for SchemaElement {
    fn from(grant: GrantStatement) -> Self {
        Self::Grant(grant)
    }
}

/// Table persistence mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableMode {
    #[default]
    Persistent,
    GlobalTemp,
    LocalTemp,
}

/// ON COMMIT behaviour of a temporary table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnCommit {
    Delete,
    Preserve,
}

/// CREATE TABLE
#[derive(Debug, Clone, PartialEq)]
pub struct TableDefinition {
    pub name: QualifiedIdent,
    pub mode: TableMode,
    pub columns: Vec<ColumnDefinition>,
    pub constraints: Vec<TableConstraintDefinition>,
    pub on_commit: Option<OnCommit>,
    pub extensions: Extensions,
}

impl TableDefinition {
    pub fn new(name: impl Into<QualifiedIdent>, columns: Vec<ColumnDefinition>) -> Self {
        Self {
            name: name.into(),
            mode: TableMode::Persistent,
            columns,
            constraints: Vec::new(),
            on_commit: None,
            extensions: None,
        }
    }

    pub fn with_mode(mut self, mode: TableMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_constraint(mut self, constraint: TableConstraintDefinition) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn with_on_commit(mut self, on_commit: OnCommit) -> Self {
        self.on_commit = Some(on_commit);
        self
    }

    pub fn with_extensions(mut self, node: DialectNode) -> Self {
        self.extensions = Some(node);
        self
    }
}

/// A column inside CREATE TABLE or ALTER TABLE ADD COLUMN
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDefinition {
    pub name: Ident,
    pub column_type: ColumnType,
    pub default: Option<DefaultOption>,
    pub constraints: Vec<ColumnConstraintDefinition>,
    pub collation: Option<QualifiedIdent>,
    pub extensions: Extensions,
}

impl ColumnDefinition {
    pub fn new(name: impl Into<Ident>, column_type: impl Into<ColumnType>) -> Self {
        Self {
            name: name.into(),
            column_type: column_type.into(),
            default: None,
            constraints: Vec::new(),
            collation: None,
            extensions: None,
        }
    }

    pub fn with_default(mut self, default: DefaultOption) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_constraint(mut self, constraint: ColumnConstraintDefinition) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Add an unnamed column constraint
    pub fn with(self, constraint: ColumnConstraint) -> Self {
        self.with_constraint(ConstraintDefinition::new(constraint))
    }

    pub fn not_null(self) -> Self {
        self.with(ColumnConstraint::NotNull)
    }

    pub fn primary_key(self) -> Self {
        self.with(ColumnConstraint::Unique(UniqueConstraint::primary_key(vec![])))
    }

    pub fn unique(self) -> Self {
        self.with(ColumnConstraint::Unique(UniqueConstraint::unique(vec![])))
    }

    pub fn with_collation(mut self, collation: impl Into<QualifiedIdent>) -> Self {
        self.collation = Some(collation.into());
        self
    }
}

/// `WITH {CASCADED|LOCAL} CHECK OPTION`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOption {
    Cascaded,
    Local,
}

/// CREATE VIEW
#[derive(Debug, Clone, PartialEq)]
pub struct ViewDefinition {
    pub name: QualifiedIdent,
    /// Explicit column names; empty means none
    pub columns: Vec<Ident>,
    pub query: Query,
    pub check_option: Option<CheckOption>,
    pub extensions: Extensions,
}

impl ViewDefinition {
    pub fn new(name: impl Into<QualifiedIdent>, query: impl Into<Query>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            query: query.into(),
            check_option: None,
            extensions: None,
        }
    }

    pub fn with_columns(mut self, columns: Vec<Ident>) -> Self {
        self.columns = columns;
        self
    }

    pub fn with_check_option(mut self, option: CheckOption) -> Self {
        self.check_option = Some(option);
        self
    }
}

/// CREATE DOMAIN
#[derive(Debug, Clone, PartialEq)]
pub struct DomainDefinition {
    pub name: QualifiedIdent,
    pub data_type: DataType,
    pub default: Option<DefaultOption>,
    pub constraints: Vec<DomainConstraintDefinition>,
    pub collation: Option<QualifiedIdent>,
    pub extensions: Extensions,
}

impl DomainDefinition {
    pub fn new(name: impl Into<QualifiedIdent>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            default: None,
            constraints: Vec::new(),
            collation: None,
            extensions: None,
        }
    }

    pub fn with_default(mut self, default: DefaultOption) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_constraint(mut self, constraint: DomainConstraintDefinition) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn with_collation(mut self, collation: impl Into<QualifiedIdent>) -> Self {
        self.collation = Some(collation.into());
        self
    }
}

// =============================================================================
// Privileges
// =============================================================================

/// A grantable privilege
///
/// Column-scoped privileges render their column list only when it is
/// present and non-empty.
#[derive(Debug, Clone, PartialEq)]
pub enum Privilege {
    Select,
    Delete,
    Usage,
    Insert(Option<Vec<Ident>>),
    Update(Option<Vec<Ident>>),
    References(Option<Vec<Ident>>),
}

impl Privilege {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::Delete => "DELETE",
            Self::Usage => "USAGE",
            Self::Insert(_) => "INSERT",
            Self::Update(_) => "UPDATE",
            Self::References(_) => "REFERENCES",
        }
    }

    pub fn columns(&self) -> Option<&[Ident]> {
        match self {
            Self::Insert(cols) | Self::Update(cols) | Self::References(cols) => {
                cols.as_deref().filter(|c| !c.is_empty())
            }
            _ => None,
        }
    }
}

/// The kind of object a privilege applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObjectKind {
    #[default]
    Table,
    Domain,
    Collation,
    CharacterSet,
    Translation,
}

impl ObjectKind {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Table => "TABLE",
            Self::Domain => "DOMAIN",
            Self::Collation => "COLLATION",
            Self::CharacterSet => "CHARACTER SET",
            Self::Translation => "TRANSLATION",
        }
    }
}

/// GRANT
#[derive(Debug, Clone, PartialEq)]
pub struct GrantStatement {
    /// `None` means ALL PRIVILEGES
    pub privileges: Option<Vec<Privilege>>,
    pub object: QualifiedIdent,
    pub object_kind: ObjectKind,
    /// `None` means PUBLIC
    pub grantees: Option<Vec<Ident>>,
    pub grant_option: bool,
    pub extensions: Extensions,
}

impl GrantStatement {
    pub fn new(
        privileges: Option<Vec<Privilege>>,
        object_kind: ObjectKind,
        object: impl Into<QualifiedIdent>,
    ) -> Self {
        Self {
            privileges,
            object: object.into(),
            object_kind,
            grantees: None,
            grant_option: false,
            extensions: None,
        }
    }

    pub fn to(mut self, grantees: Vec<Ident>) -> Self {
        self.grantees = Some(grantees);
        self
    }

    pub fn with_grant_option(mut self) -> Self {
        self.grant_option = true;
        self
    }
}

/// REVOKE
#[derive(Debug, Clone, PartialEq)]
pub struct RevokeStatement {
    /// `None` means ALL PRIVILEGES
    pub privileges: Option<Vec<Privilege>>,
    pub object: QualifiedIdent,
    pub object_kind: ObjectKind,
    /// `None` means PUBLIC
    pub grantees: Option<Vec<Ident>>,
    /// Revoke only the grant option (`REVOKE GRANT OPTION FOR ...`)
    pub grant_option: bool,
    pub behavior: DropBehavior,
    pub extensions: Extensions,
}

impl RevokeStatement {
    pub fn new(
        privileges: Option<Vec<Privilege>>,
        object_kind: ObjectKind,
        object: impl Into<QualifiedIdent>,
        behavior: DropBehavior,
    ) -> Self {
        Self {
            privileges,
            object: object.into(),
            object_kind,
            grantees: None,
            grant_option: false,
            behavior,
            extensions: None,
        }
    }

    pub fn from(mut self, grantees: Vec<Ident>) -> Self {
        self.grantees = Some(grantees);
        self
    }

    pub fn grant_option_for(mut self) -> Self {
        self.grant_option = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{idents, DataType};

    #[test]
    fn test_column_definition_builder() {
        let col = ColumnDefinition::new("id", DataType::BigInt).primary_key();
        assert_eq!(col.constraints.len(), 1);
        assert!(matches!(
            &col.constraints[0].constraint,
            ColumnConstraint::Unique(UniqueConstraint { primary_key: true, columns, .. }) if columns.is_empty()
        ));
        assert!(col.default.is_none());
    }

    #[test]
    fn test_domain_column_type() {
        let col = ColumnDefinition::new("price", QualifiedIdent::from("money_amount"));
        assert!(matches!(col.column_type, ColumnType::Domain(_)));
    }

    #[test]
    fn test_privilege_columns() {
        assert_eq!(Privilege::Insert(None).columns(), None);
        assert_eq!(Privilege::Update(Some(vec![])).columns(), None);
        let cols = idents(["a"]);
        assert_eq!(Privilege::References(Some(cols.clone())).columns(), Some(&cols[..]));
        assert_eq!(Privilege::Select.keyword(), "SELECT");
    }

    #[test]
    fn test_named_constraint() {
        let c = ConstraintDefinition::named("foo", CheckConstraint::new(Expr::bool(true)))
            .with_check_time(ConstraintCheckTime::new(true, true));
        assert_eq!(c.name.as_ref().map(Ident::as_str), Some("foo"));
        assert_eq!(c.check_time, Some(ConstraintCheckTime::new(true, true)));
    }
}
