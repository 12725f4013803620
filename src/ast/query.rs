//! Query types
//!
//! A [`Query`] is a primary [`Select`] plus the clauses that wrap it: common
//! table expressions in front, set operations, ordering, LIMIT and OFFSET
//! behind. Set-operation suffixes all apply at the same nesting level; there
//! is no explicit grouping of unions.

use super::cte::CommonTableExpr;
use super::expr::Expr;
use super::extension::{DialectNode, Extensions};
use super::ident::{Ident, QualifiedIdent};

/// A complete query expression
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// WITH clause
    pub ctes: Vec<CommonTableExpr>,
    pub selection: Select,
    /// UNION / INTERSECT / EXCEPT suffixes, left to right
    pub set_ops: Vec<SetOp>,
    /// ORDER BY clause
    pub ordering: Vec<OrderingExpr>,
    pub limit: Option<Expr>,
    pub offset: Option<Expr>,
    pub extensions: Extensions,
}

impl Query {
    /// Wrap a select with no surrounding clauses
    pub fn new(selection: Select) -> Self {
        Self {
            ctes: Vec::new(),
            selection,
            set_ops: Vec::new(),
            ordering: Vec::new(),
            limit: None,
            offset: None,
            extensions: None,
        }
    }

    pub fn with_ctes(mut self, ctes: Vec<CommonTableExpr>) -> Self {
        self.ctes = ctes;
        self
    }

    pub fn with_cte(mut self, cte: CommonTableExpr) -> Self {
        self.ctes.push(cte);
        self
    }

    /// Append a `UNION [ALL]` suffix
    pub fn union(self, select: Select, all: bool) -> Self {
        self.with_set_op(SetOp::new(SetOpKind::Union, all, select))
    }

    /// Append an `INTERSECT [ALL]` suffix
    pub fn intersect(self, select: Select, all: bool) -> Self {
        self.with_set_op(SetOp::new(SetOpKind::Intersect, all, select))
    }

    /// Append an `EXCEPT [ALL]` suffix
    pub fn except(self, select: Select, all: bool) -> Self {
        self.with_set_op(SetOp::new(SetOpKind::Except, all, select))
    }

    pub fn with_set_op(mut self, op: SetOp) -> Self {
        self.set_ops.push(op);
        self
    }

    pub fn with_ordering(mut self, ordering: Vec<OrderingExpr>) -> Self {
        self.ordering = ordering;
        self
    }

    pub fn with_limit(mut self, limit: Expr) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_offset(mut self, offset: Expr) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_extensions(mut self, node: DialectNode) -> Self {
        self.extensions = Some(node);
        self
    }
}

impl From<Select> for Query {
    fn from(selection: Select) -> Self {
        Self::new(selection)
    }
}

/// A single SELECT block
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Select {
    pub selections: Vec<Selection>,
    /// FROM clause with its joins
    pub from: Option<JoinedTable>,
    /// WHERE clause
    pub where_clause: Option<Expr>,
    /// GROUP BY clause
    pub group_by: Vec<Expr>,
    /// HAVING clause
    pub having: Option<Expr>,
    pub extensions: Extensions,
}

impl Select {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a SELECT with the given selections
    pub fn columns(selections: Vec<Selection>) -> Self {
        Self {
            selections,
            ..Default::default()
        }
    }

    /// `SELECT *`
    pub fn star() -> Self {
        Self::columns(vec![Selection::Anonymous(Expr::Wildcard)])
    }

    pub fn with_from(mut self, from: impl Into<JoinedTable>) -> Self {
        self.from = Some(from.into());
        self
    }

    pub fn with_where(mut self, expr: Expr) -> Self {
        self.where_clause = Some(expr);
        self
    }

    pub fn with_group_by(mut self, group_by: Vec<Expr>) -> Self {
        self.group_by = group_by;
        self
    }

    pub fn with_having(mut self, expr: Expr) -> Self {
        self.having = Some(expr);
        self
    }

    pub fn with_extensions(mut self, node: DialectNode) -> Self {
        self.extensions = Some(node);
        self
    }

    /// Promote to a query with no surrounding clauses
    pub fn into_query(self) -> Query {
        Query::new(self)
    }
}

/// An entry in the selection list
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// A bare expression
    Anonymous(Expr),
    /// expr AS alias
    Aliased { expr: Expr, alias: Ident },
}

impl Selection {
    pub fn expr(expr: Expr) -> Self {
        Self::Anonymous(expr)
    }

    pub fn aliased(expr: Expr, alias: impl Into<Ident>) -> Self {
        Self::Aliased {
            expr,
            alias: alias.into(),
        }
    }
}

/// Set operation keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOpKind {
    Union,
    Intersect,
    Except,
}

impl SetOpKind {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Union => "UNION",
            Self::Intersect => "INTERSECT",
            Self::Except => "EXCEPT",
        }
    }
}

/// A set operation suffix: `UNION [ALL] SELECT ...`
#[derive(Debug, Clone, PartialEq)]
pub struct SetOp {
    pub kind: SetOpKind,
    pub all: bool,
    pub select: Select,
    pub extensions: Extensions,
}

impl SetOp {
    pub fn new(kind: SetOpKind, all: bool, select: Select) -> Self {
        Self {
            kind,
            all,
            select,
            extensions: None,
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// NULLS FIRST / NULLS LAST
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullsOrder {
    First,
    Last,
}

impl NullsOrder {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::First => "NULLS FIRST",
            Self::Last => "NULLS LAST",
        }
    }
}

/// ORDER BY expression
#[derive(Debug, Clone, PartialEq)]
pub struct OrderingExpr {
    pub expr: Expr,
    pub direction: Option<SortDirection>,
    pub nulls: Option<NullsOrder>,
    pub extensions: Extensions,
}

impl OrderingExpr {
    pub fn new(expr: Expr) -> Self {
        Self {
            expr,
            direction: None,
            nulls: None,
            extensions: None,
        }
    }

    pub fn with_extensions(mut self, node: DialectNode) -> Self {
        self.extensions = Some(node);
        self
    }

    pub fn asc(expr: Expr) -> Self {
        Self {
            direction: Some(SortDirection::Asc),
            ..Self::new(expr)
        }
    }

    pub fn desc(expr: Expr) -> Self {
        Self {
            direction: Some(SortDirection::Desc),
            ..Self::new(expr)
        }
    }

    pub fn nulls_first(mut self) -> Self {
        self.nulls = Some(NullsOrder::First);
        self
    }

    pub fn nulls_last(mut self) -> Self {
        self.nulls = Some(NullsOrder::Last);
        self
    }
}

/// A row source in FROM or JOIN
#[derive(Debug, Clone, PartialEq)]
pub enum TableRef {
    /// A named table
    Basic(QualifiedIdent),
    /// (subquery) AS alias
    Derived { query: Box<Query>, alias: Ident },
    /// (expr) AS alias
    Function { expr: Box<Expr>, alias: Ident },
    /// Dialect-defined row source
    Custom(DialectNode),
}

impl TableRef {
    /// Create a named table reference
    pub fn table(name: impl Into<QualifiedIdent>) -> Self {
        Self::Basic(name.into())
    }

    pub fn derived(query: Query, alias: impl Into<Ident>) -> Self {
        Self::Derived {
            query: Box::new(query),
            alias: alias.into(),
        }
    }

    pub fn function(expr: Expr, alias: impl Into<Ident>) -> Self {
        Self::Function {
            expr: Box::new(expr),
            alias: alias.into(),
        }
    }
}

impl From<&str> for TableRef {
    fn from(name: &str) -> Self {
        Self::Basic(QualifiedIdent::from(name))
    }
}

impl From<QualifiedIdent> for TableRef {
    fn from(name: QualifiedIdent) -> Self {
        Self::Basic(name)
    }
}

/// Join kinds
#[derive(Debug, Clone, PartialEq)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
    Full,
    /// Dialect-defined join kind; its handler writes the keywords before `JOIN`
    Custom(DialectNode),
}

impl JoinKind {
    /// The keywords preceding `JOIN`, or `None` for a dialect kind
    pub fn as_sql(&self) -> Option<&'static str> {
        match self {
            Self::Inner => Some("INNER"),
            Self::Left => Some("LEFT OUTER"),
            Self::Right => Some("RIGHT OUTER"),
            Self::Full => Some("FULL OUTER"),
            Self::Custom(_) => None,
        }
    }
}

/// ` <KIND> JOIN <table> ON <condition>`
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub kind: JoinKind,
    pub table: TableRef,
    pub on: Expr,
    pub extensions: Extensions,
}

impl Join {
    pub fn new(kind: JoinKind, table: impl Into<TableRef>, on: Expr) -> Self {
        Self {
            kind,
            table: table.into(),
            on,
            extensions: None,
        }
    }
}

/// The FROM target: one table followed by its joins
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedTable {
    pub table: TableRef,
    pub joins: Vec<Join>,
    pub extensions: Extensions,
}

impl JoinedTable {
    pub fn new(table: impl Into<TableRef>) -> Self {
        Self {
            table: table.into(),
            joins: Vec::new(),
            extensions: None,
        }
    }

    pub fn with_extensions(mut self, node: DialectNode) -> Self {
        self.extensions = Some(node);
        self
    }

    pub fn join(mut self, join: Join) -> Self {
        self.joins.push(join);
        self
    }

    pub fn inner_join(self, table: impl Into<TableRef>, on: Expr) -> Self {
        self.join(Join::new(JoinKind::Inner, table, on))
    }

    pub fn left_join(self, table: impl Into<TableRef>, on: Expr) -> Self {
        self.join(Join::new(JoinKind::Left, table, on))
    }

    pub fn right_join(self, table: impl Into<TableRef>, on: Expr) -> Self {
        self.join(Join::new(JoinKind::Right, table, on))
    }

    pub fn full_join(self, table: impl Into<TableRef>, on: Expr) -> Self {
        self.join(Join::new(JoinKind::Full, table, on))
    }
}

impl From<TableRef> for JoinedTable {
    fn from(table: TableRef) -> Self {
        Self::new(table)
    }
}

impl From<&str> for JoinedTable {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_builder() {
        let select = Select::star()
            .with_from("employee")
            .with_where(Expr::ident("age").gt(Expr::int(50)));

        assert_eq!(select.selections.len(), 1);
        assert!(select.from.is_some());
        assert!(select.where_clause.is_some());
        assert!(select.extensions.is_none());
    }

    #[test]
    fn test_set_ops_keep_order() {
        let query = Select::star()
            .into_query()
            .union(Select::star(), true)
            .except(Select::star(), false);

        let kinds: Vec<_> = query.set_ops.iter().map(|op| (op.kind, op.all)).collect();
        assert_eq!(kinds, vec![(SetOpKind::Union, true), (SetOpKind::Except, false)]);
    }

    #[test]
    fn test_joins_append() {
        let from = JoinedTable::new("a")
            .left_join("b", Expr::compound(["a", "id"]).eq(Expr::compound(["b", "a_id"])))
            .inner_join("c", Expr::bool(true));

        assert_eq!(from.joins.len(), 2);
        assert_eq!(from.joins[0].kind.as_sql(), Some("LEFT OUTER"));
        assert_eq!(from.joins[1].kind.as_sql(), Some("INNER"));
    }

    #[test]
    fn test_ordering_expr() {
        let o = OrderingExpr::desc(Expr::ident("age")).nulls_last();
        assert_eq!(o.direction, Some(SortDirection::Desc));
        assert_eq!(o.nulls, Some(NullsOrder::Last));
    }
}
