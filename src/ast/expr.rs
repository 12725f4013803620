//! SQL expression types
//!
//! This module defines all SQL expression types that can appear in queries and
//! schema statements. Expressions nest arbitrarily; parentheses are never
//! inferred from operator precedence and must be added explicitly with
//! [`Expr::Parenthesized`].

use super::extension::DialectNode;
use super::ident::{CompoundIdent, Ident, QualifiedIdent};
use super::query::Query;
use super::types::DataType;

/// A numeric literal, kept exactly as supplied
///
/// Textual numbers are never reparsed, so `1.50` and `1e3` render as written.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
    /// Exact textual representation (e.g. a decimal beyond `f64` precision)
    Text(String),
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Self::Integer(n as i64)
    }
}

impl From<f64> for Number {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

/// SQL literal values
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Number(Number),
    /// String literal, wrapped in single quotes when rendered
    String(String),
    Bool(bool),
    Null,
}

impl Literal {
    pub fn string(s: impl Into<String>) -> Self {
        Self::String(s.into())
    }

    pub fn number(n: impl Into<Number>) -> Self {
        Self::Number(n.into())
    }

    /// A numeric literal from its exact textual form
    pub fn numeric_text(s: impl Into<String>) -> Self {
        Self::Number(Number::Text(s.into()))
    }
}

/// Binary operators
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    // Comparison
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Logical
    And,
    Or,

    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,

    // String
    Concat,
    Like,
    NotLike,

    /// Any other operator, rendered verbatim
    Custom(String),
}

impl BinaryOperator {
    /// Get the SQL representation of this operator
    pub fn as_sql(&self) -> &str {
        match self {
            Self::Eq => "=",
            Self::NotEq => "<>",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Concat => "||",
            Self::Like => "LIKE",
            Self::NotLike => "NOT LIKE",
            Self::Custom(op) => op,
        }
    }
}

/// Unary (prefix) operators
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    Not,
    Neg,
    Plus,
    /// Any other prefix, rendered verbatim and directly before the operand
    Custom(String),
}

impl UnaryOperator {
    pub fn as_sql(&self) -> &str {
        match self {
            Self::Not => "NOT ",
            Self::Neg => "-",
            Self::Plus => "+",
            Self::Custom(op) => op,
        }
    }
}

/// Field names accepted by `EXTRACT`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateTimeField {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    TimezoneHour,
    TimezoneMinute,
}

impl DateTimeField {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Year => "YEAR",
            Self::Month => "MONTH",
            Self::Day => "DAY",
            Self::Hour => "HOUR",
            Self::Minute => "MINUTE",
            Self::Second => "SECOND",
            Self::TimezoneHour => "TIMEZONE_HOUR",
            Self::TimezoneMinute => "TIMEZONE_MINUTE",
        }
    }
}

/// One `WHEN ... THEN ...` arm of a CASE expression
#[derive(Debug, Clone, PartialEq)]
pub struct CaseWhen {
    pub condition: Expr,
    pub result: Expr,
}

/// CASE expression
#[derive(Debug, Clone, PartialEq)]
pub struct CaseExpr {
    /// CASE <operand> (simple case) vs CASE WHEN (searched case)
    pub operand: Option<Box<Expr>>,
    pub cases: Vec<CaseWhen>,
    pub else_case: Option<Box<Expr>>,
}

impl CaseExpr {
    /// Create a searched CASE expression (CASE WHEN ... THEN ...)
    pub fn searched(cases: Vec<(Expr, Expr)>, else_case: Option<Expr>) -> Self {
        Self {
            operand: None,
            cases: cases
                .into_iter()
                .map(|(condition, result)| CaseWhen { condition, result })
                .collect(),
            else_case: else_case.map(Box::new),
        }
    }

    /// Create a simple CASE expression (CASE x WHEN ... THEN ...)
    pub fn simple(operand: Expr, cases: Vec<(Expr, Expr)>, else_case: Option<Expr>) -> Self {
        Self {
            operand: Some(Box::new(operand)),
            ..Self::searched(cases, else_case)
        }
    }
}

/// The main expression enum encompassing all SQL expression types
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A bare name: `"col"`
    Ident(Ident),

    /// A qualified name: `"t"."col"`
    CompoundIdentifier(CompoundIdent),

    /// `*`
    Wildcard,

    /// `"t".*`; an empty qualifier list renders as a plain `*`
    QualifiedWildcard(Vec<Ident>),

    /// Binary operation: expr op expr
    BinaryApp {
        left: Box<Expr>,
        op: BinaryOperator,
        right: Box<Expr>,
    },

    /// Prefix operation: op expr
    UnaryApp { op: UnaryOperator, expr: Box<Expr> },

    /// expr [NOT] BETWEEN low AND high
    Between {
        expr: Box<Expr>,
        negated: bool,
        low: Box<Expr>,
        high: Box<Expr>,
    },

    Case(CaseExpr),

    /// CAST(expr AS type)
    Cast {
        expr: Box<Expr>,
        data_type: DataType,
    },

    /// expr COLLATE collation
    Collate {
        expr: Box<Expr>,
        collation: QualifiedIdent,
    },

    /// EXISTS(subquery)
    Exists(Box<Query>),

    /// EXTRACT(field FROM source)
    Extract {
        field: DateTimeField,
        source: Box<Expr>,
    },

    /// Function application; the name is itself an expression
    FunctionApp { name: Box<Expr>, args: Vec<Expr> },

    /// IS NULL / IS NOT NULL
    IsNull { expr: Box<Expr>, negated: bool },

    /// expr [NOT] IN (values)
    InList {
        expr: Box<Expr>,
        list: Vec<Expr>,
        negated: bool,
    },

    /// expr [NOT] IN (subquery)
    InSubQuery {
        expr: Box<Expr>,
        query: Box<Query>,
        negated: bool,
    },

    /// Literal value
    Lit(Literal),

    /// Parenthesized expression (for explicit grouping)
    Parenthesized(Box<Expr>),

    /// Scalar subquery: (SELECT ...)
    SubQuery(Box<Query>),

    /// Dialect-defined expression
    Custom(DialectNode),
}

impl Expr {
    // Convenience constructors

    /// Create a bare identifier reference
    pub fn ident(name: impl Into<Ident>) -> Self {
        Self::Ident(name.into())
    }

    /// Create a qualified reference from its segments
    pub fn compound<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Ident>,
    {
        Self::CompoundIdentifier(CompoundIdent(
            segments.into_iter().map(Into::into).collect(),
        ))
    }

    /// `table.*`
    pub fn qualified_wildcard(table: impl Into<Ident>) -> Self {
        Self::QualifiedWildcard(vec![table.into()])
    }

    /// Create a NULL literal
    pub fn null() -> Self {
        Self::Lit(Literal::Null)
    }

    /// Create a boolean literal
    pub fn bool(b: bool) -> Self {
        Self::Lit(Literal::Bool(b))
    }

    /// Create an integer literal
    pub fn int(n: i64) -> Self {
        Self::Lit(Literal::Number(Number::Integer(n)))
    }

    /// Create a numeric literal from its exact text
    pub fn numeric(text: impl Into<String>) -> Self {
        Self::Lit(Literal::numeric_text(text))
    }

    /// Create a string literal
    pub fn string(s: impl Into<String>) -> Self {
        Self::Lit(Literal::String(s.into()))
    }

    /// Create a binary operation
    pub fn binary(left: Expr, op: BinaryOperator, right: Expr) -> Self {
        Self::BinaryApp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Create a prefix operation
    pub fn unary(op: UnaryOperator, expr: Expr) -> Self {
        Self::UnaryApp {
            op,
            expr: Box::new(expr),
        }
    }

    /// Create a NOT expression
    pub fn not(expr: Expr) -> Self {
        Self::unary(UnaryOperator::Not, expr)
    }

    /// Create an IS NULL expression
    pub fn is_null(expr: Expr) -> Self {
        Self::IsNull {
            expr: Box::new(expr),
            negated: false,
        }
    }

    /// Create an IS NOT NULL expression
    pub fn is_not_null(expr: Expr) -> Self {
        Self::IsNull {
            expr: Box::new(expr),
            negated: true,
        }
    }

    pub fn between(expr: Expr, low: Expr, high: Expr) -> Self {
        Self::Between {
            expr: Box::new(expr),
            negated: false,
            low: Box::new(low),
            high: Box::new(high),
        }
    }

    pub fn in_list(expr: Expr, list: Vec<Expr>) -> Self {
        Self::InList {
            expr: Box::new(expr),
            list,
            negated: false,
        }
    }

    pub fn in_subquery(expr: Expr, query: Query) -> Self {
        Self::InSubQuery {
            expr: Box::new(expr),
            query: Box::new(query),
            negated: false,
        }
    }

    pub fn exists(query: Query) -> Self {
        Self::Exists(Box::new(query))
    }

    pub fn subquery(query: Query) -> Self {
        Self::SubQuery(Box::new(query))
    }

    /// Create a type cast
    pub fn cast(expr: Expr, data_type: DataType) -> Self {
        Self::Cast {
            expr: Box::new(expr),
            data_type,
        }
    }

    pub fn collate(expr: Expr, collation: impl Into<QualifiedIdent>) -> Self {
        Self::Collate {
            expr: Box::new(expr),
            collation: collation.into(),
        }
    }

    pub fn extract(field: DateTimeField, source: Expr) -> Self {
        Self::Extract {
            field,
            source: Box::new(source),
        }
    }

    /// Create a function application with a plain identifier name
    pub fn function(name: impl Into<Ident>, args: Vec<Expr>) -> Self {
        Self::FunctionApp {
            name: Box::new(Self::Ident(name.into())),
            args,
        }
    }

    /// Wrap in parentheses
    pub fn parenthesized(self) -> Self {
        Self::Parenthesized(Box::new(self))
    }

    /// Combine with AND
    pub fn and(self, other: Expr) -> Self {
        Self::binary(self, BinaryOperator::And, other)
    }

    /// Combine with OR
    pub fn or(self, other: Expr) -> Self {
        Self::binary(self, BinaryOperator::Or, other)
    }

    /// Check equality
    pub fn eq(self, other: Expr) -> Self {
        Self::binary(self, BinaryOperator::Eq, other)
    }

    pub fn gt(self, other: Expr) -> Self {
        Self::binary(self, BinaryOperator::Gt, other)
    }

    pub fn lt(self, other: Expr) -> Self {
        Self::binary(self, BinaryOperator::Lt, other)
    }
}

impl From<Literal> for Expr {
    fn from(lit: Literal) -> Self {
        Self::Lit(lit)
    }
}

impl From<Ident> for Expr {
    fn from(ident: Ident) -> Self {
        Self::Ident(ident)
    }
}

impl From<QualifiedIdent> for Expr {
    fn from(name: QualifiedIdent) -> Self {
        match name {
            QualifiedIdent::Simple(ident) => Self::Ident(ident),
            QualifiedIdent::Compound(compound) => Self::CompoundIdentifier(compound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expr_constructors() {
        let expr = Expr::compound(["t", "id"]);
        match expr {
            Expr::CompoundIdentifier(c) => {
                assert_eq!(c.segments()[0].as_str(), "t");
                assert_eq!(c.segments()[1].as_str(), "id");
            }
            _ => panic!("Expected CompoundIdentifier"),
        }

        let expr = Expr::int(42);
        match expr {
            Expr::Lit(Literal::Number(Number::Integer(n))) => assert_eq!(n, 42),
            _ => panic!("Expected Integer"),
        }
    }

    #[test]
    fn test_binary_app() {
        let expr = Expr::ident("age").gt(Expr::int(50));
        match expr {
            Expr::BinaryApp { op, .. } => assert_eq!(op, BinaryOperator::Gt),
            _ => panic!("Expected BinaryApp"),
        }
    }

    #[test]
    fn test_operator_sql() {
        assert_eq!(BinaryOperator::NotEq.as_sql(), "<>");
        assert_eq!(BinaryOperator::Custom("@>".into()).as_sql(), "@>");
        assert_eq!(UnaryOperator::Not.as_sql(), "NOT ");
        assert_eq!(DateTimeField::TimezoneHour.as_sql(), "TIMEZONE_HOUR");
    }

    #[test]
    fn test_simple_case_keeps_arms() {
        let case = CaseExpr::simple(
            Expr::ident("x"),
            vec![(Expr::int(1), Expr::string("one"))],
            None,
        );
        assert!(case.operand.is_some());
        assert_eq!(case.cases.len(), 1);
        assert!(case.else_case.is_none());
    }

    #[test]
    fn test_qualified_ident_into_expr() {
        let expr: Expr = QualifiedIdent::parse_dotted("hr.employees").into();
        assert!(matches!(expr, Expr::CompoundIdentifier(_)));
    }
}
