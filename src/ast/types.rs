//! SQL data types
//!
//! This module defines the scalar and parameterized types a column, domain or
//! `CAST` can name. Lengths and precisions are optional and rendered only
//! when present.

use super::extension::DialectNode;
use super::ident::QualifiedIdent;

/// A SQL data type
#[derive(Debug, Clone, PartialEq)]
pub enum DataType {
    /// `CHAR[(n)]`
    Char { length: Option<u32> },
    /// `VARCHAR[(n)]`
    VarChar { length: Option<u32> },
    /// `TEXT`
    Text,
    /// `NUMERIC[(p[, s])]`
    Numeric { precision: Option<u32>, scale: Option<u32> },
    /// `DECIMAL[(p[, s])]`
    Decimal { precision: Option<u32>, scale: Option<u32> },
    SmallInt,
    Integer,
    BigInt,
    /// `FLOAT[(p)]`
    Float { precision: Option<u32> },
    Real,
    DoublePrecision,
    Boolean,
    Date,
    /// `TIME[(p)] [WITH TIME ZONE]`
    Time {
        precision: Option<u32>,
        with_time_zone: bool,
    },
    /// `TIMESTAMP[(p)] [WITH TIME ZONE]`
    Timestamp {
        precision: Option<u32>,
        with_time_zone: bool,
    },
    /// Dialect-defined type
    Custom(DialectNode),
}

impl DataType {
    pub fn char(length: u32) -> Self {
        Self::Char {
            length: Some(length),
        }
    }

    pub fn varchar(length: u32) -> Self {
        Self::VarChar {
            length: Some(length),
        }
    }

    pub fn numeric(precision: u32, scale: u32) -> Self {
        Self::Numeric {
            precision: Some(precision),
            scale: Some(scale),
        }
    }

    pub fn decimal(precision: u32, scale: u32) -> Self {
        Self::Decimal {
            precision: Some(precision),
            scale: Some(scale),
        }
    }

    pub fn time() -> Self {
        Self::Time {
            precision: None,
            with_time_zone: false,
        }
    }

    pub fn timestamp() -> Self {
        Self::Timestamp {
            precision: None,
            with_time_zone: false,
        }
    }

    /// Add `WITH TIME ZONE` to a time or timestamp type; other types are unchanged
    pub fn with_time_zone(self) -> Self {
        match self {
            Self::Time { precision, .. } => Self::Time {
                precision,
                with_time_zone: true,
            },
            Self::Timestamp { precision, .. } => Self::Timestamp {
                precision,
                with_time_zone: true,
            },
            other => other,
        }
    }

    /// The type's keyword, without length, precision or zone suffixes
    ///
    /// Returns `None` for dialect-defined types.
    pub fn keyword(&self) -> Option<&'static str> {
        Some(match self {
            Self::Char { .. } => "CHAR",
            Self::VarChar { .. } => "VARCHAR",
            Self::Text => "TEXT",
            Self::Numeric { .. } => "NUMERIC",
            Self::Decimal { .. } => "DECIMAL",
            Self::SmallInt => "SMALLINT",
            Self::Integer => "INTEGER",
            Self::BigInt => "BIGINT",
            Self::Float { .. } => "FLOAT",
            Self::Real => "REAL",
            Self::DoublePrecision => "DOUBLE PRECISION",
            Self::Boolean => "BOOLEAN",
            Self::Date => "DATE",
            Self::Time { .. } => "TIME",
            Self::Timestamp { .. } => "TIMESTAMP",
            Self::Custom(_) => return None,
        })
    }
}

/// The type slot of a column: a data type or a domain name, never both
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnType {
    DataType(DataType),
    Domain(QualifiedIdent),
}

impl From<DataType> for ColumnType {
    fn from(data_type: DataType) -> Self {
        Self::DataType(data_type)
    }
}

impl From<QualifiedIdent> for ColumnType {
    fn from(domain: QualifiedIdent) -> Self {
        Self::Domain(domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords() {
        assert_eq!(DataType::BigInt.keyword(), Some("BIGINT"));
        assert_eq!(DataType::varchar(20).keyword(), Some("VARCHAR"));
        assert_eq!(DataType::DoublePrecision.keyword(), Some("DOUBLE PRECISION"));
        assert_eq!(DataType::Custom(DialectNode::new("pg.jsonb", ())).keyword(), None);
    }

    #[test]
    fn test_with_time_zone() {
        assert_eq!(
            DataType::timestamp().with_time_zone(),
            DataType::Timestamp {
                precision: None,
                with_time_zone: true
            }
        );
        assert_eq!(DataType::Date.with_time_zone(), DataType::Date);
    }
}
