//! SQL Abstract Syntax Tree (AST) module
//!
//! This module provides a typed representation of SQL statements that can be
//! constructed programmatically and rendered to SQL strings, either as plain
//! text or as text with `$n` placeholders plus an ordered list of values.
//!
//! # Architecture
//!
//! The AST is built from several components:
//!
//! - [`ident`]: quoted identifiers, simple and compound
//! - [`expr`]: SQL expressions (identifiers, literals, operators, functions)
//! - [`query`]: queries, selects, joins and table references
//! - [`cte`]: Common Table Expressions (WITH clauses)
//! - [`types`]: SQL data types
//! - [`schema`]: CREATE statements, constraints, defaults, GRANT / REVOKE
//! - [`alter`]: ALTER and DROP statements
//! - [`stmt`]: the top-level statement enum and INSERT / UPDATE / DELETE
//! - [`extension`]: dialect payloads and their render handlers
//! - [`params`]: Parameter handling for parameters mode
//! - [`render`]: SQL string generation
//!
//! # Example
//!
//! ```rust
//! use sqltree::ast::*;
//!
//! let query = Select::star()
//!     .with_from("employee")
//!     .with_where(Expr::ident("age").gt(Expr::int(50)))
//!     .into_query();
//!
//! let rendered = Renderer::params_mode().render_query(&query).unwrap();
//! assert_eq!(rendered.sql, "SELECT * FROM \"employee\" WHERE \"age\" > $1");
//! assert_eq!(rendered.params, vec![ParamValue::Integer(50)]);
//! ```

pub mod alter;
pub mod cte;
pub mod expr;
pub mod extension;
pub mod ident;
pub mod params;
pub mod query;
pub mod render;
mod render_ddl;
pub mod schema;
pub mod stmt;
pub mod types;

// Re-export all public types
pub use alter::*;
pub use cte::*;
pub use expr::*;
pub use extension::*;
pub use ident::*;
pub use params::*;
pub use query::*;
pub use render::*;
pub use schema::*;
pub use stmt::*;
pub use types::*;
