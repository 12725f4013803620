//! sqltree: a SQL syntax tree and renderer
//!
//! Statements are built as plain values from the [`ast`] module and turned
//! into SQL text by a [`Renderer`](ast::Renderer). Rendering is pure: the
//! same tree always yields the same text, and a tree can be rendered from
//! several threads at once.
//!
//! Dialect-specific syntax plugs in through [`DialectNode`](ast::DialectNode)
//! payloads and handlers registered in an
//! [`ExtensionRegistry`](ast::ExtensionRegistry); a payload without a handler
//! fails the render instead of being dropped.

pub mod ast;
pub mod batch;
pub mod error;
pub mod telemetry;

pub use ast::{render, render_with_params, RenderOptions, RenderedSql, Renderer};
pub use error::{RenderError, RenderResult};
