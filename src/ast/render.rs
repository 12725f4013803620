//! SQL string rendering
//!
//! This module turns expressions and queries into SQL text. Statement
//! rendering lives in the sibling `render_ddl` module and writes through the
//! same [`SqlRenderer`] context.
//!
//! # Architecture
//!
//! The rendering system is built around three components:
//!
//! - [`Render`] trait: Implemented by AST nodes to define how they render to SQL
//! - [`Renderer`]: Immutable configuration (options plus dialect handlers),
//!   shareable across threads
//! - [`SqlRenderer`]: The per-call rendering context that owns the output
//!   buffer, the parameter list and the recursion depth
//!
//! # Quoting
//!
//! Every identifier is wrapped in double quotes, with embedded double quotes
//! doubled. String literals are wrapped in single quotes; whether embedded
//! single quotes are escaped is the [`LiteralEscaping`] policy of the
//! renderer.

use std::fmt::Write;

use super::cte::CommonTableExpr;
use super::expr::*;
use super::extension::{DialectNode, ExtensionRegistry, Extensions};
use super::ident::{CompoundIdent, Ident, QualifiedIdent};
use super::params::{ParamCollector, ParamValue};
use super::query::*;
use super::stmt::Statement;
use super::types::DataType;
use crate::error::{RenderError, RenderResult};
use crate::telemetry::{LogLevel, RenderTimer};

// =============================================================================
// Render Trait
// =============================================================================

/// Trait for AST nodes that can be rendered to SQL.
///
/// This trait allows each AST node type to define its own rendering logic
/// while sharing the common [`SqlRenderer`] infrastructure.
///
/// # Example
///
/// ```rust
/// use sqltree::ast::{Expr, Renderer};
///
/// let rendered = Renderer::default().render_expr(&Expr::int(42)).unwrap();
/// assert_eq!(rendered.sql, "42");
/// ```
pub trait Render {
    /// Render this node to the given SQL renderer
    fn render(&self, renderer: &mut SqlRenderer<'_>) -> RenderResult<()>;
}

impl Render for Expr {
    fn render(&self, renderer: &mut SqlRenderer<'_>) -> RenderResult<()> {
        renderer.render_expr(self)
    }
}

impl Render for Literal {
    fn render(&self, renderer: &mut SqlRenderer<'_>) -> RenderResult<()> {
        renderer.render_literal(self)
    }
}

impl Render for Ident {
    fn render(&self, renderer: &mut SqlRenderer<'_>) -> RenderResult<()> {
        renderer.write_ident(self);
        Ok(())
    }
}

impl Render for CompoundIdent {
    fn render(&self, renderer: &mut SqlRenderer<'_>) -> RenderResult<()> {
        renderer.write_compound(self)
    }
}

impl Render for QualifiedIdent {
    fn render(&self, renderer: &mut SqlRenderer<'_>) -> RenderResult<()> {
        renderer.write_qualified(self)
    }
}

impl Render for DataType {
    fn render(&self, renderer: &mut SqlRenderer<'_>) -> RenderResult<()> {
        renderer.render_data_type(self)
    }
}

impl Render for Query {
    fn render(&self, renderer: &mut SqlRenderer<'_>) -> RenderResult<()> {
        renderer.render_query(self)
    }
}

impl Render for Select {
    fn render(&self, renderer: &mut SqlRenderer<'_>) -> RenderResult<()> {
        renderer.render_select(self)
    }
}

impl Render for TableRef {
    fn render(&self, renderer: &mut SqlRenderer<'_>) -> RenderResult<()> {
        renderer.render_table(self)
    }
}

impl Render for Statement {
    fn render(&self, renderer: &mut SqlRenderer<'_>) -> RenderResult<()> {
        renderer.render_statement(self)
    }
}

// =============================================================================
// Configuration
// =============================================================================

/// Default nesting limit before rendering fails with
/// [`RenderError::RecursionLimitExceeded`]
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Default buffer capacity for a single render
const DEFAULT_BUFFER_CAPACITY: usize = 1024;

/// How single quotes inside string literals are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LiteralEscaping {
    /// Emit the string unchanged between single quotes
    #[default]
    Verbatim,
    /// Double every embedded single quote
    Standard,
}

/// Options fixed when a [`Renderer`] is built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Replace literals with `$n` placeholders and collect their values
    pub params_mode: bool,
    /// Maximum nesting of expressions, queries, selects and tables
    pub max_depth: usize,
    pub literal_escaping: LiteralEscaping,
    pub log_level: LogLevel,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            params_mode: false,
            max_depth: DEFAULT_MAX_DEPTH,
            literal_escaping: LiteralEscaping::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params_mode(mut self, params_mode: bool) -> Self {
        self.params_mode = params_mode;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_literal_escaping(mut self, escaping: LiteralEscaping) -> Self {
        self.literal_escaping = escaping;
        self
    }

    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }
}

/// The output of one render call
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSql {
    pub sql: String,
    /// Bound values; `params[i]` belongs to placeholder `$i+1`. Always empty
    /// outside parameters mode.
    pub params: Vec<ParamValue>,
}

impl RenderedSql {
    pub fn into_parts(self) -> (String, Vec<ParamValue>) {
        (self.sql, self.params)
    }

    /// Bound values in their JSON interchange form
    pub fn params_json(&self) -> Vec<serde_json::Value> {
        self.params.iter().map(ParamValue::to_json).collect()
    }
}

/// A configured renderer
///
/// Immutable once built and safe to share between threads. Every render call
/// works in its own [`SqlRenderer`], so parameter lists never leak between
/// calls.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
    extensions: ExtensionRegistry,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            extensions: ExtensionRegistry::new(),
        }
    }

    /// A renderer in parameters mode with otherwise default options
    pub fn params_mode() -> Self {
        Self::new(RenderOptions::default().with_params_mode(true))
    }

    pub fn with_extensions(mut self, extensions: ExtensionRegistry) -> Self {
        self.extensions = extensions;
        self
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn extensions(&self) -> &ExtensionRegistry {
        &self.extensions
    }

    pub fn render_expr(&self, expr: &Expr) -> RenderResult<RenderedSql> {
        self.render_node("Expr", expr)
    }

    pub fn render_query(&self, query: &Query) -> RenderResult<RenderedSql> {
        self.render_node("Query", query)
    }

    pub fn render_select(&self, select: &Select) -> RenderResult<RenderedSql> {
        self.render_node("Select", select)
    }

    pub fn render_table(&self, table: &TableRef) -> RenderResult<RenderedSql> {
        self.render_node("Table", table)
    }

    pub fn render_statement(&self, stmt: &Statement) -> RenderResult<RenderedSql> {
        self.render_node(stmt.kind(), stmt)
    }

    /// Render any node in a fresh context
    ///
    /// `kind` only labels the log events.
    pub fn render_node<N: Render + ?Sized>(
        &self,
        kind: &str,
        node: &N,
    ) -> RenderResult<RenderedSql> {
        let timer = RenderTimer::new(self.options.log_level, kind);
        let mut ctx = SqlRenderer::new(self);
        match node.render(&mut ctx) {
            Ok(()) => {
                let rendered = ctx.finish();
                timer.success(&rendered.sql, &rendered.params);
                Ok(rendered)
            }
            Err(err) => {
                timer.failure(&err);
                Err(err)
            }
        }
    }
}

// =============================================================================
// SqlRenderer
// =============================================================================

/// The rendering context of a single render call
///
/// Dialect handlers receive this context and use its `write*` and `render_*`
/// methods, so nested nodes share the caller's parameter numbering and depth
/// limit.
pub struct SqlRenderer<'r> {
    output: String,
    params: ParamCollector,
    depth: usize,
    renderer: &'r Renderer,
}

impl<'r> SqlRenderer<'r> {
    /// Create a new context for one render call
    pub fn new(renderer: &'r Renderer) -> Self {
        Self {
            output: String::with_capacity(DEFAULT_BUFFER_CAPACITY),
            params: ParamCollector::new(),
            depth: 0,
            renderer,
        }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.renderer.options
    }

    pub fn params_mode(&self) -> bool {
        self.renderer.options.params_mode
    }

    /// The SQL written so far
    pub fn sql(&self) -> &str {
        &self.output
    }

    /// Consume the context, returning the SQL and the bound values
    pub fn finish(self) -> RenderedSql {
        RenderedSql {
            sql: self.output,
            params: self.params.into_params(),
        }
    }

    // =========================================================================
    // Depth guard
    // =========================================================================

    fn enter(&mut self) -> RenderResult<()> {
        self.depth += 1;
        let limit = self.renderer.options.max_depth;
        if self.depth > limit {
            return Err(RenderError::RecursionLimitExceeded { limit });
        }
        Ok(())
    }

    fn exit(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Run `f` one nesting level deeper
    pub(crate) fn nested<F>(&mut self, f: F) -> RenderResult<()>
    where
        F: FnOnce(&mut Self) -> RenderResult<()>,
    {
        self.enter()?;
        let result = f(self);
        self.exit();
        result
    }

    // =========================================================================
    // Extensions
    // =========================================================================

    /// Render a custom variant through its registered handler
    pub fn render_custom(&mut self, node: &'static str, payload: &DialectNode) -> RenderResult<()> {
        let renderer: &'r Renderer = self.renderer;
        let handler = renderer
            .extensions
            .get(payload.kind())
            .ok_or_else(|| RenderError::unsupported(node, payload.kind()))?;
        handler.render(payload, self)
    }

    /// Render a node's extension slot as a trailing clause
    ///
    /// An empty slot writes nothing; a filled one writes a space followed by
    /// the handler's output.
    pub fn render_extensions(&mut self, node: &'static str, extensions: &Extensions) -> RenderResult<()> {
        if let Some(payload) = extensions {
            self.write(" ");
            self.render_custom(node, payload)?;
        }
        Ok(())
    }

    // =========================================================================
    // Query rendering
    // =========================================================================

    pub fn render_query(&mut self, query: &Query) -> RenderResult<()> {
        self.nested(|r| {
            r.render_ctes(&query.ctes)?;
            r.render_select(&query.selection)?;

            for op in &query.set_ops {
                r.write(" ");
                r.write(op.kind.as_sql());
                if op.all {
                    r.write(" ALL");
                }
                r.write(" ");
                r.render_select(&op.select)?;
                r.render_extensions("SetOp", &op.extensions)?;
            }

            if !query.ordering.is_empty() {
                r.write(" ORDER BY ");
                r.render_ordering(&query.ordering)?;
            }

            if let Some(limit) = &query.limit {
                r.write(" LIMIT ");
                r.render_expr(limit)?;
            }

            if let Some(offset) = &query.offset {
                r.write(" OFFSET ");
                r.render_expr(offset)?;
            }

            r.render_extensions("Query", &query.extensions)
        })
    }

    pub fn render_select(&mut self, select: &Select) -> RenderResult<()> {
        self.nested(|r| {
            r.write("SELECT ");
            r.render_selections(&select.selections)?;

            if let Some(from) = &select.from {
                r.write(" FROM ");
                r.render_joined_table(from)?;
            }

            if let Some(where_clause) = &select.where_clause {
                r.write(" WHERE ");
                r.render_expr(where_clause)?;
            }

            if !select.group_by.is_empty() {
                r.write(" GROUP BY ");
                r.render_expr_list(&select.group_by)?;
            }

            if let Some(having) = &select.having {
                r.write(" HAVING ");
                r.render_expr(having)?;
            }

            r.render_extensions("Select", &select.extensions)
        })
    }

    fn render_ctes(&mut self, ctes: &[CommonTableExpr]) -> RenderResult<()> {
        if ctes.is_empty() {
            return Ok(());
        }

        self.write("WITH ");
        for (i, cte) in ctes.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.write_ident(&cte.name);
            if !cte.columns.is_empty() {
                self.write(" ");
                self.write_ident_list(&cte.columns);
            }
            self.write(" AS (");
            self.render_query(&cte.query)?;
            self.write(")");
            self.render_extensions("CommonTableExpr", &cte.extensions)?;
        }
        self.write(" ");
        Ok(())
    }

    fn render_selections(&mut self, selections: &[Selection]) -> RenderResult<()> {
        for (i, selection) in selections.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            match selection {
                Selection::Anonymous(expr) => self.render_expr(expr)?,
                Selection::Aliased { expr, alias } => {
                    self.render_expr(expr)?;
                    self.write(" AS ");
                    self.write_ident(alias);
                }
            }
        }
        Ok(())
    }

    fn render_joined_table(&mut self, from: &JoinedTable) -> RenderResult<()> {
        self.render_table(&from.table)?;
        for join in &from.joins {
            self.write(" ");
            match &join.kind {
                JoinKind::Custom(payload) => self.render_custom("JoinKind", payload)?,
                kind => {
                    if let Some(keywords) = kind.as_sql() {
                        self.write(keywords);
                    }
                }
            }
            self.write(" JOIN ");
            self.render_table(&join.table)?;
            self.write(" ON ");
            self.render_expr(&join.on)?;
            self.render_extensions("Join", &join.extensions)?;
        }
        self.render_extensions("JoinedTable", &from.extensions)
    }

    fn render_ordering(&mut self, ordering: &[OrderingExpr]) -> RenderResult<()> {
        for (i, o) in ordering.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.render_expr(&o.expr)?;
            if let Some(dir) = &o.direction {
                self.write(" ");
                self.write(dir.as_sql());
            }
            if let Some(nulls) = &o.nulls {
                self.write(" ");
                self.write(nulls.as_sql());
            }
            self.render_extensions("OrderingExpr", &o.extensions)?;
        }
        Ok(())
    }

    pub fn render_table(&mut self, table: &TableRef) -> RenderResult<()> {
        self.nested(|r| match table {
            TableRef::Basic(name) => r.write_qualified(name),
            TableRef::Derived { query, alias } => {
                r.write("(");
                r.render_query(query)?;
                r.write(") AS ");
                r.write_ident(alias);
                Ok(())
            }
            TableRef::Function { expr, alias } => {
                r.write("(");
                r.render_expr(expr)?;
                r.write(") AS ");
                r.write_ident(alias);
                Ok(())
            }
            TableRef::Custom(payload) => r.render_custom("Table", payload),
        })
    }

    // =========================================================================
    // Expression rendering
    // =========================================================================

    pub fn render_expr(&mut self, expr: &Expr) -> RenderResult<()> {
        self.nested(|r| r.render_expr_inner(expr))
    }

    fn render_expr_inner(&mut self, expr: &Expr) -> RenderResult<()> {
        match expr {
            Expr::Ident(ident) => self.write_ident(ident),

            Expr::CompoundIdentifier(compound) => self.write_compound(compound)?,

            Expr::Wildcard => self.write("*"),

            Expr::QualifiedWildcard(qualifiers) => {
                if !qualifiers.is_empty() {
                    self.write_ident_chain(qualifiers);
                    self.write(".");
                }
                self.write("*");
            }

            Expr::BinaryApp { left, op, right } => {
                self.render_expr(left)?;
                self.write(" ");
                self.write(op.as_sql());
                self.write(" ");
                self.render_expr(right)?;
            }

            Expr::UnaryApp { op, expr } => {
                self.write(op.as_sql());
                self.render_expr(expr)?;
            }

            Expr::Between {
                expr,
                negated,
                low,
                high,
            } => {
                self.render_expr(expr)?;
                if *negated {
                    self.write(" NOT BETWEEN ");
                } else {
                    self.write(" BETWEEN ");
                }
                self.render_expr(low)?;
                self.write(" AND ");
                self.render_expr(high)?;
            }

            Expr::Case(case) => self.render_case(case)?,

            Expr::Cast { expr, data_type } => {
                self.write("CAST(");
                self.render_expr(expr)?;
                self.write(" AS ");
                self.render_data_type(data_type)?;
                self.write(")");
            }

            Expr::Collate { expr, collation } => {
                self.render_expr(expr)?;
                self.write(" COLLATE ");
                self.write_qualified(collation)?;
            }

            Expr::Exists(query) => {
                self.write("EXISTS(");
                self.render_query(query)?;
                self.write(")");
            }

            Expr::Extract { field, source } => {
                self.write("EXTRACT(");
                self.write(field.as_sql());
                self.write(" FROM ");
                self.render_expr(source)?;
                self.write(")");
            }

            Expr::FunctionApp { name, args } => {
                self.render_expr(name)?;
                self.write("(");
                self.render_expr_list(args)?;
                self.write(")");
            }

            Expr::IsNull { expr, negated } => {
                self.render_expr(expr)?;
                if *negated {
                    self.write(" IS NOT NULL");
                } else {
                    self.write(" IS NULL");
                }
            }

            Expr::InList {
                expr,
                list,
                negated,
            } => {
                self.render_expr(expr)?;
                if *negated {
                    self.write(" NOT IN (");
                } else {
                    self.write(" IN (");
                }
                self.render_expr_list(list)?;
                self.write(")");
            }

            Expr::InSubQuery {
                expr,
                query,
                negated,
            } => {
                self.render_expr(expr)?;
                if *negated {
                    self.write(" NOT IN (");
                } else {
                    self.write(" IN (");
                }
                self.render_query(query)?;
                self.write(")");
            }

            Expr::Lit(lit) => self.render_literal(lit)?,

            Expr::Parenthesized(inner) => {
                self.write("(");
                self.render_expr(inner)?;
                self.write(")");
            }

            Expr::SubQuery(query) => {
                self.write("(");
                self.render_query(query)?;
                self.write(")");
            }

            Expr::Custom(payload) => self.render_custom("Expr", payload)?,
        }
        Ok(())
    }

    fn render_case(&mut self, case: &CaseExpr) -> RenderResult<()> {
        self.write("CASE");

        if let Some(operand) = &case.operand {
            self.write(" ");
            self.render_expr(operand)?;
        }

        for arm in &case.cases {
            self.write(" WHEN ");
            self.render_expr(&arm.condition)?;
            self.write(" THEN ");
            self.render_expr(&arm.result)?;
        }

        if let Some(else_case) = &case.else_case {
            self.write(" ELSE ");
            self.render_expr(else_case)?;
        }

        self.write(" END");
        Ok(())
    }

    /// Render a literal, or bind it as the next placeholder in parameters mode
    pub fn render_literal(&mut self, lit: &Literal) -> RenderResult<()> {
        if self.params_mode() {
            let index = self.params.add(ParamValue::from(lit));
            write!(self.output, "${}", index)?;
            return Ok(());
        }

        match lit {
            Literal::Null => self.write("NULL"),
            Literal::Bool(b) => self.write(if *b { "TRUE" } else { "FALSE" }),
            Literal::Number(Number::Integer(n)) => write!(self.output, "{}", n)?,
            Literal::Number(Number::Float(f)) => write!(self.output, "{}", f)?,
            Literal::Number(Number::Text(text)) => self.write(text),
            Literal::String(s) => self.write_string_literal(s),
        }
        Ok(())
    }

    pub fn render_data_type(&mut self, data_type: &DataType) -> RenderResult<()> {
        let keyword = match data_type.keyword() {
            Some(keyword) => keyword,
            None => {
                return match data_type {
                    DataType::Custom(payload) => self.render_custom("DataType", payload),
                    _ => Err(RenderError::malformed("DataType", "type has no keyword")),
                };
            }
        };
        self.write(keyword);

        match data_type {
            DataType::Char { length } | DataType::VarChar { length } => {
                if let Some(length) = length {
                    write!(self.output, "({})", length)?;
                }
            }
            DataType::Numeric { precision, scale } | DataType::Decimal { precision, scale } => {
                match (precision, scale) {
                    (Some(p), Some(s)) => write!(self.output, "({}, {})", p, s)?,
                    (Some(p), None) => write!(self.output, "({})", p)?,
                    (None, Some(_)) => {
                        return Err(RenderError::malformed(
                            "DataType",
                            format!("{} scale given without a precision", keyword),
                        ))
                    }
                    (None, None) => {}
                }
            }
            DataType::Float { precision } => {
                if let Some(p) = precision {
                    write!(self.output, "({})", p)?;
                }
            }
            DataType::Time {
                precision,
                with_time_zone,
            }
            | DataType::Timestamp {
                precision,
                with_time_zone,
            } => {
                if let Some(p) = precision {
                    write!(self.output, "({})", p)?;
                }
                if *with_time_zone {
                    self.write(" WITH TIME ZONE");
                }
            }
            _ => {}
        }
        Ok(())
    }

    // =========================================================================
    // Helper methods
    // =========================================================================

    pub fn render_expr_list(&mut self, exprs: &[Expr]) -> RenderResult<()> {
        for (i, expr) in exprs.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.render_expr(expr)?;
        }
        Ok(())
    }

    /// `("a", "b")`
    pub fn write_ident_list(&mut self, idents: &[Ident]) {
        self.write("(");
        for (i, ident) in idents.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.write_ident(ident);
        }
        self.write(")");
    }

    fn write_ident_chain(&mut self, idents: &[Ident]) {
        for (i, ident) in idents.iter().enumerate() {
            if i > 0 {
                self.write(".");
            }
            self.write_ident(ident);
        }
    }

    // =========================================================================
    // Low-level output methods
    // =========================================================================

    /// Append raw SQL text
    pub fn write(&mut self, s: &str) {
        self.output.push_str(s);
    }

    /// Append a quoted identifier
    pub fn write_ident(&mut self, ident: &Ident) {
        // Always quote; escape any double quotes in the identifier by doubling them
        self.output.push('"');
        for c in ident.as_str().chars() {
            if c == '"' {
                self.output.push('"');
            }
            self.output.push(c);
        }
        self.output.push('"');
    }

    /// Append a compound identifier, each segment quoted
    pub fn write_compound(&mut self, compound: &CompoundIdent) -> RenderResult<()> {
        let segments = compound.segments();
        if segments.len() < 2 {
            return Err(RenderError::malformed(
                "CompoundIdent",
                format!("expected at least 2 segments, got {}", segments.len()),
            ));
        }
        self.write_ident_chain(segments);
        Ok(())
    }

    pub fn write_qualified(&mut self, name: &QualifiedIdent) -> RenderResult<()> {
        match name {
            QualifiedIdent::Simple(ident) => {
                self.write_ident(ident);
                Ok(())
            }
            QualifiedIdent::Compound(compound) => self.write_compound(compound),
        }
    }

    fn write_string_literal(&mut self, s: &str) {
        self.output.push('\'');
        match self.renderer.options.literal_escaping {
            LiteralEscaping::Verbatim => self.output.push_str(s),
            LiteralEscaping::Standard => {
                for c in s.chars() {
                    if c == '\'' {
                        self.output.push('\'');
                    }
                    self.output.push(c);
                }
            }
        }
        self.output.push('\'');
    }
}

// =========================================================================
// Convenience functions
// =========================================================================

/// Render a statement to SQL text with a default renderer
pub fn render(stmt: &Statement) -> RenderResult<String> {
    Renderer::default().render_statement(stmt).map(|r| r.sql)
}

/// Render a statement in parameters mode
pub fn render_with_params(stmt: &Statement) -> RenderResult<RenderedSql> {
    Renderer::params_mode().render_statement(stmt)
}

/// Render just a query
pub fn render_query(query: &Query) -> RenderResult<String> {
    Renderer::default().render_query(query).map(|r| r.sql)
}

/// Render just an expression
pub fn render_expr(expr: &Expr) -> RenderResult<String> {
    Renderer::default().render_expr(expr).map(|r| r.sql)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_simple_select() {
        let query = Select::star().with_from("users").into_query();
        assert_eq!(render_query(&query).unwrap(), "SELECT * FROM \"users\"");
    }

    #[test]
    fn test_render_select_with_where() {
        let select = Select::columns(vec![
            Selection::expr(Expr::compound(["t", "id"])),
            Selection::aliased(Expr::compound(["t", "name"]), "n"),
        ])
        .with_from("users")
        .with_where(Expr::compound(["t", "active"]).eq(Expr::bool(true)));

        let sql = Renderer::default().render_select(&select).unwrap().sql;
        assert_eq!(
            sql,
            "SELECT \"t\".\"id\", \"t\".\"name\" AS \"n\" FROM \"users\" WHERE \"t\".\"active\" = TRUE"
        );
    }

    #[test]
    fn test_render_cte() {
        let inner = Select::star()
            .with_from("users")
            .with_where(Expr::ident("active").eq(Expr::bool(true)));

        let query = Select::star()
            .with_from("active_users")
            .into_query()
            .with_cte(CommonTableExpr::new("active_users", inner).with_columns(vec!["id"]));

        assert_eq!(
            render_query(&query).unwrap(),
            "WITH \"active_users\" (\"id\") AS (SELECT * FROM \"users\" WHERE \"active\" = TRUE) SELECT * FROM \"active_users\""
        );
    }

    #[test]
    fn test_render_case() {
        let searched = Expr::Case(CaseExpr::searched(
            vec![
                (Expr::ident("status").eq(Expr::string("active")), Expr::int(1)),
                (Expr::ident("status").eq(Expr::string("inactive")), Expr::int(0)),
            ],
            Some(Expr::int(-1)),
        ));
        assert_eq!(
            render_expr(&searched).unwrap(),
            "CASE WHEN \"status\" = 'active' THEN 1 WHEN \"status\" = 'inactive' THEN 0 ELSE -1 END"
        );

        let simple = Expr::Case(CaseExpr::simple(
            Expr::ident("x"),
            vec![(Expr::int(1), Expr::string("one"))],
            None,
        ));
        assert_eq!(render_expr(&simple).unwrap(), "CASE \"x\" WHEN 1 THEN 'one' END");
    }

    #[test]
    fn test_render_expression_forms() {
        let cases = vec![
            (
                Expr::between(Expr::ident("a"), Expr::int(1), Expr::int(5)),
                "\"a\" BETWEEN 1 AND 5",
            ),
            (
                Expr::cast(Expr::ident("a"), DataType::varchar(20)),
                "CAST(\"a\" AS VARCHAR(20))",
            ),
            (Expr::collate(Expr::ident("a"), "fr_FR"), "\"a\" COLLATE \"fr_FR\""),
            (
                Expr::extract(DateTimeField::Year, Expr::ident("d")),
                "EXTRACT(YEAR FROM \"d\")",
            ),
            (Expr::function("now", vec![]), "\"now\"()"),
            (Expr::is_not_null(Expr::ident("a")), "\"a\" IS NOT NULL"),
            (
                Expr::in_list(Expr::ident("a"), vec![Expr::int(1), Expr::int(2)]),
                "\"a\" IN (1, 2)",
            ),
            (Expr::not(Expr::ident("a")), "NOT \"a\""),
            (Expr::unary(UnaryOperator::Neg, Expr::int(3)), "-3"),
            (Expr::QualifiedWildcard(vec![]), "*"),
            (Expr::qualified_wildcard("t"), "\"t\".*"),
            (Expr::numeric("1.50"), "1.50"),
            (Expr::null(), "NULL"),
            (
                Expr::ident("a").eq(Expr::int(1)).parenthesized().or(Expr::bool(false)),
                "(\"a\" = 1) OR FALSE",
            ),
        ];

        for (expr, expected) in cases {
            assert_eq!(render_expr(&expr).unwrap(), expected);
        }
    }

    #[test]
    fn test_render_subquery_forms() {
        let sub = Select::columns(vec![Selection::expr(Expr::ident("id"))])
            .with_from("t")
            .into_query();

        assert_eq!(
            render_expr(&Expr::exists(sub.clone())).unwrap(),
            "EXISTS(SELECT \"id\" FROM \"t\")"
        );
        assert_eq!(
            render_expr(&Expr::in_subquery(Expr::ident("id"), sub.clone())).unwrap(),
            "\"id\" IN (SELECT \"id\" FROM \"t\")"
        );
        assert_eq!(
            render_expr(&Expr::subquery(sub)).unwrap(),
            "(SELECT \"id\" FROM \"t\")"
        );
    }

    #[test]
    fn test_render_tables() {
        let renderer = Renderer::default();
        let derived = TableRef::derived(Select::star().with_from("t").into_query(), "d");
        assert_eq!(
            renderer.render_table(&derived).unwrap().sql,
            "(SELECT * FROM \"t\") AS \"d\""
        );

        let func = TableRef::function(Expr::function("generate_series", vec![Expr::int(1), Expr::int(3)]), "s");
        assert_eq!(
            renderer.render_table(&func).unwrap().sql,
            "(\"generate_series\"(1, 3)) AS \"s\""
        );

        let qualified = TableRef::table(QualifiedIdent::parse_dotted("hr.employees"));
        assert_eq!(renderer.render_table(&qualified).unwrap().sql, "\"hr\".\"employees\"");
    }

    #[test]
    fn test_render_data_types() {
        let cases = vec![
            (DataType::Char { length: None }, "CHAR"),
            (DataType::numeric(10, 2), "NUMERIC(10, 2)"),
            (
                DataType::Decimal {
                    precision: Some(8),
                    scale: None,
                },
                "DECIMAL(8)",
            ),
            (DataType::Float { precision: Some(24) }, "FLOAT(24)"),
            (
                DataType::Timestamp {
                    precision: Some(3),
                    with_time_zone: true,
                },
                "TIMESTAMP(3) WITH TIME ZONE",
            ),
            (DataType::time(), "TIME"),
            (DataType::DoublePrecision, "DOUBLE PRECISION"),
        ];
        for (dt, expected) in cases {
            let expr = Expr::cast(Expr::null(), dt);
            assert_eq!(render_expr(&expr).unwrap(), format!("CAST(NULL AS {})", expected));
        }
    }

    #[test]
    fn test_scale_without_precision_is_malformed() {
        let expr = Expr::cast(
            Expr::null(),
            DataType::Numeric {
                precision: None,
                scale: Some(2),
            },
        );
        assert!(matches!(
            render_expr(&expr),
            Err(RenderError::MalformedTree { node: "DataType", .. })
        ));
    }

    #[test]
    fn test_ident_quoting() {
        let renderer = Renderer::default();
        let mut ctx = SqlRenderer::new(&renderer);
        ctx.write_ident(&Ident::new("user\"name"));
        assert_eq!(ctx.finish().sql, "\"user\"\"name\"");
    }

    #[test]
    fn test_string_literal_escaping_policy() {
        let expr = Expr::string("it's");
        assert_eq!(render_expr(&expr).unwrap(), "'it's'");

        let renderer = Renderer::new(
            RenderOptions::default().with_literal_escaping(LiteralEscaping::Standard),
        );
        assert_eq!(renderer.render_expr(&expr).unwrap().sql, "'it''s'");

        // bound values are never escaped
        let renderer = Renderer::new(
            RenderOptions::default()
                .with_params_mode(true)
                .with_literal_escaping(LiteralEscaping::Standard),
        );
        let rendered = renderer.render_expr(&expr).unwrap();
        assert_eq!(rendered.sql, "$1");
        assert_eq!(rendered.params, vec![ParamValue::String("it's".into())]);
    }

    #[test]
    fn test_short_compound_ident_is_malformed() {
        let expr = Expr::CompoundIdentifier(CompoundIdent(vec![Ident::new("a")]));
        let err = render_expr(&expr).unwrap_err();
        assert_eq!(
            err.to_string(),
            "malformed CompoundIdent: expected at least 2 segments, got 1"
        );
    }

    #[test]
    fn test_recursion_limit() {
        let mut expr = Expr::int(1);
        for _ in 0..10 {
            expr = expr.parenthesized();
        }

        let shallow = Renderer::new(RenderOptions::default().with_max_depth(5));
        assert!(matches!(
            shallow.render_expr(&expr),
            Err(RenderError::RecursionLimitExceeded { limit: 5 })
        ));

        let deep = Renderer::new(RenderOptions::default().with_max_depth(11));
        assert_eq!(deep.render_expr(&expr).unwrap().sql, "((((((((((1))))))))))");
    }

    #[test]
    fn test_params_mode_numbers_in_order() {
        let expr = Expr::ident("a")
            .eq(Expr::int(1))
            .and(Expr::ident("b").eq(Expr::string("x")))
            .and(Expr::ident("c").eq(Expr::null()));

        let rendered = Renderer::params_mode().render_expr(&expr).unwrap();
        assert_eq!(rendered.sql, "\"a\" = $1 AND \"b\" = $2 AND \"c\" = $3");
        assert_eq!(
            rendered.params,
            vec![
                ParamValue::Integer(1),
                ParamValue::String("x".into()),
                ParamValue::Null
            ]
        );
        assert_eq!(
            rendered.params_json(),
            vec![serde_json::json!(1), serde_json::json!("x"), serde_json::Value::Null]
        );
    }
}
