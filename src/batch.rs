//! Ordered statement batches
//!
//! A batch is a list of statements meant to run one after another, such as a
//! schema script. Each statement renders in its own context, so in
//! parameters mode every statement's placeholders start again at `$1`.

use crate::ast::{ParamValue, RenderedSql, Renderer, Statement};
use crate::error::RenderResult;

/// A statement plus a human-readable note about what it does
#[derive(Debug, Clone, PartialEq)]
pub struct BatchStep {
    pub stmt: Statement,
    pub description: Option<String>,
}

impl BatchStep {
    pub fn new(stmt: impl Into<Statement>) -> Self {
        Self {
            stmt: stmt.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// An ordered list of statements
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatementBatch {
    pub steps: Vec<BatchStep>,
}

impl StatementBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a statement
    pub fn push(mut self, stmt: impl Into<Statement>) -> Self {
        self.steps.push(BatchStep::new(stmt));
        self
    }

    /// Append a step carrying a description
    pub fn push_step(mut self, step: BatchStep) -> Self {
        self.steps.push(step);
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Render every statement in order
    ///
    /// Stops at the first failing statement; no partial result is returned.
    pub fn render(&self, renderer: &Renderer) -> RenderResult<Vec<RenderedSql>> {
        self.steps
            .iter()
            .map(|step| renderer.render_statement(&step.stmt))
            .collect()
    }

    /// Render the batch as a `;`-terminated script, one statement per line
    ///
    /// Parameters are discarded, so this is only meaningful outside
    /// parameters mode.
    pub fn render_script(&self, renderer: &Renderer) -> RenderResult<String> {
        let rendered = self.render(renderer)?;
        let mut script = String::new();
        for r in rendered {
            script.push_str(&r.sql);
            script.push_str(";\n");
        }
        Ok(script)
    }

    /// Render every statement and pair it with its bound values
    pub fn render_parts(&self, renderer: &Renderer) -> RenderResult<Vec<(String, Vec<ParamValue>)>> {
        Ok(self
            .render(renderer)?
            .into_iter()
            .map(RenderedSql::into_parts)
            .collect())
    }
}

impl FromIterator<Statement> for StatementBatch {
    fn from_iter<I: IntoIterator<Item = Statement>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().map(BatchStep::new).collect(),
        }
    }
}
