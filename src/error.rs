//! Error types for rendering
//!
//! Rendering is pure and deterministic, so every error here is a property of
//! the input tree (or of the renderer configuration) rather than a transient
//! condition. Retrying an identical call yields the identical error.

use thiserror::Error;

/// The result type for render operations
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while rendering a tree to SQL text
#[derive(Debug, Error)]
pub enum RenderError {
    /// A custom variant or extension slot was reached with no registered handler
    #[error("no render extension registered for {node} payload `{kind}`")]
    UnsupportedExtension {
        /// The node family carrying the payload ("Expr", "Table", ...)
        node: &'static str,
        /// The payload's registry key
        kind: String,
    },

    /// A node violates an invariant the renderer relies on
    #[error("malformed {node}: {reason}")]
    MalformedTree {
        node: &'static str,
        reason: String,
    },

    /// The tree nests deeper than the configured limit
    #[error("recursion limit of {limit} exceeded while rendering")]
    RecursionLimitExceeded { limit: usize },

    /// Writing into the output buffer failed
    #[error(transparent)]
    Fmt(#[from] std::fmt::Error),
}

impl RenderError {
    /// Create an unsupported-extension error
    pub fn unsupported(node: &'static str, kind: impl Into<String>) -> Self {
        RenderError::UnsupportedExtension {
            node,
            kind: kind.into(),
        }
    }

    /// Create a malformed-tree error
    pub fn malformed(node: &'static str, reason: impl Into<String>) -> Self {
        RenderError::MalformedTree {
            node,
            reason: reason.into(),
        }
    }

    /// Whether this error means a dialect handler is missing
    pub fn is_unsupported(&self) -> bool {
        matches!(self, RenderError::UnsupportedExtension { .. })
    }
}
