//! Dialect extension points
//!
//! The grammar's variant sets are closed. Dialect-specific content enters the
//! tree in exactly two ways:
//!
//! - a `Custom` variant on the extensible families (expressions, tables, data
//!   types, join kinds, constraints), carrying a [`DialectNode`];
//! - the `extensions` slot on struct-shaped nodes, which holds either `None`
//!   or a [`DialectNode`] rendered as a trailing clause after the node.
//!
//! A [`DialectNode`] is an opaque payload plus a registry key. The renderer
//! looks the key up in its [`ExtensionRegistry`] and hands the payload to the
//! registered [`RenderExtension`]. A payload with no registered handler is a
//! render error, never silently dropped.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::render::SqlRenderer;
use crate::error::RenderResult;

/// An opaque, dialect-owned payload embedded in the tree
///
/// Cloning is cheap: the payload is shared, never copied.
#[derive(Clone)]
pub struct DialectNode {
    kind: String,
    payload: Arc<dyn Any + Send + Sync>,
}

impl DialectNode {
    /// Wrap a payload under the given registry key
    pub fn new<T: Any + Send + Sync>(kind: impl Into<String>, payload: T) -> Self {
        Self {
            kind: kind.into(),
            payload: Arc::new(payload),
        }
    }

    /// The registry key used to find this payload's handler
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Borrow the payload as a concrete type
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref::<T>()
    }
}

impl fmt::Debug for DialectNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialectNode")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

// Payloads are opaque; two nodes are equal when they share the same payload.
impl PartialEq for DialectNode {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && Arc::ptr_eq(&self.payload, &other.payload)
    }
}

/// The extension slot carried by struct-shaped nodes
pub type Extensions = Option<DialectNode>;

/// A dialect-supplied renderer for one payload kind
///
/// Handlers receive the live renderer so they can write text, render nested
/// AST values, and bind parameters in the same numbering sequence.
pub trait RenderExtension: Send + Sync {
    fn render(&self, node: &DialectNode, renderer: &mut SqlRenderer<'_>) -> RenderResult<()>;
}

impl<F> RenderExtension for F
where
    F: Fn(&DialectNode, &mut SqlRenderer<'_>) -> RenderResult<()> + Send + Sync,
{
    fn render(&self, node: &DialectNode, renderer: &mut SqlRenderer<'_>) -> RenderResult<()> {
        self(node, renderer)
    }
}

/// Handlers keyed by payload kind
#[derive(Clone, Default)]
pub struct ExtensionRegistry {
    handlers: HashMap<String, Arc<dyn RenderExtension>>,
}

impl ExtensionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler, replacing any previous handler for `kind`
    pub fn register(&mut self, kind: impl Into<String>, handler: impl RenderExtension + 'static) {
        self.handlers.insert(kind.into(), Arc::new(handler));
    }

    /// Register a closure as the handler for `kind`
    pub fn register_fn<F>(&mut self, kind: impl Into<String>, handler: F)
    where
        F: Fn(&DialectNode, &mut SqlRenderer<'_>) -> RenderResult<()> + Send + Sync + 'static,
    {
        self.register(kind, handler);
    }

    /// Builder-style variant of [`register`](Self::register)
    pub fn with(mut self, kind: impl Into<String>, handler: impl RenderExtension + 'static) -> Self {
        self.register(kind, handler);
        self
    }

    /// Builder-style variant of [`register_fn`](Self::register_fn)
    pub fn with_fn<F>(mut self, kind: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&DialectNode, &mut SqlRenderer<'_>) -> RenderResult<()> + Send + Sync + 'static,
    {
        self.register_fn(kind, handler);
        self
    }

    pub fn get(&self, kind: &str) -> Option<&Arc<dyn RenderExtension>> {
        self.handlers.get(kind)
    }
}

impl fmt::Debug for ExtensionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        f.debug_struct("ExtensionRegistry")
            .field("kinds", &kinds)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Expr, Renderer};

    #[derive(Debug, PartialEq)]
    struct Ilike {
        pattern: String,
    }

    #[test]
    fn test_dialect_node_downcast() {
        let node = DialectNode::new(
            "pg.ilike",
            Ilike {
                pattern: "a%".into(),
            },
        );
        assert_eq!(node.kind(), "pg.ilike");
        assert_eq!(node.downcast_ref::<Ilike>().unwrap().pattern, "a%");
        assert!(node.downcast_ref::<String>().is_none());
    }

    #[test]
    fn test_dialect_node_equality_is_by_payload_identity() {
        let a = DialectNode::new("k", 1u8);
        let b = a.clone();
        let c = DialectNode::new("k", 1u8);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_registry_register_and_replace() {
        let registry = ExtensionRegistry::new()
            .with_fn("k", |_, r| {
                r.write("A");
                Ok(())
            })
            .with_fn("k", |_, r| {
                r.write("B");
                Ok(())
            });
        assert!(registry.get("missing").is_none());
        assert_eq!(format!("{:?}", registry), "ExtensionRegistry { kinds: [\"k\"] }");

        let renderer = Renderer::default().with_extensions(registry);
        let rendered = renderer
            .render_expr(&Expr::Custom(DialectNode::new("k", ())))
            .unwrap();
        assert_eq!(rendered.sql, "B");
    }
}
