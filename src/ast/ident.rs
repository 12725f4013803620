//! SQL identifiers
//!
//! Identifiers are always quoted when rendered. A compound identifier is a
//! qualified reference such as `schema.table.column`; each segment is quoted
//! on its own and the segments are joined with `.`.

/// A single quoted SQL identifier (table name, column name, etc.)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ident(pub String);

impl Ident {
    /// Create a new identifier from any string-like type
    #[inline]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the identifier as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Ident {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Ident {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A qualified identifier: two or more segments
///
/// The segment count is not checked on construction; the renderer reports a
/// compound identifier with fewer than two segments as a malformed tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompoundIdent(pub Vec<Ident>);

impl CompoundIdent {
    pub fn new(segments: Vec<Ident>) -> Self {
        Self(segments)
    }

    pub fn segments(&self) -> &[Ident] {
        &self.0
    }
}

/// A name that may or may not be qualified
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QualifiedIdent {
    Simple(Ident),
    Compound(CompoundIdent),
}

impl QualifiedIdent {
    /// Split a dotted name into a simple or compound identifier
    ///
    /// `"employees"` becomes a simple identifier, `"hr.employees"` a compound one.
    pub fn parse_dotted(name: &str) -> Self {
        let mut parts: Vec<Ident> = name.split('.').map(Ident::new).collect();
        if parts.len() == 1 {
            Self::Simple(parts.remove(0))
        } else {
            Self::Compound(CompoundIdent(parts))
        }
    }

    /// The last segment, i.e. the unqualified object name
    pub fn base_name(&self) -> Option<&Ident> {
        match self {
            Self::Simple(ident) => Some(ident),
            Self::Compound(compound) => compound.0.last(),
        }
    }
}

impl From<Ident> for QualifiedIdent {
    fn from(ident: Ident) -> Self {
        Self::Simple(ident)
    }
}

impl From<CompoundIdent> for QualifiedIdent {
    fn from(compound: CompoundIdent) -> Self {
        Self::Compound(compound)
    }
}

impl From<&str> for QualifiedIdent {
    fn from(s: &str) -> Self {
        Self::Simple(Ident::from(s))
    }
}

impl From<String> for QualifiedIdent {
    fn from(s: String) -> Self {
        Self::Simple(Ident::from(s))
    }
}

/// Convert a list of names into identifiers
pub fn idents<I, S>(names: I) -> Vec<Ident>
where
    I: IntoIterator<Item = S>,
    S: Into<Ident>,
{
    names.into_iter().map(Into::into).collect()
}
