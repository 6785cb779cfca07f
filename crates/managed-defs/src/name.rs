//! Namespace-qualified resource names.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Lookup name of the container's default context service.
pub const DEFAULT_CONTEXT_SERVICE: &str = "java:comp/DefaultContextService";

/// The namespaces a resource name may be declared in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Namespace {
    /// `java:comp` — per-component.
    Comp,
    /// `java:module` — per-module.
    Module,
    /// `java:app` — per-application.
    App,
    /// `java:global` — shared across applications.
    Global,
}

impl Namespace {
    /// All recognized namespaces.
    pub const ALL: [Namespace; 4] = [
        Namespace::Comp,
        Namespace::Module,
        Namespace::App,
        Namespace::Global,
    ];

    /// The lexical prefix of names in this namespace.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Comp => "java:comp",
            Self::Module => "java:module",
            Self::App => "java:app",
            Self::Global => "java:global",
        }
    }
}

impl std::fmt::Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Error from resource name validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    #[error("resource name is empty")]
    Empty,

    #[error(
        "resource name '{0}' is not in a recognized namespace \
         (java:comp, java:module, java:app, java:global)"
    )]
    UnknownNamespace(String),

    #[error("resource name '{0}' has no path after the namespace prefix")]
    MissingPath(String),
}

/// A validated namespace-qualified lookup name,
/// e.g. `java:app/concurrent/MyContext`.
///
/// Equality, ordering, and hashing are over the full name string, so a
/// `ResourceName` can key a map and be looked up by `&str`.
///
/// # Examples
/// ```
/// use managed_defs::{Namespace, ResourceName};
///
/// let name: ResourceName = "java:app/concurrent/MyContext".parse().unwrap();
/// assert_eq!(name.namespace(), Namespace::App);
/// assert_eq!(name.path(), "concurrent/MyContext");
/// assert!("concurrent/MyContext".parse::<ResourceName>().is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResourceName {
    namespace: Namespace,
    raw: String,
}

impl ResourceName {
    /// Validate a lookup name: non-empty, a recognized namespace prefix,
    /// and a non-empty path segment after the prefix.
    pub fn parse(input: &str) -> Result<Self, NameError> {
        if input.is_empty() {
            return Err(NameError::Empty);
        }
        for ns in Namespace::ALL {
            match input.strip_prefix(ns.prefix()) {
                Some(rest) if rest.is_empty() || rest == "/" => {
                    return Err(NameError::MissingPath(input.to_string()));
                }
                Some(rest) if rest.starts_with('/') => {
                    return Ok(Self {
                        namespace: ns,
                        raw: input.to_string(),
                    });
                }
                // A longer identifier that merely starts with this prefix
                // (e.g. java:globalThing) is not in this namespace.
                _ => {}
            }
        }
        Err(NameError::UnknownNamespace(input.to_string()))
    }

    /// The name of the container's default context service.
    pub fn default_context_service() -> Self {
        Self {
            namespace: Namespace::Comp,
            raw: DEFAULT_CONTEXT_SERVICE.to_string(),
        }
    }

    /// The namespace this name is declared in.
    pub fn namespace(&self) -> Namespace {
        self.namespace
    }

    /// The path after the namespace prefix, e.g. `concurrent/MyContext`.
    pub fn path(&self) -> &str {
        &self.raw[self.namespace.prefix().len() + 1..]
    }

    /// The full name string.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for ResourceName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ResourceName {
    type Error = NameError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<ResourceName> for String {
    fn from(name: ResourceName) -> Self {
        name.raw
    }
}

impl PartialEq for ResourceName {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for ResourceName {}

impl PartialOrd for ResourceName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ResourceName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw.cmp(&other.raw)
    }
}

// Hash over the raw string only, consistent with Eq, so map lookups can
// borrow the name as &str.
impl Hash for ResourceName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl Borrow<str> for ResourceName {
    fn borrow(&self) -> &str {
        &self.raw
    }
}

impl std::fmt::Display for ResourceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}
