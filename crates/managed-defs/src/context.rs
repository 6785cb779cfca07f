//! Thread context type identifiers.

use serde::{Deserialize, Serialize};

/// A category of thread-local execution state that a context service can
/// clear, propagate, or leave unchanged when a task runs on another thread.
///
/// Built-in types are enum variants; provider-specific types use `Vendor`
/// and pass through validation untouched (using them makes an application
/// non-portable).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContextType {
    /// The application component association: its namespace and its thread
    /// context class loader. Cleared application context leaves the thread
    /// associated with no component.
    Application,
    /// Credentials associated with the thread (caller and invocation
    /// subjects). Cleared security context means unauthenticated subjects.
    Security,
    /// The transaction associated with the thread. A thread with cleared
    /// transaction context can begin a new transaction of its own.
    Transaction,
    /// Sentinel standing for every context type not listed elsewhere.
    Remaining,
    /// Provider-specific context type.
    Vendor(String),
}

impl ContextType {
    /// The string identifier of this context type.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Application => "Application",
            Self::Security => "Security",
            Self::Transaction => "Transaction",
            Self::Remaining => "Remaining",
            Self::Vendor(s) => s,
        }
    }

    /// Whether this is the `Remaining` sentinel rather than a concrete type.
    pub fn is_remaining(&self) -> bool {
        matches!(self, Self::Remaining)
    }

    /// Whether this is one of the built-in context types.
    pub fn is_builtin(&self) -> bool {
        matches!(self, Self::Application | Self::Security | Self::Transaction)
    }

    /// Whether this is a provider-specific context type.
    pub fn is_vendor(&self) -> bool {
        matches!(self, Self::Vendor(_))
    }
}

impl From<&str> for ContextType {
    fn from(s: &str) -> Self {
        match s {
            "Application" => Self::Application,
            "Security" => Self::Security,
            "Transaction" => Self::Transaction,
            "Remaining" => Self::Remaining,
            other => Self::Vendor(other.to_string()),
        }
    }
}

impl From<String> for ContextType {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<ContextType> for String {
    fn from(ct: ContextType) -> Self {
        match ct {
            ContextType::Vendor(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for ContextType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
