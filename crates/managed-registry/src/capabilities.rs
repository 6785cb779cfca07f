//! Provider capability policy.

use serde::{Deserialize, Serialize};

/// Optional capabilities of the hosting provider.
///
/// Providers need not support propagating a transaction to another thread
/// and may reject definitions that list `Transaction` as propagated, so the
/// default is the conservative policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderCapabilities {
    /// Whether `Transaction` may be listed as a propagated context type.
    #[serde(default)]
    pub propagate_transactions: bool,
}

impl ProviderCapabilities {
    /// Accept everything the contract allows, transaction propagation
    /// included.
    pub fn permissive() -> Self {
        Self {
            propagate_transactions: true,
        }
    }
}

impl Default for ProviderCapabilities {
    fn default() -> Self {
        Self {
            propagate_transactions: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_conservative() {
        assert!(!ProviderCapabilities::default().propagate_transactions);
        assert!(ProviderCapabilities::permissive().propagate_transactions);
    }

    #[test]
    fn omitted_fields_deserialize_to_default() {
        let caps: ProviderCapabilities = serde_json::from_str("{}").unwrap();
        assert_eq!(caps, ProviderCapabilities::default());
    }
}
