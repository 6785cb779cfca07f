//! Context-set overlap detection and `Remaining` resolution.

use std::collections::{BTreeSet, HashMap};

use managed_defs::{ContextServiceDefinition, ContextType};

use crate::capabilities::ProviderCapabilities;

/// Which of a definition's three context lists a type belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetKind {
    Cleared,
    Propagated,
    Unchanged,
}

impl SetKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cleared => "cleared",
            Self::Propagated => "propagated",
            Self::Unchanged => "unchanged",
        }
    }
}

impl std::fmt::Display for SetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Error from validating a single context-service definition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DefinitionError {
    #[error("context type '{context_type}' is listed in both {first} and {second}")]
    Conflict {
        context_type: ContextType,
        first: SetKind,
        second: SetKind,
    },

    #[error("this provider does not support propagation of '{context_type}' context")]
    UnsupportedPropagation { context_type: ContextType },
}

/// The normalized, pairwise-disjoint context sets of one definition.
///
/// `remaining` marks the set that absorbed the [`ContextType::Remaining`]
/// sentinel; the sentinel itself stays a member of that set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextSets {
    pub cleared: BTreeSet<ContextType>,
    pub propagated: BTreeSet<ContextType>,
    pub unchanged: BTreeSet<ContextType>,
    pub remaining: SetKind,
}

impl ContextSets {
    /// How the definition treats one concrete context type: the set that
    /// lists it, or the set holding `Remaining` when it is unlisted.
    pub fn disposition(&self, context_type: &ContextType) -> SetKind {
        if self.cleared.contains(context_type) {
            SetKind::Cleared
        } else if self.propagated.contains(context_type) {
            SetKind::Propagated
        } else if self.unchanged.contains(context_type) {
            SetKind::Unchanged
        } else {
            self.remaining
        }
    }
}

/// Validate and normalize a definition's three context lists.
///
/// Any context type (the `Remaining` sentinel included) listed in more than
/// one of the lists is a [`DefinitionError::Conflict`], and no partial result
/// is produced. Repetition *within* one list collapses silently. Vendor
/// types pass through unvalidated. If `Remaining` appears in none of the
/// lists, it is appended to `cleared`.
///
/// # Examples
/// ```
/// use managed_defs::{ContextServiceDefinition, ContextType};
/// use managed_registry::{normalize, SetKind};
///
/// let def = ContextServiceDefinition::new("java:app/concurrent/Ctx".parse().unwrap())
///     .cleared(vec![])
///     .propagated(vec![ContextType::Application])
///     .unchanged(vec![ContextType::Transaction]);
///
/// let sets = normalize(&def).unwrap();
/// assert!(sets.cleared.contains(&ContextType::Remaining));
/// assert_eq!(sets.remaining, SetKind::Cleared);
/// assert_eq!(sets.disposition(&ContextType::Security), SetKind::Cleared);
/// ```
pub fn normalize(def: &ContextServiceDefinition) -> Result<ContextSets, DefinitionError> {
    let mut cleared = BTreeSet::new();
    let mut propagated = BTreeSet::new();
    let mut unchanged = BTreeSet::new();
    let mut seen: HashMap<&ContextType, SetKind> = HashMap::new();

    let lists = [
        (SetKind::Cleared, &def.cleared),
        (SetKind::Propagated, &def.propagated),
        (SetKind::Unchanged, &def.unchanged),
    ];
    for (kind, list) in lists {
        for context_type in list {
            match seen.get(context_type) {
                Some(&first) if first != kind => {
                    return Err(DefinitionError::Conflict {
                        context_type: context_type.clone(),
                        first,
                        second: kind,
                    });
                }
                Some(_) => {}
                None => {
                    seen.insert(context_type, kind);
                }
            }
            let target = match kind {
                SetKind::Cleared => &mut cleared,
                SetKind::Propagated => &mut propagated,
                SetKind::Unchanged => &mut unchanged,
            };
            target.insert(context_type.clone());
        }
    }

    let remaining = if cleared.contains(&ContextType::Remaining) {
        SetKind::Cleared
    } else if propagated.contains(&ContextType::Remaining) {
        SetKind::Propagated
    } else if unchanged.contains(&ContextType::Remaining) {
        SetKind::Unchanged
    } else {
        cleared.insert(ContextType::Remaining);
        SetKind::Cleared
    };

    Ok(ContextSets {
        cleared,
        propagated,
        unchanged,
        remaining,
    })
}

/// [`normalize`], then apply provider capability policy: a definition that
/// explicitly lists `Transaction` as propagated fails with
/// [`DefinitionError::UnsupportedPropagation`] unless the provider opted in.
pub fn normalize_with(
    def: &ContextServiceDefinition,
    capabilities: &ProviderCapabilities,
) -> Result<ContextSets, DefinitionError> {
    let sets = normalize(def)?;
    if !capabilities.propagate_transactions && sets.propagated.contains(&ContextType::Transaction)
    {
        return Err(DefinitionError::UnsupportedPropagation {
            context_type: ContextType::Transaction,
        });
    }
    Ok(sets)
}
