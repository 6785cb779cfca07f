//! Resource definition records.

use serde::{Deserialize, Serialize};

use crate::context::ContextType;
use crate::name::ResourceName;

/// Lowest priority in the thread scheduling model.
pub const MIN_PRIORITY: i32 = 1;
/// Normal priority; the default for threads from a new factory.
pub const NORM_PRIORITY: i32 = 5;
/// Highest priority in the thread scheduling model.
pub const MAX_PRIORITY: i32 = 10;

/// Declares a named context-propagation policy to be constructed and bound
/// by the container under [`name`](Self::name).
///
/// The three lists configure how thread context is applied to work that the
/// resulting service contextualizes: `cleared` types are suspended while the
/// work runs and restored afterward, `propagated` types are captured from the
/// submitting thread and re-established on the executing one, and `unchanged`
/// types are left alone. The [`ContextType::Remaining`] sentinel stands for
/// every type not listed elsewhere; if it appears in none of the lists, the
/// processor treats it as appended to `cleared`.
///
/// Listing the same concrete type in more than one list is an error that
/// prevents the service from being constructed (see `managed-registry`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextServiceDefinition {
    pub name: ResourceName,
    #[serde(default = "default_cleared")]
    pub cleared: Vec<ContextType>,
    #[serde(default = "default_propagated")]
    pub propagated: Vec<ContextType>,
    #[serde(default)]
    pub unchanged: Vec<ContextType>,
}

impl ContextServiceDefinition {
    /// A definition with the documented defaults:
    /// `cleared = [Transaction]`, `propagated = [Remaining]`, `unchanged = []`.
    pub fn new(name: ResourceName) -> Self {
        Self {
            name,
            cleared: default_cleared(),
            propagated: default_propagated(),
            unchanged: Vec::new(),
        }
    }

    /// Replace the cleared context types.
    pub fn cleared(mut self, types: Vec<ContextType>) -> Self {
        self.cleared = types;
        self
    }

    /// Replace the propagated context types.
    pub fn propagated(mut self, types: Vec<ContextType>) -> Self {
        self.propagated = types;
        self
    }

    /// Replace the unchanged context types.
    pub fn unchanged(mut self, types: Vec<ContextType>) -> Self {
        self.unchanged = types;
        self
    }
}

fn default_cleared() -> Vec<ContextType> {
    vec![ContextType::Transaction]
}

fn default_propagated() -> Vec<ContextType> {
    vec![ContextType::Remaining]
}

/// Declares a named thread-creation facility to be constructed and bound by
/// the container under [`name`](Self::name).
///
/// `context` is an embedded [`ContextServiceDefinition`] value, not a name
/// reference; it governs how context is applied to threads the factory
/// creates. The default embeds a definition named after the container's
/// default context service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreadFactoryDefinition {
    pub name: ResourceName,
    /// Priority for new threads. Not range-checked here; the thread model
    /// of the constructed factory decides what it accepts.
    #[serde(default = "default_priority")]
    pub priority: i32,
    #[serde(default = "default_factory_context")]
    pub context: ContextServiceDefinition,
}

impl ThreadFactoryDefinition {
    /// A definition with the documented defaults: `priority = NORM_PRIORITY`
    /// and a context referencing the default context service.
    pub fn new(name: ResourceName) -> Self {
        Self {
            name,
            priority: NORM_PRIORITY,
            context: default_factory_context(),
        }
    }

    /// Replace the thread priority.
    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Replace the embedded context definition.
    pub fn context(mut self, context: ContextServiceDefinition) -> Self {
        self.context = context;
        self
    }
}

fn default_priority() -> i32 {
    NORM_PRIORITY
}

fn default_factory_context() -> ContextServiceDefinition {
    ContextServiceDefinition::new(ResourceName::default_context_service())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::name::DEFAULT_CONTEXT_SERVICE;

    fn name(s: &str) -> ResourceName {
        s.parse().unwrap()
    }

    #[test]
    fn context_service_defaults() {
        let def = ContextServiceDefinition::new(name("java:app/concurrent/Ctx"));
        assert_eq!(def.cleared, vec![ContextType::Transaction]);
        assert_eq!(def.propagated, vec![ContextType::Remaining]);
        assert!(def.unchanged.is_empty());
    }

    #[test]
    fn thread_factory_defaults() {
        let def = ThreadFactoryDefinition::new(name("java:comp/concurrent/Factory"));
        assert_eq!(def.priority, NORM_PRIORITY);
        assert_eq!(def.context.name.as_str(), DEFAULT_CONTEXT_SERVICE);
        assert_eq!(def.context.cleared, vec![ContextType::Transaction]);
        assert_eq!(def.context.propagated, vec![ContextType::Remaining]);
        assert!(def.context.unchanged.is_empty());
    }

    #[test]
    fn builder_setters() {
        let def = ThreadFactoryDefinition::new(name("java:global/concurrent/MyThreadFactory"))
            .priority(4)
            .context(
                ContextServiceDefinition::new(name("java:global/concurrent/MyThreadFactoryContext"))
                    .propagated(vec![ContextType::Application])
                    .cleared(vec![])
                    .unchanged(vec![]),
            );
        assert_eq!(def.priority, 4);
        assert_eq!(def.context.propagated, vec![ContextType::Application]);
        assert!(def.context.cleared.is_empty());
    }

    #[test]
    fn omitted_fields_deserialize_to_defaults() {
        let def: ThreadFactoryDefinition =
            serde_json::from_str(r#"{ "name": "java:comp/concurrent/F" }"#).unwrap();
        assert_eq!(def.priority, NORM_PRIORITY);
        assert_eq!(def.context.name.as_str(), DEFAULT_CONTEXT_SERVICE);

        let csd: ContextServiceDefinition =
            serde_json::from_str(r#"{ "name": "java:app/concurrent/Ctx" }"#).unwrap();
        assert_eq!(csd.cleared, vec![ContextType::Transaction]);
        assert_eq!(csd.propagated, vec![ContextType::Remaining]);
        assert!(csd.unchanged.is_empty());
    }

    #[test]
    fn declaration_form_with_context_lists() {
        let json = r#"{
            "name": "java:module/concurrent/SecurityContext",
            "propagated": ["Security"],
            "unchanged": ["Transaction"],
            "cleared": ["Remaining"]
        }"#;
        let def: ContextServiceDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(def.propagated, vec![ContextType::Security]);
        assert_eq!(def.unchanged, vec![ContextType::Transaction]);
        assert_eq!(def.cleared, vec![ContextType::Remaining]);
    }
}
