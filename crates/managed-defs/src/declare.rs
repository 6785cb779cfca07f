//! Repeatable declarations and the per-component view.

use serde::{Deserialize, Serialize};

use crate::definition::{ContextServiceDefinition, ThreadFactoryDefinition};

/// A repeatable declaration: a single record or a multi-valued list.
///
/// Both forms normalize to an ordered sequence; processors never need to
/// distinguish them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Declared<T> {
    Single(T),
    List(Vec<T>),
}

impl<T> Declared<T> {
    /// Normalize to the sequence form, preserving declaration order.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Single(def) => vec![def],
            Self::List(defs) => defs,
        }
    }

    /// Iterate the declared records in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        match self {
            Self::Single(def) => std::slice::from_ref(def).iter(),
            Self::List(defs) => defs.iter(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::List(defs) => defs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> From<T> for Declared<T> {
    fn from(def: T) -> Self {
        Self::Single(def)
    }
}

impl<T> From<Vec<T>> for Declared<T> {
    fn from(defs: Vec<T>) -> Self {
        Self::List(defs)
    }
}

/// All concurrency resource declarations attached to one application
/// component, in declaration order.
///
/// This is the read-only view a container queries during its scan. No
/// deduplication happens here; name uniqueness is checked when the container
/// binds the resources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentDeclarations {
    #[serde(default)]
    pub thread_factories: Vec<ThreadFactoryDefinition>,
    #[serde(default)]
    pub context_services: Vec<ContextServiceDefinition>,
}

impl ComponentDeclarations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append thread-factory declarations, single or multi-valued form.
    pub fn declare_thread_factories(
        &mut self,
        declared: impl Into<Declared<ThreadFactoryDefinition>>,
    ) {
        self.thread_factories.extend(declared.into().into_vec());
    }

    /// Append context-service declarations, single or multi-valued form.
    pub fn declare_context_services(
        &mut self,
        declared: impl Into<Declared<ContextServiceDefinition>>,
    ) {
        self.context_services.extend(declared.into().into_vec());
    }

    pub fn is_empty(&self) -> bool {
        self.thread_factories.is_empty() && self.context_services.is_empty()
    }

    /// Total number of declarations of both kinds.
    pub fn len(&self) -> usize {
        self.thread_factories.len() + self.context_services.len()
    }
}

/// Implemented by application component types that carry concurrency
/// resource declarations; the container calls this while scanning.
pub trait ResourceDeclarations {
    fn declarations(&self) -> ComponentDeclarations;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ContextType;
    use crate::name::ResourceName;

    fn csd(s: &str) -> ContextServiceDefinition {
        ContextServiceDefinition::new(s.parse().unwrap())
    }

    fn tfd(s: &str) -> ThreadFactoryDefinition {
        ThreadFactoryDefinition::new(s.parse().unwrap())
    }

    #[test]
    fn single_form_normalizes() {
        let declared = Declared::from(csd("java:app/concurrent/A"));
        assert_eq!(declared.len(), 1);
        let defs = declared.into_vec();
        assert_eq!(defs[0].name.as_str(), "java:app/concurrent/A");
    }

    #[test]
    fn list_form_preserves_order() {
        let declared: Declared<ContextServiceDefinition> = Declared::from(vec![
            csd("java:app/concurrent/A"),
            csd("java:app/concurrent/B"),
            csd("java:app/concurrent/C"),
        ]);
        let names: Vec<_> = declared.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "java:app/concurrent/A",
                "java:app/concurrent/B",
                "java:app/concurrent/C"
            ]
        );
    }

    #[test]
    fn component_collects_both_forms_in_order() {
        let mut decls = ComponentDeclarations::new();
        decls.declare_thread_factories(tfd("java:global/concurrent/First"));
        decls.declare_thread_factories(vec![
            tfd("java:global/concurrent/Second"),
            tfd("java:global/concurrent/Third"),
        ]);
        decls.declare_context_services(csd("java:app/concurrent/Ctx"));

        assert_eq!(decls.len(), 4);
        let names: Vec<_> = decls.thread_factories.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "java:global/concurrent/First",
                "java:global/concurrent/Second",
                "java:global/concurrent/Third"
            ]
        );
    }

    #[test]
    fn duplicate_names_are_kept_at_this_layer() {
        let mut decls = ComponentDeclarations::new();
        decls.declare_context_services(csd("java:app/concurrent/X"));
        decls.declare_context_services(csd("java:app/concurrent/X"));
        assert_eq!(decls.context_services.len(), 2);
    }

    #[test]
    fn untagged_serde_accepts_single_and_list() {
        let single: Declared<ContextServiceDefinition> =
            serde_json::from_str(r#"{ "name": "java:app/concurrent/A" }"#).unwrap();
        assert_eq!(single.len(), 1);

        let list: Declared<ContextServiceDefinition> = serde_json::from_str(
            r#"[
                { "name": "java:app/concurrent/A" },
                { "name": "java:app/concurrent/B", "propagated": ["Application"] }
            ]"#,
        )
        .unwrap();
        assert_eq!(list.len(), 2);
        let defs = list.into_vec();
        assert_eq!(defs[1].propagated, vec![ContextType::Application]);
    }

    #[test]
    fn trait_exposes_declarations() {
        struct ReportComponent;

        impl ResourceDeclarations for ReportComponent {
            fn declarations(&self) -> ComponentDeclarations {
                let mut decls = ComponentDeclarations::new();
                decls.declare_thread_factories(
                    tfd("java:module/concurrent/ReportFactory").priority(3),
                );
                decls
            }
        }

        let decls = ReportComponent.declarations();
        assert_eq!(decls.thread_factories.len(), 1);
        assert_eq!(decls.thread_factories[0].priority, 3);
        let _: &ResourceName = &decls.thread_factories[0].name;
    }
}
