//! Name-keyed binding registry for validated definitions.

use std::collections::HashMap;

use managed_defs::{ContextServiceDefinition, ResourceName, ThreadFactoryDefinition};

use crate::capabilities::ProviderCapabilities;
use crate::normalize::{normalize_with, ContextSets, DefinitionError};

/// A context-service definition that passed validation: the metadata the
/// container hands to its runtime constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextServiceBinding {
    pub name: ResourceName,
    pub sets: ContextSets,
}

/// A thread-factory definition that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadFactoryBinding {
    pub name: ResourceName,
    pub priority: i32,
    /// Context policy for threads from this factory. Validated alongside the
    /// factory but never bound under its own name.
    pub context: ContextServiceBinding,
}

/// Error from binding a definition into the registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("a resource is already bound under '{0}'")]
    DuplicateName(ResourceName),

    #[error("definition '{name}' is invalid: {source}")]
    Definition {
        name: ResourceName,
        source: DefinitionError,
    },
}

#[derive(Debug)]
enum Binding {
    ContextService(ContextServiceBinding),
    ThreadFactory(ThreadFactoryBinding),
}

/// Registry of successfully validated resource definitions, keyed by their
/// lookup name. Both resource kinds share the single name space.
#[derive(Debug)]
pub struct ResourceRegistry {
    capabilities: ProviderCapabilities,
    bindings: HashMap<ResourceName, Binding>,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self::with_capabilities(ProviderCapabilities::default())
    }

    pub fn with_capabilities(capabilities: ProviderCapabilities) -> Self {
        Self {
            capabilities,
            bindings: HashMap::new(),
        }
    }

    /// Validate a context-service definition and bind it under its name.
    ///
    /// A validation failure binds nothing; an occupied name is a
    /// [`RegistryError::DuplicateName`].
    pub fn bind_context_service(
        &mut self,
        def: &ContextServiceDefinition,
    ) -> Result<(), RegistryError> {
        self.check_free(&def.name)?;
        let sets = self.validate(def)?;
        self.bindings.insert(
            def.name.clone(),
            Binding::ContextService(ContextServiceBinding {
                name: def.name.clone(),
                sets,
            }),
        );
        Ok(())
    }

    /// Validate a thread-factory definition, embedded context included, and
    /// bind it under its name.
    pub fn bind_thread_factory(
        &mut self,
        def: &ThreadFactoryDefinition,
    ) -> Result<(), RegistryError> {
        self.check_free(&def.name)?;
        let sets = self.validate(&def.context)?;
        self.bindings.insert(
            def.name.clone(),
            Binding::ThreadFactory(ThreadFactoryBinding {
                name: def.name.clone(),
                priority: def.priority,
                context: ContextServiceBinding {
                    name: def.context.name.clone(),
                    sets,
                },
            }),
        );
        Ok(())
    }

    /// Look up a bound context service by name.
    pub fn context_service(&self, name: &str) -> Option<&ContextServiceBinding> {
        match self.bindings.get(name) {
            Some(Binding::ContextService(binding)) => Some(binding),
            _ => None,
        }
    }

    /// Look up a bound thread factory by name.
    pub fn thread_factory(&self, name: &str) -> Option<&ThreadFactoryBinding> {
        match self.bindings.get(name) {
            Some(Binding::ThreadFactory(binding)) => Some(binding),
            _ => None,
        }
    }

    /// Whether any resource is bound under the given name.
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// All bound names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &ResourceName> {
        self.bindings.keys()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    fn check_free(&self, name: &ResourceName) -> Result<(), RegistryError> {
        if self.bindings.contains_key(name.as_str()) {
            return Err(RegistryError::DuplicateName(name.clone()));
        }
        Ok(())
    }

    fn validate(&self, def: &ContextServiceDefinition) -> Result<ContextSets, RegistryError> {
        normalize_with(def, &self.capabilities).map_err(|source| RegistryError::Definition {
            name: def.name.clone(),
            source,
        })
    }
}

impl Default for ResourceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
