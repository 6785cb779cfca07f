//! Whole-component deployment processing.

use managed_defs::{ComponentDeclarations, ResourceName};

use crate::capabilities::ProviderCapabilities;
use crate::normalize::DefinitionError;
use crate::registry::{RegistryError, ResourceRegistry};

/// One definition that failed validation during deployment. The failure is
/// local: unrelated definitions still deploy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionFailure {
    pub name: ResourceName,
    pub error: DefinitionError,
}

/// Fatal deployment error; the application must not initialize.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeploymentError {
    #[error("duplicate resource name '{0}' across declarations")]
    DuplicateName(ResourceName),
}

/// Outcome of processing one component's declarations: the registry of
/// everything that bound, plus the definitions that failed validation.
#[derive(Debug)]
pub struct Deployment {
    pub registry: ResourceRegistry,
    pub failures: Vec<DefinitionFailure>,
}

impl Deployment {
    /// Whether every declaration validated and bound.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Processes a component's declarations into a bound registry.
///
/// Declarations are walked in declaration order (context services first,
/// then thread factories). A definition whose context sets conflict, or that
/// the provider's capabilities reject, is recorded as a failure and skipped.
/// Two declarations sharing a name reject the whole deployment.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeploymentProcessor {
    capabilities: ProviderCapabilities,
}

impl DeploymentProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capabilities(capabilities: ProviderCapabilities) -> Self {
        Self { capabilities }
    }

    pub fn process(
        &self,
        declarations: &ComponentDeclarations,
    ) -> Result<Deployment, DeploymentError> {
        let mut registry = ResourceRegistry::with_capabilities(self.capabilities);
        let mut failures = Vec::new();

        for def in &declarations.context_services {
            Self::record(registry.bind_context_service(def), &mut failures)?;
        }
        for def in &declarations.thread_factories {
            Self::record(registry.bind_thread_factory(def), &mut failures)?;
        }

        Ok(Deployment { registry, failures })
    }

    fn record(
        outcome: Result<(), RegistryError>,
        failures: &mut Vec<DefinitionFailure>,
    ) -> Result<(), DeploymentError> {
        match outcome {
            Ok(()) => Ok(()),
            Err(RegistryError::DuplicateName(name)) => Err(DeploymentError::DuplicateName(name)),
            Err(RegistryError::Definition { name, source }) => {
                failures.push(DefinitionFailure {
                    name,
                    error: source,
                });
                Ok(())
            }
        }
    }
}
