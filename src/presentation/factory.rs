//! Use Case Factory
//!
//! Builds the registry and resolver once per process and hands out use cases
//! bound to a file system. This is the dependency injection point for the
//! application.

use std::collections::BTreeSet;

use crate::application::{AddUseCase, GenerateUseCase};
use crate::config::Config;
use crate::domain::entities::StackConfig;
use crate::domain::ports::FileSystem;
use crate::domain::services::{ResolutionResult, ResolveError, Resolver};
use crate::domain::value_objects::Field;
use crate::modules::{ModuleRegistry, RegistryError, VersionRegistry};

pub struct Services {
    pub registry: ModuleRegistry,
    pub resolver: Resolver,
    pub versions: &'static VersionRegistry,
    auto_fix: bool,
}

impl Services {
    pub fn from_config(config: &Config) -> Result<Self, RegistryError> {
        Ok(Self {
            registry: ModuleRegistry::builtin()?,
            resolver: Resolver::default().with_max_passes(config.resolver.max_passes),
            versions: VersionRegistry::builtin(),
            auto_fix: config.resolver.auto_fix,
        })
    }

    /// Resolve with auto-fix, or strictly around `pinned` when auto-fix is off
    /// (by flag or by configuration)
    pub fn resolve(
        &self,
        config: &StackConfig,
        no_auto_fix: bool,
        pinned: &BTreeSet<Field>,
    ) -> Result<ResolutionResult, ResolveError> {
        if no_auto_fix || !self.auto_fix {
            self.resolver.resolve_strict(config, pinned)
        } else {
            self.resolver.resolve(config)
        }
    }

    pub fn generate_use_case<'a>(&'a self, fs: &'a dyn FileSystem) -> GenerateUseCase<'a> {
        GenerateUseCase::new(fs, &self.registry, self.versions)
    }

    pub fn add_use_case<'a>(&'a self, fs: &'a dyn FileSystem) -> AddUseCase<'a> {
        AddUseCase::new(fs, &self.registry, self.versions, &self.resolver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{Backend, Runtime};

    fn express_on_workers() -> StackConfig {
        StackConfig {
            backend: Backend::Express,
            runtime: Runtime::Workers,
            ..StackConfig::default()
        }
    }

    #[test]
    fn auto_fix_corrects_conflicting_flags() {
        let services = Services::from_config(&Config::default()).unwrap();
        let pinned = BTreeSet::from([Field::Backend, Field::Runtime]);

        let result = services
            .resolve(&express_on_workers(), false, &pinned)
            .unwrap();

        assert_eq!(result.final_config.backend, Backend::Hono);
    }

    #[test]
    fn no_auto_fix_rejects_conflicting_pins() {
        let services = Services::from_config(&Config::default()).unwrap();
        let pinned = BTreeSet::from([Field::Backend, Field::Runtime]);

        let err = services
            .resolve(&express_on_workers(), true, &pinned)
            .unwrap_err();

        assert!(matches!(err, ResolveError::Incompatible(_)));
    }

    #[test]
    fn configured_auto_fix_off_behaves_like_the_flag() {
        let mut config = Config::default();
        config.resolver.auto_fix = false;
        let services = Services::from_config(&config).unwrap();
        let pinned = BTreeSet::from([Field::Backend, Field::Runtime]);

        assert!(services.resolve(&express_on_workers(), false, &pinned).is_err());
    }
}
