//! Module registry
//!
//! Holds the static module list, checked once at construction, and plans which
//! modules run for a configuration and in what order.

use std::collections::{BTreeSet, HashMap, HashSet};

use super::{builtin, Category, GeneratorModule, VersionRegistry};
use crate::domain::entities::StackConfig;
use crate::domain::value_objects::Workspace;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("duplicate module id `{0}`")]
    DuplicateId(&'static str),

    #[error("module `{module}` depends on unknown module `{depends_on}`")]
    UnknownDependency {
        module: &'static str,
        depends_on: &'static str,
    },

    #[error("module `{module}` depends on `{depends_on}`, which runs in a later category")]
    DependencyOrder {
        module: &'static str,
        depends_on: &'static str,
    },

    #[error("dependency cycle among {category} modules: {}", modules.join(", "))]
    DependencyCycle {
        category: Category,
        modules: Vec<&'static str>,
    },

    #[error("module `{module}` requests package `{package}`, which has no registered version")]
    UnknownPackage {
        module: &'static str,
        package: &'static str,
    },

    #[error("module `{module}` writes to the {workspace} workspace, which no earlier module creates")]
    WorkspaceNotCreated {
        module: &'static str,
        workspace: Workspace,
    },
}

#[derive(Debug, Clone)]
pub struct ModuleRegistry {
    modules: Vec<GeneratorModule>,
}

impl ModuleRegistry {
    /// Validate and build a registry
    pub fn new(
        modules: Vec<GeneratorModule>,
        versions: &VersionRegistry,
    ) -> Result<Self, RegistryError> {
        let mut by_id: HashMap<&'static str, Category> = HashMap::new();
        for module in &modules {
            if by_id.insert(module.id, module.category).is_some() {
                return Err(RegistryError::DuplicateId(module.id));
            }
        }

        for module in &modules {
            for &dep in &module.depends_on {
                match by_id.get(&dep) {
                    None => {
                        return Err(RegistryError::UnknownDependency {
                            module: module.id,
                            depends_on: dep,
                        })
                    }
                    Some(category) if *category > module.category => {
                        return Err(RegistryError::DependencyOrder {
                            module: module.id,
                            depends_on: dep,
                        })
                    }
                    Some(_) => {}
                }
            }

            if let Some(package) = module.packages.iter().find(|p| !versions.contains(p.name)) {
                return Err(RegistryError::UnknownPackage {
                    module: module.id,
                    package: package.name,
                });
            }

            for workspace in module.contributes_to() {
                let created = module.creates.contains(&workspace)
                    || modules
                        .iter()
                        .any(|m| m.category < module.category && m.creates.contains(&workspace));
                if !created {
                    return Err(RegistryError::WorkspaceNotCreated {
                        module: module.id,
                        workspace,
                    });
                }
            }
        }

        for category in Category::ORDER {
            let members: Vec<&GeneratorModule> =
                modules.iter().filter(|m| m.category == category).collect();
            let sorted = stable_topo_sort(&members);
            if sorted.len() != members.len() {
                let placed: HashSet<&str> = sorted.iter().map(|m| m.id).collect();
                return Err(RegistryError::DependencyCycle {
                    category,
                    modules: members
                        .iter()
                        .map(|m| m.id)
                        .filter(|id| !placed.contains(id))
                        .collect(),
                });
            }
        }

        Ok(Self { modules })
    }

    /// The built-in modules, validated against the built-in version table
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::new(builtin::modules(), VersionRegistry::builtin())
    }

    pub fn get(&self, id: &str) -> Option<&GeneratorModule> {
        self.modules.iter().find(|m| m.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GeneratorModule> {
        self.modules.iter()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Modules that apply to `config`, in execution order
    ///
    /// Categories run in their fixed order. Within a category, registry order,
    /// except that a module runs after the applicable modules it depends on.
    pub fn plan(&self, config: &StackConfig) -> Vec<&GeneratorModule> {
        Category::ORDER
            .iter()
            .flat_map(|category| {
                let members: Vec<&GeneratorModule> = self
                    .modules
                    .iter()
                    .filter(|m| m.category == *category && m.applies(config))
                    .collect();
                stable_topo_sort(&members)
            })
            .collect()
    }

    /// Module ids that apply to `config`, in execution order
    pub fn plan_ids(&self, config: &StackConfig) -> Vec<&'static str> {
        self.plan(config).iter().map(|m| m.id).collect()
    }
}

/// Kahn's algorithm, always emitting the earliest ready module so that
/// unconstrained modules keep their input order. Dependencies outside
/// `members` are treated as satisfied. Modules on a cycle are left out.
fn stable_topo_sort<'a>(members: &[&'a GeneratorModule]) -> Vec<&'a GeneratorModule> {
    let ids: BTreeSet<&str> = members.iter().map(|m| m.id).collect();
    let mut emitted: HashSet<&str> = HashSet::new();
    let mut out = Vec::with_capacity(members.len());

    while out.len() < members.len() {
        let ready = members.iter().find(|m| {
            !emitted.contains(m.id)
                && m.depends_on
                    .iter()
                    .all(|d| emitted.contains(d) || !ids.contains(d))
        });
        match ready {
            Some(module) => {
                emitted.insert(module.id);
                out.push(*module);
            }
            None => break,
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{Backend, Database, Orm};

    fn base() -> GeneratorModule {
        GeneratorModule::new("base", Category::Base, |_| true).creates(Workspace::Root)
    }

    fn versions() -> VersionRegistry {
        VersionRegistry::new(&[("hono", "^4"), ("drizzle-orm", "^0.44")])
    }

    #[test]
    fn builtin_registry_is_valid() {
        let registry = ModuleRegistry::builtin().unwrap();
        assert!(registry.get("base").is_some());
        assert!(registry.get("addon-turborepo").is_some());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = ModuleRegistry::new(vec![base(), base()], &versions()).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateId("base"));
    }

    #[test]
    fn unknown_package_is_caught_at_registration() {
        let modules = vec![
            base(),
            GeneratorModule::new("server", Category::Backend, |_| true)
                .creates(Workspace::Server)
                .deps(Workspace::Server, &["hono", "left-pad"]),
        ];
        let err = ModuleRegistry::new(modules, &versions()).unwrap_err();
        assert_eq!(
            err,
            RegistryError::UnknownPackage {
                module: "server",
                package: "left-pad"
            }
        );
    }

    #[test]
    fn contributing_to_an_uncreated_workspace_is_rejected() {
        // server workspace is only created in a later category
        let modules = vec![
            base(),
            GeneratorModule::new("api", Category::Api, |_| true).deps(Workspace::Server, &["hono"]),
            GeneratorModule::new("server", Category::Deploy, |_| true).creates(Workspace::Server),
        ];
        let err = ModuleRegistry::new(modules, &versions()).unwrap_err();
        assert_eq!(
            err,
            RegistryError::WorkspaceNotCreated {
                module: "api",
                workspace: Workspace::Server
            }
        );
    }

    #[test]
    fn depending_on_a_later_category_is_rejected() {
        let modules = vec![
            base().after(&["late"]),
            GeneratorModule::new("late", Category::Addons, |_| true),
        ];
        let err = ModuleRegistry::new(modules, &versions()).unwrap_err();
        assert!(matches!(err, RegistryError::DependencyOrder { .. }));
    }

    #[test]
    fn cycles_are_rejected() {
        let modules = vec![
            base(),
            GeneratorModule::new("a", Category::Addons, |_| true).after(&["b"]),
            GeneratorModule::new("b", Category::Addons, |_| true).after(&["a"]),
        ];
        let err = ModuleRegistry::new(modules, &versions()).unwrap_err();
        assert_eq!(
            err,
            RegistryError::DependencyCycle {
                category: Category::Addons,
                modules: vec!["a", "b"]
            }
        );
    }

    #[test]
    fn plan_orders_by_category_then_dependencies() {
        let modules = vec![
            GeneratorModule::new("z-addon", Category::Addons, |_| true).after(&["y-addon"]),
            GeneratorModule::new("y-addon", Category::Addons, |_| true),
            GeneratorModule::new("server", Category::Backend, |_| true),
            base(),
        ];
        let registry = ModuleRegistry::new(modules, &versions()).unwrap();

        assert_eq!(
            registry.plan_ids(&StackConfig::default()),
            vec!["base", "server", "y-addon", "z-addon"]
        );
    }

    #[test]
    fn plan_skips_modules_that_do_not_apply() {
        let registry = ModuleRegistry::builtin().unwrap();
        let config = StackConfig {
            backend: Backend::Convex,
            runtime: crate::domain::value_objects::Runtime::None,
            database: Database::None,
            orm: Orm::None,
            ..StackConfig::default()
        };

        let ids = registry.plan_ids(&config);

        assert!(ids.contains(&"backend-convex"));
        assert!(!ids.contains(&"server-hono"));
        assert!(!ids.iter().any(|id| id.starts_with("orm-")));
    }

    #[test]
    fn default_plan() {
        let ids = ModuleRegistry::builtin()
            .unwrap()
            .plan_ids(&StackConfig::default());
        assert_eq!(
            ids,
            vec![
                "base",
                "web-react-vite",
                "server-hono",
                "api-trpc",
                "orm-drizzle",
                "auth-better-auth",
                "addon-turborepo",
            ]
        );
    }
}
