//! Orchestrator properties over resolved stacks.

use std::collections::BTreeSet;
use std::path::Path;

use proptest::prelude::*;

use stackwright::domain::value_objects::Workspace;
use stackwright::infrastructure::fs::MemoryFs;
use stackwright::modules::VersionRegistry;
use stackwright::{GenerateOptions, GenerateUseCase, ModuleRegistry, Resolver};

use crate::stack::any_stack;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: no module touching a workspace runs before the module creating it.
    #[test]
    fn property_creators_run_before_contributors(config in any_stack()) {
        let resolved = Resolver::default().resolve(&config).unwrap().final_config;
        let registry = ModuleRegistry::builtin().unwrap();
        let plan = registry.plan(&resolved);

        for workspace in Workspace::ALL {
            let Some(creator) = plan.iter().position(|m| m.creates.contains(&workspace)) else {
                continue;
            };
            if let Some(contributor) = plan
                .iter()
                .position(|m| m.packages.iter().any(|p| p.workspace == workspace))
            {
                prop_assert!(
                    creator <= contributor,
                    "{} contributes to {} before {} creates it",
                    plan[contributor].id,
                    workspace,
                    plan[creator].id
                );
            }
        }
    }

    /// PROPERTY: every resolved stack generates, and nothing aimed at a workspace
    /// the plan creates is ever skipped.
    #[test]
    fn property_resolved_stacks_generate(config in any_stack()) {
        let resolved = Resolver::default().resolve(&config).unwrap().final_config;
        let registry = ModuleRegistry::builtin().unwrap();
        let created: BTreeSet<Workspace> = registry
            .plan(&resolved)
            .iter()
            .flat_map(|m| m.creates.iter().copied())
            .collect();

        let fs = MemoryFs::new();
        let project = GenerateUseCase::new(&fs, &registry, VersionRegistry::builtin())
            .execute(&resolved, &GenerateOptions::new(Path::new("/work/app")));

        prop_assert!(project.is_ok(), "{:?}", project.err());
        for skip in &project.unwrap().skipped {
            prop_assert!(!created.contains(&skip.workspace), "skipped {:?}", skip);
        }
    }

    /// PROPERTY: the plan depends on nothing but the configuration.
    #[test]
    fn property_plan_is_stable(config in any_stack()) {
        let resolved = Resolver::default().resolve(&config).unwrap().final_config;
        let registry = ModuleRegistry::builtin().unwrap();
        prop_assert_eq!(registry.plan_ids(&resolved), registry.plan_ids(&resolved));
    }
}
