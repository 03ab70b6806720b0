//! Resolver properties: idempotence, determinism, termination, convergence.

use proptest::prelude::*;

use stackwright::domain::services::MAX_PASSES;
use stackwright::domain::value_objects::{Api, Backend, Database, Orm, Runtime};
use stackwright::{Resolver, StackConfig};

use crate::stack::any_stack;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: resolving an already resolved stack fires nothing.
    #[test]
    fn property_resolution_is_idempotent(config in any_stack()) {
        let resolver = Resolver::default();
        let first = resolver.resolve(&config).unwrap();
        let second = resolver.resolve(&first.final_config).unwrap();

        prop_assert!(second.fired.is_empty(), "fired again: {:?}", second.fired);
        prop_assert_eq!(second.final_config, first.final_config);
    }

    /// PROPERTY: identical input gives an identical result, audit trail included.
    #[test]
    fn property_resolution_is_deterministic(config in any_stack()) {
        let resolver = Resolver::default();
        prop_assert_eq!(resolver.resolve(&config).unwrap(), resolver.resolve(&config).unwrap());
    }

    /// PROPERTY: auto-fix never fails and settles within the pass bound.
    #[test]
    fn property_resolution_terminates(config in any_stack()) {
        let result = Resolver::default().resolve(&config);

        prop_assert!(result.is_ok(), "{:?}", result.err());
        let passes = result.unwrap().passes;
        prop_assert!(passes <= MAX_PASSES, "took {} passes", passes);
    }

    /// PROPERTY: a managed-platform backend always clears the server-side fields.
    #[test]
    fn property_convex_clears_server_fields(config in any_stack()) {
        let config = StackConfig { backend: Backend::Convex, ..config };
        let result = Resolver::default().resolve(&config).unwrap().final_config;

        prop_assert_eq!(result.backend, Backend::Convex);
        prop_assert_eq!(result.runtime, Runtime::None);
        prop_assert_eq!(result.database, Database::None);
        prop_assert_eq!(result.orm, Orm::None);
        prop_assert_eq!(result.api, Api::None);
    }

    /// PROPERTY: fields the resolver did not report as changed are untouched.
    #[test]
    fn property_changed_fields_match_the_audit_trail(config in any_stack()) {
        let result = Resolver::default().resolve(&config).unwrap();

        let assigned: std::collections::BTreeSet<_> = result
            .fired
            .iter()
            .flat_map(|f| f.assignments.iter().map(|a| a.field()))
            .collect();
        for field in result.changed_fields(&config) {
            prop_assert!(assigned.contains(&field), "{:?} changed without a fired rule", field);
        }
    }
}
