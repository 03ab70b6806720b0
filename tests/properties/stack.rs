//! Strategies producing arbitrary catalog-legal stacks.

use std::collections::BTreeSet;
use std::fmt::Debug;

use proptest::prelude::*;
use proptest::sample::{select, subsequence};

use stackwright::domain::value_objects::{
    Addon, Api, Auth, Backend, Database, DbSetup, Example, Frontend, Orm, PackageManager,
    Runtime, ServerDeploy, WebDeploy,
};
use stackwright::StackConfig;

fn any_set<T: Clone + Ord + Debug + 'static>(all: &'static [T]) -> impl Strategy<Value = BTreeSet<T>> {
    subsequence(all, 0..=all.len()).prop_map(|v| v.into_iter().collect())
}

/// Any combination of catalog values, consistent or not
pub fn any_stack() -> impl Strategy<Value = StackConfig> {
    let core = (
        any_set(Frontend::ALL),
        select(Backend::ALL),
        select(Runtime::ALL),
        select(Database::ALL),
        select(Orm::ALL),
        select(Auth::ALL),
        select(Api::ALL),
        select(DbSetup::ALL),
    );
    let extras = (
        any_set(Addon::ALL),
        any_set(Example::ALL),
        select(WebDeploy::ALL),
        select(ServerDeploy::ALL),
        select(PackageManager::ALL),
        any::<bool>(),
        any::<bool>(),
    );
    (core, extras).prop_map(
        |(
            (frontend, backend, runtime, database, orm, auth, api, db_setup),
            (addons, examples, web_deploy, server_deploy, package_manager, git, install),
        )| StackConfig {
            frontend,
            backend,
            runtime,
            database,
            orm,
            auth,
            api,
            db_setup,
            addons,
            examples,
            web_deploy,
            server_deploy,
            package_manager,
            git,
            install,
        },
    )
}
