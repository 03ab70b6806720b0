//! Scenario: generation is a pure function of configuration and options.

use chrono::{TimeZone, Utc};

use stackwright::domain::value_objects::{Backend, Frontend, Runtime};
use stackwright::infrastructure::fs::{LocalFs, MemoryFs};
use stackwright::modules::VersionRegistry;
use stackwright::{GenerateOptions, GenerateUseCase, ModuleRegistry, Resolver, StackConfig};

fn options(dir: &std::path::Path) -> GenerateOptions {
    GenerateOptions::new(dir)
        .with_tool_version("0.4.0")
        .with_created_at(Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap())
}

#[test]
fn regenerating_into_the_same_directory_is_stable() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("app");
    let fs = LocalFs::new();
    let registry = ModuleRegistry::builtin().unwrap();
    let use_case = GenerateUseCase::new(&fs, &registry, VersionRegistry::builtin());
    let config = StackConfig::default();

    let first = use_case.execute(&config, &options(&dir)).unwrap();
    let second = use_case.execute(&config, &options(&dir)).unwrap();

    assert_eq!(first.files_written, second.files_written);
    assert_eq!(first.fingerprint, second.fingerprint);
}

#[test]
fn memory_and_disk_generation_agree() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("app");
    let registry = ModuleRegistry::builtin().unwrap();
    let config = Resolver::default()
        .resolve(&StackConfig {
            frontend: [Frontend::Next, Frontend::NativeNativewind].into(),
            backend: Backend::Fastify,
            runtime: Runtime::Node,
            ..StackConfig::default()
        })
        .unwrap()
        .final_config;

    let local = LocalFs::new();
    let on_disk = GenerateUseCase::new(&local, &registry, VersionRegistry::builtin())
        .execute(&config, &options(&dir))
        .unwrap();
    let memory = MemoryFs::new();
    let in_memory = GenerateUseCase::new(&memory, &registry, VersionRegistry::builtin())
        .execute(&config, &options(&dir))
        .unwrap();

    assert_eq!(on_disk.modules_run, in_memory.modules_run);
    assert_eq!(on_disk.files_written, in_memory.files_written);
    assert_eq!(on_disk.fingerprint, in_memory.fingerprint);
}
