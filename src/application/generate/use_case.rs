//! Generate Use Case
//!
//! Runs the planned modules strictly in order against the project directory:
//! 1. Create the workspaces a module owns
//! 2. Render its templates
//! 3. Merge its packages and scripts into the workspace manifests
//! 4. Apply its config patches
//!
//! then assembles `.env` files and writes the persisted state. A contribution
//! to a workspace that does not exist is skipped, not an error. Nothing is
//! rolled back on failure.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use tracing::{debug, info, info_span};

use crate::domain::entities::{ProjectState, StackConfig, STATE_FILE_NAME};
use crate::domain::ports::{FileSystem, StateRepository};
use crate::domain::value_objects::{ContentHash, Workspace};
use crate::infrastructure::project::{
    env_file, ConfigPatcher, ManifestMerger, PackageRequest, PatchReport, PatchStatus,
    TemplateContext, TemplateRenderer,
};
use crate::infrastructure::repositories::JsoncStateRepository;
use crate::modules::{GeneratorModule, ModuleRegistry, VersionRegistry};

use super::options::GenerateOptions;
use super::result::{
    GeneratedProject, GenerationError, GenerationErrorKind, SkippedContribution, Stage,
};

const MANIFEST: &str = "package.json";
const ENV_FILE: &str = ".env";

/// Module orchestrator
pub struct GenerateUseCase<'a> {
    fs: &'a dyn FileSystem,
    registry: &'a ModuleRegistry,
    versions: &'a VersionRegistry,
}

/// Mutable bookkeeping for one run
struct Run<'r> {
    config: &'r StackConfig,
    project_dir: &'r Path,
    renderer: TemplateRenderer,
    present: BTreeSet<Workspace>,
    written: BTreeSet<PathBuf>,
    skipped: Vec<SkippedContribution>,
    env: BTreeMap<Workspace, Vec<(&'static str, String)>>,
}

impl Run<'_> {
    fn relative_dir(&self, workspace: Workspace) -> PathBuf {
        workspace.relative_dir(self.config.backend)
    }

    fn skip(&mut self, module: &GeneratorModule, workspace: Workspace, item: String) {
        debug!(module = module.id, %workspace, %item, "workspace absent, contribution skipped");
        self.skipped.push(SkippedContribution {
            module: module.id,
            workspace,
            item,
        });
    }
}

impl<'a> GenerateUseCase<'a> {
    pub fn new(
        fs: &'a dyn FileSystem,
        registry: &'a ModuleRegistry,
        versions: &'a VersionRegistry,
    ) -> Self {
        Self {
            fs,
            registry,
            versions,
        }
    }

    /// Generate a new project from an already resolved configuration
    pub fn execute(
        &self,
        config: &StackConfig,
        options: &GenerateOptions,
    ) -> Result<GeneratedProject, GenerationError> {
        let plan = self.registry.plan(config);
        let state = ProjectState::new(
            config.clone(),
            options.tool_version.clone(),
            options.created_at,
        );
        self.execute_modules(&plan, config, options, &state)
    }

    /// Run `modules` (a subset of the plan for `config`, in plan order) and
    /// persist `state`
    pub fn execute_modules(
        &self,
        modules: &[&GeneratorModule],
        config: &StackConfig,
        options: &GenerateOptions,
        state: &ProjectState,
    ) -> Result<GeneratedProject, GenerationError> {
        let span = info_span!("generate", project = %options.project_name);
        let _guard = span.enter();

        let final_workspaces: BTreeSet<Workspace> = self
            .registry
            .plan(config)
            .iter()
            .flat_map(|m| m.creates.iter().copied())
            .collect();
        let context = TemplateContext::new(&options.project_name, config, &final_workspaces);

        let mut run = Run {
            config,
            project_dir: &options.project_dir,
            renderer: TemplateRenderer::new(&context),
            present: BTreeSet::new(),
            written: BTreeSet::new(),
            skipped: Vec::new(),
            env: BTreeMap::new(),
        };
        for workspace in Workspace::ALL {
            if self.fs.exists(&run.project_dir.join(run.relative_dir(workspace))) {
                run.present.insert(workspace);
            }
        }

        let mut patches = Vec::new();
        for module in modules {
            let stage = Stage::Module {
                id: module.id,
                category: module.category,
            };
            info!(module = module.id, category = %module.category, "running module");
            self.run_module(module, &mut run, &mut patches)
                .map_err(|kind| GenerationError::new(stage, kind))?;
        }

        self.bookkeeping(&mut run, state)
            .map_err(|kind| GenerationError::new(Stage::Bookkeeping, kind))?;

        let files_written: Vec<PathBuf> = run.written.into_iter().collect();
        let fingerprint = self
            .fingerprint(&options.project_dir, &files_written)
            .map_err(|kind| GenerationError::new(Stage::Bookkeeping, kind))?;

        info!(
            modules = modules.len(),
            files = files_written.len(),
            skipped = run.skipped.len(),
            "generation complete"
        );

        Ok(GeneratedProject {
            project_dir: options.project_dir.clone(),
            modules_run: modules.iter().map(|m| m.id).collect(),
            files_written,
            skipped: run.skipped,
            patches,
            fingerprint: fingerprint.to_string(),
        })
    }

    fn run_module(
        &self,
        module: &GeneratorModule,
        run: &mut Run<'_>,
        patches: &mut Vec<PatchReport>,
    ) -> Result<(), GenerationErrorKind> {
        let config = run.config;

        for &workspace in &module.creates {
            let dir = run.project_dir.join(run.relative_dir(workspace));
            self.fs.create_dir_all(&dir)?;
            run.present.insert(workspace);
        }

        for file in module.files_for(config) {
            if !run.present.contains(&file.workspace) {
                run.skip(module, file.workspace, file.path.to_string());
                continue;
            }
            let relative = run.relative_dir(file.workspace).join(file.path);
            let content = run.renderer.render(&relative.to_string_lossy(), file.source)?;
            self.fs.write(&run.project_dir.join(&relative), &content)?;
            debug!(module = module.id, file = %relative.display(), "wrote");
            run.written.insert(relative);
        }

        let merger = ManifestMerger::new(self.fs, self.versions);

        let mut requests: BTreeMap<Workspace, Vec<PackageRequest<'_>>> = BTreeMap::new();
        for package in module.packages_for(config) {
            if !run.present.contains(&package.workspace) {
                run.skip(module, package.workspace, format!("package {}", package.name));
                continue;
            }
            requests.entry(package.workspace).or_default().push(PackageRequest {
                name: package.name,
                kind: package.kind,
            });
        }
        for (workspace, requests) in &requests {
            let relative = run.relative_dir(*workspace).join(MANIFEST);
            merger.merge(&run.project_dir.join(&relative), requests)?;
            run.written.insert(relative);
        }

        let mut scripts: BTreeMap<Workspace, Vec<(&str, String)>> = BTreeMap::new();
        for script in module.scripts_for(config) {
            if !run.present.contains(&script.workspace) {
                run.skip(module, script.workspace, format!("script {}", script.name));
                continue;
            }
            let command = run.renderer.render(script.name, script.command)?;
            scripts
                .entry(script.workspace)
                .or_default()
                .push((script.name, command));
        }
        for (workspace, scripts) in &scripts {
            let relative = run.relative_dir(*workspace).join(MANIFEST);
            merger.merge_scripts(&run.project_dir.join(&relative), scripts)?;
            run.written.insert(relative);
        }

        for var in module.env_for(config) {
            if !run.present.contains(&var.workspace) {
                run.skip(module, var.workspace, format!("env {}", var.key));
                continue;
            }
            let value = run.renderer.render(var.key, var.value)?;
            run.env.entry(var.workspace).or_default().push((var.key, value));
        }

        let patcher = ConfigPatcher::new(self.fs);
        for patch in module.patches_for(config) {
            if !run.present.contains(&patch.workspace) {
                run.skip(module, patch.workspace, format!("patch {}", patch.file));
                continue;
            }
            let relative = run.relative_dir(patch.workspace).join(patch.file);
            let report = patcher.patch(&run.project_dir.join(&relative), &patch.op)?;
            if report.status == PatchStatus::Applied {
                run.written.insert(relative.clone());
            }
            patches.push(PatchReport {
                file: relative,
                ..report
            });
        }

        Ok(())
    }

    fn bookkeeping(
        &self,
        run: &mut Run<'_>,
        state: &ProjectState,
    ) -> Result<(), GenerationErrorKind> {
        for (workspace, entries) in &run.env {
            let relative = run.relative_dir(*workspace).join(ENV_FILE);
            let added = env_file::merge(self.fs, &run.project_dir.join(&relative), entries)?;
            debug!(%workspace, keys = ?added, "env entries added");
            run.written.insert(relative);
        }

        JsoncStateRepository::new(self.fs).save(run.project_dir, state)?;
        run.written.insert(PathBuf::from(STATE_FILE_NAME));
        Ok(())
    }

    fn fingerprint(
        &self,
        project_dir: &Path,
        files: &[PathBuf],
    ) -> Result<ContentHash, GenerationErrorKind> {
        let mut entries = Vec::with_capacity(files.len());
        for file in files {
            let content = self.fs.read(&project_dir.join(file))?;
            entries.push((file.to_string_lossy().replace('\\', "/"), content));
        }
        Ok(ContentHash::of_entries(
            entries.iter().map(|(p, c)| (p.as_str(), c.as_str())),
        ))
    }
}
