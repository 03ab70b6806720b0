//! Add Use Case
//!
//! Adds addons or deployment targets to a project generated earlier. The
//! persisted state is the only source for the existing configuration; the
//! merged request is re-resolved and only addon and deploy modules that newly
//! apply are run.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use crate::domain::entities::StackConfig;
use crate::domain::ports::{FileSystem, StateError, StateRepository};
use crate::domain::services::{ResolutionResult, ResolveError, Resolver};
use crate::domain::value_objects::{Addon, ServerDeploy, WebDeploy};
use crate::infrastructure::repositories::JsoncStateRepository;
use crate::modules::{Category, GeneratorModule, ModuleRegistry, VersionRegistry};

use super::generate::{
    project_name_for, GenerateOptions, GenerateUseCase, GeneratedProject, GenerationError,
};

/// What to add
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddRequest {
    pub addons: Vec<Addon>,
    pub web_deploy: Option<WebDeploy>,
    pub server_deploy: Option<ServerDeploy>,
}

impl AddRequest {
    pub fn is_empty(&self) -> bool {
        self.addons.is_empty() && self.web_deploy.is_none() && self.server_deploy.is_none()
    }

    /// `config` with this request folded in
    pub fn apply_to(&self, config: &StackConfig) -> StackConfig {
        let mut next = config.clone();
        next.addons.extend(self.addons.iter().copied());
        if let Some(web_deploy) = self.web_deploy {
            next.web_deploy = web_deploy;
        }
        if let Some(server_deploy) = self.server_deploy {
            next.server_deploy = server_deploy;
        }
        next
    }

    /// Parts of this request missing from the resolved configuration
    pub fn not_added(&self, resolved: &StackConfig) -> Vec<NotAdded> {
        let mut missing: Vec<NotAdded> = self
            .addons
            .iter()
            .copied()
            .filter(|a| !resolved.has_addon(*a))
            .map(NotAdded::Addon)
            .collect();
        if let Some(target) = self.web_deploy.filter(|t| *t != resolved.web_deploy) {
            missing.push(NotAdded::WebDeploy(target));
        }
        if let Some(target) = self.server_deploy.filter(|t| *t != resolved.server_deploy) {
            missing.push(NotAdded::ServerDeploy(target));
        }
        missing
    }
}

/// A requested addition the resolver took back out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum NotAdded {
    Addon(Addon),
    WebDeploy(WebDeploy),
    ServerDeploy(ServerDeploy),
}

impl fmt::Display for NotAdded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotAdded::Addon(addon) => write!(f, "{addon}"),
            NotAdded::WebDeploy(target) => write!(f, "web deploy to {target}"),
            NotAdded::ServerDeploy(target) => write!(f, "server deploy to {target}"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AddError {
    #[error("nothing to add")]
    NothingRequested,

    #[error("no stackwright project at {} (missing stackwright.jsonc)", .0.display())]
    NotAProject(PathBuf),

    #[error("cannot read project state: {0}")]
    State(#[source] StateError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

#[derive(Debug, Clone)]
pub struct AddResult {
    pub previous: StackConfig,
    pub resolution: ResolutionResult,
    /// Requested additions the resolver removed again
    pub dropped: Vec<NotAdded>,
    pub project: GeneratedProject,
}

pub struct AddUseCase<'a> {
    fs: &'a dyn FileSystem,
    registry: &'a ModuleRegistry,
    versions: &'a VersionRegistry,
    resolver: &'a Resolver,
}

impl<'a> AddUseCase<'a> {
    pub fn new(
        fs: &'a dyn FileSystem,
        registry: &'a ModuleRegistry,
        versions: &'a VersionRegistry,
        resolver: &'a Resolver,
    ) -> Self {
        Self {
            fs,
            registry,
            versions,
            resolver,
        }
    }

    pub fn execute(
        &self,
        project_dir: &Path,
        request: &AddRequest,
        tool_version: &str,
    ) -> Result<AddResult, AddError> {
        if request.is_empty() {
            return Err(AddError::NothingRequested);
        }

        let state = JsoncStateRepository::new(self.fs)
            .load(project_dir)
            .map_err(|e| match e {
                StateError::NotFound(_) => AddError::NotAProject(project_dir.to_path_buf()),
                other => AddError::State(other),
            })?;
        let previous = state.config.clone();

        let resolution = self.resolver.resolve(&request.apply_to(&previous))?;
        let next = &resolution.final_config;

        let dropped = request.not_added(next);
        for item in &dropped {
            warn!(%item, "not compatible with this project, not added");
        }

        let modules: Vec<&GeneratorModule> = self
            .registry
            .plan(next)
            .into_iter()
            .filter(|m| matches!(m.category, Category::Addons | Category::Deploy))
            .filter(|m| !m.applies(&previous))
            .collect();
        info!(
            modules = ?modules.iter().map(|m| m.id).collect::<Vec<_>>(),
            "adding to existing project"
        );

        let options = GenerateOptions::new(project_dir)
            .with_name(self.project_name(project_dir))
            .with_tool_version(tool_version);
        let updated = state.updated(next.clone(), tool_version);
        let project = GenerateUseCase::new(self.fs, self.registry, self.versions)
            .execute_modules(&modules, next, &options, &updated)?;

        Ok(AddResult {
            previous,
            dropped,
            project,
            resolution,
        })
    }

    /// Name from the root manifest, falling back to the directory name
    fn project_name(&self, project_dir: &Path) -> String {
        self.fs
            .read(&project_dir.join("package.json"))
            .ok()
            .and_then(|text| serde_json::from_str::<serde_json::Value>(&text).ok())
            .and_then(|json| json.get("name").and_then(|n| n.as_str()).map(str::to_string))
            .unwrap_or_else(|| project_name_for(project_dir))
    }
}
