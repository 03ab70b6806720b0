//! Generator modules
//!
//! A module is static data: a predicate saying when it applies, the workspaces
//! it creates, and what it contributes to them (templates, packages, scripts,
//! environment variables, config patches). The orchestrator in the application
//! layer executes them; nothing here touches the disk.

pub mod builtin;
mod registry;
mod versions;

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::domain::entities::StackConfig;
use crate::domain::services::PatchOp;
use crate::domain::value_objects::Workspace;

pub use registry::{ModuleRegistry, RegistryError};
pub use versions::VersionRegistry;

/// Predicate over a resolved configuration
pub type Predicate = fn(&StackConfig) -> bool;

/// Module categories, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Base,
    Frontend,
    Backend,
    Api,
    Database,
    Auth,
    Examples,
    Addons,
    Deploy,
}

impl Category {
    pub const ORDER: [Category; 9] = [
        Category::Base,
        Category::Frontend,
        Category::Backend,
        Category::Api,
        Category::Database,
        Category::Auth,
        Category::Examples,
        Category::Addons,
        Category::Deploy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Base => "base",
            Category::Frontend => "frontend",
            Category::Backend => "backend",
            Category::Api => "api",
            Category::Database => "database",
            Category::Auth => "auth",
            Category::Examples => "examples",
            Category::Addons => "addons",
            Category::Deploy => "deploy",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DependencyKind {
    Dependency,
    DevDependency,
}

impl DependencyKind {
    /// Key of the matching map in package.json
    pub fn manifest_key(&self) -> &'static str {
        match self {
            DependencyKind::Dependency => "dependencies",
            DependencyKind::DevDependency => "devDependencies",
        }
    }
}

/// A package request, resolved against the version registry at merge time
#[derive(Debug, Clone, Copy)]
pub struct PackageRef {
    pub name: &'static str,
    pub workspace: Workspace,
    pub kind: DependencyKind,
    pub when: Option<Predicate>,
}

/// A template rendered to `path`, relative to its workspace directory
#[derive(Debug, Clone, Copy)]
pub struct TemplateFile {
    pub workspace: Workspace,
    pub path: &'static str,
    pub source: &'static str,
    pub when: Option<Predicate>,
}

/// A package.json script. The command is a template.
#[derive(Debug, Clone, Copy)]
pub struct Script {
    pub workspace: Workspace,
    pub name: &'static str,
    pub command: &'static str,
    pub when: Option<Predicate>,
}

/// A `.env` entry. The value is a template.
#[derive(Debug, Clone, Copy)]
pub struct EnvVar {
    pub workspace: Workspace,
    pub key: &'static str,
    pub value: &'static str,
    pub when: Option<Predicate>,
}

/// An idempotent edit of a file some earlier contribution created
#[derive(Debug, Clone)]
pub struct ConfigPatch {
    pub workspace: Workspace,
    pub file: &'static str,
    pub op: PatchOp,
    pub when: Option<Predicate>,
}

fn enabled(when: Option<Predicate>, config: &StackConfig) -> bool {
    when.map_or(true, |p| p(config))
}

#[derive(Debug, Clone)]
pub struct GeneratorModule {
    pub id: &'static str,
    pub category: Category,
    pub applies_to: Predicate,
    pub depends_on: Vec<&'static str>,
    pub creates: Vec<Workspace>,
    pub files: Vec<TemplateFile>,
    pub packages: Vec<PackageRef>,
    pub scripts: Vec<Script>,
    pub env: Vec<EnvVar>,
    pub patches: Vec<ConfigPatch>,
}

impl GeneratorModule {
    pub fn new(id: &'static str, category: Category, applies_to: Predicate) -> Self {
        Self {
            id,
            category,
            applies_to,
            depends_on: Vec::new(),
            creates: Vec::new(),
            files: Vec::new(),
            packages: Vec::new(),
            scripts: Vec::new(),
            env: Vec::new(),
            patches: Vec::new(),
        }
    }

    pub fn applies(&self, config: &StackConfig) -> bool {
        (self.applies_to)(config)
    }

    pub fn after(mut self, ids: &[&'static str]) -> Self {
        self.depends_on.extend_from_slice(ids);
        self
    }

    pub fn creates(mut self, workspace: Workspace) -> Self {
        self.creates.push(workspace);
        self
    }

    pub fn file(self, workspace: Workspace, path: &'static str, source: &'static str) -> Self {
        self.push_file(workspace, path, source, None)
    }

    pub fn file_when(
        self,
        workspace: Workspace,
        path: &'static str,
        source: &'static str,
        when: Predicate,
    ) -> Self {
        self.push_file(workspace, path, source, Some(when))
    }

    fn push_file(
        mut self,
        workspace: Workspace,
        path: &'static str,
        source: &'static str,
        when: Option<Predicate>,
    ) -> Self {
        self.files.push(TemplateFile {
            workspace,
            path,
            source,
            when,
        });
        self
    }

    fn push_packages(
        mut self,
        workspace: Workspace,
        kind: DependencyKind,
        names: &[&'static str],
        when: Option<Predicate>,
    ) -> Self {
        self.packages.extend(names.iter().map(|&name| PackageRef {
            name,
            workspace,
            kind,
            when,
        }));
        self
    }

    pub fn deps(self, workspace: Workspace, names: &[&'static str]) -> Self {
        self.push_packages(workspace, DependencyKind::Dependency, names, None)
    }

    pub fn deps_when(self, workspace: Workspace, names: &[&'static str], when: Predicate) -> Self {
        self.push_packages(workspace, DependencyKind::Dependency, names, Some(when))
    }

    pub fn dev_deps(self, workspace: Workspace, names: &[&'static str]) -> Self {
        self.push_packages(workspace, DependencyKind::DevDependency, names, None)
    }

    pub fn dev_deps_when(
        self,
        workspace: Workspace,
        names: &[&'static str],
        when: Predicate,
    ) -> Self {
        self.push_packages(workspace, DependencyKind::DevDependency, names, Some(when))
    }

    pub fn script(mut self, workspace: Workspace, name: &'static str, command: &'static str) -> Self {
        self.scripts.push(Script {
            workspace,
            name,
            command,
            when: None,
        });
        self
    }

    pub fn script_when(
        mut self,
        workspace: Workspace,
        name: &'static str,
        command: &'static str,
        when: Predicate,
    ) -> Self {
        self.scripts.push(Script {
            workspace,
            name,
            command,
            when: Some(when),
        });
        self
    }

    pub fn env(mut self, workspace: Workspace, key: &'static str, value: &'static str) -> Self {
        self.env.push(EnvVar {
            workspace,
            key,
            value,
            when: None,
        });
        self
    }

    pub fn env_when(
        mut self,
        workspace: Workspace,
        key: &'static str,
        value: &'static str,
        when: Predicate,
    ) -> Self {
        self.env.push(EnvVar {
            workspace,
            key,
            value,
            when: Some(when),
        });
        self
    }

    pub fn patch(mut self, workspace: Workspace, file: &'static str, op: PatchOp) -> Self {
        self.patches.push(ConfigPatch {
            workspace,
            file,
            op,
            when: None,
        });
        self
    }

    pub fn patch_when(
        mut self,
        workspace: Workspace,
        file: &'static str,
        op: PatchOp,
        when: Predicate,
    ) -> Self {
        self.patches.push(ConfigPatch {
            workspace,
            file,
            op,
            when: Some(when),
        });
        self
    }

    pub fn files_for<'a>(&'a self, config: &'a StackConfig) -> impl Iterator<Item = &'a TemplateFile> {
        self.files.iter().filter(move |f| enabled(f.when, config))
    }

    pub fn packages_for<'a>(&'a self, config: &'a StackConfig) -> impl Iterator<Item = &'a PackageRef> {
        self.packages.iter().filter(move |p| enabled(p.when, config))
    }

    pub fn scripts_for<'a>(&'a self, config: &'a StackConfig) -> impl Iterator<Item = &'a Script> {
        self.scripts.iter().filter(move |s| enabled(s.when, config))
    }

    pub fn env_for<'a>(&'a self, config: &'a StackConfig) -> impl Iterator<Item = &'a EnvVar> {
        self.env.iter().filter(move |e| enabled(e.when, config))
    }

    pub fn patches_for<'a>(&'a self, config: &'a StackConfig) -> impl Iterator<Item = &'a ConfigPatch> {
        self.patches.iter().filter(move |p| enabled(p.when, config))
    }

    /// Every workspace this module writes into, regardless of conditions
    pub fn contributes_to(&self) -> BTreeSet<Workspace> {
        self.files
            .iter()
            .map(|f| f.workspace)
            .chain(self.packages.iter().map(|p| p.workspace))
            .chain(self.scripts.iter().map(|s| s.workspace))
            .chain(self.env.iter().map(|e| e.workspace))
            .chain(self.patches.iter().map(|p| p.workspace))
            .collect()
    }
}
