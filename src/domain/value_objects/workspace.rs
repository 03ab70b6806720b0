//! Workspace value object - an independently dependency-managed package of the
//! generated monorepo

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::options::Backend;

/// A workspace of the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Workspace {
    /// Repository root
    Root,
    Web,
    Native,
    /// Server app, or the Convex backend package
    Server,
    Docs,
}

impl Workspace {
    pub const ALL: [Workspace; 5] = [
        Workspace::Root,
        Workspace::Web,
        Workspace::Native,
        Workspace::Server,
        Workspace::Docs,
    ];

    /// Directory relative to the project root.
    ///
    /// The server workspace moves to `packages/backend` when the backend is a
    /// managed platform.
    pub fn relative_dir(&self, backend: Backend) -> PathBuf {
        match self {
            Workspace::Root => PathBuf::new(),
            Workspace::Web => PathBuf::from("apps/web"),
            Workspace::Native => PathBuf::from("apps/native"),
            Workspace::Server if backend == Backend::Convex => PathBuf::from("packages/backend"),
            Workspace::Server => PathBuf::from("apps/server"),
            Workspace::Docs => PathBuf::from("apps/docs"),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Workspace::Root => "root",
            Workspace::Web => "web",
            Workspace::Native => "native",
            Workspace::Server => "server",
            Workspace::Docs => "docs",
        }
    }
}

impl std::fmt::Display for Workspace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_project_dir() {
        assert_eq!(Workspace::Root.relative_dir(Backend::Hono), PathBuf::new());
    }

    #[test]
    fn server_dir_depends_on_backend() {
        assert_eq!(
            Workspace::Server.relative_dir(Backend::Hono),
            PathBuf::from("apps/server")
        );
        assert_eq!(
            Workspace::Server.relative_dir(Backend::Convex),
            PathBuf::from("packages/backend")
        );
    }
}
