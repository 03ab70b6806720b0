//! Project file writers
//!
//! The pieces the orchestrator uses to turn module contributions into files:
//! template rendering, package.json merging, config patching and `.env`
//! assembly.

pub mod env_file;
mod manifest;
mod patcher;
mod templates;

pub use manifest::{ManifestError, ManifestMerger, PackageRequest};
pub use patcher::{ConfigPatchError, ConfigPatcher, PatchReport, PatchStatus};
pub use templates::{TemplateContext, TemplateError, TemplateRenderer};
