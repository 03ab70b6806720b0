//! Built-in generator modules, one file per category
//!
//! Templates are minijinja sources rendered with the project name and the
//! resolved configuration (`config.*`, camelCase keys) in scope, plus the
//! shorthands `web`, `native`, `pm`, `pm_run` and `server_dir`.

mod addons;
mod api;
mod auth;
mod backend;
mod base;
mod database;
mod deploy;
mod examples;
mod frontend;

use super::GeneratorModule;
use crate::domain::entities::StackConfig;
use crate::domain::value_objects::Frontend;

/// Every built-in module in registry order
pub fn modules() -> Vec<GeneratorModule> {
    [
        base::modules(),
        frontend::modules(),
        backend::modules(),
        api::modules(),
        database::modules(),
        auth::modules(),
        examples::modules(),
        addons::modules(),
        deploy::modules(),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn has_web(c: &StackConfig) -> bool {
    c.web_frontend().is_some()
}

fn has_native(c: &StackConfig) -> bool {
    c.native_frontend().is_some()
}

/// React web app (vite based, TanStack Start or Next.js)
fn has_react_web(c: &StackConfig) -> bool {
    matches!(
        c.web_frontend(),
        Some(Frontend::TanstackRouter | Frontend::ReactRouter | Frontend::TanstackStart | Frontend::Next)
    )
}

fn web_is(c: &StackConfig, frontend: Frontend) -> bool {
    c.web_frontend() == Some(frontend)
}

/// Web app built with a `vite.config.ts` carrying a `plugins` array
fn has_vite_web(c: &StackConfig) -> bool {
    matches!(
        c.web_frontend(),
        Some(
            Frontend::TanstackRouter
                | Frontend::ReactRouter
                | Frontend::TanstackStart
                | Frontend::Svelte
                | Frontend::Solid
        )
    )
}
