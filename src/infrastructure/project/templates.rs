//! Template rendering
//!
//! Module templates are minijinja sources. Undefined variables are errors so
//! a typo in a template fails loudly instead of rendering an empty string.

use std::collections::BTreeSet;

use minijinja::{Environment, UndefinedBehavior, Value};
use serde::Serialize;

use crate::domain::entities::StackConfig;
use crate::domain::value_objects::Workspace;

#[derive(Debug, thiserror::Error)]
#[error("failed to render template `{name}`: {source}")]
pub struct TemplateError {
    pub name: String,
    #[source]
    pub source: minijinja::Error,
}

/// Variables every template sees
#[derive(Debug, Clone, Serialize)]
pub struct TemplateContext {
    pub project_name: String,
    pub config: StackConfig,
    /// Wire name of the web frontend, empty when there is none
    pub web: &'static str,
    pub native: &'static str,
    pub pm: &'static str,
    pub pm_run: &'static str,
    pub server_dir: String,
    /// Names of the workspaces the project ends up with
    pub workspaces: Vec<&'static str>,
}

impl TemplateContext {
    pub fn new(
        project_name: impl Into<String>,
        config: &StackConfig,
        workspaces: &BTreeSet<Workspace>,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            config: config.clone(),
            web: config.web_frontend().map_or("", |f| f.as_str()),
            native: config.native_frontend().map_or("", |f| f.as_str()),
            pm: config.package_manager.as_str(),
            pm_run: config.package_manager.run_prefix(),
            server_dir: Workspace::Server
                .relative_dir(config.backend)
                .to_string_lossy()
                .replace('\\', "/"),
            workspaces: workspaces.iter().map(Workspace::name).collect(),
        }
    }
}

pub struct TemplateRenderer {
    env: Environment<'static>,
    ctx: Value,
}

impl TemplateRenderer {
    pub fn new(context: &TemplateContext) -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        Self {
            env,
            ctx: Value::from_serialize(context),
        }
    }

    /// Render `source`; `name` only labels errors
    pub fn render(&self, name: &str, source: &str) -> Result<String, TemplateError> {
        self.env
            .render_str(source, &self.ctx)
            .map_err(|source| TemplateError {
                name: name.to_string(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{Backend, Example, PackageManager};

    fn renderer(config: &StackConfig) -> TemplateRenderer {
        let workspaces = BTreeSet::from([Workspace::Root, Workspace::Web, Workspace::Server]);
        TemplateRenderer::new(&TemplateContext::new("acme", config, &workspaces))
    }

    #[test]
    fn exposes_config_with_camel_case_keys() {
        let out = renderer(&StackConfig::default())
            .render("t", "{{ project_name }} {{ config.dbSetup }} {{ config.packageManager }}")
            .unwrap();
        assert_eq!(out, "acme none bun");
    }

    #[test]
    fn shorthands_follow_config() {
        let config = StackConfig {
            package_manager: PackageManager::Pnpm,
            backend: Backend::Convex,
            ..StackConfig::default()
        };
        let out = renderer(&config)
            .render("t", "{{ web }}|{{ native }}|{{ pm_run }}|{{ server_dir }}")
            .unwrap();
        assert_eq!(out, "tanstack-router||pnpm run|packages/backend");
    }

    #[test]
    fn set_fields_support_membership_tests() {
        let config = StackConfig {
            examples: BTreeSet::from([Example::Todo]),
            ..StackConfig::default()
        };
        let src = r#"{% if "todo" in config.examples %}yes{% endif %}{% if "docs" in workspaces %}docs{% endif %}"#;
        assert_eq!(renderer(&config).render("t", src).unwrap(), "yes");
    }

    #[test]
    fn keeps_trailing_newline() {
        let out = renderer(&StackConfig::default()).render("t", "line\n").unwrap();
        assert_eq!(out, "line\n");
    }

    #[test]
    fn undefined_variables_are_errors() {
        let err = renderer(&StackConfig::default())
            .render("vite.config.ts", "{{ config.nope }}")
            .unwrap_err();
        assert!(err.to_string().contains("vite.config.ts"));
    }
}
