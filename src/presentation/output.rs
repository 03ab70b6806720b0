//! Output Rendering
//!
//! Every command renders to a `String`: plain text for people, a single JSON
//! document for `--json`. Commands print the result on stdout.

use std::fmt::Write as _;
use std::path::Path;

use serde_json::json;

use crate::application::{AddResult, GeneratedProject};
use crate::domain::catalog::{CatalogEntry, Cardinality};
use crate::domain::entities::StackConfig;
use crate::domain::services::ResolutionResult;
use crate::domain::value_objects::{Field, FieldValue};
use crate::infrastructure::project::PatchStatus;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

fn join<T: ToString>(items: impl IntoIterator<Item = T>) -> String {
    let text = items
        .into_iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    if text.is_empty() {
        "(none)".to_string()
    } else {
        text
    }
}

/// The value alone, without the `field = ` prefix
fn value_text(value: &FieldValue) -> String {
    match value {
        FieldValue::Frontend(set) => join(set),
        FieldValue::Addons(set) => join(set),
        FieldValue::Examples(set) => join(set),
        FieldValue::Backend(v) => v.to_string(),
        FieldValue::Runtime(v) => v.to_string(),
        FieldValue::Database(v) => v.to_string(),
        FieldValue::Orm(v) => v.to_string(),
        FieldValue::Auth(v) => v.to_string(),
        FieldValue::Api(v) => v.to_string(),
        FieldValue::DbSetup(v) => v.to_string(),
        FieldValue::WebDeploy(v) => v.to_string(),
        FieldValue::ServerDeploy(v) => v.to_string(),
        FieldValue::PackageManager(v) => v.to_string(),
        FieldValue::Git(v) | FieldValue::Install(v) => v.to_string(),
    }
}

fn config_lines(out: &mut String, initial: &StackConfig, result: &ResolutionResult) {
    let changed = result.changed_fields(initial);
    for field in Field::ALL {
        let marker = if changed.contains(&field) { '*' } else { ' ' };
        let _ = writeln!(
            out,
            "{marker} {:<15} {}",
            field.key(),
            value_text(&result.final_config.get(field))
        );
    }
}

fn adjustments(out: &mut String, result: &ResolutionResult) {
    if result.is_unchanged() {
        out.push_str("\nNo adjustments needed.\n");
        return;
    }
    out.push_str("\nAdjustments:\n");
    for fired in &result.fired {
        let _ = writeln!(out, "  [{}] {}", fired.rule_id, fired.explanation);
    }
}

/// Resolved configuration, changed fields marked with `*`
pub fn render_resolution(
    format: OutputFormat,
    initial: &StackConfig,
    result: &ResolutionResult,
) -> String {
    match format {
        OutputFormat::Json => json!({
            "config": result.final_config,
            "changed": result.changed_fields(initial),
            "fired": result.fired,
            "passes": result.passes,
        })
        .to_string(),
        OutputFormat::Text => {
            let mut out = String::from("Resolved configuration:\n");
            config_lines(&mut out, initial, result);
            adjustments(&mut out, result);
            out
        }
    }
}

fn project_summary(out: &mut String, project: &GeneratedProject, dry_run: bool) {
    let verb = if dry_run { "Would write" } else { "Wrote" };
    let _ = writeln!(
        out,
        "{verb} {} files from {} modules:",
        project.files_written.len(),
        project.modules_run.len()
    );
    for file in &project.files_written {
        let _ = writeln!(out, "  {}", file.display());
    }

    if project.has_skips() {
        out.push_str("\nSkipped (workspace not present):\n");
        for skip in &project.skipped {
            let _ = writeln!(out, "  {} -> {}: {}", skip.module, skip.workspace, skip.item);
        }
    }

    let missed: Vec<_> = project
        .patches
        .iter()
        .filter(|p| p.status == PatchStatus::Skipped)
        .collect();
    if !missed.is_empty() {
        out.push_str("\nPatches not applied:\n");
        for patch in missed {
            let _ = writeln!(out, "  {}: {}", patch.file.display(), patch.description);
        }
    }
}

fn next_steps(out: &mut String, dir: &Path, config: &StackConfig) {
    let pm = config.package_manager;
    out.push_str("\nNext steps:\n");
    let _ = writeln!(out, "  cd {}", dir.display());
    if config.git {
        out.push_str("  git init\n");
    }
    if config.install {
        let _ = writeln!(out, "  {pm} install");
    }
    let _ = writeln!(out, "  {} dev", pm.run_prefix());
}

pub fn render_create(
    format: OutputFormat,
    initial: &StackConfig,
    result: &ResolutionResult,
    project: &GeneratedProject,
    dry_run: bool,
) -> String {
    match format {
        OutputFormat::Json => json!({
            "config": result.final_config,
            "changed": result.changed_fields(initial),
            "fired": result.fired,
            "dryRun": dry_run,
            "project": project,
        })
        .to_string(),
        OutputFormat::Text => {
            let mut out = String::new();
            if !result.is_unchanged() {
                out.push_str("Adjusted the requested stack:\n");
                for fired in &result.fired {
                    let _ = writeln!(out, "  [{}] {}", fired.rule_id, fired.explanation);
                }
                out.push('\n');
            }
            project_summary(&mut out, project, dry_run);
            if !dry_run {
                next_steps(&mut out, &project.project_dir, &result.final_config);
            }
            out
        }
    }
}

pub fn render_add(format: OutputFormat, result: &AddResult, dry_run: bool) -> String {
    let config = &result.resolution.final_config;
    match format {
        OutputFormat::Json => json!({
            "config": config,
            "changed": result.resolution.changed_fields(&result.previous),
            "dropped": result.dropped,
            "fired": result.resolution.fired,
            "dryRun": dry_run,
            "project": result.project,
        })
        .to_string(),
        OutputFormat::Text => {
            let mut out = String::new();
            for item in &result.dropped {
                let _ = writeln!(out, "Not added: {item} is not compatible with this project");
            }
            if result.project.modules_run.is_empty() {
                out.push_str("Nothing new to add.\n");
                return out;
            }
            let _ = writeln!(out, "Added: {}\n", result.project.modules_run.join(", "));
            project_summary(&mut out, &result.project, dry_run);
            out
        }
    }
}

pub fn render_catalog(format: OutputFormat, entries: &[CatalogEntry]) -> String {
    match format {
        OutputFormat::Json => json!(entries).to_string(),
        OutputFormat::Text => {
            let mut out = String::new();
            for entry in entries {
                let kind = match entry.cardinality {
                    Cardinality::Single => "one of",
                    Cardinality::Set => "any of",
                    Cardinality::Flag => "flag",
                };
                let _ = writeln!(
                    out,
                    "{:<15} {kind:<6} {}",
                    entry.field.key(),
                    entry.values.join(", ")
                );
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog;
    use crate::domain::services::Resolver;
    use crate::domain::value_objects::{Backend, Runtime};

    fn workers_express() -> StackConfig {
        StackConfig {
            backend: Backend::Express,
            runtime: Runtime::Workers,
            ..StackConfig::default()
        }
    }

    #[test]
    fn text_resolution_marks_changed_fields() {
        let initial = workers_express();
        let result = Resolver::default().resolve(&initial).unwrap();

        let text = render_resolution(OutputFormat::Text, &initial, &result);

        assert!(text.contains("* backend         hono\n"));
        assert!(text.contains("  runtime         workers\n"));
        assert!(text.contains("[workers-requires-hono]"));
    }

    #[test]
    fn unchanged_resolution_says_so() {
        let initial = StackConfig::default();
        let result = Resolver::default().resolve(&initial).unwrap();

        insta::assert_snapshot!(render_resolution(OutputFormat::Text, &initial, &result), @r"
        Resolved configuration:
          frontend        tanstack-router
          backend         hono
          runtime         bun
          database        sqlite
          orm             drizzle
          auth            better-auth
          api             trpc
          dbSetup         none
          addons          turborepo
          examples        (none)
          webDeploy       none
          serverDeploy    none
          packageManager  bun
          git             true
          install         true

        No adjustments needed.
        ");
    }

    #[test]
    fn json_resolution_lists_changed_fields() {
        let initial = workers_express();
        let result = Resolver::default().resolve(&initial).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&render_resolution(OutputFormat::Json, &initial, &result))
                .unwrap();

        assert_eq!(value["config"]["backend"], "hono");
        assert_eq!(value["changed"], json!(["backend"]));
        assert_eq!(value["fired"][0]["ruleId"], "workers-requires-hono");
    }

    #[test]
    fn catalog_text_has_one_line_per_field() {
        let text = render_catalog(OutputFormat::Text, &catalog::catalog());
        assert_eq!(text.lines().count(), Field::ALL.len());
        assert!(text.starts_with("frontend        any of tanstack-router"));
    }
}
