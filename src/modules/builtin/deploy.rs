use serde_json::json;

use super::web_is;
use crate::domain::services::PatchOp;
use crate::domain::value_objects::{Frontend, ServerDeploy, WebDeploy, Workspace};
use crate::modules::{Category, GeneratorModule};

const WEB_WRANGLER: &str = r#"{
  "name": "{{ project_name }}-web",
  "compatibility_date": "2025-05-01",
{% if web == "next" %}  "main": ".open-next/worker.js",
  "compatibility_flags": ["nodejs_compat"],
  "assets": {
    "directory": ".open-next/assets",
    "binding": "ASSETS"
  }
{% else %}  "assets": {
    "directory": "{% if web == "nuxt" %}./.output/public{% else %}./dist{% endif %}",
    "not_found_handling": "single-page-application"
  }
{% endif %}}
"#;

const OPEN_NEXT_CONFIG: &str = r#"import { defineCloudflareConfig } from "@opennextjs/cloudflare";

export default defineCloudflareConfig();
"#;

fn web_workers() -> GeneratorModule {
    GeneratorModule::new("deploy-web-workers", Category::Deploy, |c| {
        c.web_deploy == WebDeploy::Workers && c.web_frontend().is_some()
    })
    .file(Workspace::Web, "wrangler.jsonc", WEB_WRANGLER)
    .file_when(Workspace::Web, "open-next.config.ts", OPEN_NEXT_CONFIG, |c| {
        web_is(c, Frontend::Next)
    })
    .dev_deps(Workspace::Web, &["wrangler"])
    .deps_when(Workspace::Web, &["@opennextjs/cloudflare"], |c| web_is(c, Frontend::Next))
    .script_when(Workspace::Web, "deploy", "opennextjs-cloudflare build && opennextjs-cloudflare deploy", |c| {
        web_is(c, Frontend::Next)
    })
    .script_when(Workspace::Web, "deploy", "{{ pm_run }} build && wrangler deploy", |c| {
        !web_is(c, Frontend::Next)
    })
}

fn server_workers() -> GeneratorModule {
    GeneratorModule::new("deploy-server-workers", Category::Deploy, |c| {
        c.server_deploy == ServerDeploy::Workers
    })
    .patch(
        Workspace::Server,
        "wrangler.jsonc",
        PatchOp::json_set_if_absent(&["observability", "enabled"], json!(true)),
    )
    .script(Workspace::Server, "deploy", "wrangler deploy --minify")
}

pub(super) fn modules() -> Vec<GeneratorModule> {
    vec![web_workers(), server_workers()]
}
