use crate::domain::value_objects::{PackageManager, Workspace};
use crate::modules::{Category, GeneratorModule};

const PACKAGE_JSON: &str = r#"{
  "name": "{{ project_name }}",
  "private": true,
  "workspaces": ["apps/*", "packages/*"]
}
"#;

const PNPM_WORKSPACE: &str = r#"packages:
  - "apps/*"
  - "packages/*"
"#;

const GITIGNORE: &str = r#"node_modules
dist
build
.turbo
.next
.nuxt
.output
.svelte-kit
.wrangler
.expo
*.log
.env
.env*.local
.DS_Store
"#;

const TSCONFIG_BASE: &str = r#"{
  "compilerOptions": {
    "target": "ES2022",
    "module": "ESNext",
    "moduleResolution": "bundler",
    "strict": true,
    "skipLibCheck": true,
    "esModuleInterop": true,
    "resolveJsonModule": true,
    "isolatedModules": true
  }
}
"#;

const README: &str = r#"# {{ project_name }}

## Stack

- Frontend: {{ config.frontend | join(", ") or "none" }}
- Backend: {{ config.backend }}
- Runtime: {{ config.runtime }}
- Database: {{ config.database }}{% if config.orm != "none" %} ({{ config.orm }}){% endif %}
- Auth: {{ config.auth }}
- API: {{ config.api }}
{% if config.addons %}- Addons: {{ config.addons | join(", ") }}
{% endif %}
## Getting started

```sh
{{ pm }} install
{{ pm_run }} dev
```
{% if "web" in workspaces %}
The web app runs on http://localhost:3001.
{% endif %}{% if "server" in workspaces and config.backend != "convex" %}
The API in `{{ server_dir }}` runs on http://localhost:3000.
{% endif %}"#;

pub(super) fn modules() -> Vec<GeneratorModule> {
    vec![GeneratorModule::new("base", Category::Base, |_| true)
        .creates(Workspace::Root)
        .file(Workspace::Root, "package.json", PACKAGE_JSON)
        .file(Workspace::Root, ".gitignore", GITIGNORE)
        .file(Workspace::Root, "tsconfig.base.json", TSCONFIG_BASE)
        .file(Workspace::Root, "README.md", README)
        .file_when(Workspace::Root, "pnpm-workspace.yaml", PNPM_WORKSPACE, |c| {
            c.package_manager == PackageManager::Pnpm
        })
        .dev_deps(Workspace::Root, &["typescript"])
        .script(
            Workspace::Root,
            "dev",
            r#"{% if pm == "pnpm" %}pnpm -r dev{% elif pm == "npm" %}npm run dev --workspaces --if-present{% else %}bun run --filter '*' dev{% endif %}"#,
        )
        .script(
            Workspace::Root,
            "build",
            r#"{% if pm == "pnpm" %}pnpm -r build{% elif pm == "npm" %}npm run build --workspaces --if-present{% else %}bun run --filter '*' build{% endif %}"#,
        )]
}
