use serde_json::json;

use super::{has_vite_web, has_web, web_is};
use crate::domain::services::PatchOp;
use crate::domain::value_objects::{Addon, Frontend, Orm, Workspace};
use crate::modules::{Category, GeneratorModule};

const PWA_IMPORT: &str = r#"import { VitePWA } from "vite-plugin-pwa";"#;

const PWA_PLUGIN: &str = r##"VitePWA({ registerType: "autoUpdate", manifest: { name: "web", short_name: "web", theme_color: "#0c0c0c" } })"##;

const NEXT_MANIFEST: &str = r##"import type { MetadataRoute } from "next";

export default function manifest(): MetadataRoute.Manifest {
  return {
    name: "{{ project_name }}",
    short_name: "{{ project_name }}",
    start_url: "/",
    display: "standalone",
    background_color: "#ffffff",
    theme_color: "#0c0c0c",
  };
}
"##;

const TAURI_CONF: &str = r#"{
  "productName": "{{ project_name }}",
  "version": "0.1.0",
  "identifier": "com.{{ project_name | replace("-", "") }}.app",
  "build": {
    "beforeDevCommand": "{{ pm_run }} dev",
    "devUrl": "http://localhost:3001",
    "beforeBuildCommand": "{{ pm_run }} build",
    "frontendDist": "{% if web == "next" %}../out{% elif web == "nuxt" %}../.output/public{% else %}../dist{% endif %}"
  },
  "app": {
    "windows": [
      {
        "title": "{{ project_name }}",
        "width": 1024,
        "height": 768
      }
    ]
  }
}
"#;

const DOCS_PACKAGE_JSON: &str = r#"{
  "name": "docs",
  "version": "0.0.0",
  "private": true,
  "type": "module"
}
"#;

const STARLIGHT_CONFIG: &str = r#"import { defineConfig } from "astro/config";
import starlight from "@astrojs/starlight";

export default defineConfig({
  integrations: [
    starlight({
      title: "{{ project_name }}",
      sidebar: [
        { label: "Guides", autogenerate: { directory: "guides" } },
      ],
    }),
  ],
});
"#;

const STARLIGHT_INDEX: &str = r#"---
title: {{ project_name }}
description: Documentation for {{ project_name }}
---

Welcome to the docs.
"#;

const FUMADOCS_SOURCE_CONFIG: &str = r#"import { defineDocs } from "fumadocs-mdx/config";

export const docs = defineDocs({ dir: "content/docs" });
"#;

const FUMADOCS_NEXT_CONFIG: &str = r#"import { createMDX } from "fumadocs-mdx/next";

const withMDX = createMDX();

export default withMDX({ reactStrictMode: true });
"#;

const FUMADOCS_INDEX: &str = r#"---
title: {{ project_name }}
description: Documentation for {{ project_name }}
---

Welcome to the docs.
"#;

const BIOME_JSON: &str = r#"{
  "$schema": "https://biomejs.dev/schemas/1.9.4/schema.json",
  "vcs": { "enabled": true, "clientKind": "git", "useIgnoreFile": true },
  "formatter": { "enabled": true, "indentStyle": "tab" },
  "organizeImports": { "enabled": true },
  "linter": {
    "enabled": true,
    "rules": { "recommended": true }
  }
}
"#;

const OXLINT_JSON: &str = r#"{
  "$schema": "./node_modules/oxlint/configuration_schema.json",
  "categories": { "correctness": "error" }
}
"#;

const HUSKY_PRE_COMMIT: &str = "npx lint-staged\n";

const TURBO_JSON: &str = r#"{
  "$schema": "https://turbo.build/schema.json",
  "ui": "tui",
  "tasks": {
    "build": {
      "dependsOn": ["^build"],
      "inputs": ["$TURBO_DEFAULT$", ".env*"],
      "outputs": ["dist/**", ".next/**", "!.next/cache/**"]
    },
    "lint": {
      "dependsOn": ["^lint"]
    },
    "check-types": {
      "dependsOn": ["^check-types"]
    },
    "dev": {
      "cache": false,
      "persistent": true
    }{% if config.orm != "none" %},
    "db:push": {
      "cache": false
    },
    "db:studio": {
      "cache": false,
      "persistent": true
    }{% endif %}
  }
}
"#;

fn pwa() -> GeneratorModule {
    GeneratorModule::new("addon-pwa", Category::Addons, |c| c.has_addon(Addon::Pwa))
        .file_when(Workspace::Web, "src/app/manifest.ts", NEXT_MANIFEST, |c| {
            web_is(c, Frontend::Next)
        })
        .dev_deps_when(Workspace::Web, &["vite-plugin-pwa"], has_vite_web)
        .patch_when(
            Workspace::Web,
            "vite.config.ts",
            PatchOp::ensure_import(PWA_IMPORT),
            has_vite_web,
        )
        .patch_when(
            Workspace::Web,
            "vite.config.ts",
            PatchOp::insert_array_entry("plugins", PWA_PLUGIN),
            has_vite_web,
        )
}

fn tauri() -> GeneratorModule {
    GeneratorModule::new("addon-tauri", Category::Addons, |c| {
        c.has_addon(Addon::Tauri) && has_web(c)
    })
    .file(Workspace::Web, "src-tauri/tauri.conf.json", TAURI_CONF)
    .dev_deps(Workspace::Web, &["@tauri-apps/cli"])
    .script(Workspace::Web, "tauri", "tauri")
    .script(Workspace::Web, "desktop:dev", "tauri dev")
    .script(Workspace::Web, "desktop:build", "tauri build")
}

fn starlight() -> GeneratorModule {
    GeneratorModule::new("addon-starlight", Category::Addons, |c| {
        c.has_addon(Addon::Starlight)
    })
    .creates(Workspace::Docs)
    .file(Workspace::Docs, "package.json", DOCS_PACKAGE_JSON)
    .file(Workspace::Docs, "astro.config.mjs", STARLIGHT_CONFIG)
    .file(Workspace::Docs, "src/content/docs/index.mdx", STARLIGHT_INDEX)
    .deps(Workspace::Docs, &["astro", "@astrojs/starlight"])
    .script(Workspace::Docs, "dev", "astro dev --port 4321")
    .script(Workspace::Docs, "build", "astro build")
}

/// One docs site per project; Starlight wins when both are selected
fn fumadocs() -> GeneratorModule {
    GeneratorModule::new("addon-fumadocs", Category::Addons, |c| {
        c.has_addon(Addon::Fumadocs) && !c.has_addon(Addon::Starlight)
    })
    .creates(Workspace::Docs)
    .file(Workspace::Docs, "package.json", DOCS_PACKAGE_JSON)
    .file(Workspace::Docs, "source.config.ts", FUMADOCS_SOURCE_CONFIG)
    .file(Workspace::Docs, "next.config.mjs", FUMADOCS_NEXT_CONFIG)
    .file(Workspace::Docs, "content/docs/index.mdx", FUMADOCS_INDEX)
    .deps(
        Workspace::Docs,
        &["fumadocs-core", "fumadocs-ui", "fumadocs-mdx", "next", "react", "react-dom"],
    )
    .dev_deps(Workspace::Docs, &["typescript", "@types/react", "@types/node"])
    .script(Workspace::Docs, "dev", "next dev --port 4000")
    .script(Workspace::Docs, "build", "next build")
}

fn biome() -> GeneratorModule {
    GeneratorModule::new("addon-biome", Category::Addons, |c| c.has_addon(Addon::Biome))
        .file(Workspace::Root, "biome.json", BIOME_JSON)
        .dev_deps(Workspace::Root, &["@biomejs/biome"])
        .script(Workspace::Root, "check", "biome check --write .")
}

fn oxlint() -> GeneratorModule {
    GeneratorModule::new("addon-oxlint", Category::Addons, |c| c.has_addon(Addon::Oxlint))
        .file(Workspace::Root, ".oxlintrc.json", OXLINT_JSON)
        .dev_deps(Workspace::Root, &["oxlint"])
        .script(Workspace::Root, "lint", "oxlint")
}

fn husky() -> GeneratorModule {
    GeneratorModule::new("addon-husky", Category::Addons, |c| c.has_addon(Addon::Husky))
        .after(&["addon-biome", "addon-oxlint"])
        .file(Workspace::Root, ".husky/pre-commit", HUSKY_PRE_COMMIT)
        .dev_deps(Workspace::Root, &["husky", "lint-staged"])
        .script(Workspace::Root, "prepare", "husky")
        .patch_when(
            Workspace::Root,
            "package.json",
            PatchOp::json_set_if_absent(
                &["lint-staged", "*.{js,jsx,ts,tsx,json,jsonc}"],
                json!(["biome check --write --no-errors-on-unmatched"]),
            ),
            |c| c.has_addon(Addon::Biome),
        )
        .patch_when(
            Workspace::Root,
            "package.json",
            PatchOp::json_set_if_absent(&["lint-staged", "**/*.{js,jsx,ts,tsx}"], json!(["oxlint"])),
            |c| c.has_addon(Addon::Oxlint),
        )
}

fn turborepo() -> GeneratorModule {
    GeneratorModule::new("addon-turborepo", Category::Addons, |c| {
        c.has_addon(Addon::Turborepo)
    })
    .file(Workspace::Root, "turbo.json", TURBO_JSON)
    .dev_deps(Workspace::Root, &["turbo"])
    .script(Workspace::Root, "dev", "turbo dev")
    .script(Workspace::Root, "build", "turbo build")
    .script(Workspace::Root, "check-types", "turbo check-types")
    .script_when(Workspace::Root, "db:push", "turbo -F server db:push", |c| {
        c.orm != Orm::None
    })
    .script_when(Workspace::Root, "db:studio", "turbo -F server db:studio", |c| {
        c.orm != Orm::None
    })
}

pub(super) fn modules() -> Vec<GeneratorModule> {
    vec![
        pwa(),
        tauri(),
        starlight(),
        fumadocs(),
        biome(),
        oxlint(),
        husky(),
        turborepo(),
    ]
}
