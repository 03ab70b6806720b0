use super::has_web;
use crate::domain::value_objects::{Backend, Runtime, Workspace};
use crate::modules::{Category, GeneratorModule};

const SERVER_PACKAGE_JSON: &str = r#"{
  "name": "server",
  "version": "0.0.0",
  "private": true,
  "type": "module"
}
"#;

const SERVER_TSCONFIG: &str = r#"{
  "extends": "../../tsconfig.base.json",
  "compilerOptions": {
    "outDir": "dist",
    "types": [{% if config.runtime == "bun" %}"bun"{% elif config.runtime == "workers" %}"@cloudflare/workers-types"{% else %}"node"{% endif %}]
  },
  "include": ["src"]
}
"#;

const WRANGLER: &str = r#"{
  "name": "{{ project_name }}-server",
  "main": "src/index.ts",
  "compatibility_date": "2025-05-01",
  "compatibility_flags": ["nodejs_compat"]
}
"#;

const DEV_SCRIPT: &str = r#"{% if config.runtime == "workers" %}wrangler dev --port 3000{% elif config.runtime == "node" %}tsx watch src/index.ts{% else %}bun run --hot src/index.ts{% endif %}"#;

const HONO_INDEX: &str = r#"import { Hono } from "hono";
import { cors } from "hono/cors";
import { logger } from "hono/logger";
{% if config.runtime == "node" %}import { serve } from "@hono/node-server";
{% endif %}
const app = new Hono();

app.use(logger());
app.use("/*", cors({ origin: process.env.CORS_ORIGIN || "http://localhost:3001", credentials: true }));

app.get("/", (c) => c.text("OK"));

{% if config.runtime == "node" %}serve({ fetch: app.fetch, port: 3000 }, (info) => {
  console.log(`Server is running on http://localhost:${info.port}`);
});
{% else %}export default app;
{% endif %}"#;

const EXPRESS_INDEX: &str = r#"import cors from "cors";
import express from "express";

const app = express();

app.use(cors({ origin: process.env.CORS_ORIGIN || "http://localhost:3001", credentials: true }));
app.use(express.json());

app.get("/", (_req, res) => {
  res.status(200).send("OK");
});

app.listen(3000, () => {
  console.log("Server is running on http://localhost:3000");
});
"#;

const FASTIFY_INDEX: &str = r#"import Fastify from "fastify";
import fastifyCors from "@fastify/cors";

const app = Fastify({ logger: true });

await app.register(fastifyCors, {
  origin: process.env.CORS_ORIGIN || "http://localhost:3001",
  credentials: true,
});

app.get("/", async () => "OK");

await app.listen({ port: 3000 });
"#;

const ELYSIA_INDEX: &str = r#"import { Elysia } from "elysia";
import { cors } from "@elysiajs/cors";

const app = new Elysia()
  .use(cors({ origin: process.env.CORS_ORIGIN || "http://localhost:3001" }))
  .get("/", () => "OK")
  .listen(3000);

console.log(`Server is running on http://localhost:${app.server?.port}`);
"#;

const NEXT_SERVER_CONFIG: &str = r#"import type { NextConfig } from "next";

const nextConfig: NextConfig = {};

export default nextConfig;
"#;

const NEXT_SERVER_ROUTE: &str = r#"import { NextResponse } from "next/server";

export async function GET() {
  return NextResponse.json({ message: "OK" });
}
"#;

const CONVEX_PACKAGE_JSON: &str = r#"{
  "name": "@{{ project_name }}/backend",
  "version": "0.0.0",
  "private": true
}
"#;

const CONVEX_SCHEMA: &str = r#"import { defineSchema, defineTable } from "convex/server";
import { v } from "convex/values";

export default defineSchema({
{% if "todo" in config.examples %}  todos: defineTable({
    text: v.string(),
    completed: v.boolean(),
  }),
{% endif %}});
"#;

const CONVEX_HEALTH: &str = r#"import { query } from "./_generated/server";

export const get = query({
  handler: async () => "OK",
});
"#;

fn server(id: &'static str, backend: Backend, index: &'static str) -> GeneratorModule {
    let applies: crate::modules::Predicate = match backend {
        Backend::Express => |c| c.backend == Backend::Express,
        Backend::Fastify => |c| c.backend == Backend::Fastify,
        Backend::Elysia => |c| c.backend == Backend::Elysia,
        _ => |c| c.backend == Backend::Hono,
    };
    GeneratorModule::new(id, Category::Backend, applies)
        .creates(Workspace::Server)
        .file(Workspace::Server, "package.json", SERVER_PACKAGE_JSON)
        .file(Workspace::Server, "tsconfig.json", SERVER_TSCONFIG)
        .file(Workspace::Server, "src/index.ts", index)
        .dev_deps(Workspace::Server, &["typescript"])
        .dev_deps_when(Workspace::Server, &["@types/bun"], |c| c.runtime == Runtime::Bun)
        .dev_deps_when(Workspace::Server, &["tsx", "@types/node"], |c| {
            c.runtime == Runtime::Node
        })
        .script(Workspace::Server, "dev", DEV_SCRIPT)
        .script_when(Workspace::Server, "build", "tsc", |c| c.runtime == Runtime::Node)
        .env(Workspace::Server, "CORS_ORIGIN", "http://localhost:3001")
}

fn hono() -> GeneratorModule {
    server("server-hono", Backend::Hono, HONO_INDEX)
        .file_when(Workspace::Server, "wrangler.jsonc", WRANGLER, |c| {
            c.runtime == Runtime::Workers
        })
        .deps(Workspace::Server, &["hono"])
        .deps_when(Workspace::Server, &["@hono/node-server"], |c| c.runtime == Runtime::Node)
        .dev_deps_when(Workspace::Server, &["wrangler"], |c| c.runtime == Runtime::Workers)
}

fn express() -> GeneratorModule {
    server("server-express", Backend::Express, EXPRESS_INDEX)
        .deps(Workspace::Server, &["express", "cors"])
        .dev_deps(Workspace::Server, &["@types/express", "@types/cors"])
}

fn fastify() -> GeneratorModule {
    server("server-fastify", Backend::Fastify, FASTIFY_INDEX)
        .deps(Workspace::Server, &["fastify", "@fastify/cors"])
}

fn elysia() -> GeneratorModule {
    server("server-elysia", Backend::Elysia, ELYSIA_INDEX)
        .deps(Workspace::Server, &["elysia", "@elysiajs/cors"])
}

fn next() -> GeneratorModule {
    GeneratorModule::new("server-next", Category::Backend, |c| c.backend == Backend::Next)
        .creates(Workspace::Server)
        .file(Workspace::Server, "package.json", SERVER_PACKAGE_JSON)
        .file(Workspace::Server, "next.config.ts", NEXT_SERVER_CONFIG)
        .file(Workspace::Server, "src/app/route.ts", NEXT_SERVER_ROUTE)
        .deps(Workspace::Server, &["next", "react", "react-dom"])
        .dev_deps(Workspace::Server, &["typescript", "@types/node"])
        .script(Workspace::Server, "dev", "next dev --turbopack --port 3000")
        .script(Workspace::Server, "build", "next build")
        .env(Workspace::Server, "CORS_ORIGIN", "http://localhost:3001")
}

fn convex() -> GeneratorModule {
    GeneratorModule::new("backend-convex", Category::Backend, |c| c.backend == Backend::Convex)
        .creates(Workspace::Server)
        .file(Workspace::Server, "package.json", CONVEX_PACKAGE_JSON)
        .file(Workspace::Server, "convex/schema.ts", CONVEX_SCHEMA)
        .file(Workspace::Server, "convex/healthCheck.ts", CONVEX_HEALTH)
        .deps(Workspace::Server, &["convex"])
        .deps_when(Workspace::Web, &["convex"], has_web)
        .script(Workspace::Server, "dev", "convex dev")
        .script(Workspace::Server, "dev:setup", "convex dev --configure --until-success")
}

pub(super) fn modules() -> Vec<GeneratorModule> {
    vec![hono(), express(), fastify(), elysia(), next(), convex()]
}
